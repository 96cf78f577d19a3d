//! Test-file templates that ship with starkgen.
//!
//! One template per supported (framework, standard) pair. Each body carries
//! the two scaffold placeholders; [`all_templates`] is the single entry point
//! the stores use.
//!
//! The Nile templates are pytest modules run against a local Starknet state.
//! The Hardhat templates are mocha suites for the Starknet Hardhat plugin.

use std::path::PathBuf;

use starkgen_core::domain::{Framework, TemplateSource, TestTemplate, TokenStandard};

// ── Public API ────────────────────────────────────────────────────────────────

/// Every built-in template, in (framework, standard) order.
pub fn all_templates() -> Vec<TestTemplate> {
    let mut templates = Vec::with_capacity(4);
    for framework in Framework::ALL {
        for standard in TokenStandard::ALL {
            if let Some(body) = body_for(framework, standard) {
                templates.push(TestTemplate::new(
                    framework,
                    standard,
                    test_path(framework, standard),
                    TemplateSource::Static(body),
                ));
            }
        }
    }
    templates
}

/// Where a framework expects the test file of a contract, relative to the
/// project root.
pub fn test_path(framework: Framework, standard: TokenStandard) -> PathBuf {
    match framework {
        Framework::Nile | Framework::Protostar => {
            PathBuf::from(format!("tests/test_{}.py", standard.contract_name()))
        }
        Framework::Hardhat => PathBuf::from(format!("test/{}.test.ts", standard.as_str())),
    }
}

fn body_for(framework: Framework, standard: TokenStandard) -> Option<&'static str> {
    match (framework, standard) {
        (Framework::Nile, TokenStandard::Erc20) => Some(NILE_ERC20),
        (Framework::Nile, TokenStandard::Erc721) => Some(NILE_ERC721),
        (Framework::Hardhat, TokenStandard::Erc20) => Some(HARDHAT_ERC20),
        (Framework::Hardhat, TokenStandard::Erc721) => Some(HARDHAT_ERC721),
        (Framework::Protostar, _) => None,
    }
}

// ── Nile ──────────────────────────────────────────────────────────────────────

const NILE_ERC20: &str = r#""""ERC20.cairo test file."""
import pytest
from starkware.starknet.testing.starknet import Starknet
from utils import (
    assert_revert, cached_contract, contract_path, get_contract_def,
    to_uint, assert_event_emitted, str_to_felt, Signer
)

signer = Signer(123456789987654321)

# testing vars
OWNER = 42
<%= testingVars %>

@pytest.fixture
def contract_defs():
    account_def = get_contract_def('openzeppelin/account/Account.cairo')
    erc20_def = get_contract_def('ERC20.cairo')
    return account_def, erc20_def

@pytest.fixture
async def erc20_init(contract_defs):
    account_def, erc20_def = contract_defs
    starknet = await Starknet.empty()
    admin = await starknet.deploy(
        contract_def=account_def,
        constructor_calldata=[signer.public_key]
    )
    erc20 = await starknet.deploy(
        contract_def=erc20_def,
        constructor_calldata=[<%= constructorCalldata %>]
    )
    return (
        starknet.state,
        admin,
        erc20,
    )

@pytest.fixture
def erc20_factory(contract_defs, erc20_init):
    _, erc20_def = contract_defs
    state, _, erc20 = erc20_init
    _state = state.copy()
    erc20 = cached_contract(_state, erc20_def, erc20)
    return erc20

@pytest.mark.asyncio
async def test_initial_data(erc20_factory):
    erc20 = erc20_factory
    execution_info = await erc20.name().call()
    assert execution_info.result.name == NAME
"#;

const NILE_ERC721: &str = r#""""ERC721.cairo test file."""
import pytest
from starkware.starknet.testing.starknet import Starknet
from utils import (
    assert_revert, cached_contract, contract_path, get_contract_def,
    to_uint, assert_event_emitted, str_to_felt, Signer
)


# testing vars
<%= testingVars %>

@pytest.fixture
def contract_defs():
    erc721_def = get_contract_def('ERC721.cairo')
    return erc721_def

@pytest.fixture
async def erc721_init(contract_defs):
    erc721_def = contract_defs
    starknet = await Starknet.empty()
    erc721 = await starknet.deploy(
        contract_def=erc721_def,
        constructor_calldata=[<%= constructorCalldata %>]
    )
    return (
        starknet.state,
        erc721,
    )

@pytest.fixture
def erc721_factory(contract_defs, erc721_init):
    erc721_def = contract_defs
    state, erc721 = erc721_init
    _state = state.copy()
    erc721 = cached_contract(_state, erc721_def, erc721)
    return erc721

@pytest.mark.asyncio
async def test_initial_data(erc721_factory):
    erc721 = erc721_factory
    execution_info = await erc721.name().call()
    assert execution_info.result.name == NAME
"#;

// ── Hardhat ───────────────────────────────────────────────────────────────────

const HARDHAT_ERC20: &str = r#"import { expect } from "chai";
import { starknet } from "hardhat";
import { StarknetContract, StarknetContractFactory } from "hardhat/types/runtime";

// testing vars
<%= testingVars %>

describe("ERC20", function () {
  this.timeout(300_000);

  // Owner sentinel; shadows a module-level declaration when the scaffold has one.
  const OWNER = 42;
  let contract: StarknetContract;

  before(async function () {
    const factory: StarknetContractFactory = await starknet.getContractFactory("ERC20");
    contract = await factory.deploy({ <%= constructorCalldata %> });
  });

  it("should expose the configured name", async function () {
    const { name } = await contract.call("name");
    expect(name).to.deep.equal(NAME);
  });
});
"#;

const HARDHAT_ERC721: &str = r#"import { expect } from "chai";
import { starknet } from "hardhat";
import { StarknetContract, StarknetContractFactory } from "hardhat/types/runtime";

// testing vars
<%= testingVars %>

describe("ERC721", function () {
  this.timeout(300_000);

  let contract: StarknetContract;

  before(async function () {
    const factory: StarknetContractFactory = await starknet.getContractFactory("ERC721");
    contract = await factory.deploy({ <%= constructorCalldata %> });
  });

  it("should expose the configured name", async function () {
    const { name } = await contract.call("name");
    expect(name).to.deep.equal(NAME);
  });
});
"#;

// ── Tests ─────────────────────────────────────────────────────────────────────
