//! Target-language spellings shared by the builders and rule tables.
//!
//! Each framework writes its tests in a different language, so the same
//! symbol (owner sentinel, contract name, proxy admin) has one spelling per
//! framework. Everything a generated test refers to is named here once.

/// Placeholder owner address used by every generated test.
pub const OWNER_SENTINEL: u64 = 42;

/// Nile (pytest) spellings.
pub mod nile {
    use super::OWNER_SENTINEL;

    pub const OWNER: &str = "OWNER";

    /// Upgradeable contracts are administered through the deployed proxy
    /// admin account fixture.
    pub const PROXY_ADMIN: &str = "admin.contract_address";

    pub fn owner_declaration() -> String {
        format!("{OWNER} = {OWNER_SENTINEL}")
    }

    pub fn short_string(value: &str) -> String {
        format!("str_to_felt(\"{value}\")")
    }

    pub fn name_declaration(name: &str) -> String {
        format!("NAME = {}", short_string(name))
    }

    pub fn symbol_declaration(symbol: &str) -> String {
        format!("SYMBOL = {}", short_string(symbol))
    }
}

/// Hardhat (starknet-hardhat-plugin, TypeScript) spellings.
pub mod hardhat {
    use super::OWNER_SENTINEL;

    pub const OWNER: &str = "OWNER";

    /// Premint recipient, bound to the owner sentinel.
    pub const RECIPIENT_FIELD: &str = "recipient: OWNER";

    pub const OWNER_FIELD: &str = "owner: OWNER";

    pub fn owner_declaration() -> String {
        format!("const {OWNER} = {OWNER_SENTINEL}")
    }

    pub fn short_string(value: &str) -> String {
        format!("starknet.shortStringToBigInt(\"{value}\")")
    }

    pub fn name_declaration(name: &str) -> String {
        format!("const NAME = {}", short_string(name))
    }

    pub fn symbol_declaration(symbol: &str) -> String {
        format!("const SYMBOL = {}", short_string(symbol))
    }

    /// Named constructor field, `field: SYMBOL`.
    pub fn field(name: &str, symbol: &str) -> String {
        format!("{name}: {symbol}")
    }
}
