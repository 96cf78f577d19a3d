//! Standard-specific scaffold builders.
//!
//! One free function per token standard. Each takes the framework and the
//! feature configuration and returns the declaration block plus argument
//! list. There is no shared base: the resolver dispatches on the standard.

pub mod erc20;
pub mod erc721;

pub use erc20::build_erc20_scaffold;
pub use erc721::build_erc721_scaffold;
