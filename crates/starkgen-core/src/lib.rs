//! starkgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the starkgen
//! Starknet project generator: the rules that turn a token contract's feature
//! configuration into the declarations and constructor calldata its generated
//! test needs.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          starkgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: TemplateStore, Renderer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    starkgen-adapters (Infrastructure)   │
//! │  (BuiltinTemplateStore, SimpleRenderer) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Rule tables, builders, resolver)     │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use starkgen_core::domain::{FeatureConfiguration, Framework, TokenStandard, resolve_scaffold};
//!
//! let features = FeatureConfiguration::customized("Gold")
//!     .with_premint("500")
//!     .with_mintable(true);
//!
//! let scaffold = resolve_scaffold(TokenStandard::Erc20, Framework::Nile, &features).unwrap();
//! assert_eq!(scaffold.constructor_arguments, "OWNER, OWNER");
//! ```

// Domain layer (pure scaffold rules)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService, TemplateInfo,
        ports::{TemplateRenderer, TestTemplateStore},
    };
    pub use crate::domain::{
        FeatureConfiguration, Framework, GeneratedScaffold, PlannedContract, ProjectRequest,
        RenderedTestFile, TestTemplate, TokenStandard, resolve_scaffold,
    };
    pub use crate::error::{StarkgenError, StarkgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
