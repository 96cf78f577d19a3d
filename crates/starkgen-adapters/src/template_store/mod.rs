//! Test template store adapters.

mod builtin;

pub use builtin::BuiltinTemplateStore;
