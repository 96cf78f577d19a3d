//! Builder output: the two text fragments a generated test needs.

use serde::Serialize;

use crate::domain::format::{join_arguments, join_lines};

/// Variable declarations plus constructor arguments for one contract.
///
/// Both strings are plain target-language text, ready to be spliced into a
/// test-file template. The scaffold has no identity of its own; it is handed
/// to the emitter and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GeneratedScaffold {
    pub variable_declarations: String,
    pub constructor_arguments: String,
}

impl GeneratedScaffold {
    pub fn new(
        variable_declarations: impl Into<String>,
        constructor_arguments: impl Into<String>,
    ) -> Self {
        Self {
            variable_declarations: variable_declarations.into(),
            constructor_arguments: constructor_arguments.into(),
        }
    }

    /// Join declaration lines and argument items with the shared primitives.
    pub fn from_parts<D, A>(declarations: &[D], arguments: &[A]) -> Self
    where
        D: AsRef<str>,
        A: AsRef<str>,
    {
        Self {
            variable_declarations: join_lines(declarations),
            constructor_arguments: join_arguments(arguments),
        }
    }

    /// Declaration block split back into lines.
    pub fn declaration_lines(&self) -> impl Iterator<Item = &str> {
        self.variable_declarations.lines()
    }

    /// Argument list split back into items.
    pub fn argument_items(&self) -> impl Iterator<Item = &str> {
        self.constructor_arguments
            .split(", ")
            .filter(|item| !item.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_joins_with_primitives() {
        let scaffold = GeneratedScaffold::from_parts(&["A = 1", "B = 2"], &["A", "B"]);
        assert_eq!(scaffold.variable_declarations, "A = 1\nB = 2");
        assert_eq!(scaffold.constructor_arguments, "A, B");
    }

    #[test]
    fn empty_arguments_have_no_items() {
        let scaffold = GeneratedScaffold::from_parts(&["A = 1"], &[] as &[&str]);
        assert_eq!(scaffold.argument_items().count(), 0);
        assert_eq!(scaffold.declaration_lines().count(), 1);
    }
}
