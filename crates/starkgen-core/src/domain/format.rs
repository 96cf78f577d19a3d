//! Formatting primitives shared by every scaffold builder.
//!
//! Items are joined verbatim. Callers guarantee each item is already valid
//! target-language syntax; nothing is quoted or escaped here.

/// Separator between constructor arguments.
pub const ARGUMENT_SEPARATOR: &str = ", ";

/// Join constructor arguments with `", "`.
pub fn join_arguments<S: AsRef<str>>(items: &[S]) -> String {
    join(items, ARGUMENT_SEPARATOR)
}

/// Join declaration lines with a newline.
pub fn join_lines<S: AsRef<str>>(items: &[S]) -> String {
    join(items, "\n")
}

fn join<S: AsRef<str>>(items: &[S], separator: &str) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn empty_sequences_join_to_empty_string() {
        assert_eq!(join_arguments(&NONE), "");
        assert_eq!(join_lines(&NONE), "");
    }

    #[test]
    fn single_item_has_no_separator() {
        assert_eq!(join_arguments(&["a"]), "a");
        assert_eq!(join_lines(&["a"]), "a");
    }

    #[test]
    fn items_are_joined_in_order() {
        assert_eq!(join_arguments(&["NAME", "SYMBOL", "OWNER"]), "NAME, SYMBOL, OWNER");
        assert_eq!(join_lines(&["A = 1", "B = 2"]), "A = 1\nB = 2");
    }

    #[test]
    fn owned_strings_are_accepted() {
        let items = vec![String::from("x"), String::from("y")];
        assert_eq!(join_arguments(&items), "x, y");
    }

    #[test]
    fn items_are_not_escaped() {
        assert_eq!(join_arguments(&["\"a, b\"", "*C"]), "\"a, b\", *C");
    }
}
