//! Identifier conversions: model identifiers to display names, column names to labels.

/// Separators accepted between path components of a model identifier.
const PATH_SEPARATORS: &[&str] = &["\\", "::", "/"];

/// Last path component of a model identifier.
/// e.g. "app\models\Product" -> "Product", "crate::models::Order" -> "Order"
pub fn short_name(identifier: &str) -> &str {
    let mut tail = identifier;
    for sep in PATH_SEPARATORS {
        if let Some((_, rest)) = tail.rsplit_once(sep) {
            tail = rest;
        }
    }
    tail
}

/// Turn a snake_case column name into a label: underscores become spaces and the
/// first letter of every word is upper-cased. The rest of each word is kept as is.
/// e.g. "created_at" -> "Created At", "user_ID" -> "User ID"
pub fn to_title_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if c == '_' || c == ' ' {
            out.push(' ');
            capitalize_next = true;
        } else if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("app\\models\\Product", "Product")]
    #[case("crate::models::Order", "Order")]
    #[case("models/Invoice", "Invoice")]
    #[case("Customer", "Customer")]
    fn short_name_takes_last_component(#[case] identifier: &str, #[case] expected: &str) {
        assert_eq!(short_name(identifier), expected);
    }

    #[rstest]
    #[case("name", "Name")]
    #[case("created_at", "Created At")]
    #[case("user_ID", "User ID")]
    #[case("a__b", "A  B")]
    #[case("", "")]
    fn title_words(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_title_words(input), expected);
    }
}
