//! First-letter case conversion for type and field names.
//!
//! Only the first character changes; `user_name` stays `user_name` apart from
//! its first letter. Backends that need real identifier casing do it
//! themselves.

/// `userName` -> `UserName`, `Item` -> `Item`.
pub fn upper_camel(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `UserName` -> `userName`, `item` -> `item`.
pub fn lower_camel(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_character_changes() {
        assert_eq!(upper_camel("userName"), "UserName");
        assert_eq!(lower_camel("userName"), "userName");
        assert_eq!(upper_camel("Item"), "Item");
        assert_eq!(lower_camel("Item"), "item");
        assert_eq!(upper_camel("MVCI_module"), "MVCI_module");
        assert_eq!(lower_camel("MVCI_module"), "mVCI_module");
    }

    #[test]
    fn empty_and_non_ascii() {
        assert_eq!(upper_camel(""), "");
        assert_eq!(lower_camel(""), "");
        assert_eq!(upper_camel("über"), "Über");
        assert_eq!(upper_camel("1st"), "1st");
    }
}
