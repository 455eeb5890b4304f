//! Output backends for code generation.
//!
//! Each backend renders one IR [`TypeDef`](crate::ir::TypeDef) at a time.
//! All backends implement the [`Backend`](crate::traits::Backend) trait for
//! uniform access via the registry.

use crate::ir::{Schema, Type};
use crate::traits::Backend;
use std::collections::{HashMap, HashSet};

// Java beans with Jackson XML annotations
#[cfg(feature = "backend-java")]
pub mod java;

#[cfg(feature = "backend-java")]
pub use java::{JavaBackend, generate_java_class};

// Rust structs with serde (quick-xml conventions)
#[cfg(feature = "backend-rust")]
pub mod rust;

#[cfg(feature = "backend-rust")]
pub use rust::{RustBackend, generate_rust_struct};

// Raw IR as JSON
#[cfg(feature = "backend-json")]
pub mod json;

#[cfg(feature = "backend-json")]
pub use json::JsonBackend;

/// Rename types whose output names would collide.
///
/// Inferred type names are unique, but a backend may fold distinct names
/// together (`A-b` and `A.b` both sanitize to `A_b`). Walking the schema in
/// order, each type keeps its name unless one of its
/// [`name_keys`](Backend::name_keys) is already taken; then it gets the
/// first free numeric suffix, the same way repeated tags do. References are
/// rewritten to match.
pub fn resolve_names<B: Backend + ?Sized>(backend: &B, schema: &Schema) -> Schema {
    let existing: HashSet<&str> = schema.type_names().into_iter().collect();
    let mut taken: HashSet<String> = backend
        .reserved_keys()
        .iter()
        .map(|k| k.to_string())
        .collect();
    let mut renames: HashMap<String, String> = HashMap::new();

    for def in &schema.definitions {
        let mut candidate = def.name.clone();
        let mut count = 0;
        loop {
            let keys = backend.name_keys(&candidate);
            let clashes_with_other = candidate != def.name && existing.contains(candidate.as_str());
            if !clashes_with_other && keys.iter().all(|k| !taken.contains(k)) {
                taken.extend(keys);
                break;
            }
            count += 1;
            candidate = format!("{}{}", def.name, count);
        }

        if candidate != def.name {
            tracing::warn!(
                backend = backend.name(),
                type_name = %def.name,
                renamed = %candidate,
                "output name already taken, renaming type"
            );
            renames.insert(def.name.clone(), candidate);
        }
    }

    let mut resolved = schema.clone();
    if renames.is_empty() {
        return resolved;
    }
    for def in &mut resolved.definitions {
        if let Some(name) = renames.get(&def.name) {
            def.name = name.clone();
        }
        for field in &mut def.fields {
            if let Type::Ref(target) = &mut field.ty {
                if let Some(name) = renames.get(target.as_str()) {
                    *target = name.clone();
                }
            }
        }
    }
    resolved
}

/// Turn an inferred name into a valid identifier.
///
/// Characters outside `[A-Za-z0-9_]` become `_`, a leading digit gets a `_`
/// prefix. Keyword handling is left to the caller.
#[cfg(any(feature = "backend-java", feature = "backend-rust"))]
pub(crate) fn sanitize_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Field, TypeDef};
    use crate::traits::RenderOptions;

    /// Keys on the identifier form, like the code backends do.
    struct SanitizingBackend;

    impl Backend for SanitizingBackend {
        fn name(&self) -> &'static str {
            "test-sanitizing"
        }
        fn language(&self) -> &'static str {
            "text"
        }
        fn extension(&self) -> &'static str {
            "txt"
        }
        fn render(&self, def: &TypeDef, _options: &RenderOptions) -> String {
            def.name.clone()
        }
        fn name_keys(&self, type_name: &str) -> Vec<String> {
            let ident: String = type_name
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect();
            vec![ident.to_lowercase()]
        }
        fn reserved_keys(&self) -> &'static [&'static str] {
            &["index"]
        }
    }

    fn folded_schema() -> Schema {
        let mut schema = Schema::new();
        schema.add(
            TypeDef::new("Root", "root")
                .with_field(Field::element("a-b", Type::Ref("A-b".into()), "a-b"))
                .with_field(Field::element("a.b", Type::Ref("A.b".into()), "a.b")),
        );
        schema.add(TypeDef::new("A-b", "a-b"));
        schema.add(TypeDef::new("A.b", "a.b"));
        schema
    }

    #[test]
    fn folded_names_get_suffixes() {
        let resolved = resolve_names(&SanitizingBackend, &folded_schema());
        assert_eq!(resolved.type_names(), vec!["Root", "A-b", "A.b1"]);

        let root = &resolved.definitions[0];
        assert_eq!(root.fields[0].ty, Type::Ref("A-b".into()));
        assert_eq!(root.fields[1].ty, Type::Ref("A.b1".into()));
        // XML names are untouched.
        assert_eq!(resolved.definitions[2].source_name, "a.b");
        assert_eq!(root.fields[1].source_name, "a.b");
    }

    #[test]
    fn suffix_skips_names_of_other_types() {
        let mut schema = folded_schema();
        schema.add(TypeDef::new("A.b1", "a.b1"));

        let resolved = resolve_names(&SanitizingBackend, &schema);
        assert_eq!(resolved.type_names(), vec!["Root", "A-b", "A.b2", "A.b1"]);
    }

    #[test]
    fn reserved_keys_are_avoided() {
        let mut schema = Schema::new();
        schema.add(TypeDef::new("Index", "index"));

        let resolved = resolve_names(&SanitizingBackend, &schema);
        assert_eq!(resolved.type_names(), vec!["Index1"]);
    }

    #[test]
    fn distinct_names_are_unchanged() {
        let mut schema = Schema::new();
        schema.add(
            TypeDef::new("Root", "root").with_field(Field::element("a", Type::Ref("A".into()), "a")),
        );
        schema.add(TypeDef::new("A", "a"));
        schema.add(TypeDef::new("A1", "a"));
        assert_eq!(resolve_names(&SanitizingBackend, &schema), schema);
    }
}

#[cfg(all(test, any(feature = "backend-java", feature = "backend-rust")))]
mod identifier_tests {
    use super::*;

    #[test]
    fn sanitize_replaces_invalid_characters() {
        assert_eq!(sanitize_identifier("user-name"), "user_name");
        assert_eq!(sanitize_identifier("a.b"), "a_b");
        assert_eq!(sanitize_identifier("1st"), "_1st");
        assert_eq!(sanitize_identifier(""), "_");
        assert_eq!(sanitize_identifier("Item1"), "Item1");
    }
}
