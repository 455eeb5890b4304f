//! JSON dump of the IR, one file per type plus `schema.json`.

use crate::ir::{Schema, TypeDef};
use crate::traits::{Backend, RenderOptions};
use serde::Serialize;

/// JSON backend for the registry.
pub struct JsonBackend;

/// Static instance for registry.
pub static JSON_BACKEND: JsonBackend = JsonBackend;

impl Backend for JsonBackend {
    fn name(&self) -> &'static str {
        "json"
    }

    fn language(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, def: &TypeDef, _options: &RenderOptions) -> String {
        to_pretty_json(def)
    }

    fn reserved_keys(&self) -> &'static [&'static str] {
        &["schema"]
    }

    fn render_index(&self, schema: &Schema, _options: &RenderOptions) -> Option<(String, String)> {
        Some(("schema.json".to_string(), to_pretty_json(schema)))
    }
}

/// IR types are plain strings, vectors and unit enums, so serializing them
/// cannot fail.
fn to_pretty_json<T: Serialize>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).expect("IR types always serialize to JSON");
    json.push('\n');
    json
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Field, FieldKind, Type};

    #[test]
    fn renders_type_as_json() {
        let def = TypeDef::new("B", "b")
            .with_field(Field::attribute("foo", "foo"))
            .with_field(Field::content("b", "b"));
        let out = JSON_BACKEND.render(&def, &RenderOptions::default());

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "B");
        assert_eq!(value["fields"][0]["kind"], "attribute");
        assert_eq!(value["fields"][1]["kind"], "content");
        assert_eq!(value["fields"][1]["ty"], "text");
    }

    #[test]
    fn index_round_trips_schema() {
        let mut schema = Schema::new();
        schema.add(
            TypeDef::new("Root", "root").with_field(Field::element(
                "a",
                Type::Ref("A".into()),
                "a",
            )),
        );

        let (file, index) = JSON_BACKEND
            .render_index(&schema, &RenderOptions::default())
            .unwrap();
        assert_eq!(file, "schema.json");

        let parsed: Schema = serde_json::from_str(&index).unwrap();
        assert_eq!(parsed, schema);
        assert_eq!(parsed.definitions[0].fields[0].kind, FieldKind::Element);
    }

    #[test]
    fn type_named_schema_does_not_replace_the_index() {
        let mut schema = Schema::new();
        schema.add(
            TypeDef::new("Root", "root")
                .with_field(Field::element("schema", Type::Ref("Schema".into()), "schema")),
        );
        schema.add(TypeDef::new("Schema", "schema").with_field(Field::content("schema", "schema")));

        let out = JSON_BACKEND.render_all(&schema, &RenderOptions::default());
        assert!(out.contains("// Schema1.json\n"));
        assert!(!out.contains("// Schema.json\n"));
        assert_eq!(out.matches("// schema.json\n").count(), 1);
        assert!(out.contains("\"ref\": \"Schema1\""));
        assert!(out.ends_with("}\n"));
    }
}
