//! Traits for code generation backends.

use crate::ir::{Schema, TypeDef};
use std::path::PathBuf;

/// Settings shared by all backends; each backend reads what applies to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Target package / namespace (e.g. `com.example.model`).
    pub package: String,
    /// Generate getters and setters (Java).
    pub accessors: bool,
    /// Derives added to every struct (Rust).
    pub derives: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            package: "generated".to_string(),
            accessors: true,
            derives: ["Debug", "Clone", "Serialize", "Deserialize"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl RenderOptions {
    pub fn with_package(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Default::default()
        }
    }
}

/// A code generation backend.
///
/// Backends render one inferred [`TypeDef`] at a time; the
/// [`Emitter`](crate::emit::Emitter) decides where each rendering lands.
///
/// # Implementing Custom Backends
///
/// ```ignore
/// use xmlinfer_typegen::{Backend, RenderOptions, ir::TypeDef, register_backend};
///
/// struct KotlinBackend;
///
/// impl Backend for KotlinBackend {
///     fn name(&self) -> &'static str { "kotlin" }
///     fn language(&self) -> &'static str { "kotlin" }
///     fn extension(&self) -> &'static str { "kt" }
///     fn render(&self, def: &TypeDef, options: &RenderOptions) -> String { /* ... */ }
/// }
///
/// // Register before first use
/// register_backend(&KotlinBackend);
/// ```
pub trait Backend: Send + Sync {
    /// Unique backend identifier (e.g., "java", "rust").
    fn name(&self) -> &'static str;

    /// Target language.
    fn language(&self) -> &'static str;

    /// File extension for generated code, without the dot.
    fn extension(&self) -> &'static str;

    /// Render one type definition as a complete source file.
    fn render(&self, def: &TypeDef, options: &RenderOptions) -> String;

    /// File name (without extension) for a rendered type.
    fn file_stem(&self, def: &TypeDef) -> String {
        def.name.clone()
    }

    /// Keys a type name occupies in the output (file stems, identifiers).
    ///
    /// Two types sharing a key would overwrite each other's file or clash as
    /// identifiers, so [`resolve_names`](crate::output::resolve_names) keeps
    /// keys unique across a schema. Keys are lowercased because file systems
    /// may be case-insensitive.
    fn name_keys(&self, type_name: &str) -> Vec<String> {
        vec![type_name.to_lowercase()]
    }

    /// Keys taken before any type is placed, such as the index file's stem.
    fn reserved_keys(&self) -> &'static [&'static str] {
        &[]
    }

    /// Directory, relative to the output root, that holds the package.
    fn package_dir(&self, package: &str) -> PathBuf {
        package.split('.').filter(|s| !s.is_empty()).collect()
    }

    /// Optional extra file tying the types together, as `(file name, contents)`.
    fn render_index(&self, _schema: &Schema, _options: &RenderOptions) -> Option<(String, String)> {
        None
    }

    /// Render every type into one string, for previews on stdout.
    fn render_all(&self, schema: &Schema, options: &RenderOptions) -> String {
        let schema = &crate::output::resolve_names(self, schema);
        let mut out = String::new();
        for def in &schema.definitions {
            out.push_str(&format!(
                "// {}.{}\n",
                self.file_stem(def),
                self.extension()
            ));
            out.push_str(&self.render(def, options));
            out.push('\n');
        }
        if let Some((file, index)) = self.render_index(schema, options) {
            out.push_str(&format!("// {}\n", file));
            out.push_str(&index);
        }
        out
    }
}
