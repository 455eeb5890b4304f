//! Registry for code generation backends.

use crate::traits::Backend;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Global registry of backends.
static BACKENDS: RwLock<Vec<&'static dyn Backend>> = RwLock::new(Vec::new());
static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Register a custom backend.
///
/// Built-in backends are registered automatically on first use. A custom
/// backend with the same name as a built-in one is shadowed by it.
pub fn register_backend(backend: &'static dyn Backend) {
    init_builtin();
    BACKENDS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(backend);
}

/// Initialize built-in backends (called automatically on first use).
fn init_builtin() {
    INITIALIZED.get_or_init(|| {
        let mut backends = BACKENDS.write().unwrap_or_else(PoisonError::into_inner);

        #[cfg(feature = "backend-java")]
        {
            backends.push(&crate::output::java::JAVA_BACKEND);
        }

        #[cfg(feature = "backend-rust")]
        {
            backends.push(&crate::output::rust::RUST_BACKEND);
        }

        #[cfg(feature = "backend-json")]
        {
            backends.push(&crate::output::json::JSON_BACKEND);
        }
    });
}

/// Get a backend by name.
pub fn get_backend(name: &str) -> Option<&'static dyn Backend> {
    init_builtin();
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .find(|b| b.name() == name)
        .copied()
}

/// List all registered backends.
pub fn backends() -> Vec<&'static dyn Backend> {
    init_builtin();
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// List all registered backend names.
pub fn backend_names() -> Vec<&'static str> {
    init_builtin();
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .map(|b| b.name())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::TypeDef;
    use crate::traits::RenderOptions;

    struct UpperBackend;

    impl Backend for UpperBackend {
        fn name(&self) -> &'static str {
            "test-upper"
        }
        fn language(&self) -> &'static str {
            "text"
        }
        fn extension(&self) -> &'static str {
            "txt"
        }
        fn render(&self, def: &TypeDef, _options: &RenderOptions) -> String {
            def.name.to_uppercase()
        }
    }

    static UPPER: UpperBackend = UpperBackend;

    #[test]
    fn test_backend_lookup() {
        let names = backend_names();
        assert!(names.contains(&"java"));
        assert!(names.contains(&"rust"));
        assert!(names.contains(&"json"));
        assert_eq!(get_backend("java").map(|b| b.extension()), Some("java"));
        assert!(get_backend("cobol").is_none());
    }

    #[test]
    fn test_register_custom_backend() {
        register_backend(&UPPER);
        let backend = get_backend("test-upper").unwrap();
        let out = backend.render(&TypeDef::new("Root", "root"), &RenderOptions::default());
        assert_eq!(out, "ROOT");
        assert!(backends().iter().any(|b| b.name() == "test-upper"));
    }
}
