//! Configuration system for xmlinfer.
//!
//! Loads config from, in increasing priority:
//! 1. Global: ~/.config/xmlinfer/config.toml
//! 2. Per-project: .xmlinfer/config.toml
//! 3. An explicit `--config` file
//!
//! Command-line flags override all of them.
//!
//! Example config.toml:
//! ```toml
//! [output]
//! dir = "src/main/java"
//! package = "com.example.model"
//! backend = "java"
//!
//! [java]
//! accessors = true
//!
//! [rust]
//! derives = ["Debug", "Serialize", "Deserialize"]
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use xmlinfer_typegen::RenderOptions;

pub const DEFAULT_OUT_DIR: &str = "generated";
pub const DEFAULT_PACKAGE: &str = "generated";
pub const DEFAULT_BACKEND: &str = "java";

/// Where and how generated code is written.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
    pub package: Option<String>,
    pub backend: Option<String>,
}

/// Java backend settings.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct JavaConfig {
    /// Generate getters and setters.
    pub accessors: Option<bool>,
}

/// Rust backend settings.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RustConfig {
    pub derives: Option<Vec<String>>,
}

/// Root configuration structure. Unset fields fall through to lower layers.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct XmlinferConfig {
    pub output: OutputConfig,
    pub java: JavaConfig,
    pub rust: RustConfig,
}

impl XmlinferConfig {
    /// Load the global, project (under `root`) and explicit config layers.
    pub fn load(root: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(Self::global_config_path(), root, explicit)
    }

    pub(crate) fn load_from(
        global: Option<PathBuf>,
        root: &Path,
        explicit: Option<&Path>,
    ) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if let Some(global) = Self::load_optional(&global_path) {
                config = config.merge(global);
            }
        }

        let project_path = root.join(".xmlinfer").join("config.toml");
        if let Some(project) = Self::load_optional(&project_path) {
            config = config.merge(project);
        }

        // An explicitly requested file must exist and parse.
        if let Some(path) = explicit {
            config = config.merge(Self::load_file(path)?);
        }

        Ok(config)
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("xmlinfer").join("config.toml"))
    }

    /// Load config from a file path.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Missing files are skipped silently; broken ones with a warning.
    fn load_optional(path: &Path) -> Option<Self> {
        if !path.is_file() {
            return None;
        }
        match Self::load_file(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %format!("{:#}", e), "ignoring config");
                None
            }
        }
    }

    /// Merge another config into this one. Fields set in `other` win.
    pub fn merge(self, other: Self) -> Self {
        Self {
            output: OutputConfig {
                dir: other.output.dir.or(self.output.dir),
                package: other.output.package.or(self.output.package),
                backend: other.output.backend.or(self.output.backend),
            },
            java: JavaConfig {
                accessors: other.java.accessors.or(self.java.accessors),
            },
            rust: RustConfig {
                derives: other.rust.derives.or(self.rust.derives),
            },
        }
    }

    pub fn out_dir(&self) -> PathBuf {
        self.output
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    pub fn package(&self) -> String {
        self.output
            .package
            .clone()
            .unwrap_or_else(|| DEFAULT_PACKAGE.to_string())
    }

    pub fn backend(&self) -> String {
        self.output
            .backend
            .clone()
            .unwrap_or_else(|| DEFAULT_BACKEND.to_string())
    }

    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            package: self.package(),
            accessors: self.java.accessors.unwrap_or(defaults.accessors),
            derives: self.rust.derives.clone().unwrap_or(defaults.derives),
        }
    }
}
