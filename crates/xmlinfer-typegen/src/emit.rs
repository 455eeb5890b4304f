//! Writing rendered types to disk.
//!
//! A failure to create the output directory aborts the run. A failure to
//! write one type is logged and recorded in the [`EmitReport`], and the
//! remaining types are still written.

use crate::ir::{Schema, TypeDef};
use crate::output::resolve_names;
use crate::traits::{Backend, RenderOptions};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {type_name} to {}: {source}", path.display())]
    Write {
        type_name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of [`Emitter::emit_schema`].
#[derive(Debug, Default)]
pub struct EmitReport {
    pub written: Vec<PathBuf>,
    pub failures: Vec<EmitError>,
}

impl EmitReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Renders types through a backend into `out_dir/<package dir>/`.
pub struct Emitter<'a> {
    backend: &'a dyn Backend,
    out_dir: PathBuf,
    options: RenderOptions,
}

impl<'a> Emitter<'a> {
    pub fn new(backend: &'a dyn Backend, out_dir: impl Into<PathBuf>, options: RenderOptions) -> Self {
        Self {
            backend,
            out_dir: out_dir.into(),
            options,
        }
    }

    /// Directory the files land in.
    pub fn target_dir(&self) -> PathBuf {
        self.out_dir.join(self.backend.package_dir(&self.options.package))
    }

    /// Create the target directory.
    pub fn prepare(&self) -> Result<PathBuf, EmitError> {
        let dir = self.target_dir();
        std::fs::create_dir_all(&dir).map_err(|source| EmitError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(dir)
    }

    /// Render and write one type. The target directory must exist.
    pub fn emit(&self, def: &TypeDef) -> Result<PathBuf, EmitError> {
        let path = self.path_for(def);
        let code = self.backend.render(def, &self.options);
        write_file(&path, &code).map_err(|source| EmitError::Write {
            type_name: def.name.clone(),
            path: path.clone(),
            source,
        })?;
        tracing::debug!(type_name = %def.name, path = %path.display(), "emitted type");
        Ok(path)
    }

    /// File a type is written to.
    pub fn path_for(&self, def: &TypeDef) -> PathBuf {
        let file = format!("{}.{}", self.backend.file_stem(def), self.backend.extension());
        self.target_dir().join(file)
    }

    /// Emit every type in order, then the backend's index file if it has one.
    ///
    /// Types are first renamed through [`resolve_names`] so no two of them
    /// share a file. A type whose file was already written in this run is
    /// recorded as a failure rather than overwriting it.
    pub fn emit_schema(&self, schema: &Schema) -> Result<EmitReport, EmitError> {
        let dir = self.prepare()?;
        let schema = &resolve_names(self.backend, schema);
        let mut report = EmitReport::default();
        let mut claimed = HashSet::new();

        for def in &schema.definitions {
            let path = self.path_for(def);
            if !claimed.insert(path.clone()) {
                let e = already_written(def.name.clone(), path);
                tracing::error!(type_name = %def.name, error = %e, "failed to emit type");
                report.failures.push(e);
                continue;
            }
            match self.emit(def) {
                Ok(path) => report.written.push(path),
                Err(e) => {
                    tracing::error!(type_name = %def.name, error = %e, "failed to emit type");
                    report.failures.push(e);
                }
            }
        }

        if let Some((file, contents)) = self.backend.render_index(schema, &self.options) {
            let path = dir.join(&file);
            if !claimed.insert(path.clone()) {
                let e = already_written(file, path);
                tracing::error!(error = %e, "failed to write index");
                report.failures.push(e);
            } else {
                match write_file(&path, &contents) {
                    Ok(()) => report.written.push(path),
                    Err(source) => {
                        tracing::error!(path = %path.display(), error = %source, "failed to write index");
                        report.failures.push(EmitError::Write {
                            type_name: file,
                            path,
                            source,
                        });
                    }
                }
            }
        }

        tracing::info!(
            backend = self.backend.name(),
            written = report.written.len(),
            failed = report.failures.len(),
            dir = %dir.display(),
            "emission finished"
        );
        Ok(report)
    }
}

fn already_written(type_name: String, path: PathBuf) -> EmitError {
    EmitError::Write {
        type_name,
        path,
        source: std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "file already written for another type",
        ),
    }
}

fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    std::fs::write(path, contents)
}
