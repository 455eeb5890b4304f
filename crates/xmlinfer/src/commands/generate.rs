//! Generate command - infer types from a sample document and emit code.

use crate::config::{JavaConfig, OutputConfig, XmlinferConfig};
use anyhow::{Context, anyhow};
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;
use xmlinfer_typegen::{Emitter, backend_names, get_backend, infer_schema, read_xml};

/// Generate command arguments
#[derive(Args)]
pub struct GenerateArgs {
    /// Sample XML document (- for stdin)
    pub input: PathBuf,

    /// Output directory (default: generated)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Package or module path for generated types
    #[arg(short, long)]
    pub package: Option<String>,

    /// Output backend: java, rust, json
    #[arg(short, long)]
    pub backend: Option<String>,

    /// Print generated code to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Skip getters and setters in Java output
    #[arg(long)]
    pub no_accessors: bool,
}

impl GenerateArgs {
    /// Flags given on the command line, as the topmost config layer.
    fn overrides(&self) -> XmlinferConfig {
        XmlinferConfig {
            output: OutputConfig {
                dir: self.output.clone(),
                package: self.package.clone(),
                backend: self.backend.clone(),
            },
            java: JavaConfig {
                accessors: self.no_accessors.then_some(false),
            },
            ..Default::default()
        }
    }
}

pub fn run(args: GenerateArgs, config: XmlinferConfig) -> anyhow::Result<ExitCode> {
    let config = config.merge(args.overrides());

    let name = config.backend();
    let backend = get_backend(&name).ok_or_else(|| {
        anyhow!(
            "unknown backend '{}' (available: {})",
            name,
            backend_names().join(", ")
        )
    })?;

    let document = read_xml(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let schema = infer_schema(&document);
    let options = config.render_options();

    if args.stdout {
        print!("{}", backend.render_all(&schema, &options));
        return Ok(ExitCode::SUCCESS);
    }

    let emitter = Emitter::new(backend, config.out_dir(), options);
    let report = emitter.emit_schema(&schema)?;

    for path in &report.written {
        eprintln!("Generated {}", path.display());
    }

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "{} of {} types failed:",
            report.failures.len(),
            schema.len()
        );
        for failure in &report.failures {
            eprintln!("  {}", failure);
        }
        Ok(ExitCode::FAILURE)
    }
}
