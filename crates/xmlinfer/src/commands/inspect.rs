//! Inspect command - show the inferred schema.

use anyhow::Context;
use clap::Args;
use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use xmlinfer_typegen::ir::{FieldKind, Schema, Type};
use xmlinfer_typegen::{infer_schema, read_xml};

/// Inspect command arguments
#[derive(Args)]
pub struct InspectArgs {
    /// Sample XML document (- for stdin)
    pub input: PathBuf,

    /// Output the schema as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InspectArgs) -> anyhow::Result<ExitCode> {
    let document = read_xml(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let schema = infer_schema(&document);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schema)?);
    } else {
        print!("{}", describe(&schema));
    }
    Ok(ExitCode::SUCCESS)
}

/// One block per type, one line per field.
pub fn describe(schema: &Schema) -> String {
    let mut out = String::new();
    for def in &schema.definitions {
        let _ = writeln!(out, "{} <{}>", def.name, def.source_name);
        for field in &def.fields {
            let ty = match &field.ty {
                Type::Text => "text",
                Type::Ref(name) => name.as_str(),
            };
            let origin = match field.kind {
                FieldKind::Element => format!("<{}>", field.source_name),
                FieldKind::Attribute => format!("@{}", field.source_name),
                FieldKind::Content => "#text".to_string(),
            };
            let _ = writeln!(out, "  {}: {}  {}", field.name, ty, origin);
        }
    }
    out
}
