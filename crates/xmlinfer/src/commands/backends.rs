//! Backends command - list registered output backends.

use std::process::ExitCode;
use xmlinfer_typegen::backends;

pub fn run() -> anyhow::Result<ExitCode> {
    let mut all = backends();
    all.sort_by_key(|b| b.name());

    for backend in all {
        println!(
            "{:<8} {:<8} .{}",
            backend.name(),
            backend.language(),
            backend.extension()
        );
    }
    Ok(ExitCode::SUCCESS)
}
