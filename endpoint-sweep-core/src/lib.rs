// endpoint-sweep-core/src/lib.rs

// declare modules
pub mod patterns;
pub mod report;

// re-export key items for external use by front-end crates
pub use anyhow::Result;
pub use clap::Parser;
pub use console::style;

pub use crate::patterns::{DEBUG_ENDPOINT_PATTERNS, PatternCatalog};
pub use crate::report::{emit_report, report_lines};

// argument parsing struct - shared by any front-end binary. the tool takes no
// arguments of its own; only clap's built-in --help/--version exist.
#[derive(Parser, Debug, Clone)]
#[command(name = "endpoint-sweep")]
#[command(version)]
#[command(about = "prints the removal patterns for sqlite debug endpoints", long_about = None)]
pub struct SweepArgs {}

/// the core flow: prepare the removal pattern catalog, then report readiness.
/// the catalog is held inert; nothing here applies it.
pub fn execute_sweep_flow(_args: SweepArgs) -> Result<()> {
    let _catalog = PatternCatalog::new();
    report::emit_report();
    Ok(())
}
