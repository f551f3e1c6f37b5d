// status report - the two fixed lines this tool prints

use console::style;

pub const PATTERNS_PREPARED: &str = "🧹 Debug endpoints removal patterns prepared";
pub const CLEANUP_READY: &str = "✅ Ready for systematic cleanup";

/// the report lines, in print order
pub fn report_lines() -> [&'static str; 2] {
    [PATTERNS_PREPARED, CLEANUP_READY]
}

/// print the fixed status report to stdout, one line per message, in order.
/// styling is display-only; on a non-tty the output is the literal lines.
pub fn emit_report() {
    println!("{}", style(PATTERNS_PREPARED).cyan().bold());
    println!("{}", style(CLEANUP_READY).green().bold());
}
