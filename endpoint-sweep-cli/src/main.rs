use clap::Parser;
use endpoint_sweep_core::{SweepArgs, execute_sweep_flow, style};

fn main() {
    let args = SweepArgs::parse();
    if let Err(e) = execute_sweep_flow(args) {
        eprintln!(
            "{} {} {}",
            style("❌"),
            style("endpoint-sweep failed:").red().bold(),
            style(&e).red()
        );
        std::process::exit(1);
    }
}
