// observable-behavior checks for the shipped binary

use std::process::Command;

const EXPECTED_STDOUT: &str =
    "🧹 Debug endpoints removal patterns prepared\n✅ Ready for systematic cleanup\n";

#[test]
fn prints_exactly_two_fixed_lines_and_exits_cleanly() {
    let output = Command::new(env!("CARGO_BIN_EXE_endpoint-sweep"))
        .output()
        .expect("failed to run endpoint-sweep");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout was not utf-8");
    assert_eq!(stdout, EXPECTED_STDOUT);
}

#[test]
fn repeated_runs_are_byte_identical_and_quiet_on_stderr() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_endpoint-sweep"))
            .output()
            .expect("failed to run endpoint-sweep")
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(first.stderr.is_empty());
    assert!(second.stderr.is_empty());
}
