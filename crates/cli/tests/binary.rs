use std::io::Write;
use std::process::{Command, Stdio};

fn run_strata(args: &[&str], input: &str) -> String {
	let mut child = Command::new(env!("CARGO_BIN_EXE_strata"))
		.args(args)
		.env("STRATA_LOG", "off")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::null())
		.spawn()
		.unwrap();
	child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
	let output = child.wait_with_output().unwrap();
	assert!(output.status.success());
	String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_policy_flag_selects_initial_setup() {
	let output = run_strata(
		&["--policy", "bypass", "--no-cache"],
		"add 5\nmult 10\nadd -20\nmult -5\nignore 3\ngo\nquit\n",
	);
	assert!(output.contains("Setup: bypass\n"));
	assert!(output.contains("Cache: disabled\n"));
	assert!(output.contains("Total: -150\nElement count: 4\n"));
}

#[test]
fn test_session_ends_at_end_of_input() {
	let output = run_strata(&[], "add 1\ninfo\n");
	assert!(output.contains("Setup: default\n"));
	assert!(!output.contains("Exiting..."));
}

#[test]
fn test_unknown_policy_is_rejected() {
	let status = Command::new(env!("CARGO_BIN_EXE_strata"))
		.args(["--policy", "sideways"])
		.stdin(Stdio::null())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.status()
		.unwrap();
	assert!(!status.success());
}
