use std::io::Cursor;

use super::*;

mod run_outputs;

struct Captured {
    status: i32,
    stdout: String,
    stderr: String,
}

fn run_captured(args: &[&str], stdin: &[u8]) -> Captured {
    let mut stdin = Cursor::new(stdin.to_vec());
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let status = run_with_stdin(args.iter().copied(), &mut stdin, &mut stdout, &mut stderr);
    Captured {
        status,
        stdout: String::from_utf8(stdout).expect("stdout is UTF-8"),
        stderr: String::from_utf8(stderr).expect("stderr is UTF-8"),
    }
}
