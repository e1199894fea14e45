use std::fs;

use super::run_captured;

#[test]
fn string_operand_prints_gnu_line() {
    let out = run_captured(&["rmd5", "-s", "hello world!"], b"");
    assert_eq!(out.status, 0);
    assert_eq!(out.stdout, "fc3ff98e8c6a0d3087d515c0473f8677  \"hello world!\"\n");
    assert!(out.stderr.is_empty());
}

#[test]
fn tag_style_for_strings() {
    let out = run_captured(&["rmd5", "--tag", "-s", "abc"], b"");
    assert_eq!(out.stdout, "MD5 (\"abc\") = 900150983cd24fb0d6963f7d28e17f72\n");
}

#[test]
fn no_operands_reads_stdin() {
    let out = run_captured(&["rmd5"], b"abc");
    assert_eq!(out.status, 0);
    assert_eq!(out.stdout, "900150983cd24fb0d6963f7d28e17f72  -\n");
}

#[test]
fn empty_stdin_has_empty_digest() {
    let out = run_captured(&["rmd5", "-"], b"");
    assert_eq!(out.stdout, "d41d8cd98f00b204e9800998ecf8427e  -\n");
}

#[test]
fn files_are_reported_in_operand_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    fs::write(&first, b"a").unwrap();
    fs::write(&second, b"").unwrap();

    let first_arg = first.to_str().unwrap();
    let second_arg = second.to_str().unwrap();
    let out = run_captured(&["rmd5", second_arg, first_arg], b"");

    assert_eq!(out.status, 0);
    let lines: Vec<&str> = out.stdout.lines().collect();
    assert_eq!(
        lines,
        [
            format!("d41d8cd98f00b204e9800998ecf8427e  {second_arg}"),
            format!("0cc175b9c0f1b6a831c399e269772661  {first_arg}"),
        ]
    );
}

#[test]
fn strings_and_files_mix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("abc.txt");
    fs::write(&path, b"abc").unwrap();
    let path_arg = path.to_str().unwrap();

    let out = run_captured(&["rmd5", path_arg, "-s", "a"], b"");
    let lines: Vec<&str> = out.stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "0cc175b9c0f1b6a831c399e269772661  \"a\"");
    assert!(lines[1].starts_with("900150983cd24fb0d6963f7d28e17f72  "));
}

#[test]
fn large_file_matches_known_digest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("million.txt");
    fs::write(&path, vec![b'a'; 1_000_000]).unwrap();

    let out = run_captured(&["rmd5", "--tag", path.to_str().unwrap()], b"");
    assert!(out.stdout.ends_with(") = 7707d6ae4e027c70eea2a935c2296f21\n"));
}

#[test]
fn help_goes_to_stdout() {
    let out = run_captured(&["rmd5", "--help"], b"");
    assert_eq!(out.status, 0);
    assert!(out.stdout.contains("Usage:"));
    assert!(out.stdout.contains("--string"));
    assert!(out.stderr.is_empty());
}

#[test]
fn version_goes_to_stdout() {
    let out = run_captured(&["rmd5", "--version"], b"");
    assert_eq!(out.status, 0);
    assert!(out.stdout.starts_with("rmd5 "));
}

#[test]
fn string_starting_with_dash_is_digested() {
    let out = run_captured(&["rmd5", "-s", "-x"], b"");
    assert_eq!(out.status, 0);
    assert_eq!(out.stdout, "d25c186e3f3096a9ff4a918f7b3141d4  \"-x\"\n");
}

#[test]
fn stdin_operand_is_consumed_once() {
    let out = run_captured(&["rmd5", "-", "-"], b"abc");
    assert_eq!(
        out.stdout,
        "900150983cd24fb0d6963f7d28e17f72  -\nd41d8cd98f00b204e9800998ecf8427e  -\n"
    );
}

#[cfg(target_os = "linux")]
#[test]
fn non_utf8_file_name_is_escaped() {
    use std::ffi::OsString;
    use std::io::Cursor;
    use std::os::unix::ffi::OsStringExt;

    let dir = tempfile::tempdir().unwrap();
    let mut raw = dir.path().as_os_str().as_encoded_bytes().to_vec();
    raw.extend_from_slice(b"/bad\xffname");
    let path = OsString::from_vec(raw);
    fs::write(&path, b"abc").unwrap();

    let mut stdin = Cursor::new(Vec::new());
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let status = crate::run_with_stdin(
        [OsString::from("rmd5"), path],
        &mut stdin,
        &mut stdout,
        &mut stderr,
    );

    assert_eq!(status, 0);
    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        format!(
            "\\900150983cd24fb0d6963f7d28e17f72  {}/bad\\xffname\n",
            dir.path().display()
        )
    );
}
