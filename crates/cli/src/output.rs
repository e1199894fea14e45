//! Rendering of digest lines.

use std::ffi::OsStr;
use std::io::{self, Write};

use md5_engine::{Digest, hex};

/// Line layout selected by `--tag`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineStyle {
    /// `DIGEST  NAME`, as printed by GNU `md5sum`.
    Gnu,
    /// `MD5 (NAME) = DIGEST`, as printed by BSD `md5`.
    Tag,
}

/// Escapes backslashes, newlines and bytes that are not valid UTF-8 in
/// `name`; the latter are written as `\xNN`.
///
/// Returns whether anything was escaped; GNU style marks such lines with a
/// leading backslash so they can be parsed back unambiguously.
fn escape_name(name: &OsStr) -> (bool, String) {
    let bytes = name.as_encoded_bytes();
    let mut escaped = String::with_capacity(bytes.len() + 2);
    let mut marked = false;

    for chunk in bytes.utf8_chunks() {
        for ch in chunk.valid().chars() {
            match ch {
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                other => {
                    escaped.push(other);
                    continue;
                }
            }
            marked = true;
        }
        for &byte in chunk.invalid() {
            escaped.push_str("\\x");
            hex::encode_into(&[byte], &mut escaped);
            marked = true;
        }
    }
    (marked, escaped)
}

/// Formats one output line without the trailing newline.
pub(crate) fn format_line(style: LineStyle, name: &OsStr, digest: &Digest) -> String {
    let (escaped, name) = escape_name(name);
    let mut line = String::with_capacity(name.len() + 40);

    if escaped {
        line.push('\\');
    }
    match style {
        LineStyle::Gnu => {
            hex::encode_into(digest, &mut line);
            line.push_str("  ");
            line.push_str(&name);
        }
        LineStyle::Tag => {
            line.push_str("MD5 (");
            line.push_str(&name);
            line.push_str(") = ");
            hex::encode_into(digest, &mut line);
        }
    }
    line
}

/// Writes one output line, newline-terminated.
pub(crate) fn write_line<W: Write>(
    out: &mut W,
    style: LineStyle,
    name: &OsStr,
    digest: &Digest,
) -> io::Result<()> {
    writeln!(out, "{}", format_line(style, name, digest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use md5_engine::digest;

    #[test]
    fn gnu_style_puts_digest_first() {
        let line = format_line(LineStyle::Gnu, OsStr::new("-"), &digest(b""));
        assert_eq!(line, "d41d8cd98f00b204e9800998ecf8427e  -");
    }

    #[test]
    fn tag_style_wraps_name() {
        let line = format_line(LineStyle::Tag, OsStr::new("\"abc\""), &digest(b"abc"));
        assert_eq!(line, "MD5 (\"abc\") = 900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn awkward_names_are_escaped_and_marked() {
        let line = format_line(LineStyle::Gnu, OsStr::new("a\\b\nc"), &digest(b"a"));
        assert_eq!(line, "\\0cc175b9c0f1b6a831c399e269772661  a\\\\b\\nc");
    }

    #[test]
    fn write_line_appends_newline() {
        let mut out = Vec::new();
        write_line(&mut out, LineStyle::Gnu, OsStr::new("x"), &digest(b"a")).unwrap();
        assert!(out.ends_with(b"  x\n"));
    }

    #[test]
    fn plain_names_are_not_marked() {
        assert_eq!(escape_name(OsStr::new("ação.txt")), (false, "ação.txt".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn invalid_utf8_bytes_are_hex_escaped() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"bad\xff\xfename");
        assert_eq!(escape_name(name), (true, "bad\\xff\\xfename".to_string()));

        let line = format_line(LineStyle::Tag, name, &digest(b""));
        assert_eq!(line, "\\MD5 (bad\\xff\\xfename) = d41d8cd98f00b204e9800998ecf8427e");
    }
}
