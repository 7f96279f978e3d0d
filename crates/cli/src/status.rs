//! Status line written to stdout after a successful fill

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

/// Result reported to the calling server
#[derive(Debug, Serialize)]
pub struct StatusLine<'a> {
    pub success: bool,
    pub output: &'a str,
}

impl StatusLine<'_> {
    /// Render as `{"success": true, "output": "..."}`
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut writer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, SpacedAsciiFormatter);
        self.serialize(&mut serializer)?;
        // The formatter only emits ASCII
        Ok(String::from_utf8_lossy(&writer).into_owned())
    }
}

/// Single-line JSON with `", "` and `": "` separators and non-ASCII
/// characters escaped as `\uXXXX`
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_separators() {
        let status = StatusLine {
            success: true,
            output: "/tmp/out.pdf",
        };
        assert_eq!(
            status.to_json().unwrap(),
            r#"{"success": true, "output": "/tmp/out.pdf"}"#
        );
    }

    #[test]
    fn test_status_line_escapes_non_ascii() {
        let status = StatusLine {
            success: true,
            output: "/tmp/café \"1\"/😀.pdf",
        };
        assert_eq!(
            status.to_json().unwrap(),
            r#"{"success": true, "output": "/tmp/caf\u00e9 \"1\"/\ud83d\ude00.pdf"}"#
        );
    }
}
