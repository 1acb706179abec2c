//! Minimal RFC 4180 record codec with buffering, modeled after the crate's
//! other line-oriented readers. Handles quoted fields (embedded commas,
//! doubled quotes, embedded line breaks preserved verbatim), CRLF line
//! endings, blank separator lines, and files whose last record lacks a
//! trailing newline.

use crate::util::{create_with_backoff, open_with_backoff, replace_file_atomic_backoff};
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Buffered CSV reader. Uses robust open-with-backoff for Windows-friendliness.
pub struct CsvReader {
    rdr: BufReader<File>,
    line: String,
    trailing_cr: bool,
    records_read: u64,
}

impl CsvReader {
    pub fn open(path: &Path, buf_bytes: usize) -> io::Result<Self> {
        let f = open_with_backoff(path, 16, 50)?;
        Ok(Self {
            rdr: BufReader::with_capacity(buf_bytes.max(8 * 1024), f),
            line: String::new(),
            trailing_cr: false,
            records_read: 0,
        })
    }

    /// Read the next record into `fields`, replacing its contents.
    /// Returns false on EOF. A quoted field may span multiple physical lines.
    /// Blank lines are separators, not records, and are skipped.
    pub fn read_record(&mut self, fields: &mut Vec<String>) -> Result<bool> {
        fields.clear();

        loop {
            if !self.next_line()? {
                return Ok(false);
            }
            if !self.line.is_empty() {
                break;
            }
        }
        self.records_read += 1;

        let mut field = String::new();
        let mut in_quotes = false;
        loop {
            let mut chars = self.line.chars().peekable();
            while let Some(c) = chars.next() {
                if in_quotes {
                    match c {
                        '"' => {
                            if chars.peek() == Some(&'"') {
                                chars.next();
                                field.push('"');
                            } else {
                                in_quotes = false;
                            }
                        }
                        _ => field.push(c),
                    }
                } else {
                    match c {
                        ',' => fields.push(std::mem::take(&mut field)),
                        '"' if field.is_empty() => in_quotes = true,
                        _ => field.push(c),
                    }
                }
            }
            if !in_quotes {
                break;
            }
            // Quoted field continues onto the next physical line; carry the
            // stripped terminator over so the content round-trips.
            let sep = if self.trailing_cr { "\r\n" } else { "\n" };
            if !self.next_line()? {
                bail!("unterminated quoted field in record {}", self.records_read);
            }
            field.push_str(sep);
        }
        fields.push(field);
        Ok(true)
    }

    /// Pull the next physical line into `self.line`, stripping `\r?\n`.
    /// Returns false on EOF.
    fn next_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        self.trailing_cr = false;
        let n = self.rdr.read_line(&mut self.line)?;
        if n == 0 {
            return Ok(false);
        }
        if self.line.ends_with('\n') {
            self.line.pop();
            if self.line.ends_with('\r') {
                self.line.pop();
                self.trailing_cr = true;
            }
        }
        Ok(true)
    }
}

/// Buffered CSV writer with robust file creation. Quotes a field only when
/// its content requires it, so untouched cells pass through unchanged.
pub struct CsvWriter {
    path: PathBuf,
    w: Option<BufWriter<File>>,
}

impl CsvWriter {
    pub fn create(path: &Path, buf_bytes: usize) -> io::Result<Self> {
        let f = create_with_backoff(path, 16, 50)?;
        Ok(Self {
            path: path.to_path_buf(),
            w: Some(BufWriter::with_capacity(buf_bytes.max(8 * 1024), f)),
        })
    }

    pub fn write_record<S: AsRef<str>>(&mut self, fields: &[S]) -> io::Result<()> {
        if let Some(w) = &mut self.w {
            for (i, f) in fields.iter().enumerate() {
                if i > 0 {
                    w.write_all(b",")?;
                }
                write_field(w, f.as_ref())?;
            }
            w.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<()> {
        if let Some(mut w) = self.w.take() {
            w.flush()?;
        }
        Ok(())
    }

    /// Flushes and atomically promotes the temp file to `final_path`.
    /// Use when the writer was created on a temp location.
    pub fn finish_atomic(mut self, final_path: &Path) -> Result<()> {
        if let Some(mut w) = self.w.take() {
            w.flush().with_context(|| format!("flush {}", self.path.display()))?;
        }
        replace_file_atomic_backoff(&self.path, final_path)
    }
}

fn write_field(w: &mut impl Write, field: &str) -> io::Result<()> {
    let needs_quoting = field.contains(['"', ',', '\n', '\r']);
    if !needs_quoting {
        return w.write_all(field.as_bytes());
    }
    w.write_all(b"\"")?;
    let mut first = true;
    for seg in field.split('"') {
        if !first {
            w.write_all(b"\"\"")?;
        }
        first = false;
        w.write_all(seg.as_bytes())?;
    }
    w.write_all(b"\"")
}
