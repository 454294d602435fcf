//! Filesystem validation source.
//!
//! Opens the input read-only and hands out one decoded line at a time. The
//! file handle lives in the returned reader and is closed when it drops.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{ScanError, ScanErrorKind};

/// Result of reading the next line.
pub enum LineRead<'a> {
    /// A complete line, line ending (`\n`, `\r\n` or `\r`) still attached.
    Line(&'a str),
    /// No more input.
    Eof,
    /// The line could not be read or is not valid UTF-8.
    Err(ScanError),
}

/// Open `path` for buffered, read-only access.
///
/// # Errors
/// Returns a `ScanError` of kind `IoError` if the file cannot be opened.
pub fn open_file(path: &Path) -> Result<BufReader<File>, ScanError> {
    File::open(path).map(BufReader::new).map_err(|e| {
        ScanError::new(
            path.to_owned(),
            ScanErrorKind::IoError,
            format!("Failed to open file: {e}"),
        )
    })
}

/// Append bytes up to and including the next line ending to `buffer`.
///
/// A line ends at `\n`, `\r\n` or a lone `\r`. A `\r\n` pair split across
/// two reader chunks is still read as one ending.
fn read_until_line_end<R: BufRead>(
    reader: &mut R,
    buffer: &mut Vec<u8>,
) -> io::Result<usize> {
    let start = buffer.len();
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }
        if let Some(idx) = available.iter().position(|&b| b == b'\n' || b == b'\r') {
            let ends_with_cr = available[idx] == b'\r';
            buffer.extend_from_slice(&available[..=idx]);
            reader.consume(idx + 1);
            if ends_with_cr && next_byte_is_lf(reader)? {
                buffer.push(b'\n');
                reader.consume(1);
            }
            break;
        }
        let len = available.len();
        buffer.extend_from_slice(available);
        reader.consume(len);
    }
    Ok(buffer.len() - start)
}

fn next_byte_is_lf<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    loop {
        match reader.fill_buf() {
            Ok(available) => return Ok(available.first() == Some(&b'\n')),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}

/// Read the next line into `buffer` and decode it as UTF-8.
///
/// Decoding is per line, so bytes after the current line are never looked at.
pub fn read_line<'a, R: BufRead>(
    reader: &mut R,
    buffer: &'a mut Vec<u8>,
    file: &Path,
    line_no: usize,
) -> LineRead<'a> {
    buffer.clear();
    match read_until_line_end(reader, buffer) {
        Ok(0) => LineRead::Eof,
        Ok(_) => {
            let bytes: &'a [u8] = buffer;
            match std::str::from_utf8(bytes) {
                Ok(text) => LineRead::Line(text),
                Err(e) => LineRead::Err(ScanError::new(
                    file.to_owned(),
                    ScanErrorKind::InvalidEncoding,
                    format!("Line {line_no} is not valid UTF-8: {e}"),
                )),
            }
        }
        Err(e) => LineRead::Err(ScanError::new(
            file.to_owned(),
            ScanErrorKind::IoError,
            format!("Failed to read line {line_no}: {e}"),
        )),
    }
}
