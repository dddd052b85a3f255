use crate::IndexError;
use std::io::BufRead;

/// One line of a byte source, as seen by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// Length in bytes, terminating newline included if present.
    pub len: usize,
    /// Whether the first byte of the line is `>`.
    pub is_header: bool,
}
impl LineSpan {
    fn from_line(line: &[u8]) -> Self {
        Self {
            len: line.len(),
            is_header: line.first() == Some(&b'>'),
        }
    }
}

/// A source of successive line spans, in source order.
///
/// Spans are contiguous: the first starts at offset 0 and each one starts
/// where the previous ended, so the lengths alone place every line.
/// `Ok(None)` marks the end of the source.
pub trait LineSource {
    fn next_span(&mut self) -> Result<Option<LineSpan>, IndexError>;
}

/// Line spans read incrementally from a buffered reader.
#[derive(Debug)]
pub struct ReaderLines<R: BufRead> {
    reader: R,
    buffer: Vec<u8>,
}
impl<R: BufRead> ReaderLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }
}
impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_span(&mut self) -> Result<Option<LineSpan>, IndexError> {
        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer)? {
            0 => Ok(None),
            _ => Ok(Some(LineSpan::from_line(&self.buffer))),
        }
    }
}

/// Line spans over one contiguous byte range.
///
/// Newlines are located with `memchr`; an unterminated tail is returned as
/// the final line.
#[derive(Debug, Clone)]
pub struct BufferLines<'a> {
    bytes: &'a [u8],
    pos: usize,
}
impl<'a> BufferLines<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}
impl<'a> LineSource for BufferLines<'a> {
    fn next_span(&mut self) -> Result<Option<LineSpan>, IndexError> {
        let bytes = self.bytes;
        let rest = &bytes[self.pos..];
        if rest.is_empty() {
            return Ok(None);
        }
        let len = match memchr::memchr(b'\n', rest) {
            Some(idx) => idx + 1,
            None => rest.len(),
        };
        self.pos += len;
        Ok(Some(LineSpan::from_line(&rest[..len])))
    }
}
