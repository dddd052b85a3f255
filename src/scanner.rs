use crate::{BufferLines, IndexError, IndexRecord, LineSource, ReaderLines};
use std::io::BufRead;

/// A header that has been seen but whose sequence block is still open.
#[derive(Debug, Clone, Copy)]
struct Pending {
    header_start: usize,
    header_end: usize,
    seq_start: usize,
}
impl Pending {
    fn close(self, seq_end: usize) -> IndexRecord {
        IndexRecord::new(self.header_start, self.header_end, self.seq_start, seq_end)
    }
}

/// The record boundary scanner.
///
/// Walks the line spans of a source once and yields one [`IndexRecord`] per
/// header line, in source order. A record is yielded when the next header
/// (or the end of the source) closes its sequence block.
///
/// Bytes before the first header belong to no record. Any content is
/// accepted; the only error is a failing source, after which the scanner
/// yields nothing more.
#[derive(Debug)]
pub struct Scanner<S: LineSource> {
    source: S,
    pos: usize,
    pending: Option<Pending>,
    done: bool,
    emitted: usize,
}
impl<S: LineSource> Scanner<S> {
    pub fn new(source: S) -> Self {
        log::debug!("starting offset scan");
        Self {
            source,
            pos: 0,
            pending: None,
            done: false,
            emitted: 0,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn emit(&mut self, record: IndexRecord) -> IndexRecord {
        log::trace!("record {}: {}", self.emitted, record);
        self.emitted += 1;
        record
    }

    fn finish(&mut self) -> Option<IndexRecord> {
        self.done = true;
        log::debug!(
            "offset scan finished: {} records over {} bytes",
            self.emitted + usize::from(self.pending.is_some()),
            self.pos
        );
        // A pending header implies pos > 0.
        let record = self.pending.take()?.close(self.pos - 1);
        Some(self.emit(record))
    }
}

impl<S: LineSource> Iterator for Scanner<S> {
    type Item = Result<IndexRecord, IndexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let span = match self.source.next_span() {
                Ok(Some(span)) => span,
                Ok(None) => return self.finish().map(Ok),
                Err(err) => {
                    self.done = true;
                    self.pending = None;
                    return Some(Err(err));
                }
            };
            let line_start = self.pos;
            self.pos += span.len;
            if !span.is_header {
                continue;
            }
            let next = Pending {
                header_start: line_start,
                header_end: line_start + span.len - 1,
                seq_start: self.pos,
            };
            if let Some(prev) = self.pending.replace(next) {
                let record = prev.close(line_start - 1);
                return Some(Ok(self.emit(record)));
            }
        }
    }
}

impl<S: LineSource> std::iter::FusedIterator for Scanner<S> {}

/// Scan a buffered reader line by line.
pub fn scan_reader<R: BufRead>(reader: R) -> Scanner<ReaderLines<R>> {
    Scanner::new(ReaderLines::new(reader))
}

/// Scan a contiguous byte range, such as a memory map.
pub fn scan_bytes(bytes: &[u8]) -> Scanner<BufferLines<'_>> {
    Scanner::new(BufferLines::new(bytes))
}

#[cfg(test)]
mod testing {
    use super::{scan_bytes, scan_reader};
    use crate::{IndexError, IndexRecord, LineSource, LineSpan, Scanner};
    use std::io;

    fn scan(input: &[u8]) -> Vec<IndexRecord> {
        let from_bytes = scan_bytes(input)
            .collect::<Result<Vec<_>, _>>()
            .expect("buffer scan cannot fail");
        let from_reader = scan_reader(input)
            .collect::<Result<Vec<_>, _>>()
            .expect("slice reader cannot fail");
        assert_eq!(from_bytes, from_reader);
        from_bytes
    }

    fn rec(a: usize, b: usize, c: usize, d: usize) -> IndexRecord {
        IndexRecord::new(a, b, c, d)
    }

    #[test]
    fn two_records() {
        let records = scan(b">h1\nACGT\n>h2\nGG\n");
        assert_eq!(records, vec![rec(0, 3, 4, 8), rec(9, 12, 13, 15)]);
    }

    #[test]
    fn no_trailing_newline() {
        let records = scan(b">only\nSEQ");
        assert_eq!(records, vec![rec(0, 5, 6, 8)]);
    }

    #[test]
    fn consecutive_headers() {
        let records = scan(b">a\n>b\nXYZ\n");
        assert_eq!(records, vec![rec(0, 2, 3, 2), rec(3, 5, 6, 9)]);
        assert!(records[0].has_empty_sequence());
    }

    #[test]
    fn empty_input() {
        assert!(scan(b"").is_empty());
    }

    #[test]
    fn no_headers() {
        assert!(scan(b"ACGT\nTTGA\n").is_empty());
        assert!(scan(b"\n").is_empty());
    }

    #[test]
    fn header_at_eof() {
        let records = scan(b">a\nAC\n>b\n");
        assert_eq!(records, vec![rec(0, 2, 3, 5), rec(6, 8, 9, 8)]);
    }

    #[test]
    fn unterminated_header_at_eof() {
        let records = scan(b">a");
        assert_eq!(records, vec![rec(0, 1, 2, 1)]);
        assert!(records[0].has_empty_sequence());
    }

    #[test]
    fn leading_bytes_skipped() {
        let records = scan(b"junk\n>a\nAC\n");
        assert_eq!(records, vec![rec(5, 7, 8, 10)]);
    }

    #[test]
    fn crlf_counted_as_content() {
        let records = scan(b">a\r\nAC\r\n");
        assert_eq!(records, vec![rec(0, 3, 4, 7)]);
    }

    #[test]
    fn byte_accounting() {
        let input: &[u8] = b"xx\n>a\nAC\nGT\n>b\n>c\nTT";
        let records = scan(input);
        assert_eq!(records.len(), 3);
        let leading = records[0].header_start;
        let covered: usize = records
            .iter()
            .map(|r| r.header_range().len() + r.sequence_len())
            .sum();
        assert_eq!(leading + covered, input.len());
        for r in &records {
            assert!(r.header_start <= r.header_end);
            assert!(r.header_end < r.seq_start);
            assert!(r.seq_start <= r.seq_end + 1);
        }
    }

    #[test]
    fn fused_after_end() {
        let mut scanner = scan_bytes(b">a\nA\n");
        assert!(scanner.next().is_some());
        assert!(scanner.next().is_none());
        assert!(scanner.next().is_none());
        assert_eq!(scanner.position(), 5);
    }

    struct FailingSource {
        spans: Vec<LineSpan>,
    }
    impl LineSource for FailingSource {
        fn next_span(&mut self) -> Result<Option<LineSpan>, IndexError> {
            match self.spans.pop() {
                Some(span) => Ok(Some(span)),
                None => Err(io::Error::new(io::ErrorKind::Other, "disk gone").into()),
            }
        }
    }

    #[test]
    fn source_failure_ends_scan() {
        let spans = vec![
            LineSpan {
                len: 3,
                is_header: true,
            },
            LineSpan {
                len: 3,
                is_header: true,
            },
        ];
        let mut scanner = Scanner::new(FailingSource { spans });
        assert_eq!(scanner.next().unwrap().unwrap(), rec(0, 2, 3, 2));
        assert!(matches!(
            scanner.next(),
            Some(Err(IndexError::SourceRead(_)))
        ));
        assert!(scanner.next().is_none());
    }
}
