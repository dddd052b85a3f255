use serde::{Deserialize, Serialize};
use std::{fmt, ops::Range};

/// A FASTA offset index record.
///
/// All four fields are byte offsets from the start of the source and all
/// of them are inclusive. `header_start` is the offset of the `>` byte,
/// `header_end` the offset of the newline ending the header (or its last
/// byte if the header is the unterminated final line), `seq_start` the
/// first byte after the header line and `seq_end` the last byte before the
/// next header or end of source.
///
/// A record whose sequence block is empty has `seq_end == seq_start - 1`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRecord {
    pub header_start: usize,
    pub header_end: usize,
    pub seq_start: usize,
    pub seq_end: usize,
}
impl IndexRecord {
    pub fn new(header_start: usize, header_end: usize, seq_start: usize, seq_end: usize) -> Self {
        Self {
            header_start,
            header_end,
            seq_start,
            seq_end,
        }
    }

    /// The header line bytes as a half-open range, newline included.
    pub fn header_range(&self) -> Range<usize> {
        self.header_start..self.header_end + 1
    }

    /// The sequence block bytes as a half-open range.
    ///
    /// The range is empty when the header is immediately followed by another
    /// header or by the end of the source.
    pub fn sequence_range(&self) -> Range<usize> {
        self.seq_start..self.seq_end + 1
    }

    /// Number of bytes in the sequence block, newlines included.
    pub fn sequence_len(&self) -> usize {
        (self.seq_end + 1).saturating_sub(self.seq_start)
    }

    pub fn has_empty_sequence(&self) -> bool {
        self.sequence_len() == 0
    }
}

impl fmt::Display for IndexRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.header_start, self.header_end, self.seq_start, self.seq_end
        )
    }
}

#[cfg(test)]
mod testing {
    use super::IndexRecord;

    #[test]
    fn ranges() {
        let record = IndexRecord::new(0, 3, 4, 8);
        assert_eq!(record.header_range(), 0..4);
        assert_eq!(record.sequence_range(), 4..9);
        assert_eq!(record.sequence_len(), 5);
        assert!(!record.has_empty_sequence());
    }

    #[test]
    fn empty_sequence() {
        let record = IndexRecord::new(0, 2, 3, 2);
        assert!(record.sequence_range().is_empty());
        assert_eq!(record.sequence_len(), 0);
        assert!(record.has_empty_sequence());
    }

    #[test]
    fn display() {
        let record = IndexRecord::new(9, 12, 13, 15);
        assert_eq!(record.to_string(), "9 12 13 15");
    }
}
