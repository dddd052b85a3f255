use crate::{scan_bytes, scan_reader, IndexError, IndexRecord, MappedFasta};
use anyhow::Result;
use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
    slice,
};

/// A FASTA offset index.
///
/// This struct holds the index records of a FASTA file in the order their
/// headers appear. It can be built by scanning the FASTA itself or loaded
/// from a previously written index file of four space-separated integers
/// per line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OffsetIndex {
    records: Vec<IndexRecord>,
}
impl OffsetIndex {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }
    pub fn push(&mut self, record: IndexRecord) {
        self.records.push(record);
    }

    /// Build an index by streaming the FASTA from `reader` line by line.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut index = Self::new();
        for record in scan_reader(BufReader::new(reader)) {
            index.push(record?);
        }
        Ok(index)
    }

    /// Build an index by streaming the FASTA file at `path`.
    pub fn from_filepath<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IndexError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Build an index over an in-memory FASTA buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut index = Self::new();
        for record in scan_bytes(bytes) {
            index.push(record?);
        }
        Ok(index)
    }

    /// Build an index over a memory-mapped FASTA file.
    pub fn from_mapped(fasta: &MappedFasta) -> Result<Self> {
        Self::from_bytes(fasta.as_bytes())
    }

    /// Load a previously written index.
    pub fn from_index_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .from_reader(reader);
        let mut index = Self::new();
        for record in csv_reader.deserialize() {
            let record: IndexRecord = record?;
            index.push(record);
        }
        Ok(index)
    }
    pub fn from_index_filepath<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_index_reader(file)
    }

    /// Write the index as one `header_start header_end seq_start seq_end`
    /// line per record.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .from_writer(writer);
        for record in &self.records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn get(&self, idx: usize) -> Option<&IndexRecord> {
        self.records.get(idx)
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    pub fn iter(&self) -> slice::Iter<'_, IndexRecord> {
        self.records.iter()
    }
    pub fn records(&self) -> &[IndexRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a OffsetIndex {
    type Item = &'a IndexRecord;
    type IntoIter = slice::Iter<'a, IndexRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<IndexRecord> for OffsetIndex {
    fn from_iter<I: IntoIterator<Item = IndexRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
