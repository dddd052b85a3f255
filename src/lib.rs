//! # fasoffset
//!
//! Byte-offset index of a FASTA file.
//!
//! For every record this crate locates the header line and the sequence
//! block that follows it, without parsing or validating the sequence. Each
//! record is reported as four inclusive byte offsets:
//! `header_start header_end seq_start seq_end`.
//!
//! The same scanner runs over a streaming reader or over a memory-mapped
//! file, and both produce identical indices.
//!
//! ## Usage
//!
//! ```
//! use fasoffset::{MappedFasta, OffsetIndex};
//!
//! // Stream the file line by line
//! let streamed = OffsetIndex::from_filepath("example_data/example.fa")
//!     .expect("Could not read FASTA file");
//!
//! // Or scan it through a memory map
//! let fasta = MappedFasta::open("example_data/example.fa")
//!     .expect("Could not map FASTA file");
//! let mapped = OffsetIndex::from_mapped(&fasta).unwrap();
//! assert_eq!(streamed, mapped);
//!
//! // chr3 is immediately followed by chr4, so its sequence block is empty
//! let chr3 = mapped.get(2).unwrap();
//! assert_eq!(&fasta.as_bytes()[chr3.header_range()], b">chr3\n");
//! assert!(chr3.has_empty_sequence());
//!
//! // The last record runs to the final byte of the file
//! let chr4 = mapped.get(3).unwrap();
//! assert_eq!(&fasta.as_bytes()[chr4.sequence_range()], b"GGCC\nAT");
//! ```
//!
//! Records can also be pulled lazily from a [`Scanner`]:
//!
//! ```
//! let records = fasoffset::scan_bytes(b">h1\nACGT\n>h2\nGG\n")
//!     .map(|r| r.unwrap().to_string())
//!     .collect::<Vec<_>>();
//! assert_eq!(records, vec!["0 3 4 8", "9 12 13 15"]);
//! ```

mod error;
mod index_record;
mod line_source;
mod mapped_fasta;
mod offset_index;
mod scanner;

/// Errors raised by byte sources.
pub use error::IndexError;

/// The `IndexRecord` struct holds the four offsets of one FASTA record.
pub use index_record::IndexRecord;

/// Line span sources the scanner can run over.
pub use line_source::{BufferLines, LineSource, LineSpan, ReaderLines};

/// The `MappedFasta` struct is a read-only memory map of a FASTA file.
pub use mapped_fasta::MappedFasta;

/// The `OffsetIndex` struct is the ordered collection of records of a file.
pub use offset_index::OffsetIndex;

/// The record boundary scanner and its constructors.
pub use scanner::{scan_bytes, scan_reader, Scanner};
