use crate::{BufferLines, IndexError};
use anyhow::Result;
use memmap2::Mmap;
use std::{fs::File, path::Path};

/// A FASTA file mapped read-only into memory.
///
/// This struct owns the mapping and lends its bytes out for scanning, so
/// every scan borrowing it is bounded by its lifetime. Empty files are not
/// mapped at all and present as an empty byte range.
///
/// # Examples
///
/// ```
/// use fasoffset::{MappedFasta, OffsetIndex};
///
/// let fasta = MappedFasta::open("example_data/example.fa")
///     .expect("Could not map FASTA file");
/// let index = OffsetIndex::from_mapped(&fasta)
///     .expect("Mapped scans do not fail");
///
/// let first = index.get(0).unwrap();
/// assert_eq!(&fasta.as_bytes()[first.header_range()], b">chr1 first record\n");
/// assert_eq!(index.len(), 4);
/// ```
#[derive(Debug)]
pub struct MappedFasta {
    map: Option<Mmap>,
}
impl MappedFasta {
    /// Map the file at `path`.
    ///
    /// # Errors
    ///
    /// - [`IndexError::SourceUnavailable`] if the file cannot be opened,
    ///   inspected or mapped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let unavailable = |source| IndexError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unavailable)?;
        let size = file.metadata().map_err(unavailable)?.len();
        if size == 0 {
            log::debug!("{} is empty, skipping mmap", path.display());
            return Ok(Self { map: None });
        }
        // The mapping is read-only and the file is treated as immutable for
        // as long as this value lives.
        let map = unsafe { Mmap::map(&file) }.map_err(unavailable)?;
        log::debug!("mapped {} ({} bytes)", path.display(), map.len());
        Ok(Self { map: Some(map) })
    }

    pub fn as_bytes(&self) -> &[u8] {
        match &self.map {
            Some(map) => map,
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Line spans over the mapped bytes.
    pub fn lines(&self) -> BufferLines<'_> {
        BufferLines::new(self.as_bytes())
    }
}
