use std::{io, path::PathBuf};
use thiserror::Error;

/// Failures of the byte source feeding a scan.
///
/// The scanner itself never fails; any byte content is indexed.
#[derive(Error, Debug)]
pub enum IndexError {
    /// The input could not be opened or mapped. Raised before scanning.
    #[error("could not open {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a line from a streaming source failed mid-scan.
    #[error("failed to read input: {0}")]
    SourceRead(#[from] io::Error),
}
