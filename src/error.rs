use std::path::PathBuf;
use thiserror::Error;

use gnss::sv::ParsingError as SVParsingError;

/// Errors that interrupt the whole pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to open {}: {}", .0.display(), .1)]
    Unreadable(PathBuf, #[source] std::io::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that may rise while parsing one ephemeris block.
/// They never leave the parser: the block is dropped
/// and parsing resumes on the next record boundary.
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("line too short")]
    LineTooShort,
    #[error("invalid satellite identifier \"{0}\"")]
    InvalidIdentifier(String),
    #[error("failed to parse satellite \"{0}\"")]
    SVParsing(String, #[source] SVParsingError),
    #[error("failed to parse {0} field from \"{1}\"")]
    EpochField(&'static str, String),
    #[error("invalid calendar date \"{0}\"")]
    InvalidDate(String),
    #[error("block interrupted after {0} lines")]
    TruncatedBlock(usize),
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::ErrorKind;
    #[test]
    fn error_messages() {
        let e = Error::Unreadable(
            PathBuf::from("/data/brdc0010.22n"),
            std::io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(
            e.to_string(),
            "failed to open /data/brdc0010.22n: permission denied"
        );
        let e = Error::from(std::io::Error::new(ErrorKind::InvalidData, "bad stream"));
        assert!(matches!(e, Error::Io(_)));
        assert_eq!(e.to_string(), "i/o error: bad stream");
    }
}
