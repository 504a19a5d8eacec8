//! Error enum
use std::{fmt, num::ParseIntError, path::PathBuf};

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InputNotFound(PathBuf),
    MalformedRecord(String),
    UnknownSource {
        tag: i64,
        line: String,
    },
    MalformedIdentifier {
        line: String,
        source: ParseIntError,
    },
    UnknownFormat(String),
    Serde(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::InputNotFound(path) => write!(
                f,
                "Corpus not found at {}. Ensure that you are running this from the root directory of the project",
                path.display()
            ),
            Error::MalformedRecord(line) => write!(f, "Mal-formed entry {}", line),
            Error::UnknownSource { tag, line } => {
                write!(f, "Unknown source {} in entry {}", tag, line)
            }
            Error::MalformedIdentifier { line, source } => write!(
                f,
                "Mal-formed identifier, could not convert to int ({}): {}",
                source, line
            ),
            Error::UnknownFormat(name) => write!(f, "Unknown output format {}", name),
            Error::Serde(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::MalformedIdentifier { source, .. } => Some(source),
            Error::Serde(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
