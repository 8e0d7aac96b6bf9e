use core::fmt;
use std::error::Error;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct DecompError {
    kind: ErrorKind,
    msg: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    MissingHeader,
    InvalidLine,
    VertexOutOfRange,
    UncoverableVertex,
    InvalidOrder,
    NeighbourhoodExhausted,
    ReadFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> Result<(), ::std::fmt::Error> {
        match *self {
            Self::FileNotFound => f.write_str("FileNotFound"),
            Self::MissingHeader => f.write_str("MissingHeader"),
            Self::InvalidLine => f.write_str("InvalidLine"),
            Self::VertexOutOfRange => f.write_str("VertexOutOfRange"),
            Self::UncoverableVertex => f.write_str("UncoverableVertex"),
            Self::InvalidOrder => f.write_str("InvalidOrder"),
            Self::NeighbourhoodExhausted => f.write_str("NeighbourhoodExhausted"),
            Self::ReadFailure => f.write_str("ReadFailure"),
        }
    }
}

impl DecompError {
    pub(crate) fn new(kind: ErrorKind, msg: &str) -> Self {
        Self {
            kind,
            msg: String::from(msg),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.msg
    }

    pub(crate) fn file_not_found(path: &Path) -> Self {
        let msg = format!("Could not open file {}.", path.display());
        Self::new(ErrorKind::FileNotFound, &msg)
    }

    pub(crate) fn missing_header(line: usize) -> Self {
        let msg = format!("Line {} precedes the problem header.", line);
        Self::new(ErrorKind::MissingHeader, &msg)
    }

    pub(crate) fn invalid_line(line: usize, content: &str) -> Self {
        let msg = format!("Line {} is malformed: '{}'.", line, content);
        Self::new(ErrorKind::InvalidLine, &msg)
    }

    /// Undecodable text counts as a malformed line, anything else as a failed read.
    pub(crate) fn read_failure(line: usize, e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::InvalidData => {
                let msg = format!("Line {} is not valid UTF-8: {}.", line, e);
                Self::new(ErrorKind::InvalidLine, &msg)
            }
            _ => {
                let msg = format!("Reading line {} failed: {}.", line, e);
                Self::new(ErrorKind::ReadFailure, &msg)
            }
        }
    }

    pub(crate) fn uncoverable_vertex(vertex: usize) -> Self {
        let msg = format!("Vertex {} is not contained in any hyperedge.", vertex);
        Self::new(ErrorKind::UncoverableVertex, &msg)
    }
}

impl fmt::Display for DecompError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl Error for DecompError {
    fn description(&self) -> &str {
        &self.msg
    }
}

impl From<std::io::Error> for DecompError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::new(ErrorKind::FileNotFound, &e.to_string()),
            _ => Self::new(ErrorKind::ReadFailure, &e.to_string()),
        }
    }
}
