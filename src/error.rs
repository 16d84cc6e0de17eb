use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum DigestMapError {
    String(String),
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl Error for DigestMapError {}

impl fmt::Display for DigestMapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DigestMapError::String(s) => write!(f, "{s}"),
            DigestMapError::Io(e) => write!(f, "{e}"),
            DigestMapError::Serde(e) => write!(f, "{e}"),
        }
    }
}

impl From<String> for DigestMapError {
    fn from(err: String) -> Self {
        DigestMapError::String(err)
    }
}

impl From<std::io::Error> for DigestMapError {
    fn from(err: std::io::Error) -> Self {
        DigestMapError::Io(err)
    }
}

impl From<serde_json::Error> for DigestMapError {
    fn from(err: serde_json::Error) -> Self {
        DigestMapError::Serde(err)
    }
}
