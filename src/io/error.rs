//! # Error reporting for reading of network files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::io;

use thiserror::Error;

use crate::data::network::NetworkError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error(transparent)]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed into a network.
    ///
    /// # Note
    ///
    /// If the network is inconsistent, that will not be represented with this error. This variant
    /// should only be created for syntactically incorrect files.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// There is a logical inconsistency in the network described by a file.
    ///
    /// For example, a node might be defined twice.
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may hold a file location containing a line number and line, at which the error was caused.
#[derive(Error, Debug)]
#[error("ParseError: {description}{}", location_suffix(.location))]
pub struct ParseError {
    description: String,
    location: Option<FileLocation>,
}

/// References a line in the file by the line number of the file as originally read from the disk,
/// together with the contents of that line.
pub type FileLocation = (u64, String);

fn location_suffix(location: &Option<FileLocation>) -> String {
    match location {
        Some((line_number, line)) => format!("\n\tCaused at line\t{line_number}:\t{line}"),
        None => String::new(),
    }
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None }
    }

    /// Attach the line at which this error was caused.
    ///
    /// # Arguments
    ///
    /// * `line_number`: Line number, starting at 1.
    /// * `line`: Contents of the line.
    #[must_use]
    pub fn at_line(mut self, line_number: u64, line: &str) -> Self {
        self.location = Some((line_number, line.to_string()));
        self
    }

    /// The line at which this error was caused, if known.
    pub fn location(&self) -> Option<&FileLocation> {
        self.location.as_ref()
    }
}

/// Shorthand for results of parsing functions.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod test {
    use crate::io::error::ParseError;

    #[test]
    fn display() {
        let error = ParseError::new("Missing arc capacity");
        assert_eq!(error.to_string(), "ParseError: Missing arc capacity");

        let error = error.at_line(3, "arc");
        assert_eq!(error.location(), Some(&(3, "arc".to_string())));
        assert_eq!(error.to_string(), "ParseError: Missing arc capacity\n\tCaused at line\t3:\tarc");
    }
}
