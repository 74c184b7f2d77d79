//! # Reading networks and writing results
//!
//! Networks are read from `.net` files, a line based format:
//!
//! ```text
//! # Everything after a '#' is ignored
//! node source source
//! node terminal Terminal 1
//! node warehouse Warehouse 1
//! arc inf source -> Terminal 1
//! arc 2.5 Terminal 1 -> Warehouse 1
//! ```
//!
//! A `node` line holds a category and a name, an `arc` line a capacity (`inf` for unbounded) and
//! two node names separated by `->`. Names may contain spaces.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::data::network::{Category, Network};
use crate::data::number_types::capacity::Capacity;
use crate::data::number_types::traits::FlowNumber;
use crate::io::error::{ImportError, ParseError, ParseResult};
use crate::io::number::Parse;

pub mod error;
pub mod number;
pub mod report;

/// Import a network from a file.
///
/// Currently only supports the `.net` filetype.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, a line can't be parsed or the
/// network contains duplicate nodes or arcs.
pub fn import<F: FlowNumber + Parse>(file_path: &Path) -> Result<Network<F>, ImportError> {
    // Open and read the file
    let mut program = String::new();
    File::open(file_path)?.read_to_string(&mut program)?;

    // Choose the right parser
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("net") => parse(&program),
            Some(extension_string) => Err(ImportError::FileExtension(format!(
                "Could not recognise file extension \"{extension_string}\" of file: {file_path:?}",
            ))),
            None => Err(ImportError::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {extension:?}",
            ))),
        },
        None => Err(ImportError::FileExtension(format!(
            "Could not read extension from file path: {file_path:?}",
        ))),
    }
}

/// Parse the contents of a `.net` file.
///
/// # Errors
///
/// When a line can't be parsed, or when the network contains duplicate nodes or arcs.
pub fn parse<F: FlowNumber + Parse>(program: &str) -> Result<Network<F>, ImportError> {
    let mut network = Network::new();

    for (line_number, line) in (1_u64..).zip(program.lines()) {
        let content = line.split_once('#').map_or(line, |(before, _)| before).trim();
        if content.is_empty() {
            continue;
        }

        match parse_statement(content).map_err(|error| error.at_line(line_number, line))? {
            Statement::Node { name, category } => network.add_node(name, category)?,
            Statement::Arc { from, to, capacity } => network.add_arc(from, to, capacity)?,
        }
    }

    debug!("Read network of {} nodes and {} arcs", network.nr_nodes(), network.nr_arcs());
    Ok(network)
}

/// A single meaningful line.
#[derive(Debug, Eq, PartialEq)]
enum Statement<F> {
    Node {
        name: String,
        category: Category,
    },
    Arc {
        from: String,
        to: String,
        capacity: Capacity<F>,
    },
}

fn parse_statement<F: FlowNumber + Parse>(content: &str) -> ParseResult<Statement<F>> {
    let (keyword, rest) = split_first_word(content, "statement keyword")?;

    match keyword {
        "node" => {
            let (category, name) = split_first_word(rest, "node category")?;
            let category = category.parse().map_err(ParseError::new)?;

            Ok(Statement::Node { name: name.to_string(), category })
        },
        "arc" => {
            let (capacity, endpoints) = split_first_word(rest, "arc capacity")?;
            let capacity = match capacity {
                "inf" => Capacity::Unbounded,
                text => Capacity::Finite(F::parse(text)?),
            };
            let (from, to) = endpoints.split_once("->")
                .map(|(from, to)| (from.trim(), to.trim()))
                .filter(|(from, to)| !from.is_empty() && !to.is_empty())
                .ok_or_else(|| ParseError::new(format!(
                    "Expected \"<from> -> <to>\", found \"{endpoints}\"",
                )))?;

            Ok(Statement::Arc { from: from.to_string(), to: to.to_string(), capacity })
        },
        other => Err(ParseError::new(format!(
            "Unknown statement \"{other}\", expected \"node\" or \"arc\"",
        ))),
    }
}

/// Split off the first word, the remainder should not be empty.
fn split_first_word<'a>(text: &'a str, what: &str) -> ParseResult<(&'a str, &'a str)> {
    text.split_once(char::is_whitespace)
        .map(|(word, rest)| (word, rest.trim()))
        .filter(|(_, rest)| !rest.is_empty())
        .ok_or_else(|| ParseError::new(format!("Expected more after {what} \"{text}\"")))
}
