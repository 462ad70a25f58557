//! Edge-list input and order output.
//!
//! Input format (one item per line, surrounding whitespace ignored):
//! - `n`: node count
//! - `m`: edge count
//! - `m` lines `u v`: edge u → v, appended to u's adjacency in file order
//! - `s`: start node
//!
//! Output format: the pre-order, then the post-order, one node per line.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::dfs::Traversal;
use crate::graph::Graph;

/// Suffix replacing the input file's extension to name the output file.
pub const OUTPUT_SUFFIX: &str = "_output.txt";

/// A parsed input file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphInput {
    /// Declared node count; labels are not checked against it.
    pub node_count: usize,
    pub graph: Graph,
    pub start: String,
}

/// Error type for reading graph files. Line numbers are 1-based.
#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    MissingLine { line: usize, expected: &'static str },
    InvalidCount { line: usize, what: &'static str, text: String },
    InvalidStart { line: usize, text: String },
    MalformedEdge { line: usize, text: String },
}

impl LoadError {
    fn missing(line: usize, expected: &'static str) -> Self {
        Self::MissingLine { line, expected }
    }

    fn count(line: usize, what: &'static str, text: &str) -> Self {
        Self::InvalidCount {
            line,
            what,
            text: text.to_owned(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::MissingLine { line, expected } => {
                write!(f, "line {line}: unexpected end of input, expected {expected}")
            }
            Self::InvalidCount { line, what, text } => {
                write!(f, "line {line}: {what} must be a non-negative integer, got {text:?}")
            }
            Self::InvalidStart { line, text } => {
                write!(f, "line {line}: start node must be an integer, got {text:?}")
            }
            Self::MalformedEdge { line, text } => {
                write!(f, "line {line}: expected edge `u v`, got {text:?}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Numbered, trimmed lines with I/O errors surfaced.
struct Lines<R> {
    inner: io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Lines<R> {
    fn next_line(&mut self, expected: &'static str) -> Result<String, LoadError> {
        self.line += 1;
        match self.inner.next() {
            Some(l) => Ok(l?.trim().to_owned()),
            None => Err(LoadError::missing(self.line, expected)),
        }
    }

    fn next_count(&mut self, what: &'static str) -> Result<usize, LoadError> {
        let text = self.next_line(what)?;
        text.parse()
            .map_err(|_| LoadError::count(self.line, what, &text))
    }
}

/// Parse the edge-list format from any buffered reader.
pub fn read_graph<R: BufRead>(reader: R) -> Result<GraphInput, LoadError> {
    let mut lines = Lines {
        inner: reader.lines(),
        line: 0,
    };
    let node_count = lines.next_count("node count")?;
    let edge_count = lines.next_count("edge count")?;

    let mut graph = Graph::new();
    for _ in 0..edge_count {
        let text = lines.next_line("edge `u v`")?;
        let mut tokens = text.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(u), Some(v), None) => graph.add_edge(u, v),
            _ => {
                return Err(LoadError::MalformedEdge {
                    line: lines.line,
                    text: text.clone(),
                })
            }
        }
    }

    let text = lines.next_line("start node")?;
    // Re-rendered so that e.g. "07" names node "7".
    let start = text
        .parse::<i64>()
        .map_err(|_| LoadError::InvalidStart {
            line: lines.line,
            text: text.clone(),
        })?
        .to_string();

    Ok(GraphInput {
        node_count,
        graph,
        start,
    })
}

/// Read and parse a graph file.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<GraphInput, LoadError> {
    let file = File::open(path)?;
    read_graph(BufReader::new(file))
}

/// Write pre-order then post-order, one node per line.
pub fn write_orders<W: Write>(mut writer: W, t: &Traversal) -> io::Result<()> {
    for node in t.pre_order.iter().chain(&t.post_order) {
        writeln!(writer, "{node}")?;
    }
    writer.flush()
}

/// Write the orders to `path`, creating its parent directory if needed.
pub fn save_orders<P: AsRef<Path>>(path: P, t: &Traversal) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    write_orders(BufWriter::new(File::create(path)?), t)
}

/// `<dir>/<stem>_output.txt` for an input `<dir>/<stem>.<ext>`.
pub fn output_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph".to_owned());
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}"))
}
