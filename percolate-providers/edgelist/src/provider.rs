//! Edge-list and node-list readers.

use std::io::BufRead;

use percolate_core::{Edge, EdgeList};
use tracing::{Span, debug, field, instrument};

use crate::{errors::EdgeListError, format::EdgeListFormat};

/// Edge stream loaded from delimited text.
///
/// Rows keep their file order. Blank lines and lines starting with `#` are
/// skipped, labels are trimmed and columns after the third are ignored.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use percolate_providers_edgelist::{EdgeListFormat, EdgeListProvider};
///
/// let text = "# strongest first\na\tb\t0.9\nb\tc\t0.4\n";
/// let provider =
///     EdgeListProvider::try_from_reader("demo", Cursor::new(text), &EdgeListFormat::default())?;
/// assert_eq!(provider.name(), "demo");
/// assert_eq!(provider.edges().len(), 2);
/// assert!(provider.edges().is_sorted_by_strength());
/// # Ok::<(), percolate_providers_edgelist::EdgeListError>(())
/// ```
#[derive(Clone, Debug)]
pub struct EdgeListProvider {
    name: String,
    edges: EdgeList<String>,
}

impl EdgeListProvider {
    /// Parses every row of `reader`.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] on I/O failure or a malformed row. An input
    /// with no rows is valid and yields an empty edge list.
    #[instrument(name = "edgelist.read", err, skip_all, fields(name = field::Empty))]
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
        format: &EdgeListFormat,
    ) -> Result<Self, EdgeListError> {
        let name = name.into();
        Span::current().record("name", name.as_str());
        let mut edges = Vec::new();
        let mut header_pending = format.has_header();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if is_skippable(&line) {
                continue;
            }
            if header_pending {
                header_pending = false;
                continue;
            }
            edges.push(parse_row(&line, index + 1, format)?);
        }
        debug!(edges = edges.len(), "edge list parsed");
        Ok(Self {
            name,
            edges: EdgeList::new(edges),
        })
    }

    /// Returns the provider name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parsed edges.
    #[must_use]
    pub const fn edges(&self) -> &EdgeList<String> {
        &self.edges
    }

    /// Consumes the provider and returns the edges.
    #[must_use]
    pub fn into_edges(self) -> EdgeList<String> {
        self.edges
    }
}

fn parse_row(
    content: &str,
    line: usize,
    format: &EdgeListFormat,
) -> Result<Edge<String>, EdgeListError> {
    let mut fields = format.delimiter().split(content).map(str::trim);
    let source = label(fields.next(), line, "source")?;
    let target = label(fields.next(), line, "target")?;
    let raw = fields.next().ok_or(EdgeListError::MissingField {
        line,
        field: "strength",
    })?;
    let strength: f64 = raw.parse().map_err(|_| EdgeListError::InvalidStrength {
        line,
        value: raw.to_owned(),
    })?;
    if !strength.is_finite() {
        return Err(EdgeListError::NonFiniteStrength { line });
    }
    Ok(Edge::new(source, target, strength))
}

fn is_skippable(line: &str) -> bool {
    let content = line.trim();
    content.is_empty() || content.starts_with('#')
}

fn label(field: Option<&str>, line: usize, name: &'static str) -> Result<String, EdgeListError> {
    match field {
        None => Err(EdgeListError::MissingField { line, field: name }),
        Some("") => Err(EdgeListError::EmptyLabel { line, field: name }),
        Some(value) => Ok(value.to_owned()),
    }
}

/// Reads one node label per line, skipping blanks and `#` comments.
///
/// # Errors
/// Returns [`EdgeListError::Io`] when reading fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use percolate_providers_edgelist::read_node_list;
///
/// let nodes = read_node_list(Cursor::new("a\n\n b \n# c\n"))?;
/// assert_eq!(nodes, vec!["a".to_owned(), "b".to_owned()]);
/// # Ok::<(), percolate_providers_edgelist::EdgeListError>(())
/// ```
pub fn read_node_list<R: BufRead>(reader: R) -> Result<Vec<String>, EdgeListError> {
    let mut nodes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if is_skippable(&line) {
            continue;
        }
        nodes.push(line.trim().to_owned());
    }
    Ok(nodes)
}
