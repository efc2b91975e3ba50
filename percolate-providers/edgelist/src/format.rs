//! Row layout options for delimited edge lists.

/// Field separator used in edge-list rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// A single tab character.
    #[default]
    Tab,
    /// A single comma.
    Comma,
    /// Any run of ASCII or Unicode whitespace.
    Whitespace,
}

impl Delimiter {
    pub(crate) fn split<'a>(self, line: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self {
            Self::Tab => Box::new(line.split('\t')),
            Self::Comma => Box::new(line.split(',')),
            Self::Whitespace => Box::new(line.split_whitespace()),
        }
    }
}

/// Layout of an edge-list file.
///
/// # Examples
/// ```
/// use percolate_providers_edgelist::{Delimiter, EdgeListFormat};
///
/// let format = EdgeListFormat::default()
///     .with_delimiter(Delimiter::Comma)
///     .with_header(true);
/// assert_eq!(format.delimiter(), Delimiter::Comma);
/// assert!(format.has_header());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeListFormat {
    delimiter: Delimiter,
    header: bool,
}

impl EdgeListFormat {
    /// Sets the field separator.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Declares whether the first data row is a header to skip.
    #[must_use]
    pub const fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Returns the field separator.
    #[must_use]
    pub const fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Returns whether a header row is skipped.
    #[must_use]
    pub const fn has_header(&self) -> bool {
        self.header
    }
}
