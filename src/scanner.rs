//! Line scanning for sink reports.
//!
//! [`Lines`] splits a report on `\n` or `\r\n` and keeps empty lines, since a
//! blank line terminates each sink. Lines are addressed by index; the parser
//! threads the index through its recursion instead of sharing a cursor.

/// The lines of one report, in order.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Lines<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let lines = input
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        Lines { lines }
    }

    /// Returns the line at `index`, or `None` past the end of input.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Counts the leading tab characters of `line`. Spaces never count.
#[inline]
#[must_use]
pub fn tab_depth(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'\t').count()
}
