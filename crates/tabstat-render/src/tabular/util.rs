//! Text measurement, padding and rule helpers.
//!
//! Widths are measured in terminal cells: ANSI escape codes count zero and
//! East Asian wide characters count two. None of these functions truncate;
//! content wider than the target is returned unchanged.

use std::fmt;
use std::io;

use console::{measure_text_width, pad_str, Alignment};

/// Character used for the outer borders of a table.
pub const DOUBLE_RULE: char = '═';

/// Character used between a table's title and its rows.
pub const SINGLE_RULE: char = '─';

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// # Example
///
/// ```rust
/// use tabstat_render::tabular::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Display width of the widest line in `s`.
pub fn widest_line(s: &str) -> usize {
    s.split('\n').map(display_width).max().unwrap_or(0)
}

/// Display width of the text after the last line break in `s`.
pub fn last_line_width(s: &str) -> usize {
    s.rsplit('\n').next().map_or(0, display_width)
}

/// A run of `n` spaces.
///
/// Columns pad with explicit runs of spaces rather than width specifiers
/// because the padding depends on the column's widest cell, not on the
/// cell being written.
pub fn n_space(n: usize) -> String {
    " ".repeat(n)
}

/// A horizontal rule of `n` double-line characters.
pub fn double_line(n: usize) -> String {
    rule(DOUBLE_RULE, n)
}

/// A horizontal rule of `n` single-line characters.
pub fn single_line(n: usize) -> String {
    rule(SINGLE_RULE, n)
}

fn rule(ch: char, n: usize) -> String {
    std::iter::repeat(ch).take(n).collect()
}

/// Pads a string on both sides (centers) to reach the target width.
///
/// When the remaining space is odd, the extra space goes on the right.
///
/// # Example
///
/// ```rust
/// use tabstat_render::tabular::pad_center;
///
/// assert_eq!(pad_center("hi", 6), "  hi  ");
/// assert_eq!(pad_center("hi", 5), " hi  ");
/// assert_eq!(pad_center("wide title", 4), "wide title");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Bridges an [`io::Write`] into a [`fmt::Write`], keeping the I/O error
/// that `fmt::Error` cannot carry.
pub(crate) struct IoAdapter<'a, W: io::Write + ?Sized> {
    inner: &'a mut W,
    pub(crate) error: Option<io::Error>,
}

impl<'a, W: io::Write + ?Sized> IoAdapter<'a, W> {
    pub(crate) fn new(inner: &'a mut W) -> Self {
        IoAdapter { inner, error: None }
    }
}

impl<W: io::Write + ?Sized> fmt::Write for IoAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}
