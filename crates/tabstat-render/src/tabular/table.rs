//! Bordered tables of row-synchronized columns.
//!
//! A [`Table`] owns its columns and renders them side by side: row `n` of
//! the output holds the `n`-th cell of every column. Columns shorter than
//! the tallest one contribute blank space of their own width once they run
//! out, so ragged columns render as empty fields rather than shifting their
//! neighbours.
//!
//! The layout is a double-line border, the centered title, a single-line
//! separator, the rows, and a closing double-line border:
//!
//! ```rust
//! use tabstat_render::tabular::{Column, Table};
//!
//! let mut a: Column = Column::new(1, 2, "A");
//! a.add_items([1, 22, 333]);
//! let mut b: Column = Column::new(0, 1, "B");
//! b.add_items(["x", "yy"]);
//!
//! let mut table = Table::new(vec![a, b], "Demo");
//! assert_eq!(table.total_width(), 9);
//!
//! let rendered = table.render();
//! let lines: Vec<&str> = rendered.lines().collect();
//! assert_eq!(lines, [
//!     "═════════",
//!     "  Demo   ",
//!     "─────────",
//!     " A    B  ",
//!     " 1    x  ",
//!     " 22   yy ",
//!     " 333     ",
//!     "═════════",
//! ]);
//! ```
//!
//! Rendering is pull-based: [`Table::next_row`] writes one row per call and
//! [`Table::dump_to`] drives it to completion. Once every column is
//! exhausted the table is [`Phase::Done`]; dumping it again writes the frame
//! with no rows until [`Table::reset`] is called.

use std::fmt;
use std::io;

use tracing::{debug, trace, warn};

use super::cell::{Cell, Render};
use super::column::{Column, Step};
use super::util::{display_width, double_line, n_space, pad_center, single_line, IoAdapter};
use crate::error::RenderError;

/// Where a table is in its render cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing rendered since construction or the last reset.
    NotStarted,
    /// The frame header is out; the title row has not been written.
    TitlePending,
    /// Data rows are being written.
    RowsStreaming,
    /// Every column is exhausted.
    Done,
}

/// A titled set of columns rendered as synchronized rows.
#[derive(Debug)]
pub struct Table<C = Cell> {
    columns: Vec<Column<C>>,
    title: String,
    total_width: usize,
    console_width: Option<usize>,
    self_centered: bool,
    phase: Phase,
}

impl<C: Render> Table<C> {
    /// Create a table sized to its columns.
    pub fn new(columns: Vec<Column<C>>, title: impl Into<String>) -> Self {
        let total_width = columns.iter().map(Column::width).sum();
        Table {
            columns,
            title: title.into(),
            total_width,
            console_width: None,
            self_centered: false,
            phase: Phase::NotStarted,
        }
    }

    /// Create a table laid out in a console of `console_width` cells.
    ///
    /// With `self_centered` the borders span the console and the rows are
    /// indented to sit in the middle. Content wider than the console is
    /// not indented and not truncated.
    pub fn with_console(
        columns: Vec<Column<C>>,
        title: impl Into<String>,
        console_width: usize,
        self_centered: bool,
    ) -> Self {
        let mut table = Self::new(columns, title);
        table.console_width = Some(console_width);
        table.self_centered = self_centered;
        table
    }

    /// Sum of the column widths.
    pub fn total_width(&self) -> usize {
        self.total_width
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn console_width(&self) -> Option<usize> {
        self.console_width
    }

    pub fn is_self_centered(&self) -> bool {
        self.self_centered && self.console_width.is_some()
    }

    pub fn columns(&self) -> &[Column<C>] {
        &self.columns
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of data rows: the length of the tallest column.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(Column::len).max().unwrap_or(0)
    }

    /// Returns true if any column has a title, i.e. a title row is rendered.
    pub fn has_title_row(&self) -> bool {
        self.columns.iter().any(Column::has_title)
    }

    /// Width of the borders: the console when centered, else the columns.
    pub fn frame_width(&self) -> usize {
        match self.console_width {
            Some(console) if self.self_centered => console,
            _ => self.total_width,
        }
    }

    /// Spaces written before every row to center the columns in the frame.
    pub fn lead(&self) -> usize {
        match self.console_width {
            Some(console) if self.self_centered => console.saturating_sub(self.total_width) / 2,
            _ => 0,
        }
    }

    /// Width of the widest line the table renders.
    pub fn display_width(&self) -> usize {
        self.frame_width()
            .max(self.lead() + self.total_width)
            .max(display_width(&self.title))
    }

    /// Rewind every column so the next dump renders all rows again.
    pub fn reset(&mut self) {
        self.columns.iter_mut().for_each(Column::reset);
        self.phase = Phase::NotStarted;
    }

    /// Write the next row, returning false once there are none left.
    ///
    /// The first row is the title row when any column has a title. Every
    /// row ends with a line break.
    pub fn next_row<W: fmt::Write + ?Sized>(&mut self, out: &mut W) -> Result<bool, fmt::Error> {
        match self.phase {
            Phase::Done => return Ok(false),
            Phase::NotStarted | Phase::TitlePending => {
                self.phase = Phase::RowsStreaming;
                if self.has_title_row() {
                    self.write_title_row(out)?;
                    return Ok(true);
                }
            }
            Phase::RowsStreaming => {}
        }

        if self.columns.iter().all(|column| column.remaining() == 0) {
            self.phase = Phase::Done;
            return Ok(false);
        }

        out.write_str(&n_space(self.lead()))?;
        for column in &mut self.columns {
            if column.render_next(out)? == Step::Exhausted {
                out.write_str(&n_space(column.width()))?;
            }
        }
        out.write_char('\n')?;
        trace!(phase = ?self.phase, "rendered table row");
        Ok(true)
    }

    fn write_title_row<W: fmt::Write + ?Sized>(&mut self, out: &mut W) -> fmt::Result {
        out.write_str(&n_space(self.lead()))?;
        for column in &mut self.columns {
            // Columns without cells have nothing to render, not even a title.
            if !column.has_title() || column.render_next(out)? == Step::Exhausted {
                out.write_str(&n_space(column.width()))?;
            }
        }
        out.write_char('\n')
    }

    /// Render the whole table, ending with a line break.
    pub fn dump_to<W: fmt::Write + ?Sized>(&mut self, out: &mut W) -> fmt::Result {
        self.dump_embedded(out)?;
        out.write_char('\n')
    }

    /// Render the whole table without the final line break, so a column
    /// holding this table can pad the bottom border.
    pub(crate) fn dump_embedded<W: fmt::Write + ?Sized>(&mut self, out: &mut W) -> fmt::Result {
        debug!(
            title = %self.title,
            columns = self.columns.len(),
            rows = self.row_count(),
            total_width = self.total_width,
            frame_width = self.frame_width(),
            "rendering table"
        );
        let frame = self.frame_width();
        writeln!(out, "{}", double_line(frame))?;
        writeln!(out, "{}", pad_center(&self.title, frame))?;
        writeln!(out, "{}", single_line(frame))?;
        if self.phase == Phase::NotStarted {
            self.phase = Phase::TitlePending;
        }
        while self.next_row(out)? {}
        out.write_str(&double_line(frame))
    }

    /// Render the whole table into a string.
    ///
    /// A cell that fails to render stops the table there; the text written
    /// up to that point is returned.
    pub fn render(&mut self) -> String {
        let mut out = String::new();
        if let Err(err) = self.dump_to(&mut out) {
            warn!(%err, title = %self.title, "table rendering stopped early");
        }
        out
    }

    /// Render the whole table into an I/O sink.
    pub fn write_to<W: io::Write + ?Sized>(&mut self, writer: &mut W) -> Result<(), RenderError> {
        let mut adapter = IoAdapter::new(writer);
        match self.dump_to(&mut adapter) {
            Ok(()) => Ok(()),
            Err(err) => Err(adapter.error.take().map_or(RenderError::Format(err), RenderError::Io)),
        }
    }
}
