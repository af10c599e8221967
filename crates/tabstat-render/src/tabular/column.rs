//! Resettable columns of cells sharing one width.
//!
//! A [`Column`] stores its cells in insertion order and renders them one at
//! a time through [`Column::render_next`]. Every cell is padded on the right
//! to the column's widest cell plus the right padding, so consecutive
//! columns line up without any separator between them.
//!
//! ```rust
//! use tabstat_render::tabular::{Column, Step};
//!
//! let mut column: Column = Column::new(1, 2, "A");
//! column.add_items([1, 22, 333]);
//! assert_eq!(column.width(), 1 + 3 + 2);
//!
//! let mut out = String::new();
//! assert_eq!(column.render_next(&mut out).unwrap(), Step::Title);
//! assert_eq!(column.render_next(&mut out).unwrap(), Step::Cell);
//! assert_eq!(out, " A     1    ");
//! ```

use std::fmt;

use super::cell::{Cell, Render};
use super::util::{display_width, last_line_width, n_space};
use crate::config::RenderConfig;

/// What a call to [`Column::render_next`] wrote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The title row.
    Title,
    /// The cell at the cursor; the cursor moved forward.
    Cell,
    /// Nothing: every cell has been rendered.
    Exhausted,
}

/// An ordered, resettable sequence of cells rendered at a common width.
#[derive(Debug)]
pub struct Column<C = Cell> {
    left_pad: usize,
    right_pad: usize,
    title: String,
    max_width: usize,
    cells: Vec<C>,
    cursor: usize,
    title_emitted: bool,
    config: RenderConfig,
}

impl<C: Render> Column<C> {
    /// Create an empty column with the given paddings and title.
    ///
    /// The title counts toward the column width even when no cells follow.
    pub fn new(left_pad: usize, right_pad: usize, title: impl Into<String>) -> Self {
        let title = title.into();
        Column {
            left_pad,
            right_pad,
            max_width: display_width(&title),
            title,
            cells: Vec::new(),
            cursor: 0,
            title_emitted: false,
            config: RenderConfig::default(),
        }
    }

    /// Measure and render cells with `config` instead of the default.
    ///
    /// Cells added before the call are measured again.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self.max_width = self
            .cells
            .iter()
            .map(|cell| cell.width(&config))
            .fold(display_width(&self.title), usize::max);
        self
    }

    /// Add a cell, builder style.
    pub fn item(mut self, value: impl Into<C>) -> Self {
        self.add_item(value);
        self
    }

    /// Append one cell, widening the column if the cell is wider.
    pub fn add_item(&mut self, value: impl Into<C>) -> &mut Self {
        let cell = value.into();
        self.max_width = self.max_width.max(cell.width(&self.config));
        self.cells.push(cell);
        self
    }

    /// Append every value of `items`, in order.
    pub fn add_items<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<C>,
    {
        for item in items {
            self.add_item(item);
        }
        self
    }

    /// Total width: left padding, widest content and right padding.
    pub fn width(&self) -> usize {
        self.left_pad + self.max_width + self.right_pad
    }

    /// Width of the widest cell or title, without padding.
    pub fn content_width(&self) -> usize {
        self.max_width
    }

    /// Number of cells. The title is not counted.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true when the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells not yet rendered since the last reset.
    pub fn remaining(&self) -> usize {
        self.cells.len() - self.cursor
    }

    /// Returns true once every cell has been rendered.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn left_pad(&self) -> usize {
        self.left_pad
    }

    pub fn right_pad(&self) -> usize {
        self.right_pad
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Iterate over the stored cells.
    pub fn cells(&self) -> impl Iterator<Item = &C> {
        self.cells.iter()
    }

    /// Render the next row of this column.
    ///
    /// Past the last cell nothing is written, so a column without cells
    /// never writes its title. Otherwise the title comes first, once per
    /// reset cycle, without moving the cursor. After that each call writes
    /// the left padding, the cell at the cursor and its trailing padding,
    /// then advances.
    pub fn render_next<W: fmt::Write + ?Sized>(&mut self, out: &mut W) -> Result<Step, fmt::Error> {
        if self.cursor >= self.cells.len() {
            return Ok(Step::Exhausted);
        }

        if !self.title_emitted && self.has_title() {
            let padding = self.max_width - display_width(&self.title) + self.right_pad;
            write!(
                out,
                "{}{}{}",
                n_space(self.left_pad),
                self.title,
                n_space(padding)
            )?;
            self.title_emitted = true;
            return Ok(Step::Title);
        }

        let cell = &mut self.cells[self.cursor];
        let mut text = String::new();
        cell.render(&mut text, &self.config)?;
        let padding = self.max_width.saturating_sub(last_line_width(&text)) + self.right_pad;
        write!(out, "{}{}{}", n_space(self.left_pad), text, n_space(padding))?;
        self.cursor += 1;
        Ok(Step::Cell)
    }

    /// Rewind to the title and first cell. Stored cells are kept.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.title_emitted = false;
        self.cells.iter_mut().for_each(Render::rewind);
    }
}

impl<C: Render, T: Into<C>> Extend<T> for Column<C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_items(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SequenceOverflow;
    use crate::tabular::util::widest_line;

    fn drain(column: &mut Column) -> Vec<String> {
        let mut rows = Vec::new();
        loop {
            let mut out = String::new();
            if column.render_next(&mut out).unwrap() == Step::Exhausted {
                assert!(out.is_empty());
                return rows;
            }
            rows.push(out);
        }
    }

    #[test]
    fn empty_column_reports_title_width() {
        let column: Column = Column::new(2, 3, "Median");
        assert_eq!(column.content_width(), 6);
        assert_eq!(column.width(), 11);
        assert_eq!(column.len(), 0);
        assert!(column.is_empty());
    }

    #[test]
    fn width_grows_with_widest_item() {
        let mut column: Column = Column::new(1, 1, "n");
        column.add_item(5);
        assert_eq!(column.width(), 3);
        column.add_item(-1234);
        assert_eq!(column.width(), 7);
        column.add_item(1);
        assert_eq!(column.width(), 7);
    }

    #[test]
    fn cells_padded_to_common_width() {
        let mut column: Column = Column::new(1, 2, "A");
        column.add_items([1, 22, 333]);
        let rows = drain(&mut column);
        assert_eq!(rows, vec![" A    ", " 1    ", " 22   ", " 333  "]);
        assert!(rows.iter().all(|row| row.len() == column.width()));
    }

    #[test]
    fn untitled_column_starts_with_cells() {
        let mut column: Column = Column::new(0, 1, "");
        column.add_items(["x", "yy"]);
        let rows = drain(&mut column);
        assert_eq!(rows, vec!["x  ", "yy "]);
    }

    #[test]
    fn title_only_column_renders_nothing() {
        let mut column: Column = Column::new(0, 0, "T");
        let mut out = String::new();
        assert_eq!(column.render_next(&mut out).unwrap(), Step::Exhausted);
        assert_eq!(column.render_next(&mut out).unwrap(), Step::Exhausted);
        assert_eq!(out, "");
        assert!(column.is_exhausted());
        assert_eq!(column.width(), 1);
    }

    #[test]
    fn title_then_single_cell() {
        let mut column: Column = Column::new(0, 0, "T");
        column.add_item(5);
        assert!(!column.is_exhausted());
        let rows = drain(&mut column);
        assert_eq!(rows, vec!["T", "5"]);
        assert!(column.is_exhausted());
    }

    #[test]
    fn exhausted_column_is_a_no_op() {
        let mut column: Column = Column::new(0, 0, "");
        column.add_item(1);
        let mut out = String::new();
        column.render_next(&mut out).unwrap();
        for _ in 0..3 {
            assert_eq!(column.render_next(&mut out).unwrap(), Step::Exhausted);
        }
        assert_eq!(out, "1");
    }

    #[test]
    fn absent_and_empty_sequence_pad_like_none() {
        let mut column: Column = Column::new(0, 2, "");
        column.add_item(None::<i64>);
        column.add_item(Vec::<i64>::new());
        let rows = drain(&mut column);
        assert_eq!(rows, vec!["None  ", "None  "]);
    }

    #[test]
    fn reset_replays_identically() {
        let mut column: Column = Column::new(1, 1, "values");
        column.add_item(vec![1.5, 2.25]);
        column.add_item("text");
        column.add_item(None::<i32>);
        let first = drain(&mut column);
        column.reset();
        let second = drain(&mut column);
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn reset_mid_way_restarts_at_title() {
        let mut column: Column = Column::new(0, 0, "h");
        column.add_items([1, 2, 3]);
        let mut out = String::new();
        column.render_next(&mut out).unwrap();
        column.render_next(&mut out).unwrap();
        assert_eq!(column.remaining(), 2);
        column.reset();
        assert_eq!(column.remaining(), 3);
        let mut again = String::new();
        assert_eq!(column.render_next(&mut again).unwrap(), Step::Title);
    }

    #[test]
    fn wrapped_sequence_pads_last_line() {
        let config = RenderConfig::new().with_wrap_threshold(2);
        let mut column: Column = Column::new(0, 1, "").with_config(config);
        column.add_item(vec![100, 200, 3]);
        assert_eq!(column.content_width(), "100, 200,".len());
        let rows = drain(&mut column);
        assert_eq!(rows, vec!["100, 200,\n3         "]);
    }

    #[test]
    fn with_config_remeasures_existing_cells() {
        let mut column: Column = Column::new(0, 0, "");
        column.add_item(1.5);
        assert_eq!(column.content_width(), 4);
        let column = column.with_config(RenderConfig::new().with_float_digits(4));
        assert_eq!(column.content_width(), 6);
    }

    #[test]
    fn truncated_sequence_fits_column() {
        let config = RenderConfig::new()
            .with_wrap_threshold(2)
            .with_overflow(SequenceOverflow::Truncate);
        let mut column: Column = Column::new(0, 0, "").with_config(config);
        column.add_item(vec![1, 2, 3, 4]);
        let rows = drain(&mut column);
        assert_eq!(rows, vec!["1, 2, ..."]);
        assert_eq!(column.content_width(), widest_line(&rows[0]));
    }

    #[test]
    fn extend_and_builder_add_items() {
        let mut column: Column = Column::new(0, 0, "").item('a').item("bcd");
        column.extend(vec![1, 2]);
        assert_eq!(column.len(), 4);
        assert_eq!(column.content_width(), 3);
    }
}
