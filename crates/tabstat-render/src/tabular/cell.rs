//! Cell values and their display widths.
//!
//! A [`Cell`] is the closed set of value shapes a column can hold: integers,
//! floats, text, characters, sequences, absent values and nested tables.
//! Every shape implements [`Render`], which pairs a width computation with
//! the routine that writes the value. The two must agree: the width of a
//! cell is the display width of the widest line its rendering produces.
//!
//! ```rust
//! use tabstat_render::tabular::{Cell, Render};
//! use tabstat_render::RenderConfig;
//!
//! let config = RenderConfig::default();
//! assert_eq!(Cell::from(-42).width(&config), 3);
//! assert_eq!(Cell::from(2.5).width(&config), 4);      // "2.50"
//! assert_eq!(Cell::from(3.0).width(&config), 1);      // "3"
//! assert_eq!(Cell::from(vec![1, 22]).width(&config), 5); // "1, 22"
//! assert_eq!(Cell::from(None::<i64>).width(&config), 4); // "None"
//! ```

use std::fmt;
use std::ops::Range;

use serde_json::Value;

use super::column::Column;
use super::table::Table;
use super::util::{display_width, last_line_width, widest_line};
use crate::config::{RenderConfig, SequenceOverflow};

/// Text shown for absent values and empty sequences.
pub const NONE_TEXT: &str = "None";

/// Separator between sequence elements on the same line.
pub const SEQ_SEPARATOR: &str = ", ";

/// Suffix of a truncated sequence.
pub const SEQ_ELLIPSIS: &str = ", ...";

/// Capability shared by everything a [`Column`] can store.
///
/// `width` must return the display width of the widest line `render`
/// writes under the same configuration. Trailing padding is the column's
/// job and is not part of either.
pub trait Render {
    /// Display width of the rendered value.
    fn width(&self, config: &RenderConfig) -> usize;

    /// Writes the value, without padding.
    fn render<W: fmt::Write + ?Sized>(&mut self, out: &mut W, config: &RenderConfig)
        -> fmt::Result;

    /// Restores any render state so the next `render` matches the first.
    fn rewind(&mut self) {}
}

/// A single value held by a column.
#[derive(Debug)]
pub enum Cell {
    /// Signed integer.
    Int(i64),
    /// Fractional number, shown with the configured number of digits.
    Float(f64),
    /// Text, measured in display cells.
    Text(String),
    /// A single character.
    Char(char),
    /// Elements joined by `", "`, wrapped or truncated past the threshold.
    Seq(Vec<Cell>),
    /// A missing value, shown as `None`.
    Absent,
    /// A table rendered inside the cell.
    Table(Box<Table>),
}

impl Cell {
    /// Returns true for [`Cell::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Cell::Absent)
    }

    fn extent(&self, config: &RenderConfig) -> Extent {
        match self {
            Cell::Int(n) => Extent::flat(int_width(*n)),
            Cell::Float(x) => Extent::flat(format_float(*x, config.float_digits).len()),
            Cell::Text(s) => Extent::of_text(s),
            Cell::Char(c) => Extent::flat(display_width(c.encode_utf8(&mut [0; 4]))),
            Cell::Seq(items) => seq_extent(items, config),
            Cell::Absent => Extent::flat(NONE_TEXT.len()),
            // Embedded tables open and close with a border of the frame width.
            Cell::Table(table) => Extent {
                first: table.frame_width(),
                widest: table.display_width(),
                last: table.frame_width(),
                multiline: true,
            },
        }
    }
}

impl Render for Cell {
    fn width(&self, config: &RenderConfig) -> usize {
        self.extent(config).widest
    }

    fn render<W: fmt::Write + ?Sized>(
        &mut self,
        out: &mut W,
        config: &RenderConfig,
    ) -> fmt::Result {
        match self {
            Cell::Int(n) => write!(out, "{}", n),
            Cell::Float(x) => out.write_str(&format_float(*x, config.float_digits)),
            Cell::Text(s) => out.write_str(s),
            Cell::Char(c) => out.write_char(*c),
            Cell::Seq(items) => render_seq(items, out, config),
            Cell::Absent => out.write_str(NONE_TEXT),
            Cell::Table(table) => table.dump_embedded(out),
        }
    }

    fn rewind(&mut self) {
        match self {
            Cell::Seq(items) => items.iter_mut().for_each(Render::rewind),
            Cell::Table(table) => table.reset(),
            _ => {}
        }
    }
}

/// Display width of a signed integer: its digits plus one for a minus sign.
pub fn int_width(value: i64) -> usize {
    let digits = value
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |d| d as usize + 1);
    if value < 0 {
        digits + 1
    } else {
        digits
    }
}

/// Formats a float the way cells show it.
///
/// Whole numbers print without a fractional part, everything else with
/// exactly `digits` fractional digits. Negative zero prints as `0`.
pub fn format_float(value: f64, digits: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.*}", digits, value)
    }
}

/// Widths of the first, widest and last line of some rendered text.
///
/// Sequences place their elements on shared lines, so a multi-line element
/// widens the line it starts on and the line it ends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Extent {
    first: usize,
    widest: usize,
    last: usize,
    multiline: bool,
}

impl Extent {
    const LINE_BREAK: Extent = Extent {
        first: 0,
        widest: 0,
        last: 0,
        multiline: true,
    };

    fn flat(width: usize) -> Self {
        Extent {
            first: width,
            widest: width,
            last: width,
            multiline: false,
        }
    }

    fn of_text(s: &str) -> Self {
        Extent {
            first: s.split('\n').next().map_or(0, display_width),
            widest: widest_line(s),
            last: last_line_width(s),
            multiline: s.contains('\n'),
        }
    }

    /// The extent of `next` written right after `self`.
    fn then(self, next: Extent) -> Extent {
        let joined = self.last + next.first;
        if !self.multiline && !next.multiline {
            return Extent::flat(joined);
        }
        Extent {
            first: if self.multiline { self.first } else { joined },
            widest: self.widest.max(next.widest).max(joined),
            last: if next.multiline { next.last } else { joined },
            multiline: true,
        }
    }
}

/// Element ranges per rendered line, and whether an ellipsis follows.
struct SeqLayout {
    lines: Vec<Range<usize>>,
    ellipsis: bool,
}

fn seq_layout(len: usize, config: &RenderConfig) -> SeqLayout {
    let threshold = config.threshold();
    match config.overflow {
        SequenceOverflow::Wrap => SeqLayout {
            lines: (0..len)
                .step_by(threshold)
                .map(|start| start..(start + threshold).min(len))
                .collect(),
            ellipsis: false,
        },
        SequenceOverflow::Truncate => SeqLayout {
            lines: vec![0..len.min(threshold)],
            ellipsis: len > threshold,
        },
    }
}

/// Mirrors `render_seq` piece by piece.
fn seq_extent(items: &[Cell], config: &RenderConfig) -> Extent {
    if items.is_empty() {
        return Extent::flat(NONE_TEXT.len());
    }
    let layout = seq_layout(items.len(), config);
    let mut extent = Extent::flat(0);
    for (i, range) in layout.lines.iter().enumerate() {
        if i > 0 {
            extent = extent.then(Extent::flat(1)).then(Extent::LINE_BREAK);
        }
        for (j, item) in items[range.clone()].iter().enumerate() {
            if j > 0 {
                extent = extent.then(Extent::flat(SEQ_SEPARATOR.len()));
            }
            extent = extent.then(item.extent(config));
        }
    }
    if layout.ellipsis {
        extent = extent.then(Extent::flat(SEQ_ELLIPSIS.len()));
    }
    extent
}

fn render_seq<W: fmt::Write + ?Sized>(
    items: &mut [Cell],
    out: &mut W,
    config: &RenderConfig,
) -> fmt::Result {
    if items.is_empty() {
        return out.write_str(NONE_TEXT);
    }
    let layout = seq_layout(items.len(), config);
    for (i, range) in layout.lines.iter().enumerate() {
        if i > 0 {
            out.write_str(",\n")?;
        }
        for (j, item) in items[range.clone()].iter_mut().enumerate() {
            if j > 0 {
                out.write_str(SEQ_SEPARATOR)?;
            }
            item.render(out, config)?;
        }
    }
    if layout.ellipsis {
        out.write_str(SEQ_ELLIPSIS)?;
    }
    Ok(())
}

impl From<Table> for Cell {
    fn from(table: Table) -> Self {
        Cell::Table(Box::new(table))
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<f32> for Cell {
    fn from(value: f32) -> Self {
        Cell::Float(f64::from(value))
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<&String> for Cell {
    fn from(value: &String) -> Self {
        Cell::Text(value.clone())
    }
}

impl From<char> for Cell {
    fn from(value: char) -> Self {
        Cell::Char(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Text(value.to_string())
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Absent, Into::into)
    }
}

impl<T: Into<Cell>> From<Vec<T>> for Cell {
    fn from(items: Vec<T>) -> Self {
        Cell::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Cell>> From<&[T]> for Cell {
    fn from(items: &[T]) -> Self {
        Cell::Seq(items.iter().cloned().map(Into::into).collect())
    }
}

macro_rules! cell_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Cell {
                fn from(value: $t) -> Self {
                    Cell::Int(i64::from(value))
                }
            }
        )*
    };
}

cell_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Wider integers fall back to text when they do not fit an i64.
macro_rules! cell_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Cell {
                fn from(value: $t) -> Self {
                    match i64::try_from(value) {
                        Ok(n) => Cell::Int(n),
                        Err(_) => Cell::Text(value.to_string()),
                    }
                }
            }
        )*
    };
}

cell_from_wide_int!(i128, isize, u64, u128, usize);

/// Converts JSON data into cells.
///
/// Objects become a nested two-column key/value table, arrays become
/// sequences and `null` becomes [`Cell::Absent`].
impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Cell::Absent,
            Value::Bool(b) => Cell::from(b),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Cell::Int(i),
                (None, Some(x)) => Cell::Float(x),
                (None, None) => Cell::Text(n.to_string()),
            },
            Value::String(s) => Cell::Text(s),
            Value::Array(items) => Cell::Seq(items.into_iter().map(Cell::from).collect()),
            Value::Object(map) => {
                let mut keys: Column = Column::new(0, 2, "");
                let mut values: Column = Column::new(0, 0, "");
                for (key, value) in map {
                    keys.add_item(key);
                    values.add_item(Cell::from(value));
                }
                Cell::from(Table::new(vec![keys, values], ""))
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn assert_width_matches(mut cell: Cell, config: &RenderConfig) -> Result<(), TestCaseError> {
        let width = cell.width(config);
        let mut out = String::new();
        cell.render(&mut out, config).unwrap();
        prop_assert_eq!(width, widest_line(&out), "rendered {:?}", out);
        Ok(())
    }

    proptest! {
        #[test]
        fn int_width_matches_rendering(n in any::<i64>()) {
            prop_assert_eq!(int_width(n), n.to_string().len());
        }

        #[test]
        fn float_width_matches_rendering(x in -1e9f64..1e9, digits in 0usize..6) {
            let config = RenderConfig::new().with_float_digits(digits);
            assert_width_matches(Cell::from(x), &config)?;
        }

        #[test]
        fn sequence_width_matches_rendering(
            items in proptest::collection::vec(any::<i32>(), 0..40),
            threshold in 0usize..15,
            truncate in any::<bool>(),
        ) {
            let overflow = if truncate { SequenceOverflow::Truncate } else { SequenceOverflow::Wrap };
            let config = RenderConfig::new().with_wrap_threshold(threshold).with_overflow(overflow);
            assert_width_matches(Cell::from(items), &config)?;
        }

        #[test]
        fn wrapped_lines_hold_threshold_elements(
            len in 1usize..60,
            threshold in 1usize..12,
        ) {
            let config = RenderConfig::new().with_wrap_threshold(threshold);
            let mut cell = Cell::from(vec![0i64; len]);
            let mut out = String::new();
            cell.render(&mut out, &config).unwrap();
            let lines: Vec<&str> = out.split('\n').collect();
            prop_assert_eq!(lines.len(), len.div_ceil(threshold));
            for (i, line) in lines.iter().enumerate() {
                let count = line.split(',').filter(|part| !part.trim().is_empty()).count();
                let expected = if i + 1 < lines.len() { threshold } else { len - threshold * i };
                prop_assert_eq!(count, expected);
            }
        }

        #[test]
        fn multiline_elements_width_matches_rendering(
            items in proptest::collection::vec("[a-z]{0,5}(\n[a-z]{0,5}){0,2}", 0..12),
            threshold in 1usize..5,
        ) {
            let config = RenderConfig::new().with_wrap_threshold(threshold);
            assert_width_matches(Cell::from(items), &config)?;
        }

        #[test]
        fn optional_width_matches_rendering(value in proptest::option::of(any::<i64>())) {
            assert_width_matches(Cell::from(value), &RenderConfig::default())?;
        }
    }
}
