//! Width-aware columns and row-synchronized tables.
//!
//! This module is the rendering engine. Values go into [`Column`]s as
//! [`Cell`]s; a [`Table`] owns the columns and streams them out one row at
//! a time, every column padded to its widest cell.
//!
//! ## Building Blocks
//!
//! | Type | Role |
//! |------|------|
//! | [`Cell`] | One value: integer, float, text, char, sequence, absent or nested table |
//! | [`Render`] | Width and rendering of a cell shape; the two always agree |
//! | [`Column`] | Ordered cells, a title row and a cursor; resettable |
//! | [`Table`] | Owned columns rendered side by side inside a titled frame |
//!
//! ## Widths
//!
//! - Integers: digits, plus one for a minus sign.
//! - Floats: whole numbers as integers, others with `float_digits` digits.
//! - Text: display cells (wide characters count two, ANSI codes zero).
//! - Sequences: elements joined by `", "`, wrapped or truncated after
//!   `wrap_threshold` elements; an empty sequence shows `None`.
//! - Absent values: `None`.
//! - Nested tables: the table's widest line.
//!
//! ## Example
//!
//! ```rust
//! use tabstat_render::tabular::{Column, Table};
//!
//! let mut names: Column = Column::new(1, 2, "Statistic");
//! names.add_items(["Mean", "Mode"]);
//! let mut values: Column = Column::new(0, 1, "Value");
//! values.add_item(2.5);
//! values.add_item(vec![1, 3]);
//!
//! let mut table = Table::new(vec![names, values], "Summary");
//! let text = table.render();
//! assert!(text.contains(" Mean       2.50 "));
//! assert!(text.contains(" Mode       1, 3 "));
//! ```

mod cell;
mod column;
mod table;
mod util;

pub use cell::{format_float, int_width, Cell, Render, NONE_TEXT, SEQ_ELLIPSIS, SEQ_SEPARATOR};
pub use column::{Column, Step};
pub use table::{Phase, Table};
pub use util::{
    display_width, double_line, last_line_width, n_space, pad_center, single_line, widest_line,
    DOUBLE_RULE, SINGLE_RULE,
};
