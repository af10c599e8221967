//! Convenient re-exports for building tables.
//!
//! ```rust
//! use tabstat_render::prelude::*;
//!
//! let mut column: Column = Column::new(0, 1, "n");
//! column.add_item(1);
//! let table = Table::new(vec![column], "");
//! assert_eq!(table.total_width(), 2);
//! ```

pub use crate::tabular::{Cell, Column, Render, Step, Table};
pub use crate::{RenderConfig, RenderError, SequenceOverflow};
