//! # Tabstat Render - Aligned Text Tables for Terminal Reports
//!
//! `tabstat-render` turns heterogeneous values into aligned, bordered text
//! tables. It is the rendering foundation of the `tabstat` CLI, but knows
//! nothing about statistics: any integer, float, string, optional value,
//! sequence or nested table can go in a cell.
//!
//! ## Core Concepts
//!
//! - [`Cell`]: a closed set of value shapes, each with a display width
//! - [`Column`]: cells sharing one width, with a title row and a cursor
//! - [`Table`]: columns rendered as synchronized rows inside a titled frame
//! - [`RenderConfig`]: float precision, sequence wrapping, console width
//!
//! ## Quick Start
//!
//! ```rust
//! use tabstat_render::{Column, Table};
//!
//! let mut ids: Column = Column::new(1, 2, "Id");
//! ids.add_items([1, 22, 333]);
//!
//! let mut tags: Column = Column::new(0, 1, "Tags");
//! tags.add_item(vec!["a", "b"]);
//! tags.add_item(None::<&str>);
//!
//! let mut table = Table::new(vec![ids, tags], "Items");
//! let output = table.render();
//! assert!(output.contains(" 22   None "));
//! ```
//!
//! ## Configuration
//!
//! A [`RenderConfig`] can be built in code or loaded from YAML:
//!
//! ```rust
//! use tabstat_render::{Column, RenderConfig, SequenceOverflow};
//!
//! let config = RenderConfig::new()
//!     .with_wrap_threshold(3)
//!     .with_overflow(SequenceOverflow::Truncate);
//!
//! let mut column: Column = Column::new(0, 0, "").with_config(config);
//! column.add_item(vec![1, 2, 3, 4, 5]);
//! assert_eq!(column.content_width(), "1, 2, 3, ...".len());
//! ```

mod config;
mod error;
pub mod prelude;
pub mod tabular;

pub use config::{
    terminal_width, RenderConfig, SequenceOverflow, DEFAULT_CONSOLE_WIDTH, DEFAULT_FLOAT_DIGITS,
    DEFAULT_WRAP_THRESHOLD,
};
pub use error::{ConfigError, RenderError};
pub use tabular::{Cell, Column, Phase, Render, Step, Table};
