//! Report tables for a [`Summary`].
//!
//! A report is three tables printed one after another:
//!
//! - the statistics table, one row per statistic, centered in the console;
//! - the sorted values as a single sequence cell;
//! - the frequency table, nested inside an outer titled table.
//!
//! Only the statistics table is centered. Multi-line cells (wrapped
//! sequences, nested tables) continue at the start of the line, so tables
//! holding them are laid out from column zero.

use std::io::Write;

use tabstat_render::{Cell, Column, RenderConfig, RenderError, Table, DEFAULT_CONSOLE_WIDTH};
use tracing::debug;

use crate::stats::Summary;

/// Where the report is placed in the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportLayout {
    pub console_width: usize,
    pub centered: bool,
}

impl Default for ReportLayout {
    fn default() -> Self {
        ReportLayout {
            console_width: DEFAULT_CONSOLE_WIDTH,
            centered: true,
        }
    }
}

/// The "Statistic / Value" table.
pub fn build(summary: &Summary, config: &RenderConfig, layout: ReportLayout) -> Table {
    let quartiles = summary.quartiles();
    let rows: Vec<(&str, Cell)> = vec![
        ("Count", summary.count().into()),
        ("Sum", summary.sum().into()),
        ("Minimum", summary.min().into()),
        ("Maximum", summary.max().into()),
        ("Range", summary.range().into()),
        ("Mean", summary.mean().into()),
        ("Median", summary.median().into()),
        ("Mode", summary.modes().into()),
        ("Variance", summary.variance().into()),
        ("Std. deviation", summary.std_dev().into()),
        ("Q1", quartiles.map(|q| q.q1).into()),
        ("Q2", quartiles.map(|q| q.q2).into()),
        ("Q3", quartiles.map(|q| q.q3).into()),
        ("IQR", summary.iqr().into()),
    ];

    let mut labels: Column = Column::new(1, 2, "Statistic");
    let mut values: Column = Column::new(0, 1, "Value").with_config(*config);
    for (label, value) in rows {
        labels.add_item(label);
        values.add_item(value);
    }

    Table::with_console(
        vec![labels, values],
        "Descriptive Statistics",
        layout.console_width,
        layout.centered,
    )
}

/// The dataset in ascending order, as one sequence cell.
pub fn values_table(summary: &Summary, config: &RenderConfig) -> Table {
    let mut column: Column = Column::new(0, 0, "").with_config(*config);
    column.add_item(summary.sorted());
    Table::new(vec![column], "Sorted Values")
}

/// The value/count table, nested in a titled outer table.
pub fn frequency_table(summary: &Summary, config: &RenderConfig) -> Table {
    let mut values: Column = Column::new(0, 3, "Value").with_config(*config);
    let mut counts: Column = Column::new(0, 0, "Count").with_config(*config);
    for (&value, &count) in summary.frequencies() {
        values.add_item(value);
        counts.add_item(count);
    }
    let inner = Table::new(vec![values, counts], "");

    let mut holder: Column = Column::new(0, 0, "").with_config(*config);
    holder.add_item(inner);
    Table::new(vec![holder], "Frequency Table")
}

/// Every table of the report, in print order.
#[derive(Debug)]
pub struct Report {
    tables: Vec<Table>,
}

impl Report {
    pub fn new(summary: &Summary, config: &RenderConfig, layout: ReportLayout) -> Self {
        Report {
            tables: vec![
                build(summary, config, layout),
                values_table(summary, config),
                frequency_table(summary, config),
            ],
        }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Render the report, one blank line between tables.
    ///
    /// Tables are rewound first, so rendering twice gives the same text.
    pub fn render(&mut self) -> String {
        let mut out = String::new();
        for (i, table) in self.tables.iter_mut().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            table.reset();
            out.push_str(&table.render());
        }
        out
    }

    /// Render the report into an I/O sink.
    pub fn write_to<W: Write + ?Sized>(&mut self, writer: &mut W) -> Result<(), RenderError> {
        debug!(tables = self.tables.len(), "writing report");
        for (i, table) in self.tables.iter_mut().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            table.reset();
            table.write_to(writer)?;
        }
        Ok(())
    }
}
