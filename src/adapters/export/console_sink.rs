//! Console Sink - Aligned Plain-Text Tables
//!
//! Renders each table as a titled block of right-aligned columns on any
//! `io::Write` (stdout in the binary, a `Vec<u8>` in tests).

use std::fmt::Write as _;
use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::ports::{Table, TableSink};

/// Writes tables as aligned text.
pub struct ConsoleSink<W: Write = io::Stdout> {
    writer: W,
    precision: usize,
}

impl ConsoleSink<io::Stdout> {
    /// Sink printing to standard output.
    pub fn stdout(precision: usize) -> Self {
        Self::new(io::stdout(), precision)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub const fn new(writer: W, precision: usize) -> Self {
        Self { writer, precision }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Lay out a table as lines of text.
    fn render(&self, table: &Table) -> Vec<String> {
        let cells: Vec<Vec<String>> = table
            .values()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| format!("{v:.prec$}", prec = self.precision))
                    .collect()
            })
            .collect();

        let label_width = table
            .row_headers()
            .iter()
            .map(String::len)
            .chain(std::iter::once(table.corner().len()))
            .max()
            .unwrap_or(0);

        let widths: Vec<usize> = table
            .column_headers()
            .iter()
            .enumerate()
            .map(|(c, header)| {
                cells
                    .iter()
                    .filter_map(|row| row.get(c))
                    .map(String::len)
                    .chain(std::iter::once(header.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(table.row_count() + 2);
        lines.push(table.name().to_string());
        lines.push(pad_line(
            table.corner(),
            label_width,
            table.column_headers().iter().map(String::as_str),
            &widths,
        ));
        for (label, row) in table.row_headers().iter().zip(&cells) {
            lines.push(pad_line(
                label,
                label_width,
                row.iter().map(String::as_str),
                &widths,
            ));
        }
        lines
    }
}

/// Left-align the label, right-align each field to its column width.
fn pad_line<'a>(
    label: &str,
    label_width: usize,
    fields: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> String {
    let mut out = format!("{label:<label_width$}");
    for (field, &width) in fields.zip(widths) {
        let _ = write!(out, "  {field:>width$}");
    }
    out.trim_end().to_string()
}

impl<W: Write> TableSink for ConsoleSink<W> {
    fn name(&self) -> &'static str {
        "console"
    }

    fn write_table(&mut self, table: &Table) -> Result<()> {
        let lines = self.render(table);
        for line in &lines {
            writeln!(self.writer, "{line}").context("Failed to write table to console")?;
        }
        writeln!(self.writer).context("Failed to write table to console")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush console output")
    }
}
