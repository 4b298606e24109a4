//! CSV export of the flattened attribute list, one row per attribute.
//!
//! Rows carry the qualified name plus the originating atomic set and the
//! role it was included under, which is what documentation tables need.

use super::scope::{PmsVisitor, PrefixScope};
use super::Node;
use crate::config::PmsConfig;
use std::io::Write;

const HEADER: [&str; 6] = ["set", "role", "name", "source", "required", "comments"];

/// Writes qualified attributes as CSV rows to a caller-supplied sink.
pub struct CsvVisitor<W: Write> {
    scope: PrefixScope,
    writer: csv::Writer<W>,
    header_written: bool,
    rows: usize,
    error: Option<csv::Error>,
}

impl<W: Write> CsvVisitor<W> {
    pub fn new(out: W) -> Self {
        Self::with_separator(out, super::DEFAULT_PREFIX_SEPARATOR)
    }

    pub fn with_separator(out: W, separator: &str) -> Self {
        Self {
            scope: PrefixScope::new(separator),
            writer: csv::Writer::from_writer(out),
            header_written: false,
            rows: 0,
            error: None,
        }
    }

    pub fn with_config(out: W, config: &PmsConfig) -> Self {
        Self::with_separator(out, &config.prefix_separator)
    }

    /// Number of attribute rows written so far (header excluded).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Writes the header if nothing was exported, flushes, and returns the
    /// sink, or the first error met while writing.
    pub fn finish(mut self) -> csv::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.ensure_header()?;
        self.writer
            .into_inner()
            .map_err(|err| csv::Error::from(err.into_error()))
    }

    fn ensure_header(&mut self) -> csv::Result<()> {
        if !self.header_written {
            self.writer.write_record(HEADER)?;
            self.header_written = true;
        }
        Ok(())
    }

    fn write_row(&mut self, row: [&str; 6]) {
        if self.error.is_some() {
            return;
        }
        let result = self
            .ensure_header()
            .and_then(|()| self.writer.write_record(row));
        match result {
            Ok(()) => self.rows += 1,
            Err(err) => self.error = Some(err),
        }
    }
}

impl<W: Write> PmsVisitor for CsvVisitor<W> {
    fn scope(&self) -> &PrefixScope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut PrefixScope {
        &mut self.scope
    }

    fn enter(&mut self, node: Node<'_>) {
        let Node::Atomic(atomic) = node else {
            return;
        };
        let prefix = self.scope.current_prefix();
        let role = self.scope.role().unwrap_or_default().to_string();
        for record in atomic.records() {
            let name = format!("{prefix}{}", record.name);
            self.write_row([
                atomic.name(),
                role.as_str(),
                name.as_str(),
                record.source.as_str(),
                record.required.as_str(),
                record.comments.as_str(),
            ]);
        }
    }
}
