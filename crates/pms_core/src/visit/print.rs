//! Indented, human-readable rendering of a metadata set tree.

use super::scope::{PmsVisitor, PrefixScope};
use super::{Node, Visitable};
use crate::config::PmsConfig;
use std::fmt::Arguments;
use std::io::{self, Write};

/// One indentation level, used when no configuration overrides it.
pub const DEFAULT_INDENTATION: &str = "   ";

/// Writes one header line per set and one line per qualified attribute.
///
/// Header format: `<indent>[<role>: ]<description> [<name>]`. Attribute
/// lines are indented one level below their atomic set's header.
///
/// Visitor callbacks cannot fail, so the first write error is kept and
/// later output is suppressed; `finish` reports it.
pub struct PrintVisitor<W: Write> {
    scope: PrefixScope,
    out: W,
    indentation: String,
    level: usize,
    error: Option<io::Error>,
}

impl<W: Write> PrintVisitor<W> {
    pub fn new(out: W) -> Self {
        Self {
            scope: PrefixScope::default(),
            out,
            indentation: DEFAULT_INDENTATION.to_string(),
            level: 0,
            error: None,
        }
    }

    pub fn with_config(out: W, config: &PmsConfig) -> Self {
        Self {
            scope: PrefixScope::new(config.prefix_separator.as_str()),
            indentation: config.indentation.clone(),
            ..Self::new(out)
        }
    }

    /// Flushes the sink and returns it, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_line(&mut self, line: Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        let indent = self.indentation.repeat(self.level);
        if let Err(err) = writeln!(self.out, "{indent}{line}") {
            self.error = Some(err);
        }
    }

    fn write_header(&mut self, name: &str, description: &str) {
        let role = match self.scope.role() {
            Some(role) if !role.is_empty() => format!("{role}: "),
            _ => String::new(),
        };
        self.write_line(format_args!("{role}{description} [{name}]"));
        self.level += 1;
    }
}

impl<W: Write> PmsVisitor for PrintVisitor<W> {
    fn scope(&self) -> &PrefixScope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut PrefixScope {
        &mut self.scope
    }

    fn enter(&mut self, node: Node<'_>) {
        match node {
            Node::Atomic(atomic) => {
                self.write_header(atomic.name(), atomic.description());
                let prefix = self.scope.current_prefix();
                for record in atomic.records() {
                    self.write_line(format_args!("{prefix}{}", record.name));
                }
            }
            Node::Composite(composite) => {
                self.write_header(composite.name(), composite.description());
            }
            Node::Prefixed(_) => {}
        }
    }

    fn leave(&mut self, node: Node<'_>) {
        if let Node::Atomic(_) | Node::Composite(_) = node {
            self.level = self.level.saturating_sub(1);
        }
    }
}

/// Renders the tree rooted at `root` into a string.
pub fn render_to_string<T: Visitable + ?Sized>(root: &T, config: &PmsConfig) -> String {
    let mut visitor = PrintVisitor::with_config(Vec::new(), config);
    root.accept(&mut visitor);
    // Writes into a Vec<u8> cannot fail.
    let bytes = visitor.finish().unwrap_or_default();
    String::from_utf8_lossy(&bytes).into_owned()
}
