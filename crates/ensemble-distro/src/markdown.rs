//! Builder‐style helper for constructing **Markdown documents**.
//!
//! Writing verbose Markdown strings inline is tedious and error‐prone.
//! `MarkdownBuilder` offers a fluent API that lets you focus on the
//! *content* instead of the syntax.  Every method returns `self`, enabling
//! call-chaining:
//!
//! ```rust
//! use ensemble_distro::markdown::MarkdownBuilder;
//!
//! let md = MarkdownBuilder::new()
//!     .add_section_h1("SambaNova Distribution")
//!     .add_blank_line()
//!     .add_line("The following models are available:")
//!     .add_bullet("`meta-llama/Llama-3.1-8B-Instruct`")
//!     .finalize();
//!
//! assert!(md.starts_with("# SambaNova Distribution"));
//! ```
//!
//! The builder performs **no validation** besides `expect`ing that writing to
//! the internal `String` never fails (which it shouldn’t).  It also refrains
//! from smart-formatting to stay predictable—newlines and whitespace are
//! emitted exactly as requested.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce markdown documents.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you’re done, call [`Self::finalize`] to obtain the assembled markdown.
pub struct MarkdownBuilder {
    buffer: String,
}

impl Default for MarkdownBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a level-1 (`#`) heading.
    pub fn add_section_h1(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "# {line}").expect("failed to write buffer");
        self
    }

    /// Add a level-2 (`##`) heading.
    pub fn add_section_h2(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "## {line}").expect("failed to write buffer");
        self
    }

    /// Add a level-3 (`###`) heading.
    pub fn add_section_h3(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "### {line}").expect("failed to write buffer");
        self
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a list item (`- item`).
    pub fn add_bullet(mut self, item: impl Display) -> Self {
        writeln!(self.buffer, "- {item}").expect("failed to write buffer");
        self
    }

    /// Add a table header plus its separator row.
    ///
    /// Separator dashes are sized to each column title (plus the padding
    /// spaces), matching hand-written tables:
    ///
    /// ```text
    /// | API | Provider(s) |
    /// |-----|-------------|
    /// ```
    pub fn add_table_header(mut self, columns: &[&str]) -> Self {
        let mut header = String::from("|");
        let mut separator = String::from("|");
        for column in columns {
            write!(header, " {column} |").expect("failed to write buffer");
            write!(separator, "{}|", "-".repeat(column.len() + 2)).expect("failed to write buffer");
        }
        writeln!(self.buffer, "{header}").expect("failed to write buffer");
        writeln!(self.buffer, "{separator}").expect("failed to write buffer");
        self
    }

    /// Add one table body row.
    pub fn add_table_row(mut self, cells: &[&str]) -> Self {
        let mut row = String::from("|");
        for cell in cells {
            write!(row, " {cell} |").expect("failed to write buffer");
        }
        writeln!(self.buffer, "{row}").expect("failed to write buffer");
        self
    }

    /// Embed a code block fenced as `bash`.
    pub fn add_text_bash(self, content: impl Display) -> Self {
        self.add_line("```bash").add_line(content).add_line("```")
    }

    /// Embed a code block fenced as `yaml`.
    pub fn add_text_yaml(self, content: impl Display) -> Self {
        self.add_line("```yaml").add_line(content).add_line("```")
    }

    /// Embed a MyST directive block, e.g. `add_directive("{toctree}", …)`.
    pub fn add_directive(self, name: impl Display, body: impl Display) -> Self {
        self.add_line(format!("```{name}")).add_line(body).add_line("```")
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Insert a "---" delimiter.
    pub fn add_delimiter(self) -> Self {
        self.add_line("---")
    }

    /// Retrieve the accumulated markdown and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}
