//! Rendering targets for reports.

use std::io::{self, Stderr, Stdout, Write};

/// Semantic output operations a report is written in terms of.
pub trait Output {
    /// Underlined heading.
    fn title(&mut self, text: &str);

    /// `name:` heading for the lines that follow.
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    /// A key-value pair nested under the preceding section.
    fn key_value_indented(&mut self, key: &str, value: &str);

    fn numbered_item(&mut self, index: usize, text: &str);

    fn list_item(&mut self, text: &str);

    /// A list item for something created, such as a newly written file.
    fn added_item(&mut self, text: &str);

    /// A problem worth surfacing but not fatal. Goes to the error stream.
    fn warning(&mut self, msg: &str);

    /// A problem that fails the command. Goes to the error stream.
    fn error(&mut self, msg: &str);

    /// Horizontal rule carrying a label, e.g. a file name before its content.
    fn divider(&mut self, label: &str);

    /// Text emitted exactly as given.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain text output: regular lines to one writer, warnings to another.
///
/// Write failures (a closed pipe, say) are ignored; a report is best effort.
pub struct TerminalOutput<O: Write = Stdout, E: Write = Stderr> {
    out: O,
    err: E,
}

impl TerminalOutput {
    /// Output to the process's stdout and stderr.
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Write, E: Write> TerminalOutput<O, E> {
    pub fn with_writers(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Recover the writers.
    #[cfg(test)]
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.out, "{}", text);
    }
}

impl<O: Write, E: Write> Output for TerminalOutput<O, E> {
    fn title(&mut self, text: &str) {
        self.line(format_args!("{}", text));
        self.line(format_args!("{}", "=".repeat(text.chars().count())));
    }

    fn section(&mut self, name: &str) {
        self.line(format_args!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(format_args!("{}: {}", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.line(format_args!("  {}: {}", key, value));
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        self.line(format_args!("  {}. {}", index, text));
    }

    fn list_item(&mut self, text: &str) {
        self.line(format_args!("  - {}", text));
    }

    fn added_item(&mut self, text: &str) {
        self.line(format_args!("  + {}", text));
    }

    fn warning(&mut self, msg: &str) {
        let _ = writeln!(self.err, "warning: {}", msg);
    }

    fn error(&mut self, msg: &str) {
        let _ = writeln!(self.err, "error: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        self.line(format_args!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.line(format_args!("{}", text));
    }

    fn newline(&mut self) {
        let _ = writeln!(self.out);
    }
}

/// Render a report into in-memory buffers, returning (stdout, stderr).
#[cfg(test)]
pub fn render_to_strings(report: &dyn Report) -> (String, String) {
    let mut out = TerminalOutput::with_writers(Vec::new(), Vec::new());
    report.render(&mut out);
    let (out, err) = out.into_writers();
    (
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}
