//! Report formatting and output sinks
//!
//! Orchestrators hand every successful [`FetchResult`] to a [`ReportSink`] as one
//! formatted line. The sink is append-only: nothing is ever rewritten, and clearing
//! previous output is left to whoever owns the sink.

use crate::types::{FetchResult, Strategy};
use std::io::Write;
use std::time::Duration;

/// Format the report line for one downloaded page
///
/// ```
/// use page_fetch::{FetchResult, report::format_report_line};
///
/// let result = FetchResult::new("https://example.com", "hello");
/// assert_eq!(
///     format_report_line(&result),
///     "https://example.com downloaded: 5 characters long."
/// );
/// ```
pub fn format_report_line(result: &FetchResult) -> String {
    format!(
        "{} downloaded: {} characters long.",
        result.source_url,
        result.char_len()
    )
}

/// Format the trailing timing line written after a run
pub fn format_summary_line(strategy: Strategy, elapsed: Duration) -> String {
    let label = match strategy {
        Strategy::Sequential => "Total execution time for sync",
        Strategy::Suspending => "Total execution time for async",
        Strategy::Concurrent => "Total execution time",
    };
    format!("{label}: {}ms", elapsed.as_millis())
}

/// Append-only text destination for report output
pub trait ReportSink: Send {
    /// Append raw text
    fn append(&mut self, text: &str);

    /// Append text followed by a newline
    fn append_line(&mut self, text: &str) {
        self.append(text);
        self.append("\n");
    }
}

/// Format one result and append it to `sink`
pub fn report<S: ReportSink + ?Sized>(sink: &mut S, result: &FetchResult) {
    sink.append_line(&format_report_line(result));
}

/// In-memory results buffer
#[derive(Clone, Debug, Default)]
pub struct ResultsLog {
    text: String,
}

impl ResultsLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything appended so far
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Appended text split into lines
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    /// Discard previous output
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// True if nothing has been appended since creation or the last clear
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl ReportSink for ResultsLog {
    fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

/// Sink writing through to an [`std::io::Write`] (stdout, a file, a socket)
///
/// Write errors are logged and dropped; reporting never fails a run.
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stdout> {
    /// Sink writing to the process's standard output
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ReportSink for WriterSink<W> {
    fn append(&mut self, text: &str) {
        if let Err(e) = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
        {
            tracing::warn!(error = %e, "failed to write report output");
        }
    }
}
