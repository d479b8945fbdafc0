//! Report data structures for commands.
//!
//! Commands build reports through `ops`, then render them to an Output target.

mod check;
mod explain;
mod generate;
mod output;
mod route;

pub use check::CheckReport;
pub use explain::{ExplainReport, FieldInfo, LintInfo, PhaseInfo, RouteInfo};
pub use generate::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenFile, WrittenResult,
};
#[cfg(test)]
pub use output::render_to_strings;
pub use output::{Report, TerminalOutput};
pub use route::RouteReport;
