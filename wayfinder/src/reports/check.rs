//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a pipeline run without writing.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// Number of routed declarations found.
    pub declaration_count: usize,
    /// Number of units that would be generated.
    pub unit_count: usize,
    /// Declarations that would be deferred to a later round.
    pub deferred: Vec<String>,
}

impl CheckReport {
    /// Whether every routed declaration would produce a unit this pass.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.deferred.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        } else {
            out.section("Deferred to next round");
            for name in &self.deferred {
                out.list_item(name);
            }
        }

        out.newline();
        out.key_value_indented("Routes", &self.declaration_count.to_string());
        out.key_value_indented("Units", &self.unit_count.to_string());
    }
}
