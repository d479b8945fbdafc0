//! Route command report.

use super::output::{Output, Report};

/// A concrete navigable path for one declaration.
#[derive(Debug)]
pub struct RouteReport {
    pub path: String,
}

impl Report for RouteReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&self.path);
    }
}
