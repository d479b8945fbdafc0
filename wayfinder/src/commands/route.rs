use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use wayfinder_manifest::ManifestFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RouteCommand {
    /// Declaration name, simple or qualified (e.g. Sample)
    pub declaration: String,

    /// Field values as field=value
    #[arg(value_parser = parse_field_value)]
    pub values: Vec<(String, String)>,

    /// Path to wayfinder.toml (defaults to ./wayfinder.toml)
    #[arg(short, long, default_value = "wayfinder.toml")]
    pub config: PathBuf,
}

impl RouteCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let report = ops::route(file.manifest(), &self.declaration, &self.values)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

/// Split `field=value` at the first `=`. The value may be empty.
fn parse_field_value(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got '{}'", s))?;
    if field.is_empty() {
        return Err(format!("missing field name in '{}'", s));
    }
    Ok((field.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_value() {
        assert_eq!(
            parse_field_value("name=a=b").unwrap(),
            ("name".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_field_value("name=").unwrap(),
            ("name".to_string(), String::new())
        );
        assert!(parse_field_value("name").is_err());
        assert!(parse_field_value("=x").is_err());
    }
}
