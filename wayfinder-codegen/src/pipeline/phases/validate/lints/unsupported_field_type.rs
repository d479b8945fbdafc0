//! Lint for fields that get no extractor.

use wayfinder_ir::RouteDescriptor;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that notes fields whose type has no typed container read.
///
/// Such fields still appear in `route()` and both templates; only the
/// extractor is omitted.
pub struct UnsupportedFieldTypeLint;

impl Lint for UnsupportedFieldTypeLint {
    fn name(&self) -> &'static str {
        "unsupported-field-type"
    }

    fn description(&self) -> &'static str {
        "Note fields whose type has no extractor"
    }

    fn check(&self, descriptors: &[RouteDescriptor], diagnostics: &mut Vec<Diagnostic>) {
        for descriptor in descriptors {
            for field in descriptor.fields.iter().filter(|f| !f.kind.is_supported()) {
                diagnostics.push(
                    Diagnostic::info(
                        "validate",
                        format!(
                            "field '{}' has unsupported type '{}', no extractor is generated",
                            field.name, field.declared_type
                        ),
                    )
                    .at(format!("{}.{}", descriptor.source, field.name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wayfinder_ir::{DeclarationId, FieldSpec, TypeKind};

    use super::*;

    #[test]
    fn test_reports_only_unsupported() {
        let descriptor = RouteDescriptor {
            route_name: "tags".into(),
            fields: vec![
                FieldSpec::new("id", "Long", TypeKind::Long),
                FieldSpec::new("tags", "List<String>", TypeKind::Unsupported),
            ],
            source: DeclarationId::new("com.app", "Tags"),
        };

        let mut diagnostics = Vec::new();
        UnsupportedFieldTypeLint.check(&[descriptor], &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("com.app.Tags.tags"));
        assert!(!diagnostics[0].severity.is_error());
    }
}
