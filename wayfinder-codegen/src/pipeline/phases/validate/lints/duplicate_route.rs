//! Lint for declarations sharing a route name.

use indexmap::IndexMap;
use wayfinder_ir::{DeclarationId, RouteDescriptor};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when several declarations use the same route name.
pub struct DuplicateRouteLint;

impl Lint for DuplicateRouteLint {
    fn name(&self) -> &'static str {
        "duplicate-route"
    }

    fn description(&self) -> &'static str {
        "Detect route names used by more than one declaration"
    }

    fn check(&self, descriptors: &[RouteDescriptor], diagnostics: &mut Vec<Diagnostic>) {
        let mut routes: IndexMap<&str, Vec<&DeclarationId>> = IndexMap::new();
        for descriptor in descriptors {
            routes
                .entry(descriptor.route_name.as_str())
                .or_default()
                .push(&descriptor.source);
        }

        for (route, ids) in routes.iter().filter(|(_, ids)| ids.len() > 1) {
            let (first, rest) = (ids[0], &ids[1..]);
            for id in rest {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("route '{}' of '{}' is already used by '{}'", route, id, first),
                    )
                    .at(id.to_string()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(route: &str, name: &str) -> RouteDescriptor {
        RouteDescriptor {
            route_name: route.into(),
            fields: Vec::new(),
            source: DeclarationId::new("com.app", name),
        }
    }

    #[test]
    fn test_distinct_routes() {
        let mut diagnostics = Vec::new();
        DuplicateRouteLint.check(
            &[descriptor("home", "Home"), descriptor("detail", "Detail")],
            &mut diagnostics,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_reported_against_later_declarations() {
        let mut diagnostics = Vec::new();
        DuplicateRouteLint.check(
            &[
                descriptor("home", "Home"),
                descriptor("detail", "Detail"),
                descriptor("home", "Start"),
                descriptor("home", "Landing"),
            ],
            &mut diagnostics,
        );

        let locations: Vec<_> = diagnostics
            .iter()
            .map(|d| d.location.as_deref().unwrap())
            .collect();
        assert_eq!(locations, vec!["com.app.Start", "com.app.Landing"]);
    }
}
