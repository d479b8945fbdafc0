//! Lint for field constants that uppercase to the same name.

use std::collections::HashMap;

use wayfinder_core::to_constant_name;
use wayfinder_ir::RouteDescriptor;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when two fields produce the same constant name
/// (e.g. `userId` and `userid` both become `USERID`).
pub struct ConstantCollisionLint;

impl Lint for ConstantCollisionLint {
    fn name(&self) -> &'static str {
        "constant-collision"
    }

    fn description(&self) -> &'static str {
        "Detect fields whose key constants would clash"
    }

    fn check(&self, descriptors: &[RouteDescriptor], diagnostics: &mut Vec<Diagnostic>) {
        for descriptor in descriptors {
            let mut seen: HashMap<String, &str> = HashMap::new();

            for field in &descriptor.fields {
                let constant = to_constant_name(&field.name);
                if let Some(first) = seen.get(&constant) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "fields '{}' and '{}' both declare constant '{}'",
                                first, field.name, constant
                            ),
                        )
                        .at(format!("{}.{}", descriptor.source, field.name)),
                    );
                } else {
                    seen.insert(constant, &field.name);
                }
            }
        }
    }
}
