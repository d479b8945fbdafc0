//! Kotlin route unit emitter.

use wayfinder_codegen::{Emitter, RouteTemplate, TypeMapper, non_null_type, templates::reference};
use wayfinder_core::{short_name, to_constant_name};
use wayfinder_ir::{FieldSpec, RouteDescriptor};
use wayfinder_manifest::GeneratorConfig;

use crate::{
    GENERATED_HEADER, KotlinFile, KotlinTypeMapper,
    ast::{Fun, Object, Param, Property, escape_string, string_literal},
};

const URL_ENCODER: &str = "java.net.URLEncoder";
const STANDARD_CHARSETS: &str = "java.nio.charset.StandardCharsets";

/// Renders a [`RouteDescriptor`] into a `<Name>Destination` Kotlin object.
///
/// ```kotlin
/// object SampleDestination {
///     val NAME: String = "name"
///
///     fun destination(): String { ... }
///     fun route(name: String): String { ... }
///     fun name(bundle: Bundle): String? { ... }
///     private fun String.encodeUrl(): String { ... }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct KotlinEmitter {
    container: String,
    container_param: String,
    types: KotlinTypeMapper,
}

impl KotlinEmitter {
    /// Emitter reading from `container` (fully qualified) through a parameter
    /// named `container_param`.
    pub fn new(container: impl Into<String>, container_param: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            container_param: container_param.into(),
            types: KotlinTypeMapper,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(&config.container, &config.container_param)
    }

    /// Build the object declaration for a descriptor.
    pub fn object(&self, descriptor: &RouteDescriptor) -> Object {
        let template = RouteTemplate::from_descriptor(descriptor);

        Object::new(descriptor.unit_name())
            .properties(descriptor.fields.iter().map(key_constant))
            .function(destination_fn(&template))
            .function(route_fn(descriptor, &template))
            .functions(
                descriptor
                    .extractable_fields()
                    .filter_map(|field| self.extractor_fn(field)),
            )
            .function(encode_url_fn())
    }

    /// `fun <field>(bundle: Bundle): <Type>?`, or `None` for unsupported kinds.
    fn extractor_fn(&self, field: &FieldSpec) -> Option<Fun> {
        let ty = self.types.type_name(field.kind)?;
        let read = self.types.read_call(field.kind)?;

        Some(
            Fun::new(&field.name)
                .param(Param::new(&self.container_param, short_name(&self.container)))
                .returns(self.types.nullable(ty))
                .statement(format!(
                    "return {}.{}({})",
                    self.container_param,
                    read,
                    string_literal(&field.name)
                )),
        )
    }
}

impl Default for KotlinEmitter {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

impl Emitter for KotlinEmitter {
    fn language(&self) -> &'static str {
        "kotlin"
    }

    fn file_extension(&self) -> &'static str {
        "kt"
    }

    fn render(&self, descriptor: &RouteDescriptor) -> String {
        let mut file = KotlinFile::new(descriptor.package())
            .import(URL_ENCODER)
            .import(STANDARD_CHARSETS);

        if descriptor.extractable_fields().next().is_some() && self.container.contains('.') {
            file = file.import(&self.container);
        }

        file.add(self.object(descriptor))
            .render_with_header(GENERATED_HEADER)
    }
}

/// `val NAME: String = "name"`
fn key_constant(field: &FieldSpec) -> Property {
    Property::new(
        to_constant_name(&field.name),
        "String",
        string_literal(&field.name),
    )
}

/// `fun destination(): String` returning the route key.
fn destination_fn(template: &RouteTemplate) -> Fun {
    Fun::new("destination")
        .returns("String")
        .statement(format!("return {}", string_literal(&template.key())))
}

/// `fun route(...): String` returning the route path as a string template.
///
/// Parameters take the non-null form of the declared type, so every
/// interpolated segment holds a value.
fn route_fn(descriptor: &RouteDescriptor, template: &RouteTemplate) -> Fun {
    Fun::new("route")
        .params(
            descriptor
                .fields
                .iter()
                .map(|f| Param::new(&f.name, non_null_type(&f.declared_type))),
        )
        .returns("String")
        .statement(format!("return {}", route_path_literal(template)))
}

/// Route path as a Kotlin string template: the screen is literal text, each
/// placeholder an interpolation.
fn route_path_literal(template: &RouteTemplate) -> String {
    let mut literal = format!("\"{}", escape_string(template.screen()));
    for placeholder in template.placeholders() {
        literal.push_str("/${");
        literal.push_str(&reference(placeholder));
        literal.push('}');
    }
    literal.push('"');
    literal
}

/// The private form-URL encoding helper shared by the unit.
fn encode_url_fn() -> Fun {
    Fun::new("encodeUrl")
        .private()
        .receiver("String")
        .returns("String")
        .if_block("this == \"\"", ["return \"\"".to_string()])
        .statement(format!(
            "return {}.encode(this, {}.UTF_8.toString())",
            short_name(URL_ENCODER),
            short_name(STANDARD_CHARSETS)
        ))
}

#[cfg(test)]
mod tests {
    use wayfinder_codegen::route_path;
    use wayfinder_ir::{DeclarationId, TypeKind};

    use super::*;

    fn descriptor(route: &str, fields: Vec<FieldSpec>) -> RouteDescriptor {
        RouteDescriptor {
            route_name: route.into(),
            fields,
            source: DeclarationId::new("com.app", "Home"),
        }
    }

    #[test]
    fn test_route_literal_matches_template_for_plain_names() {
        let d = descriptor(
            "android_sample",
            vec![
                FieldSpec::new("name", "String", TypeKind::String).encoded(),
                FieldSpec::new("age", "Int", TypeKind::Int),
            ],
        );
        let literal = route_path_literal(&RouteTemplate::from_descriptor(&d));
        assert_eq!(literal, format!("\"{}\"", route_path(&d)));
    }

    #[test]
    fn test_route_literal_escapes_screen_only() {
        let d = descriptor(
            "a\"$b",
            vec![FieldSpec::new("id", "Long", TypeKind::Long)],
        );
        let literal = route_path_literal(&RouteTemplate::from_descriptor(&d));
        assert_eq!(literal, "\"a\\\"\\$b/${id}\"");
    }

    #[test]
    fn test_type_dispatch() {
        let emitter = KotlinEmitter::default();
        let cases = [
            (TypeKind::String, "String", "getString"),
            (TypeKind::Bool, "Boolean", "getBoolean"),
            (TypeKind::Int, "Int", "getInt"),
            (TypeKind::Float, "Float", "getFloat"),
            (TypeKind::Double, "Double", "getDouble"),
            (TypeKind::Long, "Long", "getLong"),
        ];

        for (kind, ty, read) in cases {
            let field = FieldSpec::new("value", ty, kind);
            let code = emitter.extractor_fn(&field).unwrap().build();
            assert_eq!(
                code,
                format!(
                    "fun value(bundle: Bundle): {}? {{\n    return bundle.{}(\"value\")\n}}\n",
                    ty, read
                )
            );
        }
    }

    #[test]
    fn test_unsupported_has_no_extractor() {
        let field = FieldSpec::new("tags", "List<String>", TypeKind::Unsupported);
        assert!(KotlinEmitter::default().extractor_fn(&field).is_none());
    }

    #[test]
    fn test_custom_container() {
        let emitter = KotlinEmitter::new("com.app.nav.Args", "args");
        let d = descriptor("home", vec![FieldSpec::new("id", "Long", TypeKind::Long)]);
        let code = emitter.render(&d);

        assert!(code.contains("import com.app.nav.Args\n"));
        assert!(code.contains("fun id(args: Args): Long? {"));
        assert!(code.contains("return args.getLong(\"id\")"));
    }

    #[test]
    fn test_container_not_imported_without_extractors() {
        let d = descriptor(
            "home",
            vec![FieldSpec::new("tags", "List<String>", TypeKind::Unsupported)],
        );
        let code = KotlinEmitter::default().render(&d);
        assert!(!code.contains("android.os.Bundle"));
        assert!(code.contains("fun route(tags: List<String>): String {"));
    }

    #[test]
    fn test_nullable_types_become_non_null_parameters() {
        let d = descriptor(
            "search",
            vec![
                FieldSpec::new("query", "kotlin.String?", TypeKind::String).encoded(),
                FieldSpec::new("page", "Int?", TypeKind::Int),
            ],
        );
        let code = KotlinEmitter::default().render(&d);

        assert!(code.contains("fun route(query: kotlin.String, page: Int): String {"));
        assert!(code.contains("return \"search/${query.encodeUrl()}/${page}\""));
        assert!(code.contains("fun page(bundle: Bundle): Int? {"));
    }

    #[test]
    fn test_emit_unit() {
        let d = descriptor("home", Vec::new());
        let unit = KotlinEmitter::default().emit(&d);

        assert_eq!(unit.name, "HomeDestination");
        assert_eq!(unit.package, "com.app");
        assert_eq!(unit.extension, "kt");
        assert!(unit.content.starts_with(GENERATED_HEADER));
    }
}
