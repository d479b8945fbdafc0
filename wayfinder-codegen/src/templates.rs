//! Route key and route path assembly.
//!
//! ```text
//! route key:  screen ("/" "{" field "}")*
//! route path: screen ("/" "${" field [".encodeUrl()"] "}")*
//! ```
//!
//! With no fields both equal the bare screen name.

use thiserror::Error;
use wayfinder_core::encode_url;
use wayfinder_ir::RouteDescriptor;

/// Call appended to an encode-marked field reference in the route path.
pub const ENCODE_CALL: &str = "encodeUrl()";

/// One `{field}` / `${field}` slot in a route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub encode: bool,
}

/// Canonical templates of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    screen: String,
    placeholders: Vec<Placeholder>,
}

/// A concrete path could not be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    #[error("no value for field '{0}'")]
    MissingValue(String),
}

impl RouteTemplate {
    pub fn new(screen: impl Into<String>) -> Self {
        Self {
            screen: screen.into(),
            placeholders: Vec::new(),
        }
    }

    /// Append a placeholder.
    pub fn placeholder(mut self, name: impl Into<String>, encode: bool) -> Self {
        self.placeholders.push(Placeholder {
            name: name.into(),
            encode,
        });
        self
    }

    /// Templates for a descriptor, placeholders in field order.
    pub fn from_descriptor(descriptor: &RouteDescriptor) -> Self {
        descriptor
            .fields
            .iter()
            .fold(Self::new(&descriptor.route_name), |t, f| {
                t.placeholder(&f.name, f.encode)
            })
    }

    /// The screen (route name) literal.
    pub fn screen(&self) -> &str {
        &self.screen
    }

    /// Placeholders in order.
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Route key, e.g. `home/{id}/{name}`.
    pub fn key(&self) -> String {
        self.assemble(|p| format!("{{{}}}", p.name))
    }

    /// Route path, e.g. `home/${id}/${name.encodeUrl()}`.
    pub fn path(&self) -> String {
        self.assemble(|p| format!("${{{}}}", reference(p)))
    }

    /// Concrete path with every placeholder substituted.
    ///
    /// Encode-marked values go through [`encode_url`]; others are inserted as is.
    pub fn expand<'v>(
        &self,
        mut value: impl FnMut(&str) -> Option<&'v str>,
    ) -> Result<String, ExpandError> {
        let mut out = self.screen.clone();
        for p in &self.placeholders {
            let v = value(&p.name).ok_or_else(|| ExpandError::MissingValue(p.name.clone()))?;
            out.push('/');
            if p.encode {
                out.push_str(&encode_url(v));
            } else {
                out.push_str(v);
            }
        }
        Ok(out)
    }

    fn assemble(&self, segment: impl Fn(&Placeholder) -> String) -> String {
        let mut out = self.screen.clone();
        for p in &self.placeholders {
            out.push('/');
            out.push_str(&segment(p));
        }
        out
    }
}

/// Expression substituted for a placeholder in the route path
/// (`name` or `name.encodeUrl()`).
pub fn reference(placeholder: &Placeholder) -> String {
    if placeholder.encode {
        format!("{}.{}", placeholder.name, ENCODE_CALL)
    } else {
        placeholder.name.clone()
    }
}

/// Route key of a descriptor.
pub fn route_key(descriptor: &RouteDescriptor) -> String {
    RouteTemplate::from_descriptor(descriptor).key()
}

/// Route path of a descriptor.
pub fn route_path(descriptor: &RouteDescriptor) -> String {
    RouteTemplate::from_descriptor(descriptor).path()
}
