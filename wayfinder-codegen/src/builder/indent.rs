//! Indentation unit for emitted source.

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A run of spaces of the given width.
    Spaces(usize),
    Tab,
}

impl Indent {
    /// Kotlin coding conventions: four spaces.
    pub const KOTLIN: Self = Self::Spaces(4);

    /// Append `depth` levels of indentation to `buf`.
    pub fn write_to(&self, buf: &mut String, depth: usize) {
        let (ch, width) = match *self {
            Self::Spaces(n) => (' ', n),
            Self::Tab => ('\t', 1),
        };
        buf.extend(std::iter::repeat_n(ch, width * depth));
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::KOTLIN
    }
}
