//! Intermediate representation for rendered code.

/// A piece of code, independent of the depth it ends up at.
///
/// Blocks carry their header and closing line, so a rendered tree always has
/// balanced delimiters regardless of what the lines contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A single line at the current depth.
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// An indented body between a header and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

/// Types that can be lowered to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl<T: Renderable> Renderable for [T] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.iter().flat_map(Renderable::to_fragments).collect()
    }
}
