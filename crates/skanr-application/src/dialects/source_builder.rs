//! Line-oriented text builder shared by the dialects

/// Accumulates generated lines with fixed-width indentation
#[derive(Debug, Clone)]
pub struct SourceBuilder {
    out: String,
    indent_unit: &'static str,
}

impl SourceBuilder {
    /// Create a builder using `indent_unit` for each nesting level
    pub fn new(indent_unit: &'static str) -> Self {
        Self {
            out: String::new(),
            indent_unit,
        }
    }

    /// Append one line at the given nesting depth
    pub fn line(&mut self, depth: usize, text: impl AsRef<str>) -> &mut Self {
        for _ in 0..depth {
            self.out.push_str(self.indent_unit);
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
        self
    }

    /// Append an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    /// Finished text
    pub fn finish(self) -> String {
        self.out
    }
}
