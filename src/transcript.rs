/// Everything shown to the user, in order.
///
/// Lines are only ever appended.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<S: Into<String>> Extend<S> for Transcript {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.lines.extend(iter.into_iter().map(Into::into));
    }
}
