/// Supplies script lines one at a time and supports jumping back to a
/// previously recorded position.
///
/// The statement dispatcher records `index()` when it enters a loop and
/// calls `jump()` to re-enter the body on the next iteration. The scanner
/// is exclusively owned by one interpreter instance.
#[derive(Debug, Clone)]
pub struct LineScanner {
    lines:  Vec<String>,
    cursor: usize,
}

impl LineScanner {
    /// Creates a scanner over the lines of `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { lines:  source.lines().map(str::to_string).collect(),
               cursor: 0, }
    }

    /// Returns `true` while lines remain.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor < self.lines.len()
    }

    /// Returns the next line and advances the cursor, or `None` when the
    /// source is exhausted.
    pub fn next_line(&mut self) -> Option<String> {
        let line = self.lines.get(self.cursor).cloned();
        if line.is_some() {
            self.cursor += 1;
        }
        line
    }

    /// Returns the current cursor position.
    #[must_use]
    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor to a previously recorded position.
    pub fn jump(&mut self, index: usize) {
        self.cursor = index;
    }
}
