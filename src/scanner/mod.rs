//! Line scanner for finding marked lines in a document.
//!
//! The scanner walks a fully-read document once, top to bottom, and
//! yields only the lines that contain the issue marker. `\n`, `\r\n`
//! and a lone `\r` are all accepted as line terminators.

/// Iterator over the lines of a text, accepting every line-ending convention.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
    done: bool,
}

impl<'a> Lines<'a> {
    /// Create a line iterator over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            done: text.is_empty(),
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.rest.find(['\r', '\n']) {
            Some(idx) => {
                let line = &self.rest[..idx];
                let terminator_len = if self.rest[idx..].starts_with("\r\n") {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[idx + terminator_len..];
                // A trailing terminator does not open an empty final line
                if self.rest.is_empty() {
                    self.done = true;
                }
                Some(line)
            }
            None => {
                self.done = true;
                Some(self.rest)
            }
        }
    }
}

/// Returns the lines of `text` that contain `marker`, in original order.
pub fn marked_lines<'a>(text: &'a str, marker: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    Lines::new(text).filter(move |line| line.contains(marker))
}
