use std::time::Duration;

/// Reveals `text` one character at a time after an initial delay.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    delay: Duration,
    char_interval: Duration,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, delay: Duration, char_interval: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
            char_interval,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters shown once `elapsed` has passed since mount.
    pub fn chars_at(&self, elapsed: Duration) -> usize {
        let total = self.text.chars().count();
        let Some(typing) = elapsed.checked_sub(self.delay) else {
            return 0;
        };
        if self.char_interval.is_zero() {
            return total;
        }
        // first character lands one interval after the delay
        let n = (typing.as_nanos() / self.char_interval.as_nanos()) as usize;
        n.min(total)
    }

    pub fn visible_at(&self, elapsed: Duration) -> &str {
        let n = self.chars_at(elapsed);
        match self.text.char_indices().nth(n) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    /// The blinking cursor stays until the whole text is out.
    pub fn cursor_visible_at(&self, elapsed: Duration) -> bool {
        self.chars_at(elapsed) < self.text.chars().count()
    }

    pub fn is_done_at(&self, elapsed: Duration) -> bool {
        !self.cursor_visible_at(elapsed)
    }
}
