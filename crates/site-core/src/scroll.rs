//! Scroll spy: which page section sits under the middle of the viewport.

use smallvec::SmallVec;

/// Vertical extent of one page section, read from live layout.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionExtent {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Sections in registration order. Pages have a handful, so they stay inline.
pub type SectionRegistry = SmallVec<[SectionExtent; 8]>;

/// Current scroll offset and viewport height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }
}

#[inline]
pub fn probe_point(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y + viewport_height / 2.0
}

/// First section (in registration order) whose `[top, top + height)` span
/// holds the probe point.
pub fn evaluate(scroll_y: f64, viewport_height: f64, sections: &[SectionExtent]) -> Option<&str> {
    let probe = probe_point(scroll_y, viewport_height);
    sections
        .iter()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

/// Change-only notifier on top of [`evaluate`].
///
/// When no section holds the probe point the last reported id is kept and
/// the callback stays quiet.
pub struct ScrollSpy<F: FnMut(&str)> {
    on_change: F,
    last: Option<String>,
    attached: bool,
}

impl<F: FnMut(&str)> ScrollSpy<F> {
    /// Start tracking. The current position is evaluated right away so the
    /// first report does not wait for a scroll event.
    pub fn attach(on_change: F, viewport: Viewport, sections: &[SectionExtent]) -> Self {
        let mut spy = Self {
            on_change,
            last: None,
            attached: true,
        };
        spy.on_scroll(viewport, sections);
        spy
    }

    /// Handle one scroll event. Returns `true` when `on_change` fired.
    pub fn on_scroll(&mut self, viewport: Viewport, sections: &[SectionExtent]) -> bool {
        if !self.attached {
            return false;
        }
        let Some(id) = evaluate(viewport.scroll_y, viewport.height, sections) else {
            return false;
        };
        if self.last.as_deref() == Some(id) {
            return false;
        }
        log::debug!("[scroll] active section -> {}", id);
        self.last = Some(id.to_string());
        (self.on_change)(id);
        true
    }

    /// Adopt `id` as the last reported section without notifying. Used when
    /// another writer (nav clicks) moved the active section, so the next
    /// scroll compares against what is actually shown.
    pub fn sync(&mut self, id: &str) {
        if self.last.as_deref() != Some(id) {
            self.last = Some(id.to_string());
        }
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[inline]
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
