/// The section currently considered "in view".
///
/// Written by the scroll spy and by explicit navigation (which sets it
/// before the smooth scroll lands); read by the nav bar through
/// [`ActiveSection::subscribe`].
pub struct ActiveSection {
    current: String,
    subscribers: Vec<Box<dyn FnMut(&str)>>,
}

impl ActiveSection {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: initial.into(),
            subscribers: Vec::new(),
        }
    }

    #[inline]
    pub fn get(&self) -> &str {
        &self.current
    }

    /// Replace the active id. Subscribers only hear about real changes.
    pub fn set(&mut self, id: &str) -> bool {
        if self.current == id {
            return false;
        }
        self.current.clear();
        self.current.push_str(id);
        for sub in &mut self.subscribers {
            sub(id);
        }
        true
    }

    /// Register a reader. It is called once with the current value so it
    /// can render its initial state.
    pub fn subscribe(&mut self, mut callback: impl FnMut(&str) + 'static) {
        callback(&self.current);
        self.subscribers.push(Box::new(callback));
    }
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_SECTION)
    }
}
