/// Caller-owned holder for the point set currently on display.

/// Single slot for whatever handle the caller uses to reference the current
/// point set (an entity, a GPU buffer id, the set itself).
///
/// Installing a new handle hands the previous one back; releasing its
/// resources is the caller's job.
#[derive(Debug)]
pub struct PointSetSlot<H> {
    current: Option<H>,
    generation: u64,
}

impl<H> Default for PointSetSlot<H> {
    fn default() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }
}

impl<H> PointSetSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current handle, returning the one it displaced.
    #[must_use = "the displaced handle must be disposed of by the caller"]
    pub fn install(&mut self, handle: H) -> Option<H> {
        self.generation += 1;
        self.current.replace(handle)
    }

    /// Empty the slot, returning its handle for disposal.
    #[must_use = "the removed handle must be disposed of by the caller"]
    pub fn take(&mut self) -> Option<H> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&H> {
        self.current.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    /// Number of installs so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
