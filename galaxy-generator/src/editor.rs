/// Settle-based editing of a generation config.
///
/// Edits land in a pending copy. Nothing regenerates until the caller
/// settles the edit, at which point the pending config is validated and
/// either promoted (firing the settled-change callback) or rolled back.
use crate::config::GenerationConfig;
use crate::error::Result;
use tracing::{debug, warn};

pub type SettledChange = Box<dyn FnMut(&GenerationConfig) + Send + Sync>;

pub struct ConfigEditor {
    settled: GenerationConfig,
    pending: GenerationConfig,
    on_settled_change: SettledChange,
}

impl ConfigEditor {
    /// Create an editor with its one settled-change callback.
    /// The callback is not invoked for the initial config.
    pub fn new(
        config: GenerationConfig,
        on_settled_change: impl FnMut(&GenerationConfig) + Send + Sync + 'static,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            pending: config.clone(),
            settled: config,
            on_settled_change: Box::new(on_settled_change),
        })
    }

    /// Mutate the pending config. Does not notify.
    pub fn edit(&mut self, edit: impl FnOnce(&mut GenerationConfig)) {
        edit(&mut self.pending);
    }

    /// Finish an editing interaction.
    ///
    /// Returns `Ok(true)` when the callback fired, `Ok(false)` when nothing
    /// changed. An invalid pending config is reverted to the last settled
    /// one and the validation error returned.
    pub fn settle(&mut self) -> Result<bool> {
        if let Err(err) = self.pending.validate() {
            warn!(%err, "rejected config edit, reverting");
            self.pending = self.settled.clone();
            return Err(err);
        }

        if self.pending == self.settled {
            return Ok(false);
        }

        self.settled = self.pending.clone();
        debug!(count = self.settled.count, "config settled");
        (self.on_settled_change)(&self.settled);
        Ok(true)
    }

    /// Discard pending edits.
    pub fn revert(&mut self) {
        self.pending = self.settled.clone();
    }

    /// Re-fire the callback with the settled config, e.g. for a fresh draw.
    /// Pending edits are discarded.
    pub fn force_settle(&mut self) {
        self.pending = self.settled.clone();
        (self.on_settled_change)(&self.settled);
    }

    pub fn settled(&self) -> &GenerationConfig {
        &self.settled
    }

    pub fn pending(&self) -> &GenerationConfig {
        &self.pending
    }

    /// Pending edits not yet settled.
    pub fn is_dirty(&self) -> bool {
        self.pending != self.settled
    }
}

impl std::fmt::Debug for ConfigEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigEditor")
            .field("settled", &self.settled)
            .field("pending", &self.pending)
            .finish()
    }
}
