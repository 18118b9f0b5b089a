use bevy::prelude::*;
use constants::galaxy::{
    BRANCHES_RANGE, COUNT_RANGE, RADIUS_RANGE, RANDOMNESS_POWER_RANGE, RANDOMNESS_RANGE,
    SIZE_RANGE, SPIN_RANGE,
};
use galaxy_generator::GenerationConfig;
use galaxy_generator::editor::ConfigEditor;
use galaxy_generator::error::GalaxyError;
use serde_json::json;
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex};

/// Fired once per settled parameter change (and on forced regeneration).
#[derive(Event, Debug, Clone)]
pub struct GalaxySettledEvent {
    pub config: GenerationConfig,
}

/// Thread-safe queue the editor callback pushes settled configs into.
type SettledQueue = Arc<Mutex<Vec<GenerationConfig>>>;

/// Galaxy parameters as edited by the user.
///
/// Wraps a [`ConfigEditor`] whose settled-change callback queues the new
/// config; [`forward_settled_changes`] drains the queue into events.
#[derive(Resource)]
pub struct GalaxyEditor {
    editor: ConfigEditor,
    settled_queue: SettledQueue,
}

impl GalaxyEditor {
    pub fn new(config: GenerationConfig) -> Result<Self, GalaxyError> {
        let settled_queue = SettledQueue::default();
        let queue = settled_queue.clone();
        let editor = ConfigEditor::new(config, move |settled| {
            if let Ok(mut queue) = queue.lock() {
                queue.push(settled.clone());
            }
        })?;

        Ok(Self {
            editor,
            settled_queue,
        })
    }

    pub fn settled(&self) -> &GenerationConfig {
        self.editor.settled()
    }

    pub fn pending(&self) -> &GenerationConfig {
        self.editor.pending()
    }

    pub fn is_dirty(&self) -> bool {
        self.editor.is_dirty()
    }

    /// Change pending parameters without triggering a regeneration.
    pub fn stage(&mut self, edit: impl FnOnce(&mut GenerationConfig)) {
        self.editor.edit(edit);
    }

    /// Settle staged edits. Values outside the editor ranges are rejected
    /// here, before the generator ever sees them.
    pub fn settle(&mut self) -> Result<bool, GalaxyError> {
        if let Err(err) = check_edit_ranges(self.editor.settled(), self.editor.pending()) {
            warn!("Rejected galaxy edit: {}", err);
            self.editor.revert();
            return Err(err);
        }
        self.editor.settle()
    }

    /// Stage and settle in one step.
    pub fn apply(&mut self, edit: impl FnOnce(&mut GenerationConfig)) -> Result<bool, GalaxyError> {
        self.stage(edit);
        self.settle()
    }

    /// Redraw the settled parameters with fresh randomness.
    pub fn regenerate(&mut self) {
        self.editor.force_settle();
    }

    pub(crate) fn take_settled(&self) -> Vec<GenerationConfig> {
        if let Ok(mut queue) = self.settled_queue.lock() {
            std::mem::take(&mut *queue)
        } else {
            Vec::new()
        }
    }
}

/// Check every field an edit changed against its editor range.
/// Untouched fields pass even if a preset put them out of range.
pub fn check_edit_ranges(
    settled: &GenerationConfig,
    pending: &GenerationConfig,
) -> Result<(), GalaxyError> {
    check_changed("count", settled.count, pending.count, &COUNT_RANGE)?;
    check_changed("size", settled.size, pending.size, &SIZE_RANGE)?;
    check_changed("radius", settled.radius, pending.radius, &RADIUS_RANGE)?;
    check_changed("branches", settled.branches, pending.branches, &BRANCHES_RANGE)?;
    check_changed("spin", settled.spin, pending.spin, &SPIN_RANGE)?;
    check_changed(
        "randomness",
        settled.randomness,
        pending.randomness,
        &RANDOMNESS_RANGE,
    )?;
    check_changed(
        "randomness_power",
        settled.randomness_power,
        pending.randomness_power,
        &RANDOMNESS_POWER_RANGE,
    )
}

fn check_changed<T: PartialOrd + Display>(
    field: &'static str,
    settled: T,
    pending: T,
    range: &RangeInclusive<T>,
) -> Result<(), GalaxyError> {
    if pending == settled || range.contains(&pending) {
        return Ok(());
    }
    Err(GalaxyError::InvalidConfig {
        field,
        reason: format!(
            "{} is outside {}..={}",
            pending,
            range.start(),
            range.end()
        ),
    })
}

/// Payload describing a rejected edit and the parameters still in force.
pub fn rejection_payload(err: &GalaxyError, settled: &GenerationConfig) -> serde_json::Value {
    let field = match err {
        GalaxyError::InvalidConfig { field, .. } => Some(*field),
        _ => None,
    };
    json!({
        "error": err.to_string(),
        "field": field,
        "parameters": settled,
    })
}

pub fn forward_settled_changes(
    editor: Option<Res<GalaxyEditor>>,
    mut settled_events: EventWriter<GalaxySettledEvent>,
) {
    let Some(editor) = editor else {
        return;
    };

    for config in editor.take_settled() {
        settled_events.write(GalaxySettledEvent { config });
    }
}
