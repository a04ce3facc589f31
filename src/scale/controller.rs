use crate::host::{EditEvent, HostBridge, PromptReply};
use crate::scale::error::ScaleError;
use crate::value::{format_quantity, parse_quantity};

/// Controller lifecycle. The modal prompt blocks, so one edit always runs
/// to completion (or aborts) before the next can begin; no lock needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    EditRequested,
    Computing,
    Applying,
}

/// Orchestrates a single rescale operation over a host bridge: read the
/// edited quantity, obtain replacement text, derive the scale factor and
/// push it through every tracked quantity on the page.
pub struct ScaleController {
    state: ControllerState,
}

impl ScaleController {
    pub fn new() -> Self {
        Self {
            state: ControllerState::Idle,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Initial pass over a freshly built page: apply factor 1 so every
    /// quantity gets its canonical display text and every label its noun
    /// form. Not a user edit; never prompts.
    pub fn initialize<H: HostBridge>(&mut self, host: &mut H) {
        self.state = ControllerState::Applying;
        Self::apply(host, 1.0);
        self.state = ControllerState::Idle;
    }

    /// Run one user edit end to end. On any abort the page is untouched
    /// and the controller is back at Idle.
    pub fn handle_edit<H: HostBridge>(
        &mut self,
        host: &mut H,
        event: &EditEvent,
    ) -> Result<(), ScaleError> {
        self.state = ControllerState::EditRequested;
        let result = self.run_edit(host, event);
        self.state = ControllerState::Idle;
        result
    }

    fn run_edit<H: HostBridge>(
        &mut self,
        host: &mut H,
        event: &EditEvent,
    ) -> Result<(), ScaleError> {
        // A click outside any tracked group is not an edit at all
        let target = match host.resolve_target(event) {
            Some(id) => id,
            None => return Ok(()),
        };

        let old_value = host.value(target);
        if old_value == 0.0 {
            return Err(ScaleError::DegenerateScale(old_value));
        }

        // Echo the exact value back, so precise edits stay possible
        let reply = host.prompt(&format_quantity(old_value, false));
        let text = match reply {
            PromptReply::Text(text) => text,
            PromptReply::Cancelled => return Err(ScaleError::UserCancelled),
        };

        let new_value = parse_quantity(&text)?;
        if new_value <= 0.0 {
            return Err(ScaleError::DegenerateScale(new_value));
        }

        self.state = ControllerState::Computing;
        let factor = new_value / old_value;

        self.state = ControllerState::Applying;
        Self::apply(host, factor);

        Ok(())
    }

    /// Multiply every tracked quantity by `factor`, re-derive its display
    /// text and update its noun labels. The stored values stay exact;
    /// only the text goes through nice-rounding.
    fn apply<H: HostBridge>(host: &mut H, factor: f64) {
        for id in host.quantities() {
            let value = host.value(id) * factor;
            host.set_value(id, value);
            host.set_text(id, &format_quantity(value, true));
            for label in host.labels(id) {
                host.set_label_text(id, label.slot, label.form.select(value));
            }
        }
    }
}

impl Default for ScaleController {
    fn default() -> Self {
        Self::new()
    }
}
