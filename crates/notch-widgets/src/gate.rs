//! State gate: the single place disabled/readonly semantics are enforced.

use notch_core::{Event, InteractiveState, SliderConfig};
use std::fmt;

/// Why the gate refused an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Veto {
    /// Control is disabled; nothing gets through, not even focus.
    Disabled,
    /// Control is readonly; focus and pointer input pass, keys do not.
    Readonly,
}

impl fmt::Display for Veto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Readonly => write!(f, "readonly"),
        }
    }
}

/// Outcome of replacing the gate's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateChange {
    /// Mutation was allowed before and is not any more.
    pub revoked_mutation: bool,
    /// Focus was allowed before and is not any more.
    pub revoked_focus: bool,
}

/// Tracks the disabled/readonly flags and vetoes events accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateGate {
    disabled: bool,
    readonly: bool,
}

impl StateGate {
    /// Gate reflecting the configuration's flags.
    #[must_use]
    pub const fn from_config(config: &SliderConfig) -> Self {
        Self {
            disabled: config.disabled,
            readonly: config.readonly,
        }
    }

    /// Disabled flag as configured.
    #[must_use]
    pub const fn disabled(&self) -> bool {
        self.disabled
    }

    /// Readonly flag as configured.
    #[must_use]
    pub const fn readonly(&self) -> bool {
        self.readonly
    }

    /// Effective state; disabled wins over readonly.
    #[must_use]
    pub const fn state(&self) -> InteractiveState {
        InteractiveState::from_flags(self.disabled, self.readonly)
    }

    /// Decide whether `event` may reach the input controller.
    ///
    /// A readonly control still takes focus from pointer input, so pointer
    /// events pass and the controller withholds their value actions.
    pub const fn admit(&self, event: &Event) -> Result<(), Veto> {
        match self.state() {
            InteractiveState::Enabled => Ok(()),
            InteractiveState::Disabled => Err(Veto::Disabled),
            InteractiveState::Readonly if event.is_focus() || event.is_pointer() => Ok(()),
            InteractiveState::Readonly => Err(Veto::Readonly),
        }
    }

    /// Adopt new flags and report what was taken away.
    pub fn update(&mut self, config: &SliderConfig) -> GateChange {
        let before = self.state();
        *self = Self::from_config(config);
        let after = self.state();
        GateChange {
            revoked_mutation: before.allows_mutation() && !after.allows_mutation(),
            revoked_focus: before.is_interactive() && !after.is_interactive(),
        }
    }
}
