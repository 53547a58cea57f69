//! Enable toggle latch.

/// System enable state carried in every packet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnableState {
    #[default]
    Disabled,
    Enabled,
}

impl EnableState {
    #[inline]
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, EnableState::Enabled)
    }

    /// The opposite state.
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            EnableState::Disabled => EnableState::Enabled,
            EnableState::Enabled => EnableState::Disabled,
        }
    }
}

impl From<EnableState> for bool {
    fn from(state: EnableState) -> Self {
        state.is_enabled()
    }
}

/// Flips [`EnableState`] on each debounced falling edge of the switch.
///
/// Holding the switch, releasing it, or leaving it alone never changes the
/// state; only the press edge does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnableLatch {
    state: EnableState,
}

impl EnableLatch {
    /// Create a latch in the [`EnableState::Disabled`] state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: EnableState::Disabled,
        }
    }

    /// Apply one cycle of switch input. Returns true if the state flipped.
    pub fn update(&mut self, fell: bool) -> bool {
        if fell {
            self.state = self.state.toggled();
        }
        fell
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> EnableState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }
}
