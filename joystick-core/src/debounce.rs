//! Time-window switch debouncer.
//!
//! A level change is accepted only after the raw input has held the new level
//! for the whole window. Every raw change restarts the window, so chatter
//! shorter than the window never reaches the debounced output.
//!
//! Time is passed in by the caller as a wrapping millisecond counter, which
//! keeps the filter free of any clock dependency.

/// Debounced view of one binary input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    window_ms: u32,
    /// Accepted level.
    stable: bool,
    /// Last raw level seen.
    unstable: bool,
    /// When `unstable` last changed, or when `stable` was last accepted.
    since_ms: u32,
    /// `stable` changed during the most recent update.
    changed: bool,
}

impl Debouncer {
    /// Create a debouncer that starts out at `level`.
    #[must_use]
    pub const fn new(level: bool, window_ms: u32, now_ms: u32) -> Self {
        Self {
            window_ms,
            stable: level,
            unstable: level,
            since_ms: now_ms,
            changed: false,
        }
    }

    /// Feed the current raw level. Returns true if the debounced level changed.
    pub fn update(&mut self, level: bool, now_ms: u32) -> bool {
        self.changed = false;

        if level != self.unstable {
            self.unstable = level;
            self.since_ms = now_ms;
        } else if now_ms.wrapping_sub(self.since_ms) >= self.window_ms && level != self.stable {
            self.stable = level;
            self.since_ms = now_ms;
            self.changed = true;
        }

        self.changed
    }

    /// Debounced level.
    #[inline]
    #[must_use]
    pub const fn is_high(&self) -> bool {
        self.stable
    }

    /// The last update accepted a high-to-low transition.
    #[inline]
    #[must_use]
    pub const fn fell(&self) -> bool {
        self.changed && !self.stable
    }

    /// The last update accepted a low-to-high transition.
    #[inline]
    #[must_use]
    pub const fn rose(&self) -> bool {
        self.changed && self.stable
    }

    #[inline]
    #[must_use]
    pub const fn window_ms(&self) -> u32 {
        self.window_ms
    }
}
