//! Frame counter used to defer resize handling to a later tick

/// Tick counter cycling over `0..modulus`
///
/// Only used as a relative reference: a resize recorded on one value is
/// processed on the first tick whose value differs.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    tick: u32,
    modulus: u32,
}

impl FrameClock {
    /// Default modulus, one second of ticks at the nominal 60 Hz
    pub const DEFAULT_MODULUS: u32 = 60;

    /// Smallest modulus under which consecutive ticks differ
    pub const MIN_MODULUS: u32 = 2;

    /// Creates a clock at tick 0; moduli below [`Self::MIN_MODULUS`] are raised to it
    pub fn new(modulus: u32) -> Self {
        Self {
            tick: 0,
            modulus: modulus.max(Self::MIN_MODULUS),
        }
    }

    /// Advances one tick and returns the new value
    pub fn advance(&mut self) -> u32 {
        self.tick = (self.tick + 1) % self.modulus;
        self.tick
    }

    /// Current tick value
    pub fn current(&self) -> u32 {
        self.tick
    }

    /// Number of distinct tick values
    pub fn modulus(&self) -> u32 {
        self.modulus
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MODULUS)
    }
}

/// Resize notification waiting for the next tick
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingResize {
    /// Tick the last resize was observed on
    tick: Option<u32>,
    /// Set by a resize, cleared by the next screen change
    flagged: bool,
}

impl PendingResize {
    /// Records a resize seen on `tick`
    pub fn record(&mut self, tick: u32) {
        self.tick = Some(tick);
        self.flagged = true;
    }

    /// Clears the marker used to filter the host's duplicate screen change
    ///
    /// Returns whether it was set.
    pub fn take_flag(&mut self) -> bool {
        std::mem::take(&mut self.flagged)
    }

    /// Takes the pending resize if it was recorded on a tick other than `now`
    pub fn take_due(&mut self, now: u32) -> Option<u32> {
        match self.tick {
            Some(tick) if tick != now => self.tick.take(),
            _ => None,
        }
    }

    /// Tick the pending resize was recorded on
    pub fn tick(&self) -> Option<u32> {
        self.tick
    }

    /// Returns true while the resize marker is set
    pub fn is_flagged(&self) -> bool {
        self.flagged
    }
}
