//! Game clock with a global time scale
//!
//! Callers hand `advance` a real delta; transition animations use that delta
//! directly while auto-hide timers read the scaled game time kept here.
//! Pausing sets the scale to 0 so game time stops while panels stay
//! responsive.

#[derive(Debug, Clone, PartialEq)]
pub struct GameClock {
    now: f64,
    time_scale: f32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            now: 0.0,
            time_scale: 1.0,
        }
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scaled game time in seconds
    #[inline]
    pub fn now(&self) -> f64 {
        self.now
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.time_scale == 0.0
    }

    /// Advance by `real_dt` seconds, returning the scaled delta
    pub fn advance(&mut self, real_dt: f32) -> f32 {
        let scaled = real_dt * self.time_scale;
        self.now += scaled as f64;
        scaled
    }

    pub fn pause(&mut self) {
        self.time_scale = 0.0;
    }

    pub fn resume(&mut self) {
        self.time_scale = 1.0;
    }
}
