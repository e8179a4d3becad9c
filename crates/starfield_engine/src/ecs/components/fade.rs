//! Fade Lifetime Component
//!
//! Tracks how long a transient object has existed and derives its fade state
//! and opacity from that age alone.
//!
//! ```text
//! created_at        created_at + lifetime - fade        created_at + lifetime
//!     |------------- Alive --------------|------ Fading ------|  removed
//!     opacity 1.0                          1.0 -> 0.0 linear
//! ```

use crate::config::ConfigError;

/// Lifetime and fade window shared by every transient object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTiming {
    lifetime_ms: u64,
    fade_duration_ms: u64,
}

impl FadeTiming {
    /// Create a timing pair; the fade must be non-empty and shorter than the lifetime
    pub fn new(lifetime_ms: u64, fade_duration_ms: u64) -> Result<Self, ConfigError> {
        if fade_duration_ms == 0 {
            return Err(ConfigError::Invalid("fade_duration_ms must be positive".to_string()));
        }
        if lifetime_ms <= fade_duration_ms {
            return Err(ConfigError::Invalid(format!(
                "lifetime_ms ({lifetime_ms}) must exceed fade_duration_ms ({fade_duration_ms})"
            )));
        }
        Ok(Self {
            lifetime_ms,
            fade_duration_ms,
        })
    }

    /// Total lifetime in milliseconds
    pub fn lifetime_ms(&self) -> u64 {
        self.lifetime_ms
    }

    /// Length of the fade window in milliseconds
    pub fn fade_duration_ms(&self) -> u64 {
        self.fade_duration_ms
    }

    /// Age at which fading begins
    pub fn fade_start_ms(&self) -> u64 {
        self.lifetime_ms - self.fade_duration_ms
    }

    /// Fade progress for an age: 0 before the fade window, 1 or more once it is over
    ///
    /// Computed in `f64` so an age short of the lifetime stays below 1 for long fades.
    pub fn fade_progress(&self, age_ms: u64) -> f64 {
        if age_ms < self.fade_start_ms() {
            return 0.0;
        }
        (age_ms - self.fade_start_ms()) as f64 / self.fade_duration_ms as f64
    }
}

/// Visibility phase of a transient object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeState {
    /// Fully visible
    Alive,
    /// Opacity decaying towards zero
    Fading,
}

/// Outcome of advancing a lifetime to a new time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStep {
    /// Object stays in the scene
    Live,
    /// Fade has completed; the object must be removed this pass
    Expired,
}

/// Per-object age, fade state and opacity
#[derive(Debug, Clone, PartialEq)]
pub struct FadeLifetime {
    created_at_ms: u64,
    state: FadeState,
    opacity: f32,
}

impl FadeLifetime {
    /// Start a lifetime at `created_at_ms`, fully visible
    pub fn new(created_at_ms: u64) -> Self {
        Self {
            created_at_ms,
            state: FadeState::Alive,
            opacity: 1.0,
        }
    }

    /// Registration timestamp
    pub fn created_at_ms(&self) -> u64 {
        self.created_at_ms
    }

    /// Current fade state
    pub fn state(&self) -> FadeState {
        self.state
    }

    /// Current opacity in `[0, 1]`
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Age at `now_ms`
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at_ms)
    }

    /// Fade progress at `now_ms`
    pub fn fade_progress(&self, now_ms: u64, timing: &FadeTiming) -> f64 {
        timing.fade_progress(self.age_ms(now_ms))
    }

    /// Bring state and opacity up to `now_ms`
    ///
    /// State only moves Alive -> Fading and opacity never rises, even if the
    /// clock is read out of order. Opacity is clamped, so a long pause that
    /// jumps past the end of the fade never yields a negative value.
    pub fn advance(&mut self, now_ms: u64, timing: &FadeTiming) -> FadeStep {
        let age = self.age_ms(now_ms);
        if age < timing.fade_start_ms() {
            return FadeStep::Live;
        }

        self.state = FadeState::Fading;
        let opacity = (1.0 - timing.fade_progress(age)).clamp(0.0, 1.0) as f32;
        self.opacity = self.opacity.min(opacity);

        if age >= timing.lifetime_ms() {
            self.opacity = 0.0;
            FadeStep::Expired
        } else {
            FadeStep::Live
        }
    }
}
