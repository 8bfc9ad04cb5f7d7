//! Simulated time and halting arithmetic.
//!
//! Time is measured in generations. For individual-based models one
//! generation corresponds to one Monte-Carlo step across the population;
//! for differential equation models it is the integration time. Time may be
//! negative for models that integrate backwards.

/// Relaxation times with absolute value below this threshold are treated as
/// "no relaxation requested" when computing the next halt.
const RELAX_EPSILON: f64 = 1e-8;

/// Tracks elapsed simulated time and the scheduled halting milestones.
///
/// The clock supports forward and reversed advancement. `time_stop` and
/// `time_relax` can be positive or negative; the halting arithmetic flips
/// symmetrically when time is reversed.
#[derive(Debug, Clone)]
pub struct Clock {
    /// Generations elapsed since the last reset; negative under time reversal
    time: f64,
    /// Report interval in generations; `0` reports every update
    time_step: f64,
    /// Relaxation duration in generations; `0` disables relaxation
    time_relax: f64,
    /// Absolute halting generation; infinite means "never"
    time_stop: f64,
    /// Direction of travel
    reversed: bool,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            time: 0.0,
            time_step: 1.0,
            time_relax: 0.0,
            time_stop: f64::INFINITY,
            reversed: false,
        }
    }
}

impl Clock {
    /// Create a clock with default settings (report every generation, never halt).
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the elapsed time in generations.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Set the elapsed time. Used when restoring a saved run.
    pub(crate) fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    /// Advance the elapsed time by `dt` generations (signed).
    pub(crate) fn advance(&mut self, dt: f64) {
        self.time += dt;
    }

    /// Re-zero the elapsed time.
    pub(crate) fn reset(&mut self) {
        self.time = 0.0;
    }

    /// Get the report interval in generations.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Set the report interval. Negative values clamp to `0` (report every
    /// update).
    pub fn set_time_step(&mut self, value: f64) {
        self.time_step = value.max(0.0);
    }

    /// Get the relaxation duration in generations.
    pub fn time_relax(&self) -> f64 {
        self.time_relax
    }

    /// Set the relaxation duration in generations.
    pub fn set_time_relax(&mut self, value: f64) {
        self.time_relax = value;
    }

    /// Get the halting generation; infinite means "never".
    pub fn time_stop(&self) -> f64 {
        self.time_stop
    }

    /// Set the halting generation.
    pub fn set_time_stop(&mut self, value: f64) {
        self.time_stop = value;
    }

    /// Check whether time advances towards smaller values.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Set the direction of travel.
    pub(crate) fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Get the nearest forthcoming halting generation.
    ///
    /// Candidates are `time_stop` and the end of the relaxation window. Under
    /// time reversal both milestones must lie below the current time and the
    /// nearest one is the maximum; otherwise both must lie above and the
    /// nearest one is the minimum. A relaxation time of (almost) zero means
    /// no relaxation was requested.
    pub fn next_halt(&self) -> f64 {
        if self.reversed {
            let halt = if self.time_stop < self.time {
                self.time_stop
            } else {
                f64::NEG_INFINITY
            };
            let relax = if self.time_relax.abs() > RELAX_EPSILON && self.time_relax < self.time {
                self.time_relax
            } else {
                f64::NEG_INFINITY
            };
            return halt.max(relax);
        }
        let halt = if self.time_stop > self.time {
            self.time_stop
        } else {
            f64::INFINITY
        };
        let relax = if self.time_relax.abs() > RELAX_EPSILON && self.time_relax > self.time {
            self.time_relax
        } else {
            f64::INFINITY
        };
        halt.min(relax)
    }
}
