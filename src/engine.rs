//! Abstract contract every concrete dynamics engine must honor.
//!
//! Concrete engines — individual-based stochastic simulations, ODE/SDE
//! integrators, reaction-diffusion solvers — implement [`DynamicsEngine`] and
//! are driven by the [`Model`](crate::model::Model), which owns the clock,
//! the mode state machine and all statistics bookkeeping.

use crate::context::ModelRng;
use crate::mode::{Capabilities, Mode, ModelType};
use crate::statistics::FixationData;
use serde_json::Value;

/// What happened during one engine step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The engine advanced and can be stepped again
    Running,
    /// Dynamics reached a terminal condition (extinction, fixation,
    /// equilibrium); the driving loop must stop until re-initialized
    Converged,
    /// A statistics sample completed with the given trial outcome
    SampleDone(FixationData),
    /// The current trial was discarded before completion
    SampleFailed,
}

/// The result of advancing an engine by one reporting interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Simulated time that actually elapsed, signed. Individual-based engines
    /// may overshoot the requested interval by a fraction of an update.
    pub elapsed: f64,
    /// Outcome of the step
    pub outcome: StepOutcome,
}

impl Step {
    /// A step that advanced by exactly the requested interval.
    pub fn running(elapsed: f64) -> Self {
        Self {
            elapsed,
            outcome: StepOutcome::Running,
        }
    }
}

/// Contract for a concrete per-paradigm stepping engine.
///
/// Engines must be resilient: recoverable numerical difficulties are reported
/// through the [`StepOutcome`], never by panicking. A surrounding engine may
/// parallelize work internally (e.g. PDE grid updates), but `advance` returns
/// only after all of it has completed, so the caller always observes a
/// sequentially consistent state.
pub trait DynamicsEngine {
    /// The family of this engine, fixed for its lifetime.
    fn model_type(&self) -> ModelType;

    /// Capabilities this engine opts in to. Declares nothing by default.
    fn capabilities(&self) -> Capabilities {
        Capabilities::none()
    }

    /// Recompute derived internal state after external configuration changes.
    /// Safe to call at any time outside an in-flight step.
    fn update(&mut self);

    /// Seed the initial configuration for a fresh run.
    fn init(&mut self, rng: &mut ModelRng);

    /// Re-build the engine state from scratch, e.g. after structural
    /// parameter changes.
    fn reset(&mut self, rng: &mut ModelRng) {
        self.init(rng);
    }

    /// Advance by one reporting interval of `dt` generations (negative under
    /// time reversal; zero requests a single elementary update). May
    /// internally process many elementary events. The active `mode` selects
    /// what terminal conditions mean: in sample mode an absorption completes
    /// the current trial, otherwise it converges the run.
    fn advance(&mut self, dt: f64, mode: Mode, rng: &mut ModelRng) -> Step;

    /// Smallest score individuals of species `id` can achieve, adjusted for
    /// population structure and payoff accounting. Pure; stable between
    /// `update()` calls.
    fn min_score(&self, id: usize) -> f64;

    /// Largest score individuals of species `id` can achieve.
    fn max_score(&self, id: usize) -> f64;

    /// Absolute fitness minimum for species `id`, used for adoption
    /// probabilities and scaling graphical output.
    fn min_fitness(&self, id: usize) -> f64;

    /// Absolute fitness maximum for species `id`.
    fn max_fitness(&self, id: usize) -> f64;

    /// Fill `mean` with the current mean trait values of species `id`.
    fn mean_traits(&self, id: usize, mean: &mut [f64]);

    /// Fill `mean` with the current mean fitness values of species `id`.
    fn mean_fitness(&self, id: usize, mean: &mut [f64]);

    /// Mean trait values at location `idx` for species `id`. Only meaningful
    /// for engines with local dynamics (PDE). The returned slice borrows the
    /// engine's storage and is valid until the next mutating call.
    fn mean_traits_at(&self, _id: usize, _idx: usize) -> Option<&[f64]> {
        None
    }

    /// One-line summary of the current state, e.g. trait frequencies.
    fn status(&self) -> String;

    /// Reset per-individual traits while preserving population structure.
    /// Only meaningful for IBS engines; no-op by default.
    fn reset_traits(&mut self) {}

    /// Serialize family-specific internals into a key/value document, enough
    /// to reproduce bit-identical trajectories on restore.
    fn encode_state(&self) -> Value;

    /// Restore family-specific internals from `state`. Returns `false` on
    /// structurally incompatible input without partially mutating the engine.
    fn restore_state(&mut self, state: &Value) -> bool;
}
