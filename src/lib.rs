//! # evodyn
//!
//! Orchestration core for evolutionary dynamics computations. The crate
//! defines the shared contract that every concrete dynamics engine —
//! individual-based stochastic simulation (IBS), ordinary/stochastic/partial
//! differential equations (ODE, SDE, PDE) — is driven through: generation
//! counting, relaxation, convergence detection, halting arbitration,
//! execution-mode switching, statistics bookkeeping and reproducible
//! serialization of run state.
//!
//! The numerical integrators themselves are external: they implement
//! [`DynamicsEngine`](engine::DynamicsEngine) and are wrapped in a
//! [`Model`](model::Model), which owns the clock, the mode state machine and
//! the shared random source for the duration of a run.

pub mod clock;
pub mod context;
pub mod engine;
pub mod errors;
pub mod mode;
pub mod model;
pub mod options;
pub mod prelude;
pub mod species;
pub mod statistics;

pub use context::{EngineContext, ModelRng};
pub use engine::{DynamicsEngine, Step, StepOutcome};
pub use mode::{Capabilities, Mode, ModelType};
pub use model::Model;
