//! Execution modes, model families and capability flags.
//!
//! A model family (IBS, ODE, SDE, PDE) is fixed for the lifetime of a loaded
//! engine. The execution mode selects what the driving loop collects:
//! continuous dynamics, sample-based statistics (fixation probabilities and
//! times) or update-based statistics (sojourn times).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution mode of a model. Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Continuous dynamics (initial mode, always permitted)
    Dynamics,
    /// Sample-based statistics, e.g. fixation probabilities and times
    StatisticsSample,
    /// Update-based statistics, e.g. sojourn times
    StatisticsUpdate,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dynamics => write!(f, "dynamics"),
            Self::StatisticsSample => write!(f, "statistics (sample)"),
            Self::StatisticsUpdate => write!(f, "statistics (update)"),
        }
    }
}

/// The family of a dynamics engine, fixed for the lifetime of a loaded model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelType {
    /// Individual-based stochastic simulation
    Ibs,
    /// Ordinary differential equations
    Ode,
    /// Stochastic differential equations
    Sde,
    /// Partial differential equations (reaction-diffusion)
    Pde,
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ibs => write!(f, "IBS"),
            Self::Ode => write!(f, "ODE"),
            Self::Sde => write!(f, "SDE"),
            Self::Pde => write!(f, "PDE"),
        }
    }
}

/// Explicit, queryable capability set of a dynamics engine.
///
/// Families opt in to every capability; the default declares none. This
/// replaces marker-interface style capability checks with a plain value that
/// the model can interrogate when gating mode changes or time reversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Supports sample-based statistics (fixation probabilities and times)
    pub sample_statistics: bool,
    /// Supports update-based statistics (sojourn times)
    pub update_statistics: bool,
    /// Supports integrating towards decreasing time
    pub time_reversal: bool,
    /// Supports pairwise interactions
    pub pairwise_interactions: bool,
    /// Supports interactions in groups of arbitrary size
    pub group_interactions: bool,
    /// Index of the dependent trait for replicator dynamics, where the
    /// frequencies of all traits sum to one; `None` for density dynamics
    pub dependent_trait: Option<usize>,
}

impl Capabilities {
    /// Capability set declaring nothing beyond plain dynamics.
    pub fn none() -> Self {
        Self::default()
    }

    /// Check whether the engine runs density rather than frequency dynamics.
    pub fn is_density(&self) -> bool {
        self.dependent_trait.is_none()
    }
}

/// An action requested while a step may be in flight, applied by the driving
/// loop at the next safe point (end of a completed step). Mode is never
/// mutated mid-step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Switch the execution mode
    ChangeMode(Mode),
    /// Halt the run at the next safe point
    Stop,
}
