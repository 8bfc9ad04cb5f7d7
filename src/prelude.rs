//! Convenience re-exports of the most commonly used types.

pub use crate::clock::Clock;
pub use crate::context::{EngineContext, ModelRng};
pub use crate::engine::{DynamicsEngine, Step, StepOutcome};
pub use crate::errors::{ModelError, OptionError};
pub use crate::mode::{Capabilities, Mode, ModelType, PendingAction};
pub use crate::model::Model;
pub use crate::options::{ModelOptions, OptionDescriptor};
pub use crate::species::{Species, SpeciesList};
pub use crate::statistics::{FixationData, StatisticsCollector};
