//! Shared test fixtures: a toy drift engine implementing the dynamics
//! engine contract.
//!
//! The engine evolves the frequency of a single trait under weak selection
//! and diffusion noise, absorbing at the boundaries. It is deliberately
//! simple but exercises the full contract: convergence, sample trials,
//! local views and bit-identical state restoration.

#![allow(dead_code)]

use evodyn::prelude::*;
use rand_distr::{Distribution, Normal};
use serde_json::{json, Value};

/// Elementary update size in generations.
const SUBSTEP: f64 = 0.1;

pub struct DriftEngine {
    model_type: ModelType,
    capabilities: Capabilities,
    selection: f64,
    noise: f64,
    init_freq: f64,
    freq: f64,
    absorbed: bool,
    updates: f64,
    /// Mean traits at the single local site, for the borrowed-view accessor
    local: [f64; 2],
}

impl DriftEngine {
    pub fn new(model_type: ModelType) -> Self {
        let capabilities = Capabilities {
            sample_statistics: true,
            update_statistics: true,
            time_reversal: matches!(model_type, ModelType::Ode | ModelType::Sde),
            pairwise_interactions: true,
            group_interactions: false,
            dependent_trait: Some(1),
        };
        Self {
            model_type,
            capabilities,
            selection: 0.02,
            noise: 0.01,
            init_freq: 0.5,
            freq: 0.5,
            absorbed: false,
            updates: 0.0,
            local: [0.5, 0.5],
        }
    }

    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    pub fn with_init_freq(mut self, freq: f64) -> Self {
        self.init_freq = freq;
        self
    }

    fn absorb_outcome(&self, mode: Mode) -> StepOutcome {
        if mode == Mode::StatisticsSample {
            StepOutcome::SampleDone(FixationData {
                // SDE engines have no node concept; the model forces the
                // sentinel
                mutant_node: if self.model_type == ModelType::Sde { -1 } else { 0 },
                mutant_trait: 0,
                resident_trait: 1,
                type_fixed: if self.freq >= 1.0 { 0 } else { 1 },
                time_fixed: self.updates * SUBSTEP,
                updates_fixed: self.updates,
            })
        } else {
            StepOutcome::Converged
        }
    }
}

impl DynamicsEngine for DriftEngine {
    fn model_type(&self) -> ModelType {
        self.model_type
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn update(&mut self) {
        self.local = [self.freq, 1.0 - self.freq];
    }

    fn init(&mut self, _rng: &mut ModelRng) {
        self.freq = self.init_freq;
        self.absorbed = false;
        self.updates = 0.0;
        self.update();
    }

    fn advance(&mut self, dt: f64, mode: Mode, rng: &mut ModelRng) -> Step {
        if self.absorbed {
            return Step {
                elapsed: 0.0,
                outcome: StepOutcome::Converged,
            };
        }
        let normal = Normal::new(0.0, 1.0).unwrap();
        let direction = if dt < 0.0 { -1.0 } else { 1.0 };
        // a zero interval requests a single elementary update
        let total = if dt == 0.0 { SUBSTEP } else { dt.abs() };
        let mut elapsed = 0.0;
        while elapsed < total {
            let h = SUBSTEP.min(total - elapsed);
            let drift = self.selection * self.freq * (1.0 - self.freq);
            let diffusion = self.noise * h.sqrt() * normal.sample(rng);
            self.freq = (self.freq + direction * drift * h + diffusion).clamp(0.0, 1.0);
            self.updates += 1.0;
            elapsed += h;
            if self.freq <= 0.0 || self.freq >= 1.0 {
                self.absorbed = true;
                self.update();
                return Step {
                    elapsed: direction * elapsed,
                    outcome: self.absorb_outcome(mode),
                };
            }
        }
        self.update();
        Step::running(direction * elapsed)
    }

    fn min_score(&self, _id: usize) -> f64 {
        0.0
    }

    fn max_score(&self, _id: usize) -> f64 {
        1.0 + self.selection
    }

    fn min_fitness(&self, _id: usize) -> f64 {
        1.0
    }

    fn max_fitness(&self, _id: usize) -> f64 {
        1.0 + self.selection
    }

    fn mean_traits(&self, _id: usize, mean: &mut [f64]) {
        if let Some(first) = mean.first_mut() {
            *first = self.freq;
        }
        if let Some(second) = mean.get_mut(1) {
            *second = 1.0 - self.freq;
        }
    }

    fn mean_fitness(&self, _id: usize, mean: &mut [f64]) {
        if let Some(first) = mean.first_mut() {
            *first = 1.0 + self.selection * self.freq;
        }
        if let Some(second) = mean.get_mut(1) {
            *second = 1.0;
        }
    }

    fn mean_traits_at(&self, id: usize, idx: usize) -> Option<&[f64]> {
        if id == 0 && idx == 0 {
            Some(&self.local)
        } else {
            None
        }
    }

    fn status(&self) -> String {
        format!("a: {:.3}, b: {:.3}", self.freq, 1.0 - self.freq)
    }

    fn encode_state(&self) -> Value {
        json!({
            "freq": self.freq,
            "init_freq": self.init_freq,
            "absorbed": self.absorbed,
            "updates": self.updates,
        })
    }

    fn restore_state(&mut self, state: &Value) -> bool {
        let (Some(freq), Some(init_freq), Some(absorbed), Some(updates)) = (
            state.get("freq").and_then(Value::as_f64),
            state.get("init_freq").and_then(Value::as_f64),
            state.get("absorbed").and_then(Value::as_bool),
            state.get("updates").and_then(Value::as_f64),
        ) else {
            return false;
        };
        self.freq = freq;
        self.init_freq = init_freq;
        self.absorbed = absorbed;
        self.updates = updates;
        self.update();
        true
    }
}

/// A context with a single two-trait species.
pub fn context(seed: u64) -> EngineContext {
    let species = vec![Species::new(
        "resident",
        vec!["a".to_string(), "b".to_string()],
        0.0,
        1.0,
    )];
    EngineContext::new(species, Some(seed))
}

/// A loaded, checked and initialized model around the given engine.
pub fn loaded_model(engine: DriftEngine, seed: u64) -> (Model, EngineContext) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut ctx = context(seed);
    let mut model = Model::new(Box::new(engine));
    model.load(&mut ctx).expect("load");
    model.check();
    model.init();
    (model, ctx)
}
