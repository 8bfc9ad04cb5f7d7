//! The model state machine: lifecycle, time stepping, halting arbitration,
//! relaxation and statistics bookkeeping.
//!
//! A [`Model`] wraps a concrete [`DynamicsEngine`] and is the single contract
//! every dynamics family (IBS, ODE, SDE, PDE) is driven through. The model
//! owns the clock, the execution-mode state machine, the statistics
//! collector and the shared random source while loaded; the engine only
//! steps the dynamics and reports what happened.

use crate::clock::Clock;
use crate::context::{EngineContext, ModelRng};
use crate::engine::{DynamicsEngine, StepOutcome};
use crate::errors::ModelError;
use crate::mode::{Capabilities, Mode, ModelType, PendingAction};
use crate::options::ModelOptions;
use crate::species::{Species, SpeciesList};
use crate::statistics::{FixationData, StatisticsCollector};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Orchestrates a concrete dynamics engine under the shared lifecycle, time
/// model and statistics protocol.
///
/// The model is single-threaded and cooperative: the driving loop calls
/// [`next`](Model::next) and [`relax`](Model::relax) synchronously, and
/// requested configuration changes only take effect at the next safe point.
pub struct Model {
    /// The per-paradigm stepping engine
    engine: Box<dyn DynamicsEngine>,
    /// Family of the engine, fixed for the model's lifetime
    model_type: ModelType,
    /// Elapsed time and halting milestones
    clock: Clock,
    /// Active execution mode
    mode: Mode,
    /// Sample-statistics counters
    statistics: StatisticsCollector,
    /// Outcome of the most recent statistics trial, when sample statistics
    /// are permitted
    fixation: Option<FixationData>,
    /// Sample budget; negative means unlimited
    n_samples: f64,
    /// Set by the engine when dynamics reached a terminal condition
    converged: bool,
    /// Whether the current data point continues the previous time series
    connect: bool,
    /// True only within the dynamic extent of a `relax()` call
    relaxing: bool,
    /// A statistics trial is currently in progress
    trial_active: bool,
    /// Resources have been acquired from the engine context
    loaded: bool,
    /// Shared random source, held exclusively while loaded
    rng: Option<ModelRng>,
    /// Read-only view of the species modules, held while loaded
    species: Option<SpeciesList>,
    /// Actions applied one per safe point, never mid-step
    pending: VecDeque<PendingAction>,
    /// A stop was requested through the pending-action queue
    stop_requested: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("model_type", &self.model_type)
            .field("mode", &self.mode)
            .field("time", &self.clock.time())
            .field("converged", &self.converged)
            .field("loaded", &self.loaded)
            .finish()
    }
}

impl Model {
    /// Create a model bound to a concrete dynamics engine.
    pub fn new(engine: Box<dyn DynamicsEngine>) -> Self {
        let model_type = engine.model_type();
        Self {
            engine,
            model_type,
            clock: Clock::new(),
            mode: Mode::Dynamics,
            statistics: StatisticsCollector::new(),
            fixation: None,
            n_samples: -1.0,
            converged: false,
            connect: false,
            relaxing: false,
            trial_active: false,
            loaded: false,
            rng: None,
            species: None,
            pending: VecDeque::new(),
            stop_requested: false,
        }
    }

    // -- lifecycle ---------------------------------------------------------

    /// Acquire the shared random source and the species view.
    ///
    /// Fails only on resource acquisition: when the random source is already
    /// held by another loaded model or the context has no species.
    pub fn load(&mut self, ctx: &mut EngineContext) -> Result<(), ModelError> {
        if self.loaded {
            return Ok(());
        }
        let rng = ctx.acquire_rng().ok_or(ModelError::RngUnavailable)?;
        let species = ctx.species();
        if species.is_empty() {
            ctx.release_rng(rng);
            return Err(ModelError::NoSpecies);
        }
        self.rng = Some(rng);
        self.species = Some(species);
        self.loaded = true;
        Ok(())
    }

    /// Release the resources acquired at [`load`](Model::load).
    pub fn unload(&mut self, ctx: &mut EngineContext) {
        if let Some(rng) = self.rng.take() {
            ctx.release_rng(rng);
        }
        self.species = None;
        self.loaded = false;
    }

    /// Check parameter consistency and adjust where a safe default exists.
    ///
    /// Issues are reported through the logging sink. Allocates the fixation
    /// record when the engine permits sample statistics; for SDE engines the
    /// spatial index is forced to a sentinel non-negative value since the
    /// mutant location is meaningless there. Returns `true` if the
    /// adjustments require a `reset()`.
    pub fn check(&mut self) -> bool {
        if !self.permits_mode(self.mode) {
            warn!(mode = %self.mode, "mode not supported, falling back to dynamics");
            self.mode = Mode::Dynamics;
        }
        if self.clock.is_reversed() && !self.permits_time_reversal() {
            warn!(model_type = %self.model_type, "time reversal not supported, running forward");
            self.clock.set_reversed(false);
        }
        if self.engine.capabilities().sample_statistics {
            let mut data = FixationData::default();
            if self.model_type == ModelType::Sde {
                data.mutant_node = 0;
            }
            self.fixation = Some(data);
        } else {
            self.fixation = None;
        }
        false
    }

    /// Re-zero time and start a new time series. The engine rebuilds its
    /// state from scratch.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.connect = false;
        self.trial_active = false;
        if let Some(rng) = self.rng.as_mut() {
            self.engine.reset(rng);
        }
    }

    /// Re-seed the initial configuration for a fresh run.
    pub fn init(&mut self) {
        self.clock.reset();
        self.converged = false;
        self.connect = false;
        self.trial_active = false;
        if let Some(rng) = self.rng.as_mut() {
            self.engine.init(rng);
        }
    }

    /// Recompute derived state after external parameter changes. Safe to
    /// call at any time outside an in-flight step.
    pub fn update(&mut self) {
        self.engine.update();
    }

    /// Install the published configuration options.
    pub fn apply_options(&mut self, options: &ModelOptions) {
        self.clock.set_time_step(options.time_step);
        self.clock.set_time_relax(options.time_relax);
        self.clock.set_time_stop(options.resolved_time_stop());
        self.n_samples = options.samples;
    }

    // -- stepping ----------------------------------------------------------

    /// Advance the model by one reporting interval.
    ///
    /// Returns `false` when the caller should stop calling `next()` without
    /// external intervention: the model converged, a statistics sample is
    /// ready, the halting time was reached, a stop was requested, or the
    /// model is not loaded. One pending action is applied at the end of the
    /// completed step.
    pub fn next(&mut self) -> bool {
        if !self.loaded {
            return false;
        }
        let proceed = match self.mode {
            Mode::StatisticsSample => self.next_sample(),
            Mode::Dynamics | Mode::StatisticsUpdate => self.next_dynamics(),
        };
        // safe point: a completed step
        self.apply_pending();
        if self.stop_requested {
            self.stop_requested = false;
            return false;
        }
        proceed
    }

    /// One reporting interval of plain dynamics, clipped to the next halt.
    fn next_dynamics(&mut self) -> bool {
        if self.converged {
            return false;
        }
        let reversed = self.clock.is_reversed();
        let mut dt = if reversed {
            -self.clock.time_step()
        } else {
            self.clock.time_step()
        };
        let halt = self.clock.next_halt();
        if halt.is_finite() {
            let remaining = halt - self.clock.time();
            dt = if reversed {
                dt.max(remaining)
            } else {
                dt.min(remaining)
            };
        }
        match self.advance_engine(dt) {
            StepOutcome::Converged => return false,
            StepOutcome::SampleDone(data) => {
                // a completed sample requires attention even outside sample
                // mode; record it without counting it
                self.store_fixation(data);
                return false;
            }
            StepOutcome::Running | StepOutcome::SampleFailed => {}
        }
        let time = self.clock.time();
        let stop = self.clock.time_stop();
        // infinite stop means "never halt", in either direction
        let stopped = stop.is_finite() && if reversed { time <= stop } else { time >= stop };
        if stopped {
            debug!(time, "halting time reached");
            return false;
        }
        true
    }

    /// One step of the sample-statistics trial cycle: start a fresh trial
    /// when none is in progress (including relaxation), then advance it until
    /// the engine reports completion or failure.
    fn next_sample(&mut self) -> bool {
        if self.n_samples >= 0.0 && (self.statistics.n_samples() as f64) >= self.n_samples {
            return false;
        }
        if !self.trial_active {
            self.clock.reset();
            self.converged = false;
            self.connect = false;
            if let Some(rng) = self.rng.as_mut() {
                self.engine.init(rng);
            }
            self.statistics.init_sample();
            self.trial_active = true;
            if self.relax() {
                // failed initialization; routine at sample-collection scale
                self.statistics.init_failed();
                self.trial_active = false;
                return true;
            }
        }
        let dt = self.clock.time_step();
        match self.advance_engine(dt) {
            StepOutcome::Running => true,
            StepOutcome::Converged => {
                self.statistics.read_sample();
                self.trial_active = false;
                false
            }
            StepOutcome::SampleDone(data) => {
                self.store_fixation(data);
                self.statistics.read_sample();
                self.trial_active = false;
                false
            }
            StepOutcome::SampleFailed => {
                self.statistics.init_failed();
                self.trial_active = false;
                true
            }
        }
    }

    /// Advance the engine by `dt` generations and fold the outcome into the
    /// clock, the convergence flag and the connected flag.
    fn advance_engine(&mut self, dt: f64) -> StepOutcome {
        let Some(rng) = self.rng.as_mut() else {
            return StepOutcome::Converged;
        };
        let step = self.engine.advance(dt, self.mode, rng);
        self.clock.advance(step.elapsed);
        if step.outcome == StepOutcome::Converged {
            self.converged = true;
        }
        if !self.relaxing {
            self.connect = true;
        }
        step.outcome
    }

    /// Relax the initial configuration over `time_relax` generations.
    ///
    /// The fast-forward happens as a single engine step with a temporarily
    /// enlarged report interval; the relaxing flag is never observable
    /// outside this call. IBS engines reset per-individual traits afterwards
    /// so the traits seeded before relaxation do not bias the measured run.
    /// Returns `true` if the model converged during relaxation; this is
    /// logged as a warning except in sample mode, where failed
    /// initializations are routine.
    pub fn relax(&mut self) -> bool {
        if self.converged {
            return true;
        }
        let time_relax = self.clock.time_relax();
        if time_relax > 0.0 && self.clock.time() < time_relax {
            self.relaxing = true;
            let prior = self.clock.time_step();
            self.clock.set_time_step(time_relax - self.clock.time());
            let dt = self.clock.time_step();
            let outcome = self.advance_engine(dt);
            // absorption during the fast-forward ends the trial
            if matches!(
                outcome,
                StepOutcome::SampleDone(_) | StepOutcome::SampleFailed
            ) {
                self.converged = true;
            }
            self.clock.set_time_step(prior);
            self.relaxing = false;
            if self.model_type == ModelType::Ibs {
                self.engine.reset_traits();
            }
        }
        if self.converged {
            if self.mode != Mode::StatisticsSample {
                warn!("extinction during relaxation");
            }
            return true;
        }
        false
    }

    // -- mode state machine ------------------------------------------------

    /// Check if the engine implements `mode`; only dynamics is permitted by
    /// default.
    pub fn permits_mode(&self, mode: Mode) -> bool {
        let caps = self.engine.capabilities();
        match mode {
            Mode::Dynamics => true,
            Mode::StatisticsSample => caps.sample_statistics,
            Mode::StatisticsUpdate => caps.update_statistics,
        }
    }

    /// Request a mode change, applied at the next safe point. Returns
    /// `false` without side effects if the engine does not support `mode`.
    pub fn request_mode(&mut self, mode: Mode) -> bool {
        if !self.permits_mode(mode) {
            return false;
        }
        self.pending.push_back(PendingAction::ChangeMode(mode));
        true
    }

    /// Request a halt at the next safe point. Never interrupts an in-flight
    /// step.
    pub fn request_stop(&mut self) {
        self.pending.push_back(PendingAction::Stop);
    }

    /// Immediately switch the execution mode. Privileged mutator for the
    /// driving engine once it has reached a safe point; use
    /// [`request_mode`](Model::request_mode) everywhere else. Returns whether
    /// the mode actually changed.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if !self.permits_mode(mode) {
            return false;
        }
        let changed = self.mode != mode;
        self.mode = mode;
        if changed && mode == Mode::StatisticsSample {
            self.statistics.reset();
            self.trial_active = false;
        }
        changed
    }

    /// Get the active execution mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Apply at most one pending action. Called at the end of a completed
    /// step.
    fn apply_pending(&mut self) {
        if let Some(action) = self.pending.pop_front() {
            match action {
                PendingAction::ChangeMode(mode) => {
                    self.set_mode(mode);
                }
                PendingAction::Stop => self.stop_requested = true,
            }
        }
    }

    // -- time --------------------------------------------------------------

    /// Elapsed time in generations.
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    /// The report interval in generations.
    pub fn time_step(&self) -> f64 {
        self.clock.time_step()
    }

    /// Set the report interval; negative values clamp to zero.
    pub fn set_time_step(&mut self, value: f64) {
        self.clock.set_time_step(value);
    }

    /// The relaxation time in generations.
    pub fn time_relax(&self) -> f64 {
        self.clock.time_relax()
    }

    /// Set the relaxation time in generations.
    pub fn set_time_relax(&mut self, value: f64) {
        self.clock.set_time_relax(value);
    }

    /// The halting generation; infinite means never.
    pub fn time_stop(&self) -> f64 {
        self.clock.time_stop()
    }

    /// Set the halting generation.
    pub fn set_time_stop(&mut self, value: f64) {
        self.clock.set_time_stop(value);
    }

    /// The nearest forthcoming halting generation.
    pub fn next_halt(&self) -> f64 {
        self.clock.next_halt()
    }

    /// Check if the engine can integrate towards decreasing time. Only few
    /// families (ODE, SDE) opt in.
    pub fn permits_time_reversal(&self) -> bool {
        self.engine.capabilities().time_reversal
    }

    /// Request time reversal. Returns `false` without side effects when the
    /// engine cannot honour the request.
    pub fn set_time_reversed(&mut self, reversed: bool) -> bool {
        if reversed && !self.permits_time_reversal() {
            return false;
        }
        self.clock.set_reversed(reversed);
        true
    }

    /// Check if time currently advances towards smaller values.
    pub fn is_time_reversed(&self) -> bool {
        self.clock.is_reversed()
    }

    // -- statistics --------------------------------------------------------

    /// Zero the statistics counters and get ready for a new collection.
    pub fn reset_statistics_sample(&mut self) {
        self.statistics.reset();
        self.trial_active = false;
    }

    /// Mark the current in-progress sample as started.
    pub fn init_statistics_sample(&mut self) {
        self.statistics.init_sample();
    }

    /// Count a sample attempt that aborted before completion.
    pub fn init_statistics_failed(&mut self) {
        self.statistics.init_failed();
    }

    /// Signal that the current statistics sample is ready to process. At
    /// most one count per sample cycle.
    pub fn read_statistics_sample(&mut self) {
        self.statistics.read_sample();
    }

    /// Number of completed statistics samples.
    pub fn n_statistics_samples(&self) -> usize {
        self.statistics.n_samples()
    }

    /// Number of failed sample attempts.
    pub fn n_statistics_failed(&self) -> usize {
        self.statistics.n_failed()
    }

    /// The statistics counters.
    pub fn statistics(&self) -> &StatisticsCollector {
        &self.statistics
    }

    /// Outcome of the most recent statistics trial, if sample statistics are
    /// permitted.
    pub fn fixation_data(&self) -> Option<&FixationData> {
        self.fixation.as_ref()
    }

    /// Record a completed trial, forcing the sentinel index for families
    /// without a spatial index concept.
    fn store_fixation(&mut self, mut data: FixationData) {
        if self.model_type == ModelType::Sde && data.mutant_node < 0 {
            data.mutant_node = 0;
        }
        self.fixation = Some(data);
    }

    // -- observers ---------------------------------------------------------

    /// The family of the wrapped engine.
    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    /// The capability set of the wrapped engine.
    pub fn capabilities(&self) -> Capabilities {
        self.engine.capabilities()
    }

    /// Check if the model has converged. Once set, stepping stops until
    /// re-initialized.
    pub fn has_converged(&self) -> bool {
        self.converged
    }

    /// Check if the current data point continues the previous time series.
    /// `false` right after `init()`, `reset()` or state restoration.
    pub fn is_connected(&self) -> bool {
        self.connect
    }

    /// Check if the model is within a relaxation fast-forward.
    pub fn is_relaxing(&self) -> bool {
        self.relaxing
    }

    /// Check if resources are currently acquired.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// One-line summary of the engine state.
    pub fn status(&self) -> String {
        self.engine.status()
    }

    /// Formatted summary of progress: the sample tally in sample mode, the
    /// elapsed time otherwise.
    pub fn counter(&self) -> String {
        if self.mode == Mode::StatisticsSample {
            let failed = self.statistics.n_failed();
            if failed > 0 {
                format!(
                    "samples: {} (failed: {failed})",
                    self.statistics.n_samples()
                )
            } else {
                format!("samples: {}", self.statistics.n_samples())
            }
        } else {
            format!("time: {:.2}", self.clock.time())
        }
    }

    // -- species and means -------------------------------------------------

    /// The number of species modules; zero while unloaded.
    pub fn n_species(&self) -> usize {
        self.species.as_ref().map_or(0, |s| s.len())
    }

    /// Check if the model entertains multiple species.
    pub fn is_multispecies(&self) -> bool {
        self.n_species() > 1
    }

    /// The species module with the given ID.
    pub fn species(&self, id: usize) -> Option<&Species> {
        self.species.as_ref()?.get(id)
    }

    /// Total number of mean values across all species.
    pub fn n_mean(&self) -> usize {
        self.species
            .as_ref()
            .map_or(0, |s| s.iter().map(Species::n_traits).sum())
    }

    /// Number of mean values for species `id`.
    pub fn n_mean_for(&self, id: usize) -> usize {
        self.species(id).map_or(0, Species::n_traits)
    }

    /// Names of all mean traits across species, in reporting order.
    pub fn mean_names(&self) -> Vec<String> {
        let Some(species) = self.species.as_ref() else {
            return Vec::new();
        };
        species
            .iter()
            .flat_map(|sp| sp.trait_names().iter().cloned())
            .collect()
    }

    /// Name of the mean trait with the given global index, or `None` if the
    /// index is invalid or the trait is inactive.
    pub fn mean_name(&self, mut index: usize) -> Option<&str> {
        for sp in self.species.as_ref()?.iter() {
            let nt = sp.n_traits();
            if index < nt {
                if sp.active_traits().get(index).copied().unwrap_or(false) {
                    return sp.trait_name(index);
                }
                return None;
            }
            index -= nt;
        }
        None
    }

    /// Fill `mean` with the mean trait values of all species. Returns
    /// whether this and the previous data point should be connected.
    pub fn mean_traits(&self, mean: &mut [f64]) -> bool {
        let Some(species) = self.species.as_ref() else {
            return false;
        };
        let mut skip = 0;
        for (id, sp) in species.iter().enumerate() {
            let nt = sp.n_traits();
            if let Some(buf) = mean.get_mut(skip..skip + nt) {
                self.engine.mean_traits(id, buf);
            }
            skip += nt;
        }
        self.connect
    }

    /// Fill `mean` with the mean trait values of species `id`.
    pub fn mean_traits_for(&self, id: usize, mean: &mut [f64]) -> bool {
        if self.species(id).is_none() {
            return false;
        }
        self.engine.mean_traits(id, mean);
        self.connect
    }

    /// Fill `mean` with the mean fitness values of all species.
    pub fn mean_fitness(&self, mean: &mut [f64]) -> bool {
        let Some(species) = self.species.as_ref() else {
            return false;
        };
        let mut skip = 0;
        for (id, sp) in species.iter().enumerate() {
            let nt = sp.n_traits();
            if let Some(buf) = mean.get_mut(skip..skip + nt) {
                self.engine.mean_fitness(id, buf);
            }
            skip += nt;
        }
        self.connect
    }

    /// Fill `mean` with the mean fitness values of species `id`.
    pub fn mean_fitness_for(&self, id: usize, mean: &mut [f64]) -> bool {
        if self.species(id).is_none() {
            return false;
        }
        self.engine.mean_fitness(id, mean);
        self.connect
    }

    /// Mean trait values at location `idx` for species `id`; only engines
    /// with local dynamics provide these. The returned slice borrows the
    /// engine's storage and is valid until the next mutating call.
    pub fn mean_traits_at(&self, id: usize, idx: usize) -> Option<&[f64]> {
        self.engine.mean_traits_at(id, idx)
    }

    /// Smallest achievable score for species `id`.
    pub fn min_score(&self, id: usize) -> f64 {
        self.engine.min_score(id)
    }

    /// Largest achievable score for species `id`.
    pub fn max_score(&self, id: usize) -> f64 {
        self.engine.max_score(id)
    }

    /// Absolute fitness minimum for species `id`.
    pub fn min_fitness(&self, id: usize) -> f64 {
        self.engine.min_fitness(id)
    }

    /// Absolute fitness maximum for species `id`.
    pub fn max_fitness(&self, id: usize) -> f64 {
        self.engine.max_fitness(id)
    }

    // -- serialization -----------------------------------------------------

    /// Encode the complete run state as a key/value document.
    ///
    /// The document carries the clock, mode, statistics, the serialized
    /// random source and the engine internals; restoring it reproduces
    /// bit-identical subsequent trajectories. Returns `None` while unloaded.
    pub fn encode_state(&self) -> Option<Value> {
        let rng = self.rng.as_ref()?;
        let rng_bytes = bincode::serialize(rng).ok()?;
        let time_stop = self.clock.time_stop();
        let snapshot = ModelSnapshot {
            model_type: self.model_type,
            mode: self.mode,
            time: self.clock.time(),
            time_step: self.clock.time_step(),
            time_relax: self.clock.time_relax(),
            time_stop: time_stop.is_finite().then_some(time_stop),
            time_reversed: self.clock.is_reversed(),
            converged: self.converged,
            n_samples: self.n_samples,
            statistics: self.statistics.clone(),
            fixation: self.fixation.clone(),
            rng: rng_bytes,
            engine: self.engine.encode_state(),
        };
        serde_json::to_value(&snapshot).ok()
    }

    /// Restore a state produced by [`encode_state`](Model::encode_state).
    ///
    /// Returns `false` on structurally incompatible input — wrong document
    /// shape, mismatched model family, unsupported mode, or an engine
    /// rejection — without partially mutating the model. The restored point
    /// starts a new time series.
    pub fn restore_state(&mut self, state: &Value) -> bool {
        if !self.loaded {
            return false;
        }
        let Ok(snapshot) = serde_json::from_value::<ModelSnapshot>(state.clone()) else {
            return false;
        };
        if snapshot.model_type != self.model_type {
            return false;
        }
        if !self.permits_mode(snapshot.mode) {
            return false;
        }
        let Ok(rng) = bincode::deserialize::<ModelRng>(&snapshot.rng) else {
            return false;
        };
        if !self.engine.restore_state(&snapshot.engine) {
            return false;
        }
        self.rng = Some(rng);
        self.mode = snapshot.mode;
        self.clock.set_time(snapshot.time);
        self.clock.set_time_step(snapshot.time_step);
        self.clock.set_time_relax(snapshot.time_relax);
        self.clock
            .set_time_stop(snapshot.time_stop.unwrap_or(f64::INFINITY));
        self.clock.set_reversed(snapshot.time_reversed);
        self.converged = snapshot.converged;
        self.n_samples = snapshot.n_samples;
        self.statistics = snapshot.statistics;
        self.fixation = snapshot.fixation;
        self.connect = false;
        self.trial_active = false;
        true
    }
}

/// The serialized form of a model's run state.
#[derive(Debug, Serialize, Deserialize)]
struct ModelSnapshot {
    model_type: ModelType,
    mode: Mode,
    time: f64,
    time_step: f64,
    time_relax: f64,
    /// `None` means never halt (JSON cannot carry infinities)
    time_stop: Option<f64>,
    time_reversed: bool,
    converged: bool,
    n_samples: f64,
    statistics: StatisticsCollector,
    fixation: Option<FixationData>,
    /// Random source state, bincode encoded
    rng: Vec<u8>,
    /// Family-specific engine internals
    engine: Value,
}
