//! Read-only descriptors of the species modules driving a model.
//!
//! The species list is owned by the surrounding engine and immutable for the
//! duration of a run. A model acquires a shared view at `load()` and releases
//! it at `unload()`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Descriptor of a single species module: trait layout and payoff bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Species {
    /// Species name
    name: Arc<str>,
    /// Names of the traits, one per trait
    trait_names: Vec<String>,
    /// Which traits are active; inactive traits are skipped by observers
    active_traits: Vec<bool>,
    /// Smallest payoff an individual of this species can achieve
    min_payoff: f64,
    /// Largest payoff an individual of this species can achieve
    max_payoff: f64,
}

impl Species {
    /// Create a species descriptor with all traits active.
    pub fn new(
        name: impl Into<Arc<str>>,
        trait_names: Vec<String>,
        min_payoff: f64,
        max_payoff: f64,
    ) -> Self {
        let active_traits = vec![true; trait_names.len()];
        Self {
            name: name.into(),
            trait_names,
            active_traits,
            min_payoff,
            max_payoff,
        }
    }

    /// Get the species name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of traits.
    pub fn n_traits(&self) -> usize {
        self.trait_names.len()
    }

    /// Get the trait names.
    pub fn trait_names(&self) -> &[String] {
        &self.trait_names
    }

    /// Get the name of trait `index`, or `None` if out of range.
    pub fn trait_name(&self, index: usize) -> Option<&str> {
        self.trait_names.get(index).map(String::as_str)
    }

    /// Get the active-trait flags.
    pub fn active_traits(&self) -> &[bool] {
        &self.active_traits
    }

    /// Mark trait `index` as active or inactive.
    pub fn set_trait_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.active_traits.get_mut(index) {
            *flag = active;
        }
    }

    /// Get the smallest achievable payoff.
    pub fn min_payoff(&self) -> f64 {
        self.min_payoff
    }

    /// Get the largest achievable payoff.
    pub fn max_payoff(&self) -> f64 {
        self.max_payoff
    }
}

/// Ordered, run-immutable list of species modules, shared between the engine
/// context and a loaded model.
pub type SpeciesList = Arc<[Species]>;

#[cfg(test)]
mod tests {
    use super::*;

    fn two_trait_species() -> Species {
        Species::new(
            "host",
            vec!["cooperate".to_string(), "defect".to_string()],
            0.0,
            3.0,
        )
    }

    #[test]
    fn test_species_new() {
        let sp = two_trait_species();

        assert_eq!(sp.name(), "host");
        assert_eq!(sp.n_traits(), 2);
        assert_eq!(sp.trait_name(0), Some("cooperate"));
        assert_eq!(sp.trait_name(2), None);
        assert_eq!(sp.min_payoff(), 0.0);
        assert_eq!(sp.max_payoff(), 3.0);
    }

    #[test]
    fn test_species_serde_round_trip() {
        let sp = two_trait_species();

        let json = serde_json::to_string(&sp).unwrap();
        let back: Species = serde_json::from_str(&json).unwrap();

        assert_eq!(back.name(), sp.name());
        assert_eq!(back.trait_names(), sp.trait_names());
        assert_eq!(back.min_payoff(), sp.min_payoff());
        assert_eq!(back.max_payoff(), sp.max_payoff());
    }

    #[test]
    fn test_all_traits_active_by_default() {
        let sp = two_trait_species();
        assert!(sp.active_traits().iter().all(|&a| a));
    }

    #[test]
    fn test_deactivate_trait() {
        let mut sp = two_trait_species();

        sp.set_trait_active(1, false);
        assert_eq!(sp.active_traits(), &[true, false]);

        // out of range is ignored
        sp.set_trait_active(5, false);
        assert_eq!(sp.active_traits(), &[true, false]);
    }
}
