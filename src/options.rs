//! Configuration options published by the model layer.
//!
//! The model exposes its report interval, relaxation time and halting time to
//! the surrounding option registry, plus a sample budget when the active
//! module supports histogram statistics. Halting and sample budgets accept
//! the sentinels `"never"` and `"unlimited"`.

use crate::errors::OptionError;
use serde::{Deserialize, Serialize};

/// Description of a single published option, for registries and help output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    /// Option name without the leading dashes
    pub name: &'static str,
    /// Default value as a string
    pub default: &'static str,
    /// One-line help text
    pub description: &'static str,
}

/// The options governing time stepping, relaxation, halting and sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOptions {
    /// Report interval in generations
    pub time_step: f64,
    /// Relaxation time in generations
    pub time_relax: f64,
    /// Halting generation; `None` means never
    pub time_stop: Option<f64>,
    /// Number of statistics samples to collect; negative means unlimited
    pub samples: f64,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            time_step: 1.0,
            time_relax: 0.0,
            time_stop: None,
            samples: -1.0,
        }
    }
}

impl ModelOptions {
    /// The options this layer publishes. The sample budget is only published
    /// when the active module declares support for probability- or time-based
    /// histograms.
    pub fn descriptors(supports_histograms: bool) -> Vec<OptionDescriptor> {
        let mut options = vec![
            OptionDescriptor {
                name: "timestep",
                default: "1",
                description: "report frequency in generations",
            },
            OptionDescriptor {
                name: "timerelax",
                default: "0",
                description: "relaxation time in generations",
            },
            OptionDescriptor {
                name: "timestop",
                default: "never",
                description: "halt execution after <h> generations",
            },
        ];
        if supports_histograms {
            options.push(OptionDescriptor {
                name: "samples",
                default: "unlimited",
                description: "number of samples for statistics",
            });
        }
        options
    }

    /// The halting generation resolved to its numeric representation.
    pub fn resolved_time_stop(&self) -> f64 {
        self.time_stop.unwrap_or(f64::INFINITY)
    }

    /// Set the halting generation from an option string; `"never"` disables
    /// halting.
    pub fn parse_time_stop(&mut self, value: &str) -> Result<(), OptionError> {
        if value.eq_ignore_ascii_case("never") {
            self.time_stop = None;
            return Ok(());
        }
        let parsed = value.parse().map_err(|_| OptionError::InvalidNumber {
            option: "timestop",
            value: value.to_string(),
        })?;
        self.time_stop = Some(parsed);
        Ok(())
    }

    /// Set the sample budget from an option string; `"unlimited"` disables
    /// the budget.
    pub fn parse_samples(&mut self, value: &str) -> Result<(), OptionError> {
        if value.eq_ignore_ascii_case("unlimited") {
            self.samples = -1.0;
            return Ok(());
        }
        self.samples = value.parse().map_err(|_| OptionError::InvalidNumber {
            option: "samples",
            value: value.to_string(),
        })?;
        Ok(())
    }

    /// Set the report interval from an option string.
    pub fn parse_time_step(&mut self, value: &str) -> Result<(), OptionError> {
        self.time_step = value.parse().map_err(|_| OptionError::InvalidNumber {
            option: "timestep",
            value: value.to_string(),
        })?;
        Ok(())
    }

    /// Set the relaxation time from an option string.
    pub fn parse_time_relax(&mut self, value: &str) -> Result<(), OptionError> {
        self.time_relax = value.parse().map_err(|_| OptionError::InvalidNumber {
            option: "timerelax",
            value: value.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ModelOptions::default();

        assert_eq!(opts.time_step, 1.0);
        assert_eq!(opts.time_relax, 0.0);
        assert_eq!(opts.time_stop, None);
        assert_eq!(opts.resolved_time_stop(), f64::INFINITY);
        assert_eq!(opts.samples, -1.0);
    }

    #[test]
    fn test_parse_time_stop_never() {
        let mut opts = ModelOptions::default();
        opts.time_stop = Some(100.0);

        opts.parse_time_stop("never").unwrap();
        assert_eq!(opts.time_stop, None);

        opts.parse_time_stop("250").unwrap();
        assert_eq!(opts.time_stop, Some(250.0));
    }

    #[test]
    fn test_parse_samples_unlimited() {
        let mut opts = ModelOptions::default();

        opts.parse_samples("1000").unwrap();
        assert_eq!(opts.samples, 1000.0);

        opts.parse_samples("unlimited").unwrap();
        assert_eq!(opts.samples, -1.0);
    }

    #[test]
    fn test_parse_invalid_number() {
        let mut opts = ModelOptions::default();

        let err = opts.parse_time_step("fast").unwrap_err();
        assert!(err.to_string().contains("timestep"));
    }

    #[test]
    fn test_descriptors_conditional_samples() {
        let without = ModelOptions::descriptors(false);
        assert_eq!(without.len(), 3);
        assert!(without.iter().all(|o| o.name != "samples"));

        let with = ModelOptions::descriptors(true);
        assert_eq!(with.len(), 4);
        assert!(with.iter().any(|o| o.name == "samples"));
    }
}
