//! Subgradient driver configuration and step-size rules.

use std::str::FromStr;

use thiserror::Error;

/// Errors raised by configuration validation and parsing.
///
/// Every variant is fatal: the driver refuses to start and no iteration is
/// attempted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A step-size method name from an external source did not match any
    /// known rule.
    #[error("unknown step-size method `{0}`, expected `geometric` or `adaptive`")]
    UnknownStepSizeMethod(String),
    /// `max_iterations` was zero.
    #[error("max_iterations must be positive")]
    ZeroMaxIterations,
    /// `initial_step` was non-finite or non-positive.
    #[error("initial_step must be finite and positive, got {0}")]
    BadInitialStep(f64),
    /// The geometric decay factor was outside `(0, 1)`.
    #[error("geometric power must be in (0, 1), got {0}")]
    BadPower(f64),
    /// The adaptive aggressiveness was non-finite or non-positive.
    #[error("adaptive rho must be finite and positive, got {0}")]
    BadRho(f64),
    /// A termination tolerance was non-finite or non-positive.
    #[error("tolerance `{name}` must be finite and positive, got {value}")]
    BadTolerance {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Target value used by the adaptive step rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetAnchor {
    /// Freeze the target at the Lagrangian value of the initial random
    /// primal point and never update it.
    ///
    /// This is the historical behavior of the method this crate derives
    /// from; it deviates from the textbook Polyak rule, which tracks a
    /// running estimate of the optimum.
    #[default]
    FirstIterate,

    /// Re-anchor the target to the best Lagrangian value seen so far, the
    /// textbook Polyak choice.
    RunningBest,
}

/// Step-size rule for the multiplier update.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepSizeRule {
    /// Geometric decay: `a_{k+1} = power * a_k`.
    ///
    /// Monotone decreasing and oblivious to progress; never reports a
    /// stall shrink. Typical `power`: 0.9.
    Geometric {
        /// Decay factor in (0, 1).
        power: f64,
    },

    /// Polyak-style adaptive rule:
    /// `a = (lagrangian - target) * rho / ||g||^2`.
    ///
    /// When the tracked gap has failed to improve for more than the
    /// configured number of iterations, `rho` is halved before the step is
    /// computed and the shrink is reported to the driver, which resets the
    /// stall counter.
    Adaptive {
        /// Aggressiveness multiplier. Typical starting value: 2.
        rho: f64,
        /// How the target value is chosen.
        anchor: TargetAnchor,
    },
}

impl StepSizeRule {
    /// Geometric decay with the conventional factor 0.9.
    pub fn geometric() -> Self {
        StepSizeRule::Geometric { power: 0.9 }
    }

    /// Adaptive rule with `rho = 2` and the frozen first-iterate target.
    pub fn adaptive() -> Self {
        StepSizeRule::Adaptive {
            rho: 2.0,
            anchor: TargetAnchor::FirstIterate,
        }
    }
}

impl Default for StepSizeRule {
    fn default() -> Self {
        StepSizeRule::adaptive()
    }
}

impl FromStr for StepSizeRule {
    type Err = ConfigError;

    /// Parses a method name from external configuration.
    ///
    /// Recognizes `geometric` and `adaptive` (with their default
    /// parameters); anything else is a fatal
    /// [`ConfigError::UnknownStepSizeMethod`].
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "geometric" => Ok(StepSizeRule::geometric()),
            "adaptive" => Ok(StepSizeRule::adaptive()),
            other => Err(ConfigError::UnknownStepSizeMethod(other.to_string())),
        }
    }
}

/// Configuration for the subgradient driver.
///
/// # Examples
///
/// ```
/// use lagrel::subgrad::{StepSizeRule, SubgradConfig};
///
/// let config = SubgradConfig::default()
///     .with_max_iterations(500)
///     .with_step_rule(StepSizeRule::Geometric { power: 0.95 })
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubgradConfig {
    /// Maximum number of dual iterations.
    pub max_iterations: usize,

    /// Step-size rule for the multiplier update.
    pub step_rule: StepSizeRule,

    /// Initial step size `a0`.
    pub initial_step: f64,

    /// Stall threshold: the adaptive rule shrinks once the unimproved
    /// iteration count strictly exceeds this.
    pub unimproved_iter_max: usize,

    /// Convergence tolerance on the subgradient infinity norm.
    pub eps_subgradient: f64,

    /// Termination tolerance on the step size.
    pub eps_step: f64,

    /// Collect a per-iteration [`IterationRecord`] trace.
    ///
    /// [`IterationRecord`]: super::IterationRecord
    pub record_trace: bool,

    /// Random seed for the initial primal guess.
    ///
    /// `Some` makes the whole run reproducible; `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SubgradConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            step_rule: StepSizeRule::default(),
            initial_step: 1.0,
            unimproved_iter_max: 7,
            eps_subgradient: 1e-3,
            eps_step: 1e-6,
            record_trace: true,
            seed: None,
        }
    }
}

impl SubgradConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_step_rule(mut self, rule: StepSizeRule) -> Self {
        self.step_rule = rule;
        self
    }

    /// Selects the step rule by name, as it would arrive from an external
    /// configuration source.
    pub fn with_step_rule_name(mut self, name: &str) -> Result<Self, ConfigError> {
        self.step_rule = name.parse()?;
        Ok(self)
    }

    pub fn with_initial_step(mut self, a0: f64) -> Self {
        self.initial_step = a0;
        self
    }

    pub fn with_unimproved_iter_max(mut self, n: usize) -> Self {
        self.unimproved_iter_max = n;
        self
    }

    pub fn with_tolerances(mut self, eps_subgradient: f64, eps_step: f64) -> Self {
        self.eps_subgradient = eps_subgradient;
        self.eps_step = eps_step;
        self
    }

    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }
        if !self.initial_step.is_finite() || self.initial_step <= 0.0 {
            return Err(ConfigError::BadInitialStep(self.initial_step));
        }
        match self.step_rule {
            StepSizeRule::Geometric { power } => {
                if !(power > 0.0 && power < 1.0) {
                    return Err(ConfigError::BadPower(power));
                }
            }
            StepSizeRule::Adaptive { rho, .. } => {
                if !rho.is_finite() || rho <= 0.0 {
                    return Err(ConfigError::BadRho(rho));
                }
            }
        }
        if !self.eps_subgradient.is_finite() || self.eps_subgradient <= 0.0 {
            return Err(ConfigError::BadTolerance {
                name: "eps_subgradient",
                value: self.eps_subgradient,
            });
        }
        if !self.eps_step.is_finite() || self.eps_step <= 0.0 {
            return Err(ConfigError::BadTolerance {
                name: "eps_step",
                value: self.eps_step,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SubgradConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert!((config.initial_step - 1.0).abs() < 1e-15);
        assert_eq!(config.unimproved_iter_max, 7);
        assert!((config.eps_subgradient - 1e-3).abs() < 1e-15);
        assert!((config.eps_step - 1e-6).abs() < 1e-15);
        assert!(config.record_trace);
        assert!(config.seed.is_none());
        assert_eq!(
            config.step_rule,
            StepSizeRule::Adaptive {
                rho: 2.0,
                anchor: TargetAnchor::FirstIterate
            }
        );
    }

    #[test]
    fn test_builder_chain() {
        let config = SubgradConfig::default()
            .with_max_iterations(200)
            .with_step_rule(StepSizeRule::Geometric { power: 0.8 })
            .with_initial_step(2.0)
            .with_unimproved_iter_max(5)
            .with_tolerances(1e-4, 1e-8)
            .with_trace(false)
            .with_seed(7);

        assert_eq!(config.max_iterations, 200);
        assert_eq!(config.step_rule, StepSizeRule::Geometric { power: 0.8 });
        assert!((config.initial_step - 2.0).abs() < 1e-15);
        assert_eq!(config.unimproved_iter_max, 5);
        assert!(!config.record_trace);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_ok() {
        assert!(SubgradConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = SubgradConfig::default().with_max_iterations(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxIterations));
    }

    #[test]
    fn test_validate_bad_initial_step() {
        for a0 in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = SubgradConfig::default().with_initial_step(a0);
            assert!(config.validate().is_err(), "expected rejection of {a0}");
        }
    }

    #[test]
    fn test_validate_bad_power() {
        for power in [0.0, 1.0, 1.5, -0.5, f64::NAN] {
            let config =
                SubgradConfig::default().with_step_rule(StepSizeRule::Geometric { power });
            assert!(config.validate().is_err(), "expected rejection of {power}");
        }
    }

    #[test]
    fn test_validate_bad_rho() {
        let config = SubgradConfig::default().with_step_rule(StepSizeRule::Adaptive {
            rho: 0.0,
            anchor: TargetAnchor::FirstIterate,
        });
        assert_eq!(config.validate(), Err(ConfigError::BadRho(0.0)));
    }

    #[test]
    fn test_validate_bad_tolerances() {
        let config = SubgradConfig::default().with_tolerances(0.0, 1e-6);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadTolerance {
                name: "eps_subgradient",
                ..
            })
        ));

        let config = SubgradConfig::default().with_tolerances(1e-3, -1e-6);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadTolerance {
                name: "eps_step",
                ..
            })
        ));
    }

    #[test]
    fn test_step_rule_from_name() {
        assert_eq!(
            "geometric".parse::<StepSizeRule>(),
            Ok(StepSizeRule::Geometric { power: 0.9 })
        );
        assert_eq!(
            "adaptive".parse::<StepSizeRule>(),
            Ok(StepSizeRule::Adaptive {
                rho: 2.0,
                anchor: TargetAnchor::FirstIterate
            })
        );
    }

    #[test]
    fn test_step_rule_unknown_name() {
        let err = "polyak".parse::<StepSizeRule>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownStepSizeMethod("polyak".into()));

        assert!(SubgradConfig::default()
            .with_step_rule_name("newton")
            .is_err());
    }
}
