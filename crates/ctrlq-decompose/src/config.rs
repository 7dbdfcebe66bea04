//! Decomposition configuration.
//!
//! Every field has a default, so a configuration file only needs to list
//! the values it overrides:
//!
//! ```yaml
//! angle_tolerance: 1.0e-8
//! solver:
//!   max_iterations: 500
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DecomposeError, DecomposeResult};

/// Tolerances used by the decompositions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecomposeConfig {
    /// Rotations with an angle this close to zero are omitted.
    #[serde(default = "default_angle_tolerance")]
    pub angle_tolerance: f64,

    /// Omission threshold for the middle Z rotation of the ZYZ decomposition.
    #[serde(default = "default_middle_angle_tolerance")]
    pub middle_angle_tolerance: f64,

    /// Largest imaginary part accepted on the off-diagonal of the
    /// SU(2)-normalized matrix by the bisection decomposition.
    #[serde(default = "default_off_diagonal_tolerance")]
    pub off_diagonal_tolerance: f64,

    /// Root-finder settings for the bisection factor.
    #[serde(default)]
    pub solver: SolverConfig,
}

/// Settings of the bisection-factor root-finder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum number of accepted or rejected steps.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Residual norm at which the search has converged.
    #[serde(default = "default_residual_tolerance")]
    pub residual_tolerance: f64,

    /// Allowed distance of the factor's determinant from 1.
    #[serde(default = "default_su2_tolerance")]
    pub su2_tolerance: f64,

    /// Starting damping factor of the Levenberg-Marquardt iteration.
    #[serde(default = "default_initial_damping")]
    pub initial_damping: f64,

    /// Step of the central-difference Jacobian.
    #[serde(default = "default_jacobian_step")]
    pub jacobian_step: f64,
}

fn default_angle_tolerance() -> f64 {
    1e-8
}

fn default_middle_angle_tolerance() -> f64 {
    1e-6
}

fn default_off_diagonal_tolerance() -> f64 {
    1e-8
}

fn default_max_iterations() -> usize {
    200
}

fn default_residual_tolerance() -> f64 {
    1e-12
}

fn default_su2_tolerance() -> f64 {
    1e-8
}

fn default_initial_damping() -> f64 {
    1e-3
}

fn default_jacobian_step() -> f64 {
    1e-6
}

impl Default for DecomposeConfig {
    fn default() -> Self {
        Self {
            angle_tolerance: default_angle_tolerance(),
            middle_angle_tolerance: default_middle_angle_tolerance(),
            off_diagonal_tolerance: default_off_diagonal_tolerance(),
            solver: SolverConfig::default(),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            residual_tolerance: default_residual_tolerance(),
            su2_tolerance: default_su2_tolerance(),
            initial_damping: default_initial_damping(),
            jacobian_step: default_jacobian_step(),
        }
    }
}

impl DecomposeConfig {
    /// Parse and validate a YAML configuration.
    pub fn from_yaml_str(yaml: &str) -> DecomposeResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)
            .map_err(|e| DecomposeError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> DecomposeResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DecomposeError::InvalidConfiguration(format!("{}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Check that every tolerance is finite and positive.
    pub fn validate(&self) -> DecomposeResult<()> {
        let tolerances = [
            ("angle_tolerance", self.angle_tolerance),
            ("middle_angle_tolerance", self.middle_angle_tolerance),
            ("off_diagonal_tolerance", self.off_diagonal_tolerance),
            ("solver.residual_tolerance", self.solver.residual_tolerance),
            ("solver.su2_tolerance", self.solver.su2_tolerance),
            ("solver.initial_damping", self.solver.initial_damping),
            ("solver.jacobian_step", self.solver.jacobian_step),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value <= 0.0 {
                return Err(DecomposeError::InvalidConfiguration(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.solver.max_iterations == 0 {
            return Err(DecomposeError::InvalidConfiguration(
                "solver.max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DecomposeConfig::default();
        assert_eq!(config.angle_tolerance, 1e-8);
        assert_eq!(config.middle_angle_tolerance, 1e-6);
        assert_eq!(config.solver.max_iterations, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = DecomposeConfig::from_yaml_str(
            "middle_angle_tolerance: 1.0e-7\nsolver:\n  max_iterations: 50\n",
        )
        .unwrap();
        assert_eq!(config.middle_angle_tolerance, 1e-7);
        assert_eq!(config.angle_tolerance, 1e-8);
        assert_eq!(config.solver.max_iterations, 50);
        assert_eq!(config.solver.residual_tolerance, 1e-12);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = DecomposeConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, DecomposeConfig::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = DecomposeConfig::from_yaml_str("angle_tolerance: -1.0").unwrap_err();
        assert!(err.to_string().contains("angle_tolerance"));

        let err = DecomposeConfig::from_yaml_str("solver:\n  max_iterations: 0").unwrap_err();
        assert!(err.to_string().contains("max_iterations"));

        assert!(DecomposeConfig::from_yaml_str("angle_tolerance: [1, 2]").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = DecomposeConfig::from_file("/nonexistent/ctrlq.yaml").unwrap_err();
        assert!(matches!(err, DecomposeError::InvalidConfiguration(_)));
    }
}
