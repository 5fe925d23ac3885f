use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the boid simulation, fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub max_speed: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub world_width: f32,
    pub world_height: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            separation_radius: 20.0,
            alignment_radius: 50.0,
            cohesion_radius: 70.0,
            max_speed: 2.0,
            alignment_weight: 0.02,
            cohesion_weight: 0.02,
            world_width: 800.0,
            world_height: 600.0,
        }
    }
}

impl SimulationConfig {
    /// Default rule parameters inside a world of the given size.
    pub fn with_world(world_width: f32, world_height: f32) -> Self {
        Self {
            world_width,
            world_height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("separation_radius", self.separation_radius),
            ("alignment_radius", self.alignment_radius),
            ("cohesion_radius", self.cohesion_radius),
            ("max_speed", self.max_speed),
            ("world_width", self.world_width),
            ("world_height", self.world_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        for (field, value) in [
            ("alignment_weight", self.alignment_weight),
            ("cohesion_weight", self.cohesion_weight),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        Ok(())
    }
}

/// Rejected simulation setup, reported at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositive { field: &'static str, value: f32 },
    NonFinite { field: &'static str, value: f32 },
    Negative { field: &'static str, value: f32 },
    /// An initial boid has a NaN or infinite position or velocity component.
    NonFiniteBoid { index: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be greater than zero (got {value})")
            }
            ConfigError::NonFinite { field, value } => {
                write!(f, "{field} must be a finite number (got {value})")
            }
            ConfigError::Negative { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            ConfigError::NonFiniteBoid { index } => {
                write!(f, "initial boid {index} has a non-finite position or velocity")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(SimulationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_radius() {
        let config = SimulationConfig {
            alignment_radius: 0.0,
            ..SimulationConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "alignment_radius",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_negative_max_speed() {
        let config = SimulationConfig {
            max_speed: -1.0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "max_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_finite_weight() {
        let config = SimulationConfig {
            cohesion_weight: f32::NAN,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "cohesion_weight",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_weight_is_allowed() {
        let config = SimulationConfig {
            cohesion_weight: -0.02,
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_error_message_names_field() {
        let err = ConfigError::NonPositive {
            field: "world_width",
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "world_width must be greater than zero (got 0)"
        );
    }
}
