#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;

use boid_core::{Boid, FlockSimulation, SimulationConfig};
use serde::{Deserialize, Serialize};

/// Host-side simulation settings, as read from a configuration file.
///
/// Every field is optional in the serialized form and falls back to the
/// reference value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub separation_radius: f32,
    pub alignment_radius: f32,
    pub cohesion_radius: f32,
    pub max_speed: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub world_width: f32,
    pub world_height: f32,
    pub boid_count: usize,
    pub seed: u64,
    /// Upper bound on each initial velocity component.
    pub initial_speed: f32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        let config = SimulationConfig::default();
        Self {
            separation_radius: config.separation_radius,
            alignment_radius: config.alignment_radius,
            cohesion_radius: config.cohesion_radius,
            max_speed: config.max_speed,
            alignment_weight: config.alignment_weight,
            cohesion_weight: config.cohesion_weight,
            world_width: config.world_width,
            world_height: config.world_height,
            boid_count: 21,
            seed: 42,
            initial_speed: boid_core::DEFAULT_INITIAL_SPEED,
        }
    }
}

impl SimulationSettings {
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            separation_radius: self.separation_radius,
            alignment_radius: self.alignment_radius,
            cohesion_radius: self.cohesion_radius,
            max_speed: self.max_speed,
            alignment_weight: self.alignment_weight,
            cohesion_weight: self.cohesion_weight,
            world_width: self.world_width,
            world_height: self.world_height,
        }
    }
}

/// One boid as a renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoidState {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Display heading in radians, `atan2(vy, vx)`.
    pub heading: f32,
}

impl From<&Boid> for BoidState {
    fn from(boid: &Boid) -> Self {
        Self {
            x: boid.position.x,
            y: boid.position.y,
            vx: boid.velocity.x,
            vy: boid.velocity.y,
            heading: boid.velocity.heading(),
        }
    }
}

/// Snapshot of the whole flock after `step` completed steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlockFrame {
    pub step: u64,
    pub boids: Vec<BoidState>,
}

impl FlockFrame {
    pub fn capture<B: boid_core::BoundaryPolicy>(sim: &FlockSimulation<B>) -> Self {
        Self {
            step: sim.steps(),
            boids: sim.boids().iter().map(BoidState::from).collect(),
        }
    }

    /// Single-line JSON encoding, suitable for newline-delimited streams.
    #[cfg(feature = "std")]
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
