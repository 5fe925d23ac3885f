//! Flocking core: separation, alignment and cohesion over a fixed population
//! of 2-D agents, advanced one discrete step at a time.
//!
//! ```
//! use boid_core::{Boid, FlockSimulation, SimulationConfig, Vector2D};
//!
//! let boids = vec![
//!     Boid::new(Vector2D::new(100.0, 100.0), Vector2D::new(1.0, 0.0)),
//!     Boid::new(Vector2D::new(110.0, 100.0), Vector2D::new(0.0, 1.0)),
//! ];
//! let mut sim = FlockSimulation::new(SimulationConfig::default(), boids).unwrap();
//! sim.step();
//! assert_eq!(sim.boids().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod boid;
pub mod boundary;
pub mod config;
pub mod simulation;
pub mod vector;

pub use boid::{behavior, Boid, Positioned, Steering};
pub use boundary::{BoundaryPolicy, ReflectingBounds};
pub use config::{ConfigError, SimulationConfig};
pub use simulation::{FlockSimulation, SimulationState, DEFAULT_INITIAL_SPEED};
pub use vector::Vector2D;
