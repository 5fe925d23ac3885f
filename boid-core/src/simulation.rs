use alloc::vec::Vec;

#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use rand_chacha::ChaCha8Rng;

use crate::boid::Boid;
use crate::boundary::{BoundaryPolicy, ReflectingBounds};
use crate::config::{ConfigError, SimulationConfig};

/// Upper bound on each initial velocity component for random flocks.
pub const DEFAULT_INITIAL_SPEED: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    /// Constructed, never stepped.
    Idle,
    /// At least one step has run.
    Running,
}

/// A fixed population of boids advanced one tick at a time.
///
/// Every step is two-phase: all next states are computed from the flock as it
/// stood at the start of the step, then committed together, then the boundary
/// policy runs on each boid. No boid ever sees a neighbor that has already
/// moved in the same step, so the result does not depend on slot order.
#[derive(Debug, Clone)]
pub struct FlockSimulation<B = ReflectingBounds> {
    config: SimulationConfig,
    boundary: B,
    boids: Vec<Boid>,
    next: Vec<Boid>,
    steps: u64,
}

impl FlockSimulation<ReflectingBounds> {
    pub fn new(config: SimulationConfig, initial_boids: Vec<Boid>) -> Result<Self, ConfigError> {
        let boundary = ReflectingBounds::new(config.world_width, config.world_height);
        Self::with_boundary(config, initial_boids, boundary)
    }

    /// `count` boids placed by a generator seeded with `seed`; the same seed
    /// always yields the same flock.
    #[cfg(feature = "std")]
    pub fn with_random_flock(
        config: SimulationConfig,
        count: usize,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_random_flock_and_speed(config, count, seed, DEFAULT_INITIAL_SPEED)
    }

    #[cfg(feature = "std")]
    pub fn with_random_flock_and_speed(
        config: SimulationConfig,
        count: usize,
        seed: u64,
        initial_speed: f32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if !initial_speed.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "initial_speed",
                value: initial_speed,
            });
        }
        if initial_speed < 0.0 {
            return Err(ConfigError::Negative {
                field: "initial_speed",
                value: initial_speed,
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let boids = (0..count)
            .map(|_| Boid::random(&mut rng, config.world_width, config.world_height, initial_speed))
            .collect();
        log::debug!("Seeded {} boids with seed {}", count, seed);
        Self::new(config, boids)
    }
}

impl<B: BoundaryPolicy> FlockSimulation<B> {
    pub fn with_boundary(
        config: SimulationConfig,
        initial_boids: Vec<Boid>,
        boundary: B,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if let Some(index) = initial_boids.iter().position(|boid| !boid.is_finite()) {
            return Err(ConfigError::NonFiniteBoid { index });
        }

        log::debug!(
            "Flock simulation with {} boids, config {:?}",
            initial_boids.len(),
            config
        );

        let next = Vec::with_capacity(initial_boids.len());
        Ok(Self {
            config,
            boundary,
            boids: initial_boids,
            next,
            steps: 0,
        })
    }

    /// Advances the whole flock by exactly one tick.
    pub fn step(&mut self) {
        let config = &self.config;
        let snapshot: &[Boid] = &self.boids;

        self.next.clear();
        self.next.extend(snapshot.iter().map(|boid| {
            let steering = boid.steering(snapshot, config);
            boid.advance(&steering, config.max_speed)
        }));

        core::mem::swap(&mut self.boids, &mut self.next);

        for boid in self.boids.iter_mut() {
            self.boundary.apply(boid);
        }

        self.steps += 1;
        log::trace!("Step {} complete for {} boids", self.steps, self.boids.len());
    }

    /// Runs `count` consecutive steps.
    pub fn run(&mut self, count: u64) {
        for _ in 0..count {
            self.step();
        }
    }

    /// Read-only view of the flock in insertion order.
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn boundary(&self) -> &B {
        &self.boundary
    }

    /// Number of completed steps.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn state(&self) -> SimulationState {
        if self.steps == 0 {
            SimulationState::Idle
        } else {
            SimulationState::Running
        }
    }
}
