#[cfg(feature = "std")]
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::vector::Vector2D;

/// Anything a host can place on screen.
pub trait Positioned {
    fn position(&self) -> Vector2D;
}

/// A single boid entity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Boid {
    pub position: Vector2D,
    pub velocity: Vector2D,
}

/// The three rule contributions computed for one boid in one step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Steering {
    pub separation: Vector2D,
    pub alignment: Vector2D,
    pub cohesion: Vector2D,
}

impl Steering {
    pub fn total(&self) -> Vector2D {
        self.separation + self.alignment + self.cohesion
    }
}

impl Boid {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Self { position, velocity }
    }

    /// A boid at rest at `(x, y)`.
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(Vector2D::new(x, y), Vector2D::zero())
    }

    /// Uniform position inside the world and each velocity component in
    /// `[-max_component, max_component)`.
    ///
    /// # Panics
    ///
    /// `width` and `height` must be finite and greater than zero, and
    /// `max_component` must be finite; `gen_range` panics on an empty or
    /// non-finite range. A validated [`SimulationConfig`] satisfies this.
    #[cfg(feature = "std")]
    pub fn random<R: Rng>(
        rng: &mut R,
        width: f32,
        height: f32,
        max_component: f32,
    ) -> Self {
        let position = Vector2D::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
        let velocity = if max_component > 0.0 {
            Vector2D::new(
                rng.gen_range(-max_component..max_component),
                rng.gen_range(-max_component..max_component),
            )
        } else {
            Vector2D::zero()
        };
        Self::new(position, velocity)
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    /// Rule contributions against `flock`, which may include `self`.
    pub fn steering(&self, flock: &[Boid], config: &SimulationConfig) -> Steering {
        Steering {
            separation: behavior::separation(self, flock.iter(), config.separation_radius),
            alignment: behavior::alignment(
                self,
                flock.iter(),
                config.alignment_radius,
                config.alignment_weight,
            ),
            cohesion: behavior::cohesion(
                self,
                flock.iter(),
                config.cohesion_radius,
                config.cohesion_weight,
            ),
        }
    }

    /// Next state from the current one and precomputed steering. Reads no
    /// other boid.
    pub fn advance(&self, steering: &Steering, max_speed: f32) -> Boid {
        let velocity = (self.velocity + steering.total()).limit(max_speed);
        Boid {
            position: self.position + velocity,
            velocity,
        }
    }
}

impl Positioned for Boid {
    fn position(&self) -> Vector2D {
        self.position
    }
}

/// Helper functions for boid behavior
///
/// A neighbor is any boid at distance `d` with `0 < d < radius`. Coincident
/// boids, the boid itself included, never count.
pub mod behavior {
    use super::*;

    #[inline]
    fn within(distance: f32, radius: f32) -> bool {
        distance > 0.0 && distance < radius
    }

    /// Average of `(self - other) / d` over close neighbors, so nearer
    /// neighbors push harder.
    pub fn separation<'a, I>(boid: &Boid, others: I, desired_separation: f32) -> Vector2D
    where
        I: Iterator<Item = &'a Boid>,
    {
        let mut steering = Vector2D::zero();
        let mut count = 0;

        for other in others {
            let distance = boid.position.distance(&other.position);
            if within(distance, desired_separation) {
                steering += (boid.position - other.position) / distance;
                count += 1;
            }
        }

        if count > 0 {
            steering = steering / count as f32;
        }
        steering
    }

    pub fn alignment<'a, I>(
        boid: &Boid,
        others: I,
        neighbor_distance: f32,
        weight: f32,
    ) -> Vector2D
    where
        I: Iterator<Item = &'a Boid>,
    {
        let mut sum = Vector2D::zero();
        let mut count = 0;

        for other in others {
            let distance = boid.position.distance(&other.position);
            if within(distance, neighbor_distance) {
                sum += other.velocity;
                count += 1;
            }
        }

        if count > 0 {
            (sum / count as f32 - boid.velocity) * weight
        } else {
            Vector2D::zero()
        }
    }

    pub fn cohesion<'a, I>(
        boid: &Boid,
        others: I,
        neighbor_distance: f32,
        weight: f32,
    ) -> Vector2D
    where
        I: Iterator<Item = &'a Boid>,
    {
        let mut sum = Vector2D::zero();
        let mut count = 0;

        for other in others {
            let distance = boid.position.distance(&other.position);
            if within(distance, neighbor_distance) {
                sum += other.position;
                count += 1;
            }
        }

        if count > 0 {
            (sum / count as f32 - boid.position) * weight
        } else {
            Vector2D::zero()
        }
    }
}
