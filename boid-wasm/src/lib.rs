//! JavaScript bindings.
//!
//! Two unrelated agent types are exposed: [`Walker`], a bare position that
//! steps diagonally, and [`FlockHandle`], which drives the full flocking
//! simulation. A host renders from `positions()`/`headings()`; nothing here
//! draws.

use boid_core::{FlockSimulation, Positioned, SimulationConfig, Vector2D};
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_log {
    ($($t:tt)*) => (log::debug!($($t)*))
}

/// Position-only agent. `update` moves it by (1, 1); it has no flocking rules.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walker {
    position: Vector2D,
}

#[wasm_bindgen]
impl Walker {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f32, y: f32) -> Walker {
        Walker {
            position: Vector2D::new(x, y),
        }
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn update(&mut self) {
        self.position += Vector2D::new(1.0, 1.0);
    }
}

impl Positioned for Walker {
    fn position(&self) -> Vector2D {
        self.position
    }
}

#[wasm_bindgen]
pub struct FlockHandle {
    sim: FlockSimulation,
}

#[wasm_bindgen]
impl FlockHandle {
    /// Random flock of `count` boids in a `width` x `height` world with the
    /// reference rule parameters.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, count: usize, width: f32, height: f32) -> Result<FlockHandle, JsValue> {
        let config = SimulationConfig::with_world(width, height);
        let sim = FlockSimulation::with_random_flock(config, count, u64::from(seed))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        console_log!("Initializing boid simulation with {} boids", count);
        Ok(FlockHandle { sim })
    }

    pub fn step(&mut self) {
        self.sim.step();
    }

    pub fn len(&self) -> usize {
        self.sim.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sim.is_empty()
    }

    pub fn steps(&self) -> f64 {
        self.sim.steps() as f64
    }

    /// Interleaved `x, y` pairs in flock order.
    pub fn positions(&self) -> Vec<f32> {
        self.sim
            .boids()
            .iter()
            .flat_map(|boid| {
                let p = boid.position();
                [p.x, p.y]
            })
            .collect()
    }

    /// Display heading of each boid in radians.
    pub fn headings(&self) -> Vec<f32> {
        self.sim
            .boids()
            .iter()
            .map(|boid| boid.velocity.heading())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walker_moves_diagonally() {
        let mut walker = Walker::new(2.0, 3.0);
        walker.update();
        walker.update();
        assert_eq!((walker.x(), walker.y()), (4.0, 5.0));
    }

    #[test]
    fn test_walker_and_boid_share_position_view() {
        fn xs(items: &[&dyn Positioned]) -> Vec<f32> {
            items.iter().map(|item| item.position().x).collect()
        }

        let walker = Walker::new(1.0, 0.0);
        let boid = boid_core::Boid::at(7.0, 0.0);
        assert_eq!(xs(&[&walker, &boid]), vec![1.0, 7.0]);
    }
}
