use std::fs;
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use boid_core::FlockSimulation;
use boid_shared::{FlockFrame, SimulationSettings};
use serde::Serialize;

/// Reads JSON settings from `path`. Missing fields take their reference values.
pub fn load_settings(path: &Path) -> Result<SimulationSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("Invalid settings in {}", path.display()))
}

pub fn parse_settings(text: &str) -> Result<SimulationSettings> {
    let settings = serde_json::from_str(text)?;
    Ok(settings)
}

/// Seeds a flock from settings, failing on any invalid parameter.
pub fn build_simulation(settings: &SimulationSettings) -> Result<FlockSimulation> {
    let sim = FlockSimulation::with_random_flock_and_speed(
        settings.simulation_config(),
        settings.boid_count,
        settings.seed,
        settings.initial_speed,
    )
    .context("Invalid simulation configuration")?;
    Ok(sim)
}

/// Aggregate numbers over the flock, logged at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlockStats {
    pub steps: u64,
    pub boids: usize,
    pub mean_speed: f32,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl FlockStats {
    pub fn of(sim: &FlockSimulation) -> Self {
        let boids = sim.boids();
        let mut stats = Self {
            steps: sim.steps(),
            boids: boids.len(),
            mean_speed: 0.0,
            min_x: f32::INFINITY,
            min_y: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            max_y: f32::NEG_INFINITY,
        };
        if boids.is_empty() {
            stats.min_x = 0.0;
            stats.min_y = 0.0;
            stats.max_x = 0.0;
            stats.max_y = 0.0;
            return stats;
        }

        let mut total_speed = 0.0;
        for boid in boids {
            total_speed += boid.velocity.length();
            stats.min_x = stats.min_x.min(boid.position.x);
            stats.min_y = stats.min_y.min(boid.position.y);
            stats.max_x = stats.max_x.max(boid.position.x);
            stats.max_y = stats.max_y.max(boid.position.y);
        }
        stats.mean_speed = total_speed / boids.len() as f32;
        stats
    }
}

/// Drives a simulation and streams frames as JSON lines.
pub struct Runner<W: Write> {
    sim: FlockSimulation,
    out: W,
    every: u64,
    frame_interval: Option<Duration>,
    frames_written: u64,
}

impl<W: Write> Runner<W> {
    pub fn new(sim: FlockSimulation, out: W) -> Self {
        Self {
            sim,
            out,
            every: 1,
            frame_interval: None,
            frames_written: 0,
        }
    }

    /// Emit only every `every`-th step. Zero disables frame output.
    pub fn every(mut self, every: u64) -> Self {
        self.every = every;
        self
    }

    /// Pace steps at `fps` per second. Zero runs unpaced.
    pub fn fps(mut self, fps: u32) -> Self {
        self.frame_interval = if fps == 0 {
            None
        } else {
            Some(Duration::from_secs_f64(1.0 / fps as f64))
        };
        self
    }

    pub fn simulation(&self) -> &FlockSimulation {
        &self.sim
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    fn write_frame(&mut self) -> Result<()> {
        let line = FlockFrame::capture(&self.sim)
            .to_json_line()
            .context("Failed to encode frame")?;
        writeln!(self.out, "{}", line).context("Failed to write frame")?;
        self.frames_written += 1;
        Ok(())
    }

    fn should_emit(&self) -> bool {
        self.every > 0 && self.sim.steps() % self.every == 0
    }

    /// Writes the starting frame, then runs `steps` steps.
    pub fn run(&mut self, steps: u64) -> Result<FlockStats> {
        log::info!(
            "Running {} steps for {} boids",
            steps,
            self.sim.len()
        );

        if self.should_emit() {
            self.write_frame()?;
        }

        let mut next_deadline = Instant::now();
        let mut last_report = Instant::now();
        for _ in 0..steps {
            self.sim.step();

            if self.should_emit() {
                self.write_frame()?;
            }

            if let Some(interval) = self.frame_interval {
                next_deadline += interval;
                let now = Instant::now();
                if next_deadline > now {
                    thread::sleep(next_deadline - now);
                } else {
                    next_deadline = now;
                }
            }

            if last_report.elapsed().as_secs() >= 1 {
                log::debug!("Step {}: {:?}", self.sim.steps(), FlockStats::of(&self.sim));
                last_report = Instant::now();
            }
        }

        self.out.flush().context("Failed to flush output")?;

        let stats = FlockStats::of(&self.sim);
        log::info!(
            "Finished after {} steps: mean speed {:.3}, extent ({:.1}, {:.1})..({:.1}, {:.1})",
            stats.steps,
            stats.mean_speed,
            stats.min_x,
            stats.min_y,
            stats.max_x,
            stats.max_y
        );
        Ok(stats)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
