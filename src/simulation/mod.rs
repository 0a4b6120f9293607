//! Simulation systems for the map: van motion and pointer hover.
//!
//! The simulation is frame-driven. Each frame reads one real-time delta,
//! clamps it, and pushes every van and every route through exactly one
//! update before anything is presented.

use bevy::prelude::*;

pub mod fleet;
pub mod hover;
pub mod motion;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationConfig>()
            .configure_sets(
                Update,
                (MapSet::Input, MapSet::Simulate, MapSet::Present).chain(),
            )
            .add_plugins(fleet::FleetPlugin)
            .add_plugins(hover::HoverPlugin);
    }
}

/// Frame phases shared by the simulation and render plugins.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapSet {
    /// Pointer sampling.
    Input,
    /// Van state machines and hover targets.
    Simulate,
    /// Style transitions and mesh updates.
    Present,
}

/// Configuration for the simulation.
#[derive(Resource)]
pub struct SimulationConfig {
    /// Longest step a single frame may take, in seconds.
    pub max_frame_dt: f32,
    /// Seed for stop durations and speed jitter.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_frame_dt: 0.1,
            seed: 99999,
        }
    }
}

/// Turns absolute clock readings into clamped frame deltas.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// Delta since the previous reading, clamped to `[0, max_dt]`. The first
    /// reading after construction yields 0.
    pub fn tick(&mut self, now: f64, max_dt: f32) -> f32 {
        let dt = self.last.map_or(0.0, |last| (now - last) as f32);
        self.last = Some(now);
        if dt.is_finite() {
            dt.clamp(0.0, max_dt)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(12.5, 0.1), 0.0);
        assert!((clock.tick(12.516, 0.1) - 0.016).abs() < 1e-5);
    }

    #[test]
    fn long_gaps_are_clamped() {
        let mut clock = FrameClock::default();
        clock.tick(1.0, 0.1);
        // Window was hidden for half a minute
        assert_eq!(clock.tick(31.0, 0.1), 0.1);
        // Clock stepping backwards is a zero frame
        assert_eq!(clock.tick(30.0, 0.1), 0.0);
        assert_eq!(clock.tick(30.0, 0.1), 0.0);
    }
}
