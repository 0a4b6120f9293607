//! Per-frame motion engine for route indicators.
//!
//! Each van runs a four-phase cycle around the stop nodes of its route:
//! cruising → decelerating → stopped → accelerating → cruising. Everything
//! in here is pure over an [`IndicatorState`] and a [`PathGeometry`];
//! mirroring the result onto entities is the fleet's job.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::catalog::{PathGeometry, StopNodes};

/// Seconds to ease from full speed to a standstill.
pub const DECEL_DURATION: f32 = 2.5;
/// Seconds to ease from a standstill back to full speed.
pub const ACCEL_DURATION: f32 = 2.0;
/// Braking starts this far (in progress) before a stop node.
pub const DECEL_ZONE: f32 = 0.08;
pub const STOP_DURATIONS: [f32; 3] = [1.0, 1.5, 2.0];
/// Per-frame blend from the smoothed heading toward the path tangent.
pub const ANGLE_SMOOTHING: f32 = 0.12;
pub const JITTER_AMPLITUDE: f32 = 0.05;
pub const JITTER_FREQUENCY: f32 = 20.0;
/// Half-width of the tangent sampling window, in progress.
pub const TANGENT_EPSILON: f32 = 0.005;
pub const EDGE_FADE_ZONE: f32 = 0.05;

/// Sampled tangents shorter than this on both axes have no direction.
const DEGENERATE_DELTA: f32 = 0.01;
/// Slack so phases accumulated from f32 steps end on the expected frame.
const PHASE_EPSILON: f32 = 1e-5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MotionState {
    #[default]
    Cruising,
    Decelerating,
    Stopped,
    Accelerating,
}

impl MotionState {
    /// The one state reachable from `self`.
    pub fn next(self) -> Self {
        match self {
            MotionState::Cruising => MotionState::Decelerating,
            MotionState::Decelerating => MotionState::Stopped,
            MotionState::Stopped => MotionState::Accelerating,
            MotionState::Accelerating => MotionState::Cruising,
        }
    }
}

/// Mutable simulation record for one van.
#[derive(Clone, Debug)]
pub struct IndicatorState {
    pub id: String,
    pub route_id: String,
    /// Catalog index of the route, resolved once when the fleet is built.
    pub route: Option<usize>,
    /// Fraction of the route covered, in `[0, 1)`.
    pub progress: f32,
    pub base_speed: f32,
    pub speed_multiplier: f32,
    pub size: f32,
    pub opacity: f32,

    pub motion_state: MotionState,
    /// Progress through the current easing phase, in `[0, 1]`.
    pub state_progress: f32,

    pub stop_nodes: StopNodes,
    pub current_stop_index: usize,
    pub stop_duration: f32,
    pub stop_timer: f32,
    /// Progress wrapped while braking; the cursor restarts once the van
    /// leaves the stop it was braking for.
    pub wrapped_while_braking: bool,

    pub jitter_seed: f32,

    /// Logical map position, refreshed every update.
    pub position: Vec2,
    /// Smoothed heading in degrees (logical space, y down).
    pub angle: f32,
}

impl IndicatorState {
    pub fn new(
        id: impl Into<String>,
        route_id: impl Into<String>,
        base_speed: f32,
        speed_multiplier: f32,
        stop_nodes: &[f32],
        start_offset: f32,
        jitter_seed: f32,
    ) -> Self {
        Self {
            id: id.into(),
            route_id: route_id.into(),
            route: None,
            progress: start_offset,
            base_speed,
            speed_multiplier,
            size: 1.0,
            opacity: 1.0,
            motion_state: MotionState::Cruising,
            state_progress: 0.0,
            stop_nodes: stop_nodes.iter().copied().collect(),
            current_stop_index: 0,
            stop_duration: 0.0,
            stop_timer: 0.0,
            wrapped_while_braking: false,
            jitter_seed,
            position: Vec2::ZERO,
            angle: 0.0,
        }
    }

    /// Seconds per lap at a speed factor of 1.
    pub fn lap_time(&self) -> f32 {
        self.base_speed / self.speed_multiplier
    }

    /// Multiplier on the lap rate for the current phase.
    pub fn speed_factor(&self) -> f32 {
        match self.motion_state {
            MotionState::Cruising => {
                1.0 + JITTER_AMPLITUDE
                    * (self.jitter_seed + self.progress * JITTER_FREQUENCY).sin()
            }
            MotionState::Decelerating => deceleration_factor(self.state_progress),
            MotionState::Stopped => 0.0,
            MotionState::Accelerating => ease_in_cubic(self.state_progress),
        }
    }

    /// Opacity to draw with: base opacity faded near the route ends.
    pub fn visible_opacity(&self) -> f32 {
        self.opacity * edge_fade(self.progress)
    }

    fn next_stop(&self) -> Option<f32> {
        self.stop_nodes.get(self.current_stop_index).copied()
    }

    fn enter(&mut self, state: MotionState) {
        debug_assert_eq!(state, self.motion_state.next());
        self.motion_state = state;
        self.state_progress = 0.0;
    }

    fn skip_passed_stops(&mut self) {
        while self.next_stop().is_some_and(|stop| stop < self.progress) {
            self.current_stop_index += 1;
        }
    }

    fn approaching_stop(&self) -> bool {
        self.next_stop().is_some_and(|stop| {
            let remaining = stop - self.progress;
            remaining > 0.0 && remaining < DECEL_ZONE
        })
    }

    /// Move along the route. Returns `true` if the lap end was crossed.
    fn advance(&mut self, dt: f32) -> bool {
        self.progress += dt / self.lap_time() * self.speed_factor();
        if self.progress < 1.0 {
            return false;
        }
        self.progress = (self.progress - 1.0).rem_euclid(1.0);
        true
    }
}

/// Advance one van by `dt` seconds and refresh its position and heading.
///
/// `dt` is expected to be clamped by the caller; negative or non-finite
/// values are treated as zero.
pub fn update_indicator<G, R>(state: &mut IndicatorState, path: &G, dt: f32, rng: &mut R)
where
    G: PathGeometry + ?Sized,
    R: Rng,
{
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    match state.motion_state {
        MotionState::Cruising => {
            state.skip_passed_stops();
            if state.approaching_stop() {
                state.enter(MotionState::Decelerating);
            } else if state.advance(dt) {
                state.current_stop_index = 0;
            }
        }
        MotionState::Decelerating => {
            state.state_progress += dt / DECEL_DURATION;
            if state.advance(dt) {
                // The cursor still names the stop being served.
                state.wrapped_while_braking = true;
            }
            if phase_complete(state.state_progress) {
                state.enter(MotionState::Stopped);
                // No snapping: the van stays wherever braking left it.
                state.stop_duration = STOP_DURATIONS[rng.gen_range(0..STOP_DURATIONS.len())];
                state.stop_timer = 0.0;
            }
        }
        MotionState::Stopped => {
            state.stop_timer += dt;
            if state.stop_timer + PHASE_EPSILON >= state.stop_duration {
                state.enter(MotionState::Accelerating);
                state.current_stop_index = if state.wrapped_while_braking {
                    0
                } else {
                    (state.current_stop_index + 1).min(state.stop_nodes.len())
                };
                state.wrapped_while_braking = false;
            }
        }
        MotionState::Accelerating => {
            state.state_progress += dt / ACCEL_DURATION;
            if state.advance(dt) {
                state.current_stop_index = 0;
            }
            if phase_complete(state.state_progress) {
                state.enter(MotionState::Cruising);
                state.jitter_seed = rng.gen_range(0.0..TAU);
            }
        }
    }

    let length = path.total_length();
    state.position = path.point_at_length(state.progress * length);
    if let Some(raw) = raw_heading(path, state.progress) {
        state.angle = lerp_angle(state.angle, raw, ANGLE_SMOOTHING);
    }
}

fn phase_complete(phase: f32) -> bool {
    phase + PHASE_EPSILON >= 1.0
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn ease_in_cubic(t: f32) -> f32 {
    t.clamp(0.0, 1.0).powi(3)
}

/// Braking speed factor: 1 at the start of the phase, exactly 0 at the end.
pub fn deceleration_factor(phase: f32) -> f32 {
    1.0 - ease_out_cubic(phase)
}

/// Path tangent at `progress` in degrees, or `None` where the sampled
/// segment has no usable direction.
pub fn raw_heading<G: PathGeometry + ?Sized>(path: &G, progress: f32) -> Option<f32> {
    let length = path.total_length();
    if !(length > 0.0) {
        return None;
    }
    let before = path.point_at_length((progress - TANGENT_EPSILON).clamp(0.0, 1.0) * length);
    let after = path.point_at_length((progress + TANGENT_EPSILON).clamp(0.0, 1.0) * length);
    let delta = after - before;
    if delta.x.abs() < DEGENERATE_DELTA && delta.y.abs() < DEGENERATE_DELTA {
        return None;
    }
    Some(delta.y.atan2(delta.x).to_degrees())
}

/// Interpolate between headings the short way round.
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    let diff = (to - from + 180.0).rem_euclid(360.0) - 180.0;
    from + diff * t
}

pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Opacity multiplier ramping 0 → 1 over the first 5% of a route and back
/// to 0 over the last 5%.
pub fn edge_fade(progress: f32) -> f32 {
    if progress < EDGE_FADE_ZONE {
        (progress / EDGE_FADE_ZONE).clamp(0.0, 1.0)
    } else if progress > 1.0 - EDGE_FADE_ZONE {
        ((1.0 - progress) / EDGE_FADE_ZONE).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Smoothstep proximity score: 1 at distance 0, 0 at or beyond `radius`.
pub fn influence(dist: f32, radius: f32) -> f32 {
    if !(radius > 0.0) || !(dist < radius) {
        return 0.0;
    }
    let t = 1.0 - dist.max(0.0) / radius;
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RoutePath;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DT: f32 = 0.1;

    fn straight_route() -> RoutePath {
        RoutePath::from_points([Vec2::ZERO, Vec2::new(1000.0, 0.0)])
    }

    fn van(base_speed: f32, stops: &[f32], start: f32) -> IndicatorState {
        IndicatorState::new("van", "line", base_speed, 1.0, stops, start, 0.0)
    }

    #[test]
    fn edge_fade_boundaries() {
        assert!(edge_fade(0.0).abs() < 1e-5);
        assert!((edge_fade(0.025) - 0.5).abs() < 1e-4);
        assert!((edge_fade(0.05) - 1.0).abs() < 1e-5);
        assert_eq!(edge_fade(0.5), 1.0);
        assert!((edge_fade(0.95) - 1.0).abs() < 1e-5);
        assert!(edge_fade(1.0).abs() < 1e-5);
    }

    #[test]
    fn influence_boundaries() {
        assert_eq!(influence(0.0, 120.0), 1.0);
        assert_eq!(influence(120.0, 120.0), 0.0);
        assert_eq!(influence(130.0, 120.0), 0.0);
        assert!((influence(60.0, 120.0) - 0.5).abs() < 1e-6);
        assert_eq!(influence(10.0, 0.0), 0.0);
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn angle_lerp_takes_the_short_way() {
        let forward = lerp_angle(170.0, -170.0, ANGLE_SMOOTHING);
        assert!(forward > 170.0 && forward < 190.0, "went the long way: {forward}");
        assert!((forward - 172.4).abs() < 1e-3);

        let backward = lerp_angle(-170.0, 170.0, ANGLE_SMOOTHING);
        assert!((backward + 172.4).abs() < 1e-3);

        // Accumulated headings well past a full turn still go the short way
        assert!((lerp_angle(725.0, 0.0, 1.0) - 720.0).abs() < 1e-3);
    }

    #[test]
    fn deceleration_is_monotonic_and_ends_at_zero() {
        let mut previous = deceleration_factor(0.0);
        assert_eq!(previous, 1.0);
        for step in 1..=100 {
            let factor = deceleration_factor(step as f32 / 100.0);
            assert!(factor <= previous);
            previous = factor;
        }
        assert_eq!(deceleration_factor(1.0), 0.0);
        assert_eq!(deceleration_factor(1.02), 0.0);
    }

    #[test]
    fn heading_follows_logical_axes() {
        let down = RoutePath::from_points([Vec2::ZERO, Vec2::new(0.0, 500.0)]);
        assert!((raw_heading(&down, 0.5).unwrap() - 90.0).abs() < 1e-3);
        let left = RoutePath::from_points([Vec2::new(500.0, 0.0), Vec2::ZERO]);
        assert!((raw_heading(&left, 0.5).unwrap().abs() - 180.0).abs() < 1e-3);
    }

    #[test]
    fn full_stop_cycle() {
        let path = straight_route();
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = van(10.0, &[0.5], 0.4);
        let mut entered: Vec<(MotionState, u32)> = Vec::new();
        let mut stopped_at = None;

        for frame in 1..=200 {
            let before = state.motion_state;
            update_indicator(&mut state, &path, DT, &mut rng);
            if state.motion_state != before {
                if state.motion_state == MotionState::Decelerating {
                    let remaining = 0.5 - state.progress;
                    assert!(remaining > 0.0 && remaining < DECEL_ZONE);
                }
                if state.motion_state == MotionState::Stopped {
                    stopped_at = Some(state.progress);
                }
                entered.push((state.motion_state, frame));
            }
            if entered.len() == 4 {
                break;
            }
        }

        let states: Vec<MotionState> = entered.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            states,
            vec![
                MotionState::Decelerating,
                MotionState::Stopped,
                MotionState::Accelerating,
                MotionState::Cruising,
            ]
        );

        let seconds = |a: usize, b: usize| (entered[b].1 - entered[a].1) as f32 * DT;
        assert!(seconds(0, 1) <= DECEL_DURATION + 1e-3);
        let stopped_for = seconds(1, 2);
        assert!(
            STOP_DURATIONS.iter().any(|d| (d - stopped_for).abs() < 1e-3),
            "stopped for {stopped_for}s"
        );
        assert!(seconds(2, 3) <= ACCEL_DURATION + 1e-3);

        // Braking leaves the van short of the node; it is never snapped onto it
        let stopped_at = stopped_at.unwrap();
        assert!(stopped_at > 0.42 && stopped_at < 0.5, "stopped at {stopped_at}");
        assert_eq!(state.current_stop_index, 1);
    }

    #[test]
    fn stopped_van_does_not_move() {
        let path = straight_route();
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = van(10.0, &[0.5], 0.45);
        state.motion_state = MotionState::Stopped;
        state.stop_duration = 2.0;

        for _ in 0..5 {
            update_indicator(&mut state, &path, DT, &mut rng);
        }
        assert_eq!(state.motion_state, MotionState::Stopped);
        assert_eq!(state.progress, 0.45);
        assert!((state.stop_timer - 0.5).abs() < 1e-5);
    }

    #[test]
    fn wraparound_resets_stop_cursor() {
        let path = straight_route();
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = van(1.0, &[0.5], 0.98);
        state.current_stop_index = 1;
        // Puts the jitter sine at zero for this frame
        state.jitter_seed = -0.98 * JITTER_FREQUENCY;

        update_indicator(&mut state, &path, 0.05, &mut rng);

        assert!((state.progress - 0.03).abs() < 1e-3, "progress {}", state.progress);
        assert_eq!(state.current_stop_index, 0);
        assert_eq!(state.motion_state, MotionState::Cruising);
    }

    #[test]
    fn braking_across_the_lap_end_serves_the_first_stop_next() {
        let path = straight_route();
        let mut rng = StdRng::seed_from_u64(11);
        let mut state = van(4.0, &[0.3, 0.97], 0.9);
        state.current_stop_index = 1;

        let mut guard = 0;
        while state.motion_state != MotionState::Accelerating {
            update_indicator(&mut state, &path, DT, &mut rng);
            guard += 1;
            assert!(guard < 100, "never left the stop");
        }
        // Braking for 0.97 carried the van over the lap end
        assert!(state.progress < 0.1, "stopped at {}", state.progress);
        assert_eq!(state.current_stop_index, 0);
        assert!(!state.wrapped_while_braking);

        while state.motion_state != MotionState::Decelerating {
            update_indicator(&mut state, &path, DT, &mut rng);
            guard += 1;
            assert!(guard < 300, "never braked again");
        }
        let remaining = 0.3 - state.progress;
        assert!(remaining > 0.0 && remaining < DECEL_ZONE, "braked at {}", state.progress);
        assert_eq!(state.current_stop_index, 0);
    }

    #[test]
    fn passed_stops_are_skipped_in_one_frame() {
        let path = straight_route();
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = van(50.0, &[0.1, 0.2, 0.3, 0.9], 0.6);

        update_indicator(&mut state, &path, DT, &mut rng);

        assert_eq!(state.current_stop_index, 3);
        assert_eq!(state.motion_state, MotionState::Cruising);
        assert!(state.progress > 0.6);
    }

    #[test]
    fn random_frames_keep_invariants() {
        let path = straight_route();
        let mut rng = StdRng::seed_from_u64(42);
        let stops = [0.2, 0.5, 0.9];
        let mut states = vec![
            van(2.0, &stops, 0.0),
            van(5.0, &stops, 0.7),
            van(3.0, &[0.95], 0.5),
            van(1.5, &[], 0.3),
        ];
        let mut visited = [0usize; 4];

        for _ in 0..20_000 {
            let dt: f32 = rng.gen_range(0.0..0.1);
            for state in &mut states {
                let before = state.motion_state;
                let angle_before = state.angle;
                update_indicator(state, &path, dt, &mut rng);

                assert!((0.0..1.0).contains(&state.progress), "progress {}", state.progress);
                assert!(state.current_stop_index <= state.stop_nodes.len());
                assert!(state.angle.is_finite());
                assert!((state.angle - angle_before).abs() <= 180.0 * ANGLE_SMOOTHING + 1e-3);
                if state.motion_state != before {
                    assert_eq!(state.motion_state, before.next());
                }
                visited[state.motion_state as usize] += 1;
            }
        }

        assert!(visited.iter().all(|&n| n > 0), "visited {visited:?}");
    }

    #[test]
    fn zero_dt_is_a_no_op_for_progress() {
        let path = straight_route();
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = van(10.0, &[0.9], 0.3);

        update_indicator(&mut state, &path, 0.0, &mut rng);
        update_indicator(&mut state, &path, f32::NAN, &mut rng);

        assert_eq!(state.progress, 0.3);
        assert_eq!(state.motion_state, MotionState::Cruising);
        assert!((state.position.x - 300.0).abs() < 1e-2);
    }

    #[test]
    fn degenerate_path_holds_heading() {
        let point = RoutePath::from_points([Vec2::new(4.0, 2.0)]);
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = van(10.0, &[], 0.2);

        for _ in 0..10 {
            update_indicator(&mut state, &point, DT, &mut rng);
        }
        assert_eq!(state.position, Vec2::new(4.0, 2.0));
        assert_eq!(state.angle, 0.0);

        // Too short to give a direction: the previous heading is kept
        let flat = RoutePath::from_points([Vec2::ZERO, Vec2::new(0.001, 0.0)]);
        state.angle = 45.0;
        update_indicator(&mut state, &flat, DT, &mut rng);
        assert_eq!(state.angle, 45.0);
        assert_eq!(raw_heading(&flat, 0.5), None);
    }
}
