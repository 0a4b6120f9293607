//! Pointer tracking and hover emphasis on route strokes.
//!
//! Runs in both motion modes: reduced motion stills the vans, not the map's
//! response to the pointer.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::motion::{distance, influence};
use super::MapSet;
use crate::camera::{MapCamera, MapViewport};
use crate::catalog::{PathGeometry, Route, RouteCatalog};
use crate::render::markers::GlowMarker;

pub struct HoverPlugin;

impl Plugin for HoverPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoverConfig>()
            .init_resource::<PointerState>()
            .add_systems(Update, track_pointer.in_set(MapSet::Input))
            .add_systems(
                Update,
                (update_route_hover, update_glow_marker).in_set(MapSet::Simulate),
            );
    }
}

#[derive(Resource, Debug, Clone)]
pub struct HoverConfig {
    /// Distance (logical units) at which influence reaches zero.
    pub radius: f32,
    /// Number of intervals the route is split into for distance sampling.
    /// Both endpoints are sampled, so `samples + 1` points in total.
    pub samples: usize,
    pub stroke_boost: f32,
    pub opacity_boost: f32,
    /// Seconds for stroke style changes to settle.
    pub stroke_transition: f32,
    /// Seconds for the glow to fade in or out.
    pub glow_transition: f32,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            radius: 120.0,
            samples: 15,
            stroke_boost: 1.5,
            opacity_boost: 0.5,
            stroke_transition: 0.2,
            glow_transition: 0.6,
        }
    }
}

/// Last known pointer position in logical map space. `None` once the cursor
/// leaves the window.
#[derive(Resource, Debug, Default)]
pub struct PointerState {
    pub position: Option<Vec2>,
}

/// Stroke style a route takes on while under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeOverride {
    pub width: f32,
    pub opacity: f32,
    pub color: Color,
}

/// Hover status of one route stroke entity.
#[derive(Component, Debug, Clone)]
pub struct RouteHover {
    /// Catalog index of the route drawn by this entity.
    pub route: usize,
    pub influence: f32,
    /// `None` means the base style.
    pub target: Option<StrokeOverride>,
}

impl RouteHover {
    pub fn new(route: usize) -> Self {
        Self {
            route,
            influence: 0.0,
            target: None,
        }
    }
}

/// Proximity of `pointer` to the route, in `[0, 1]`.
pub fn route_influence<G: PathGeometry + ?Sized>(
    path: &G,
    pointer: Vec2,
    config: &HoverConfig,
) -> f32 {
    let length = path.total_length();
    let samples = config.samples.max(1);
    let closest = (0..=samples)
        .map(|s| path.point_at_length(s as f32 / samples as f32 * length))
        .map(|point| distance(point, pointer))
        .fold(f32::INFINITY, f32::min);
    influence(closest, config.radius)
}

/// Emphasised style for a route at the given influence, or `None` to fall
/// back to the base style.
pub fn hover_override(route: &Route, influence: f32, config: &HoverConfig) -> Option<StrokeOverride> {
    (influence > 0.0).then(|| StrokeOverride {
        width: route.stroke_width + config.stroke_boost * influence,
        opacity: (route.base_opacity + config.opacity_boost * influence).min(1.0),
        color: route.reveal_color,
    })
}

fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MapCamera>>,
    viewport: Res<MapViewport>,
    mut pointer: ResMut<PointerState>,
) {
    let position = windows
        .get_single()
        .ok()
        .and_then(|window| window.cursor_position())
        .and_then(|cursor| {
            let (camera, camera_transform) = cameras.get_single().ok()?;
            camera.viewport_to_world_2d(camera_transform, cursor).ok()
        })
        .map(|world| viewport.world_to_logical(world));

    if pointer.position != position {
        pointer.position = position;
    }
}

fn update_route_hover(
    pointer: Res<PointerState>,
    config: Res<HoverConfig>,
    catalog: Res<RouteCatalog>,
    mut strokes: Query<&mut RouteHover>,
) {
    for mut hover in &mut strokes {
        let Some(route) = catalog.route(hover.route) else {
            continue;
        };
        let influence = pointer
            .position
            .map_or(0.0, |p| route_influence(&route.path, p, &config));

        if influence != hover.influence {
            hover.influence = influence;
            hover.target = hover_override(route, influence, &config);
        }
    }
}

fn update_glow_marker(
    pointer: Res<PointerState>,
    viewport: Res<MapViewport>,
    mut glows: Query<(&mut Transform, &mut GlowMarker)>,
) {
    for (mut transform, mut glow) in &mut glows {
        match pointer.position {
            Some(position) => {
                let world = viewport.logical_to_world(position);
                transform.translation.x = world.x;
                transform.translation.y = world.y;
                glow.target = 1.0;
            }
            None => glow.target = 0.0,
        }
    }
}
