//! Map rendering: background, route strokes, glow marker and their styling.
//!
//! Layers, back to front: background image (z 0), route strokes (z 1),
//! pointer glow (z 2), vans (z 3, spawned by the fleet).

use bevy::prelude::*;
use bevy::sprite::AlphaMode2d;

use crate::camera::MapViewport;
use crate::catalog::RouteCatalog;
use crate::simulation::hover::{HoverConfig, RouteHover};
use crate::simulation::MapSet;

pub mod markers;
pub mod route_mesh;

use markers::{GlowMarker, StrokeStyle};

const BACKGROUND_Z: f32 = 0.0;
const STROKE_Z: f32 = 1.0;
const GLOW_Z: f32 = 2.0;

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapRenderConfig>();
        let clear_color = app.world().resource::<MapRenderConfig>().clear_color;

        app.insert_resource(ClearColor(clear_color))
            .add_systems(
                Startup,
                (spawn_background, spawn_route_strokes, spawn_glow_marker),
            )
            .add_systems(
                Update,
                (apply_stroke_styles, fade_glow_marker).in_set(MapSet::Present),
            );
    }
}

/// Visual configuration for the map.
#[derive(Resource, Debug, Clone)]
pub struct MapRenderConfig {
    /// Shown wherever no background image covers the window.
    pub clear_color: Color,
    /// Asset path of the map image drawn beneath the routes.
    pub background_image: Option<String>,
    pub indicator_color: Color,
    pub indicator_length: f32,
    pub indicator_width: f32,
    /// Centre colour of the pointer glow, alpha included.
    pub glow_color: Color,
    pub glow_radius: f32,
    pub glow_segments: u32,
}

impl Default for MapRenderConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::srgb(0.882, 0.937, 1.0),
            background_image: None,
            indicator_color: Color::srgb(0.0, 0.604, 0.851),
            indicator_length: 13.5,
            indicator_width: 4.5,
            glow_color: Color::srgba(0.0, 0.659, 0.886, 0.04),
            glow_radius: 120.0,
            glow_segments: 48,
        }
    }
}

fn spawn_background(
    mut commands: Commands,
    config: Res<MapRenderConfig>,
    viewport: Res<MapViewport>,
    asset_server: Res<AssetServer>,
) {
    let Some(path) = config.background_image.as_deref() else {
        return;
    };

    commands.spawn((
        Sprite {
            image: asset_server.load(path.to_owned()),
            custom_size: Some(viewport.size()),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, BACKGROUND_Z),
    ));
    info!("Map background: {path}");
}

fn spawn_route_strokes(
    mut commands: Commands,
    catalog: Res<RouteCatalog>,
    viewport: Res<MapViewport>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let mut spawned = 0;

    for (index, route) in catalog.routes().iter().enumerate() {
        let Some(mesh) = route_mesh::stroke_mesh(
            &world_points(&viewport, route.path.points()),
            route.stroke_width,
        ) else {
            warn!("Route '{}' has no drawable length, skipping stroke", route.id);
            continue;
        };

        let style = StrokeStyle::new(route.stroke_width, route.base_opacity, route.stroke_color);
        let material = materials.add(ColorMaterial {
            color: style.material_color(),
            alpha_mode: AlphaMode2d::Blend,
            ..default()
        });

        commands.spawn((
            Mesh2d(meshes.add(mesh)),
            MeshMaterial2d(material),
            // Later routes draw on top, like document order.
            Transform::from_xyz(0.0, 0.0, STROKE_Z + index as f32 * 0.001),
            RouteHover::new(index),
            style,
        ));
        spawned += 1;
    }

    info!("Spawned {spawned} route strokes");
}

fn spawn_glow_marker(
    mut commands: Commands,
    config: Res<MapRenderConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let mesh = markers::glow_mesh(config.glow_radius, config.glow_color, config.glow_segments);
    // Vertex colours carry the gradient; the material only scales its alpha.
    let material = materials.add(ColorMaterial {
        color: Color::WHITE.with_alpha(0.0),
        alpha_mode: AlphaMode2d::Blend,
        ..default()
    });

    commands.spawn((
        Mesh2d(meshes.add(mesh)),
        MeshMaterial2d(material),
        Transform::from_xyz(0.0, 0.0, GLOW_Z),
        GlowMarker::default(),
    ));
}

fn world_points(viewport: &MapViewport, points: &[Vec2]) -> Vec<Vec2> {
    points
        .iter()
        .map(|&point| viewport.logical_to_world(point))
        .collect()
}

fn apply_stroke_styles(
    time: Res<Time<Real>>,
    hover_config: Res<HoverConfig>,
    catalog: Res<RouteCatalog>,
    viewport: Res<MapViewport>,
    mut strokes: Query<(
        &RouteHover,
        &mut StrokeStyle,
        &Mesh2d,
        &MeshMaterial2d<ColorMaterial>,
    )>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let blend = markers::transition_blend(time.delta_secs(), hover_config.stroke_transition);

    for (hover, mut style, mesh, material) in &mut strokes {
        let Some(route) = catalog.route(hover.route) else {
            continue;
        };
        let (width, opacity, color) = match hover.target {
            Some(target) => (target.width, target.opacity, target.color),
            None => (route.stroke_width, route.base_opacity, route.stroke_color),
        };
        if !style.approach(width, opacity, color, blend) {
            continue;
        }

        if let Some(material) = materials.get_mut(&material.0) {
            material.color = style.material_color();
        }

        if style.needs_rebuild() {
            let points = world_points(&viewport, route.path.points());
            if let (Some(rebuilt), Some(mesh)) = (
                route_mesh::stroke_mesh(&points, style.width),
                meshes.get_mut(&mesh.0),
            ) {
                *mesh = rebuilt;
                style.mesh_width = style.width;
            }
        }
    }
}

fn fade_glow_marker(
    time: Res<Time<Real>>,
    hover_config: Res<HoverConfig>,
    mut glows: Query<(&mut GlowMarker, &MeshMaterial2d<ColorMaterial>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let blend = markers::transition_blend(time.delta_secs(), hover_config.glow_transition);

    for (mut glow, material) in &mut glows {
        if !glow.approach(blend) {
            continue;
        }
        if let Some(material) = materials.get_mut(&material.0) {
            material.color.set_alpha(glow.opacity);
        }
    }
}
