//! Van fleet: owns every van's motion state while the map is animated.
//!
//! The fleet is built the first time the map enters
//! [`MotionMode::Animated`]. Leaving that mode despawns the van entities
//! and stops the frame loop, but every van keeps its place on its route so
//! that switching back resumes where it left off.

use bevy::prelude::*;
use bevy::sprite::AlphaMode2d;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f32::consts::TAU;

use super::motion::{update_indicator, IndicatorState};
use super::{FrameClock, MapSet, SimulationConfig};
use crate::camera::MapViewport;
use crate::catalog::RouteCatalog;
use crate::game_state::MotionMode;
use crate::render::{markers, MapRenderConfig};

pub struct FleetPlugin;

impl Plugin for FleetPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(MotionMode::Animated), mount_fleet)
            .add_systems(OnExit(MotionMode::Animated), dismount_fleet)
            .add_systems(
                Update,
                (
                    advance_fleet.in_set(MapSet::Simulate),
                    sync_indicator_visuals.in_set(MapSet::Present),
                )
                    .run_if(in_state(MotionMode::Animated))
                    .run_if(resource_exists::<IndicatorFleet>),
            );
    }
}

/// Marks the entity drawing one van.
#[derive(Component, Debug, Clone, Copy)]
pub struct IndicatorVisual {
    /// Index into the fleet's state array.
    pub index: usize,
}

/// Scene-lifetime context for the animated map.
#[derive(Resource)]
pub struct IndicatorFleet {
    states: Vec<IndicatorState>,
    /// Parallel to `states`. `None` for vans that are never drawn.
    visuals: Vec<Option<Entity>>,
    clock: FrameClock,
    rng: StdRng,
}

impl IndicatorFleet {
    /// Build one state per catalog van. Vans whose route is missing keep
    /// `route: None` and are skipped every frame.
    pub fn from_catalog(catalog: &RouteCatalog, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let states: Vec<IndicatorState> = catalog
            .indicators()
            .iter()
            .map(|def| {
                let route_index = catalog.route_index(def.route_id);
                let route = route_index.and_then(|index| catalog.route(index));
                let (multiplier, stops) = route
                    .map(|r| (r.speed_multiplier, r.stop_nodes.as_slice()))
                    .unwrap_or((1.0, &[][..]));

                let mut state = IndicatorState::new(
                    def.id,
                    def.route_id,
                    def.base_speed,
                    multiplier,
                    stops,
                    def.start_offset,
                    rng.gen_range(0.0..TAU),
                );
                state.route = route_index;
                state.size = def.size;
                state.opacity = def.opacity;
                state
            })
            .collect();

        Self {
            visuals: vec![None; states.len()],
            states,
            clock: FrameClock::default(),
            rng,
        }
    }

    #[cfg(test)]
    fn states(&self) -> &[IndicatorState] {
        &self.states
    }

    /// Advance every van with a resolvable route by `dt` seconds.
    pub fn step(&mut self, catalog: &RouteCatalog, dt: f32) {
        for state in &mut self.states {
            let Some(route) = state.route.and_then(|index| catalog.route(index)) else {
                continue;
            };
            update_indicator(state, &route.path, dt, &mut self.rng);
        }
    }

    /// Forget the drawn entities and restart the frame clock, leaving every
    /// van where it is. Returns the entities to despawn.
    fn detach_visuals(&mut self) -> Vec<Entity> {
        self.clock = FrameClock::default();
        self.visuals.iter_mut().filter_map(Option::take).collect()
    }
}

/// Vans sit above route strokes and the glow; bigger vans above smaller ones.
const INDICATOR_Z: f32 = 3.0;

fn mount_fleet(
    mut commands: Commands,
    fleet: Option<ResMut<IndicatorFleet>>,
    catalog: Res<RouteCatalog>,
    config: Res<SimulationConfig>,
    render_config: Res<MapRenderConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let mesh = meshes.add(markers::indicator_mesh(
        render_config.indicator_length,
        render_config.indicator_width,
    ));

    match fleet {
        Some(mut fleet) => {
            spawn_visuals(&mut commands, &mut fleet, &mesh, &render_config, &mut materials);
            info!(
                "Resumed fleet: {} of {} indicators drawn",
                fleet.visuals.iter().flatten().count(),
                fleet.states.len()
            );
        }
        None => {
            let mut fleet = IndicatorFleet::from_catalog(&catalog, config.seed);
            spawn_visuals(&mut commands, &mut fleet, &mesh, &render_config, &mut materials);
            info!(
                "Mounted fleet: {} of {} indicators drawn",
                fleet.visuals.iter().flatten().count(),
                fleet.states.len()
            );
            commands.insert_resource(fleet);
        }
    }
}

fn spawn_visuals(
    commands: &mut Commands,
    fleet: &mut IndicatorFleet,
    mesh: &Handle<Mesh>,
    render_config: &MapRenderConfig,
    materials: &mut Assets<ColorMaterial>,
) {
    for (index, state) in fleet.states.iter().enumerate() {
        if state.route.is_none() {
            debug!(
                "Indicator '{}' has no route '{}', not drawing it",
                state.id, state.route_id
            );
            continue;
        }

        // Starts invisible; the first synced frame sets the real opacity.
        let material = materials.add(ColorMaterial {
            color: render_config.indicator_color.with_alpha(0.0),
            alpha_mode: AlphaMode2d::Blend,
            ..default()
        });

        let entity = commands
            .spawn((
                IndicatorVisual { index },
                Mesh2d(mesh.clone()),
                MeshMaterial2d(material),
                Transform::from_xyz(0.0, 0.0, INDICATOR_Z + state.size * 0.01),
            ))
            .id();
        fleet.visuals[index] = Some(entity);
    }
}

fn dismount_fleet(mut commands: Commands, fleet: Option<ResMut<IndicatorFleet>>) {
    let Some(mut fleet) = fleet else {
        return;
    };

    let entities = fleet.detach_visuals();
    for entity in &entities {
        commands.entity(*entity).despawn();
    }
    info!("Dismounted fleet: {} indicators hidden", entities.len());
}

fn advance_fleet(
    time: Res<Time<Real>>,
    config: Res<SimulationConfig>,
    catalog: Res<RouteCatalog>,
    mut fleet: ResMut<IndicatorFleet>,
) {
    let dt = fleet
        .clock
        .tick(time.elapsed_secs_f64(), config.max_frame_dt);
    fleet.step(&catalog, dt);
}

fn sync_indicator_visuals(
    fleet: Res<IndicatorFleet>,
    viewport: Res<MapViewport>,
    mut visuals: Query<(&IndicatorVisual, &mut Transform, &MeshMaterial2d<ColorMaterial>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (visual, mut transform, material) in &mut visuals {
        let Some(state) = fleet.states.get(visual.index) else {
            continue;
        };

        let world = viewport.logical_to_world(state.position);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
        transform.rotation = MapViewport::heading_to_rotation(state.angle);

        if let Some(material) = materials.get_mut(&material.0) {
            material.color.set_alpha(state.visible_opacity());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{indicators, routes, IndicatorDef};
    use crate::simulation::motion::MotionState;

    fn shipped_catalog() -> RouteCatalog {
        RouteCatalog::build(routes::ROUTE_DEFS, indicators::INDICATOR_DEFS).0
    }

    #[test]
    fn fleet_mirrors_catalog() {
        let catalog = shipped_catalog();
        let fleet = IndicatorFleet::from_catalog(&catalog, 1);

        assert_eq!(fleet.states().len(), catalog.indicators().len());
        for (state, def) in fleet.states().iter().zip(catalog.indicators()) {
            assert_eq!(state.id, def.id);
            assert_eq!(state.progress, def.start_offset);
            let route = state.route.and_then(|i| catalog.route(i)).unwrap();
            assert_eq!(route.id, def.route_id);
            assert_eq!(state.speed_multiplier, route.speed_multiplier);
            assert_eq!(state.stop_nodes, route.stop_nodes);
        }
    }

    #[test]
    fn vans_on_unknown_routes_are_skipped() {
        let lost = [IndicatorDef {
            id: "lost",
            route_id: "nowhere",
            base_speed: 30.0,
            size: 3.0,
            opacity: 1.0,
            start_offset: 0.3,
        }];
        let (catalog, _) = RouteCatalog::build(routes::ROUTE_DEFS, &lost);
        let mut fleet = IndicatorFleet::from_catalog(&catalog, 1);

        for _ in 0..100 {
            fleet.step(&catalog, 0.1);
        }
        assert_eq!(fleet.states()[0].route, None);
        assert_eq!(fleet.states()[0].progress, 0.3);
    }

    #[test]
    fn every_van_moves() {
        let catalog = shipped_catalog();
        let mut fleet = IndicatorFleet::from_catalog(&catalog, 5);
        let before: Vec<f32> = fleet.states().iter().map(|s| s.progress).collect();

        // Long enough that even a van parked at a stop drives off again.
        for _ in 0..120 {
            fleet.step(&catalog, 0.1);
        }
        for (state, start) in fleet.states().iter().zip(before) {
            assert_ne!(state.progress, start, "{} never moved", state.id);
            assert!((0.0..1.0).contains(&state.progress));
        }
    }

    #[test]
    fn detaching_visuals_keeps_vans_in_place() {
        let catalog = shipped_catalog();
        let mut fleet = IndicatorFleet::from_catalog(&catalog, 8);
        fleet.visuals[0] = Some(Entity::from_raw(10));
        fleet.visuals[3] = Some(Entity::from_raw(13));
        assert_eq!(fleet.clock.tick(1.0, 0.1), 0.0);
        for _ in 0..50 {
            fleet.step(&catalog, 0.1);
        }
        let before: Vec<(f32, MotionState)> = fleet
            .states()
            .iter()
            .map(|s| (s.progress, s.motion_state))
            .collect();

        let detached = fleet.detach_visuals();

        assert_eq!(detached, vec![Entity::from_raw(10), Entity::from_raw(13)]);
        assert!(fleet.visuals.iter().all(Option::is_none));
        assert_eq!(fleet.visuals.len(), fleet.states().len());
        let after: Vec<(f32, MotionState)> = fleet
            .states()
            .iter()
            .map(|s| (s.progress, s.motion_state))
            .collect();
        assert_eq!(after, before);
        // Coming back does not replay the time spent hidden
        assert_eq!(fleet.clock.tick(30.0, 0.1), 0.0);
    }

    #[test]
    fn seeded_fleets_replay_identically() {
        let catalog = shipped_catalog();
        let mut a = IndicatorFleet::from_catalog(&catalog, 42);
        let mut b = IndicatorFleet::from_catalog(&catalog, 42);

        for frame in 0..600 {
            let dt = if frame % 7 == 0 { 0.1 } else { 0.016 };
            a.step(&catalog, dt);
            b.step(&catalog, dt);
        }
        for (x, y) in a.states().iter().zip(b.states()) {
            assert_eq!(x.progress, y.progress);
            assert_eq!(x.motion_state, y.motion_state);
            assert_eq!(x.position, y.position);
        }
    }
}
