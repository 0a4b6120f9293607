//! Orthographic map camera and logical map coordinates.
//!
//! Route data lives in a fixed logical space (SVG convention, y down, origin
//! top-left). The camera centres that space on the world origin and scales
//! it to cover the window, cropping the overflowing axis.

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapViewport>()
            .add_systems(Startup, setup_camera);
    }
}

/// Marker for the camera the map is viewed through.
#[derive(Component)]
pub struct MapCamera;

/// Size of the logical map space.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub width: f32,
    pub height: f32,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            width: 1657.0,
            height: 1080.0,
        }
    }
}

impl MapViewport {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Logical map point to world space (y up, centred).
    pub fn logical_to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    pub fn world_to_logical(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x + self.width / 2.0, self.height / 2.0 - point.y)
    }

    /// Rotation for a heading given in logical degrees. Logical y points down,
    /// so a clockwise logical angle is clockwise on screen too.
    pub fn heading_to_rotation(degrees: f32) -> Quat {
        Quat::from_rotation_z(-degrees.to_radians())
    }
}

fn setup_camera(mut commands: Commands, viewport: Res<MapViewport>) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::AutoMax {
                max_width: viewport.width,
                max_height: viewport.height,
            },
            ..OrthographicProjection::default_2d()
        },
        MapCamera,
    ));

    info!(
        "Map camera covering {}x{} logical units",
        viewport.width, viewport.height
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_around_the_origin() {
        let viewport = MapViewport::default();

        assert_eq!(
            viewport.logical_to_world(Vec2::ZERO),
            Vec2::new(-828.5, 540.0)
        );
        assert_eq!(
            viewport.logical_to_world(viewport.size()),
            Vec2::new(828.5, -540.0)
        );
        assert_eq!(
            viewport.logical_to_world(viewport.size() / 2.0),
            Vec2::ZERO
        );
    }

    #[test]
    fn world_and_logical_are_inverse() {
        let viewport = MapViewport::default();
        for point in [
            Vec2::new(12.5, 900.0),
            Vec2::new(1600.0, -11.0),
            Vec2::new(-40.0, 1080.75),
        ] {
            let back = viewport.world_to_logical(viewport.logical_to_world(point));
            assert!(back.distance(point) < 1e-3);
        }
    }

    #[test]
    fn heading_turns_toward_screen_down() {
        // 90 logical degrees points down the map, which is -y in world space.
        let forward = MapViewport::heading_to_rotation(90.0) * Vec3::X;
        assert!(forward.x.abs() < 1e-6);
        assert!((forward.y + 1.0).abs() < 1e-6);

        let east = MapViewport::heading_to_rotation(0.0) * Vec3::X;
        assert!((east - Vec3::X).length() < 1e-6);
    }
}
