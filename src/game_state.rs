//! Motion mode management.
//!
//! The map either animates its vans or, under a reduced-motion preference,
//! holds still. The preference is read from the environment at startup and
//! can be flipped at runtime.

use bevy::prelude::*;

/// Environment variable carrying the reduced-motion preference.
pub const REDUCED_MOTION_ENV: &str = "LIVING_MAP_REDUCED_MOTION";

pub struct GameStatePlugin;

impl Plugin for GameStatePlugin {
    fn build(&self, app: &mut App) {
        let reduced = ReducedMotion::from_env();
        if reduced.0 {
            info!("Reduced motion requested, vans will not be animated");
        }

        app.insert_resource(reduced)
            .insert_state(reduced.mode())
            .add_systems(Update, (toggle_reduced_motion, sync_motion_mode).chain());
    }
}

/// Whether the van animation runs.
#[derive(States, Default, Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum MotionMode {
    /// Vans drive their routes.
    #[default]
    Animated,
    /// No vans; routes and hover feedback only.
    Reduced,
}

/// The user's reduced-motion preference.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReducedMotion(pub bool);

impl ReducedMotion {
    /// Interpret a preference value. Anything but `1`, `true` or `yes`
    /// (case-insensitive) means motion is fine.
    pub fn parse(value: Option<&str>) -> Self {
        let enabled = value.is_some_and(|v| {
            matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            )
        });
        Self(enabled)
    }

    pub fn from_env() -> Self {
        Self::parse(std::env::var(REDUCED_MOTION_ENV).ok().as_deref())
    }

    pub fn mode(self) -> MotionMode {
        if self.0 {
            MotionMode::Reduced
        } else {
            MotionMode::Animated
        }
    }
}

/// `M` flips the preference, standing in for a system setting change.
fn toggle_reduced_motion(keys: Res<ButtonInput<KeyCode>>, mut reduced: ResMut<ReducedMotion>) {
    if keys.just_pressed(KeyCode::KeyM) {
        reduced.0 = !reduced.0;
    }
}

fn sync_motion_mode(
    reduced: Res<ReducedMotion>,
    mode: Res<State<MotionMode>>,
    mut next_mode: ResMut<NextState<MotionMode>>,
) {
    if !reduced.is_changed() {
        return;
    }
    let wanted = reduced.mode();
    if *mode.get() != wanted {
        info!("Motion mode: {:?} -> {:?}", mode.get(), wanted);
        next_mode.set(wanted);
    }
}
