//! Living Service Map
//!
//! Vans drive a fixed set of routes over a city map, braking into stops,
//! waiting, and pulling away again. Routes light up as the pointer nears.

use bevy::prelude::*;

mod camera;
mod catalog;
mod game_state;
mod render;
mod simulation;

fn main() {
    // Force Vulkan backend on Windows (DX12 causes crashes on some systems)
    #[cfg(target_os = "windows")]
    std::env::set_var("WGPU_BACKEND", "vulkan");
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Living Service Map".into(),
                resolution: (1280., 834.).into(),
                ..default()
            }),
            ..default()
        }))
        // Motion preference
        .add_plugins(game_state::GameStatePlugin)
        // Static routes and vans
        .add_plugins(catalog::CatalogPlugin)
        // Core plugins
        .add_plugins(camera::CameraPlugin)
        .add_plugins(render::RenderPlugin)
        // Vans and hover
        .add_plugins(simulation::SimulationPlugin)
        .run();
}
