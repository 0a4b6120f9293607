//! Van and glow meshes, plus the eased style state of strokes and glow.

use bevy::color::Mix;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Differences below this count as arrived.
const SETTLE_EPSILON: f32 = 1e-3;
/// Remaining fraction of a transition once its duration has elapsed.
const TRANSITION_RESIDUAL: f32 = 0.01;

/// Rounded bar pointing along +x, `length` long overall.
pub fn indicator_mesh(length: f32, width: f32) -> Mesh {
    let radius = width / 2.0;
    let body = (length - width).max(0.0);
    Mesh::from(Capsule2d::new(radius, body)).rotated_by(Quat::from_rotation_z(FRAC_PI_2))
}

/// Disc whose vertex colours fade from `center` at the middle to fully
/// transparent at the rim.
pub fn glow_mesh(radius: f32, center: Color, segments: u32) -> Mesh {
    let segments = segments.max(3);
    let linear = center.to_linear();
    let inner = [linear.red, linear.green, linear.blue, linear.alpha];
    let rim = [linear.red, linear.green, linear.blue, 0.0];

    let mut positions: Vec<[f32; 3]> = vec![[0.0, 0.0, 0.0]];
    let mut colors: Vec<[f32; 4]> = vec![inner];
    let mut indices: Vec<u32> = Vec::with_capacity(segments as usize * 3);

    for i in 0..segments {
        let angle = i as f32 / segments as f32 * TAU;
        positions.push([radius * angle.cos(), radius * angle.sin(), 0.0]);
        colors.push(rim);

        let current = i + 1;
        let next = (i + 1) % segments + 1;
        indices.extend_from_slice(&[0, current, next]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
        .with_inserted_indices(Indices::U32(indices))
}

/// Share of the remaining distance to cover this frame for a transition
/// lasting `duration` seconds.
pub fn transition_blend(dt: f32, duration: f32) -> f32 {
    if !(duration > 0.0) {
        return 1.0;
    }
    (1.0 - TRANSITION_RESIDUAL.powf(dt.max(0.0) / duration)).clamp(0.0, 1.0)
}

/// Currently displayed style of a route stroke.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub opacity: f32,
    pub color: LinearRgba,
    /// Width the stroke mesh was last built with.
    pub mesh_width: f32,
}

impl StrokeStyle {
    pub fn new(width: f32, opacity: f32, color: Color) -> Self {
        Self {
            width,
            opacity,
            color: color.to_linear(),
            mesh_width: width,
        }
    }

    /// Move toward the target style. Returns `false` if already there.
    pub fn approach(&mut self, width: f32, opacity: f32, color: Color, blend: f32) -> bool {
        let color = color.to_linear();
        if self.settled_at(width, opacity, color) {
            return false;
        }

        self.width += (width - self.width) * blend;
        self.opacity += (opacity - self.opacity) * blend;
        self.color = self.color.mix(&color, blend);

        if self.settled_at(width, opacity, color) {
            self.width = width;
            self.opacity = opacity;
            self.color = color;
        }
        true
    }

    pub fn material_color(&self) -> Color {
        Color::from(self.color).with_alpha(self.opacity)
    }

    pub fn needs_rebuild(&self) -> bool {
        (self.width - self.mesh_width).abs() > 0.01
    }

    fn settled_at(&self, width: f32, opacity: f32, color: LinearRgba) -> bool {
        let color_gap = (self.color.red - color.red)
            .abs()
            .max((self.color.green - color.green).abs())
            .max((self.color.blue - color.blue).abs());
        (self.width - width).abs() < SETTLE_EPSILON
            && (self.opacity - opacity).abs() < SETTLE_EPSILON
            && color_gap < SETTLE_EPSILON
    }
}

/// Glow that trails the pointer.
#[derive(Component, Debug, Default, Clone)]
pub struct GlowMarker {
    pub opacity: f32,
    /// 1 while a pointer is known, 0 otherwise.
    pub target: f32,
}

impl GlowMarker {
    /// Returns `false` if the opacity is already at its target.
    pub fn approach(&mut self, blend: f32) -> bool {
        if self.opacity == self.target {
            return false;
        }
        self.opacity += (self.target - self.opacity) * blend;
        if (self.opacity - self.target).abs() < SETTLE_EPSILON {
            self.opacity = self.target;
        }
        true
    }
}
