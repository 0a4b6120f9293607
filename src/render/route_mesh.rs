//! Route stroke meshes.
//!
//! Converts a flattened route polyline into a flat triangle strip of the
//! stroke's width.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

/// Consecutive points closer than this are merged before building.
const MERGE_DISTANCE: f32 = 1e-4;
/// Limits how far a sharp corner's miter may stretch, in half-widths.
const MITER_LIMIT: f32 = 2.0;

/// Build a strip mesh following `points` (world space). Returns `None` when
/// fewer than two distinct points remain.
pub fn stroke_mesh(points: &[Vec2], width: f32) -> Option<Mesh> {
    let points = distinct_points(points);
    if points.len() < 2 {
        return None;
    }

    let half_width = width / 2.0;
    let mut vertices: Vec<[f32; 3]> = Vec::with_capacity(points.len() * 2);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(points.len() * 2);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(points.len() * 2);
    let mut indices: Vec<u32> = Vec::with_capacity((points.len() - 1) * 6);

    let mut accumulated_length = 0.0;

    for i in 0..points.len() {
        let current = points[i];
        let offset = corner_offset(&points, i) * half_width;

        let left = current + offset;
        let right = current - offset;
        vertices.push([left.x, left.y, 0.0]);
        vertices.push([right.x, right.y, 0.0]);

        normals.push([0.0, 0.0, 1.0]);
        normals.push([0.0, 0.0, 1.0]);

        if i > 0 {
            accumulated_length += points[i].distance(points[i - 1]);
        }
        let u = accumulated_length / width.max(f32::EPSILON);
        uvs.push([u, 0.0]);
        uvs.push([u, 1.0]);

        if i > 0 {
            let base = (i as u32 - 1) * 2;
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
        }
    }

    Some(
        Mesh::new(PrimitiveTopology::TriangleList, default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, vertices)
            .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
            .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
            .with_inserted_indices(Indices::U32(indices)),
    )
}

fn distinct_points(points: &[Vec2]) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::with_capacity(points.len());
    for &point in points {
        if out.last().map_or(true, |last| last.distance(point) > MERGE_DISTANCE) {
            out.push(point);
        }
    }
    out
}

/// Unit-ish offset from the centre line to the left edge at point `i`,
/// stretched at corners so the strip keeps its width.
fn corner_offset(points: &[Vec2], i: usize) -> Vec2 {
    let last = points.len() - 1;
    let incoming = (i > 0).then(|| (points[i] - points[i - 1]).normalize_or_zero());
    let outgoing = (i < last).then(|| (points[i + 1] - points[i]).normalize_or_zero());

    let tangent = match (incoming, outgoing) {
        (Some(a), Some(b)) => (a + b).normalize_or_zero(),
        (Some(a), None) | (None, Some(a)) => a,
        (None, None) => Vec2::ZERO,
    };
    // Doubling back on itself: fall back to the incoming direction.
    let tangent = if tangent == Vec2::ZERO {
        incoming.unwrap_or(Vec2::X)
    } else {
        tangent
    };
    let perp = tangent.perp();

    match incoming {
        Some(segment) if outgoing.is_some() => {
            let cos_half = perp.dot(segment.perp()).max(1.0 / MITER_LIMIT);
            perp / cos_half
        }
        _ => perp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    fn positions(mesh: &Mesh) -> Vec<[f32; 3]> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(values)) => values.clone(),
            other => panic!("unexpected position attribute: {other:?}"),
        }
    }

    #[test]
    fn straight_stroke_is_one_quad() {
        let mesh = stroke_mesh(&[Vec2::ZERO, Vec2::new(10.0, 0.0)], 2.0).unwrap();

        assert_eq!(
            positions(&mesh),
            vec![
                [0.0, 1.0, 0.0],
                [0.0, -1.0, 0.0],
                [10.0, 1.0, 0.0],
                [10.0, -1.0, 0.0]
            ]
        );
        match mesh.indices() {
            Some(Indices::U32(indices)) => assert_eq!(indices, &vec![0, 1, 2, 2, 1, 3]),
            other => panic!("unexpected indices: {other:?}"),
        }
    }

    #[test]
    fn right_angle_keeps_full_width() {
        let points = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
        let mesh = stroke_mesh(&points, 2.0).unwrap();
        let corner = positions(&mesh)[2];

        // Left edge of a left turn sits inside the corner at (9, 1).
        assert!((corner[0] - 9.0).abs() < 1e-4);
        assert!((corner[1] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn repeated_points_are_merged() {
        let points = [
            Vec2::ZERO,
            Vec2::new(5.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(10.0, 0.0),
        ];
        let mesh = stroke_mesh(&points, 1.0).unwrap();
        assert_eq!(positions(&mesh).len(), 6);
        assert!(positions(&mesh).iter().all(|p| p[1].abs() == 0.5));
    }

    #[test]
    fn degenerate_polylines_have_no_mesh() {
        assert!(stroke_mesh(&[], 2.0).is_none());
        assert!(stroke_mesh(&[Vec2::ONE], 2.0).is_none());
        assert!(stroke_mesh(&[Vec2::ONE, Vec2::ONE], 2.0).is_none());
    }
}
