//! Extrusion of dash points into camera-facing quads.

use crate::camera::ViewPose;
use crate::mesh::LineMesh;
use glamx::Vec3;

/// Squared length below which a side vector is considered degenerate.
const SIDE_EPSILON: f32 = 1.0e-12;

/// Generates the vertex positions of one camera-facing quad per disjoint
/// point pair.
///
/// Each quad is `thickness` wide, perpendicular to both its segment and
/// the view direction. Segments parallel to the view direction fall back
/// to the camera's up direction for orientation; coincident pairs produce
/// a zero-area quad so the one-quad-per-pair invariant holds regardless of
/// input. A positive `depth_offset` nudges all vertices toward the camera,
/// which avoids z-fighting with coplanar geometry.
pub fn ribbon_coords(
    points: &[Vec3],
    thickness: f32,
    depth_offset: f32,
    view: &ViewPose,
) -> Vec<Vec3> {
    let view_dir = view.view_dir();
    let offset = view_dir * -depth_offset;
    let half_width = thickness * 0.5;

    let mut coords = Vec::with_capacity((points.len() / 2) * 4);

    for pair in points.chunks_exact(2) {
        let (a, b) = (pair[0], pair[1]);
        let dir = b - a;

        let mut side = dir.cross(view_dir);
        if side.length_squared() < SIDE_EPSILON {
            side = dir.cross(view.up());
        }
        let side = if side.length_squared() < SIDE_EPSILON {
            Vec3::ZERO
        } else {
            side.normalize() * half_width
        };

        coords.push(a - side + offset);
        coords.push(a + side + offset);
        coords.push(b + side + offset);
        coords.push(b - side + offset);
    }

    coords
}

/// Generates the triangle index buffer for the quads of `npoints` dash
/// points: the fixed `{0,1,2, 0,2,3}` pattern offset by 4 per quad.
pub fn ribbon_indices(npoints: usize) -> Vec<[u32; 3]> {
    let nquads = npoints / 2;
    let mut indices = Vec::with_capacity(nquads * 2);

    for i in 0..nquads as u32 {
        let base = i * 4;
        indices.push([base, base + 1, base + 2]);
        indices.push([base, base + 2, base + 3]);
    }

    indices
}

/// Extrudes dash points into a ribbon mesh in one shot.
///
/// Equivalent to combining [`ribbon_coords`] and [`ribbon_indices`]; use
/// the separate functions when caching the index buffer across camera
/// updates.
pub fn ribbon(points: &[Vec3], thickness: f32, depth_offset: f32, view: &ViewPose) -> LineMesh {
    LineMesh::new(
        ribbon_coords(points, thickness, depth_offset, view),
        ribbon_indices(points.len()),
    )
}
