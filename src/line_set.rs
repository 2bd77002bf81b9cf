//! A set of line segments with cached ribbon geometry.

use crate::camera::ViewPose;
use crate::dash::{dash_points, DashPattern};
use crate::mesh::LineMesh;
use crate::ribbon::{ribbon_coords, ribbon_indices};
use glamx::Vec3;
use log::trace;

/// A set of 3D line segments meshed as screen-space ribbons.
///
/// Consecutive disjoint point pairs form the segments. The struct owns the
/// generated mesh; call [`update_geometry`](LineSet3d::update_geometry)
/// after changing any input or whenever the camera moves. There is no
/// change tracking on purpose: the host application knows when its state
/// changed and triggers the recompute explicitly.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSet3d {
    /// The segment endpoints, consumed pairwise.
    pub points: Vec<Vec3>,
    /// The ribbon width, in world units. Also scales the dash lengths.
    pub thickness: f32,
    /// The dash pattern applied along each segment.
    pub dash_pattern: DashPattern,
    /// Distance the mesh is nudged toward the camera to avoid z-fighting.
    pub depth_offset: f32,
    mesh: LineMesh,
}

impl Default for LineSet3d {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            thickness: 1.0,
            dash_pattern: DashPattern::solid(),
            depth_offset: 0.0,
            mesh: LineMesh::default(),
        }
    }
}

impl LineSet3d {
    /// Creates a new line set from segment endpoints, consumed pairwise.
    pub fn new(points: Vec<Vec3>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    /// Sets the ribbon thickness.
    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Sets the dash pattern.
    pub fn with_dash_pattern(mut self, pattern: DashPattern) -> Self {
        self.dash_pattern = pattern;
        self
    }

    /// Sets the depth offset.
    pub fn with_depth_offset(mut self, depth_offset: f32) -> Self {
        self.depth_offset = depth_offset;
        self
    }

    /// The cached mesh generated by the last `update_geometry` call.
    #[inline]
    pub fn mesh(&self) -> &LineMesh {
        &self.mesh
    }

    /// Whether the last recompute produced no geometry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// Recomputes the cached mesh for the current inputs and camera.
    ///
    /// Vertex positions are rebuilt on every call; the index buffer is
    /// only rebuilt when the quad count changed. Calling this repeatedly
    /// with unchanged inputs is cheap-ish and yields identical buffers.
    pub fn update_geometry(&mut self, view: &ViewPose) {
        let dashed = dash_points(&self.points, self.thickness, &self.dash_pattern);

        let nquads = dashed.len() / 2;
        if self.mesh.num_triangles() != nquads * 2 {
            trace!("rebuilding line set index buffer for {} quads", nquads);
            self.mesh.indices = ribbon_indices(dashed.len());
        }

        if nquads == 0 {
            self.mesh.coords.clear();
            return;
        }

        self.mesh.coords = ribbon_coords(&dashed, self.thickness, self.depth_offset, view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn front_view() -> ViewPose {
        ViewPose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
    }

    fn dashed_set() -> LineSet3d {
        LineSet3d::new(vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)])
            .with_dash_pattern(DashPattern::new(vec![2.0, 2.0]).unwrap())
    }

    #[test]
    fn defaults_match_solid_line() {
        let set = LineSet3d::default();
        assert_eq!(set.thickness, 1.0);
        assert_eq!(set.depth_offset, 0.0);
        assert!(set.dash_pattern.is_solid());
        assert!(set.is_empty());
    }

    #[test]
    fn empty_points_produce_empty_mesh() {
        let mut set = LineSet3d::default();
        set.update_geometry(&front_view());

        assert!(set.is_empty());
        assert_eq!(set.mesh().num_triangles(), 0);
    }

    #[test]
    fn solid_line_meshes_one_quad_per_segment() {
        let mut set = LineSet3d::new(vec![
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        ]);
        set.update_geometry(&front_view());

        assert_eq!(set.mesh().coords.len(), 8);
        assert_eq!(set.mesh().num_triangles(), 4);
    }

    #[test]
    fn index_length_tracks_dash_point_count() {
        let mut set = dashed_set();
        set.update_geometry(&front_view());

        // 50 dash boundaries for the worked 10-unit example.
        let ndash = 50;
        assert_eq!(set.mesh().flat_indices().len(), 6 * (ndash / 2));
        assert_eq!(set.mesh().coords.len(), (ndash / 2) * 4);
    }

    #[test]
    fn index_buffer_is_reused_when_count_is_stable() {
        let mut set = dashed_set();
        set.update_geometry(&front_view());
        let indices_before = set.mesh().indices.clone();

        // Translating the line keeps the dash count; only positions move.
        for p in &mut set.points {
            p.y += 1.0;
        }
        set.update_geometry(&front_view());

        assert_eq!(set.mesh().indices, indices_before);
        assert_relative_eq!(set.mesh().coords[0].y, 0.5);
    }

    #[test]
    fn index_buffer_regenerates_on_count_change() {
        let mut set = dashed_set();
        set.update_geometry(&front_view());
        let ntriangles = set.mesh().num_triangles();

        // Shortening the segment drops dash boundaries, so the index
        // buffer must be rebuilt to match.
        set.points[1] = Vec3::new(5.0, 0.0, 0.0);
        set.update_geometry(&front_view());

        assert_ne!(set.mesh().num_triangles(), ntriangles);
        assert_eq!(set.mesh().num_triangles() * 2, set.mesh().coords.len());
    }

    #[test]
    fn clearing_points_clears_positions() {
        let mut set = dashed_set();
        set.update_geometry(&front_view());
        assert!(!set.is_empty());

        set.points.clear();
        set.update_geometry(&front_view());
        assert!(set.is_empty());
    }

    #[test]
    fn repeated_updates_are_idempotent() {
        let mut set = dashed_set().with_thickness(0.5).with_depth_offset(0.05);
        let view = front_view();

        set.update_geometry(&view);
        let first = set.mesh().clone();
        set.update_geometry(&view);

        assert_eq!(*set.mesh(), first);
    }

    #[test]
    fn camera_change_reorients_quads() {
        let mut set = dashed_set();
        set.update_geometry(&front_view());
        // Front view: side vector along Y.
        assert_relative_eq!(set.mesh().coords[0].y, -0.5);
        assert_relative_eq!(set.mesh().coords[0].z, 0.0);

        // Looking straight down instead: side vector flips into the Z axis.
        let top_view = ViewPose::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Z);
        set.update_geometry(&top_view);
        assert_relative_eq!(set.mesh().coords[0].y, 0.0);
        assert_ne!(set.mesh().coords[0].z, 0.0);
    }
}
