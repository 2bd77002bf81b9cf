//! Meshes a dashed zig-zag and prints the resulting buffer sizes.
//!
//! Run with `RUST_LOG=trace` to see when the index buffer is rebuilt.

use ribbon3d::prelude::*;

fn main() {
    env_logger::init();

    let points = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(10.0, 10.0, 0.0),
        Vec3::new(10.0, 10.0, 0.0),
        Vec3::new(0.0, 10.0, 5.0),
    ];

    let pattern = DashPattern::new(vec![4.0, 2.0]).expect("valid pattern");
    let mut lines = LineSet3d::new(points)
        .with_thickness(0.5)
        .with_dash_pattern(pattern)
        .with_depth_offset(0.01);

    let mut view = ViewPose::new(Vec3::new(5.0, 5.0, 25.0), Vec3::new(5.0, 5.0, 0.0), Vec3::Y);
    lines.update_geometry(&view);

    let mesh = lines.mesh();
    println!(
        "meshed {} quads: {} vertices ({} bytes), {} triangles ({} bytes)",
        mesh.coords.len() / 4,
        mesh.coords.len(),
        mesh.coord_bytes().len(),
        mesh.num_triangles(),
        mesh.index_bytes().len(),
    );

    // Orbit the camera a bit: positions move, the index buffer stays.
    view = ViewPose::new(Vec3::new(20.0, 10.0, 15.0), Vec3::new(5.0, 5.0, 0.0), Vec3::Y);
    lines.update_geometry(&view);
    println!(
        "after orbit: first vertex at {:?}, still {} triangles",
        lines.mesh().coords[0],
        lines.mesh().num_triangles(),
    );
}
