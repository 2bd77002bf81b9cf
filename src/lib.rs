/*!
# ribbon3d

Screen-space dashed line meshing.

3D viewports usually render lines with the GPU's native line primitive,
which has no portable notion of width or dashing. The usual workaround is
to extrude every line segment into a thin camera-facing quad (a ribbon)
whose width is the desired thickness. **ribbon3d** generates exactly that
geometry:

* split a set of line segments into dash/gap boundary points following a
  cyclic dash pattern;
* extrude each dash into a billboard quad perpendicular to both the
  segment and the current view direction;
* hand back plain position and triangle index buffers ready for upload.

The crate only computes geometry. Windowing, GPU pipelines and cameras are
left to the host application; the extruder just needs the camera's view
and up directions, supplied through a [`ViewPose`](camera::ViewPose).

Meshing a dashed polyline is a three-liner:

```
use ribbon3d::prelude::*;

let pattern = DashPattern::new(vec![2.0, 2.0]).unwrap();
let mut lines = LineSet3d::new(vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)])
    .with_thickness(1.0)
    .with_dash_pattern(pattern);

lines.update_geometry(&ViewPose::default());
assert!(!lines.is_empty());
```

Call [`update_geometry`](line_set::LineSet3d::update_geometry) again
whenever the points, thickness, dash pattern or camera change; the index
buffer is reused as long as the quad count stays the same.
*/
#![warn(missing_docs)]

pub use glamx;

pub mod camera;
pub mod dash;
pub mod error;
pub mod line_set;
pub mod mesh;
pub mod ribbon;

/// Commonly used types, re-exported for glob import.
pub mod prelude {
    pub use crate::camera::ViewPose;
    pub use crate::dash::{dash_points, DashPattern};
    pub use crate::error::{Error, Result};
    pub use crate::line_set::LineSet3d;
    pub use crate::mesh::LineMesh;
    pub use crate::ribbon::{ribbon, ribbon_coords, ribbon_indices};
    pub use glamx::{Pose3, Quat, Vec2, Vec3, Vec3Swizzles};
}
