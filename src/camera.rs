//! Minimal camera state needed to orient ribbons toward the viewer.

use glamx::Vec3;

/// The eye/at/up triple of the viewing camera.
///
/// This is the same triple a look-at view transform is built from. The
/// extruder only needs the directions derived from it: quads are laid out
/// perpendicular to [`view_dir`](ViewPose::view_dir), and
/// [`up`](ViewPose::up) serves as a fallback axis for segments parallel to
/// the view direction.
///
/// The host application owns the real camera; rebuild a `ViewPose` from it
/// whenever its transform changes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewPose {
    eye: Vec3,
    at: Vec3,
    up: Vec3,
}

impl Default for ViewPose {
    fn default() -> Self {
        Self::new(Vec3::Z, Vec3::ZERO, Vec3::Y)
    }
}

impl ViewPose {
    /// Creates a view pose from the camera position, the point looked at,
    /// and the up direction.
    pub fn new(eye: Vec3, at: Vec3, up: Vec3) -> ViewPose {
        ViewPose { eye, at, up }
    }

    /// The camera's position in world space.
    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// The unit direction the camera is looking along.
    ///
    /// Falls back to `-Z` when the eye and target coincide.
    #[inline]
    pub fn view_dir(&self) -> Vec3 {
        (self.at - self.eye).normalize_or(Vec3::NEG_Z)
    }

    /// The camera's unit up direction.
    ///
    /// Falls back to `+Y` when the stored up vector is degenerate.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.up.normalize_or(Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn view_dir_is_normalized() {
        let pose = ViewPose::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        assert_relative_eq!(pose.view_dir().length(), 1.0);
        assert_relative_eq!(pose.view_dir().z, -1.0);
    }

    #[test]
    fn degenerate_pose_falls_back() {
        let pose = ViewPose::new(Vec3::ONE, Vec3::ONE, Vec3::ZERO);
        assert_eq!(pose.view_dir(), Vec3::NEG_Z);
        assert_eq!(pose.up(), Vec3::Y);
    }

    #[test]
    fn default_looks_down_negative_z() {
        let pose = ViewPose::default();
        assert_eq!(pose.eye(), Vec3::Z);
        assert_eq!(pose.view_dir(), Vec3::NEG_Z);
        assert_eq!(pose.up(), Vec3::Y);
    }
}
