//! Common math types for the animation system

use glam::Vec3;

/// Quaternion representation for joint rotations
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Create a new quaternion
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians about the given axis
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle / 2.0;
        let s = half.sin();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half.cos(),
        }
    }

    /// Build a rotation from BVH Euler angles in degrees, applied in
    /// Z·Y·X intrinsic order (the fixed channel order of the format).
    ///
    /// The result is normalized to guard against drift from the three
    /// component rotations.
    pub fn from_euler_zyx(z_deg: f32, y_deg: f32, x_deg: f32) -> Self {
        let z_rot = Self::from_axis_angle(Vec3::Z, z_deg.to_radians());
        let y_rot = Self::from_axis_angle(Vec3::Y, y_deg.to_radians());
        let x_rot = Self::from_axis_angle(Vec3::X, x_deg.to_radians());

        z_rot.compose(&y_rot).compose(&x_rot).normalize()
    }

    /// Hamilton product `self * other`, re-normalized
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
        }
        .normalize()
    }

    /// Normalize the quaternion
    pub fn normalize(&self) -> Self {
        let len = (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt();
        if len > 0.0 {
            Self {
                x: self.x / len,
                y: self.y / len,
                z: self.z / len,
                w: self.w / len,
            }
        } else {
            Self::IDENTITY
        }
    }

    /// Spherical linear interpolation
    ///
    /// Takes the shorter arc between the two rotations; the output is a
    /// unit quaternion for any `t` in `[0, 1]`, with `slerp(a, b, 0) == a`
    /// and `slerp(a, b, 1) == b` up to floating tolerance.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        // Compute dot product
        let dot = self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w;

        // If dot < 0, negate one quaternion to take shorter arc
        let (other, dot) = if dot < 0.0 {
            (
                Self {
                    x: -other.x,
                    y: -other.y,
                    z: -other.z,
                    w: -other.w,
                },
                -dot,
            )
        } else {
            (*other, dot)
        };

        // If quaternions are very close, use linear interpolation
        if dot > 0.9995 {
            return Self {
                x: self.x + t * (other.x - self.x),
                y: self.y + t * (other.y - self.y),
                z: self.z + t * (other.z - self.z),
                w: self.w + t * (other.w - self.w),
            }
            .normalize();
        }

        // Compute spherical interpolation
        let theta_0 = dot.acos();
        let theta = theta_0 * t;
        let sin_theta = theta.sin();
        let sin_theta_0 = theta_0.sin();

        // sin((1 - t) * theta_0) / sin(theta_0), expanded
        let s0 = theta.cos() - dot * sin_theta / sin_theta_0;
        let s1 = sin_theta / sin_theta_0;

        Self {
            x: s0 * self.x + s1 * other.x,
            y: s0 * self.y + s1 * other.y,
            z: s0 * self.z + s1 * other.z,
            w: s0 * self.w + s1 * other.w,
        }
    }

    /// Extract the rotation as an angle (radians) and unit axis.
    ///
    /// Near-identity rotations would divide by `sin(angle / 2) ≈ 0`, so
    /// they are special-cased to a zero rotation about the X axis instead
    /// of propagating NaN to the renderer.
    pub fn to_angle_axis(&self) -> AngleAxis {
        let angle = 2.0 * self.w.clamp(-1.0, 1.0).acos();
        let half_sin = (angle / 2.0).sin();

        if half_sin.abs() < 1e-6 {
            return AngleAxis {
                angle: 0.0,
                axis: Vec3::X,
            };
        }

        AngleAxis {
            angle,
            axis: Vec3::new(self.x / half_sin, self.y / half_sin, self.z / half_sin),
        }
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Angle/axis form of a rotation, for draw-call submission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleAxis {
    /// Rotation angle in radians
    pub angle: f32,
    /// Unit rotation axis
    pub axis: Vec3,
}

impl AngleAxis {
    /// Rotation angle in degrees (fixed-function pipelines want degrees)
    pub fn angle_degrees(&self) -> f32 {
        self.angle.to_degrees()
    }
}

/// Trait for types that can be linearly interpolated
pub trait Lerp: Clone {
    /// Linear interpolation between self and other
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec3 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec3::new(
            self.x.lerp(&other.x, t),
            self.y.lerp(&other.y, t),
            self.z.lerp(&other.z, t),
        )
    }
}

impl Lerp for Quat {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        // Use slerp for quaternion interpolation
        self.slerp(other, t)
    }
}
