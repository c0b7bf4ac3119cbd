//! Spatial envelope of the rest pose and animated sequence
//!
//! Used by an external camera for framing; the animated bounds are a
//! cheap additive approximation, not a swept volume.

use glam::Vec3;

use super::hierarchy::JointHierarchy;
use super::Skeleton;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Box containing only the given point
    pub fn from_point(point: Vec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grow to include the given point
    pub fn include(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Extent per axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }
}

impl JointHierarchy {
    /// Envelope of the skeleton in its rest pose.
    ///
    /// Accumulates each joint's offset along its root-to-node path and
    /// folds min/max per axis over every joint position.
    pub fn rest_pose_bounds(&self) -> Aabb {
        // Walk with an explicit stack carrying the accumulated offset
        let root = self.root();
        let mut stack = vec![(root, Vec3::ZERO)];
        let mut bounds: Option<Aabb> = None;

        while let Some((id, parent_sum)) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            let position = parent_sum + node.offset();

            match bounds.as_mut() {
                Some(b) => b.include(position),
                None => bounds = Some(Aabb::from_point(position)),
            }

            for child in node.children() {
                stack.push((*child, position));
            }
        }

        // The hierarchy always holds at least its root
        bounds.unwrap_or(Aabb {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        })
    }
}

impl Skeleton {
    /// Envelope of the rest pose (see [`JointHierarchy::rest_pose_bounds`])
    pub fn rest_pose_bounds(&self) -> Aabb {
        self.hierarchy().rest_pose_bounds()
    }

    /// Approximate envelope of the full animated sequence.
    ///
    /// Folds the root-translation extremes across all motion frames, then
    /// pads additively by the rest-pose bounds per axis (min by rest min,
    /// max by rest max). Joint rotations are ignored, which keeps this
    /// cheap enough for camera framing.
    pub fn animation_bounds(&self) -> Aabb {
        let rest = self.rest_pose_bounds();

        let mut translations: Option<Aabb> = None;
        for frame in self.motion().frames() {
            if frame.len() < 3 {
                continue;
            }
            let t = Vec3::new(frame[0], frame[1], frame[2]);
            match translations.as_mut() {
                Some(b) => b.include(t),
                None => translations = Some(Aabb::from_point(t)),
            }
        }

        match translations {
            Some(t) => Aabb {
                min: t.min + rest.min,
                max: t.max + rest.max,
            },
            None => rest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::hierarchy::{JointKind, JointNode};

    #[test]
    fn test_rest_pose_bounds_accumulates_offsets() {
        let mut tree = JointHierarchy::new(
            JointNode::new(JointKind::Root, "hips").with_offset(Vec3::new(0.0, 1.0, 0.0)),
        );
        let root = tree.root();
        let knee = tree
            .add_child(
                root,
                JointNode::new(JointKind::Joint, "knee").with_offset(Vec3::new(0.0, -0.5, 0.0)),
            )
            .unwrap();
        tree.add_child(
            knee,
            JointNode::new(JointKind::End, "Site").with_offset(Vec3::new(0.0, -0.5, 0.2)),
        )
        .unwrap();

        let bounds = tree.rest_pose_bounds();
        // Positions: (0,1,0), (0,0.5,0), (0,0,0.2)
        assert_eq!(bounds.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(0.0, 1.0, 0.2));
    }

    #[test]
    fn test_rest_pose_bounds_all_negative() {
        let tree = JointHierarchy::new(
            JointNode::new(JointKind::Root, "hips").with_offset(Vec3::new(-2.0, -3.0, -4.0)),
        );
        let bounds = tree.rest_pose_bounds();
        assert_eq!(bounds.max, Vec3::new(-2.0, -3.0, -4.0));
    }

    #[test]
    fn test_aabb_size_center() {
        let mut b = Aabb::from_point(Vec3::new(-1.0, 0.0, 0.0));
        b.include(Vec3::new(3.0, 2.0, 0.0));
        assert_eq!(b.size(), Vec3::new(4.0, 2.0, 0.0));
        assert_eq!(b.center(), Vec3::new(1.0, 1.0, 0.0));
    }
}
