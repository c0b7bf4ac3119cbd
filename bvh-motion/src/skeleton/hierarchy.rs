//! Arena-backed joint hierarchy
//!
//! Joints live in a flat arena and are addressed by stable [`JointId`]
//! handles; each node keeps its child ids in insertion order and a parent
//! id. This replaces an owned recursive pointer tree: child insertion is
//! an O(1) id lookup and traversal is a restartable pre-order iterator.

use glam::Vec3;

use crate::animation::types::{AngleAxis, Quat};
use crate::error::{Error, Result};

/// Structural kind of a joint, matching the file's node labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JointKind {
    /// The single `ROOT` node; consumes 6 channel values per frame
    Root,
    /// An interior `JOINT` node; consumes 3 channel values per frame
    Joint,
    /// An `End Site` leaf sentinel; consumes no channel data
    End,
}

impl JointKind {
    /// Label string as written in the hierarchy file
    pub fn label(self) -> &'static str {
        match self {
            JointKind::Root => "ROOT",
            JointKind::Joint => "JOINT",
            JointKind::End => "End",
        }
    }
}

/// Stable handle to a joint in a [`JointHierarchy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointId(usize);

impl JointId {
    /// Arena index of the joint
    pub fn index(self) -> usize {
        self.0
    }
}

/// One joint: static rest-pose offset plus the dynamic channels written
/// into it each frame
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointNode {
    kind: JointKind,
    name: String,
    offset: Vec3,
    rotation: Quat,
    translation: Vec3,
    children: Vec<JointId>,
    parent: Option<JointId>,
}

impl JointNode {
    /// Create a joint with zeroed channels
    pub fn new(kind: JointKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            offset: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            translation: Vec3::ZERO,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Set the rest-pose offset (builder style, used by the parser)
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Structural kind
    pub fn kind(&self) -> JointKind {
        self.kind
    }

    /// Free-text joint name (`Site` for end sites)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Static translation from the parent in rest pose
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Set the rest-pose offset
    pub fn set_offset(&mut self, offset: Vec3) {
        self.offset = offset;
    }

    /// Current orientation as a unit quaternion
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Current orientation in angle/axis form, for draw-call submission
    pub fn rotation_angle_axis(&self) -> AngleAxis {
        self.rotation.to_angle_axis()
    }

    /// Current translation channel; meaningful only on the root
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Child joint ids in insertion order
    pub fn children(&self) -> &[JointId] {
        &self.children
    }

    /// Parent joint id, `None` for the root
    pub fn parent(&self) -> Option<JointId> {
        self.parent
    }

    fn reset_channels(&mut self) {
        self.rotation = Quat::IDENTITY;
        self.translation = Vec3::ZERO;
    }
}

/// The skeleton's joint tree: a single root and its descendants
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointHierarchy {
    nodes: Vec<JointNode>,
}

impl JointHierarchy {
    /// Create a hierarchy holding only the given root node
    pub fn new(mut root: JointNode) -> Self {
        root.children.clear();
        root.parent = None;
        Self { nodes: vec![root] }
    }

    /// Handle to the root joint
    pub fn root(&self) -> JointId {
        JointId(0)
    }

    /// Number of joints in the hierarchy (End sites included)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a hierarchy holds at least its root
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Joint by id, if the id belongs to this hierarchy
    pub fn node(&self, id: JointId) -> Option<&JointNode> {
        self.nodes.get(id.0)
    }

    /// Mutable joint by id
    pub fn node_mut(&mut self, id: JointId) -> Option<&mut JointNode> {
        self.nodes.get_mut(id.0)
    }

    /// Append `node` as the last child of `parent`.
    ///
    /// The node value is moved in with its link fields rebuilt, so a
    /// template can never alias subtree structure. Fails with
    /// [`Error::NodeNotFound`] if `parent` is not a live id in this
    /// hierarchy.
    pub fn add_child(&mut self, parent: JointId, mut node: JointNode) -> Result<JointId> {
        if parent.0 >= self.nodes.len() {
            return Err(Error::NodeNotFound(parent.0));
        }

        let id = JointId(self.nodes.len());
        node.children.clear();
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Pre-order depth-first traversal: parent before children, siblings
    /// in insertion order. Restartable; does not borrow mutably.
    pub fn iter_depth_first(&self) -> DepthFirstIter<'_> {
        DepthFirstIter {
            hierarchy: self,
            stack: vec![JointId(0)],
        }
    }

    /// Number of joints that consume channel data (everything but End)
    pub fn non_end_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.kind != JointKind::End)
            .count()
    }

    /// Channel values per motion frame for this hierarchy's layout:
    /// 3 root translation values plus 3 rotation values per non-End joint
    pub fn channel_count(&self) -> usize {
        3 + 3 * self.non_end_count()
    }

    /// Write one frame's channel values into the joints, verbatim.
    ///
    /// Joints are visited in the same depth-first order the parser used
    /// when the layout was authored; End sites are skipped, the root
    /// consumes 6 values (translation + Z/Y/X rotation in degrees), every
    /// other joint consumes 3 rotation values.
    pub fn apply_frame(&mut self, frame: &[f32]) -> Result<()> {
        self.check_dimension(frame)?;

        let order: Vec<JointId> = self.iter_depth_first().collect();
        let mut cursor = 0;
        let mut is_root = true;

        for id in order {
            let node = &mut self.nodes[id.0];
            if node.kind == JointKind::End {
                continue;
            }

            if is_root {
                node.translation = Vec3::new(frame[cursor], frame[cursor + 1], frame[cursor + 2]);
                cursor += 3;
                is_root = false;
            }

            node.rotation = Quat::from_euler_zyx(frame[cursor], frame[cursor + 1], frame[cursor + 2]);
            cursor += 3;
        }

        Ok(())
    }

    /// Write an interpolated pose between two frames into the joints.
    ///
    /// Each joint's rotation is the slerp of the two frames' Euler
    /// triples converted to quaternions independently; the root
    /// translation is interpolated componentwise.
    pub fn apply_frame_interpolated(&mut self, a: &[f32], b: &[f32], t: f32) -> Result<()> {
        self.check_dimension(a)?;
        self.check_dimension(b)?;

        let order: Vec<JointId> = self.iter_depth_first().collect();
        let mut cursor = 0;
        let mut is_root = true;

        for id in order {
            let node = &mut self.nodes[id.0];
            if node.kind == JointKind::End {
                continue;
            }

            if is_root {
                let from = Vec3::new(a[cursor], a[cursor + 1], a[cursor + 2]);
                let to = Vec3::new(b[cursor], b[cursor + 1], b[cursor + 2]);
                node.translation = from.lerp(to, t);
                cursor += 3;
                is_root = false;
            }

            let qa = Quat::from_euler_zyx(a[cursor], a[cursor + 1], a[cursor + 2]);
            let qb = Quat::from_euler_zyx(b[cursor], b[cursor + 1], b[cursor + 2]);
            node.rotation = qa.slerp(&qb, t);
            cursor += 3;
        }

        Ok(())
    }

    /// Zero every channel: identity rotations, zero translations
    pub fn reset_pose(&mut self) {
        for node in &mut self.nodes {
            node.reset_channels();
        }
    }

    fn check_dimension(&self, frame: &[f32]) -> Result<()> {
        let expected = self.channel_count();
        if frame.len() != expected {
            return Err(Error::InvalidDimension {
                expected,
                found: frame.len(),
            });
        }
        Ok(())
    }
}

/// Pre-order iterator over joint ids
pub struct DepthFirstIter<'a> {
    hierarchy: &'a JointHierarchy,
    stack: Vec<JointId>,
}

impl Iterator for DepthFirstIter<'_> {
    type Item = JointId;

    fn next(&mut self) -> Option<JointId> {
        let id = self.stack.pop()?;

        // Children pushed in reverse so the first child is visited first
        for child in self.hierarchy.nodes[id.0].children.iter().rev() {
            self.stack.push(*child);
        }

        Some(id)
    }
}
