//! Skeleton document serialization
//!
//! Regenerates the textual grammar from the live hierarchy and frame
//! store. Output is re-parseable by [`crate::parser`]: node counts,
//! offsets, frame values, frame count, and sample period all survive a
//! write → parse round trip exactly (f32 `Display` is shortest
//! round-trip formatting).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::skeleton::{JointHierarchy, JointId, JointKind, Skeleton};

impl Skeleton {
    /// Write the full document (HIERARCHY and MOTION sections)
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "HIERARCHY")?;
        write_node(self.hierarchy(), self.hierarchy().root(), 0, writer)?;

        writeln!(writer, "MOTION")?;
        self.motion().write_to(writer)?;
        Ok(())
    }

    /// Write the document to a file path
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Recursively write one joint block at the given tab depth
fn write_node<W: Write>(
    tree: &JointHierarchy,
    id: JointId,
    depth: usize,
    writer: &mut W,
) -> Result<()> {
    let Some(node) = tree.node(id) else {
        return Ok(());
    };

    let indent = "\t".repeat(depth);
    let inner = "\t".repeat(depth + 1);

    writeln!(writer, "{indent}{} {}", node.kind().label(), node.name())?;
    writeln!(writer, "{indent}{{")?;

    let offset = node.offset();
    writeln!(writer, "{inner}OFFSET {} {} {}", offset.x, offset.y, offset.z)?;

    match node.kind() {
        JointKind::Root => writeln!(
            writer,
            "{inner}CHANNELS 6 Xposition Yposition Zposition Zrotation Yrotation Xrotation"
        )?,
        JointKind::Joint => {
            writeln!(writer, "{inner}CHANNELS 3 Zrotation Yrotation Xrotation")?;
        }
        JointKind::End => {}
    }

    for child in node.children() {
        write_node(tree, *child, depth + 1, writer)?;
    }

    writeln!(writer, "{indent}}}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::MotionFrameStore;
    use crate::parser::parse_str;
    use crate::skeleton::JointNode;
    use glam::Vec3;

    fn sample_skeleton() -> Skeleton {
        let mut tree = JointHierarchy::new(
            JointNode::new(JointKind::Root, "Hips").with_offset(Vec3::new(0.0, 1.0, 0.0)),
        );
        let spine = tree
            .add_child(
                tree.root(),
                JointNode::new(JointKind::Joint, "Spine").with_offset(Vec3::new(0.0, 0.5, 0.0)),
            )
            .unwrap();
        tree.add_child(
            spine,
            JointNode::new(JointKind::End, "Site").with_offset(Vec3::new(0.0, 0.25, 0.0)),
        )
        .unwrap();

        let mut motion = MotionFrameStore::new(2, 0.5).unwrap();
        motion
            .append(vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
            .unwrap();
        motion
            .append(vec![1.0, 2.0, 3.0, 90.0, 0.0, 0.0, 0.0, 45.0, 0.0])
            .unwrap();

        Skeleton::new(tree, motion).unwrap()
    }

    #[test]
    fn test_written_shape() {
        let mut out = Vec::new();
        sample_skeleton().write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("HIERARCHY\nROOT Hips\n{\n"));
        assert!(text.contains("\tCHANNELS 6 Xposition"));
        assert!(text.contains("\t\tCHANNELS 3 Zrotation Yrotation Xrotation"));
        assert!(text.contains("\t\tEnd Site\n"));
        assert!(text.contains("MOTION\nFrames: 2\nFrame Time: 0.5\n"));
        // End site block carries no CHANNELS line
        let end_block = text.split("End Site").nth(1).unwrap();
        let end_block = end_block.split('}').next().unwrap();
        assert!(!end_block.contains("CHANNELS"));
    }

    #[test]
    fn test_round_trip() {
        let original = sample_skeleton();

        let mut out = Vec::new();
        original.write_to(&mut out).unwrap();
        let reparsed = parse_str(&String::from_utf8(out).unwrap()).unwrap();

        assert_eq!(reparsed.hierarchy().len(), original.hierarchy().len());
        assert_eq!(reparsed.motion().frame_count(), original.motion().frame_count());
        assert_eq!(reparsed.motion().frames(), original.motion().frames());

        for (a, b) in original
            .hierarchy()
            .iter_depth_first()
            .zip(reparsed.hierarchy().iter_depth_first())
        {
            let na = original.hierarchy().node(a).unwrap();
            let nb = reparsed.hierarchy().node(b).unwrap();
            assert_eq!(na.kind(), nb.kind());
            assert_eq!(na.name(), nb.name());
            assert_eq!(na.offset(), nb.offset());
        }
    }
}
