//! Strict recursive-descent parser for the hierarchy + motion grammar
//!
//! The grammar is line-oriented and whitespace-tokenized with exact,
//! case-sensitive keywords. Parsing fails fast on the first violation
//! with [`Error::Parse`] carrying the offending line and the expected
//! construct; no partial skeleton is ever returned.

use std::fs;
use std::path::Path;

use glam::Vec3;
use log::debug;

use crate::error::{Error, Result};
use crate::motion::MotionFrameStore;
use crate::skeleton::{JointHierarchy, JointId, JointKind, JointNode, Skeleton};

/// Parse a skeleton document from a string
pub fn parse_str(input: &str) -> Result<Skeleton> {
    Parser::new(input).parse()
}

/// Parse a skeleton document from a file path
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Skeleton> {
    let text = fs::read_to_string(path)?;
    parse_str(&text)
}

/// Line cursor over the input with 1-based line numbers
struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().collect(),
            pos: 0,
        }
    }

    /// Next line, or a parse error naming what was expected there
    fn next_line(&mut self, expected: &str) -> Result<(usize, &'a str)> {
        let line = self
            .lines
            .get(self.pos)
            .ok_or_else(|| Error::parse(self.pos + 1, "<end of input>", expected))?;
        self.pos += 1;
        Ok((self.pos, line))
    }
}

struct Parser<'a> {
    cursor: LineCursor<'a>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            cursor: LineCursor::new(input),
        }
    }

    fn parse(mut self) -> Result<Skeleton> {
        self.expect_keyword_line("HIERARCHY")?;

        // Root node label and name
        let (number, line) = self.cursor.next_line("ROOT <name>")?;
        let mut tokens = line.split_whitespace();
        let (Some("ROOT"), Some(name)) = (tokens.next(), tokens.next()) else {
            return Err(Error::parse(number, line, "ROOT <name>"));
        };

        let mut tree = JointHierarchy::new(JointNode::new(JointKind::Root, name));
        let root = tree.root();
        self.parse_block(&mut tree, root)?;

        self.expect_keyword_line("MOTION")?;
        let motion = self.parse_motion(&tree)?;

        debug!(
            "parsed skeleton: {} joints ({} consuming channels), {} frames at {}s",
            tree.len(),
            tree.non_end_count(),
            motion.len(),
            motion.sample_period()
        );

        Skeleton::new(tree, motion)
    }

    /// Parse one `{ ... }` block for `joint`: offset, channels (unless an
    /// End site), then child blocks until the closing brace. Children are
    /// attached to the in-progress hierarchy before further siblings are
    /// read, which fixes the depth-first channel layout order.
    fn parse_block(&mut self, tree: &mut JointHierarchy, joint: JointId) -> Result<()> {
        self.expect_keyword_line("{")?;

        // OFFSET <f> <f> <f>
        let (number, line) = self.cursor.next_line("OFFSET <x> <y> <z>")?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let offset = match tokens.as_slice() {
            ["OFFSET", x, y, z] => match (x.parse(), y.parse(), z.parse()) {
                (Ok(x), Ok(y), Ok(z)) => Vec3::new(x, y, z),
                _ => {
                    return Err(Error::parse(
                        number,
                        line,
                        "OFFSET with three floating-point values",
                    ));
                }
            },
            _ => return Err(Error::parse(number, line, "OFFSET <x> <y> <z>")),
        };

        let kind = match tree.node_mut(joint) {
            Some(node) => {
                node.set_offset(offset);
                node.kind()
            }
            None => return Err(Error::NodeNotFound(joint.index())),
        };

        // CHANNELS line, exact names in the fixed order; End sites carry none
        if kind != JointKind::End {
            self.expect_channels(kind)?;
        }

        // Child blocks until the closing brace
        loop {
            let (number, line) = self.cursor.next_line("JOINT <name>, End Site, or }")?;
            let tokens: Vec<&str> = line.split_whitespace().collect();

            let child = match tokens.as_slice() {
                ["}"] => return Ok(()),
                ["JOINT", name] => tree.add_child(joint, JointNode::new(JointKind::Joint, *name))?,
                ["End", "Site"] => tree.add_child(joint, JointNode::new(JointKind::End, "Site"))?,
                _ => return Err(Error::parse(number, line, "JOINT <name>, End Site, or }")),
            };

            self.parse_block(tree, child)?;
        }
    }

    fn expect_channels(&mut self, kind: JointKind) -> Result<()> {
        const ROOT_CHANNELS: [&str; 8] = [
            "CHANNELS",
            "6",
            "Xposition",
            "Yposition",
            "Zposition",
            "Zrotation",
            "Yrotation",
            "Xrotation",
        ];
        const JOINT_CHANNELS: [&str; 5] =
            ["CHANNELS", "3", "Zrotation", "Yrotation", "Xrotation"];

        let expected: &[&str] = if kind == JointKind::Root {
            &ROOT_CHANNELS
        } else {
            &JOINT_CHANNELS
        };

        let description = expected.join(" ");
        let (number, line) = self.cursor.next_line(&description)?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens != expected {
            return Err(Error::parse(number, line, description));
        }
        Ok(())
    }

    fn parse_motion(&mut self, tree: &JointHierarchy) -> Result<MotionFrameStore> {
        // Frames: <uint>
        let (number, line) = self.cursor.next_line("Frames: <count>")?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let frame_count: usize = match tokens.as_slice() {
            ["Frames:", count] => count
                .parse()
                .map_err(|_| Error::parse(number, line, "Frames: <count>"))?,
            _ => return Err(Error::parse(number, line, "Frames: <count>")),
        };

        // Frame Time: <float>
        let (number, line) = self.cursor.next_line("Frame Time: <seconds>")?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let sample_period: f32 = match tokens.as_slice() {
            ["Frame", "Time:", period] => period
                .parse()
                .map_err(|_| Error::parse(number, line, "Frame Time: <seconds>"))?,
            _ => return Err(Error::parse(number, line, "Frame Time: <seconds>")),
        };

        let mut store = MotionFrameStore::new(frame_count, sample_period)?;
        let expected_values = tree.channel_count();

        for _ in 0..frame_count {
            let (number, line) = self.cursor.next_line("a line of channel values")?;
            let mut frame = Vec::with_capacity(expected_values);
            for token in line.split_whitespace() {
                let value: f32 = token
                    .parse()
                    .map_err(|_| Error::parse(number, line, "space-separated channel values"))?;
                frame.push(value);
            }

            if frame.len() != expected_values {
                return Err(Error::InvalidDimension {
                    expected: expected_values,
                    found: frame.len(),
                });
            }

            store.append(frame)?;
        }

        Ok(store)
    }

    fn expect_keyword_line(&mut self, keyword: &'static str) -> Result<()> {
        let (number, line) = self.cursor.next_line(keyword)?;
        if line.trim() != keyword {
            return Err(Error::parse(number, line, keyword));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
HIERARCHY
ROOT Hips
{
\tOFFSET 0 1 0
\tCHANNELS 6 Xposition Yposition Zposition Zrotation Yrotation Xrotation
\tJOINT Spine
\t{
\t\tOFFSET 0 0.5 0
\t\tCHANNELS 3 Zrotation Yrotation Xrotation
\t\tEnd Site
\t\t{
\t\t\tOFFSET 0 0.25 0
\t\t}
\t}
}
MOTION
Frames: 2
Frame Time: 0.5
0 0 0 0 0 0 0 0 0
1 2 3 90 0 0 0 45 0
";

    #[test]
    fn test_parse_sample() {
        let skeleton = parse_str(SAMPLE).unwrap();
        let tree = skeleton.hierarchy();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.non_end_count(), 2);
        assert_eq!(tree.channel_count(), 9);

        let root = tree.node(tree.root()).unwrap();
        assert_eq!(root.kind(), JointKind::Root);
        assert_eq!(root.name(), "Hips");
        assert_eq!(root.offset(), Vec3::new(0.0, 1.0, 0.0));

        let motion = skeleton.motion();
        assert_eq!(motion.frame_count(), 2);
        assert_eq!(motion.len(), 2);
        assert!((motion.sample_period() - 0.5).abs() < 1e-6);
        assert_eq!(motion.frames()[1][3], 90.0);
    }

    #[test]
    fn test_child_order_matches_file() {
        let input = "\
HIERARCHY
ROOT Hips
{
OFFSET 0 0 0
CHANNELS 6 Xposition Yposition Zposition Zrotation Yrotation Xrotation
JOINT Left
{
OFFSET -1 0 0
CHANNELS 3 Zrotation Yrotation Xrotation
}
JOINT Right
{
OFFSET 1 0 0
CHANNELS 3 Zrotation Yrotation Xrotation
}
}
MOTION
Frames: 1
Frame Time: 0.1
0 0 0 0 0 0 0 0 0 0 0 0
";
        let skeleton = parse_str(input).unwrap();
        let tree = skeleton.hierarchy();
        let names: Vec<&str> = tree
            .iter_depth_first()
            .map(|id| tree.node(id).unwrap().name())
            .collect();
        assert_eq!(names, vec!["Hips", "Left", "Right"]);
    }

    #[test]
    fn test_missing_hierarchy_keyword() {
        let err = parse_str("MOTION\n").unwrap_err();
        match err {
            Error::Parse { line_number, expected, .. } => {
                assert_eq!(line_number, 1);
                assert_eq!(expected, "HIERARCHY");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_channel_names() {
        let input = SAMPLE.replace("CHANNELS 3 Zrotation Yrotation Xrotation", "CHANNELS 3 Xrotation Yrotation Zrotation");
        let err = parse_str(&input).unwrap_err();
        match err {
            Error::Parse { line, expected, .. } => {
                assert!(line.contains("CHANNELS 3"));
                assert!(expected.starts_with("CHANNELS 3 Zrotation"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_root_channel_count() {
        let input = SAMPLE.replace(
            "CHANNELS 6 Xposition Yposition Zposition Zrotation Yrotation Xrotation",
            "CHANNELS 3 Zrotation Yrotation Xrotation",
        );
        assert!(matches!(parse_str(&input), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_missing_opening_brace() {
        let input = SAMPLE.replacen("{", "(", 1);
        let err = parse_str(&input).unwrap_err();
        assert!(matches!(err, Error::Parse { ref expected, .. } if expected == "{"));
    }

    #[test]
    fn test_zero_frames_rejected() {
        let input = SAMPLE
            .replace("Frames: 2", "Frames: 0")
            .replace("0 0 0 0 0 0 0 0 0\n1 2 3 90 0 0 0 45 0\n", "");
        assert!(matches!(parse_str(&input), Err(Error::EmptyMotion)));
    }

    #[test]
    fn test_frame_row_arity_checked() {
        let input = SAMPLE.replace("1 2 3 90 0 0 0 45 0", "1 2 3 90 0 0");
        let err = parse_str(&input).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimension {
                expected: 9,
                found: 6
            }
        ));
    }

    #[test]
    fn test_truncated_input() {
        let input = "HIERARCHY\nROOT Hips\n{\nOFFSET 0 0 0\n";
        assert!(matches!(parse_str(input), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_end_site_must_not_carry_channels() {
        let input = SAMPLE.replace(
            "\t\t{\n\t\t\tOFFSET 0 0.25 0\n\t\t}",
            "\t\t{\n\t\t\tOFFSET 0 0.25 0\n\t\t\tCHANNELS 3 Zrotation Yrotation Xrotation\n\t\t}",
        );
        assert!(matches!(parse_str(&input), Err(Error::Parse { .. })));
    }
}
