//! Write → parse round-trip tests over the public API

use pretty_assertions::assert_eq;

use bvh_motion::{JointKind, parse_file, parse_str};

const WALK_SAMPLE: &str = "\
HIERARCHY
ROOT Hips
{
\tOFFSET 0 0.95 0
\tCHANNELS 6 Xposition Yposition Zposition Zrotation Yrotation Xrotation
\tJOINT LeftUpLeg
\t{
\t\tOFFSET 0.11 -0.05 0
\t\tCHANNELS 3 Zrotation Yrotation Xrotation
\t\tJOINT LeftLeg
\t\t{
\t\t\tOFFSET 0 -0.42 0
\t\t\tCHANNELS 3 Zrotation Yrotation Xrotation
\t\t\tEnd Site
\t\t\t{
\t\t\t\tOFFSET 0 -0.4 0.12
\t\t\t}
\t\t}
\t}
\tJOINT RightUpLeg
\t{
\t\tOFFSET -0.11 -0.05 0
\t\tCHANNELS 3 Zrotation Yrotation Xrotation
\t\tEnd Site
\t\t{
\t\t\tOFFSET 0 -0.82 0.12
\t\t}
\t}
}
MOTION
Frames: 3
Frame Time: 0.033333
0 0.95 0 0 0 0 10 0 -20 5 0 10 -10 0 20
0.01 0.94 0.05 0 1.5 0 -25 0 30 -5 0 -10 25 0 -30
0.02 0.95 0.1 0 3 0 10 0 -20 5 0 10 -10 0 20
";

#[test]
fn round_trip_preserves_everything() {
    let original = parse_str(WALK_SAMPLE).unwrap();

    let mut written = Vec::new();
    original.write_to(&mut written).unwrap();
    let reparsed = parse_str(&String::from_utf8(written).unwrap()).unwrap();

    // Identical node count, kinds, names, and exact offsets
    assert_eq!(reparsed.hierarchy().len(), original.hierarchy().len());
    let pairs = original
        .hierarchy()
        .iter_depth_first()
        .zip(reparsed.hierarchy().iter_depth_first());
    for (a, b) in pairs {
        let na = original.hierarchy().node(a).unwrap();
        let nb = reparsed.hierarchy().node(b).unwrap();
        assert_eq!(na.kind(), nb.kind());
        assert_eq!(na.name(), nb.name());
        assert_eq!(na.offset(), nb.offset());
        assert_eq!(na.children().len(), nb.children().len());
    }

    // Identical frame metadata and exact frame values
    assert_eq!(
        reparsed.motion().frame_count(),
        original.motion().frame_count()
    );
    assert_eq!(
        reparsed.motion().sample_period(),
        original.motion().sample_period()
    );
    assert_eq!(reparsed.motion().frames(), original.motion().frames());
}

#[test]
fn round_trip_is_stable_after_one_pass() {
    // A written document re-parses and re-writes to identical bytes
    let first = parse_str(WALK_SAMPLE).unwrap();
    let mut pass_one = Vec::new();
    first.write_to(&mut pass_one).unwrap();

    let second = parse_str(&String::from_utf8(pass_one.clone()).unwrap()).unwrap();
    let mut pass_two = Vec::new();
    second.write_to(&mut pass_two).unwrap();

    assert_eq!(pass_one, pass_two);
}

#[test]
fn round_trip_through_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bvh");

    let original = parse_str(WALK_SAMPLE).unwrap();
    original.write_to_file(&path).unwrap();

    let reparsed = parse_file(&path).unwrap();
    assert_eq!(reparsed.hierarchy().len(), original.hierarchy().len());
    assert_eq!(reparsed.motion().frames(), original.motion().frames());
}

#[test]
fn parsed_structure_matches_document() {
    let skeleton = parse_str(WALK_SAMPLE).unwrap();
    let tree = skeleton.hierarchy();

    let names: Vec<&str> = tree
        .iter_depth_first()
        .map(|id| tree.node(id).unwrap().name())
        .collect();
    assert_eq!(
        names,
        vec!["Hips", "LeftUpLeg", "LeftLeg", "Site", "RightUpLeg", "Site"]
    );

    let kinds: Vec<JointKind> = tree
        .iter_depth_first()
        .map(|id| tree.node(id).unwrap().kind())
        .collect();
    assert_eq!(kinds[0], JointKind::Root);
    assert_eq!(kinds[3], JointKind::End);

    // Root translation plus 3 rotation values for each of the 4 joints
    assert_eq!(tree.non_end_count(), 4);
    assert_eq!(tree.channel_count(), 15);
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = parse_file("/nonexistent/definitely-missing.bvh").unwrap_err();
    assert!(matches!(err, bvh_motion::Error::Io(_)));
}
