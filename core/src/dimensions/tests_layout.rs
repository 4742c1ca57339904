use crate::dimensions::{
    process_measurements, AutoMeasurement, DirectMeasurement, Extent, LayoutConfig, LayoutEngine, Measurement,
    MeasurementLines, Side,
};
use crate::geometry::{OrthographicProjection, Point2, Point3, Vector2, Vector3};
use crate::tags::{Tag, TagId};

fn rect() -> Vec<Point2> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(200.0, 0.0),
        Point2::new(200.0, 100.0),
        Point2::new(0.0, 100.0),
    ]
}

fn plan() -> OrthographicProjection {
    OrthographicProjection::xy()
}

fn auto(start: [f64; 3], end: [f64; 3]) -> AutoMeasurement {
    AutoMeasurement::new(
        Point3::new(start[0], start[1], start[2]),
        Point3::new(end[0], end[1], end[2]),
    )
}

fn total_lines(out: &[MeasurementLines]) -> usize {
    out.iter().map(MeasurementLines::measurement_count).sum()
}

#[test]
fn test_degenerate_measurement_yields_nothing() {
    let out = process_measurements([auto([10.0, 10.0, 0.0], [10.0, 10.0, 0.0])], &plan(), &rect()).to_vec();
    assert!(out.is_empty());

    // Distinct in 3D, coincident once projected
    let out = process_measurements([auto([10.0, 10.0, 0.0], [10.0, 10.0, 250.0])], &plan(), &rect()).to_vec();
    assert!(out.is_empty());
}

#[test]
fn test_anti_parallel_measurements_share_a_group() {
    let out = process_measurements(
        [auto([100.0, 0.0, 0.0], [0.0, 0.0, 0.0]), auto([0.0, 0.0, 0.0], [100.0, 0.0, 0.0])],
        &plan(),
        &rect(),
    )
    .to_vec();

    assert_eq!(out.len(), 2, "one group, two sides");
    for lines in &out {
        assert_eq!(lines.direction, Vector2::new(1.0, 0.0));
    }
}

#[test]
fn test_one_horizontal_and_one_vertical_yield_four() {
    let out = process_measurements(
        [auto([0.0, 10.0, 0.0], [50.0, 10.0, 0.0]), auto([10.0, 0.0, 0.0], [10.0, 60.0, 0.0])],
        &plan(),
        &rect(),
    )
    .to_vec();
    assert_eq!(out.len(), 4);

    let single = process_measurements([auto([0.0, 10.0, 0.0], [50.0, 10.0, 0.0])], &plan(), &rect()).to_vec();
    assert_eq!(single.len(), 2);
}

#[test]
fn test_measurement_is_assigned_to_one_side() {
    let out = process_measurements([auto([0.0, 10.0, 0.0], [50.0, 10.0, 0.0])], &plan(), &rect()).to_vec();

    assert_eq!(total_lines(&out), 1);
    let left = out.iter().find(|l| l.side == Side::Left).unwrap();
    assert_eq!(left.measurement_count(), 1);
    assert_eq!(left.start.y, 0.0);
}

#[test]
fn test_duplicates_collapse_regardless_of_extent() {
    let wall = Tag::new(TagId::new_deterministic("Wall1"), "wall");
    let a = auto([0.0, 10.0, 0.0], [50.0, 10.0, 0.0]).with_tag(wall.clone());
    let b = auto([0.0, 10.0, 0.0], [50.0, 10.0, 0.0])
        .with_extent(Extent::Extend {
            primary: Vector3::new(0.0, -10.0, 0.0),
            secondary: Some(Vector3::new(0.0, 0.0, 300.0)),
        })
        .with_tag(wall);

    let out = process_measurements([a, b], &plan(), &rect()).to_vec();
    assert_eq!(total_lines(&out), 1);
}

#[test]
fn test_overlapping_intervals_use_more_rows() {
    let out = process_measurements(
        [
            auto([0.0, 10.0, 0.0], [50.0, 10.0, 0.0]),
            auto([25.0, 10.0, 0.0], [75.0, 10.0, 0.0]),
            auto([80.0, 10.0, 0.0], [130.0, 10.0, 0.0]),
        ],
        &plan(),
        &rect(),
    )
    .to_vec();
    let left = out.iter().find(|l| l.side == Side::Left).unwrap();
    assert!(left.lines.len() > 1);
    assert_eq!(left.measurement_count(), 3);

    let out = process_measurements(
        [auto([0.0, 10.0, 0.0], [50.0, 10.0, 0.0]), auto([60.0, 10.0, 0.0], [110.0, 10.0, 0.0])],
        &plan(),
        &rect(),
    )
    .to_vec();
    let left = out.iter().find(|l| l.side == Side::Left).unwrap();
    assert_eq!(left.lines.len(), 1);
    assert_eq!(left.lines[0].len(), 2);
}

#[test]
fn test_rows_never_overlap_and_stack_outward() {
    let ms: Vec<Measurement> = (0..6)
        .map(|i| {
            let x = i as f64 * 15.0;
            auto([x, 5.0, 0.0], [x + 40.0, 5.0, 0.0]).into()
        })
        .collect();
    let out = process_measurements(ms, &plan(), &rect()).to_vec();
    let left = out.iter().find(|l| l.side == Side::Left).unwrap();

    let mut previous_y = 0.0;
    for row in &left.lines {
        let y = row[0].start_on_line.y;
        assert!(y < previous_y, "each row lies further from the outline");
        previous_y = y;

        for pair in row.windows(2) {
            assert!(pair[0].end_on_line.x <= pair[1].start_on_line.x);
        }
    }
}

#[test]
fn test_tags_propagate() {
    let door = Tag::new(TagId::new_deterministic("Door7"), "opening");
    let out = process_measurements(
        [auto([120.0, 95.0, 0.0], [160.0, 95.0, 0.0]).with_tag(door.clone())],
        &plan(),
        &rect(),
    )
    .to_vec();

    let found = out.iter().flat_map(|l| l.iter_lines()).any(|line| line.tags.contains(&door));
    assert!(found);
    let right = out.iter().find(|l| l.side == Side::Right).unwrap();
    assert_eq!(right.measurement_count(), 1);
}

#[test]
fn test_z_is_discarded_by_plan_projection() {
    let out = process_measurements([auto([0.0, 0.0, 50.0], [100.0, 0.0, 150.0])], &plan(), &rect()).to_vec();
    assert_eq!(out[0].direction, Vector2::new(1.0, 0.0));
}

#[test]
fn test_empty_inputs() {
    let none: Vec<Measurement> = Vec::new();
    assert!(process_measurements(none, &plan(), &rect()).is_empty());
    assert!(process_measurements([auto([0.0, 0.0, 0.0], [10.0, 0.0, 0.0])], &plan(), &[]).is_empty());
}

#[test]
fn test_single_point_polygon_has_coincident_anchors() {
    let out = process_measurements(
        [auto([0.0, 0.0, 0.0], [10.0, 0.0, 0.0])],
        &plan(),
        &[Point2::new(5.0, 5.0)],
    )
    .to_vec();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].start, out[1].start);
    assert_eq!(total_lines(&out), 1);
}

#[test]
fn test_iteration_restarts() {
    let layout = process_measurements(
        [auto([0.0, 10.0, 0.0], [50.0, 10.0, 0.0]), auto([10.0, 0.0, 0.0], [10.0, 60.0, 0.0])],
        &plan(),
        &rect(),
    );

    let first: Vec<_> = layout.iter().collect();
    let prefix: Vec<_> = layout.iter().take(1).collect();
    let second: Vec<_> = (&layout).into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(prefix[0], first[0]);
    assert_eq!(layout.len(), first.len());
    assert_eq!(layout.into_iter().count(), first.len());
}

#[test]
fn test_empty_sides_can_be_suppressed() {
    let engine = LayoutEngine::try_new(LayoutConfig {
        emit_empty_sides: false,
        ..Default::default()
    })
    .expect("valid config");
    let layout = engine.process([auto([0.0, 10.0, 0.0], [50.0, 10.0, 0.0])], &plan(), &rect());

    let out = layout.to_vec();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].side, Side::Left);
    assert_eq!(layout.len(), 1);
}

#[test]
fn test_direct_measurements_share_rows_with_auto() {
    let direct = DirectMeasurement::new(
        Point3::new(0.0, 10.0, 0.0),
        Point3::new(50.0, 10.0, 0.0),
        "5.00",
        -4.0,
        500.0,
    );
    let measurements: Vec<Measurement> = vec![direct.into(), auto([60.0, 10.0, 0.0], [90.0, 10.0, 0.0]).into()];
    let out = process_measurements(measurements, &plan(), &rect()).to_vec();

    let left = out.iter().find(|l| l.side == Side::Left).unwrap();
    assert_eq!(left.lines.len(), 1);
    let labelled = &left.lines[0][0];
    assert_eq!(labelled.label.as_deref(), Some("5.00"));
    assert_eq!(labelled.length, 500.0);
    assert!(left.lines[0][1].label.is_none());
}

#[test]
fn test_custom_projection_closure() {
    // Elevation of a wall front: x stays, z becomes the drawing y
    let front = |p: &Point3| Point2::new(p.x, p.z);
    let out = process_measurements([auto([0.0, 0.0, 0.0], [0.0, 0.0, 80.0])], &front, &rect()).to_vec();
    assert_eq!(out[0].direction, Vector2::new(0.0, 1.0));
}
