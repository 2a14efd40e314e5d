use sprinklerkit_core::{LayoutError, SketchKind, SketchShape};
use sprinklerkit_layout::{generate_layout, LayoutConfig};

fn rectangle(kind: SketchKind, x0: f64, y0: f64, x1: f64, y1: f64) -> SketchShape {
    SketchShape::polygon(kind, &[(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)])
}

fn close_to(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_forty_by_thirty_end_to_end() {
    let shapes = [rectangle(SketchKind::FullSun, 0.0, 0.0, 40.0, 30.0)];
    let plan = generate_layout(&shapes, &LayoutConfig::default()).unwrap();

    let bounds = plan.bounds.unwrap();
    assert!(close_to(bounds.min_x, 0.0) && close_to(bounds.min_y, 0.0));
    assert!(close_to(bounds.max_x, 40.0) && close_to(bounds.max_y, 30.0));

    // Stage order is observable: 4 corner wedges first.
    let corner_heads = &plan.sprinklers[..4];
    for head in corner_heads {
        assert!(close_to(head.angle, 90.0));
    }
    let mut corner_positions: Vec<(i64, i64)> = corner_heads
        .iter()
        .map(|h| (h.x.round() as i64, h.y.round() as i64))
        .collect();
    corner_positions.sort_unstable();
    assert_eq!(
        corner_positions,
        vec![(0, 0), (0, 30), (40, 0), (40, 30)]
    );

    // Then 10 edge heads: 3 per 40-foot edge, 2 per 30-foot edge.
    let edge_heads = &plan.sprinklers[4..14];
    assert!(edge_heads.iter().all(|h| close_to(h.angle, 180.0)));

    // Interior fill closes the remaining center gap.
    let interior: Vec<_> = plan.sprinklers[14..].iter().collect();
    assert!(!interior.is_empty());
    assert!(interior.iter().all(|h| h.angle == 360.0 && h.direction == 0.0));
    let mut interior_positions: Vec<(i64, i64)> = interior
        .iter()
        .map(|h| (h.x.round() as i64, h.y.round() as i64))
        .collect();
    interior_positions.sort_unstable();
    assert_eq!(interior_positions, vec![(15, 15), (25, 15)]);

    // Everything stays inside the yard.
    for head in &plan.sprinklers {
        assert!(head.x >= 0.0 && head.x <= 40.0);
        assert!(head.y >= 0.0 && head.y <= 30.0);
        assert_eq!(head.radius, 10.0);
    }
    assert_eq!(plan.sprinklers.len(), 16);
}

#[test]
fn test_rectangle_coverage() {
    let shapes = [rectangle(SketchKind::FullSun, 0.0, 0.0, 40.0, 30.0)];
    let config = LayoutConfig::default();
    let plan = generate_layout(&shapes, &config).unwrap();

    // Every sample point lies within the effective radius of some head,
    // with tolerance of one grid step near the boundary.
    let reach = config.effective_radius() + 1.0;
    for xi in 0..=40 {
        for yi in 0..=30 {
            let (x, y) = (xi as f64, yi as f64);
            let covered = plan.sprinklers.iter().any(|h| {
                let dx = h.x - x;
                let dy = h.y - y;
                (dx * dx + dy * dy).sqrt() <= reach
            });
            assert!(covered, "({x}, {y}) left dry");
        }
    }
}

#[test]
fn test_idempotence() {
    let shapes = [
        rectangle(SketchKind::FullSun, 0.0, 0.0, 60.0, 30.0),
        rectangle(SketchKind::PartialShade, 0.0, 30.0, 60.0, 50.0),
        rectangle(SketchKind::Obstacle, 15.0, 10.0, 25.0, 20.0),
    ];
    let config = LayoutConfig::default();

    let first = generate_layout(&shapes, &config).unwrap();
    let second = generate_layout(&shapes, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_obstacle_excludes_placements() {
    let shapes = [
        rectangle(SketchKind::FullSun, 0.0, 0.0, 40.0, 30.0),
        rectangle(SketchKind::Obstacle, 15.0, 10.0, 25.0, 20.0),
    ];
    let plan = generate_layout(&shapes, &LayoutConfig::default()).unwrap();

    assert!(!plan.sprinklers.is_empty());
    for head in &plan.sprinklers {
        let inside_obstacle =
            head.x > 15.0 && head.x < 25.0 && head.y > 10.0 && head.y < 20.0;
        assert!(
            !inside_obstacle,
            "head at ({}, {}) sits inside the obstacle",
            head.x, head.y
        );
    }
}

#[test]
fn test_empty_input_yields_empty_plan() {
    let plan = generate_layout(&[], &LayoutConfig::default()).unwrap();
    assert!(plan.is_empty());
    assert!(plan.bounds.is_none());
}

#[test]
fn test_fully_obstructed_yard_yields_empty_plan() {
    let shapes = [
        rectangle(SketchKind::FullSun, 10.0, 10.0, 20.0, 20.0),
        rectangle(SketchKind::Obstacle, 0.0, 0.0, 30.0, 30.0),
    ];
    let plan = generate_layout(&shapes, &LayoutConfig::default()).unwrap();
    assert!(plan.is_empty());
    assert!(plan.bounds.is_none());
}

#[test]
fn test_invalid_radius_rejected() {
    let shapes = [rectangle(SketchKind::FullSun, 0.0, 0.0, 40.0, 30.0)];
    let err = generate_layout(&shapes, &LayoutConfig::with_radius(0.0)).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidConfig { .. }));

    let err = generate_layout(&shapes, &LayoutConfig::with_radius(f64::NAN)).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidConfig { .. }));
}

#[test]
fn test_invalid_overlap_rejected() {
    let shapes = [rectangle(SketchKind::FullSun, 0.0, 0.0, 40.0, 30.0)];
    let config = LayoutConfig {
        overlap_factor: 1.5,
        ..LayoutConfig::default()
    };
    assert!(matches!(
        generate_layout(&shapes, &config),
        Err(LayoutError::InvalidConfig { .. })
    ));
}

#[test]
fn test_oversized_layout_fails_fast() {
    // A fine radius on a large yard blows through the failsafe cap.
    let shapes = [rectangle(SketchKind::FullSun, 0.0, 0.0, 40.0, 30.0)];
    let config = LayoutConfig::with_radius(0.5);

    let err = generate_layout(&shapes, &config).unwrap_err();
    assert!(err.is_too_large());
}

#[test]
fn test_plan_has_no_non_finite_values() {
    let shapes = [rectangle(SketchKind::FullSun, 0.0, 0.0, 40.0, 30.0)];
    let plan = generate_layout(&shapes, &LayoutConfig::default()).unwrap();

    let bounds = plan.bounds.unwrap();
    for v in [bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y] {
        assert!(v.is_finite());
    }
    for head in &plan.sprinklers {
        for v in [head.x, head.y, head.radius, head.angle, head.direction] {
            assert!(v.is_finite());
        }
    }

    // A sanitized plan survives the JSON round trip bit-for-bit.
    let json = serde_json::to_string(&plan).unwrap();
    let back: sprinklerkit_layout::LayoutPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(plan, back);
}
