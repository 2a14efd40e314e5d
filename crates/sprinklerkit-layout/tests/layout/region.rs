use sprinklerkit_core::{Point, SketchGeometry, SketchKind, SketchShape};
use sprinklerkit_layout::Region;

fn rectangle(kind: SketchKind, x0: f64, y0: f64, x1: f64, y1: f64) -> SketchShape {
    SketchShape::polygon(kind, &[(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)])
}

#[test]
fn test_resolve_single_rectangle() {
    let region = Region::resolve(&[rectangle(SketchKind::FullSun, 0.0, 0.0, 40.0, 30.0)]);

    assert!(!region.is_empty());
    assert_eq!(region.polygons().len(), 1);

    let bounds = region.bounds().unwrap();
    assert!((bounds.min_x - 0.0).abs() < 1e-9);
    assert!((bounds.min_y - 0.0).abs() < 1e-9);
    assert!((bounds.max_x - 40.0).abs() < 1e-9);
    assert!((bounds.max_y - 30.0).abs() < 1e-9);

    // Closing duplicate dropped during materialization.
    assert_eq!(region.polygons()[0].outer.len(), 4);
}

#[test]
fn test_resolve_empty_input() {
    let region = Region::resolve(&[]);
    assert!(region.is_empty());
    assert!(region.bounds().is_none());
}

#[test]
fn test_resolve_ignores_presentation_shapes() {
    let mut label = SketchShape::new(
        SketchKind::Label,
        SketchGeometry::Point {
            coordinates: [10.0, 20.0],
        },
    );
    label
        .properties
        .insert("text".to_string(), serde_json::Value::from("patio"));
    let slope = rectangle(SketchKind::Slope, 0.0, 0.0, 50.0, 50.0);

    let region = Region::resolve(&[label, slope]);
    assert!(region.is_empty());
}

#[test]
fn test_resolve_skips_missing_geometry() {
    let mut shape = rectangle(SketchKind::FullSun, 0.0, 0.0, 40.0, 30.0);
    shape.geometry = None;
    assert!(Region::resolve(&[shape]).is_empty());
}

#[test]
fn test_resolve_skips_degenerate_polygon() {
    let line = SketchShape::polygon(SketchKind::FullSun, &[(0.0, 0.0), (10.0, 0.0)]);
    assert!(Region::resolve(&[line]).is_empty());
}

#[test]
fn test_containment() {
    let region = Region::resolve(&[rectangle(SketchKind::FullSun, 0.0, 0.0, 40.0, 30.0)]);

    assert!(region.contains(Point::new(20.0, 15.0)));
    assert!(region.contains(Point::new(1.0, 1.0)));
    assert!(!region.contains(Point::new(50.0, 15.0)));
    assert!(!region.contains(Point::new(20.0, -5.0)));
}

#[test]
fn test_obstacle_punches_hole() {
    let region = Region::resolve(&[
        rectangle(SketchKind::FullSun, 0.0, 0.0, 40.0, 30.0),
        rectangle(SketchKind::Obstacle, 15.0, 10.0, 25.0, 20.0),
    ]);

    assert_eq!(region.polygons().len(), 1);
    assert_eq!(region.polygons()[0].holes.len(), 1);

    // Hole interior is excluded, surrounding area is not.
    assert!(!region.contains(Point::new(20.0, 15.0)));
    assert!(region.contains(Point::new(5.0, 5.0)));
    assert!(region.contains(Point::new(30.0, 25.0)));

    // Bounds are unchanged by the hole.
    let bounds = region.bounds().unwrap();
    assert!((bounds.max_x - 40.0).abs() < 1e-9);
}

#[test]
fn test_obstacle_cancels_plantable_area() {
    let region = Region::resolve(&[
        rectangle(SketchKind::FullSun, 10.0, 10.0, 20.0, 20.0),
        rectangle(SketchKind::Obstacle, 0.0, 0.0, 40.0, 40.0),
    ]);
    assert!(region.is_empty());
}

#[test]
fn test_union_of_overlapping_zones() {
    let region = Region::resolve(&[
        rectangle(SketchKind::FullSun, 0.0, 0.0, 20.0, 20.0),
        rectangle(SketchKind::PartialShade, 10.0, 0.0, 40.0, 20.0),
    ]);

    assert_eq!(region.polygons().len(), 1);
    let bounds = region.bounds().unwrap();
    assert!((bounds.max_x - 40.0).abs() < 1e-9);
    assert!(region.contains(Point::new(15.0, 10.0)));
}

#[test]
fn test_disjoint_zones() {
    let region = Region::resolve(&[
        rectangle(SketchKind::FullSun, 0.0, 0.0, 20.0, 20.0),
        rectangle(SketchKind::FullShade, 100.0, 0.0, 120.0, 20.0),
    ]);

    assert_eq!(region.polygons().len(), 2);
    assert!(region.contains(Point::new(10.0, 10.0)));
    assert!(region.contains(Point::new(110.0, 10.0)));
    assert!(!region.contains(Point::new(60.0, 10.0)));
}
