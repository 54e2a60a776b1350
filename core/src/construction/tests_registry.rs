use crate::construction::registry::{AccessiblePointSet, Registry};
use crate::construction::types::{ConstructedPrimitive, Role, Style};
use crate::error::ConstructionError;
use crate::geometry::{ApproxEq, Point2, Primitive};

fn constructed(primitive: Primitive) -> ConstructedPrimitive {
    ConstructedPrimitive::new(primitive, Style::default(), Role::Constructed)
}

#[test]
fn test_point_set_dedupes_within_tolerance() {
    let mut set = AccessiblePointSet::new(1e-6);
    assert!(set.insert(Point2::new(1.0, 1.0)));
    assert!(!set.insert(Point2::new(1.0 + 1e-9, 1.0)));
    assert!(set.insert(Point2::new(1.1, 1.0)));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_zero_tolerance_is_exact() {
    let mut set = AccessiblePointSet::new(0.0);
    set.insert(Point2::new(0.5, 0.5));
    assert!(set.contains(&Point2::new(0.5, 0.5)));
    assert!(!set.contains(&Point2::new(0.5 + 1e-15, 0.5)));
}

#[test]
fn test_register_segment_adds_endpoints() {
    let mut registry = Registry::new(1e-9);
    let seg = Primitive::segment(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0)).unwrap();
    let added = registry.register(constructed(seg)).unwrap();

    assert_eq!(added, vec![Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0)]);
    assert_eq!(registry.primitives().len(), 1);
    assert!(registry.validate(&added).is_ok());
}

#[test]
fn test_register_adds_intersections_with_earlier_primitives() {
    let mut registry = Registry::new(1e-9);
    let base = Primitive::segment(Point2::new(-3.0, 0.0), Point2::new(3.0, 0.0)).unwrap();
    registry.register(constructed(base)).unwrap();

    let circle = Primitive::circle(Point2::new(0.0, 0.0), 2.0).unwrap();
    let added = registry.register(constructed(circle)).unwrap();

    // Center plus the two crossings with the base
    assert_eq!(added.len(), 3);
    assert!(added.iter().any(|p| p.approx_eq(&Point2::new(-2.0, 0.0))));
    assert!(added.iter().any(|p| p.approx_eq(&Point2::new(2.0, 0.0))));
    assert!(registry.validate(&[Point2::new(2.0, 0.0), Point2::new(-2.0, 0.0)]).is_ok());
}

#[test]
fn test_validate_reports_offending_point() {
    let mut registry = Registry::new(1e-9);
    let seg = Primitive::segment(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).unwrap();
    registry.register(constructed(seg)).unwrap();

    let missing = Point2::new(5.0, 5.0);
    let err = registry.validate(&[Point2::new(0.0, 0.0), missing]).unwrap_err();
    assert_eq!(err, ConstructionError::InaccessiblePoint(missing));
    assert_eq!(err.point(), Some(missing));
}

#[test]
fn test_free_points_do_not_intersect() {
    let mut registry = Registry::new(1e-9);
    let p = Primitive::point(Point2::new(0.0, 1.0)).unwrap();
    registry.register(constructed(p)).unwrap();

    let circle = Primitive::circle(Point2::new(0.0, 0.0), 1.0).unwrap();
    // Point primitives have no equation and are skipped, not an error
    let added = registry.register(constructed(circle)).unwrap();
    assert_eq!(added, vec![Point2::new(0.0, 0.0)]);
    assert_eq!(registry.points().len(), 2);
}

#[test]
fn test_register_rejects_malformed_primitive_without_mutation() {
    let mut registry = Registry::new(1e-9);
    let bad = Primitive::Circle { center: Point2::origin(), radius: -1.0 };
    assert!(matches!(
        registry.register(constructed(bad)),
        Err(ConstructionError::Configuration(_))
    ));
    assert!(registry.primitives().is_empty());
    assert!(registry.points().is_empty());
}
