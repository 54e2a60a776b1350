use crate::construction::{Color, ConstructionSession, Postulate, RecordingRenderer, RenderEvent, Role, Style};
use crate::error::ConstructionError;
use crate::geometry::{distance, intersect, ApproxEq, Point2, Primitive};

fn base_session() -> ConstructionSession {
    let mut session = ConstructionSession::new();
    session
        .given([Primitive::segment(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0)).unwrap()])
        .unwrap();
    session
}

#[test]
fn test_equilateral_triangle_on_base() {
    let mut session = base_session();
    let a = Point2::new(-1.0, 0.0);
    let b = Point2::new(1.0, 0.0);

    let blue = session.circle(a, b, Style::new(Color::BLUE)).unwrap();
    let red = session.circle(b, a, Style::new(Color::RED)).unwrap();

    let apexes = intersect(&blue.primitive, &red.primitive).unwrap();
    assert_eq!(apexes.len(), 2);

    for c in apexes {
        let ac = session.draw(a, c, Style::new(Color::YELLOW)).unwrap();
        let bc = session.draw(b, c, Style::new(Color::RED)).unwrap();
        assert!(ac.primitive.length().approx_eq(&2.0));
        assert!(bc.primitive.length().approx_eq(&2.0));
        assert!(distance(&a, &b).approx_eq(&ac.primitive.length()));
    }

    assert_eq!(
        session.step_labels(),
        vec!["Post. 3", "Post. 3", "Post. 1", "Post. 1", "Post. 1", "Post. 1"]
    );
}

#[test]
fn test_draw_to_inaccessible_point_is_atomic() {
    let mut session = base_session();
    let primitives_before = session.primitives().to_vec();
    let points_before = session.points().clone();

    let q = Point2::new(0.0, 5.0);
    let err = session.draw(Point2::new(-1.0, 0.0), q, Style::default()).unwrap_err();
    assert_eq!(err, ConstructionError::InaccessiblePoint(q));

    assert_eq!(session.primitives(), primitives_before.as_slice());
    assert_eq!(session.points(), &points_before);
    assert!(session.steps().is_empty());
}

#[test]
fn test_draw_zero_length_is_configuration_error() {
    let mut session = base_session();
    let a = Point2::new(-1.0, 0.0);
    let err = session.draw(a, a, Style::default()).unwrap_err();
    assert!(matches!(err, ConstructionError::Configuration(_)));
    assert_eq!(session.primitives().len(), 1);
    assert!(session.steps().is_empty());
}

#[test]
fn test_circle_through_center_is_configuration_error() {
    let mut session = base_session();
    let a = Point2::new(-1.0, 0.0);
    assert!(matches!(
        session.circle(a, a, Style::default()),
        Err(ConstructionError::Configuration(_))
    ));
    assert_eq!(session.primitives().len(), 1);
}

#[test]
fn test_circle_rejects_inaccessible_center() {
    let mut session = base_session();
    let center = Point2::new(0.0, 0.0);
    let err = session.circle(center, Point2::new(1.0, 0.0), Style::default()).unwrap_err();
    assert_eq!(err, ConstructionError::InaccessiblePoint(center));
}

#[test]
fn test_extend_vertical_segment() {
    let mut session = ConstructionSession::new();
    let seg = Primitive::segment(Point2::new(0.0, 0.0), Point2::new(0.0, 1.0)).unwrap();
    session.given([seg]).unwrap();

    let ext = session.extend(&seg, Style::default()).unwrap();
    let (start, far) = ext.primitive.endpoints().unwrap();
    assert_eq!(start, Point2::new(0.0, 1.0));
    assert_eq!(far.x, 0.0);
    assert!(far.y.approx_eq(&16.0));
}

#[test]
fn test_extend_continues_past_end_point() {
    let mut session = base_session();
    let seg = Primitive::segment(Point2::new(1.0, 0.0), Point2::new(-1.0, 0.0)).unwrap();

    let ext = session.extend(&seg, Style::new(Color::WHITE)).unwrap();
    let (start, far) = ext.primitive.endpoints().unwrap();
    assert_eq!(start, Point2::new(-1.0, 0.0));
    assert!(far.approx_eq(&Point2::new(-16.0, 0.0)));
    assert!(ext.style.opacity.approx_eq(&0.5));
    assert_eq!(ext.role, Role::Extension);
}

#[test]
fn test_extension_end_is_not_accessible() {
    let mut session = base_session();
    let seg = Primitive::segment(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0)).unwrap();
    let ext = session.extend(&seg, Style::default()).unwrap();
    let (_, far) = ext.primitive.endpoints().unwrap();

    assert!(!session.is_accessible(&far));
    assert_eq!(session.primitives().len(), 1);
    assert_eq!(session.extensions().len(), 1);
    assert_eq!(session.step_labels(), vec!["Post. 2"]);
    assert!(matches!(
        session.draw(Point2::new(1.0, 0.0), far, Style::default()),
        Err(ConstructionError::InaccessiblePoint(_))
    ));
}

#[test]
fn test_extend_requires_accessible_segment() {
    let mut session = base_session();
    let seg = Primitive::segment(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).unwrap();
    let err = session.extend(&seg, Style::default()).unwrap_err();
    assert_eq!(err, ConstructionError::InaccessiblePoint(Point2::new(0.0, 0.0)));
    assert!(session.extensions().is_empty());
    assert!(session.steps().is_empty());
}

#[test]
fn test_extend_rejects_circle() {
    let mut session = base_session();
    let circle = Primitive::circle(Point2::new(-1.0, 0.0), 2.0).unwrap();
    assert!(matches!(
        session.extend(&circle, Style::default()),
        Err(ConstructionError::Configuration(_))
    ));
}

#[test]
fn test_circle_uses_compass_guide() {
    let mut session = ConstructionSession::with_renderer(RecordingRenderer::default());
    session
        .given([Primitive::segment(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0)).unwrap()])
        .unwrap();
    let circle = session
        .circle(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0), Style::new(Color::BLUE))
        .unwrap();

    let events = &session.renderer().events;
    // given create, guide create, circle create, guide remove, label
    assert_eq!(events.len(), 5);
    let guide = match &events[1] {
        RenderEvent::Create(g) => g.clone(),
        other => panic!("Expected guide creation, got {:?}", other),
    };
    assert_eq!(guide.role, Role::Guide);
    assert_eq!(guide.style.color, session.config().process);
    assert_eq!(events[2], RenderEvent::Create(circle.clone()));
    assert_eq!(events[3], RenderEvent::Remove(guide));
    match &events[4] {
        RenderEvent::Label(step) => {
            assert_eq!(step.postulate, Postulate::DescribeCircle);
            assert_eq!(step.primitive, circle.id);
        }
        other => panic!("Expected label, got {:?}", other),
    }
}

#[test]
fn test_failed_postulate_emits_nothing() {
    let mut session = ConstructionSession::with_renderer(RecordingRenderer::default());
    assert!(session
        .draw(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Style::default())
        .is_err());
    assert!(session.renderer().events.is_empty());
}

#[test]
fn test_out_of_range_opacity_is_rejected() {
    let mut session = base_session();
    let a = Point2::new(-1.0, 0.0);
    let b = Point2::new(1.0, 0.0);

    let err = session.draw(a, b, Style::default().with_opacity(1.5)).unwrap_err();
    assert!(matches!(err, ConstructionError::Configuration(_)));
    let err = session.circle(a, b, Style::default().with_opacity(-0.1)).unwrap_err();
    assert!(matches!(err, ConstructionError::Configuration(_)));

    assert_eq!(session.primitives().len(), 1);
    assert!(session.steps().is_empty());
}
