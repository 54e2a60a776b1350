use euclid_core::construction::{ConstructionSession, RecordingRenderer, RenderEvent};
use euclid_core::geometry::{Point2, Primitive};
use euclid_core::propositions::book1;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

    let a = Point2::new(-1.0, 0.0);
    let b = Point2::new(1.0, 0.0);

    let mut session = ConstructionSession::with_renderer(RecordingRenderer::default());
    session.given([Primitive::segment(a, b)?])?;
    let triangle = book1::proposition_1(&mut session, a, b)?;

    println!("{}", book1::PROPOSITION_1);
    println!("apex: ({:.4}, {:.4})", triangle.apex.x, triangle.apex.y);
    for p in session.points().iter() {
        println!("accessible: ({:.4}, {:.4})", p.x, p.y);
    }
    for event in &session.renderer().events {
        match event {
            RenderEvent::Create(d) => println!("create {:?} {} {}", d.role, d.primitive.kind(), d.style.color),
            RenderEvent::Label(s) => println!("label {}", s.label),
            RenderEvent::Remove(d) => println!("remove {:?} {}", d.role, d.primitive.kind()),
        }
    }
    Ok(())
}
