//! Euclid's Postulates I-III as session transitions.
//!
//! Each call validates its anchors, builds the new primitive, registers it,
//! logs the step and only then notifies the renderer. A failure at any point
//! before registration leaves the session exactly as it was.

use super::render::Renderer;
use super::session::ConstructionSession;
use super::types::{ConstructedPrimitive, Postulate, Role, Step, Style};
use crate::error::{ConstructionError, ConstructionResult};
use crate::geometry::{Point2, Primitive};
use tracing::info;

impl<R: Renderer> ConstructionSession<R> {
    fn log_step(&mut self, postulate: Postulate, drawn: &ConstructedPrimitive) {
        let step = Step::new(postulate, drawn.id);
        info!("{}: {} {}", step.label, drawn.primitive.kind(), drawn.id);
        self.renderer.label(&step);
        self.steps.push(step);
    }

    /// Postulate I: a straight line from any point to any point.
    pub fn draw(&mut self, start: Point2, end: Point2, style: Style) -> ConstructionResult<ConstructedPrimitive> {
        style.validate()?;
        self.registry.validate(&[start, end])?;

        let segment = Primitive::segment(start, end)?;
        let drawn = ConstructedPrimitive::new(segment, style, Role::Constructed);
        self.registry.register(drawn.clone())?;

        self.renderer.create(&drawn);
        self.log_step(Postulate::DrawLine, &drawn);
        Ok(drawn)
    }

    /// Postulate II: produce a finite line beyond its end point.
    ///
    /// The result runs from the segment's end along its direction for
    /// `extension_length`. It is kept in [`extensions`](Self::extensions) and
    /// is not registered, so its far end does not become accessible.
    pub fn extend(&mut self, segment: &Primitive, style: Style) -> ConstructionResult<ConstructedPrimitive> {
        style.validate()?;
        let (start, end) = segment.endpoints().ok_or_else(|| {
            ConstructionError::configuration(format!("cannot extend a {}", segment.kind()))
        })?;
        self.registry.validate(&[start, end])?;

        let direction = segment
            .direction()
            .ok_or_else(|| ConstructionError::configuration("cannot extend a zero-length segment"))?;
        let far = end + direction * self.config.extension_length;
        let extension = Primitive::segment(end, far)?;

        let style = style.with_opacity(style.opacity * self.config.extension_opacity);
        let drawn = ConstructedPrimitive::new(extension, style, Role::Extension);
        self.extensions.push(drawn.clone());

        self.renderer.create(&drawn);
        self.log_step(Postulate::ExtendLine, &drawn);
        Ok(drawn)
    }

    /// Postulate III: a circle with any center through any point.
    pub fn circle(&mut self, center: Point2, through: Point2, style: Style) -> ConstructionResult<ConstructedPrimitive> {
        style.validate()?;
        self.registry.validate(&[center, through])?;

        let circle = Primitive::circle_through(center, through)?;
        let arm = Primitive::segment(center, through)?;
        let drawn = ConstructedPrimitive::new(circle, style, Role::Constructed);
        self.registry.register(drawn.clone())?;

        let guide = ConstructedPrimitive::new(arm, Style::new(self.config.process), Role::Guide);
        self.renderer.create(&guide);
        self.renderer.create(&drawn);
        self.renderer.remove(&guide);
        self.log_step(Postulate::DescribeCircle, &drawn);
        Ok(drawn)
    }
}
