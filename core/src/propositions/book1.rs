//! Book I.

use super::Proposition;
use crate::construction::{Color, ConstructedPrimitive, ConstructionSession, Renderer, Style};
use crate::error::{ConstructionError, ConstructionResult};
use crate::geometry::{intersect_with_tolerance, Point2, EPSILON};
use tracing::info;

pub const PROPOSITION_1: Proposition = Proposition {
    book: 1,
    number: 1,
    title: "Proposition I.",
    description: "On a given finite straight line, to describe an equilateral triangle.",
};

pub const PROPOSITION_2: Proposition = Proposition {
    book: 1,
    number: 2,
    title: "Proposition II.",
    description: "From a given point, to draw a straight line equal to a given finite straight line.",
};

/// Result of [`proposition_1`].
#[derive(Debug, Clone, PartialEq)]
pub struct EquilateralTriangle {
    pub apex: Point2,
    pub circles: [ConstructedPrimitive; 2],
    pub sides: [ConstructedPrimitive; 2],
}

/// Describes an equilateral triangle on the accessible segment `ab`.
///
/// The apex is taken on the left of the direction a -> b.
pub fn proposition_1<R: Renderer>(
    session: &mut ConstructionSession<R>,
    a: Point2,
    b: Point2,
) -> ConstructionResult<EquilateralTriangle> {
    info!("{}", PROPOSITION_1);

    let blue = session.circle(a, b, Style::new(Color::BLUE))?;
    let red = session.circle(b, a, Style::new(Color::RED))?;

    let tol = session.config().tolerance.max(EPSILON);
    let ab = b - a;
    let apex = intersect_with_tolerance(&blue.primitive, &red.primitive, tol)?
        .into_iter()
        .find(|c| ab.perp(&(*c - a)) > 0.0)
        .ok_or_else(|| ConstructionError::configuration("circles on the base do not meet"))?;

    let left = session.draw(a, apex, Style::new(Color::YELLOW))?;
    let right = session.draw(b, apex, Style::new(Color::RED))?;

    Ok(EquilateralTriangle {
        apex,
        circles: [blue, red],
        sides: [left, right],
    })
}
