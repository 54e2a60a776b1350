use super::{distance, Point2, Vector2};
use crate::error::{ConstructionError, ConstructionResult};
use serde::{Deserialize, Serialize};

/// A construction primitive.
///
/// `Point` only enters a session as given data; the postulates produce
/// segments and circles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Segment { start: Point2, end: Point2 },
    Circle { center: Point2, radius: f64 },
    Point { pos: Point2 },
}

fn check_finite(p: &Point2, what: &str) -> ConstructionResult<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(ConstructionError::configuration(format!(
            "{} has non-finite coordinates ({}, {})",
            what, p.x, p.y
        )))
    }
}

impl Primitive {
    /// Segment between two distinct points.
    pub fn segment(start: Point2, end: Point2) -> ConstructionResult<Self> {
        let seg = Self::Segment { start, end };
        seg.validate()?;
        Ok(seg)
    }

    /// Circle with a strictly positive radius.
    pub fn circle(center: Point2, radius: f64) -> ConstructionResult<Self> {
        let circle = Self::Circle { center, radius };
        circle.validate()?;
        Ok(circle)
    }

    /// Circle centered at `center` passing through `through`.
    pub fn circle_through(center: Point2, through: Point2) -> ConstructionResult<Self> {
        Self::circle(center, distance(&center, &through))
    }

    pub fn point(pos: Point2) -> ConstructionResult<Self> {
        let p = Self::Point { pos };
        p.validate()?;
        Ok(p)
    }

    /// Rejects zero-length segments, non-positive radii and non-finite input.
    pub fn validate(&self) -> ConstructionResult<()> {
        match self {
            Self::Segment { start, end } => {
                check_finite(start, "segment start")?;
                check_finite(end, "segment end")?;
                if start == end {
                    return Err(ConstructionError::configuration(format!(
                        "zero-length segment at ({}, {})",
                        start.x, start.y
                    )));
                }
                Ok(())
            }
            Self::Circle { center, radius } => {
                check_finite(center, "circle center")?;
                if !radius.is_finite() || *radius <= 0.0 {
                    return Err(ConstructionError::configuration(format!(
                        "circle radius must be positive, got {}",
                        radius
                    )));
                }
                Ok(())
            }
            Self::Point { pos } => check_finite(pos, "point"),
        }
    }

    /// Points a primitive contributes to the accessible set on its own.
    pub fn intrinsic_points(&self) -> Vec<Point2> {
        match self {
            Self::Segment { start, end } => vec![*start, *end],
            Self::Circle { center, .. } => vec![*center],
            Self::Point { pos } => vec![*pos],
        }
    }

    /// Whether the primitive has an implicit equation (segments and circles).
    pub fn is_curve(&self) -> bool {
        !matches!(self, Self::Point { .. })
    }

    pub fn endpoints(&self) -> Option<(Point2, Point2)> {
        match self {
            Self::Segment { start, end } => Some((*start, *end)),
            _ => None,
        }
    }

    /// Unit direction from start to end of a segment.
    pub fn direction(&self) -> Option<Vector2> {
        match self {
            Self::Segment { start, end } => (end - start).try_normalize(0.0),
            _ => None,
        }
    }

    /// Segment length, or circle circumference.
    pub fn length(&self) -> f64 {
        match self {
            Self::Segment { start, end } => distance(start, end),
            Self::Circle { radius, .. } => 2.0 * std::f64::consts::PI * radius,
            Self::Point { .. } => 0.0,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Segment { .. } => "segment",
            Self::Circle { .. } => "circle",
            Self::Point { .. } => "point",
        }
    }
}
