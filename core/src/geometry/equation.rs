//! Implicit equations and x-domains of curve primitives.
//!
//! Every curve is written as `f(x, y) = 0`:
//! - non-vertical segment: `slope * (x - x1) + y1 - y`
//! - vertical segment: `x - x1`
//! - circle: `(x - a)^2 + (y - b)^2 - r^2`

use super::Primitive;
use crate::error::{ConstructionError, ConstructionResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Equation {
    /// `a*x + b*y + c = 0`
    Line { a: f64, b: f64, c: f64 },
    /// `(x - cx)^2 + (y - cy)^2 - r^2 = 0`
    Circle { cx: f64, cy: f64, r: f64 },
}

impl Equation {
    /// Value of `f(x, y)`; zero on the curve.
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        match *self {
            Self::Line { a, b, c } => a * x + b * y + c,
            Self::Circle { cx, cy, r } => (x - cx).powi(2) + (y - cy).powi(2) - r * r,
        }
    }
}

/// Closed interval `[lo, hi]` of x-values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub lo: f64,
    pub hi: f64,
}

impl Domain {
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn intersect(&self, other: &Domain) -> Option<Domain> {
        let lo = self.lo.max(other.lo);
        let hi = self.hi.min(other.hi);
        if lo <= hi {
            Some(Domain { lo, hi })
        } else {
            None
        }
    }

    pub fn contains(&self, x: f64, tol: f64) -> bool {
        x >= self.lo - tol && x <= self.hi + tol
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

fn unsupported(primitive: &Primitive) -> ConstructionError {
    ConstructionError::configuration(format!(
        "no implicit equation for a {} primitive",
        primitive.kind()
    ))
}

/// Implicit equation of a curve primitive.
pub fn equation(primitive: &Primitive) -> ConstructionResult<Equation> {
    primitive.validate()?;
    match *primitive {
        Primitive::Segment { start, end } => {
            if start.x == end.x {
                return Ok(Equation::Line { a: 1.0, b: 0.0, c: -start.x });
            }
            let slope = (end.y - start.y) / (end.x - start.x);
            Ok(Equation::Line {
                a: slope,
                b: -1.0,
                c: start.y - slope * start.x,
            })
        }
        Primitive::Circle { center, radius } => Ok(Equation::Circle {
            cx: center.x,
            cy: center.y,
            r: radius,
        }),
        Primitive::Point { .. } => Err(unsupported(primitive)),
    }
}

/// X-interval over which the primitive's equation describes the primitive.
pub fn domain(primitive: &Primitive) -> ConstructionResult<Domain> {
    primitive.validate()?;
    match *primitive {
        Primitive::Segment { start, end } => Ok(Domain::new(start.x, end.x)),
        Primitive::Circle { center, radius } => Ok(Domain::new(center.x - radius, center.x + radius)),
        Primitive::Point { .. } => Err(unsupported(primitive)),
    }
}
