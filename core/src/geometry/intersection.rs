//! Intersection of two construction primitives.
//!
//! Both primitives are turned into implicit equations and the pair is solved
//! algebraically. Roots are then restricted to the overlap of the two
//! x-domains (and the y-extent of segments, which matters when a segment is
//! vertical and its x-domain collapses to a single value).

use super::equation::{domain, equation, Domain, Equation};
use super::{lexicographic, ApproxEq, Point2, Primitive, EPSILON};
use crate::error::ConstructionResult;
use std::cmp::Ordering;
use tracing::debug;

/// The system has infinitely many solutions (coincident lines, identical circles).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DegenerateSystem;

/// Line `a*x + b*y + c = 0` scaled so that `a^2 + b^2 = 1`.
#[derive(Debug, Clone, Copy)]
struct UnitLine {
    a: f64,
    b: f64,
    c: f64,
}

impl UnitLine {
    fn new(a: f64, b: f64, c: f64) -> Option<Self> {
        let norm = (a * a + b * b).sqrt();
        if norm == 0.0 || !norm.is_finite() {
            return None;
        }
        Some(Self { a: a / norm, b: b / norm, c: c / norm })
    }

    fn signed_distance(&self, p: Point2) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Point on the line closest to the origin.
    fn anchor(&self) -> Point2 {
        Point2::new(-self.a * self.c, -self.b * self.c)
    }
}

fn solve_line_line(l1: UnitLine, l2: UnitLine, tol: f64) -> Result<Vec<Point2>, DegenerateSystem> {
    let det = l1.a * l2.b - l2.a * l1.b;
    if det.abs() <= tol {
        // Parallel: either the same line or no common point
        if l2.signed_distance(l1.anchor()).abs() <= tol {
            return Err(DegenerateSystem);
        }
        return Ok(vec![]);
    }
    let x = (l1.b * l2.c - l2.b * l1.c) / det;
    let y = (l2.a * l1.c - l1.a * l2.c) / det;
    Ok(vec![Point2::new(x, y)])
}

fn solve_line_circle(line: UnitLine, center: Point2, r: f64, tol: f64) -> Vec<Point2> {
    let d = line.signed_distance(center);
    if d.abs() > r + tol {
        return vec![];
    }

    let foot = Point2::new(center.x - d * line.a, center.y - d * line.b);
    // Tangency is decided on r - |d|; sqrt(r^2 - d^2) magnifies rounding noise
    if r - d.abs() <= tol {
        return vec![foot];
    }
    let h = (r * r - d * d).max(0.0).sqrt();

    // Direction along the line
    let (ux, uy) = (-line.b, line.a);
    vec![
        Point2::new(foot.x + h * ux, foot.y + h * uy),
        Point2::new(foot.x - h * ux, foot.y - h * uy),
    ]
}

fn solve_circle_circle(
    c1: Point2, r1: f64,
    c2: Point2, r2: f64,
    tol: f64,
) -> Result<Vec<Point2>, DegenerateSystem> {
    if c1.approx_eq_eps(&c2, tol) {
        if r1.approx_eq_eps(&r2, tol) {
            return Err(DegenerateSystem);
        }
        // Concentric, different radii
        return Ok(vec![]);
    }

    // Subtracting the two equations leaves the radical line
    let a = 2.0 * (c2.x - c1.x);
    let b = 2.0 * (c2.y - c1.y);
    let c = c1.x * c1.x - c2.x * c2.x + c1.y * c1.y - c2.y * c2.y - r1 * r1 + r2 * r2;
    match UnitLine::new(a, b, c) {
        Some(radical) => Ok(solve_line_circle(radical, c1, r1, tol)),
        None => Ok(vec![]),
    }
}

/// Solve `e1 = 0, e2 = 0` for real `(x, y)`.
pub(crate) fn solve_system(e1: &Equation, e2: &Equation, tol: f64) -> Result<Vec<Point2>, DegenerateSystem> {
    match (*e1, *e2) {
        (Equation::Line { a: a1, b: b1, c: c1 }, Equation::Line { a: a2, b: b2, c: c2 }) => {
            match (UnitLine::new(a1, b1, c1), UnitLine::new(a2, b2, c2)) {
                (Some(l1), Some(l2)) => solve_line_line(l1, l2, tol),
                _ => Ok(vec![]),
            }
        }
        (Equation::Line { a, b, c }, Equation::Circle { cx, cy, r })
        | (Equation::Circle { cx, cy, r }, Equation::Line { a, b, c }) => {
            Ok(UnitLine::new(a, b, c)
                .map(|l| solve_line_circle(l, Point2::new(cx, cy), r, tol))
                .unwrap_or_default())
        }
        (Equation::Circle { cx: x1, cy: y1, r: r1 }, Equation::Circle { cx: x2, cy: y2, r: r2 }) => {
            solve_circle_circle(Point2::new(x1, y1), r1, Point2::new(x2, y2), r2, tol)
        }
    }
}

/// Total order on primitives so that a pair is always solved the same way
/// round, whichever argument order the caller used.
fn canonical_order(p1: &Primitive, p2: &Primitive) -> Ordering {
    fn key(p: &Primitive) -> (u8, [f64; 4]) {
        match *p {
            Primitive::Segment { start, end } => (0, [start.x, start.y, end.x, end.y]),
            Primitive::Circle { center, radius } => (1, [center.x, center.y, radius, 0.0]),
            Primitive::Point { pos } => (2, [pos.x, pos.y, 0.0, 0.0]),
        }
    }
    let (k1, k2) = (key(p1), key(p2));
    k1.0.cmp(&k2.0).then_with(|| {
        k1.1.iter()
            .zip(k2.1.iter())
            .map(|(a, b)| a.total_cmp(b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Segments are bounded in y as well; circles are fully described by their x-domain.
fn within_extent(primitive: &Primitive, p: &Point2, tol: f64) -> bool {
    match primitive {
        Primitive::Segment { start, end } => {
            let (lo, hi) = if start.y <= end.y { (start.y, end.y) } else { (end.y, start.y) };
            p.y >= lo - tol && p.y <= hi + tol
        }
        _ => true,
    }
}

/// Intersection points of two primitives, sorted by (x, y).
///
/// A degenerate pair (identical circles, overlapping collinear segments)
/// has no well-defined intersection and yields an empty result.
pub fn intersect(p1: &Primitive, p2: &Primitive) -> ConstructionResult<Vec<Point2>> {
    intersect_with_tolerance(p1, p2, EPSILON)
}

/// Same as [`intersect`] with an explicit root/domain tolerance.
pub fn intersect_with_tolerance(p1: &Primitive, p2: &Primitive, tol: f64) -> ConstructionResult<Vec<Point2>> {
    let (p1, p2) = match canonical_order(p1, p2) {
        Ordering::Greater => (p2, p1),
        _ => (p1, p2),
    };
    let (e1, e2) = (equation(p1)?, equation(p2)?);
    let (d1, d2) = (domain(p1)?, domain(p2)?);

    let widened = Domain { lo: d1.lo - tol, hi: d1.hi + tol };
    if widened.intersect(&d2).is_none() {
        return Ok(vec![]);
    }

    let roots = match solve_system(&e1, &e2, tol) {
        Ok(roots) => roots,
        Err(DegenerateSystem) => {
            debug!("Degenerate {}/{} system, no unique intersection", p1.kind(), p2.kind());
            return Ok(vec![]);
        }
    };

    let mut points: Vec<Point2> = Vec::with_capacity(roots.len());
    for root in roots {
        if !(root.x.is_finite() && root.y.is_finite()) {
            continue;
        }
        if !(d1.contains(root.x, tol) && d2.contains(root.x, tol)) {
            continue;
        }
        if !(within_extent(p1, &root, tol) && within_extent(p2, &root, tol)) {
            continue;
        }
        if points.iter().any(|p| p.approx_eq_eps(&root, tol)) {
            continue;
        }
        points.push(root);
    }

    points.sort_by(lexicographic);
    Ok(points)
}
