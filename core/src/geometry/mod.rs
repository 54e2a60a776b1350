use nalgebra as na;
use std::cmp::Ordering;

pub type Point2 = na::Point2<f64>;
pub type Vector2 = na::Vector2<f64>;

/// Default tolerance for solver roots and domain checks.
pub const EPSILON: f64 = 1e-9;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, EPSILON)
    }

    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        (self - other).abs() <= eps
    }
}

impl ApproxEq for Point2 {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        if eps == 0.0 {
            return self == other;
        }
        na::distance_squared(self, other) <= eps * eps
    }
}

impl ApproxEq for Vector2 {
    fn approx_eq_eps(&self, other: &Self, eps: f64) -> bool {
        (self - other).norm_squared() <= eps * eps
    }
}

pub mod primitives;
pub use primitives::*;

pub mod equation;
pub use equation::{domain, equation, Domain, Equation};

pub mod intersection;
pub use intersection::{intersect, intersect_with_tolerance};

pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
    na::distance(p1, p2)
}

/// Lexicographic (x, then y) ordering used to make solver output reproducible.
pub fn lexicographic(a: &Point2, b: &Point2) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}
