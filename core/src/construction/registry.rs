//! Accessible points and the primitives that produced them.

use super::types::ConstructedPrimitive;
use crate::error::{ConstructionError, ConstructionResult};
use crate::geometry::{intersect_with_tolerance, ApproxEq, Point2, EPSILON};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Points that may anchor a new primitive, in the order they became accessible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessiblePointSet {
    points: Vec<Point2>,
    tolerance: f64,
}

impl Default for AccessiblePointSet {
    fn default() -> Self {
        Self::new(EPSILON)
    }
}

impl AccessiblePointSet {
    pub fn new(tolerance: f64) -> Self {
        Self { points: Vec::new(), tolerance }
    }

    /// Adds a point unless an equal one is already present. Returns true if added.
    pub fn insert(&mut self, p: Point2) -> bool {
        if self.contains(&p) {
            return false;
        }
        self.points.push(p);
        true
    }

    pub fn contains(&self, p: &Point2) -> bool {
        self.points.iter().any(|q| q.approx_eq_eps(p, self.tolerance))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point2> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[Point2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

/// Registered primitives plus the points they make accessible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    primitives: Vec<ConstructedPrimitive>,
    points: AccessiblePointSet,
}

impl Registry {
    pub fn new(tolerance: f64) -> Self {
        Self {
            primitives: Vec::new(),
            points: AccessiblePointSet::new(tolerance),
        }
    }

    pub fn primitives(&self) -> &[ConstructedPrimitive] {
        &self.primitives
    }

    pub fn points(&self) -> &AccessiblePointSet {
        &self.points
    }

    /// Adds a given point without a backing primitive.
    pub fn seed_point(&mut self, p: Point2) -> bool {
        self.points.insert(p)
    }

    /// Fails with the first point that is not accessible.
    pub fn validate(&self, points: &[Point2]) -> ConstructionResult<()> {
        for p in points {
            if !self.points.contains(p) {
                warn!("Rejected inaccessible point ({}, {})", p.x, p.y);
                return Err(ConstructionError::InaccessiblePoint(*p));
            }
        }
        Ok(())
    }

    /// Registers a primitive: its own points and its intersections with every
    /// earlier curve become accessible. Returns the points that were new.
    ///
    /// All intersections are computed before anything is stored, so an error
    /// leaves the registry untouched.
    pub fn register(&mut self, constructed: ConstructedPrimitive) -> ConstructionResult<Vec<Point2>> {
        let primitive = constructed.primitive;
        primitive.validate()?;

        let mut candidates = primitive.intrinsic_points();
        if primitive.is_curve() {
            for other in self.primitives.iter().filter(|o| o.primitive.is_curve()) {
                candidates.extend(intersect_with_tolerance(
                    &primitive,
                    &other.primitive,
                    self.points.tolerance.max(EPSILON),
                )?);
            }
        }

        let mut added = Vec::new();
        for p in candidates {
            if self.points.insert(p) {
                added.push(p);
            }
        }

        debug!(
            "Registered {} {}: {} new accessible points ({} total)",
            primitive.kind(),
            constructed.id,
            added.len(),
            self.points.len()
        );
        self.primitives.push(constructed);
        Ok(added)
    }
}
