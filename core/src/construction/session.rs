use super::registry::{AccessiblePointSet, Registry};
use super::render::{NullRenderer, Renderer};
use super::types::{ConstructedPrimitive, ConstructionConfig, Role, Step, Style};
use crate::error::ConstructionResult;
use crate::geometry::{Point2, Primitive};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// State of one construction: what has been drawn, which points are
/// reachable, and the log of postulate steps.
///
/// A session starts from its givens and only grows. Start a new session
/// for every independent construction.
pub struct ConstructionSession<R: Renderer = NullRenderer> {
    pub(crate) config: ConstructionConfig,
    pub(crate) registry: Registry,
    pub(crate) steps: Vec<Step>,
    pub(crate) extensions: Vec<ConstructedPrimitive>,
    pub(crate) renderer: R,
}

/// Serializable view of a session, without its renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: ConstructionConfig,
    pub registry: Registry,
    pub steps: Vec<Step>,
    pub extensions: Vec<ConstructedPrimitive>,
}

impl ConstructionSession<NullRenderer> {
    pub fn new() -> Self {
        Self::with_renderer(NullRenderer)
    }

    pub fn with_config(config: ConstructionConfig) -> ConstructionResult<Self> {
        Self::with_config_and_renderer(config, NullRenderer)
    }
}

impl Default for ConstructionSession<NullRenderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Renderer> ConstructionSession<R> {
    pub fn with_renderer(renderer: R) -> Self {
        let config = ConstructionConfig::default();
        Self {
            registry: Registry::new(config.tolerance),
            config,
            steps: Vec::new(),
            extensions: Vec::new(),
            renderer,
        }
    }

    pub fn with_config_and_renderer(config: ConstructionConfig, renderer: R) -> ConstructionResult<Self> {
        config.validate()?;
        Ok(Self {
            registry: Registry::new(config.tolerance),
            config,
            steps: Vec::new(),
            extensions: Vec::new(),
            renderer,
        })
    }

    /// Seeds the session with given primitives. Their defining points
    /// (segment endpoints, circle centers, free points) become accessible.
    ///
    /// Every primitive is checked before any is added.
    pub fn given<I>(&mut self, primitives: I) -> ConstructionResult<Vec<ConstructedPrimitive>>
    where
        I: IntoIterator<Item = Primitive>,
    {
        let primitives: Vec<Primitive> = primitives.into_iter().collect();
        for p in &primitives {
            p.validate()?;
        }

        let style = Style::new(self.config.foreground);
        let mut given = Vec::with_capacity(primitives.len());
        for primitive in primitives {
            let drawn = ConstructedPrimitive::new(primitive, style, Role::Given);
            self.registry.register(drawn.clone())?;
            self.renderer.create(&drawn);
            given.push(drawn);
        }
        debug!("Seeded {} given primitives", given.len());
        Ok(given)
    }

    /// Seeds a single free point.
    pub fn given_point(&mut self, p: Point2) -> ConstructionResult<ConstructedPrimitive> {
        let primitive = Primitive::point(p)?;
        let mut given = self.given([primitive])?;
        Ok(given.remove(0))
    }

    pub fn is_accessible(&self, p: &Point2) -> bool {
        self.registry.points().contains(p)
    }

    /// Fails with the first inaccessible point.
    pub fn validate(&self, points: &[Point2]) -> ConstructionResult<()> {
        self.registry.validate(points)
    }

    pub fn config(&self) -> &ConstructionConfig {
        &self.config
    }

    /// Registered primitives in construction order.
    pub fn primitives(&self) -> &[ConstructedPrimitive] {
        self.registry.primitives()
    }

    pub fn points(&self) -> &AccessiblePointSet {
        self.registry.points()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_labels(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.label.as_str()).collect()
    }

    /// Lines produced by Postulate II. They are drawn but not registered.
    pub fn extensions(&self) -> &[ConstructedPrimitive] {
        &self.extensions
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config.clone(),
            registry: self.registry.clone(),
            steps: self.steps.clone(),
            extensions: self.extensions.clone(),
        }
    }
}
