use crate::error::{ConstructionError, ConstructionResult};
use crate::geometry::Primitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a primitive drawn in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const RED: Color = Color::rgb(0xFC, 0x62, 0x55);
    pub const GREEN: Color = Color::rgb(0x83, 0xC1, 0x67);
    pub const BLUE: Color = Color::rgb(0x58, 0xC4, 0xDD);
    pub const YELLOW: Color = Color::rgb(0xFF, 0xFF, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Requested appearance of a primitive. The engine only carries it through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color,
    /// 0.0 (transparent) to 1.0 (opaque)
    pub opacity: f64,
}

impl Style {
    pub fn new(color: Color) -> Self {
        Self { color, opacity: 1.0 }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn validate(&self) -> ConstructionResult<()> {
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConstructionError::configuration(format!(
                "opacity must lie in [0, 1], got {}",
                self.opacity
            )));
        }
        Ok(())
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

/// Euclid's first three postulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Postulate {
    /// A straight line may be drawn from any point to any point.
    DrawLine,
    /// A finite straight line may be produced continuously.
    ExtendLine,
    /// A circle may be described with any centre and distance.
    DescribeCircle,
}

impl Postulate {
    pub fn number(&self) -> u8 {
        match self {
            Self::DrawLine => 1,
            Self::ExtendLine => 2,
            Self::DescribeCircle => 3,
        }
    }

    pub fn label(&self) -> String {
        format!("Post. {}", self.number())
    }
}

/// Why a primitive was handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Given,
    Constructed,
    /// Postulate II output; never registered.
    Extension,
    /// Transient helper (the compass arm), removed after use.
    Guide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructedPrimitive {
    pub id: EntityId,
    pub primitive: Primitive,
    pub style: Style,
    pub role: Role,
}

impl ConstructedPrimitive {
    pub fn new(primitive: Primitive, style: Style, role: Role) -> Self {
        Self { id: EntityId::new(), primitive, style, role }
    }
}

/// One entry of the step log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub postulate: Postulate,
    pub label: String,
    pub primitive: EntityId,
}

impl Step {
    pub fn new(postulate: Postulate, primitive: EntityId) -> Self {
        Self { postulate, label: postulate.label(), primitive }
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructionConfig {
    /// Distance under which two points count as the same point.
    /// `0.0` demands exact equality.
    pub tolerance: f64,
    /// How far Postulate II carries a line past its end point.
    pub extension_length: f64,
    /// Opacity factor applied to extensions to mark them as provisional.
    pub extension_opacity: f64,
    /// Color given primitives are drawn with.
    pub foreground: Color,
    /// Color of transient guides such as the compass arm.
    pub process: Color,
}

impl Default for ConstructionConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            extension_length: 15.0,
            extension_opacity: 0.5,
            foreground: Color::WHITE,
            process: Color::GREEN,
        }
    }
}

impl ConstructionConfig {
    /// Parse a (possibly partial) JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> ConstructionResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConstructionError::configuration(format!("invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConstructionResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConstructionError::configuration(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        if !self.extension_length.is_finite() || self.extension_length <= 0.0 {
            return Err(ConstructionError::configuration(format!(
                "extension_length must be positive, got {}",
                self.extension_length
            )));
        }
        if !(0.0..=1.0).contains(&self.extension_opacity) {
            return Err(ConstructionError::configuration(format!(
                "extension_opacity must lie in [0, 1], got {}",
                self.extension_opacity
            )));
        }
        Ok(())
    }
}
