//! # Scene Commands
//!
//! The already-parsed scene description consumed by the compiler. The front end that produces
//! these lives elsewhere; this crate only reads them.
//!
//! Colors are packed `0xRRGGBBAA` integers, exactly as the front end emits them.

use glam::Vec2;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One parsed shape or scope instruction.
///
/// Serialized as an internally tagged object, e.g. `{"kind": "circle", "center": [0, 0], ...}`.
/// Any entry that is not a recognizable command (a bare number, an object without `kind`, a
/// `kind` this version does not know) deserializes to [`Command::Unknown`] so that a single bad
/// entry does not reject the whole scene. A known `kind` with malformed fields is still an error.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    /// A straight segment between two points.
    Line { start: Vec2, end: Vec2, color: u32 },
    /// An axis-aligned rectangle outline with its top-left corner at `pos`.
    Rect { pos: Vec2, size: Vec2, color: u32 },
    /// A closed outline, either through explicit vertices or as a regular N-gon.
    Polygon {
        #[serde(flatten)]
        shape: PolygonShape,
        color: u32,
    },
    /// A circle outline, tessellated as a regular polygon.
    Circle { center: Vec2, radius: f32, color: u32 },
    /// An axis-aligned ellipse outline with per-axis radii.
    Ellipse { center: Vec2, radii: Vec2, color: u32 },
    /// A scope: every child is drawn with the glow treatment.
    Glow { children: Vec<Command> },
    /// An entry that is not a recognizable command. Skipped with a diagnostic.
    Unknown,
}

/// The two ways a polygon can be described.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PolygonShape {
    /// Explicit vertices, joined in order and closed back to the first.
    Points { points: Vec<Vec2> },
    /// `sides` vertices on the circle of `radius` around `center`, the first one at
    /// `rotation` radians counter-clockwise from +x.
    Regular {
        center: Vec2,
        radius: f32,
        sides: u32,
        #[serde(default)]
        rotation: f32,
    },
}

impl Command {
    pub fn line(start: Vec2, end: Vec2, color: u32) -> Self {
        Self::Line { start, end, color }
    }

    pub fn rect(pos: Vec2, size: Vec2, color: u32) -> Self {
        Self::Rect { pos, size, color }
    }

    pub fn polygon(points: impl Into<Vec<Vec2>>, color: u32) -> Self {
        Self::Polygon {
            shape: PolygonShape::Points {
                points: points.into(),
            },
            color,
        }
    }

    pub fn regular_polygon(center: Vec2, radius: f32, sides: u32, rotation: f32, color: u32) -> Self {
        Self::Polygon {
            shape: PolygonShape::Regular {
                center,
                radius,
                sides,
                rotation,
            },
            color,
        }
    }

    pub fn circle(center: Vec2, radius: f32, color: u32) -> Self {
        Self::Circle {
            center,
            radius,
            color,
        }
    }

    pub fn ellipse(center: Vec2, radii: Vec2, color: u32) -> Self {
        Self::Ellipse {
            center,
            radii,
            color,
        }
    }

    pub fn glow(children: impl Into<Vec<Command>>) -> Self {
        Self::Glow {
            children: children.into(),
        }
    }

    /// Stable name of the command kind, matching its serialized tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Line { .. } => "line",
            Command::Rect { .. } => "rect",
            Command::Polygon { .. } => "polygon",
            Command::Circle { .. } => "circle",
            Command::Ellipse { .. } => "ellipse",
            Command::Glow { .. } => "glow",
            Command::Unknown => "unknown",
        }
    }
}

/// Wire form of the recognized kinds. Children of `glow` go back through [`Command`]'s own
/// `Deserialize`, so unknown entries are tolerated at every depth.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum KnownCommand {
    Line {
        start: Vec2,
        end: Vec2,
        color: u32,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: u32,
    },
    Polygon {
        #[serde(flatten)]
        shape: PolygonShape,
        color: u32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: u32,
    },
    Ellipse {
        center: Vec2,
        radii: Vec2,
        color: u32,
    },
    Glow {
        children: Vec<Command>,
    },
}

const KNOWN_KINDS: &[&str] = &["line", "rect", "polygon", "circle", "ellipse", "glow"];

impl From<KnownCommand> for Command {
    fn from(known: KnownCommand) -> Self {
        match known {
            KnownCommand::Line { start, end, color } => Command::Line { start, end, color },
            KnownCommand::Rect { pos, size, color } => Command::Rect { pos, size, color },
            KnownCommand::Polygon { shape, color } => Command::Polygon { shape, color },
            KnownCommand::Circle {
                center,
                radius,
                color,
            } => Command::Circle {
                center,
                radius,
                color,
            },
            KnownCommand::Ellipse {
                center,
                radii,
                color,
            } => Command::Ellipse {
                center,
                radii,
                color,
            },
            KnownCommand::Glow { children } => Command::Glow { children },
        }
    }
}

impl<'de> Deserialize<'de> for Command {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let known = value
            .get("kind")
            .and_then(Value::as_str)
            .is_some_and(|kind| KNOWN_KINDS.contains(&kind));
        if !known {
            return Ok(Command::Unknown);
        }

        serde_json::from_value::<KnownCommand>(value)
            .map(Command::from)
            .map_err(de::Error::custom)
    }
}
