//! # Glow Effect Engine
//!
//! Inside a `glow` scope a shape is re-stroked several times with different widths and
//! brightness-adjusted colors. Outside one it is drawn once, 1px wide, in its own color.
//!
//! Nesting depth is a plain value threaded down the recursive compile rather than state on the
//! compiler, so a compile can never leak scope into the next one.

use crate::color::Rgba8;
use crate::config::GlowStyle;

/// Stroke width of a shape drawn without the glow treatment.
pub const BASE_WIDTH: f32 = 1.0;

/// How many glow scopes enclose the command being compiled.
///
/// Only positivity matters: nested scopes do not intensify the effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlowScope {
    depth: u32,
}

impl GlowScope {
    /// Top level, outside any glow scope.
    pub const NONE: GlowScope = GlowScope { depth: 0 };

    /// The scope seen by the children of a `glow` command.
    pub fn enter(self) -> Self {
        Self {
            depth: self.depth.saturating_add(1),
        }
    }

    pub fn is_active(self) -> bool {
        self.depth > 0
    }
}

/// Which glow treatment a shape is eligible for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeClass {
    /// Lines always get the multi-pass effect inside a scope.
    Line,
    /// Rectangles, circles, ellipses and polygons. Single pass unless
    /// [`GlowStyle::apply_to_all_shapes`] is set.
    Outline,
}

/// Width and color for one submission of a shape's geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Rgba8,
}

/// Expands one shape-draw request into the strokes to emit, in drawing order.
pub fn strokes(scope: GlowScope, style: &GlowStyle, class: ShapeClass, color: Rgba8) -> Vec<Stroke> {
    let glows = scope.is_active() && (class == ShapeClass::Line || style.apply_to_all_shapes);
    if !glows {
        return vec![Stroke {
            width: BASE_WIDTH,
            color,
        }];
    }

    style
        .passes
        .iter()
        .map(|pass| Stroke {
            width: pass.width,
            color: color.brighten(pass.brightness),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_nesting() {
        let outer = GlowScope::NONE.enter();
        let inner = outer.enter();
        assert!(!GlowScope::NONE.is_active());
        assert!(outer.is_active() && inner.is_active());
        assert_eq!(inner, GlowScope { depth: 2 });
    }

    #[test]
    fn test_nested_scope_does_not_compound() {
        let style = GlowStyle::default();
        let color = Rgba8::new(0, 200, 255, 255);
        let once = strokes(GlowScope::NONE.enter(), &style, ShapeClass::Line, color);
        let twice = strokes(GlowScope::NONE.enter().enter(), &style, ShapeClass::Line, color);
        assert_eq!(once, twice);
    }
}
