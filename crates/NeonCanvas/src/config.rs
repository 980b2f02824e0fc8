//! # Configuration
//!
//! This module defines the configuration struct for the compiler. A config is validated once when
//! a [`ShapeCompiler`](crate::ShapeCompiler) is built and is fixed for every compile it runs.

use serde::{Deserialize, Serialize};

use crate::error::CompileError;

/// Configuration parameters for the shape compiler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Number of sides of the polygon approximating a circle. Default: 40.
    #[serde(default = "default_segments")]
    pub circle_segments: u32,
    /// Number of segments used to tessellate an ellipse. Default: 40.
    #[serde(default = "default_segments")]
    pub ellipse_segments: u32,
    /// Glow effect styling.
    #[serde(default)]
    pub glow: GlowStyle,
}

fn default_segments() -> u32 {
    40
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            circle_segments: default_segments(),
            ellipse_segments: default_segments(),
            glow: GlowStyle::default(),
        }
    }
}

impl CompilerConfig {
    /// Checks every invariant the tessellator and glow engine rely on.
    pub fn validate(&self) -> Result<(), CompileError> {
        if self.circle_segments == 0 {
            return Err(CompileError::config(
                "circle_segments",
                "must be a positive integer",
            ));
        }
        if self.ellipse_segments == 0 {
            return Err(CompileError::config(
                "ellipse_segments",
                "must be a positive integer",
            ));
        }
        self.glow.validate()
    }
}

/// Visual styling of the glow effect.
///
/// Passes are drawn in order, so the widest/dimmest should come first and the
/// narrowest/brightest last.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlowStyle {
    pub passes: Vec<GlowPass>,
    /// Give rectangles, circles, ellipses and polygons the multi-pass treatment as well.
    /// Off by default: only lines glow.
    #[serde(default)]
    pub apply_to_all_shapes: bool,
}

impl Default for GlowStyle {
    fn default() -> Self {
        Self {
            passes: vec![
                GlowPass::new(3.0, 0.1),
                GlowPass::new(2.0, 0.6),
                GlowPass::new(0.5, 1.3),
            ],
            apply_to_all_shapes: false,
        }
    }
}

impl GlowStyle {
    fn validate(&self) -> Result<(), CompileError> {
        if self.passes.is_empty() {
            return Err(CompileError::config("glow.passes", "at least one pass is required"));
        }
        for (i, pass) in self.passes.iter().enumerate() {
            if !(pass.width > 0.0 && pass.width.is_finite()) {
                return Err(CompileError::config(
                    "glow.passes",
                    format!("pass {} has non-positive width {}", i, pass.width),
                ));
            }
            if !(pass.brightness >= 0.0 && pass.brightness.is_finite()) {
                return Err(CompileError::config(
                    "glow.passes",
                    format!("pass {} has negative brightness {}", i, pass.brightness),
                ));
            }
        }
        Ok(())
    }
}

/// One stroke of the glow effect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlowPass {
    /// Stroke width in pixels.
    pub width: f32,
    /// Multiplier applied to the HSV value of the shape's color.
    pub brightness: f32,
}

impl GlowPass {
    pub const fn new(width: f32, brightness: f32) -> Self {
        Self { width, brightness }
    }
}
