//! # Rendering System
//!
//! The compiler never touches a graphics context. It outputs a display list of [`DrawOp`]s and the
//! host application (macroquad, WGPU, a GL 1.x immediate-mode context, etc.) is responsible for
//! submitting each one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgba8;

/// How the vertices of a [`DrawOp`] are connected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topology {
    /// Independent segments: vertices are taken in pairs.
    Segments,
    /// Consecutive vertices are connected and the last one joins back to the first.
    LineLoop,
}

/// A single self-contained primitive submission.
///
/// Every op carries its own stroke width and flat color; no state leaks between ops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawOp {
    /// Stroke width in pixels. Always positive.
    pub width: f32,
    /// Flat color for the whole primitive.
    pub color: Rgba8,
    pub topology: Topology,
    pub vertices: Vec<Vec2>,
}

impl DrawOp {
    pub fn segments(width: f32, color: Rgba8, vertices: Vec<Vec2>) -> Self {
        Self {
            width,
            color,
            topology: Topology::Segments,
            vertices,
        }
    }

    pub fn line_loop(width: f32, color: Rgba8, vertices: Vec<Vec2>) -> Self {
        Self {
            width,
            color,
            topology: Topology::LineLoop,
            vertices,
        }
    }

    /// The op's geometry as a flat list of `[start, end]` segments, whatever its topology.
    ///
    /// Hosts without a native line-loop primitive can draw these directly.
    pub fn edges(&self) -> Vec<[Vec2; 2]> {
        match self.topology {
            Topology::Segments => self
                .vertices
                .chunks_exact(2)
                .map(|pair| [pair[0], pair[1]])
                .collect(),
            Topology::LineLoop => {
                let n = self.vertices.len();
                (0..n)
                    .map(|i| [self.vertices[i], self.vertices[(i + 1) % n]])
                    .collect()
            }
        }
    }
}

/// The ordered display list produced by one compile.
pub type RenderList = Vec<DrawOp>;
