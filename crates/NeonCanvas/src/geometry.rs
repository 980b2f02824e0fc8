//! # Geometry Generator
//!
//! Turns shape parameters into vertex sequences. Curves are approximated with straight segments;
//! everything here is pure and deterministic for a fixed segment count.

use std::f64::consts::TAU;

use glam::Vec2;

use crate::error::CompileError;

/// Axis-aligned bounds of a set of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Smallest rect containing every point, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |r, p| Self {
            min: r.min.min(p),
            max: r.max.max(p),
        }))
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn expand(&self, amount: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(amount),
            max: self.max + Vec2::splat(amount),
        }
    }
}

/// The four edges of a rectangle outline, walking (x,y) → (x+w,y) → (x+w,y+h) → (x,y+h) → (x,y).
///
/// `pos` is the origin corner and `size` may be negative; no normalization happens.
pub fn rect_edges(pos: Vec2, size: Vec2) -> [[Vec2; 2]; 4] {
    let a = pos;
    let b = Vec2::new(pos.x + size.x, pos.y);
    let c = pos + size;
    let d = Vec2::new(pos.x, pos.y + size.y);
    [[a, b], [b, c], [c, d], [d, a]]
}

/// Vertices of a regular polygon inscribed in the circle of `radius` around `center`.
///
/// Vertex `i` sits at angle `rotation + 2π·i/sides` (radians, counter-clockwise from +x).
pub fn regular_polygon(center: Vec2, radius: f32, sides: u32, rotation: f32) -> Vec<Vec2> {
    let step = TAU / sides as f64;
    (0..sides)
        .map(|i| {
            let angle = rotation as f64 + step * i as f64;
            let offset = Vec2::new(angle.cos() as f32, angle.sin() as f32) * radius;
            center + offset
        })
        .collect()
}

/// [`regular_polygon`] for a polygon given in a scene, where a zero side count is invalid.
pub fn checked_regular_polygon(
    center: Vec2,
    radius: f32,
    sides: u32,
    rotation: f32,
) -> Result<Vec<Vec2>, CompileError> {
    if sides == 0 {
        return Err(CompileError::geometry(
            "polygon",
            "a regular polygon needs at least one side",
        ));
    }
    Ok(regular_polygon(center, radius, sides, rotation))
}

/// Tessellates an axis-aligned ellipse into `segments + 1` points.
///
/// Rather than evaluating `cos`/`sin` per vertex, a unit vector starting at (1, 0) is rotated by
/// `2π/segments` after each emitted point. The last point revisits the first so the outline closes.
pub fn ellipse_points(center: Vec2, radii: Vec2, segments: u32) -> Vec<Vec2> {
    let theta = TAU / segments as f64;
    let (sin, cos) = theta.sin_cos();

    let (mut x, mut y) = (1.0_f64, 0.0_f64);
    let mut points = Vec::with_capacity(segments as usize + 1);
    for _ in 0..=segments {
        points.push(Vec2::new(
            (x * radii.x as f64) as f32 + center.x,
            (y * radii.y as f64) as f32 + center.y,
        ));
        (x, y) = (cos * x - sin * y, sin * x + cos * y);
    }
    points
}

/// Shape of an explicit polygon outline once validated.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonOutline {
    /// Two or more vertices, to be joined into a closed loop.
    Loop(Vec<Vec2>),
    /// A single vertex: the closing edge collapses to one zero-length segment.
    Degenerate(Vec2),
}

/// Validates an explicit vertex list.
pub fn polygon_outline(points: &[Vec2]) -> Result<PolygonOutline, CompileError> {
    match points {
        [] => Err(CompileError::geometry(
            "polygon",
            "a polygon needs at least one vertex",
        )),
        [single] => Ok(PolygonOutline::Degenerate(*single)),
        _ => Ok(PolygonOutline::Loop(points.to_vec())),
    }
}
