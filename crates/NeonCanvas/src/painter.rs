use glam::Vec2;

use crate::ast::{Command, PolygonShape};
use crate::color::{Rgba8, decompose};
use crate::config::CompilerConfig;
use crate::error::CompileError;
use crate::geometry::{self, PolygonOutline};
use crate::glow::{self, GlowScope, ShapeClass};
use crate::render::{DrawOp, RenderList};

/// A recoverable problem with a single command. The command is skipped; compiling continues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Index trail to the command: top-level index first, then the index inside each enclosing
    /// glow scope.
    pub path: Vec<usize>,
    /// Kind of the offending command.
    pub kind: &'static str,
    pub message: String,
}

/// Walks the command tree and converts it into draw operations.
///
/// The `Painter` is responsible for:
/// - Dispatching each command to its tessellation routine
/// - Asking the glow engine how many strokes each shape gets
/// - Flattening nested glow scopes into one ordered display list
pub(crate) struct Painter<'a> {
    config: &'a CompilerConfig,
    draw_list: RenderList,
    diagnostics: Vec<Diagnostic>,
    path: Vec<usize>,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(config: &'a CompilerConfig) -> Self {
        Self {
            config,
            draw_list: Vec::new(),
            diagnostics: Vec::new(),
            path: Vec::new(),
        }
    }

    pub(crate) fn finish(self) -> (RenderList, Vec<Diagnostic>) {
        (self.draw_list, self.diagnostics)
    }

    /// Emits the ops for `commands` in order, under `scope`.
    pub(crate) fn paint(
        &mut self,
        commands: &[Command],
        scope: GlowScope,
    ) -> Result<(), CompileError> {
        for (index, command) in commands.iter().enumerate() {
            self.path.push(index);
            let result = self.paint_command(command, scope);
            self.path.pop();
            result?;
        }
        Ok(())
    }

    fn paint_command(&mut self, command: &Command, scope: GlowScope) -> Result<(), CompileError> {
        match command {
            Command::Line { start, end, color } => {
                self.stroke(scope, ShapeClass::Line, *color, |width, color| {
                    DrawOp::segments(width, color, vec![*start, *end])
                });
            }
            Command::Rect { pos, size, color } => {
                // Four independent segments, one op each.
                for [a, b] in geometry::rect_edges(*pos, *size) {
                    self.stroke(scope, ShapeClass::Outline, *color, |width, color| {
                        DrawOp::segments(width, color, vec![a, b])
                    });
                }
            }
            Command::Polygon { shape, color } => match shape {
                PolygonShape::Points { points } => {
                    self.paint_polygon(points, *color, scope)?;
                }
                PolygonShape::Regular {
                    center,
                    radius,
                    sides,
                    rotation,
                } => {
                    let points =
                        geometry::checked_regular_polygon(*center, *radius, *sides, *rotation)?;
                    self.paint_polygon(&points, *color, scope)?;
                }
            },
            Command::Circle {
                center,
                radius,
                color,
            } => {
                let points =
                    geometry::regular_polygon(*center, *radius, self.config.circle_segments, 0.0);
                self.paint_polygon(&points, *color, scope)?;
            }
            Command::Ellipse {
                center,
                radii,
                color,
            } => {
                let points =
                    geometry::ellipse_points(*center, *radii, self.config.ellipse_segments);
                self.stroke(scope, ShapeClass::Outline, *color, |width, color| {
                    DrawOp::line_loop(width, color, points.clone())
                });
            }
            Command::Glow { children } => {
                self.paint(children, scope.enter())?;
            }
            Command::Unknown => {
                self.skip(command, "unrecognized command kind");
            }
        }
        Ok(())
    }

    fn paint_polygon(
        &mut self,
        points: &[Vec2],
        color: u32,
        scope: GlowScope,
    ) -> Result<(), CompileError> {
        match geometry::polygon_outline(points)? {
            PolygonOutline::Loop(points) => {
                self.stroke(scope, ShapeClass::Outline, color, |width, color| {
                    DrawOp::line_loop(width, color, points.clone())
                });
            }
            PolygonOutline::Degenerate(p) => {
                self.stroke(scope, ShapeClass::Outline, color, |width, color| {
                    DrawOp::segments(width, color, vec![p, p])
                });
            }
        }
        Ok(())
    }

    /// Pushes one op per glow stroke, all sharing the same geometry.
    fn stroke(
        &mut self,
        scope: GlowScope,
        class: ShapeClass,
        color: u32,
        build: impl Fn(f32, Rgba8) -> DrawOp,
    ) {
        let strokes = glow::strokes(scope, &self.config.glow, class, decompose(color));
        self.draw_list
            .extend(strokes.into_iter().map(|s| build(s.width, s.color)));
    }

    fn skip(&mut self, command: &Command, message: &str) {
        tracing::warn!(
            path = ?self.path,
            kind = command.kind(),
            "Skipping command: {}",
            message
        );
        self.diagnostics.push(Diagnostic {
            path: self.path.clone(),
            kind: command.kind(),
            message: message.to_string(),
        });
    }
}
