//! # NeonCanvas
//!
//! `neon_canvas` compiles a small declarative vector scene into an ordered display list of
//! line primitives. It is headless: it never opens a window or touches a graphics context, and
//! delegates the actual drawing to the host application.
//!
//! ## Core Architecture
//! - **AST (`src/ast.rs`)**: The parsed scene commands the compiler consumes.
//! - **Geometry (`src/geometry.rs`)**: Tessellation of rectangles, circles, ellipses and polygons.
//! - **Glow (`src/glow.rs`)**: Multi-pass stroke expansion inside `glow` scopes.
//! - **Render (`src/render.rs`)**: Outputs a list of `DrawOp`s for the host to submit.

pub mod ast;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod glow;
pub mod painter;
pub mod render;
pub mod scene;

use painter::Painter;

// Re-exports for convenience
pub use ast::{Command, PolygonShape};
pub use color::Rgba8;
pub use config::{CompilerConfig, GlowPass, GlowStyle};
pub use error::CompileError;
pub use glow::GlowScope;
pub use painter::Diagnostic;
pub use render::{DrawOp, RenderList, Topology};
pub use scene::Scene;

/// Output of one compile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Compiled {
    /// Draw operations in program order.
    pub ops: RenderList,
    /// Commands that were skipped, in the order they were encountered.
    pub diagnostics: Vec<Diagnostic>,
}

/// The main entry point for the library.
///
/// Holds a validated configuration and nothing else, so a single instance can compile any
/// number of scenes, from any number of threads.
#[derive(Clone, Debug, Default)]
pub struct ShapeCompiler {
    config: CompilerConfig,
}

impl ShapeCompiler {
    /// Creates a compiler, rejecting configurations that would make tessellation undefined.
    pub fn new(config: CompilerConfig) -> Result<Self, CompileError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Compiles a command list into draw operations.
    ///
    /// Unrecognized commands are skipped and reported in [`Compiled::diagnostics`].
    /// Invalid shape parameters abort the compile with [`CompileError::InvalidGeometry`].
    #[tracing::instrument(skip_all, fields(commands = commands.len()))]
    pub fn compile(&self, commands: &[Command]) -> Result<Compiled, CompileError> {
        let mut painter = Painter::new(&self.config);
        painter.paint(commands, GlowScope::NONE)?;
        let (ops, diagnostics) = painter.finish();

        tracing::debug!(
            ops = ops.len(),
            skipped = diagnostics.len(),
            "Compiled scene"
        );

        Ok(Compiled { ops, diagnostics })
    }

    pub fn compile_scene(&self, scene: &Scene) -> Result<Compiled, CompileError> {
        self.compile(&scene.commands)
    }
}
