use std::path::PathBuf;

use anyhow::Context;
use macroquad::prelude as mq;
use neon_canvas::geometry::Rect;
use neon_canvas::{CompilerConfig, RenderList, Scene, ShapeCompiler};
use tracing_subscriber::EnvFilter;

const DEMO_SCENE: &str = include_str!("../scenes/demo.json");
const MARGIN: f32 = 20.0;

/// Loads the scene named on the command line (or the bundled demo) and compiles it once.
fn load_display_list() -> anyhow::Result<RenderList> {
    let scene = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read scene {}", path.display()))?;
            Scene::from_json(&json)
                .with_context(|| format!("Failed to parse scene {}", path.display()))?
        }
        None => Scene::from_json(DEMO_SCENE).context("Bundled demo scene is invalid")?,
    };

    let compiler = ShapeCompiler::new(CompilerConfig::default())?;
    let compiled = compiler.compile_scene(&scene)?;
    for diagnostic in &compiled.diagnostics {
        tracing::warn!(path = ?diagnostic.path, kind = diagnostic.kind, "{}", diagnostic.message);
    }
    tracing::info!(ops = compiled.ops.len(), "Scene compiled");

    Ok(compiled.ops)
}

/// Scale and offset that fit the whole display list inside the window.
fn fit_to_screen(draw_list: &RenderList, screen: glam::Vec2) -> (f32, glam::Vec2) {
    let bounds = Rect::from_points(draw_list.iter().flat_map(|op| op.vertices.iter().copied()));
    let Some(bounds) = bounds.map(|b| b.expand(MARGIN)) else {
        return (1.0, glam::Vec2::ZERO);
    };

    let size = bounds.size().max(glam::Vec2::ONE);
    let scale = (screen.x / size.x).min(screen.y / size.y).min(1.0);
    (scale, -bounds.min * scale)
}

#[macroquad::main("NeonCanvas Playground")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let draw_list = match load_display_list() {
        Ok(list) => list,
        Err(e) => {
            tracing::error!("{:#}", e);
            return;
        }
    };

    loop {
        if mq::is_key_pressed(mq::KeyCode::Escape) {
            break;
        }

        let screen = glam::Vec2::new(mq::screen_width(), mq::screen_height());
        let (scale, offset) = fit_to_screen(&draw_list, screen);

        mq::clear_background(mq::BLACK);

        for op in &draw_list {
            let color = mq::Color::from_rgba(op.color.r, op.color.g, op.color.b, op.color.a);
            for [start, end] in op.edges() {
                let start = start * scale + offset;
                let end = end * scale + offset;
                mq::draw_line(start.x, start.y, end.x, end.y, op.width, color);
            }
        }

        mq::next_frame().await
    }
}
