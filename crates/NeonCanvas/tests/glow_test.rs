use glam::Vec2;
use neon_canvas::{
    Command, CompilerConfig, GlowPass, GlowStyle, Rgba8, ShapeCompiler, Topology, render::DrawOp,
};

const MAGENTA: u32 = 0xE020C0FF;

fn compile(commands: &[Command]) -> Vec<DrawOp> {
    ShapeCompiler::default().compile(commands).unwrap().ops
}

#[test]
fn test_glow_line_emits_three_passes() {
    let start = Vec2::new(10.0, 10.0);
    let end = Vec2::new(90.0, 40.0);
    let ops = compile(&[Command::glow(vec![Command::line(start, end, MAGENTA)])]);

    assert_eq!(ops.len(), 3);

    let widths: Vec<f32> = ops.iter().map(|op| op.width).collect();
    assert_eq!(widths, vec![3.0, 2.0, 0.5]);

    let base = Rgba8::from_packed(MAGENTA);
    let colors: Vec<Rgba8> = ops.iter().map(|op| op.color).collect();
    assert_eq!(
        colors,
        vec![base.brighten(0.1), base.brighten(0.6), base.brighten(1.3)]
    );

    for op in &ops {
        assert_eq!(op.topology, Topology::Segments);
        assert_eq!(op.vertices, vec![start, end]);
        assert_eq!(op.color.a, base.a);
    }
}

#[test]
fn test_glow_passes_go_from_dim_to_bright() {
    let ops = compile(&[Command::glow(vec![Command::line(
        Vec2::ZERO,
        Vec2::ONE,
        0x4080C0FF,
    )])]);

    let value = |c: Rgba8| c.r.max(c.g).max(c.b);
    assert!(value(ops[0].color) < value(ops[1].color));
    assert!(value(ops[1].color) < value(ops[2].color));
}

#[test]
fn test_glow_non_line_shapes_pass_through() {
    let shapes = [
        Command::rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), MAGENTA),
        Command::circle(Vec2::new(5.0, 5.0), 2.0, MAGENTA),
        Command::ellipse(Vec2::new(5.0, 5.0), Vec2::new(4.0, 2.0), MAGENTA),
        Command::polygon(vec![Vec2::ZERO, Vec2::X, Vec2::Y], MAGENTA),
    ];

    for shape in shapes {
        let plain = compile(std::slice::from_ref(&shape));
        let glowing = compile(&[Command::glow(vec![shape.clone()])]);
        assert_eq!(plain, glowing, "{} should be unaffected by glow", shape.kind());
    }
}

#[test]
fn test_glow_scope_does_not_leak() {
    let line = Command::line(Vec2::ZERO, Vec2::ONE, MAGENTA);
    let ops = compile(&[
        Command::glow(vec![Command::glow(vec![line.clone()]), line.clone()]),
        line.clone(),
    ]);

    // Nested line (3) + inner line (3) + trailing top-level line (1).
    assert_eq!(ops.len(), 7);
    assert_eq!(ops[6].width, 1.0);
    assert_eq!(ops[6].color, Rgba8::from_packed(MAGENTA));

    // A fresh compile starts outside any scope again.
    let again = compile(&[line]);
    assert_eq!(again.len(), 1);
    assert_eq!(again[0].width, 1.0);
}

#[test]
fn test_nested_glow_does_not_compound() {
    let line = Command::line(Vec2::ZERO, Vec2::ONE, MAGENTA);
    let once = compile(&[Command::glow(vec![line.clone()])]);
    let thrice = compile(&[Command::glow(vec![Command::glow(vec![Command::glow(
        vec![line],
    )])])]);
    assert_eq!(once, thrice);
}

#[test]
fn test_glow_children_are_flattened_in_order() {
    let a = Command::line(Vec2::ZERO, Vec2::X, MAGENTA);
    let b = Command::rect(Vec2::ZERO, Vec2::ONE, MAGENTA);
    let ops = compile(&[Command::glow(vec![a, b])]);

    assert_eq!(ops.len(), 3 + 4);
    assert!(ops[..3].iter().all(|op| op.vertices == vec![Vec2::ZERO, Vec2::X]));
    assert!(ops[3..].iter().all(|op| op.width == 1.0));
}

#[test]
fn test_glow_all_shapes_opt_in() {
    let config = CompilerConfig {
        glow: GlowStyle {
            apply_to_all_shapes: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let compiler = ShapeCompiler::new(config).unwrap();

    let rect = compiler
        .compile(&[Command::glow(vec![Command::rect(Vec2::ZERO, Vec2::ONE, MAGENTA)])])
        .unwrap()
        .ops;
    // Every edge is stroked once per pass.
    assert_eq!(rect.len(), 4 * 3);

    let circle = compiler
        .compile(&[Command::glow(vec![Command::circle(Vec2::ZERO, 1.0, MAGENTA)])])
        .unwrap()
        .ops;
    let widths: Vec<f32> = circle.iter().map(|op| op.width).collect();
    assert_eq!(widths, vec![3.0, 2.0, 0.5]);
}

#[test]
fn test_custom_glow_passes() {
    let config = CompilerConfig {
        glow: GlowStyle {
            passes: vec![GlowPass::new(6.0, 0.2), GlowPass::new(1.0, 1.0)],
            apply_to_all_shapes: false,
        },
        ..Default::default()
    };
    let ops = ShapeCompiler::new(config)
        .unwrap()
        .compile(&[Command::glow(vec![Command::line(Vec2::ZERO, Vec2::ONE, MAGENTA)])])
        .unwrap()
        .ops;

    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0].width, 6.0);
    assert_eq!(ops[1].color, Rgba8::from_packed(MAGENTA));
}
