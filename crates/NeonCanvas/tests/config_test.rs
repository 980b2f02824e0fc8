use neon_canvas::{CompileError, CompilerConfig, GlowPass, GlowStyle, ShapeCompiler};

#[test]
fn test_defaults() {
    let config = CompilerConfig::default();
    assert_eq!(config.circle_segments, 40);
    assert_eq!(config.ellipse_segments, 40);
    assert_eq!(
        config.glow.passes,
        vec![
            GlowPass::new(3.0, 0.1),
            GlowPass::new(2.0, 0.6),
            GlowPass::new(0.5, 1.3),
        ]
    );
    assert!(!config.glow.apply_to_all_shapes);
    assert!(ShapeCompiler::new(config).is_ok());
}

#[test]
fn test_zero_segments_rejected() {
    let circle = CompilerConfig {
        circle_segments: 0,
        ..Default::default()
    };
    match ShapeCompiler::new(circle) {
        Err(CompileError::InvalidConfig { field, .. }) => assert_eq!(field, "circle_segments"),
        other => panic!("Expected InvalidConfig, got {:?}", other),
    }

    let ellipse = CompilerConfig {
        ellipse_segments: 0,
        ..Default::default()
    };
    match ShapeCompiler::new(ellipse) {
        Err(CompileError::InvalidConfig { field, .. }) => assert_eq!(field, "ellipse_segments"),
        other => panic!("Expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_bad_glow_passes_rejected() {
    let cases = [
        Vec::new(),
        vec![GlowPass::new(0.0, 1.0)],
        vec![GlowPass::new(-1.0, 1.0)],
        vec![GlowPass::new(1.0, -0.5)],
        vec![GlowPass::new(f32::NAN, 1.0)],
    ];

    for passes in cases {
        let config = CompilerConfig {
            glow: GlowStyle {
                passes: passes.clone(),
                apply_to_all_shapes: false,
            },
            ..Default::default()
        };
        assert!(
            matches!(config.validate(), Err(CompileError::InvalidConfig { .. })),
            "passes {:?} should be rejected",
            passes
        );
    }
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: CompilerConfig = serde_json::from_str(r#"{ "circle_segments": 12 }"#).unwrap();
    assert_eq!(config.circle_segments, 12);
    assert_eq!(config.ellipse_segments, 40);
    assert_eq!(config.glow, GlowStyle::default());
}

#[test]
fn test_error_messages() {
    let err = ShapeCompiler::new(CompilerConfig {
        circle_segments: 0,
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid configuration for `circle_segments`: must be a positive integer"
    );
}
