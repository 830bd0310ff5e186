//! The demo scene: one of every draw path, animated by time.

use std::f32::consts::TAU;

use ember_raster::{
    ColorRgba, FragmentOutput, PointOptions, PolygonOptions, Position, Renderer, Shader,
    ShaderOptions, ShaderPair, VertexOutput,
};

pub const IDENTITY: &str = "identity";
pub const BANDS: &str = "bands";
pub const GLASS: &str = "glass";
pub const CHALK: &str = "chalk";
pub const EMBER: &str = "ember";

pub fn register_shaders(renderer: &mut Renderer) {
    renderer.register_shader(
        IDENTITY,
        Shader::vertex(|input| VertexOutput {
            position: input.position.to_vec4(),
        }),
        ShaderOptions::vertex(),
    );

    // Diagonal color bands in screen space.
    renderer.register_shader(
        BANDS,
        Shader::fragment(|input| {
            let p = input.screen_position;
            FragmentOutput {
                color: ColorRgba::new(
                    0.5 + 0.5 * (p.x * 0.05).sin(),
                    0.5 + 0.5 * (p.y * 0.05).sin(),
                    0.5 + 0.5 * ((p.x + p.y) * 0.025).cos(),
                    1.0,
                ),
            }
        }),
        ShaderOptions::fragment(),
    );

    renderer.register_shader(
        GLASS,
        Shader::fragment(|_| FragmentOutput {
            color: ColorRgba::new(0.2, 0.6, 1.0, 0.5),
        }),
        ShaderOptions::fragment(),
    );

    renderer.register_shader(
        CHALK,
        Shader::fragment(|_| FragmentOutput {
            color: ColorRgba::white(),
        }),
        ShaderOptions::fragment(),
    );

    renderer.register_shader(
        EMBER,
        Shader::fragment(|_| FragmentOutput {
            color: ColorRgba::new(1.0, 0.45, 0.1, 1.0),
        }),
        ShaderOptions::fragment(),
    );
}

/// Redraws the whole scene for time `t` (seconds).
pub fn draw(renderer: &mut Renderer, t: f32) {
    renderer.clear();

    let triangle = regular_polygon([-0.35, 0.1], 0.45, 3, t * 0.8);
    renderer.draw_polygon(&triangle, &PolygonOptions::filled(ShaderPair::new(IDENTITY, BANDS)));

    // Translucent square over the triangle.
    let square = [[-0.1, -0.55], [0.6, -0.55], [0.6, 0.15], [-0.1, 0.15]].map(Position::from);
    renderer.draw_polygon(&square, &PolygonOptions::filled(ShaderPair::new(IDENTITY, GLASS)));

    renderer.draw_polygon(&star([0.5, 0.5], 0.3, 0.12, -t * 0.5), &PolygonOptions::outline(ShaderPair::new(IDENTITY, CHALK)));

    // Two points: an open segment even with fill on.
    let horizon = [[-0.9, -0.8], [0.9, -0.8]].map(Position::from);
    renderer.draw_polygon(&horizon, &PolygonOptions::filled(ShaderPair::new(IDENTITY, CHALK)));

    let ring = regular_polygon([0.0, 0.0], 0.9, 48, t * 0.25);
    renderer.draw_points(&ring, &PointOptions::new(ShaderPair::new(IDENTITY, EMBER)));
}

fn regular_polygon(center: [f32; 2], radius: f32, sides: usize, phase: f32) -> Vec<Position> {
    (0..sides)
        .map(|i| {
            let a = phase + TAU * i as f32 / sides as f32;
            Position::from([center[0] + radius * a.cos(), center[1] + radius * a.sin()])
        })
        .collect()
}

/// Five-pointed star; concave, so its fill would cover the notches.
fn star(center: [f32; 2], outer: f32, inner: f32, phase: f32) -> Vec<Position> {
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let a = phase + TAU * i as f32 / 10.0;
            Position::from([center[0] + r * a.cos(), center[1] + r * a.sin()])
        })
        .collect()
}
