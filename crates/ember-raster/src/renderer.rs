use crate::coords::Position;
use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::options::{PointOptions, PolygonOptions, ShaderPair};
use crate::present::{Frame, Presenter};
use crate::raster::{RowCoverage, fill_spans, project, project_segment, rasterize_line};
use crate::shader::{FragmentShader, Shader, ShaderOptions, ShaderRegistry, VertexShader};
use crate::target::PixelBuffer;

/// Software renderer: shader registry + pixel buffer + draw entry points.
///
/// Draw calls never fail. Anything that cannot be drawn is skipped, and problems worth
/// surfacing go to the diagnostic sink.
pub struct Renderer {
    buffer: PixelBuffer,
    shaders: ShaderRegistry,
    sink: Box<dyn DiagnosticSink>,
}

impl Renderer {
    /// Creates a renderer with a zeroed `width x height` buffer, logging diagnostics
    /// through `log`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_sink(width, height, LogSink)
    }

    pub fn with_sink(width: u32, height: u32, sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            buffer: PixelBuffer::new(width, height),
            shaders: ShaderRegistry::new(),
            sink: Box::new(sink),
        }
    }

    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[inline]
    pub fn shaders(&self) -> &ShaderRegistry {
        &self.shaders
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.buffer.width(), self.buffer.height())
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Matches the buffer to a new surface size. Previous contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("renderer resize: {}x{} -> {width}x{height}", self.buffer.width(), self.buffer.height());
        self.buffer.resize(width, height);
    }

    /// Registers `shader` under `name`. The first registration of a name per kind wins.
    pub fn register_shader(&mut self, name: impl Into<String>, shader: Shader, options: ShaderOptions) {
        self.shaders.register(name, shader, &options, self.sink.as_mut());
    }

    pub fn vertex_shader(&self, name: &str) -> Option<VertexShader> {
        self.shaders.vertex_shader(name)
    }

    pub fn fragment_shader(&self, name: &str) -> Option<FragmentShader> {
        self.shaders.fragment_shader(name)
    }

    /// Draws one pixel per point.
    ///
    /// Points that are non-finite before or after the vertex stage, or that land
    /// outside the clip square, are skipped.
    pub fn draw_points(&mut self, points: &[Position], options: &PointOptions) {
        if points.is_empty() {
            return;
        }

        let Some((vs, fs)) = self.resolve_shaders(&options.shader) else {
            return;
        };

        let viewport = self.buffer.viewport();
        for &point in points {
            let Some(v) = project(point, &vs, viewport) else {
                continue;
            };
            if !v.in_clip_square() {
                continue;
            }

            self.buffer.write_fragment(v.screen.x as i64, v.screen.y as i64, &fs);
        }
    }

    /// Draws a polygon outline, and its interior when `options.fill` is set.
    ///
    /// - two points: a single open segment, never filled
    /// - otherwise: the closed loop `p[i] -> p[(i + 1) % n]`
    ///
    /// The fill is one span per row between the extreme edge pixels, so concave
    /// regions are filled across.
    pub fn draw_polygon(&mut self, points: &[Position], options: &PolygonOptions) {
        let mut coverage = RowCoverage::new();

        if points.is_empty() {
            return;
        }

        let Some((vs, fs)) = self.resolve_shaders(&options.shader) else {
            return;
        };

        let viewport = self.buffer.viewport();
        let extent = self.buffer.extent();
        let buffer = &mut self.buffer;
        let mut plot = |x: i64, y: i64| buffer.write_fragment(x, y, &fs);

        if let &[a, b] = points {
            if let Some((pa, pb)) = project_segment(a, b, &vs, viewport) {
                rasterize_line(pa.screen, pb.screen, extent, &mut coverage, &mut plot);
            }
            return;
        }

        let n = points.len();
        for (i, &a) in points.iter().enumerate() {
            let b = points[(i + 1) % n];
            let Some((pa, pb)) = project_segment(a, b, &vs, viewport) else {
                continue;
            };
            rasterize_line(pa.screen, pb.screen, extent, &mut coverage, &mut plot);
        }

        if options.fill {
            fill_spans(&coverage, extent, &mut plot);
        }
    }

    /// Hands the current buffer to `presenter`. A presenter error is reported to the
    /// diagnostic sink, never returned.
    pub fn render<P>(&mut self, presenter: &mut P)
    where
        P: Presenter + ?Sized,
    {
        let frame = Frame {
            pixels: self.buffer.as_bytes(),
            width: self.buffer.width(),
            height: self.buffer.height(),
        };

        if let Err(err) = presenter.present(frame) {
            self.sink.warn(&Diagnostic::PresentFailed {
                reason: format!("{err:#}"),
            });
        }
    }

    fn resolve_shaders(&mut self, pair: &ShaderPair) -> Option<(VertexShader, FragmentShader)> {
        let vs = self.shaders.vertex_shader(&pair.vertex);
        let fs = self.shaders.fragment_shader(&pair.fragment);

        match (vs, fs) {
            (Some(vs), Some(fs)) => Some((vs, fs)),
            (vs, fs) => {
                self.sink.warn(&Diagnostic::ShadersMissing {
                    vertex: vs.is_none().then(|| pair.vertex.clone()),
                    fragment: fs.is_none().then(|| pair.fragment.clone()),
                });
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::coords::{ColorRgba, Vec4};
    use crate::present::FrameCapture;
    use crate::raster::Extent;
    use crate::shader::{FragmentOutput, VertexOutput};

    type Seen = Arc<Mutex<Vec<Diagnostic>>>;

    fn setup(w: u32, h: u32) -> (Renderer, Seen) {
        let seen: Seen = Arc::default();
        let sink = seen.clone();
        let mut r = Renderer::with_sink(w, h, move |d: &Diagnostic| sink.lock().unwrap().push(d.clone()));

        r.register_shader(
            "clip",
            Shader::vertex(|input| VertexOutput { position: input.position.to_vec4() }),
            ShaderOptions::vertex(),
        );
        r.register_shader(
            "white",
            Shader::fragment(|_| FragmentOutput { color: ColorRgba::white() }),
            ShaderOptions::fragment(),
        );
        r.register_shader(
            "black",
            Shader::fragment(|_| FragmentOutput { color: ColorRgba::black() }),
            ShaderOptions::fragment(),
        );
        r.register_shader(
            "half_red",
            Shader::fragment(|_| FragmentOutput { color: ColorRgba::new(1.0, 0.0, 0.0, 0.5) }),
            ShaderOptions::fragment(),
        );
        (r, seen)
    }

    fn pair(fragment: &str) -> ShaderPair {
        ShaderPair::new("clip", fragment)
    }

    fn points(fragment: &str) -> PointOptions {
        PointOptions::new(pair(fragment))
    }

    /// Maps screen pixel `(sx, sy)` of a `size x size` target to clip space.
    fn at(sx: f32, sy: f32, size: f32) -> Position {
        Position::from([sx / size * 2.0 - 1.0, 1.0 - sy / size * 2.0])
    }

    fn lit(r: &Renderer) -> BTreeSet<(i64, i64)> {
        let (w, h) = r.size();
        let mut out = BTreeSet::new();
        for y in 0..i64::from(h) {
            for x in 0..i64::from(w) {
                if r.buffer().pixel(x, y).is_some_and(|p| p[3] != 0) {
                    out.insert((x, y));
                }
            }
        }
        out
    }

    // ── registration ──────────────────────────────────────────────────────

    #[test]
    fn reregistering_keeps_first_shader() {
        let (mut r, _) = setup(4, 4);
        r.register_shader(
            "clip",
            Shader::vertex(|_| VertexOutput { position: Vec4::new(9.0, 9.0, 0.0, 1.0) }),
            ShaderOptions::vertex(),
        );

        let vs = r.vertex_shader("clip").unwrap();
        let out = vs(crate::shader::VertexInput { position: Position::from([0.25, 0.5]) });
        assert_eq!(out.position, Vec4::new(0.25, 0.5, 0.0, 1.0));
    }

    #[test]
    fn registration_without_kind_warns_through_sink() {
        let (mut r, seen) = setup(4, 4);
        r.register_shader(
            "anon",
            Shader::vertex(|input| VertexOutput { position: input.position.to_vec4() }),
            ShaderOptions::default(),
        );

        assert!(r.vertex_shader("anon").is_some());
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Diagnostic::ShaderKindMissing { name: "anon".into() }]
        );
    }

    #[test]
    fn renderer_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Renderer>();
    }

    // ── draw_points ───────────────────────────────────────────────────────

    #[test]
    fn origin_point_paints_center_pixel() {
        let (mut r, _) = setup(10, 10);
        r.draw_points(&[Position::from([0.0, 0.0])], &points("white"));

        assert_eq!(lit(&r), BTreeSet::from([(5, 5)]));
        assert_eq!(r.buffer().pixel(5, 5), Some([255, 255, 255, 255]));
    }

    #[test]
    fn nan_point_leaves_buffer_untouched() {
        let (mut r, seen) = setup(8, 8);
        r.draw_points(&[Position::from([f32::NAN, 0.0])], &points("white"));

        assert!(lit(&r).is_empty());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn non_finite_vertex_output_is_skipped() {
        let (mut r, _) = setup(8, 8);
        r.register_shader(
            "explode",
            Shader::vertex(|_| VertexOutput { position: Vec4::new(0.0, f32::NAN, 0.0, 1.0) }),
            ShaderOptions::vertex(),
        );
        r.draw_points(
            &[Position::from([0.0, 0.0])],
            &PointOptions::new(ShaderPair::new("explode", "white")),
        );
        assert!(lit(&r).is_empty());
    }

    #[test]
    fn points_outside_clip_square_are_culled() {
        let (mut r, _) = setup(8, 8);
        r.draw_points(
            &[Position::from([1.5, 0.0]), Position::from([0.0, -1.01]), Position::from([0.5, 0.5])],
            &points("white"),
        );
        assert_eq!(lit(&r), BTreeSet::from([(6, 2)]));
    }

    #[test]
    fn clip_edge_point_lands_past_buffer_and_is_dropped() {
        let (mut r, _) = setup(8, 8);
        // x = 1 maps to column 8, one past the last.
        r.draw_points(&[Position::from([1.0, 0.0])], &points("white"));
        assert!(lit(&r).is_empty());
    }

    #[test]
    fn point_accepts_three_and_four_components() {
        let (mut r, _) = setup(8, 8);
        r.draw_points(
            &[Position::from([0.0, 0.0, 0.3]), Position::from([-0.5, 0.5, 0.0, 1.0])],
            &points("white"),
        );
        assert_eq!(lit(&r), BTreeSet::from([(2, 2), (4, 4)]));
    }

    #[test]
    fn empty_point_list_does_not_resolve_shaders() {
        let (mut r, seen) = setup(4, 4);
        r.draw_points(&[], &PointOptions::new(ShaderPair::new("nope", "nope")));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_shader_aborts_points_with_warning() {
        let (mut r, seen) = setup(8, 8);
        r.draw_points(&[Position::from([0.0, 0.0])], &points("missing"));

        assert!(lit(&r).is_empty());
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Diagnostic::ShadersMissing { vertex: None, fragment: Some("missing".into()) }]
        );
    }

    // ── blending ──────────────────────────────────────────────────────────

    #[test]
    fn half_red_over_opaque_black() {
        let (mut r, _) = setup(4, 4);
        let p = [Position::from([0.0, 0.0])];
        r.draw_points(&p, &points("black"));
        r.draw_points(&p, &points("half_red"));

        assert_eq!(r.buffer().pixel(2, 2), Some([127, 0, 0, 255]));
    }

    // ── draw_polygon ──────────────────────────────────────────────────────

    #[test]
    fn two_points_draw_one_open_segment_even_when_filled() {
        let (mut r, _) = setup(16, 16);
        let (a, b) = (at(2.0, 3.0, 16.0), at(13.0, 9.0, 16.0));
        r.draw_polygon(&[a, b], &PolygonOptions::filled(pair("white")));

        let mut expected = BTreeSet::new();
        let mut cov = RowCoverage::new();
        rasterize_line(
            crate::coords::Vec2::new(2.0, 3.0),
            crate::coords::Vec2::new(13.0, 9.0),
            Extent::new(16, 16),
            &mut cov,
            |x, y| {
                expected.insert((x, y));
            },
        );
        assert_eq!(lit(&r), expected);
    }

    #[test]
    fn filled_right_triangle_rows_span_edge_extremes() {
        let (mut r, _) = setup(16, 16);
        let screen = [(2.0, 2.0), (12.0, 2.0), (2.0, 12.0)];
        let tri: Vec<Position> = screen.iter().map(|&(x, y)| at(x, y, 16.0)).collect();
        r.draw_polygon(&tri, &PolygonOptions::filled(pair("white")));

        let mut cov = RowCoverage::new();
        for i in 0..3 {
            let (a, b) = (screen[i], screen[(i + 1) % 3]);
            rasterize_line(
                crate::coords::Vec2::new(a.0, a.1),
                crate::coords::Vec2::new(b.0, b.1),
                Extent::new(16, 16),
                &mut cov,
                |_, _| {},
            );
        }

        let painted = lit(&r);
        for y in 0..16 {
            let row: Vec<i64> = painted.iter().filter(|p| p.1 == y).map(|p| p.0).collect();
            match cov.span(y) {
                Some(span) => assert_eq!(row, (span.min..=span.max).collect::<Vec<_>>(), "row {y}"),
                None => assert!(row.is_empty(), "row {y}"),
            }
        }
        assert_eq!(cov.row_range(), Some((2, 12)));
    }

    #[test]
    fn outline_triangle_leaves_interior_empty() {
        let (mut r, _) = setup(16, 16);
        let tri = [at(2.0, 2.0, 16.0), at(12.0, 2.0, 16.0), at(2.0, 12.0, 16.0)];
        r.draw_polygon(&tri, &PolygonOptions::outline(pair("white")));

        let painted = lit(&r);
        assert!(painted.contains(&(2, 7)));
        assert!(!painted.contains(&(4, 4)));
    }

    #[test]
    fn concave_notch_is_filled_across() {
        let (mut r, _) = setup(16, 16);
        // Arrowhead with its notch at the top; (8, 4) lies outside the true shape.
        let arrow = [at(2.0, 2.0, 16.0), at(8.0, 8.0, 16.0), at(14.0, 2.0, 16.0), at(8.0, 14.0, 16.0)];

        r.draw_polygon(&arrow, &PolygonOptions::outline(pair("white")));
        assert!(!lit(&r).contains(&(8, 4)));

        r.draw_polygon(&arrow, &PolygonOptions::filled(pair("white")));
        assert!(lit(&r).contains(&(8, 4)));
    }

    #[test]
    fn coverage_does_not_leak_between_calls() {
        let (mut r, _) = setup(16, 16);
        // Left edge only: a degenerate "polygon" along x = 2.
        let left = [at(2.0, 2.0, 16.0), at(2.0, 12.0, 16.0), at(2.0, 7.0, 16.0)];
        let right = [at(12.0, 2.0, 16.0), at(12.0, 12.0, 16.0), at(12.0, 7.0, 16.0)];
        r.draw_polygon(&left, &PolygonOptions::filled(pair("white")));
        r.draw_polygon(&right, &PolygonOptions::filled(pair("white")));

        assert!(!lit(&r).contains(&(7, 7)));
    }

    #[test]
    fn single_point_polygon_draws_one_pixel() {
        let (mut r, _) = setup(8, 8);
        r.draw_polygon(&[Position::from([0.0, 0.0])], &PolygonOptions::filled(pair("white")));
        assert_eq!(lit(&r), BTreeSet::from([(4, 4)]));
    }

    #[test]
    fn edge_with_both_ends_outside_is_skipped() {
        let (mut r, _) = setup(16, 16);
        // The top edge runs from (-8, 4) to (24, 4): both ends outside, so it is culled
        // even though it crosses the target.
        let quad = [at(-8.0, 4.0, 16.0), at(24.0, 4.0, 16.0), at(8.0, 12.0, 16.0)];
        r.draw_polygon(&quad, &PolygonOptions::outline(pair("white")));

        let painted = lit(&r);
        assert!(!painted.contains(&(8, 4)));
        assert!(painted.contains(&(8, 12)));
    }

    #[test]
    fn nan_vertex_drops_only_its_edges() {
        let (mut r, _) = setup(16, 16);
        let poly = [
            at(2.0, 2.0, 16.0),
            at(12.0, 2.0, 16.0),
            Position::from([f32::NAN, 0.0]),
            at(2.0, 12.0, 16.0),
        ];
        r.draw_polygon(&poly, &PolygonOptions::outline(pair("white")));

        let painted = lit(&r);
        assert!(painted.contains(&(7, 2)));
        assert!(painted.contains(&(2, 7)));
    }

    #[test]
    fn missing_vertex_shader_aborts_polygon() {
        let (mut r, seen) = setup(8, 8);
        let tri = [at(1.0, 1.0, 8.0), at(6.0, 1.0, 8.0), at(1.0, 6.0, 8.0)];
        r.draw_polygon(&tri, &PolygonOptions::filled(ShaderPair::new("nope", "white")));

        assert!(lit(&r).is_empty());
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Diagnostic::ShadersMissing { vertex: Some("nope".into()), fragment: None }]
        );
    }

    #[test]
    fn empty_polygon_is_a_no_op() {
        let (mut r, seen) = setup(8, 8);
        r.draw_polygon(&[], &PolygonOptions::filled(ShaderPair::new("nope", "nope")));
        assert!(lit(&r).is_empty());
        assert!(seen.lock().unwrap().is_empty());
    }

    // ── clear / resize / render ───────────────────────────────────────────

    #[test]
    fn clear_erases_drawing() {
        let (mut r, _) = setup(8, 8);
        r.draw_points(&[Position::from([0.0, 0.0])], &points("white"));
        r.clear();
        assert!(r.buffer().as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn resize_then_render_presents_zeroed_frame() {
        let (mut r, seen) = setup(8, 8);
        r.draw_points(&[Position::from([0.0, 0.0])], &points("white"));
        r.resize(5, 3);

        let mut cap = FrameCapture::new();
        r.render(&mut cap);

        assert_eq!(cap.size(), (5, 3));
        assert_eq!(cap.pixels().len(), 5 * 3 * 4);
        assert!(cap.pixels().iter().all(|&b| b == 0));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn presenter_failure_becomes_diagnostic() {
        struct Broken;
        impl Presenter for Broken {
            fn present(&mut self, _: Frame<'_>) -> anyhow::Result<()> {
                anyhow::bail!("surface lost")
            }
        }

        let (mut r, seen) = setup(2, 2);
        r.render(&mut Broken);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Diagnostic::PresentFailed { reason: "surface lost".into() }]
        );
    }

    #[test]
    fn render_accepts_trait_objects() {
        let (mut r, _) = setup(2, 2);
        let mut cap = FrameCapture::new();
        let presenter: &mut dyn Presenter = &mut cap;
        r.render(presenter);
        assert_eq!(cap.presented(), 1);
    }
}
