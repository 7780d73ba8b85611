use kurbo::{BezPath, PathEl, Point};

use crate::ease::Ease;

pub const WIDTH: u32 = 200;
pub const HEIGHT: u32 = 200;
pub const BORDER: f64 = 20.0;

const GUIDE_GRAY: [u8; 4] = [0xDC, 0xDC, 0xDC, 0xFF];
const CURVE_GRAY: [u8; 4] = [0x33, 0x33, 0x33, 0xFF];
const STROKE_WIDTH: f64 = 1.0;

#[derive(Clone, Debug)]
pub struct ImageRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

fn plot_point(ease: Ease, progress: f64) -> Point {
    let x = progress * (f64::from(WIDTH) - 2.0 * BORDER) + BORDER;
    let y = ease.apply(progress) * (f64::from(HEIGHT) - 2.0 * BORDER) + BORDER;
    Point::new(x, y)
}

/// Polyline approximation of an easing curve in canvas space, one sample per
/// horizontal canvas unit.
///
/// The sample range is half-open: progress = 1.0 is never emitted, so the
/// curve stops one step short of its endpoint.
pub fn curve_path(ease: Ease) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((BORDER, BORDER));
    for i in 0..WIDTH {
        let progress = f64::from(i) / f64::from(WIDTH);
        path.line_to(plot_point(ease, progress));
    }
    path
}

fn guide_path() -> BezPath {
    let mut path = BezPath::new();
    path.move_to((BORDER, 0.0));
    path.line_to((BORDER, f64::from(HEIGHT)));
    path.move_to((f64::from(WIDTH) - BORDER, 0.0));
    path.line_to((f64::from(WIDTH) - BORDER, f64::from(HEIGHT)));
    path
}

/// Render one easing curve over the static guide-lines. Output is
/// premultiplied RGBA8 on a transparent background, fully determined by the
/// easing and the canvas constants.
#[tracing::instrument]
pub fn render_graph(ease: Ease) -> ImageRGBA {
    let width = WIDTH as u16;
    let height = HEIGHT as u16;

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(STROKE_WIDTH));

    // Guides first so the curve overlays them.
    ctx.set_paint(color(GUIDE_GRAY));
    ctx.stroke_path(&bezpath_to_cpu(&guide_path()));

    ctx.set_paint(color(CURVE_GRAY));
    ctx.stroke_path(&bezpath_to_cpu(&curve_path(ease)));

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    ImageRGBA {
        width: WIDTH,
        height: HEIGHT,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    }
}

fn color([r, g, b, a]: [u8; 4]) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
