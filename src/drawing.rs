//! Vector drawings in a fixed 200×200 logical canvas.
//!
//! Motifs build a [`Drawing`] out of a handful of primitives. The drawing is
//! plain data: it can be compared, serialised to JSON, or written out as SVG
//! elements for the compositor.

use serde::Serialize;
use std::f64::consts::PI;
use std::fmt::Write as _;

/// Width and height of the logical canvas every motif draws into.
pub const CANVAS_SIZE: f64 = 200.0;

/// Centre of the logical canvas on both axes.
pub const CENTER: f64 = CANVAS_SIZE / 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The canvas centre.
    pub const fn center() -> Self {
        Self::new(CENTER, CENTER)
    }

    /// Point at `radius` from `self`, `degrees` clockwise from the +x axis
    /// (SVG's y axis points down).
    pub fn polar(self, radius: f64, degrees: f64) -> Self {
        let rad = degrees * PI / 180.0;
        Self::new(self.x + radius * rad.cos(), self.y + radius * rad.sin())
    }

    /// Rotate around `pivot` by `degrees`.
    pub fn rotate_about(self, pivot: Point, degrees: f64) -> Self {
        let rad = degrees * PI / 180.0;
        let (sin, cos) = rad.sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Self::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

impl LineCap {
    fn as_svg(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub cap: LineCap,
    /// Dash and gap lengths, if the stroke is dashed.
    pub dash: Option<[f64; 2]>,
}

impl Stroke {
    pub fn new(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
            cap: LineCap::Butt,
            dash: None,
        }
    }

    pub fn round(mut self) -> Self {
        self.cap = LineCap::Round;
        self
    }

    pub fn dashed(mut self, on: f64, off: f64) -> Self {
        self.dash = Some([on, off]);
        self
    }

    fn svg_attrs(&self) -> String {
        let mut attrs = format!(
            r#" stroke="{}" stroke-width="{:.2}" stroke-linecap="{}" stroke-linejoin="round""#,
            self.color,
            self.width,
            self.cap.as_svg()
        );
        if let Some([on, off]) = self.dash {
            let _ = write!(attrs, r#" stroke-dasharray="{on:.2} {off:.2}""#);
        }
        attrs
    }
}

/// Fill and/or stroke for closed shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paint {
    pub fill: Option<String>,
    pub stroke: Option<Stroke>,
}

impl Paint {
    pub fn fill(color: &str) -> Self {
        Self {
            fill: Some(color.to_string()),
            stroke: None,
        }
    }

    pub fn stroke(stroke: Stroke) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }

    fn svg_attrs(&self) -> String {
        let mut attrs = format!(r#" fill="{}""#, self.fill.as_deref().unwrap_or("none"));
        if let Some(stroke) = &self.stroke {
            attrs.push_str(&stroke.svg_attrs());
        }
        attrs
    }
}

/// One shape in a drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    Polygon {
        points: Vec<Point>,
        paint: Paint,
    },
    /// Open connected line segments; written as an SVG path.
    Polyline { points: Vec<Point>, stroke: Stroke },
    /// Circular arc from `start` to `end` degrees, clockwise; written as an
    /// SVG path.
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        stroke: Stroke,
    },
}

impl Primitive {
    /// Short name of the primitive kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Line { .. } => "line",
            Primitive::Rect { .. } => "rect",
            Primitive::Circle { .. } => "circle",
            Primitive::Polygon { .. } => "polygon",
            Primitive::Polyline { .. } => "polyline",
            Primitive::Arc { .. } => "arc",
        }
    }

    /// Axis-aligned bounds of the geometry, ignoring stroke width.
    /// Circles and arcs use their full circle.
    pub fn bounds(&self) -> (Point, Point) {
        fn of_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> (Point, Point) {
            let mut min = Point::new(f64::INFINITY, f64::INFINITY);
            let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
            for p in points {
                min.x = min.x.min(p.x);
                min.y = min.y.min(p.y);
                max.x = max.x.max(p.x);
                max.y = max.y.max(p.y);
            }
            (min, max)
        }

        match self {
            Primitive::Line { from, to, .. } => of_points([from, to]),
            Primitive::Rect {
                x,
                y,
                width,
                height,
                ..
            } => (Point::new(*x, *y), Point::new(x + width, y + height)),
            Primitive::Circle { center, radius, .. } | Primitive::Arc { center, radius, .. } => (
                Point::new(center.x - radius, center.y - radius),
                Point::new(center.x + radius, center.y + radius),
            ),
            Primitive::Polygon { points, .. } | Primitive::Polyline { points, .. } => {
                of_points(points)
            }
        }
    }

    /// Width of the outline, or 0 for fill-only shapes.
    pub fn stroke_width(&self) -> f64 {
        match self {
            Primitive::Line { stroke, .. }
            | Primitive::Polyline { stroke, .. }
            | Primitive::Arc { stroke, .. } => stroke.width,
            Primitive::Rect { paint, .. }
            | Primitive::Circle { paint, .. }
            | Primitive::Polygon { paint, .. } => paint.stroke.as_ref().map_or(0.0, |s| s.width),
        }
    }

    /// [`bounds`](Self::bounds) grown by half the stroke width on every side.
    pub fn painted_bounds(&self) -> (Point, Point) {
        let (min, max) = self.bounds();
        let half = self.stroke_width() / 2.0;
        (
            Point::new(min.x - half, min.y - half),
            Point::new(max.x + half, max.y + half),
        )
    }

    /// SVG element for this primitive.
    pub fn to_svg(&self) -> String {
        match self {
            Primitive::Line { from, to, stroke } => format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"{}/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                stroke.svg_attrs()
            ),
            Primitive::Rect {
                x,
                y,
                width,
                height,
                paint,
            } => format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"{}/>"#,
                x,
                y,
                width,
                height,
                paint.svg_attrs()
            ),
            Primitive::Circle {
                center,
                radius,
                paint,
            } => format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}"{}/>"#,
                center.x,
                center.y,
                radius,
                paint.svg_attrs()
            ),
            Primitive::Polygon { points, paint } => format!(
                r#"<polygon points="{}"{}/>"#,
                points_attr(points),
                paint.svg_attrs()
            ),
            Primitive::Polyline { points, stroke } => {
                let mut d = String::new();
                for (i, p) in points.iter().enumerate() {
                    let cmd = if i == 0 { 'M' } else { 'L' };
                    let _ = write!(d, "{}{cmd} {:.2} {:.2}", if i == 0 { "" } else { " " }, p.x, p.y);
                }
                format!(r#"<path d="{}" fill="none"{}/>"#, d, stroke.svg_attrs())
            }
            Primitive::Arc {
                center,
                radius,
                start,
                end,
                stroke,
            } => {
                let from = center.polar(*radius, *start);
                let to = center.polar(*radius, *end);
                let sweep = (end - start).rem_euclid(360.0);
                let large_arc = u8::from(sweep > 180.0);
                format!(
                    r#"<path d="M {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2}" fill="none"{}/>"#,
                    from.x,
                    from.y,
                    radius,
                    radius,
                    large_arc,
                    to.x,
                    to.y,
                    stroke.svg_attrs()
                )
            }
        }
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// An ordered list of primitives over a background colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drawing {
    pub background: String,
    pub primitives: Vec<Primitive>,
}

impl Drawing {
    pub fn new(background: &str) -> Self {
        Self {
            background: background.to_string(),
            primitives: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.push(Primitive::Line { from, to, stroke });
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: Paint) {
        self.push(Primitive::Rect {
            x,
            y,
            width,
            height,
            paint,
        });
    }

    /// Axis-aligned square of side `size` centred on `center`.
    pub fn centered_square(&mut self, center: Point, size: f64, paint: Paint) {
        self.rect(center.x - size / 2.0, center.y - size / 2.0, size, size, paint);
    }

    pub fn circle(&mut self, center: Point, radius: f64, paint: Paint) {
        self.push(Primitive::Circle {
            center,
            radius,
            paint,
        });
    }

    pub fn polygon(&mut self, points: Vec<Point>, paint: Paint) {
        self.push(Primitive::Polygon { points, paint });
    }

    pub fn polyline(&mut self, points: Vec<Point>, stroke: Stroke) {
        self.push(Primitive::Polyline { points, stroke });
    }

    pub fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64, stroke: Stroke) {
        self.push(Primitive::Arc {
            center,
            radius,
            start,
            end,
            stroke,
        });
    }

    /// Union of the painted bounds of every primitive, or `None` for an
    /// empty drawing.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        self.primitives.iter().map(Primitive::painted_bounds).reduce(|(a0, a1), (b0, b1)| {
            (
                Point::new(a0.x.min(b0.x), a0.y.min(b0.y)),
                Point::new(a1.x.max(b1.x), a1.y.max(b1.y)),
            )
        })
    }

    /// The primitives as SVG elements, one per line.
    pub fn to_svg_fragment(&self) -> String {
        self.primitives
            .iter()
            .map(Primitive::to_svg)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A standalone SVG document of just this drawing.
    pub fn to_svg(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}">
  <rect width="100%" height="100%" fill="{}"/>
  {}
</svg>"#,
            self.background,
            self.to_svg_fragment(),
            size = CANVAS_SIZE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_follows_svg_axes() {
        let p = Point::center().polar(10.0, 90.0);
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 110.0).abs() < 1e-9);
    }

    #[test]
    fn rotate_about_quarter_turn() {
        let p = Point::new(110.0, 100.0).rotate_about(Point::center(), 90.0);
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 110.0).abs() < 1e-9);
    }

    #[test]
    fn line_svg_has_stroke_attrs() {
        let mut d = Drawing::new("#ffffff");
        d.line(
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Stroke::new("#000000", 2.0).round().dashed(5.0, 5.0),
        );
        let svg = d.to_svg_fragment();
        assert!(svg.starts_with("<line"));
        assert!(svg.contains(r#"x2="10.00""#));
        assert!(svg.contains(r#"stroke-linecap="round""#));
        assert!(svg.contains(r#"stroke-dasharray="5.00 5.00""#));
    }

    #[test]
    fn arc_uses_large_arc_flag_past_half_turn() {
        let stroke = Stroke::new("#000000", 1.0);
        let small = Primitive::Arc {
            center: Point::center(),
            radius: 10.0,
            start: 0.0,
            end: 90.0,
            stroke: stroke.clone(),
        };
        let large = Primitive::Arc {
            center: Point::center(),
            radius: 10.0,
            start: 30.0,
            end: 330.0,
            stroke,
        };
        assert!(small.to_svg().contains(" 0 0 1 "));
        assert!(large.to_svg().contains(" 0 1 1 "));
    }

    #[test]
    fn polyline_becomes_path() {
        let mut d = Drawing::new("#ffffff");
        d.polyline(
            vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(5.0, 5.0)],
            Stroke::new("#000000", 1.0),
        );
        let svg = d.to_svg_fragment();
        assert!(svg.contains(r#"d="M 0.00 0.00 L 5.00 0.00 L 5.00 5.00""#), "{svg}");
    }

    #[test]
    fn bounds_cover_all_primitives() {
        let mut d = Drawing::new("#ffffff");
        assert!(d.bounds().is_none());
        d.circle(Point::new(50.0, 50.0), 10.0, Paint::fill("#000000"));
        d.rect(120.0, 130.0, 20.0, 10.0, Paint::fill("#000000"));
        let (min, max) = d.bounds().unwrap();
        assert_eq!(min, Point::new(40.0, 40.0));
        assert_eq!(max, Point::new(140.0, 140.0));
    }

    #[test]
    fn bounds_include_half_the_stroke() {
        let mut d = Drawing::new("#ffffff");
        d.line(
            Point::new(10.0, 20.0),
            Point::new(30.0, 20.0),
            Stroke::new("#000000", 4.0),
        );
        d.rect(50.0, 50.0, 10.0, 10.0, Paint::stroke(Stroke::new("#000000", 6.0)));

        assert_eq!(d.primitives[0].stroke_width(), 4.0);
        assert_eq!(d.primitives[0].bounds().0, Point::new(10.0, 20.0));
        let (min, max) = d.bounds().unwrap();
        assert_eq!(min, Point::new(8.0, 18.0));
        assert_eq!(max, Point::new(63.0, 63.0));
    }

    #[test]
    fn fill_only_shapes_have_no_stroke_width() {
        let circle = Primitive::Circle {
            center: Point::center(),
            radius: 5.0,
            paint: Paint::fill("#000000"),
        };
        assert_eq!(circle.stroke_width(), 0.0);
        assert_eq!(circle.painted_bounds(), circle.bounds());
    }

    #[test]
    fn default_cap_is_butt() {
        let mut d = Drawing::new("#ffffff");
        d.line(Point::center(), Point::new(0.0, 0.0), Stroke::new("#000000", 1.0));
        assert!(d.to_svg_fragment().contains(r#"stroke-linecap="butt""#));
    }

    #[test]
    fn standalone_svg_has_background() {
        let d = Drawing::new("#f0f5ff");
        let svg = d.to_svg();
        assert!(svg.contains("viewBox=\"0 0 200 200\""));
        assert!(svg.contains(r##"fill="#f0f5ff""##));
    }
}
