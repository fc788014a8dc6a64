//! Self-similar motifs.
//!
//! Recursion depth is `min(complexity, CEILING)` for each motif, so the
//! primitive count has a fixed upper bound.

use super::MotifParams;
use crate::drawing::{Drawing, Paint, Point, Stroke};
use crate::palette::Palette;

/// Deepest carpet subdivision (1 + 8 + 64 + 512 holes).
pub const CARPET_DEPTH_CEILING: u8 = 4;

/// Deepest triangle subdivision (81 leaf triangles).
pub const TRIANGLE_DEPTH_CEILING: u8 = 4;

/// Deepest branching level of the dendrite (31 segments per trunk).
pub const DENDRITE_DEPTH_CEILING: u8 = 5;

const CARPET_ORIGIN: f64 = 40.0;
const CARPET_SIZE: f64 = 120.0;

/// Solid square with the centre ninth punched out, recursively.
///
/// `f1` widens every hole slightly; `f3 > 5` adds up to four extra holes
/// on the carpet's axes, sized by `f2`.
pub fn sierpinski_carpet(p: &MotifParams, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(palette.background());
    d.rect(
        CARPET_ORIGIN,
        CARPET_ORIGIN,
        CARPET_SIZE,
        CARPET_SIZE,
        Paint::fill(palette.primary),
    );

    let cut = Paint::fill(palette.background());
    let widen = 0.05 * f64::from(p.f1()) / 10.0;
    punch(
        &mut d,
        CARPET_ORIGIN,
        CARPET_ORIGIN,
        CARPET_SIZE,
        p.depth(CARPET_DEPTH_CEILING),
        widen,
        &cut,
    );

    if p.f3() > 5 {
        let hole = 10.0 + 5.0 * f64::from(p.f2()) / 10.0;
        for i in 0..(p.f3() - 5).min(4) {
            let at = Point::center().polar(50.0, 90.0 * f64::from(i));
            d.centered_square(at, hole, cut.clone());
        }
    }

    d
}

fn punch(d: &mut Drawing, x: f64, y: f64, size: f64, level: u8, widen: f64, cut: &Paint) {
    if level == 0 {
        return;
    }

    let sub = size / 3.0;
    let grow = sub * widen;
    d.rect(
        x + sub - grow,
        y + sub - grow,
        sub + 2.0 * grow,
        sub + 2.0 * grow,
        cut.clone(),
    );

    if level > 1 {
        for row in 0..3 {
            for col in 0..3 {
                if row == 1 && col == 1 {
                    continue;
                }
                let sx = x + f64::from(col) * sub;
                let sy = y + f64::from(row) * sub;
                punch(d, sx, sy, sub, level - 1, widen, cut);
            }
        }
    }
}

/// Equilateral triangle split into its three corner triangles, recursively.
///
/// `f1` shrinks each leaf toward its centroid, opening hairline gaps;
/// `f3 > 6` drops a disc into the central hole, sized by `f2`.
pub fn sierpinski_triangle(p: &MotifParams, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(palette.background());

    let side = 150.0;
    let height = side * 3f64.sqrt() / 2.0;
    let top = Point::new(100.0, 100.0 - height / 2.0);
    let left = Point::new(100.0 - side / 2.0, 100.0 + height / 2.0);
    let right = Point::new(100.0 + side / 2.0, 100.0 + height / 2.0);

    d.polygon(
        vec![top, right, left],
        Paint::stroke(Stroke::new(palette.primary, 1.5)),
    );

    let shrink = 1.0 - 0.02 * f64::from(p.f1());
    let fill = Paint::fill(palette.primary);
    subdivide(
        &mut d,
        [top, right, left],
        p.depth(TRIANGLE_DEPTH_CEILING),
        shrink,
        &fill,
    );

    if p.f3() > 6 {
        let hole = [midpoint(top, right), midpoint(right, left), midpoint(left, top)];
        let inradius = (side / 2.0) / (2.0 * 3f64.sqrt());
        let radius = inradius * (0.4 + 0.05 * f64::from(p.f2()));
        d.circle(centroid(hole), radius, Paint::fill(palette.accent));
    }

    d
}

fn subdivide(d: &mut Drawing, [a, b, c]: [Point; 3], level: u8, shrink: f64, fill: &Paint) {
    if level == 0 {
        let g = centroid([a, b, c]);
        let pull = |v: Point| Point::new(g.x + (v.x - g.x) * shrink, g.y + (v.y - g.y) * shrink);
        d.polygon(vec![pull(a), pull(b), pull(c)], fill.clone());
        return;
    }

    let ab = midpoint(a, b);
    let bc = midpoint(b, c);
    let ca = midpoint(c, a);
    subdivide(d, [a, ab, ca], level - 1, shrink, fill);
    subdivide(d, [ab, b, bc], level - 1, shrink, fill);
    subdivide(d, [ca, bc, c], level - 1, shrink, fill);
}

fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

fn centroid([a, b, c]: [Point; 3]) -> Point {
    Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
}

/// Shared settings for one dendrite draw.
struct Branching<'a> {
    ratio: f64,
    spread: f64,
    beads: bool,
    palette: &'a Palette,
}

impl Branching<'_> {
    fn grow(&self, d: &mut Drawing, from: Point, angle: f64, length: f64, depth: u8) {
        if depth == 0 {
            return;
        }

        let to = from.polar(length, angle);
        let width = 1.0 + 0.8 * f64::from(depth);
        d.line(from, to, Stroke::new(self.palette.primary, width).round());

        if depth == 1 {
            if self.beads {
                d.circle(to, 2.0, Paint::fill(self.palette.accent));
            }
            return;
        }

        let next = length * self.ratio;
        self.grow(d, to, angle - self.spread, next, depth - 1);
        self.grow(d, to, angle + self.spread, next, depth - 1);
    }
}

/// Four trunks from the centre, each forking into two at every level.
///
/// `f1` sets how much each generation shrinks, `f2` how wide the forks
/// open, and `f3 > 7` beads the leaf tips.
pub fn dendrite(p: &MotifParams, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(palette.background());
    let branching = Branching {
        ratio: 0.55 + 0.02 * f64::from(p.f1()),
        spread: 25.0 + 2.0 * f64::from(p.f2()),
        beads: p.f3() > 7,
        palette,
    };

    let depth = p.depth(DENDRITE_DEPTH_CEILING);
    for i in 0..4 {
        let angle = 270.0 + 90.0 * f64::from(i);
        branching.grow(&mut d, Point::center(), angle, 26.0, depth);
    }

    d
}
