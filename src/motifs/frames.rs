//! Square frame motifs.

use super::MotifParams;
use crate::drawing::{Drawing, Paint, Point, Stroke};
use crate::palette::Palette;

/// Split-ring resonator: two concentric square frames, each broken by a
/// gap on opposite sides.
///
/// Frame thickness follows complexity. `f1` widens the gaps, `f2` slides
/// them off-centre, and `f3 > 5` breaks the outer frame a second time.
pub fn square_resonator(p: &MotifParams, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(palette.background());
    let thickness = 3.0 + p.c();
    let ring = Paint::stroke(Stroke::new(palette.primary, thickness));

    d.rect(40.0, 40.0, 120.0, 120.0, ring.clone());
    d.rect(60.0, 60.0, 80.0, 80.0, ring);

    let gap = 10.0 + f64::from(p.f1());
    let shift = 3.0 * f64::from(p.f2());
    let cut = Paint::fill(palette.background());
    let across = thickness + 2.0;

    // Outer gap on the right edge, inner gap on the left.
    d.rect(160.0 - across / 2.0, 100.0 + shift - gap / 2.0, across, gap, cut.clone());
    d.rect(60.0 - across / 2.0, 100.0 - shift - gap / 2.0, across, gap, cut.clone());

    if p.f3() > 5 {
        d.rect(100.0 - gap / 2.0, 160.0 - across / 2.0, gap, across, cut);
    }

    d
}

fn square_corners(center: Point, size: f64, twist: f64) -> Vec<Point> {
    let h = size / 2.0;
    [(-h, -h), (h, -h), (h, h), (-h, h)]
        .into_iter()
        .map(|(dx, dy)| Point::new(center.x + dx, center.y + dy).rotate_about(center, twist))
        .collect()
}

/// Concentric square outlines, each twisted a little more than the last.
///
/// Complexity sets the number of squares. `f1` is the per-square twist in
/// degrees, `f2` sizes the notches knocked out of every other square, and
/// `f3 > 5` adds a centre dot.
pub fn nested_squares(p: &MotifParams, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(palette.background());
    let center = Point::center();
    let count = u32::from(p.complexity()) + 2;
    let cut = Paint::fill(palette.background());

    for i in 0..count {
        let step = f64::from(i);
        let size = 120.0 - step * 90.0 / f64::from(count);
        let twist = f64::from(p.f1()) * step;
        let width = 2.0 + f64::from(count - i) * 0.5;

        d.polygon(
            square_corners(center, size, twist),
            Paint::stroke(Stroke::new(palette.primary, width)),
        );

        if i % 2 == 0 && p.f2() > 0 {
            let notch = size * 0.1 * f64::from(p.f2()) / 10.0;
            let at = center.polar(size / 2.0, 270.0 + twist);
            d.centered_square(at, notch, cut.clone());
        }
    }

    if p.f3() > 5 {
        let radius = 3.0 + f64::from(p.f3() % 5);
        d.circle(center, radius, Paint::fill(palette.accent));
    }

    d
}
