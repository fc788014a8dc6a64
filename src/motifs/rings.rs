//! Arc-based ring motifs.
//!
//! Rings are drawn as open arcs; the missing sweep is the split.

use super::MotifParams;
use crate::drawing::{Drawing, Paint, Point, Stroke};
use crate::palette::Palette;

/// Arc from `gap_at + gap/2` clockwise round to `gap_at - gap/2`.
fn split_ring(d: &mut Drawing, center: Point, radius: f64, gap_at: f64, gap: f64, stroke: Stroke) {
    let start = gap_at + gap / 2.0;
    let end = gap_at + 360.0 - gap / 2.0;
    d.arc(center, radius, start, end, stroke);
}

/// Two side-by-side rings, each open on its outer side.
///
/// Complexity sets radius and line weight. `f1` widens the openings, `f2`
/// adds weight to the line, and `f3 > 5` bridges the rings with a bar.
pub fn open_rings(p: &MotifParams, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(palette.background());

    let radius = 24.0 + 2.0 * p.c();
    let offset = radius + 6.0;
    let width = 6.0 + p.c() + 0.4 * f64::from(p.f2());
    let gap = 20.0 + 4.0 * f64::from(p.f1());
    let stroke = Stroke::new(palette.primary, width).round();

    split_ring(&mut d, Point::new(100.0 - offset, 100.0), radius, 180.0, gap, stroke.clone());
    split_ring(&mut d, Point::new(100.0 + offset, 100.0), radius, 0.0, gap, stroke);

    if p.f3() > 5 {
        let reach = 10.0 + f64::from(p.f3());
        d.line(
            Point::new(100.0 - reach, 100.0),
            Point::new(100.0 + reach, 100.0),
            Stroke::new(palette.accent, width * 0.7).round(),
        );
    }

    d
}

/// Concentric split rings; successive splits alternate between the right
/// and left sides.
///
/// One ring per complexity step plus one. `f1` widens the splits, `f2`
/// thickens the rings, `f3 > 5` adds a centre dot.
pub fn circular_resonator(p: &MotifParams, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(palette.background());
    let center = Point::center();

    let count = u32::from(p.complexity()) + 1;
    let gap = 16.0 + 2.0 * f64::from(p.f1());
    let stroke = Stroke::new(palette.primary, 3.0 + 0.3 * f64::from(p.f2()));

    for i in 0..count {
        let radius = 70.0 - f64::from(i) * 55.0 / f64::from(count);
        let gap_at = if i % 2 == 0 { 0.0 } else { 180.0 };
        split_ring(&mut d, center, radius, gap_at, gap, stroke.clone());
    }

    if p.f3() > 5 {
        d.circle(center, 6.0, Paint::fill(palette.accent));
    }

    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::Primitive;
    use crate::palette::ColorName;

    fn sweep(p: &Primitive) -> f64 {
        match p {
            Primitive::Arc { start, end, .. } => (end - start).rem_euclid(360.0),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn open_rings_leave_the_configured_gap() {
        let d = open_rings(&MotifParams::new(2, 5, 0, 0), &ColorName::Pink.palette());
        assert_eq!(d.len(), 2);
        for arc in &d.primitives {
            assert!((sweep(arc) - (360.0 - 40.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn open_rings_do_not_overlap() {
        let d = open_rings(&MotifParams::new(5, 0, 0, 0), &ColorName::Pink.palette());
        let (_, left_max) = d.primitives[0].bounds();
        let (right_min, _) = d.primitives[1].bounds();
        assert!(left_max.x <= right_min.x);
    }

    #[test]
    fn open_ring_weight_follows_f2() {
        let palette = ColorName::Pink.palette();
        let light = open_rings(&MotifParams::new(3, 0, 0, 0), &palette);
        let heavy = open_rings(&MotifParams::new(3, 0, 5, 0), &palette);
        assert_eq!(light.primitives[0].bounds(), heavy.primitives[0].bounds());
        let extra = heavy.primitives[0].stroke_width() - light.primitives[0].stroke_width();
        assert!((extra - 2.0).abs() < 1e-9);
    }

    #[test]
    fn resonator_ring_count_follows_complexity() {
        let palette = ColorName::Blue.palette();
        for c in 1..=5u8 {
            let d = circular_resonator(&MotifParams::new(c, 0, 0, 0), &palette);
            assert_eq!(d.len(), usize::from(c) + 1);
        }
    }

    #[test]
    fn resonator_splits_alternate_sides() {
        let d = circular_resonator(&MotifParams::new(3, 0, 0, 0), &ColorName::Blue.palette());
        let starts: Vec<f64> = d
            .primitives
            .iter()
            .map(|p| match p {
                Primitive::Arc { start, .. } => *start,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(starts, vec![8.0, 188.0, 8.0, 188.0]);
    }
}
