use super::MotifParams;
use crate::drawing::{Drawing, Paint, Point, Stroke};
use crate::palette::Palette;

/// Square spiral winding clockwise from the top-left corner into the centre.
///
/// One turn per complexity step plus two. `f2` thickens the line; `f3 > 5`
/// cuts up to four gaps, sized by `f1`, into the outermost lap.
pub fn square_spiral(p: &MotifParams, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(palette.background());

    let turns = u32::from(p.complexity()) + 2;
    let spacing = 60.0 / f64::from(turns + 1);
    let (mut left, mut top, mut right, mut bottom) = (40.0, 40.0, 160.0, 160.0);

    let mut points = vec![Point::new(left, top)];
    for _ in 0..turns {
        points.push(Point::new(right, top));
        points.push(Point::new(right, bottom));
        points.push(Point::new(left, bottom));
        top += spacing;
        points.push(Point::new(left, top));
        left += spacing;
        right -= spacing;
        bottom -= spacing;
    }
    let end = points[points.len() - 1];

    d.polyline(
        points,
        Stroke::new(palette.primary, 2.0 + 0.2 * f64::from(p.f2())).round(),
    );
    d.circle(end, 3.0, Paint::fill(palette.accent));

    if p.f3() > 5 {
        let gap = 4.0 + f64::from(p.f1());
        let cut = Paint::fill(palette.background());
        let edges = [
            Point::new(160.0, 100.0),
            Point::new(100.0, 160.0),
            Point::new(40.0, 100.0),
            Point::new(100.0, 40.0),
        ];
        for &at in edges.iter().take(usize::from((p.f3() - 5).min(4))) {
            d.centered_square(at, gap, cut.clone());
        }
    }

    d
}
