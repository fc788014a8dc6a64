//! Cross-shaped and radial motifs.

use super::MotifParams;
use crate::drawing::{Drawing, Paint, Point, Stroke};
use crate::palette::Palette;

/// Four orthogonal branches, each capped with a crossbar.
///
/// Branch length and width grow with complexity. `f1` thins the crossbars,
/// `f2` lengthens them, `f3` grows the hub and, past 7 on busy designs, adds
/// diagonal spurs.
pub fn special_cross(p: &MotifParams, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(palette.background());
    let center = Point::center();

    let branch_len = 45.0 + 7.0 * p.c();
    let branch_width = 4.0 + p.c();
    let main = Stroke::new(palette.primary, branch_width).round();

    let tips: Vec<Point> = [270.0, 90.0, 0.0, 180.0]
        .iter()
        .map(|&deg| center.polar(branch_len, deg))
        .collect();

    for &tip in &tips {
        d.line(center, tip, main.clone());
    }

    let bar_ratio = 0.4 + 0.2 * f64::from(p.f2()) / 10.0;
    let bar_len = branch_len * bar_ratio;
    let bar_width = branch_width * (0.7 - 0.03 * f64::from(p.f1()));
    let bar = Stroke::new(palette.primary, bar_width).round();

    for (i, &tip) in tips.iter().enumerate() {
        // Vertical branches get horizontal bars and vice versa.
        let (dx, dy) = if i < 2 { (bar_len, 0.0) } else { (0.0, bar_len) };
        d.line(
            Point::new(tip.x - dx, tip.y - dy),
            Point::new(tip.x + dx, tip.y + dy),
            bar.clone(),
        );
    }

    if p.complexity() > 3 && p.f3() > 7 {
        let spur = branch_len * 0.3;
        for i in 0..4 {
            let deg = 45.0 + 90.0 * f64::from(i);
            d.line(center, center.polar(spur, deg), bar.clone());
        }
    }

    d.circle(center, 5.0 + f64::from(p.f3()), Paint::fill(palette.accent));
    d
}

/// Solid plus-shaped cross with a square hub.
///
/// Arms grow with complexity; `f1` enlarges the hub, `f2` sizes the notches
/// that `f3 > 5` cuts into the arm ends.
pub fn greek_cross(p: &MotifParams, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(palette.background());
    let center = Point::center();
    let fill = Paint::fill(palette.primary);

    let arm_len = 80.0 + 8.0 * p.c();
    let arm_width = 15.0 + 2.0 * p.c();
    let hub = 30.0 + 2.0 * p.c() + 2.0 * f64::from(p.f1());

    d.rect(
        center.x - arm_len / 2.0,
        center.y - arm_width / 2.0,
        arm_len,
        arm_width,
        fill.clone(),
    );
    d.rect(
        center.x - arm_width / 2.0,
        center.y - arm_len / 2.0,
        arm_width,
        arm_len,
        fill.clone(),
    );
    d.centered_square(center, hub, fill);

    if p.f3() > 5 {
        let notch = 4.0 + f64::from(p.f2());
        let cut = Paint::fill(palette.background());
        for i in 0..4 {
            let end = center.polar(arm_len / 2.0 - notch / 2.0, 90.0 * f64::from(i));
            d.centered_square(end, notch, cut.clone());
        }
    }

    d
}

/// Rays around a hub ring, alternating long and short.
///
/// Ray count grows with complexity. `f1` shortens the minor rays, `f2`
/// thickens all rays, `f3 > 6` beads the ray tips.
pub fn starburst(p: &MotifParams, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(palette.background());
    let center = Point::center();

    let hub_radius = 18.0;
    let outer = 80.0;
    let rays = 4 * (usize::from(p.complexity()) + 1);
    let minor_ratio = 0.75 - 0.04 * f64::from(p.f1());
    let ray = Stroke::new(palette.primary, 1.5 + 0.25 * f64::from(p.f2())).round();

    d.circle(
        center,
        hub_radius,
        Paint::stroke(Stroke::new(palette.primary, 3.0)),
    );

    let step = 360.0 / rays as f64;
    for i in 0..rays {
        let deg = step * i as f64;
        let len = if i % 2 == 0 {
            outer
        } else {
            hub_radius + (outer - hub_radius) * minor_ratio
        };
        let tip = center.polar(len, deg);
        d.line(center.polar(hub_radius, deg), tip, ray.clone());

        if p.f3() > 6 {
            d.circle(tip, 3.0, Paint::fill(palette.accent));
        }
    }

    d.circle(center, hub_radius * 0.4, Paint::fill(palette.accent));
    d
}
