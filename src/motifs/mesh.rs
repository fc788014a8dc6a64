use super::MotifParams;
use crate::drawing::{Drawing, Paint, Point, Stroke};
use crate::palette::Palette;

const MESH_MIN: f64 = 40.0;
const MESH_MAX: f64 = 160.0;
const ARM_WIDTH: f64 = 12.0;

/// Line mesh laid over a solid plus.
///
/// Complexity sets the number of mesh lines per direction; `f1` thickens
/// them. `f2 > 5` adds dashed diagonals and `f3 > 7` clears a disc in the
/// middle.
pub fn fishnet(p: &MotifParams, palette: &Palette) -> Drawing {
    let mut d = Drawing::new(palette.background());
    let span = MESH_MAX - MESH_MIN;
    let arm = Paint::fill(palette.primary);

    d.rect(MESH_MIN, 100.0 - ARM_WIDTH / 2.0, span, ARM_WIDTH, arm.clone());
    d.rect(100.0 - ARM_WIDTH / 2.0, MESH_MIN, ARM_WIDTH, span, arm);

    let lines = u32::from(p.complexity()) + 2;
    let width = ARM_WIDTH * (0.3 + 0.03 * f64::from(p.f1()));
    let thread = Stroke::new(palette.primary, width);

    for k in 1..=lines {
        let at = MESH_MIN + span * f64::from(k) / f64::from(lines + 1);
        d.line(Point::new(at, MESH_MIN), Point::new(at, MESH_MAX), thread.clone());
        d.line(Point::new(MESH_MIN, at), Point::new(MESH_MAX, at), thread.clone());
    }

    if p.f2() > 5 {
        let dashed = Stroke::new(palette.accent, width * 0.6).dashed(6.0, 4.0);
        d.line(
            Point::new(MESH_MIN, MESH_MIN),
            Point::new(MESH_MAX, MESH_MAX),
            dashed.clone(),
        );
        d.line(
            Point::new(MESH_MAX, MESH_MIN),
            Point::new(MESH_MIN, MESH_MAX),
            dashed,
        );
    }

    if p.f3() > 7 {
        d.circle(
            Point::center(),
            24.0,
            Paint {
                fill: Some(palette.background().to_string()),
                stroke: Some(Stroke::new(palette.accent, 2.0)),
            },
        );
    }

    d
}
