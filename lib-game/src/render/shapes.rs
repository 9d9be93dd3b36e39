use std::f32::consts::{FRAC_PI_2, PI};

use macroquad::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    pub const fn uniform(x: f32) -> Self {
        Self {
            left: x,
            top: x,
            right: x,
            bottom: x,
        }
    }
}

// Shrinks the two margins proportionally if they don't fit into `len`
fn fit_margins(a: f32, b: f32, len: f32) -> (f32, f32) {
    let sum = a + b;
    if sum <= len || sum <= 0.0 {
        return (a, b);
    }

    let k = len.max(0.0) / sum;
    (a * k, b * k)
}

/// Splits a nine-patch into (source, destination) pairs, row by row,
/// starting at the top-left corner.
pub fn nine_patch_slices(source: Rect, margins: Margins, dest: Rect) -> [(Rect, Rect); 9] {
    let src_x = [
        source.x,
        source.x + margins.left,
        source.right() - margins.right,
        source.right(),
    ];
    let src_y = [
        source.y,
        source.y + margins.top,
        source.bottom() - margins.bottom,
        source.bottom(),
    ];

    let (left, right) = fit_margins(margins.left, margins.right, dest.w);
    let (top, bottom) = fit_margins(margins.top, margins.bottom, dest.h);
    let dst_x = [dest.x, dest.x + left, dest.right() - right, dest.right()];
    let dst_y = [dest.y, dest.y + top, dest.bottom() - bottom, dest.bottom()];

    std::array::from_fn(|idx| {
        let (row, col) = (idx / 3, idx % 3);
        let src = Rect::new(
            src_x[col],
            src_y[row],
            src_x[col + 1] - src_x[col],
            src_y[row + 1] - src_y[row],
        );
        let dst = Rect::new(
            dst_x[col],
            dst_y[row],
            dst_x[col + 1] - dst_x[col],
            dst_y[row + 1] - dst_y[row],
        );

        (src, dst)
    })
}

/// Outline of a rounded rectangle as a convex polygon, clockwise
/// on screen, starting at the top-left corner arc.
pub fn rounded_rect_points(rect: Rect, roundness: f32, segments: usize) -> Vec<Vec2> {
    let radius = roundness.clamp(0.0, 1.0) * rect.w.min(rect.h) / 2.0;
    if radius <= 0.0 || segments == 0 {
        return vec![
            rect.point(),
            vec2(rect.right(), rect.top()),
            vec2(rect.right(), rect.bottom()),
            vec2(rect.left(), rect.bottom()),
        ];
    }

    let corners = [
        (vec2(rect.left() + radius, rect.top() + radius), PI),
        (vec2(rect.right() - radius, rect.top() + radius), PI + FRAC_PI_2),
        (vec2(rect.right() - radius, rect.bottom() - radius), 0.0),
        (vec2(rect.left() + radius, rect.bottom() - radius), FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(4 * (segments + 1));
    for (center, start) in corners {
        for step in 0..=segments {
            let angle = start + FRAC_PI_2 * (step as f32 / segments as f32);
            points.push(center + radius * Vec2::from_angle(angle));
        }
    }

    points
}
