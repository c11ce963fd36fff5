// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Point;
use regex::Regex;
use std::sync::OnceLock;

/// Largest corner rounding radius, in canvas units. Corners between short
/// segments shrink below this so neighboring curves cannot overlap.
pub const CORNER_RADIUS: f64 = 10.0;

/// Drops interior points that do not change the direction of travel.
///
/// A point stays only when the step into it and the step out of it differ in
/// per-axis sign. For routed connector polylines the interior steps are
/// orthogonal cell hops, so this collapses every straight run into a single
/// segment and keeps exactly the turns. First and last points always stay;
/// inputs of up to two points come back unchanged.
pub fn smooth_polyline(points: &[Point]) -> Vec<Point> {
    match points.len() {
        0 => Vec::new(),
        1 => vec![points[0]],
        2 => vec![points[0], points[1]],
        _ => {
            let mut kept = Vec::with_capacity(points.len());
            kept.push(points[0]);

            let mut prev_dir = step_direction(points[0], points[1]);
            for idx in 1..points.len() - 1 {
                let dir = step_direction(points[idx], points[idx + 1]);
                if dir != prev_dir {
                    kept.push(points[idx]);
                    prev_dir = dir;
                }
            }

            kept.push(points[points.len() - 1]);
            kept
        }
    }
}

/// Renders a polyline as SVG path data with rounded corners.
///
/// The polyline is smoothed first, so collinear runs never produce redundant
/// commands. Every remaining interior corner becomes a straight `L` up to the
/// rounding entry point followed by a quadratic `Q` through the corner; the
/// radius is [`CORNER_RADIUS`] clamped to half of each adjacent segment. A
/// corner with a zero length side degrades to a plain `L`. Coordinates carry
/// two decimals.
pub fn svg_path_data(points: &[Point]) -> String {
    use std::fmt::Write as _;

    let corners = smooth_polyline(points);
    let Some(first) = corners.first() else {
        return String::new();
    };

    let mut data = String::new();
    let _ = write!(data, "M {:.2},{:.2}", first.x(), first.y());

    for idx in 1..corners.len() - 1 {
        let prev = corners[idx - 1];
        let corner = corners[idx];
        let next = corners[idx + 1];

        let len_in = distance(prev, corner);
        let len_out = distance(corner, next);
        if len_in <= f64::EPSILON || len_out <= f64::EPSILON {
            let _ = write!(data, " L {:.2},{:.2}", corner.x(), corner.y());
            continue;
        }

        let radius = CORNER_RADIUS.min(len_in / 2.0).min(len_out / 2.0);
        let entry = toward(corner, prev, radius);
        let exit = toward(corner, next, radius);
        let _ = write!(data, " L {:.2},{:.2}", entry.x(), entry.y());
        let _ = write!(
            data,
            " Q {:.2},{:.2} {:.2},{:.2}",
            corner.x(),
            corner.y(),
            exit.x(),
            exit.y()
        );
    }

    if corners.len() > 1 {
        let last = corners[corners.len() - 1];
        let _ = write!(data, " L {:.2},{:.2}", last.x(), last.y());
    }

    data
}

/// Picks the middle vertex out of SVG path data, for label anchoring.
///
/// Scans `M` and `L` commands with one coordinate pair each, in order, and
/// returns the vertex at half the count (rounded down). Control points of `Q`
/// curves carry no command letter of their own and are skipped. Path data
/// without any vertex yields the origin.
pub fn svg_path_midpoint(path_data: &str) -> Point {
    let mut vertices = Vec::new();
    for caps in vertex_token().captures_iter(path_data) {
        let x = caps[1].parse::<f64>();
        let y = caps[2].parse::<f64>();
        if let (Ok(x), Ok(y)) = (x, y) {
            vertices.push(Point::new(x, y));
        }
    }

    if vertices.is_empty() {
        return Point::new(0.0, 0.0);
    }
    vertices[vertices.len() / 2]
}

static VERTEX_TOKEN: OnceLock<Regex> = OnceLock::new();

fn vertex_token() -> &'static Regex {
    VERTEX_TOKEN.get_or_init(|| {
        Regex::new(r"[ML]\s*(-?\d+(?:\.\d+)?)[\s,]+(-?\d+(?:\.\d+)?)").expect("vertex token regex")
    })
}

fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

fn step_direction(from: Point, to: Point) -> (i8, i8) {
    (sign(to.x() - from.x()), sign(to.y() - from.y()))
}

fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    (dx * dx + dy * dy).sqrt()
}

/// The point `distance` away from `from` along the segment to `to`.
fn toward(from: Point, to: Point, distance: f64) -> Point {
    let dx = to.x() - from.x();
    let dy = to.y() - from.y();
    let len = (dx * dx + dy * dy).sqrt();
    if len <= f64::EPSILON {
        return from;
    }
    Point::new(from.x() + dx / len * distance, from.y() + dy / len * distance)
}
