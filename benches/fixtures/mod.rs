// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use naiad::model::{Point, Rect};

pub struct Scene {
    pub start: Point,
    pub end: Point,
    pub obstacles: Vec<Rect>,
}

pub fn checksum_path(points: &[Point]) -> u64 {
    let mut acc = 0u64;
    for point in points {
        acc = acc.wrapping_mul(131).wrapping_add(point.x().to_bits());
        acc = acc.wrapping_mul(131).wrapping_add(point.y().to_bits());
    }
    acc
}

pub fn checksum_str(text: &str) -> u64 {
    let mut acc = 0u64;
    for byte in text.bytes() {
        acc = acc.wrapping_mul(131).wrapping_add(u64::from(byte));
    }
    acc
}

pub mod funnel {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LatticeParams {
        pub columns: usize,
        pub rows: usize,
        pub gap: usize,
    }

    impl LatticeParams {
        pub const fn new(columns: usize, rows: usize, gap: usize) -> Self {
            Self { columns, rows, gap }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Unobstructed,
        SingleBlocker,
        StageLattice,
        DenseLattice,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Unobstructed => "unobstructed",
                Self::SingleBlocker => "single_blocker",
                Self::StageLattice => "stage_lattice",
                Self::DenseLattice => "dense_lattice",
            }
        }
    }

    /// Deterministic funnel stage lattice.
    ///
    /// Stage rectangles sit on a `columns x rows` lattice with a fixed node
    /// size and the given gap; the connector crosses the whole lattice at mid
    /// height. A gap of at least twice the default cell size keeps the inner
    /// channels passable; tighter gaps force the route around the outside.
    pub fn lattice(params: LatticeParams) -> Scene {
        assert!(params.columns >= 1, "columns must be >= 1");
        assert!(params.rows >= 1, "rows must be >= 1");

        const NODE_WIDTH: f64 = 120.0;
        const NODE_HEIGHT: f64 = 60.0;

        let gap = params.gap as f64;
        let pitch_x = NODE_WIDTH + gap;
        let pitch_y = NODE_HEIGHT + gap;

        let mut obstacles = Vec::with_capacity(params.columns * params.rows);
        for row in 0..params.rows {
            for col in 0..params.columns {
                obstacles.push(Rect::new(
                    col as f64 * pitch_x,
                    row as f64 * pitch_y,
                    NODE_WIDTH,
                    NODE_HEIGHT,
                ));
            }
        }

        let span_x = params.columns as f64 * pitch_x - gap;
        let mid_y = (params.rows as f64 * pitch_y - gap) / 2.0;
        Scene {
            start: Point::new(-40.0, mid_y),
            end: Point::new(span_x + 40.0, mid_y),
            obstacles,
        }
    }

    pub fn fixture(case: Case) -> Scene {
        match case {
            Case::Unobstructed => Scene {
                start: Point::new(0.0, 0.0),
                end: Point::new(640.0, 0.0),
                obstacles: Vec::new(),
            },
            Case::SingleBlocker => Scene {
                start: Point::new(0.0, 0.0),
                end: Point::new(640.0, 0.0),
                obstacles: vec![Rect::new(280.0, -60.0, 80.0, 120.0)],
            },
            Case::StageLattice => lattice(LatticeParams::new(4, 3, 40)),
            Case::DenseLattice => lattice(LatticeParams::new(8, 6, 24)),
        }
    }
}

pub mod polyline {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        ShortTurns,
        LongStaircase,
        CollinearHeavy,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::ShortTurns => "short_turns",
                Self::LongStaircase => "long_staircase",
                Self::CollinearHeavy => "collinear_heavy",
            }
        }
    }

    /// Orthogonal staircase of `segments` runs, each split into `split`
    /// collinear hops of `hop` units, alternating right and down.
    pub fn staircase(segments: usize, split: usize, hop: f64) -> Vec<Point> {
        assert!(segments >= 1, "segments must be >= 1");
        assert!(split >= 1, "split must be >= 1");

        let mut points = Vec::with_capacity(segments * split + 1);
        let mut x = 0.0;
        let mut y = 0.0;
        points.push(Point::new(x, y));
        for segment in 0..segments {
            for _ in 0..split {
                if segment % 2 == 0 {
                    x += hop;
                } else {
                    y += hop;
                }
                points.push(Point::new(x, y));
            }
        }
        points
    }

    pub fn fixture(case: Case) -> Vec<Point> {
        match case {
            Case::ShortTurns => staircase(8, 2, 20.0),
            Case::LongStaircase => staircase(64, 8, 20.0),
            Case::CollinearHeavy => staircase(4, 128, 10.0),
        }
    }
}
