// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

/// Grid cell edge length used when the caller does not pick one.
pub const DEFAULT_CELL_SIZE: f64 = 20.0;

/// Number of cells of clearance added on every side of the scene bounding box,
/// so routes can detour around obstacles that touch the box edge.
pub const GRID_PADDING_CELLS: f64 = 5.0;

/// Upper bound on grid area (`cols * rows`). A scene whose padded bounding box
/// exceeds this at the configured cell size is treated as degenerate instead of
/// allocating without bound.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// Probe order for the four orthogonal neighbors: up, right, down, left.
/// The order is observable through tie-breaking and must stay fixed.
const NEIGHBOR_STEPS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Tuning knobs for connector routing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    /// Edge length of one routing grid cell, in canvas units. Must be finite
    /// and strictly positive; anything else degrades to the straight fallback.
    pub cell_size: f64,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

/// Why a routing attempt could not produce an obstacle-avoiding path.
///
/// The permissive [`find_path`] family flattens both cases to the straight
/// `[start, end]` segment; the `try_` family surfaces them so callers can tell
/// a fallback segment from a routed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    /// The scene could not be mapped onto a usable grid: non-finite bounds, a
    /// non-positive or non-finite cell size, or an area beyond
    /// [`MAX_GRID_CELLS`].
    DegenerateGrid,
    /// The grid was fine but every route between the endpoints is blocked.
    NoPath,
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::DegenerateGrid => {
                write!(f, "scene does not map onto a usable routing grid")
            }
            RouteError::NoPath => write!(f, "no unblocked route between the endpoints"),
        }
    }
}

impl std::error::Error for RouteError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridCell {
    col: i32,
    row: i32,
}

impl GridCell {
    fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    fn offset(&self, dc: i32, dr: i32) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

fn manhattan(a: GridCell, b: GridCell) -> u32 {
    a.col.abs_diff(b.col) + a.row.abs_diff(b.row)
}

/// Discretization of one scene: the padded bounding box of start, end and all
/// obstacles, cut into `cols * rows` cells of `cell_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RoutingGrid {
    min_x: f64,
    min_y: f64,
    cell_size: f64,
    cols: usize,
    rows: usize,
}

impl RoutingGrid {
    fn from_scene(start: Point, end: Point, obstacles: &[Rect], cell_size: f64) -> Option<Self> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return None;
        }

        let mut min_x = start.x().min(end.x());
        let mut min_y = start.y().min(end.y());
        let mut max_x = start.x().max(end.x());
        let mut max_y = start.y().max(end.y());
        for rect in obstacles {
            min_x = min_x.min(rect.x());
            min_y = min_y.min(rect.y());
            max_x = max_x.max(rect.right());
            max_y = max_y.max(rect.bottom());
        }

        let padding = GRID_PADDING_CELLS * cell_size;
        let min_x = min_x - padding;
        let min_y = min_y - padding;
        let width = max_x + padding - min_x;
        let height = max_y + padding - min_y;
        if !width.is_finite() || !height.is_finite() {
            return None;
        }

        // Saturating float casts turn absurd extents into usize::MAX, which
        // the area cap below rejects.
        let cols = (width / cell_size).ceil() as usize;
        let rows = (height / cell_size).ceil() as usize;
        if cols == 0 || rows == 0 {
            return None;
        }
        let area = cols.checked_mul(rows)?;
        if area > MAX_GRID_CELLS {
            return None;
        }

        Some(Self {
            min_x,
            min_y,
            cell_size,
            cols,
            rows,
        })
    }

    fn len(&self) -> usize {
        self.cols
            .checked_mul(self.rows)
            .expect("routing grid area overflow")
    }

    fn cell_of(&self, point: Point) -> GridCell {
        let col = ((point.x() - self.min_x) / self.cell_size).floor() as i32;
        let row = ((point.y() - self.min_y) / self.cell_size).floor() as i32;
        GridCell::new(col, row)
    }

    fn idx_of(&self, cell: GridCell) -> Option<usize> {
        if cell.col < 0 || cell.row < 0 {
            return None;
        }
        let (col, row) = (cell.col as usize, cell.row as usize);
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(row * self.cols + col)
    }

    fn cell_at(&self, idx: usize) -> GridCell {
        let col = (idx % self.cols) as i32;
        let row = (idx / self.cols) as i32;
        GridCell::new(col, row)
    }

    fn center_of(&self, cell: GridCell) -> Point {
        Point::new(
            f64::from(cell.col) * self.cell_size + self.cell_size / 2.0 + self.min_x,
            f64::from(cell.row) * self.cell_size + self.cell_size / 2.0 + self.min_y,
        )
    }
}

/// Reusable backing storage for the grid search.
///
/// Interactive callers route every visible connector on each drag tick; the
/// scratch lets them keep one allocation across all of those calls. Cell
/// bookkeeping is generation-stamped, so reuse does not require clearing the
/// arrays between searches.
#[derive(Debug, Default)]
pub struct RouteScratch {
    grid: Option<RoutingGrid>,
    blocked: Vec<u8>,
    closed_gen: Vec<u32>,
    cost_gen: Vec<u32>,
    cost: Vec<u32>,
    came_from: Vec<i32>,
    heap: BinaryHeap<Reverse<(u32, u32, u32)>>,
    path: Vec<GridCell>,
    gen: u32,
}

impl RouteScratch {
    fn configure(&mut self, grid: RoutingGrid, obstacles: &[Rect]) {
        let len = grid.len();

        if self.grid != Some(grid) {
            self.grid = Some(grid);
            self.blocked = vec![0u8; len];
            self.closed_gen = vec![0u32; len];
            self.cost_gen = vec![0u32; len];
            self.cost = vec![0u32; len];
            self.came_from = vec![-1i32; len];
        } else {
            if self.blocked.len() != len {
                self.blocked.resize(len, 0);
            }
            self.blocked.fill(0);
            if self.closed_gen.len() != len {
                self.closed_gen.resize(len, 0);
            }
            if self.cost_gen.len() != len {
                self.cost_gen.resize(len, 0);
            }
            if self.cost.len() != len {
                self.cost.resize(len, 0);
            }
            if self.came_from.len() != len {
                self.came_from.resize(len, -1);
            }
        }

        let reserve_hint = len.min(4096);
        self.heap.reserve(reserve_hint.saturating_sub(self.heap.len()));
        self.path.reserve(reserve_hint.saturating_sub(self.path.len()));

        for rect in obstacles {
            self.mark_blocked(rect);
        }
    }

    /// Marks every cell whose area overlaps `rect` as unwalkable. Overlap is
    /// strict: a rectangle that only touches a cell boundary leaves that cell
    /// open, so unblocked cell centers always lie outside obstacle interiors.
    fn mark_blocked(&mut self, rect: &Rect) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let grid = self.grid();

        let first_col = ((rect.x() - grid.min_x) / grid.cell_size).floor().max(0.0) as usize;
        let first_row = ((rect.y() - grid.min_y) / grid.cell_size).floor().max(0.0) as usize;
        let last_col = (((rect.right() - grid.min_x) / grid.cell_size).ceil() as usize)
            .saturating_sub(1)
            .min(grid.cols - 1);
        let last_row = (((rect.bottom() - grid.min_y) / grid.cell_size).ceil() as usize)
            .saturating_sub(1)
            .min(grid.rows - 1);

        for row in first_row..=last_row {
            for col in first_col..=last_col {
                self.blocked[row * grid.cols + col] = 1;
            }
        }
    }

    fn begin(&mut self) -> u32 {
        self.gen = self.gen.wrapping_add(1);
        if self.gen == 0 {
            self.closed_gen.fill(0);
            self.cost_gen.fill(0);
            self.gen = 1;
        }
        self.heap.clear();
        self.gen
    }

    fn grid(&self) -> RoutingGrid {
        self.grid.expect("routing scratch configured")
    }

    fn cost(&self, idx: usize, gen: u32) -> u32 {
        if self.cost_gen[idx] == gen {
            self.cost[idx]
        } else {
            u32::MAX
        }
    }

    fn set_cost(&mut self, idx: usize, gen: u32, cost: u32, came_from: i32) {
        self.cost_gen[idx] = gen;
        self.cost[idx] = cost;
        self.came_from[idx] = came_from;
    }

    /// Stamps `idx` as fully expanded. Returns false if it already was, which
    /// is how stale duplicate heap entries get skipped.
    fn close(&mut self, idx: usize, gen: u32) -> bool {
        if self.closed_gen[idx] == gen {
            return false;
        }
        self.closed_gen[idx] = gen;
        true
    }
}

/// A* over the 4-connected cell grid, uniform step cost, Manhattan heuristic.
///
/// The heap key is `(f, insertion_seq, idx)`: minimum `f` first, and first in
/// first out among equal `f`. Relaxation re-pushes instead of decreasing keys;
/// the closed stamp drops the superseded entries when they surface.
fn shortest_cell_path<'a>(
    start: GridCell,
    goal: GridCell,
    scratch: &'a mut RouteScratch,
) -> Option<&'a [GridCell]> {
    let grid = scratch.grid();
    let start_idx = grid.idx_of(start)?;
    let goal_idx = grid.idx_of(goal)?;

    if start == goal {
        scratch.path.clear();
        scratch.path.push(start);
        return Some(&scratch.path);
    }

    let gen = scratch.begin();
    scratch.set_cost(start_idx, gen, 0, -1);
    let h0 = manhattan(start, goal);
    scratch.heap.push(Reverse((h0, 0u32, start_idx as u32)));
    let mut tie_seq = 1u32;

    while let Some(Reverse((_f_cost, _tie, idx))) = scratch.heap.pop() {
        let idx = idx as usize;
        if !scratch.close(idx, gen) {
            continue;
        }

        if idx == goal_idx {
            return reconstruct(start_idx, goal_idx, grid, scratch);
        }

        let current = grid.cell_at(idx);
        let g_cost = scratch.cost(idx, gen);
        for (dc, dr) in NEIGHBOR_STEPS {
            let next = current.offset(dc, dr);
            let Some(next_idx) = grid.idx_of(next) else {
                continue;
            };
            if scratch.blocked[next_idx] == 1 {
                continue;
            }
            if scratch.closed_gen[next_idx] == gen {
                continue;
            }
            let next_cost = g_cost + 1;
            if next_cost < scratch.cost(next_idx, gen) {
                scratch.set_cost(next_idx, gen, next_cost, idx as i32);
                let f_cost = next_cost + manhattan(next, goal);
                scratch.heap.push(Reverse((f_cost, tie_seq, next_idx as u32)));
                tie_seq = tie_seq.wrapping_add(1);
            }
        }
    }

    None
}

fn reconstruct<'a>(
    start_idx: usize,
    goal_idx: usize,
    grid: RoutingGrid,
    scratch: &'a mut RouteScratch,
) -> Option<&'a [GridCell]> {
    scratch.path.clear();
    scratch.path.push(grid.cell_at(goal_idx));

    let mut cursor_idx = goal_idx;
    while cursor_idx != start_idx {
        let prev_idx = scratch.came_from[cursor_idx] as isize;
        if prev_idx < 0 {
            return None;
        }
        let prev_idx = prev_idx as usize;
        scratch.path.push(grid.cell_at(prev_idx));
        cursor_idx = prev_idx;
    }
    scratch.path.reverse();
    Some(&scratch.path)
}

/// Maps a cell path back to canvas waypoints: the exact `start`, the centers
/// of the interior cells, the exact `end`. A path of one or two cells reduces
/// to the plain segment.
fn waypoints(start: Point, end: Point, grid: RoutingGrid, cells: &[GridCell]) -> Vec<Point> {
    if cells.len() <= 2 {
        return vec![start, end];
    }

    let mut points = Vec::with_capacity(cells.len());
    points.push(start);
    for cell in &cells[1..cells.len() - 1] {
        points.push(grid.center_of(*cell));
    }
    points.push(end);
    points
}

/// Strict routing core. See [`try_find_path`] for semantics; this variant
/// reuses the caller's [`RouteScratch`].
pub fn try_find_path_with_scratch(
    start: Point,
    end: Point,
    obstacles: &[Rect],
    options: &RouteOptions,
    scratch: &mut RouteScratch,
) -> Result<Vec<Point>, RouteError> {
    // Nothing to route around. Skipping the grid entirely keeps the common
    // unobstructed connector an exact straight segment.
    if obstacles.is_empty() {
        return Ok(vec![start, end]);
    }

    let grid = RoutingGrid::from_scene(start, end, obstacles, options.cell_size)
        .ok_or(RouteError::DegenerateGrid)?;

    let start_cell = grid.cell_of(start);
    let end_cell = grid.cell_of(end);
    if grid.idx_of(start_cell).is_none() || grid.idx_of(end_cell).is_none() {
        return Err(RouteError::DegenerateGrid);
    }

    scratch.configure(grid, obstacles);
    let cells = shortest_cell_path(start_cell, end_cell, scratch).ok_or(RouteError::NoPath)?;
    Ok(waypoints(start, end, grid, cells))
}

/// Routes a connector from `start` to `end` around `obstacles`, reporting why
/// routing degraded instead of silently falling back.
///
/// On success the result starts at the exact `start`, ends at the exact `end`,
/// and visits interior grid cell centers whose cells no obstacle overlaps.
/// With an empty obstacle slice the result is `[start, end]` without building
/// a grid.
pub fn try_find_path(
    start: Point,
    end: Point,
    obstacles: &[Rect],
    options: &RouteOptions,
) -> Result<Vec<Point>, RouteError> {
    let mut scratch = RouteScratch::default();
    try_find_path_with_scratch(start, end, obstacles, options, &mut scratch)
}

/// Permissive routing with caller-owned scratch storage: any degraded outcome
/// becomes the straight `[start, end]` segment.
pub fn find_path_with_scratch(
    start: Point,
    end: Point,
    obstacles: &[Rect],
    options: &RouteOptions,
    scratch: &mut RouteScratch,
) -> Vec<Point> {
    try_find_path_with_scratch(start, end, obstacles, options, scratch)
        .unwrap_or_else(|_| vec![start, end])
}

/// Routes a connector from `start` to `end` around `obstacles` with the
/// default cell size.
///
/// Never fails: when the scene cannot be gridded or every route is blocked,
/// the straight `[start, end]` segment comes back instead. Callers that need
/// to distinguish those outcomes use [`try_find_path`].
pub fn find_path(start: Point, end: Point, obstacles: &[Rect]) -> Vec<Point> {
    let mut scratch = RouteScratch::default();
    find_path_with_scratch(start, end, obstacles, &RouteOptions::default(), &mut scratch)
}
