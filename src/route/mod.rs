// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Obstacle-avoiding connector routing.
//!
//! This module grids the scene around a connector's endpoints and searches the
//! grid for a shortest orthogonal route that avoids node rectangles.

pub mod connector;

pub use connector::{
    find_path, find_path_with_scratch, try_find_path, try_find_path_with_scratch, RouteError,
    RouteOptions, RouteScratch, DEFAULT_CELL_SIZE, GRID_PADDING_CELLS, MAX_GRID_CELLS,
};
