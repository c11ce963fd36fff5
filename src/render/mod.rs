// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Turning routed polylines into drawable output.
//!
//! The routing layer hands over raw cell-by-cell waypoints; this module
//! collapses them and emits rounded SVG path data plus the label anchor the
//! editor places on each connector.

pub mod svg;

pub use svg::{smooth_polyline, svg_path_data, svg_path_midpoint, CORNER_RADIUS};
