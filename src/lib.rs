// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naiad — connector routing and path smoothing for funnel diagram editors.
//!
//! [`route`] grids the scene around a connector and finds a shortest
//! obstacle-avoiding polyline; [`render`] collapses that polyline and emits
//! rounded SVG path data. Both layers are pure and synchronous, so the host
//! editor decides when and how often to re-route.

pub mod model;
pub mod render;
pub mod route;
