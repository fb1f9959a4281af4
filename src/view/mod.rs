// ABOUTME: Presentation layer over the catalog
// ABOUTME: Detail sheet rendering data and the transient browsing state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

/// Item detail sheet
pub mod detail;
/// Query, selection and size toggle
pub mod state;

pub use detail::{effective_size, DetailView, SizeOption};
pub use state::{MenuState, Selection};
