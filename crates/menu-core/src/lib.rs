// ABOUTME: Core types and constants for the Train Therapy menu engine
// ABOUTME: Foundation crate with error handling, menu models, slugs, and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

#![deny(unsafe_code)]

//! # Menu Core
//!
//! Foundation crate providing shared types and constants for the Train Therapy
//! menu. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `CatalogError`
//! - **constants**: Currency, size labels, and environment variable names
//! - **models**: Prices, items, sections, and nutrition tables
//! - **slug**: Canonical lookup keys derived from display names
//! - **formatters**: Output format abstraction (JSON, TOON)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Price, Item, Section, nutrition types)
pub mod models;

/// Slug normalization for item lookup keys
pub mod slug;

/// Output format abstraction (JSON, TOON)
pub mod formatters;
