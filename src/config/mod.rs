// ABOUTME: Configuration module for the menu tools
// ABOUTME: Environment-driven settings shared by the library and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

/// Environment configuration
pub mod environment;

pub use environment::{parse_bool, DisplayFormat, MenuConfig};
