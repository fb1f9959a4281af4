// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy
// ABOUTME: Command modules for menu-cli
// ABOUTME: One module per subcommand

pub mod audit;
pub mod browse;
pub mod sections;
pub mod show;
