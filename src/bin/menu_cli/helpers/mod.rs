// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy
// ABOUTME: Helper modules for menu-cli
// ABOUTME: Output formatting shared by every command

pub mod display;
