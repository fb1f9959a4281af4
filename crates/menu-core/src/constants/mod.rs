// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for pricing display, sizes, and environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Train Therapy

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// Price display
pub mod pricing {
    /// Currency code appended after every displayed price
    pub const DEFAULT_CURRENCY: &str = "BHD";
    /// Decimal places used for every displayed amount
    pub const PRICE_DECIMALS: usize = 2;
    /// Separator between the bounds of a ranged price (en-dash)
    pub const RANGE_SEPARATOR: char = '\u{2013}';
}

/// Size variants
pub mod sizes {
    /// Wire/display key of the regular size
    pub const REGULAR: &str = "regular";
    /// Wire/display key of the large size
    pub const LARGE: &str = "large";
    /// Button label of the regular size
    pub const REGULAR_LABEL: &str = "Regular";
    /// Button label of the large size
    pub const LARGE_LABEL: &str = "Large";
}

/// Item tags
pub mod tags {
    /// Tag marking a house favorite
    pub const FAVORITE: &str = "favorite";
}

/// Copy shown alongside nutrition data
pub mod nutrition_copy {
    /// Heading of the benefits block
    pub const BENEFITS_HEADING: &str = "Health Benefits";
    /// Heading of the macros block
    pub const MACROS_HEADING: &str = "Typical Macros";
    /// Disclaimer shown whenever nutrition data is displayed
    pub const DISCLAIMER: &str =
        "Values are approximate and vary by flavor, size and customization.";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const MENU_SERVICE: &str = "train-therapy-menu";
    /// Command-line tool name
    pub const MENU_CLI: &str = "menu-cli";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Currency code override
    pub const CURRENCY: &str = "MENU_CURRENCY";
    /// Initial size for detail views
    pub const DEFAULT_SIZE: &str = "MENU_DEFAULT_SIZE";
    /// Output format for the CLI (text, json, toon)
    pub const OUTPUT_FORMAT: &str = "MENU_OUTPUT_FORMAT";
    /// Reject item nutrition keys that no catalog item reaches
    pub const STRICT_NUTRITION_KEYS: &str = "MENU_STRICT_NUTRITION_KEYS";
}
