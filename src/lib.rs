//! # axis-stats
//! Mean, sum and median by row and by column of a two-dimensional array.
//!
//! The pipeline is three steps: [`api::builder`] makes a grid, [`api::stats`]
//! reduces it along both axes and [`api::report`] renders the result.

/// Public High Level API
pub mod api {
    /// Settings which describe the grid to build.
    pub mod settings {
        pub mod array_settings;
    }

    /// Creates sequential or seeded random integer grids.
    pub mod builder;

    /// Axis reductions over 2D arrays.
    pub mod stats {
        pub mod axis_stats;
        pub mod errors;
        pub mod stat_label;
    }

    /// Human readable rendering of a grid and its statistics.
    pub mod report {
        pub mod report_format;
        #[cfg(feature = "tables")]
        pub mod table_report;
        pub mod text_report;
    }
}

pub mod utilities {
    /// Numeric element types accepted by the statistics calculator.
    pub mod stat_element;

    /// Median of a lane of values.
    pub mod median;

    pub mod format {
        /// Rendering and alignment of individual array cells.
        pub mod cells;
    }
}

/// Commonly used items, for `use axis_stats::prelude::*`.
pub mod prelude {
    pub use crate::api::builder::{make_array, make_random, make_sequential};
    pub use crate::api::report::report_format::ReportFormat;
    #[cfg(feature = "tables")]
    pub use crate::api::report::table_report::format_tables;
    pub use crate::api::report::text_report::{format_report, print_report};
    pub use crate::api::settings::array_settings::{ArraySettings, SettingsError};
    pub use crate::api::stats::axis_stats::{compute_stats, AxisStats, StatSeries};
    pub use crate::api::stats::errors::StatsError;
    pub use crate::api::stats::stat_label::StatLabel;
    pub use crate::utilities::stat_element::StatElement;
}
