pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Event buffer size between the controller and the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Pending manual refresh activations. Extra key presses beyond this are dropped.
    pub const REFRESH_TRIGGER_QUEUE_SIZE: usize = 4;

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Refresh timing configuration
    pub mod refresh {
        use std::time::Duration;

        /// Interval between automatic load cycles (seconds)
        pub const AUTO_REFRESH_INTERVAL_SECS: u64 = 5 * 60; // 5 minutes

        /// Minimum time the refresh control stays disabled after a manual load (milliseconds)
        pub const SETTLE_DELAY_MS: u64 = 1000;

        /// Helper function to get the automatic refresh interval
        pub const fn auto_refresh_interval() -> Duration {
            Duration::from_secs(AUTO_REFRESH_INTERVAL_SECS)
        }

        /// Helper function to get the settle delay
        pub const fn settle_delay() -> Duration {
            Duration::from_millis(SETTLE_DELAY_MS)
        }
    }

    // =============================================================================
    // DATA SOURCE CONFIGURATION
    // =============================================================================

    /// Resource locations and HTTP client settings
    pub mod resources {
        use std::time::Duration;

        /// Metrics resource, relative to the data source root
        pub const METRICS_PATH: &str = "data/metrics.json";

        /// Updates resource, relative to the data source root
        pub const UPDATES_PATH: &str = "data/updates.json";

        /// Default base URL when nothing else is configured
        pub const LOCAL_BASE_URL: &str = "http://localhost:8000";

        /// HTTP connect timeout (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// HTTP request timeout (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // DISPLAY TEXT
    // =============================================================================

    /// Placeholder shown for an empty update sequence
    pub const NO_UPDATES_PLACEHOLDER: &str = "No updates available";

    /// Notice shown when a load cycle fails outside the sub-loads' own recovery
    pub const LOAD_FAILURE_NOTICE: &str = "Failed to load dashboard data";
}
