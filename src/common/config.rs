/// Application configuration constants
pub struct AppConfig;

impl AppConfig {
    // UI Rendering Constants
    pub const MIN_RENDER_INTERVAL_MS: u64 = 33; // ~30 FPS
    pub const EVENT_POLL_TIMEOUT_MS: u64 = 50;

    // UI Layout Constants
    pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;
    pub const DEFAULT_TERMINAL_HEIGHT: u16 = 24;
    pub const SUMMARY_PANEL_WIDTH: usize = 34;

    // Notifications
    pub const NOTIFICATION_DURATION_SECS: u64 = 3;

    // Deployment form defaults
    pub const DEFAULT_BLOCK_DISK_GB: u64 = 50;
    pub const DISK_SIZE_STEP_GB: u64 = 10;
    pub const MAX_INSTANCE_COUNT: u32 = 50;

    // Color Thresholds (usage ratios)
    pub const CRITICAL_THRESHOLD: f64 = 0.8;
    pub const WARNING_THRESHOLD: f64 = 0.7;
    pub const NORMAL_THRESHOLD: f64 = 0.25;
    pub const LOW_THRESHOLD: f64 = 0.05;
}

/// UI Theme configuration
pub struct ThemeConfig;

impl ThemeConfig {
    pub fn usage_bar_color(fill_ratio: f64) -> crossterm::style::Color {
        use crossterm::style::Color;

        if fill_ratio > AppConfig::CRITICAL_THRESHOLD {
            Color::Red
        } else if fill_ratio > AppConfig::WARNING_THRESHOLD {
            Color::Yellow
        } else if fill_ratio > AppConfig::NORMAL_THRESHOLD {
            Color::Green
        } else if fill_ratio > AppConfig::LOW_THRESHOLD {
            Color::DarkGreen
        } else {
            Color::DarkGrey
        }
    }

    pub fn utilization_color(utilization: f64) -> crossterm::style::Color {
        use crossterm::style::Color;

        if utilization > 80.0 {
            Color::Red
        } else if utilization > 50.0 {
            Color::Yellow
        } else if utilization > 20.0 {
            Color::Green
        } else {
            Color::DarkGrey
        }
    }
}
