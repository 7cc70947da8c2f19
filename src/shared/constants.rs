/// Number of alerts shown on the dashboard
pub const DASHBOARD_RECENT_ALERTS: usize = 3;
