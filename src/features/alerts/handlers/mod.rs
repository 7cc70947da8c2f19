mod alert_handler;

pub use alert_handler::{alert_line, handle, AlertCommand};
