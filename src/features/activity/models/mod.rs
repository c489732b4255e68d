mod activity_log;

pub use activity_log::{ActivityAction, ActivityLog, ActivitySeverity};
