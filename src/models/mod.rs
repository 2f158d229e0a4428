pub mod attendance_log;
pub mod record;

pub use attendance_log::AttendanceLog;
pub use record::AttendanceRecord;
