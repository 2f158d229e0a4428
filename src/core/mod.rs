pub mod backup;
pub mod cache;
pub mod session;
pub mod stats;
pub mod store;

pub use cache::CacheState;
pub use session::Session;
pub use store::{AttendanceStore, ClearOutcome, StoreOptions};
