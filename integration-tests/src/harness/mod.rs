mod logs;
pub mod tracing;
mod workspace;

pub use logs::{LogLine, access_log};
pub use self::tracing::{CapturedEvent, captured_events, init_test_tracing};
pub use workspace::TestWorkspace;
