// Pbevents Event Handling
// Event pump and the recording batch sink

pub mod batch;
pub mod pump;

pub use batch::{batch_config, EventBatch};
pub use pump::{EventPump, PumpConfig, PumpStats};
