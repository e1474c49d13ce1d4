mod error;
mod memory;
mod record;
mod traits;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use record::{CommandSubmissionRecord, FlightRecord};
pub use traits::CommandStore;
