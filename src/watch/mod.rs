// Polling loop that watches a single numeric value
pub mod events;
pub mod monitor;

pub use events::ChangeEvent;
pub use monitor::Monitor;
