pub mod beep;
pub mod detector;
pub mod range;

pub use beep::{AlertSink, Beeper, Silent, ToneError};
pub use detector::{Change, ChangeDetector};
pub use range::{in_range, Range};
