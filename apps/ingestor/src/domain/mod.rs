//! Domain layer: decoded replay records and the pure rules applied to them.

pub mod preset;
pub mod replay;
pub mod size_guard;

pub use preset::{classify, Preset};
pub use replay::{Participant, ReplayRecord};
pub use size_guard::check_size;
