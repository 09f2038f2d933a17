//! # weft-io
//!
//! The boundary between the simulator and the outside world: run files,
//! their validation, binary state snapshots, and JSON frame export.

pub mod contract;
pub mod export;
pub mod snapshot;
pub mod validator;

pub use contract::{InputFormat, SimulationInput};
pub use export::{Frame, FrameExport};
pub use snapshot::StateSnapshot;
pub use validator::validate_input;
