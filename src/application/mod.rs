//! Application layer: session state and rendering
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod render;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use session::{Frame, Metrics, Visualizer};
