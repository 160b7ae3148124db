pub mod state;

pub use state::{CartesianState, Position};
