pub mod playlist;
pub mod sim;

pub use playlist::*;
pub use sim::*;
