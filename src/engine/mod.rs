//! Turn engine and game session

mod session;
mod snapshot;
mod turn;


pub use session::*;
pub use snapshot::*;
pub use turn::*;
