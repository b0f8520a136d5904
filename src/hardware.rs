mod board;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use board::*;
pub use error::*;
#[cfg(any(test, feature = "mock"))]
pub use mock::*;
