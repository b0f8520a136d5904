mod format;
mod unit;

pub use format::*;
pub use unit::*;
