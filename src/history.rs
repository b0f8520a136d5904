mod reading;
mod reading_log;
mod trend;

pub use reading::*;
pub use reading_log::*;
pub use trend::*;
