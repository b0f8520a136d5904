mod air_quality;
mod conversion;
mod raw_frame;

pub use air_quality::*;
pub use conversion::*;
pub use raw_frame::*;
