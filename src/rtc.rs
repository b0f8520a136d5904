mod bcd;
mod calendar;
mod clock_reading;
mod policy;
mod registers;

pub use bcd::*;
pub use calendar::*;
pub use clock_reading::*;
pub use policy::*;
pub use registers::*;
