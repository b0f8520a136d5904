pub mod display;
pub mod hardware;
pub mod history;
pub mod monitor;
pub mod rtc;
pub mod sensor;
