pub mod appointments;
pub mod links;
pub mod notify;
pub mod rtc;
