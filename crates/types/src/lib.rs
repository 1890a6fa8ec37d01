pub mod account;
pub mod units;

pub use account::*;
pub use units::*;
