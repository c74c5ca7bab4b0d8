#[macro_use] extern crate log;

pub mod assert;
pub mod runner;
pub mod suite;
pub mod test_case;
