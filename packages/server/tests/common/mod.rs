pub mod fixtures;
pub mod harness;

pub use harness::TestApp;
