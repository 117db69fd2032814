//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic item seeding,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod item;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::LarderCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use item::TestItem;
