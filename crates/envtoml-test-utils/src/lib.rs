//! Test helpers shared across envtoml crates.

pub mod files;
pub mod fixtures;
pub mod logging;

pub use files::{FixtureDir, parse_table, write_document};
pub use fixtures::{EXAMPLE_OVERRIDES, EXAMPLE_SCALARS, EXAMPLE_TOML_CANONICAL, SERVICE_CONFIG};
pub use logging::init_test_logging;
