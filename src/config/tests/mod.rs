//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: API URL, credentials, filters and paths
//! - `loading`: Loading from the environment and command line
//! - `validation`: Configuration consistency validation tests

mod field_resolution;
mod helpers;
