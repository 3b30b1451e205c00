//! Helpers shared by the backend's unit and integration tests.

pub mod problem_details;
pub mod test_logging;
pub mod unique_helpers;
