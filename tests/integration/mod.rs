//! End-to-end dispatch scenarios.

pub mod capture_test;
pub mod common;
pub mod dispatch_test;
pub mod sql_template_test;
