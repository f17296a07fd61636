//! Crate-level test suites that span more than one module.

mod property;
