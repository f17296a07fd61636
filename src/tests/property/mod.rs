//! Property-based tests for the dashboard
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `scenario_props`: bundles from the simulated generator
//!   - Every sampled value stays inside its documented bounds
//!   - Bundle shapes are fixed regardless of guest id or seed
//!   - Deterministic given same seed
//!
//! - `text_field_props`: the single-line input used by the views
//!   - Cursor never leaves the content
//!   - Typed text round-trips through `value`
//!   - Blank input is never submitted

mod scenario_props;
mod text_field_props;
