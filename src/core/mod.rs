pub mod error;
pub mod i18n;
pub mod logging;

// Synthetic analytics bundles and the pluggable source trait
pub mod scenario;
