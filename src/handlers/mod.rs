//! HTTP handlers for the project and palette endpoints.

/// Palette endpoint handlers.
pub mod palette;
/// Project endpoint handlers.
pub mod project;
