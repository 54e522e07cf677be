//! Theme configuration, normalization and custom-property derivation.
//!
//! A loosely specified [`ThemeConfig`] is normalized into a fully
//! populated [`Theme`], which [`build_custom_properties`] turns into a
//! fixed set of named colors and lengths.

mod colors;
pub use colors::*;

mod config;
pub use config::*;

mod custom_properties;
pub use custom_properties::*;

mod deserializers;

mod error;
pub use error::*;

mod schema;
pub use schema::*;
