//! Gateway adapters implementing [`SettingsGateway`].
//!
//! - [`HttpSettingsGateway`] – talks JSON over HTTP to the settings backend.
//! - [`InMemorySettingsGateway`] – keeps the record in process; used for local
//!   development and tests, and can be primed to fail.
//!
//! [`SettingsGateway`]: crate::application::SettingsGateway

pub mod http;
pub mod memory;

pub use http::HttpSettingsGateway;
pub use memory::InMemorySettingsGateway;
