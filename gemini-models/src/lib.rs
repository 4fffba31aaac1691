//! Lists the Gemini models an API key can generate content with.

pub mod capabilities;
pub mod client;
pub mod error;
pub mod lister;
pub mod models;
pub mod settings;

#[cfg(test)]
mod test_support;

pub use gemini_models_types as types;

pub use client::{Client, ClientBuilder, HttpOptions};
pub use error::{Error, Result};
pub use lister::{ModelLister, ModelSource, Outcome};
pub use settings::Settings;
