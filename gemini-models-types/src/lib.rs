//! Wire types for the Gemini `ListModels` API.

pub mod models;
