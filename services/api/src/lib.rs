//! Recipe & grocery assistant API
//!
//! Proxies recipe and translation prompts to the Gemini API and keeps a
//! shopping list, user settings and client status checks in a document store.

pub mod config;
pub mod error;
pub mod extract;
pub mod gemini;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

pub use routes::create_router;
pub use state::AppState;
