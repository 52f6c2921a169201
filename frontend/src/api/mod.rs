mod auth;
mod client;
mod leaves;
mod users;
mod workflows;

pub mod types;

pub use client::{ApiClient, CURRENT_USER_KEY, TOKEN_KEY};
pub use types::*;
