//! HTTP route handlers.

pub mod health;
pub mod login;
pub mod portfolio;
