//! Request handlers.
//!
//! Handlers translate HTTP input into pipeline requests and map errors via
//! [`AppError`](crate::error::AppError).

pub mod upload;
