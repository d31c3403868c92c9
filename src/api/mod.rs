//! HTTP API module for the Leave Balance Engine.
//!
//! This module provides the REST endpoint for querying an employee's leave
//! balance.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::BalanceRequest;
pub use response::ApiError;
pub use state::AppState;
