//! This module defines the HTTP request handlers for the REST API.

pub mod category;
pub mod savings;
pub mod transaction;
