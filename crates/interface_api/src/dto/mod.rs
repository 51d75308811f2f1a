//! Request/response data transfer objects

pub mod cars;
pub mod claims;
