//! HTTP-style request boundary.
//!
//! ## Key Types
//!
//! - `Api`: Routes requests to the validators and the card store
//! - `ApiResponse`: Status code plus JSON body
//! - `Method`: Request method

pub mod response;
pub mod router;

pub use response::{ApiResponse, Method};
pub use router::Api;
