//! Data access for the wells backend.
//!
//! [`WellsApi`] is the seam the catalog talks through; [`HttpWellsApi`] is the
//! REST implementation used in production.

pub mod http;
pub mod routes;
pub mod traits;

pub use http::HttpWellsApi;
pub use traits::WellsApi;
