//! Client-side catalog of wells and motocompresor records.
//!
//! - [`EntityStore`] mirrors the backend collections.
//! - [`aggregate`] derives KPI and chart figures from a store snapshot.
//! - [`filter`] projects the well list by site and search term.
//! - [`SelectionController`] drives which well's detail is shown.
//! - [`AppState`] owns all of the above for one session.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod selection;
pub mod state;
pub mod store;

pub use aggregate::{AvailabilityCounts, AvailabilityRow, Kpis, SiteTally};
pub use error::CatalogError;
pub use filter::{ResultCount, filter_wells, highlight};
pub use selection::{
    Completion, DetailSummary, FetchedDetail, SelectionController, SelectionState,
    SelectionTicket, WellDetail, fetch_detail,
};
pub use state::AppState;
pub use store::{EntityStore, LoadOutcome};
