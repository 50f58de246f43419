use common::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("No well is selected")]
    NoSelection,

    #[error("Well {well_id} has no primary equipment")]
    NoPrimaryEquipment { well_id: i32 },

    #[error("IP address must not be empty")]
    EmptyIpAddress,
}

pub type Result<T> = std::result::Result<T, CatalogError>;
