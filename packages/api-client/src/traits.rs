use async_trait::async_trait;
use common::{Equipment, FetchError, MtcRecord, Well};

/// Logical operations the catalog needs from the backend.
///
/// Every method fails with [`FetchError`] on a non-success response or a
/// transport failure. Implementations apply their own timeout policy.
#[async_trait]
pub trait WellsApi: Send + Sync {
    async fn fetch_wells(&self) -> Result<Vec<Well>, FetchError>;

    async fn fetch_mtc_records(&self) -> Result<Vec<MtcRecord>, FetchError>;

    async fn fetch_well_by_id(&self, id: i32) -> Result<Well, FetchError>;

    async fn fetch_equipment_by_well(&self, well_id: i32) -> Result<Vec<Equipment>, FetchError>;

    /// Set the IP address of one equipment and return the stored record.
    async fn update_equipment_ip(
        &self,
        equipment_id: i32,
        new_ip: &str,
    ) -> Result<Equipment, FetchError>;
}
