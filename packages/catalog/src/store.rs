use api_client::WellsApi;
use common::{FetchError, MtcRecord, Well};
use tracing::{debug, info};

/// What a call to [`EntityStore::load`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Both collections were fetched and replaced.
    Fetched,
    /// Both collections were already populated; nothing was requested.
    AlreadyLoaded,
}

/// In-memory mirror of the backend's well and MTC collections.
///
/// Collections are only ever replaced wholesale. A failed fetch leaves them
/// exactly as they were.
#[derive(Debug, Default, Clone)]
pub struct EntityStore {
    wells: Vec<Well>,
    mtc_records: Vec<MtcRecord>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-fetched collections.
    pub fn from_parts(wells: Vec<Well>, mtc_records: Vec<MtcRecord>) -> Self {
        Self { wells, mtc_records }
    }

    pub fn wells(&self) -> &[Well] {
        &self.wells
    }

    pub fn mtc_records(&self) -> &[MtcRecord] {
        &self.mtc_records
    }

    pub fn is_loaded(&self) -> bool {
        !self.wells.is_empty() && !self.mtc_records.is_empty()
    }

    /// Fetch both collections unless both are already populated.
    ///
    /// The two requests run concurrently. If either fails, neither collection
    /// is touched.
    pub async fn load<A>(&mut self, api: &A) -> Result<LoadOutcome, FetchError>
    where
        A: WellsApi + ?Sized,
    {
        if self.is_loaded() {
            debug!(
                wells = self.wells.len(),
                mtc_records = self.mtc_records.len(),
                "Catalog already loaded"
            );
            return Ok(LoadOutcome::AlreadyLoaded);
        }

        let (wells, mtc_records) = tokio::try_join!(api.fetch_wells(), api.fetch_mtc_records())?;

        info!(
            wells = wells.len(),
            mtc_records = mtc_records.len(),
            "Catalog loaded"
        );
        self.wells = wells;
        self.mtc_records = mtc_records;
        Ok(LoadOutcome::Fetched)
    }

    /// Fetch the MTC collection if it is empty, without storing it.
    ///
    /// Pair with [`EntityStore::install_mtc_records`] once the caller knows the
    /// surrounding operation succeeded.
    pub async fn missing_mtc_records<A>(
        &self,
        api: &A,
    ) -> Result<Option<Vec<MtcRecord>>, FetchError>
    where
        A: WellsApi + ?Sized,
    {
        if !self.mtc_records.is_empty() {
            return Ok(None);
        }
        debug!("MTC records not loaded yet, fetching on demand");
        api.fetch_mtc_records().await.map(Some)
    }

    /// Store `records` as the MTC collection if it is still empty.
    ///
    /// Returns whether the records were installed.
    pub fn install_mtc_records(&mut self, records: Vec<MtcRecord>) -> bool {
        if !self.mtc_records.is_empty() {
            return false;
        }
        info!(count = records.len(), "MTC records installed");
        self.mtc_records = records;
        true
    }

    pub fn well(&self, id: i32) -> Option<&Well> {
        self.wells.iter().find(|well| well.id == id)
    }

    /// First MTC record attached to `well_id`.
    pub fn mtc_for_well(&self, well_id: i32) -> Option<&MtcRecord> {
        self.mtc_records
            .iter()
            .find(|record| record.well_id == well_id)
    }
}
