use api_client::WellsApi;
use common::{Equipment, FetchError, Well};
use tracing::{debug, info};

use crate::aggregate::{self, AvailabilityCounts, Kpis, SiteTally};
use crate::error::{CatalogError, Result};
use crate::filter::{ResultCount, filter_wells};
use crate::selection::{Completion, FetchedDetail, SelectionController, SelectionTicket, WellDetail};
use crate::store::{EntityStore, LoadOutcome};

/// Session state: the entity mirror, the current filters and the selection.
///
/// One value per session. Handlers receive the ids and values they act on as
/// parameters.
#[derive(Debug, Default)]
pub struct AppState {
    store: EntityStore,
    selection: SelectionController,
    site_filter: Option<String>,
    search_term: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: EntityStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn site_filter(&self) -> Option<&str> {
        self.site_filter.as_deref()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub async fn load<A>(&mut self, api: &A) -> std::result::Result<LoadOutcome, FetchError>
    where
        A: WellsApi + ?Sized,
    {
        self.store.load(api).await
    }

    /// Load the catalog and show `default_site`, as the management view does on open.
    pub async fn open_management<A>(
        &mut self,
        api: &A,
        default_site: &str,
    ) -> std::result::Result<(), FetchError>
    where
        A: WellsApi + ?Sized,
    {
        self.store.load(api).await?;
        self.set_site_filter(Some(default_site));
        Ok(())
    }

    /// Switch site. Clears the selection and the search term.
    pub fn set_site_filter(&mut self, site: Option<&str>) {
        let site = site.filter(|s| !s.is_empty()).map(str::to_owned);
        info!(site = site.as_deref().unwrap_or("all"), "Site filter changed");
        self.site_filter = site;
        self.search_term.clear();
        self.selection.clear();
    }

    pub fn set_search_term(&mut self, term: &str) {
        debug!(term, "Search term changed");
        self.search_term = term.to_owned();
    }

    /// Wells matching the current site filter and search term.
    pub fn visible_wells(&self) -> Vec<&Well> {
        filter_wells(
            self.store.wells(),
            self.site_filter.as_deref(),
            Some(&self.search_term),
        )
    }

    /// Visible wells relative to the wells of the current site.
    pub fn result_count(&self) -> ResultCount {
        let site_total = filter_wells(self.store.wells(), self.site_filter.as_deref(), None).len();
        ResultCount::of(self.visible_wells().len(), site_total)
    }

    pub fn kpis(&self) -> Kpis {
        aggregate::kpis(self.store.wells(), self.store.mtc_records())
    }

    pub fn availability_counts(&self) -> AvailabilityCounts {
        aggregate::count_by_availability(self.store.mtc_records())
    }

    pub fn site_tallies(&self) -> Vec<SiteTally> {
        aggregate::count_by_site(self.store.wells())
    }

    /// Select a well and wait for its detail.
    pub async fn select<A>(&mut self, api: &A, well_id: i32) -> std::result::Result<(), FetchError>
    where
        A: WellsApi + ?Sized,
    {
        self.selection.select(api, &mut self.store, well_id).await
    }

    /// First half of an overlapping-capable selection; see [`SelectionController::begin`].
    pub fn begin_select(&mut self, well_id: i32) -> SelectionTicket {
        self.selection.begin(well_id)
    }

    pub fn complete_select(
        &mut self,
        ticket: SelectionTicket,
        result: std::result::Result<FetchedDetail, FetchError>,
    ) -> Completion {
        self.selection.complete(ticket, result, &mut self.store)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn detail(&self) -> Option<&WellDetail> {
        self.selection.detail()
    }

    /// Change the IP of the selected well's primary equipment.
    ///
    /// On success the detail is refreshed with the record the backend returned.
    pub async fn update_primary_ip<A>(&mut self, api: &A, new_ip: &str) -> Result<Equipment>
    where
        A: WellsApi + ?Sized,
    {
        let detail = self.selection.detail().ok_or(CatalogError::NoSelection)?;
        let equipment_id = detail
            .primary_equipment()
            .map(|e| e.id)
            .ok_or(CatalogError::NoPrimaryEquipment {
                well_id: detail.well.id,
            })?;

        let new_ip = new_ip.trim();
        if new_ip.is_empty() {
            return Err(CatalogError::EmptyIpAddress);
        }

        let updated = api.update_equipment_ip(equipment_id, new_ip).await?;
        if let Some(detail) = self.selection.detail_mut() {
            detail.replace_equipment(updated.clone());
        }
        Ok(updated)
    }
}
