use api_client::WellsApi;
use common::{Equipment, FetchError, MtcRecord, Well};
use tracing::{debug, info, warn};

use crate::store::EntityStore;

/// Headline facts about a selected well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSummary {
    pub well_name: String,
    pub site_name: &'static str,
    pub equipment_count: usize,
    /// Any equipment carries a non-empty IP address.
    pub has_ip_address: bool,
    pub has_mtc_record: bool,
}

/// Everything the detail view shows for one well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellDetail {
    pub well: Well,
    pub equipment: Vec<Equipment>,
    pub mtc_record: Option<MtcRecord>,
    pub summary: DetailSummary,
}

impl WellDetail {
    pub fn compose(well: Well, equipment: Vec<Equipment>, mtc_record: Option<MtcRecord>) -> Self {
        let summary = summarize(&well, &equipment, mtc_record.as_ref());
        Self {
            well,
            equipment,
            mtc_record,
            summary,
        }
    }

    /// The equipment tagged `"POZO"`, i.e. the well's own network endpoint.
    pub fn primary_equipment(&self) -> Option<&Equipment> {
        self.equipment.iter().find(|e| e.is_primary())
    }

    pub fn auxiliary_equipment(&self) -> impl Iterator<Item = &Equipment> {
        self.equipment.iter().filter(|e| !e.is_primary())
    }

    /// `"<well> - <site>"`.
    pub fn title(&self) -> String {
        format!("{} - {}", self.summary.well_name, self.summary.site_name)
    }

    /// Swap in a fresh copy of one equipment record, keeping the summary in step.
    ///
    /// Returns `false` if no equipment with that id belongs to this detail.
    pub fn replace_equipment(&mut self, updated: Equipment) -> bool {
        let Some(slot) = self.equipment.iter_mut().find(|e| e.id == updated.id) else {
            return false;
        };
        *slot = updated;
        self.summary = summarize(&self.well, &self.equipment, self.mtc_record.as_ref());
        true
    }
}

fn summarize(
    well: &Well,
    equipment: &[Equipment],
    mtc_record: Option<&MtcRecord>,
) -> DetailSummary {
    DetailSummary {
        well_name: well.name.clone(),
        site_name: well.site_name(),
        equipment_count: equipment.len(),
        has_ip_address: equipment.iter().any(Equipment::has_ip_address),
        has_mtc_record: mtc_record.is_some(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Loading {
        well_id: i32,
    },
    Selected(WellDetail),
    Failed {
        well_id: i32,
        error: FetchError,
    },
}

/// Issued by [`SelectionController::begin`]; hand it back to
/// [`SelectionController::complete`] with the fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket {
    token: u64,
    well_id: i32,
}

impl SelectionTicket {
    pub fn well_id(&self) -> i32 {
        self.well_id
    }
}

/// Whether a completed fetch was published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer `begin` or a `clear` happened first; the result was dropped.
    Stale,
}

/// Raw material for a [`WellDetail`], gathered by [`fetch_detail`].
#[derive(Debug, Clone)]
pub struct FetchedDetail {
    pub well: Well,
    pub equipment: Vec<Equipment>,
    /// Present when the store had no MTC records and they were fetched here.
    pub mtc_records: Option<Vec<MtcRecord>>,
}

/// Fetch a well, its equipment and, if the store lacks them, the MTC records.
///
/// The three requests run concurrently and the first failure aborts the rest.
/// The store is only read here.
pub async fn fetch_detail<A>(
    api: &A,
    store: &EntityStore,
    well_id: i32,
) -> Result<FetchedDetail, FetchError>
where
    A: WellsApi + ?Sized,
{
    let (well, equipment, mtc_records) = tokio::try_join!(
        api.fetch_well_by_id(well_id),
        api.fetch_equipment_by_well(well_id),
        store.missing_mtc_records(api),
    )?;

    Ok(FetchedDetail {
        well,
        equipment,
        mtc_records,
    })
}

/// Tracks which well is selected and publishes its detail.
///
/// Every [`begin`](Self::begin) bumps a generation counter. A completion is
/// only applied if it carries the current generation, so when selections
/// overlap the last one issued wins.
#[derive(Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
    generation: u64,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn detail(&self) -> Option<&WellDetail> {
        match &self.state {
            SelectionState::Selected(detail) => Some(detail),
            _ => None,
        }
    }

    pub(crate) fn detail_mut(&mut self) -> Option<&mut WellDetail> {
        match &mut self.state {
            SelectionState::Selected(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SelectionState::Loading { .. })
    }

    /// Well the controller is loading, showing or failed on.
    pub fn well_id(&self) -> Option<i32> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::Loading { well_id } | SelectionState::Failed { well_id, .. } => {
                Some(*well_id)
            }
            SelectionState::Selected(detail) => Some(detail.well.id),
        }
    }

    /// Enter `Loading` for `well_id` and invalidate any outstanding ticket.
    pub fn begin(&mut self, well_id: i32) -> SelectionTicket {
        self.generation += 1;
        self.state = SelectionState::Loading { well_id };
        debug!(well_id, generation = self.generation, "Selection started");
        SelectionTicket {
            token: self.generation,
            well_id,
        }
    }

    /// Publish the outcome of a fetch started with `ticket`.
    ///
    /// MTC records fetched on demand are installed into `store` whenever the
    /// fetch succeeded, even if the selection itself is stale.
    pub fn complete(
        &mut self,
        ticket: SelectionTicket,
        result: Result<FetchedDetail, FetchError>,
        store: &mut EntityStore,
    ) -> Completion {
        let result = result.map(|fetched| {
            if let Some(records) = fetched.mtc_records {
                store.install_mtc_records(records);
            }
            (fetched.well, fetched.equipment)
        });

        if ticket.token != self.generation {
            debug!(
                well_id = ticket.well_id,
                token = ticket.token,
                generation = self.generation,
                "Discarding stale selection result"
            );
            return Completion::Stale;
        }

        self.state = match result {
            Ok((well, equipment)) => {
                let mtc_record = store.mtc_for_well(ticket.well_id).cloned();
                let detail = WellDetail::compose(well, equipment, mtc_record);
                info!(
                    well_id = ticket.well_id,
                    equipment = detail.summary.equipment_count,
                    has_mtc = detail.summary.has_mtc_record,
                    "Well selected"
                );
                SelectionState::Selected(detail)
            }
            Err(error) => {
                warn!(well_id = ticket.well_id, error = %error, "Failed to load well detail");
                SelectionState::Failed {
                    well_id: ticket.well_id,
                    error,
                }
            }
        };
        Completion::Applied
    }

    /// Select `well_id`: begin, fetch, complete.
    ///
    /// On failure the controller is left in `Failed` and the error is returned.
    pub async fn select<A>(
        &mut self,
        api: &A,
        store: &mut EntityStore,
        well_id: i32,
    ) -> Result<(), FetchError>
    where
        A: WellsApi + ?Sized,
    {
        let ticket = self.begin(well_id);
        let result = fetch_detail(api, store, well_id).await;
        let error = result.as_ref().err().cloned();
        self.complete(ticket, result, store);
        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Drop the current selection and invalidate outstanding tickets.
    pub fn clear(&mut self) {
        self.generation += 1;
        if self.state != SelectionState::Idle {
            debug!("Selection cleared");
        }
        self.state = SelectionState::Idle;
    }
}
