use anyhow::{Context, bail};
use api_client::WellsApi;
use catalog::{AppState, SelectionState};
use tracing::info;

use crate::render;

pub async fn dashboard<A: WellsApi + ?Sized>(api: &A, state: &mut AppState) -> anyhow::Result<()> {
    state.load(api).await.context("Failed to load catalog")?;

    let kpis = state.kpis();
    let rows = state.availability_counts().rows(kpis.total_mtc);
    print!("{}", render::dashboard(&kpis, &rows, &state.site_tallies()));
    Ok(())
}

pub async fn list<A: WellsApi + ?Sized>(
    api: &A,
    state: &mut AppState,
    site: Option<&str>,
    search: Option<&str>,
) -> anyhow::Result<()> {
    state.load(api).await.context("Failed to load catalog")?;
    state.set_site_filter(site);
    if let Some(term) = search {
        state.set_search_term(term);
    }

    let rows = state
        .visible_wells()
        .into_iter()
        .map(|well| (well, state.store().mtc_for_well(well.id)));
    print!("{}", render::well_list(rows, state.search_term(), state.result_count()));
    Ok(())
}

async fn select<A: WellsApi + ?Sized>(
    api: &A,
    state: &mut AppState,
    well_id: i32,
) -> anyhow::Result<()> {
    state.load(api).await.context("Failed to load catalog")?;
    state
        .select(api, well_id)
        .await
        .with_context(|| format!("Failed to load well {well_id}"))?;
    Ok(())
}

pub async fn show<A: WellsApi + ?Sized>(
    api: &A,
    state: &mut AppState,
    well_id: i32,
) -> anyhow::Result<()> {
    select(api, state, well_id).await?;
    match state.selection().state() {
        SelectionState::Selected(detail) => print!("{}", render::detail(detail)),
        other => bail!("Well {well_id} is not selected: {other:?}"),
    }
    Ok(())
}

pub async fn set_ip<A: WellsApi + ?Sized>(
    api: &A,
    state: &mut AppState,
    well_id: i32,
    ip: &str,
) -> anyhow::Result<()> {
    select(api, state, well_id).await?;
    let updated = state
        .update_primary_ip(api, ip)
        .await
        .with_context(|| format!("Failed to update IP for well {well_id}"))?;

    info!(well_id, equipment_id = updated.id, "Primary IP updated");
    println!(
        "Equipment #{} now at {}",
        updated.id,
        updated.ip_address.as_deref().unwrap_or("-")
    );
    Ok(())
}
