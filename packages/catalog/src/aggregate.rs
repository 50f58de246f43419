//! Derived figures for the dashboard: status counts, per-site tallies, KPIs.
//!
//! Everything here is a pure function of the slices passed in.

use std::collections::{BTreeMap, HashSet};

use common::{AvailabilityStatus, MtcRecord, Well};

/// Count of MTC records per availability status. Always holds all five statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityCounts {
    counts: BTreeMap<AvailabilityStatus, usize>,
}

/// One line of the availability chart/table.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityRow {
    pub status: AvailabilityStatus,
    pub label: &'static str,
    pub count: usize,
    pub percentage: f64,
}

impl AvailabilityCounts {
    pub fn get(&self, status: AvailabilityStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    /// Statuses in code order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (AvailabilityStatus, usize)> + '_ {
        self.counts.iter().map(|(status, count)| (*status, *count))
    }

    /// Sum over the five buckets. Records with unknown codes are not included.
    pub fn mapped_total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Chart series with each count expressed as a share of `total`.
    pub fn rows(&self, total: usize) -> Vec<AvailabilityRow> {
        self.iter()
            .map(|(status, count)| AvailabilityRow {
                status,
                label: status.label(),
                count,
                percentage: percentage_of(count, total),
            })
            .collect()
    }
}

/// Active/inactive well counts for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteTally {
    pub site: &'static str,
    pub active: usize,
    pub inactive: usize,
}

impl SiteTally {
    pub fn total(&self) -> usize {
        self.active + self.inactive
    }
}

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kpis {
    pub total_mtc: usize,
    pub operating: usize,
    pub available: usize,
    /// Distinct site names among the wells, `"Unknown"` included.
    pub active_sites: usize,
}

pub fn count_by_availability(records: &[MtcRecord]) -> AvailabilityCounts {
    let mut counts: BTreeMap<AvailabilityStatus, usize> = AvailabilityStatus::ALL
        .into_iter()
        .map(|status| (status, 0))
        .collect();

    for status in records.iter().filter_map(MtcRecord::availability) {
        *counts.entry(status).or_default() += 1;
    }

    AvailabilityCounts { counts }
}

/// Tally wells per resolved site name, in order of first appearance.
///
/// Only sites that have at least one well appear in the result.
pub fn count_by_site(wells: &[Well]) -> Vec<SiteTally> {
    let mut tallies: Vec<SiteTally> = Vec::new();

    for well in wells {
        let site = well.site_name();
        let idx = match tallies.iter().position(|t| t.site == site) {
            Some(idx) => idx,
            None => {
                tallies.push(SiteTally {
                    site,
                    active: 0,
                    inactive: 0,
                });
                tallies.len() - 1
            }
        };

        if well.active {
            tallies[idx].active += 1;
        } else {
            tallies[idx].inactive += 1;
        }
    }

    tallies
}

/// `count` as a percentage of `total`, rounded to one decimal. Zero when `total` is zero.
pub fn percentage_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = count as f64 / total as f64 * 100.0;
    (ratio * 10.0).round() / 10.0
}

pub fn kpis(wells: &[Well], records: &[MtcRecord]) -> Kpis {
    let counts = count_by_availability(records);
    let sites: HashSet<&'static str> = wells.iter().map(Well::site_name).collect();

    Kpis {
        total_mtc: records.len(),
        operating: counts.get(AvailabilityStatus::Operating),
        available: counts.get(AvailabilityStatus::Available),
        active_sites: sites.len(),
    }
}
