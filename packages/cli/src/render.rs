use std::fmt::Write;

use catalog::filter::{MARK_CLOSE, MARK_OPEN};
use catalog::{AvailabilityRow, Kpis, ResultCount, SiteTally, WellDetail, highlight};
use common::{AvailabilityStatus, Equipment, MtcRecord, Well};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

pub fn dashboard(kpis: &Kpis, rows: &[AvailabilityRow], tallies: &[SiteTally]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total MTC:     {}", kpis.total_mtc);
    let _ = writeln!(out, "Operating:     {}", kpis.operating);
    let _ = writeln!(out, "Available:     {}", kpis.available);
    let _ = writeln!(out, "Active sites:  {}", kpis.active_sites);

    let _ = writeln!(out, "\n{:<22} {:>6} {:>7}", "Availability", "Count", "%");
    for row in rows {
        let _ = writeln!(out, "{:<22} {:>6} {:>6.1}%", row.label, row.count, row.percentage);
    }

    let _ = writeln!(out, "\n{:<12} {:>7} {:>9} {:>6}", "Site", "Active", "Inactive", "Total");
    for tally in tallies {
        let _ = writeln!(
            out,
            "{:<12} {:>7} {:>9} {:>6}",
            tally.site,
            tally.active,
            tally.inactive,
            tally.total()
        );
    }
    out
}

/// One list line, with matches of `term` in bold and the well's MTC availability.
pub fn well_line(well: &Well, mtc: Option<&MtcRecord>, term: &str) -> String {
    let term = term.trim();
    let name = emphasize(&highlight(&well.name, term));
    let gateway = emphasize(&highlight(well.gateway_code_or_empty(), term));
    format!(
        "{:>5}  {}  [{}]  {}  {}",
        well.id,
        name,
        gateway,
        well.site_name(),
        mtc_status(mtc)
    )
}

/// Operating MTCs are shown in bold, like search matches.
fn mtc_status(mtc: Option<&MtcRecord>) -> String {
    let Some(mtc) = mtc else {
        return "no MTC".into();
    };
    match mtc.availability() {
        Some(status @ AvailabilityStatus::Operating) => format!("{BOLD}{status}{RESET}"),
        Some(status) => status.label().into(),
        None => "Unmapped".into(),
    }
}

pub fn well_list<'a>(
    wells: impl IntoIterator<Item = (&'a Well, Option<&'a MtcRecord>)>,
    term: &str,
    count: ResultCount,
) -> String {
    let mut out = String::new();
    for (well, mtc) in wells {
        let _ = writeln!(out, "{}", well_line(well, mtc, term));
    }
    let _ = writeln!(out, "{count}");
    out
}

fn emphasize(marked: &str) -> String {
    marked.replace(MARK_OPEN, BOLD).replace(MARK_CLOSE, RESET)
}

pub fn detail(detail: &WellDetail) -> String {
    let mut out = String::new();
    let summary = &detail.summary;
    let _ = writeln!(out, "{}", detail.title());
    let _ = writeln!(out, "  Gateway:    {}", or_dash(detail.well.gateway_code.as_deref()));
    let _ = writeln!(out, "  Active:     {}", if detail.well.active { "yes" } else { "no" });
    let _ = writeln!(out, "  Equipment:  {}", summary.equipment_count);
    let _ = writeln!(out, "  Has IP:     {}", if summary.has_ip_address { "yes" } else { "no" });

    match &detail.mtc_record {
        Some(mtc) => {
            let status = mtc.availability().map(|s| s.label()).unwrap_or("Unmapped");
            let installed = mtc
                .install_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".into());
            let _ = writeln!(out, "\nMTC #{}: {}", mtc.id, mtc.description);
            let _ = writeln!(out, "  Skid:       {}", or_dash(Some(&mtc.skid_label)));
            let _ = writeln!(out, "  Status:     {status}");
            let _ = writeln!(out, "  Installed:  {installed}");
        }
        None => {
            let _ = writeln!(out, "\nNo MTC record");
        }
    }

    match detail.primary_equipment() {
        Some(primary) => {
            let _ = writeln!(out, "\nPrimary equipment");
            let _ = writeln!(out, "{}", equipment_line(primary));
        }
        None => {
            let _ = writeln!(out, "\nNo primary equipment");
        }
    }

    let auxiliary: Vec<&Equipment> = detail.auxiliary_equipment().collect();
    if !auxiliary.is_empty() {
        let _ = writeln!(out, "\nAuxiliary equipment");
        for item in auxiliary {
            let _ = writeln!(out, "{}", equipment_line(item));
        }
    }
    out
}

fn equipment_line(e: &Equipment) -> String {
    format!(
        "  #{:<5} {:<10} ip={:<15} id={} {} {}",
        e.id,
        or_dash(e.description.as_deref()),
        or_dash(e.ip_address.as_deref()),
        or_dash(e.identifier.as_deref()),
        or_dash(e.brand.as_deref()),
        or_dash(e.model.as_deref()),
    )
}
