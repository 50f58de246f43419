//! Resource paths relative to the configured base URL.

pub const WELLS: &str = "/Pozos";
pub const MTC_RECORDS: &str = "/Tipos";

pub fn well(id: i32) -> String {
    format!("/Pozos/{id}")
}

pub fn well_equipment(well_id: i32) -> String {
    format!("/Equipos/Pozo/{well_id}")
}

pub fn equipment(id: i32) -> String {
    format!("/Equipos/{id}")
}
