use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityStatus;
use crate::nullable::null_as_default;

/// Motocompresor type/status record ("tipoMtc") as served by `GET /Tipos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MtcRecord {
    #[serde(rename = "idTipoMtc")]
    pub id: i32,
    #[serde(rename = "fkIdPozo")]
    pub well_id: i32,
    #[serde(rename = "descripcion", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "patin", default, deserialize_with = "null_as_default")]
    pub skid_label: String,
    /// Raw availability code; see [`MtcRecord::availability`].
    #[serde(rename = "disponible", default)]
    pub availability_code: Option<i32>,
    #[serde(rename = "fechaInstalacion", default, with = "install_date")]
    pub install_date: Option<NaiveDate>,
}

impl MtcRecord {
    /// Mapped status, or `None` when the code is missing or out of range.
    pub fn availability(&self) -> Option<AvailabilityStatus> {
        self.availability_code
            .and_then(AvailabilityStatus::from_code)
    }
}

/// Installation dates arrive as a bare date, a naive timestamp or an RFC 3339
/// timestamp. Only the calendar date is kept.
mod install_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        parse(raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid installation date: {raw}")))
    }

    pub(super) fn parse(raw: &str) -> Option<NaiveDate> {
        if let Ok(date) = NaiveDate::parse_from_str(raw, FORMAT) {
            return Some(date);
        }
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(ts.date());
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|ts| ts.date_naive())
    }
}
