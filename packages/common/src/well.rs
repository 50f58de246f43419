use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;
use crate::site::Site;

/// A well ("pozo") as served by `GET /Pozos`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Well {
    #[serde(rename = "idPozo")]
    pub id: i32,
    #[serde(rename = "nombrePozo", default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Site code; see [`Site`]. Kept raw so unknown codes survive a round trip.
    /// A missing code decodes as 0, which resolves to no site.
    #[serde(rename = "fkIdActivo", default, deserialize_with = "null_as_default")]
    pub site_id: i32,
    #[serde(rename = "estatus", default)]
    pub active: bool,
    /// KepServer abbreviation used as the gateway code.
    #[serde(rename = "abrvKepServer", default)]
    pub gateway_code: Option<String>,
    #[serde(rename = "fkIdSector", default)]
    pub sector_id: Option<i32>,
}

impl Well {
    pub fn site(&self) -> Option<Site> {
        Site::from_id(self.site_id)
    }

    /// Display name of the well's site, or `"Unknown"`.
    pub fn site_name(&self) -> &'static str {
        Site::name_of(self.site_id)
    }

    pub fn gateway_code_or_empty(&self) -> &str {
        self.gateway_code.as_deref().unwrap_or_default()
    }
}
