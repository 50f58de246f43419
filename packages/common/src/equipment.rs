use serde::{Deserialize, Serialize};

/// Description tag of the well-level network endpoint.
pub const PRIMARY_EQUIPMENT_DESCRIPTION: &str = "POZO";

/// A networked device attached to a well ("equipo").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(rename = "idEquipo")]
    pub id: i32,
    #[serde(rename = "fkIdPozo", default)]
    pub well_id: i32,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "direccionIp", default)]
    pub ip_address: Option<String>,
    #[serde(rename = "identificador", default)]
    pub identifier: Option<String>,
    #[serde(rename = "marca", default)]
    pub brand: Option<String>,
    #[serde(rename = "modelo", default)]
    pub model: Option<String>,
}

impl Equipment {
    pub fn is_primary(&self) -> bool {
        self.description.as_deref() == Some(PRIMARY_EQUIPMENT_DESCRIPTION)
    }

    pub fn has_ip_address(&self) -> bool {
        self.ip_address.as_deref().is_some_and(|ip| !ip.is_empty())
    }
}
