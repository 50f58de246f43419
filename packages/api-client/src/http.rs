use std::time::Duration;

use async_trait::async_trait;
use common::config::ApiConfig;
use common::{Equipment, FetchError, MtcRecord, Well};
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::routes;
use crate::traits::WellsApi;

/// Body of `PUT /Equipos/{id}`.
#[derive(Serialize)]
struct UpdateIpRequest<'a> {
    #[serde(rename = "direccionIp")]
    ip_address: &'a str,
}

/// REST client for the wells backend.
#[derive(Clone, Debug)]
pub struct HttpWellsApi {
    client: Client,
    base_url: String,
}

impl HttpWellsApi {
    /// Build a client with the configured base URL and request timeout.
    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(transport("build_client"))?;
        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<T, FetchError> {
        let url = self.url(path);
        debug!(operation, %url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport(operation))?;
        read_json(operation, response).await
    }
}

fn transport(operation: &'static str) -> impl FnOnce(reqwest::Error) -> FetchError {
    move |err| {
        warn!(operation, error = %err, "Backend request failed");
        FetchError::Transport {
            operation,
            message: err.to_string(),
        }
    }
}

async fn read_json<T: DeserializeOwned>(
    operation: &'static str,
    response: Response,
) -> Result<T, FetchError> {
    let status = response.status();
    if !status.is_success() {
        warn!(operation, status = status.as_u16(), "Backend returned an error status");
        return Err(FetchError::Status {
            operation,
            status: status.as_u16(),
        });
    }

    response.json::<T>().await.map_err(|err| FetchError::Decode {
        operation,
        message: err.to_string(),
    })
}

#[async_trait]
impl WellsApi for HttpWellsApi {
    #[instrument(skip(self))]
    async fn fetch_wells(&self) -> Result<Vec<Well>, FetchError> {
        let wells: Vec<Well> = self.get_json("fetch_wells", routes::WELLS).await?;
        info!(count = wells.len(), "Wells loaded");
        Ok(wells)
    }

    #[instrument(skip(self))]
    async fn fetch_mtc_records(&self) -> Result<Vec<MtcRecord>, FetchError> {
        let records: Vec<MtcRecord> = self
            .get_json("fetch_mtc_records", routes::MTC_RECORDS)
            .await?;
        info!(count = records.len(), "MTC records loaded");
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn fetch_well_by_id(&self, id: i32) -> Result<Well, FetchError> {
        self.get_json("fetch_well_by_id", &routes::well(id)).await
    }

    #[instrument(skip(self))]
    async fn fetch_equipment_by_well(&self, well_id: i32) -> Result<Vec<Equipment>, FetchError> {
        self.get_json("fetch_equipment_by_well", &routes::well_equipment(well_id))
            .await
    }

    #[instrument(skip(self))]
    async fn update_equipment_ip(
        &self,
        equipment_id: i32,
        new_ip: &str,
    ) -> Result<Equipment, FetchError> {
        const OPERATION: &str = "update_equipment_ip";

        let response = self
            .client
            .put(self.url(&routes::equipment(equipment_id)))
            .json(&UpdateIpRequest { ip_address: new_ip })
            .send()
            .await
            .map_err(transport(OPERATION))?;
        let updated: Equipment = read_json(OPERATION, response).await?;
        info!(equipment_id, ip = new_ip, "Equipment IP updated");
        Ok(updated)
    }
}
