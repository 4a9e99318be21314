use crate::core::ConfigProvider;
use crate::domain::model::{Coordinates, VetRecord};
use crate::domain::ports::PlacesLookup;
use crate::utils::error::{Result, SkillError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const SERVICE_NAME: &str = "geosearch service";

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    results: Vec<Place>,
}

#[derive(Debug, Deserialize)]
struct Place {
    name: String,
    formatted_address: String,
}

impl From<Place> for VetRecord {
    fn from(place: Place) -> Self {
        VetRecord {
            name: place.name,
            address: place.formatted_address,
        }
    }
}

/// 地點搜尋 client，金鑰與搜尋參數在建構時注入
#[derive(Debug, Clone)]
pub struct GeosearchClient {
    client: Client,
    base_url: String,
    api_key: String,
    query: String,
    radius_meters: u32,
}

impl GeosearchClient {
    pub fn new<C: ConfigProvider + ?Sized>(client: Client, config: &C) -> Self {
        Self {
            client,
            base_url: config.geosearch_base_url().trim_end_matches('/').to_string(),
            api_key: config.geosearch_api_key().to_string(),
            query: config.search_query().to_string(),
            radius_meters: config.search_radius_meters(),
        }
    }

    // 金鑰是路徑的一部分，不可寫進日誌
    fn search_url(&self) -> String {
        format!("{}/{}/places/search/json", self.base_url, self.api_key)
    }
}

#[async_trait]
impl PlacesLookup for GeosearchClient {
    async fn find_nearby_vets(&self, location: Coordinates) -> Result<Vec<VetRecord>> {
        let location_param = format!("{},{}", location.latitude, location.longitude);
        let radius_param = self.radius_meters.to_string();
        tracing::debug!(
            "Searching '{}' within {}m of {}",
            self.query,
            self.radius_meters,
            location_param
        );

        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("query", self.query.as_str()),
                ("location", location_param.as_str()),
                ("radius", radius_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SkillError::HttpError(e.without_url()))?;

        let status = response.status();
        tracing::debug!("Geosearch response status: {}", status);
        if !status.is_success() {
            return Err(SkillError::UpstreamStatus {
                service: SERVICE_NAME.to_string(),
                status: status.as_u16(),
            });
        }

        let places: PlacesResponse = response
            .json()
            .await
            .map_err(|e| SkillError::HttpError(e.without_url()))?;

        let vets: Vec<VetRecord> = places.results.into_iter().map(VetRecord::from).collect();
        tracing::debug!("Geosearch returned {} places", vets.len());
        Ok(vets)
    }
}
