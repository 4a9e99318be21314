use crate::domain::model::{Coordinates, DeviceContext};
use crate::domain::ports::AddressProvider;
use crate::utils::error::{Result, SkillError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

const SERVICE_NAME: &str = "device address service";

/// 以裝置的 access token 查詢平台記錄的位置
#[derive(Debug, Clone)]
pub struct DeviceAddressClient {
    client: Client,
}

impl DeviceAddressClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `{api_endpoint}/v1/devices/{device_id}/settings/address`
    pub fn address_url(device: &DeviceContext) -> Result<Url> {
        let mut url = Url::parse(&device.api_endpoint).map_err(|e| SkillError::EnvelopeError {
            message: format!("Invalid apiEndpoint '{}': {}", device.api_endpoint, e),
        })?;

        url.path_segments_mut()
            .map_err(|_| SkillError::EnvelopeError {
                message: format!("apiEndpoint '{}' cannot be a base URL", device.api_endpoint),
            })?
            .pop_if_empty()
            .extend(["v1", "devices", device.device_id.as_str(), "settings", "address"]);

        Ok(url)
    }
}

#[async_trait]
impl AddressProvider for DeviceAddressClient {
    async fn device_coordinates(&self, device: &DeviceContext) -> Result<Coordinates> {
        let url = Self::address_url(device)?;
        tracing::debug!("Requesting device address from: {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(&device.api_access_token)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Device address response status: {}", status);
        if !status.is_success() {
            return Err(SkillError::UpstreamStatus {
                service: SERVICE_NAME.to_string(),
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        coordinates_from_body(&body)
    }
}

/// 兩個欄位都必須存在且為數值
fn coordinates_from_body(body: &Value) -> Result<Coordinates> {
    let field = |name: &str| {
        body.get(name)
            .and_then(Value::as_f64)
            .ok_or_else(|| SkillError::MissingCoordinates {
                reason: format!("'{}' missing or not numeric", name),
            })
    };

    Ok(Coordinates {
        latitude: field("latitude")?,
        longitude: field("longitude")?,
    })
}
