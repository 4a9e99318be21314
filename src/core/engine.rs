use crate::adapters::alexa::{RequestEnvelope, ResponseEnvelope};
use crate::adapters::{http, DeviceAddressClient, GeosearchClient};
use crate::app::handlers::{fallback, find_vet, launch, FIND_VET_INTENT};
use crate::core::{AddressProvider, ConfigProvider, PlacesLookup};
use crate::domain::model::{RequestKind, SkillEvent, SpeechResponse};
use crate::utils::error::Result;
use tracing::Instrument;

/// 依請求種類分派到對應的處理函式
pub struct SkillEngine<A: AddressProvider, P: PlacesLookup> {
    address: A,
    places: P,
}

impl SkillEngine<DeviceAddressClient, GeosearchClient> {
    /// 以單一共用的 HTTP client 建立兩個上游 client
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = http::build_client(config.request_timeout_seconds())?;
        Ok(Self::new(
            DeviceAddressClient::new(client.clone()),
            GeosearchClient::new(client, config),
        ))
    }
}

impl<A: AddressProvider, P: PlacesLookup> SkillEngine<A, P> {
    pub fn new(address: A, places: P) -> Self {
        Self { address, places }
    }

    pub async fn handle(&self, event: &SkillEvent) -> SpeechResponse {
        let span = tracing::info_span!(
            "skill_request",
            request_id = event.request_id.as_deref().unwrap_or("-")
        );

        async {
            tracing::info!("Handling {:?}", event.kind);
            match &event.kind {
                RequestKind::Launch => launch::handle(),
                RequestKind::Intent(name) if name == FIND_VET_INTENT => {
                    find_vet::handle(&self.address, &self.places, event.device.as_ref()).await
                }
                RequestKind::SessionEnded(reason) => fallback::session_ended(reason.as_deref()),
                kind @ (RequestKind::Intent(_) | RequestKind::Other(_)) => fallback::handle(kind),
            }
        }
        .instrument(span)
        .await
    }

    /// 平台原始 JSON 進、回應 envelope 出；無法解析的事件也會得到回應
    pub async fn handle_envelope(&self, payload: serde_json::Value) -> ResponseEnvelope {
        let event = match RequestEnvelope::from_value(payload) {
            Ok(envelope) => {
                if let Some(ts) = envelope.request.timestamp {
                    tracing::debug!("Request timestamp: {}", ts.to_rfc3339());
                }
                envelope.into_event()
            }
            Err(e) => {
                tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
                return fallback::handle(&RequestKind::Other("unparseable".to_string())).into();
            }
        };

        self.handle(&event).await.into()
    }
}
