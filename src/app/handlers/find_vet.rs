use crate::app::speech;
use crate::domain::model::{DeviceContext, SpeechResponse};
use crate::domain::ports::{AddressProvider, PlacesLookup};

/// 查詢裝置座標，再找出上游排序第一的獸醫
///
/// 每條路徑都只回一次語音並結束 session；任何上游錯誤都不會往外拋。
pub async fn handle<A, P>(
    address: &A,
    places: &P,
    device: Option<&DeviceContext>,
) -> SpeechResponse
where
    A: AddressProvider + ?Sized,
    P: PlacesLookup + ?Sized,
{
    let Some(device) = device else {
        tracing::warn!("Request carries no device context; cannot look up address");
        return SpeechResponse::tell(speech::LOCATION_UNAVAILABLE);
    };

    let location = match address.device_coordinates(device).await {
        Ok(location) => location,
        Err(e) if e.is_missing_location() => {
            tracing::warn!("Device address has no coordinates: {}", e);
            return SpeechResponse::tell(speech::LOCATION_UNAVAILABLE);
        }
        Err(e) => {
            tracing::error!(
                "Error fetching address: {} (Category: {:?})",
                e,
                e.category()
            );
            return SpeechResponse::tell(speech::ADDRESS_ERROR);
        }
    };

    // 查詢失敗與查無結果對使用者說同一句話，但日誌分開記錄
    let vets = match places.find_nearby_vets(location).await {
        Ok(vets) => vets,
        Err(e) => {
            tracing::error!(
                "Error fetching vets: {} (Category: {:?})",
                e,
                e.category()
            );
            Vec::new()
        }
    };

    match vets.first() {
        Some(closest) => {
            tracing::info!(
                candidates = vets.len(),
                "Closest vet resolved: {}",
                closest.name
            );
            SpeechResponse::tell(speech::closest_vet(closest))
        }
        None => {
            tracing::info!("No veterinarians found near device");
            SpeechResponse::tell(speech::NO_VETS_FOUND)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Coordinates, VetRecord};
    use crate::utils::error::{Result, SkillError};
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    enum AddressBehavior {
        Found(Coordinates),
        Missing,
        Unreachable,
    }

    struct MockAddress {
        behavior: AddressBehavior,
    }

    #[async_trait]
    impl AddressProvider for MockAddress {
        async fn device_coordinates(&self, _device: &DeviceContext) -> Result<Coordinates> {
            match &self.behavior {
                AddressBehavior::Found(c) => Ok(*c),
                AddressBehavior::Missing => Err(SkillError::MissingCoordinates {
                    reason: "'latitude' missing or not numeric".to_string(),
                }),
                AddressBehavior::Unreachable => Err(SkillError::IoError(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                ))),
            }
        }
    }

    #[derive(Clone)]
    struct MockPlaces {
        results: Option<Vec<VetRecord>>,
        calls: Arc<Mutex<Vec<Coordinates>>>,
    }

    impl MockPlaces {
        fn returning(results: Vec<VetRecord>) -> Self {
            Self {
                results: Some(results),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing() -> Self {
            Self {
                results: None,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        async fn calls(&self) -> Vec<Coordinates> {
            self.calls.lock().await.clone()
        }
    }

    #[async_trait]
    impl PlacesLookup for MockPlaces {
        async fn find_nearby_vets(&self, location: Coordinates) -> Result<Vec<VetRecord>> {
            self.calls.lock().await.push(location);
            self.results.clone().ok_or_else(|| SkillError::UpstreamStatus {
                service: "geosearch service".to_string(),
                status: 500,
            })
        }
    }

    fn device() -> DeviceContext {
        DeviceContext {
            device_id: "device-1".to_string(),
            api_endpoint: "https://api.example.com".to_string(),
            api_access_token: "token".to_string(),
        }
    }

    fn vet(name: &str, address: &str) -> VetRecord {
        VetRecord {
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    const HERE: Coordinates = Coordinates {
        latitude: 12.9,
        longitude: 77.6,
    };

    #[tokio::test]
    async fn test_names_first_vet_only() {
        let address = MockAddress {
            behavior: AddressBehavior::Found(HERE),
        };
        let places = MockPlaces::returning(vec![
            vet("Paws Clinic", "12 Main St"),
            vet("Happy Tails", "7 Lake Rd"),
        ]);

        let response = handle(&address, &places, Some(&device())).await;

        assert_eq!(
            response.speech.as_deref(),
            Some("The closest vet is Paws Clinic, located at 12 Main St.")
        );
        assert!(!response.keep_session_open);
        assert_eq!(places.calls().await, vec![HERE]);
    }

    #[tokio::test]
    async fn test_empty_results() {
        let address = MockAddress {
            behavior: AddressBehavior::Found(HERE),
        };
        let places = MockPlaces::returning(vec![]);

        let response = handle(&address, &places, Some(&device())).await;

        assert_eq!(response, SpeechResponse::tell(speech::NO_VETS_FOUND));
    }

    #[tokio::test]
    async fn test_lookup_failure_sounds_like_no_results() {
        let address = MockAddress {
            behavior: AddressBehavior::Found(HERE),
        };
        let places = MockPlaces::failing();

        let response = handle(&address, &places, Some(&device())).await;

        assert_eq!(response, SpeechResponse::tell(speech::NO_VETS_FOUND));
        assert_eq!(places.calls().await.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_coordinates_skip_lookup() {
        let address = MockAddress {
            behavior: AddressBehavior::Missing,
        };
        let places = MockPlaces::returning(vec![vet("Paws Clinic", "12 Main St")]);

        let response = handle(&address, &places, Some(&device())).await;

        assert_eq!(response, SpeechResponse::tell(speech::LOCATION_UNAVAILABLE));
        assert!(places.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_address_fault_skips_lookup() {
        let address = MockAddress {
            behavior: AddressBehavior::Unreachable,
        };
        let places = MockPlaces::returning(vec![vet("Paws Clinic", "12 Main St")]);

        let response = handle(&address, &places, Some(&device())).await;

        assert_eq!(response, SpeechResponse::tell(speech::ADDRESS_ERROR));
        assert!(places.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_no_device_context() {
        let address = MockAddress {
            behavior: AddressBehavior::Found(HERE),
        };
        let places = MockPlaces::returning(vec![]);

        let response = handle(&address, &places, None).await;

        assert_eq!(response, SpeechResponse::tell(speech::LOCATION_UNAVAILABLE));
        assert!(places.calls().await.is_empty());
    }
}
