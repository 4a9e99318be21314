use crate::domain::model::{Coordinates, DeviceContext, VetRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn geosearch_base_url(&self) -> &str;
    fn geosearch_api_key(&self) -> &str;
    fn search_query(&self) -> &str;
    fn search_radius_meters(&self) -> u32;
    fn request_timeout_seconds(&self) -> Option<u64>;
}

/// 平台的裝置地址服務
#[async_trait]
pub trait AddressProvider: Send + Sync {
    async fn device_coordinates(&self, device: &DeviceContext) -> Result<Coordinates>;
}

/// 第三方地點搜尋服務，結果順序即上游排序
#[async_trait]
pub trait PlacesLookup: Send + Sync {
    async fn find_nearby_vets(&self, location: Coordinates) -> Result<Vec<VetRecord>>;
}
