// Adapters layer: concrete implementations for the external systems the skill talks to.

pub mod alexa;
pub mod device_address;
pub mod geosearch;
pub mod http;

pub use alexa::{RequestEnvelope, ResponseEnvelope};
pub use device_address::DeviceAddressClient;
pub use geosearch::GeosearchClient;
