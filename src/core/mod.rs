pub mod engine;

pub use crate::domain::model::{Coordinates, DeviceContext, SkillEvent, SpeechResponse, VetRecord};
pub use crate::domain::ports::{AddressProvider, ConfigProvider, PlacesLookup};
pub use crate::utils::error::Result;
