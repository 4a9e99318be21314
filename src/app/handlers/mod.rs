pub mod fallback;
pub mod find_vet;
pub mod launch;

pub const FIND_VET_INTENT: &str = "FindVetIntent";
