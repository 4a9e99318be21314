use crate::domain::model::VetRecord;

pub const WELCOME: &str =
    "Welcome to the Find Nearest Vet skill. You can ask me to find the nearest veterinarian.";
pub const LOCATION_UNAVAILABLE: &str =
    "I couldn't retrieve your location. Please ensure you have provided location permissions.";
pub const ADDRESS_ERROR: &str = "There was an error retrieving your address.";
pub const NO_VETS_FOUND: &str = "I couldn't find any nearby veterinarians.";
pub const FALLBACK: &str =
    "Sorry, I can't help with that. You can ask me to find the nearest veterinarian.";

pub fn closest_vet(vet: &VetRecord) -> String {
    format!("The closest vet is {}, located at {}.", vet.name, vet.address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_vet_sentence() {
        let vet = VetRecord {
            name: "Paws Clinic".to_string(),
            address: "12 Main St".to_string(),
        };
        assert_eq!(
            closest_vet(&vet),
            "The closest vet is Paws Clinic, located at 12 Main St."
        );
    }
}
