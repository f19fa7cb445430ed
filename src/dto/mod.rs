//! DTOs de l'API
//!
//! Requêtes validées par `validator` et réponses sérialisées en
//! camelCase pour rester compatibles avec la surface REST d'origine.
//! Les réponses dérivent aussi `Deserialize` pour être réutilisées
//! par le client typé (`crate::client`).

pub mod auth_dto;
pub mod contact_dto;
pub mod media_dto;
pub mod site_config_dto;
pub mod vehicle_dto;
pub mod visitor_dto;
