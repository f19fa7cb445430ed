//! Modèle Vehicle
//!
//! Mappe exactement à la table `vehicles`. Les colonnes à valeurs
//! contraintes (carburant, transmission, statut) sont des VARCHAR
//! validés contre les ensembles ci-dessous.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Types de carburant permis
pub const FUEL_TYPES: &[&str] = &["essence", "diesel", "hybride", "electrique", "gpl"];

/// Transmissions permises
pub const TRANSMISSIONS: &[&str] = &["manuelle", "automatique", "semi-automatique"];

/// Statuts de publication permis
pub const VEHICLE_STATUSES: &[&str] = &["available", "reserved", "sold"];

/// Année minimale acceptée pour un véhicule
pub const MIN_VEHICLE_YEAR: i32 = 1900;

/// Véhicule - mappe exactement à la table `vehicles`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub title: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: Decimal,
    pub mileage: i32,
    pub fuel_type: String,
    pub transmission: String,
    pub description: Option<String>,
    pub features: Option<String>,
    pub is_featured: bool,
    pub status: String,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
