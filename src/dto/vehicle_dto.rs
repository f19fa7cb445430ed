use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

/// Requête de création d'un véhicule
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    // Borne haute (année courante + 1) vérifiée dans le contrôleur
    pub year: i32,

    pub price: Decimal,

    pub mileage: Option<i32>,

    pub fuel_type: String,

    pub transmission: String,

    pub description: Option<String>,
    pub features: Option<String>,
    pub is_featured: Option<bool>,
    pub status: Option<String>,
}

/// Requête de mise à jour partielle d'un véhicule
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    pub year: Option<i32>,
    pub price: Option<Decimal>,
    pub mileage: Option<i32>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub description: Option<String>,
    pub features: Option<String>,
    pub is_featured: Option<bool>,
    pub status: Option<String>,
}

/// Filtres de listing (`?featured=true`, `?status=available`)
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilters {
    pub featured: Option<bool>,
    pub status: Option<String>,
}

/// Réponse véhicule pour l'API
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
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

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            title: vehicle.title,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            price: vehicle.price,
            mileage: vehicle.mileage,
            fuel_type: vehicle.fuel_type,
            transmission: vehicle.transmission,
            description: vehicle.description,
            features: vehicle.features,
            is_featured: vehicle.is_featured,
            status: vehicle.status,
            images: vehicle.images,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}

/// Réponse d'upload d'images: la liste ordonnée mise à jour
#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleImagesResponse {
    pub message: String,
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_response_is_camel_case() {
        let request: CreateVehicleRequest = serde_json::from_value(serde_json::json!({
            "title": "Peugeot 308 1.6 HDi",
            "make": "Peugeot",
            "model": "308",
            "year": 2018,
            "price": "8500.00",
            "mileage": 112000,
            "fuelType": "diesel",
            "transmission": "manuelle",
            "isFeatured": true
        }))
        .unwrap();

        assert_eq!(request.fuel_type, "diesel");
        assert_eq!(request.is_featured, Some(true));
    }
}
