use chrono::{Datelike, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehicleImagesResponse,
    VehicleResponse,
};
use crate::models::vehicle::{
    Vehicle, FUEL_TYPES, MIN_VEHICLE_YEAR, TRANSMISSIONS, VEHICLE_STATUSES,
};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::activity_logger::record_activity;
use crate::services::storage_service::StorageService;
use crate::services::upload_service::{storage_filename, IncomingFile, VEHICLE_IMAGE_POLICY};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_enum, validate_non_negative, validate_range};

pub struct VehicleController {
    repository: VehicleRepository,
    pool: PgPool,
    storage: Arc<StorageService>,
}

/// Convertir une erreur de champ en `AppError::Validation`
fn invariant(field: &'static str, result: Result<(), ValidationError>) -> Result<(), AppError> {
    result.map_err(|error| {
        let mut errors = ValidationErrors::new();
        errors.add(field, error);
        AppError::Validation(errors)
    })
}

impl VehicleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: VehicleRepository::new(state.pool.clone()),
            pool: state.pool.clone(),
            storage: state.storage.clone(),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
        admin: &str,
    ) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        let max_year = Utc::now().year() + 1;
        invariant("year", validate_range(request.year, MIN_VEHICLE_YEAR, max_year))?;
        invariant("price", validate_non_negative(request.price))?;
        invariant("mileage", validate_non_negative(request.mileage.unwrap_or(0)))?;
        invariant("fuelType", validate_enum(&request.fuel_type, FUEL_TYPES))?;
        invariant("transmission", validate_enum(&request.transmission, TRANSMISSIONS))?;
        if let Some(status) = &request.status {
            invariant("status", validate_enum(status, VEHICLE_STATUSES))?;
        }

        let now = Utc::now();
        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            title: request.title,
            make: request.make,
            model: request.model,
            year: request.year,
            price: request.price,
            mileage: request.mileage.unwrap_or(0),
            fuel_type: request.fuel_type,
            transmission: request.transmission,
            description: request.description,
            features: request.features,
            is_featured: request.is_featured.unwrap_or(false),
            status: request.status.unwrap_or_else(|| "available".to_string()),
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(vehicle).await?;

        record_activity(
            self.pool.clone(),
            "vehicle",
            "create",
            format!("Véhicule '{}' créé", created.title),
            Some(admin.to_string()),
        );

        Ok(created.into())
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self
            .repository
            .find_all(filters.featured, filters.status)
            .await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn list_featured(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_featured().await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(vehicle.into())
    }

    /// Fusion partielle puis réécriture complète (dernier écrivain gagnant)
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
        admin: &str,
    ) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        let mut vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if let Some(year) = request.year {
            let max_year = Utc::now().year() + 1;
            invariant("year", validate_range(year, MIN_VEHICLE_YEAR, max_year))?;
            vehicle.year = year;
        }
        if let Some(price) = request.price {
            invariant("price", validate_non_negative(price))?;
            vehicle.price = price;
        }
        if let Some(mileage) = request.mileage {
            invariant("mileage", validate_non_negative(mileage))?;
            vehicle.mileage = mileage;
        }
        if let Some(fuel_type) = request.fuel_type {
            invariant("fuelType", validate_enum(&fuel_type, FUEL_TYPES))?;
            vehicle.fuel_type = fuel_type;
        }
        if let Some(transmission) = request.transmission {
            invariant("transmission", validate_enum(&transmission, TRANSMISSIONS))?;
            vehicle.transmission = transmission;
        }
        if let Some(status) = request.status {
            invariant("status", validate_enum(&status, VEHICLE_STATUSES))?;
            vehicle.status = status;
        }
        if let Some(title) = request.title {
            vehicle.title = title;
        }
        if let Some(make) = request.make {
            vehicle.make = make;
        }
        if let Some(model) = request.model {
            vehicle.model = model;
        }
        if let Some(description) = request.description {
            vehicle.description = Some(description);
        }
        if let Some(features) = request.features {
            vehicle.features = Some(features);
        }
        if let Some(is_featured) = request.is_featured {
            vehicle.is_featured = is_featured;
        }

        let updated = self.repository.update(vehicle).await?;

        record_activity(
            self.pool.clone(),
            "vehicle",
            "update",
            format!("Véhicule '{}' mis à jour", updated.title),
            Some(admin.to_string()),
        );

        Ok(updated.into())
    }

    /// Supprimer l'enregistrement puis ses fichiers image en best-effort:
    /// un fichier déjà absent ne bloque ni les autres ni la suppression.
    pub async fn delete(&self, id: Uuid, admin: &str) -> Result<(), AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        self.repository.delete(id).await?;

        for image_url in &vehicle.images {
            if let Err(e) = self.storage.remove_by_url(image_url).await {
                log::warn!("Image '{}' non supprimée: {}", image_url, e);
            }
        }

        record_activity(
            self.pool.clone(),
            "vehicle",
            "delete",
            format!("Véhicule '{}' supprimé", vehicle.title),
            Some(admin.to_string()),
        );

        Ok(())
    }

    /// Stocker les images validées et les ajouter en fin de liste
    pub async fn attach_images(
        &self,
        id: Uuid,
        files: Vec<IncomingFile>,
        admin: &str,
    ) -> Result<VehicleImagesResponse, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let mut urls = Vec::with_capacity(files.len());
        for file in &files {
            let key = format!(
                "{}/{}",
                VEHICLE_IMAGE_POLICY.subdir,
                storage_filename(&file.original_name)
            );
            let stored = self.storage.store(&key, &file.data).await?;
            urls.push(stored.url);
        }

        let updated = self.repository.append_images(id, urls).await?;

        record_activity(
            self.pool.clone(),
            "vehicle",
            "upload-images",
            format!("{} image(s) ajoutée(s) au véhicule '{}'", files.len(), updated.title),
            Some(admin.to_string()),
        );

        Ok(VehicleImagesResponse {
            message: "Images uploaded successfully".to_string(),
            images: updated.images,
        })
    }
}
