use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vehicle: Vehicle) -> Result<Vehicle, AppError> {
        let created = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles
                (id, title, make, model, year, price, mileage, fuel_type, transmission,
                 description, features, is_featured, status, images, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(vehicle.id)
        .bind(vehicle.title)
        .bind(vehicle.make)
        .bind(vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.price)
        .bind(vehicle.mileage)
        .bind(vehicle.fuel_type)
        .bind(vehicle.transmission)
        .bind(vehicle.description)
        .bind(vehicle.features)
        .bind(vehicle.is_featured)
        .bind(vehicle.status)
        .bind(vehicle.images)
        .bind(vehicle.created_at)
        .bind(vehicle.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Lister les véhicules, filtres optionnels par mise en avant et statut
    pub async fn find_all(
        &self,
        featured: Option<bool>,
        status: Option<String>,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::BOOLEAN IS NULL OR is_featured = $1)
              AND ($2::VARCHAR IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(featured)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_featured(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE is_featured = TRUE ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Écrire un véhicule entièrement fusionné (dernier écrivain gagnant)
    pub async fn update(&self, vehicle: Vehicle) -> Result<Vehicle, AppError> {
        let updated = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET title = $2, make = $3, model = $4, year = $5, price = $6, mileage = $7,
                fuel_type = $8, transmission = $9, description = $10, features = $11,
                is_featured = $12, status = $13, images = $14, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(vehicle.id)
        .bind(vehicle.title)
        .bind(vehicle.make)
        .bind(vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.price)
        .bind(vehicle.mileage)
        .bind(vehicle.fuel_type)
        .bind(vehicle.transmission)
        .bind(vehicle.description)
        .bind(vehicle.features)
        .bind(vehicle.is_featured)
        .bind(vehicle.status)
        .bind(vehicle.images)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Ajouter des images en fin de liste, atomiquement côté SQL
    pub async fn append_images(
        &self,
        id: Uuid,
        new_images: Vec<String>,
    ) -> Result<Vehicle, AppError> {
        let updated = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET images = images || $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(new_images)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
