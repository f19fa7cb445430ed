//! Pipeline d'upload
//!
//! Un seul handler générique paramétré par une `UploadPolicy`, au lieu
//! d'une configuration d'upload dupliquée par entité. Ordre de
//! validation: type (extension ET content-type déclarés), puis taille,
//! avant toute écriture.

use axum::extract::Multipart;
use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;
use std::path::Path;

use crate::utils::errors::AppError;

/// Contraintes d'upload pour une cible donnée
#[derive(Debug, Clone, Copy)]
pub struct UploadPolicy {
    pub allowed_extensions: &'static [&'static str],
    pub allowed_mime_prefixes: &'static [&'static str],
    pub max_bytes: usize,
    pub subdir: &'static str,
}

/// Images de véhicules: 10 Mo max
pub const VEHICLE_IMAGE_POLICY: UploadPolicy = UploadPolicy {
    allowed_extensions: &["jpeg", "jpg", "png", "webp"],
    allowed_mime_prefixes: &["image/"],
    max_bytes: 10 * 1024 * 1024,
    subdir: "vehicles",
};

/// Médias généraux: images uniquement, 10 Mo max
pub const MEDIA_POLICY: UploadPolicy = UploadPolicy {
    allowed_extensions: &["jpeg", "jpg", "png", "webp"],
    allowed_mime_prefixes: &["image/"],
    max_bytes: 10 * 1024 * 1024,
    subdir: "media",
};

/// Vidéo du site: 100 Mo max
pub const VIDEO_POLICY: UploadPolicy = UploadPolicy {
    allowed_extensions: &["mp4", "webm", "mov", "avi"],
    allowed_mime_prefixes: &["video/"],
    max_bytes: 100 * 1024 * 1024,
    subdir: "videos",
};

/// Fichier reçu et validé, prêt à être stocké
#[derive(Debug)]
pub struct IncomingFile {
    pub original_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl IncomingFile {
    /// Extension en minuscules
    pub fn extension(&self) -> String {
        file_extension(&self.original_name).unwrap_or_default()
    }
}

fn file_extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Vérifier extension et content-type déclaré contre la politique
pub fn validate_type(name: &str, content_type: &str, policy: &UploadPolicy) -> Result<(), AppError> {
    let extension = file_extension(name)
        .ok_or_else(|| AppError::InvalidFile(format!("File '{}' has no extension", name)))?;

    if !policy.allowed_extensions.contains(&extension.as_str()) {
        return Err(AppError::InvalidFile(format!(
            "Extension '{}' is not allowed",
            extension
        )));
    }

    if !policy
        .allowed_mime_prefixes
        .iter()
        .any(|prefix| content_type.starts_with(prefix))
    {
        return Err(AppError::InvalidFile(format!(
            "Content type '{}' is not allowed",
            content_type
        )));
    }

    Ok(())
}

/// Vérifier la taille contre le plafond de la politique
pub fn validate_size(size: usize, policy: &UploadPolicy) -> Result<(), AppError> {
    if size > policy.max_bytes {
        return Err(AppError::InvalidFile(format!(
            "File exceeds the {} MB limit",
            policy.max_bytes / (1024 * 1024)
        )));
    }
    Ok(())
}

/// Lire toutes les parties fichier d'une requête multipart et les
/// valider. Aucune écriture n'a lieu ici: en cas de fichier invalide,
/// la requête entière est rejetée avant le stockage.
pub async fn collect_files(
    mut multipart: Multipart,
    policy: &UploadPolicy,
) -> Result<Vec<IncomingFile>, AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        // Les champs texte sont ignorés
        let Some(original_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field.content_type().map(str::to_string).unwrap_or_default();

        validate_type(&original_name, &content_type, policy)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Cannot read uploaded file: {}", e)))?
            .to_vec();

        validate_size(data.len(), policy)?;

        files.push(IncomingFile {
            original_name,
            content_type,
            data,
        });
    }

    if files.is_empty() {
        return Err(AppError::InvalidFile("No file provided".to_string()));
    }

    Ok(files)
}

lazy_static! {
    static ref UNSAFE_CHARS: Regex = Regex::new(r"[^A-Za-z0-9._-]").unwrap();
}

/// Nom de stockage anti-collision: horodatage + suffixe aléatoire +
/// nom d'origine assaini
pub fn storage_filename(original_name: &str) -> String {
    let sanitized = UNSAFE_CHARS.replace_all(original_name, "_");
    let suffix: u16 = rand::thread_rng().gen();

    format!(
        "{}_{:04x}_{}",
        chrono::Utc::now().timestamp_millis(),
        suffix,
        sanitized
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_type_accepts_allowed_image() {
        assert!(validate_type("photo.jpg", "image/jpeg", &VEHICLE_IMAGE_POLICY).is_ok());
        assert!(validate_type("photo.WEBP", "image/webp", &VEHICLE_IMAGE_POLICY).is_ok());
    }

    #[test]
    fn test_validate_type_rejects_bad_extension() {
        assert!(matches!(
            validate_type("script.exe", "image/jpeg", &VEHICLE_IMAGE_POLICY),
            Err(AppError::InvalidFile(_))
        ));
    }

    #[test]
    fn test_validate_type_rejects_extension_mime_mismatch() {
        // Extension permise mais content-type déclaré hors liste
        assert!(matches!(
            validate_type("photo.jpg", "application/octet-stream", &VEHICLE_IMAGE_POLICY),
            Err(AppError::InvalidFile(_))
        ));
        // Content-type permis mais extension hors liste
        assert!(matches!(
            validate_type("clip.mp4", "image/jpeg", &VEHICLE_IMAGE_POLICY),
            Err(AppError::InvalidFile(_))
        ));
    }

    #[test]
    fn test_validate_type_rejects_missing_extension() {
        assert!(matches!(
            validate_type("photo", "image/jpeg", &VEHICLE_IMAGE_POLICY),
            Err(AppError::InvalidFile(_))
        ));
    }

    #[test]
    fn test_validate_size() {
        assert!(validate_size(10 * 1024 * 1024, &VEHICLE_IMAGE_POLICY).is_ok());
        assert!(matches!(
            validate_size(10 * 1024 * 1024 + 1, &VEHICLE_IMAGE_POLICY),
            Err(AppError::InvalidFile(_))
        ));
        assert!(validate_size(50 * 1024 * 1024, &VIDEO_POLICY).is_ok());
    }

    #[test]
    fn test_storage_filename_sanitizes_and_keeps_extension() {
        let name = storage_filename("photo avant/arrière.jpg");
        assert!(name.ends_with(".jpg"));
        assert!(!name.contains(' '));
        assert!(!name.contains('/'));
    }

    #[test]
    fn test_storage_filenames_do_not_collide() {
        let a = storage_filename("photo.jpg");
        let b = storage_filename("photo.jpg");
        assert_ne!(a, b);
    }
}
