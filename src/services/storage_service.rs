//! Stockage des fichiers
//!
//! Deux implémentations derrière le même trait: disque local et
//! magasin d'objets distant. Quand le distant est configuré, le
//! fichier local ne sert que de copie temporaire: supprimé après un
//! transfert réussi, et aucun objet distant orphelin n'est laissé
//! après un transfert raté.

use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

/// Référence d'un fichier stocké
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub key: String,
    pub url: String,
    pub provider: &'static str,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Écrire un objet et retourner son URL publique
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<String, AppError>;

    async fn delete(&self, key: &str) -> Result<(), AppError>;
}

/// Stockage sur le disque local, servi sous `public_prefix`
pub struct LocalDiskStore {
    root: PathBuf,
    public_prefix: String,
}

impl LocalDiskStore {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

#[async_trait]
impl ObjectStore for LocalDiskStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<String, AppError> {
        let path = self.path_for(key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::UploadFailed(format!("Cannot create upload dir: {}", e)))?;
        }

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::UploadFailed(format!("Cannot write file: {}", e)))?;

        Ok(format!(
            "{}/{}",
            self.public_prefix.trim_end_matches('/'),
            key
        ))
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        tokio::fs::remove_file(self.path_for(key))
            .await
            .map_err(|e| AppError::Internal(format!("Cannot delete file '{}': {}", key, e)))
    }
}

/// Magasin d'objets distant accessible en HTTP (PUT/DELETE par clé)
pub struct RemoteObjectStore {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RemoteObjectStore {
    pub fn new(client: Client, base_url: String, token: Option<String>) -> Self {
        Self {
            client,
            base_url,
            token,
        }
    }

    /// URL de l'objet, chaque segment de la clé encodé séparément
    fn object_url(&self, key: &str) -> String {
        let encoded: Vec<String> = key
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            encoded.join("/")
        )
    }
}

#[async_trait]
impl ObjectStore for RemoteObjectStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<String, AppError> {
        let url = self.object_url(key);

        let mut request = self.client.put(&url).body(bytes.to_vec());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::UploadFailed(format!("Remote storage unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::UploadFailed(format!(
                "Remote storage refused the file ({})",
                response.status()
            )));
        }

        Ok(url)
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        let url = self.object_url(key);

        let mut request = self.client.delete(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("Remote delete failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Internal(format!(
                "Remote delete refused ({})",
                response.status()
            )));
        }

        Ok(())
    }
}

/// Façade de stockage utilisée par les contrôleurs
pub struct StorageService {
    local: LocalDiskStore,
    remote: Option<RemoteObjectStore>,
}

impl StorageService {
    pub fn from_config(config: &EnvironmentConfig, client: Client) -> Self {
        let local = LocalDiskStore::new(&config.upload_dir, &config.public_upload_prefix);

        let remote = config.remote_storage_url.as_ref().map(|base_url| {
            RemoteObjectStore::new(
                client,
                base_url.clone(),
                config.remote_storage_token.clone(),
            )
        });

        Self { local, remote }
    }

    /// Stocker un fichier validé. Écrit d'abord en local, puis
    /// transfère vers le magasin distant s'il est configuré.
    pub async fn store(&self, key: &str, bytes: &[u8]) -> Result<StoredObject, AppError> {
        let local_url = self.local.put(key, bytes).await?;

        let Some(remote) = &self.remote else {
            return Ok(StoredObject {
                key: key.to_string(),
                url: local_url,
                provider: "local",
            });
        };

        match remote.put(key, bytes).await {
            Ok(url) => {
                if let Err(e) = self.local.delete(key).await {
                    log::warn!("Copie temporaire locale non supprimée: {}", e);
                }
                Ok(StoredObject {
                    key: key.to_string(),
                    url,
                    provider: "remote",
                })
            }
            Err(e) => {
                // pas d'objet distant orphelin, pas de copie temporaire
                let _ = remote.delete(key).await;
                let _ = self.local.delete(key).await;
                Err(e)
            }
        }
    }

    /// Supprimer un fichier à partir de son URL publique.
    /// Les appelants traitent l'échec comme best-effort.
    pub async fn remove_by_url(&self, url: &str) -> Result<(), AppError> {
        let local_prefix = format!("{}/", self.local.public_prefix.trim_end_matches('/'));

        if let Some(key) = url.strip_prefix(&local_prefix) {
            return self.local.delete(key).await;
        }

        if let Some(remote) = &self.remote {
            let remote_prefix = format!("{}/", remote.base_url.trim_end_matches('/'));
            if let Some(encoded_key) = url.strip_prefix(&remote_prefix) {
                let key = urlencoding::decode(encoded_key)
                    .map_err(|e| AppError::Internal(format!("Invalid object key: {}", e)))?;
                return remote.delete(&key).await;
            }
        }

        Err(AppError::Internal(format!(
            "URL '{}' does not belong to any configured store",
            url
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (LocalDiskStore, PathBuf) {
        let root = std::env::temp_dir().join(format!("auto_export_test_{}", uuid::Uuid::new_v4()));
        (LocalDiskStore::new(&root, "/uploads"), root)
    }

    #[tokio::test]
    async fn test_local_put_returns_public_url() {
        let (store, root) = temp_store();

        let url = store.put("vehicles/photo.jpg", b"fake-jpeg").await.unwrap();
        assert_eq!(url, "/uploads/vehicles/photo.jpg");
        assert!(root.join("vehicles/photo.jpg").exists());

        store.delete("vehicles/photo.jpg").await.unwrap();
        assert!(!root.join("vehicles/photo.jpg").exists());

        let _ = std::fs::remove_dir_all(root);
    }

    #[tokio::test]
    async fn test_local_delete_missing_file_fails() {
        let (store, root) = temp_store();
        assert!(store.delete("vehicles/absent.jpg").await.is_err());
        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn test_remote_object_url_encodes_segments() {
        let store = RemoteObjectStore::new(
            Client::new(),
            "https://storage.example.com/bucket".to_string(),
            None,
        );
        assert_eq!(
            store.object_url("vehicles/photo avant.jpg"),
            "https://storage.example.com/bucket/vehicles/photo%20avant.jpg"
        );
    }
}
