//! Dépôts d'accès aux données
//!
//! Un dépôt par table, requêtes `query_as` exécutées à l'exécution.
//! Les mises à jour suivent le modèle lecture-fusion-écriture
//! (dernier écrivain gagnant).

pub mod activity_repository;
pub mod contact_repository;
pub mod media_repository;
pub mod site_config_repository;
pub mod vehicle_repository;
pub mod visitor_repository;
