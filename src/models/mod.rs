//! Modèles du système
//!
//! Ce module contient les structs qui mappent exactement au schéma
//! PostgreSQL, ainsi que les ensembles de valeurs permises pour les
//! colonnes VARCHAR à valeurs contraintes.

pub mod activity;
pub mod contact;
pub mod media;
pub mod site_config;
pub mod vehicle;
pub mod visitor;
