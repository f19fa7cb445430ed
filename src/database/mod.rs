//! Accès à la base de données
//!
//! Ce module gère la connexion PostgreSQL et l'amorçage du schéma.

pub mod connection;

pub use connection::*;
