//! Configuration du projet
//!
//! Ce module contient la configuration des variables d'environnement.

pub mod environment;

pub use environment::*;
