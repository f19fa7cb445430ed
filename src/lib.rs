//! Backend du site vitrine Auto Export
//!
//! API REST d'un site d'export de véhicules: authentification JWT de
//! l'opérateur, CRUD des véhicules, messages de contact, statistiques
//! de visites, configuration du site et gestion des médias, avec
//! upload de fichiers sur disque local ou magasin d'objets distant.

pub mod client;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
