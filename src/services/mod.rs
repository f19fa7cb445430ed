//! Services du système
//!
//! Ce module contient le pipeline d'upload, le stockage des fichiers,
//! le journal d'activité et les notifications sortantes.

pub mod activity_logger;
pub mod notification_service;
pub mod storage_service;
pub mod upload_service;
