//! Contrôleurs
//!
//! Un contrôleur par ressource: validation des invariants, appel au
//! dépôt, déclenchement des effets de bord (journal d'activité,
//! notifications) en dépose-et-oublie.

pub mod auth_controller;
pub mod contact_controller;
pub mod media_controller;
pub mod site_config_controller;
pub mod vehicle_controller;
pub mod visitor_controller;
