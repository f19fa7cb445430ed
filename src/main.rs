use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use auto_export_backend::config::environment::EnvironmentConfig;
use auto_export_backend::database;
use auto_export_backend::routes;
use auto_export_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Charger les variables d'environnement
    dotenv().ok();

    // Configurer le logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Auto Export - API du site vitrine");
    info!("====================================");

    // Initialiser la base de données
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Connexion à la base de données impossible: {}", e);
            return Err(anyhow::anyhow!("Erreur de base de données: {}", e));
        }
    };

    let database_url = std::env::var("DATABASE_URL").unwrap_or_default();
    info!("✅ PostgreSQL connecté ({})", database::mask_database_url(&database_url));

    database::ensure_schema(&pool).await?;
    info!("✅ Schéma vérifié");

    let config = EnvironmentConfig::default();

    // Le répertoire d'upload doit exister avant le premier fichier
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let addr: SocketAddr = config.server_addr().parse()?;
    let state = AppState::new(pool, config);
    let app = routes::create_router(state);

    info!("🌐 Serveur en écoute sur http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /api/health - Vivacité");
    info!("🔐 Admin:");
    info!("   POST /api/admin/login - Émission du token");
    info!("   GET  /api/admin/site-config - Lire la configuration");
    info!("   PUT  /api/admin/site-config - Mettre à jour la configuration");
    info!("   POST /api/admin/upload-video - Remplacer la vidéo du site");
    info!("   GET  /api/admin/activity - Journal d'activité");
    info!("🚙 Véhicules:");
    info!("   GET  /api/vehicles - Lister (public)");
    info!("   GET  /api/vehicles/featured - Véhicules mis en avant (public)");
    info!("   GET  /api/vehicles/:id - Détail (public)");
    info!("   POST /api/vehicles - Créer");
    info!("   PUT  /api/vehicles/:id - Mettre à jour");
    info!("   DELETE /api/vehicles/:id - Supprimer");
    info!("   POST /api/vehicles/upload/:id - Ajouter des images");
    info!("✉️ Contact:");
    info!("   POST /api/contact - Soumettre un message (public)");
    info!("   GET  /api/contact - Lister les messages");
    info!("   PUT  /api/contact/:id/respond - Marquer comme traité");
    info!("   DELETE /api/contact/:id - Supprimer un message");
    info!("📈 Visites:");
    info!("   POST /api/visitors/record - Enregistrer une visite (public)");
    info!("   GET  /api/visitors/stats - Statistiques");
    info!("🖼 Médias:");
    info!("   GET  /api/media - Lister les actifs");
    info!("   POST /api/media - Uploader");
    info!("   DELETE /api/media/:id - Supprimer");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Serveur arrêté");
    Ok(())
}

/// Signal d'arrêt graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C reçu, arrêt du serveur...");
        },
        _ = terminate => {
            info!("🛑 Signal de terminaison reçu, arrêt du serveur...");
        },
    }
}
