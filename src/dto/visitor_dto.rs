use serde::{Deserialize, Serialize};

/// Enregistrement d'une visite (endpoint public, ne renvoie jamais d'erreur)
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordVisitRequest {
    pub page: String,
}

/// Compte de visites par page
#[derive(Debug, Serialize, Deserialize)]
pub struct PageCount {
    pub page: String,
    pub count: i64,
}

/// Compte de visites par jour
#[derive(Debug, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: String,
    pub count: i64,
}

/// Agrégats pour le tableau de bord administrateur
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorStatsResponse {
    pub total: i64,
    pub today: i64,
    pub by_page: Vec<PageCount>,
    #[serde(rename = "last7Days")]
    pub last_seven_days: Vec<DailyCount>,
}
