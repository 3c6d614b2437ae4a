//! Page copy shown by every front end.

pub const PAGE_TITLE: &str = "Analyse des Performances des Skieurs";

pub const DESCRIPTION: &str = "Cette application analyse les performances des skieurs en fonction \
de la distance parcourue, du temps écoulé et de la vitesse moyenne. Explorez les performances des \
skieurs et visualisez des graphiques interactifs pour une meilleure compréhension.";

pub const SECTION_DATA: &str = "Données des Skieurs";
pub const SECTION_STATS: &str = "Statistiques des Performances";
pub const SECTION_CHARTS: &str = "Graphiques des Performances";
pub const CHARTS_INTRO: &str = "Voici quelques graphiques représentant les performances des skieurs.";
pub const SPEED_CHART_TITLE: &str = "Vitesse Moyenne des Skieurs";
pub const SCATTER_CHART_TITLE: &str = "Distance vs Temps";
pub const SECTION_RANKING: &str = "Classement des Skieurs par Vitesse Moyenne";
pub const SELECT_PROMPT: &str = "Choisir un skieur pour analyse détaillée";
pub const DOWNLOAD_LABEL: &str = "Télécharger les données des skieurs";
