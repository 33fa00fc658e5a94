use serde::{Deserialize, Serialize};

/// Сводка для одного виджета дашборда.
///
/// Каждый stat-виджет загружает свою сводку отдельным запросом;
/// формат общий для всех виджетов.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSummaryDto {
    pub value: f64,
    #[serde(default)]
    pub change_percent: Option<f64>,
    #[serde(default)]
    pub subtitle: Option<String>,
}
