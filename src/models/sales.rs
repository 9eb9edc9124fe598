// src/models/sales.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

// --- Venda (como vem do banco ou da API) ---
// Somente leitura para os relatórios. Data e valor podem vir ausentes ou
// malformados; o agregador degrada para valores neutros.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    #[schema(example = "V-000123")]
    pub code: String,
    #[serde(default)]
    #[schema(example = "2024-04-15")]
    pub date: Option<String>,
    #[serde(default)]
    #[schema(example = "1500.00")]
    pub total_amount: Option<Decimal>,
    #[serde(default)]
    #[schema(example = "COMPLETADA")]
    pub status: Option<String>,
}

// --- Granularidade do relatório de tendência ---
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Quarterly => "quarterly",
        }
    }
}

// --- Linha do gráfico de tendência (um período) ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    #[schema(example = "ABR 2024")]
    pub period: String,
    pub sales_count: u64,
    // Hoje sempre igual a sales_count
    pub orders_count: u64,
    pub revenue: Decimal,
    // Estimativa fixa: 35% da receita
    pub expenses: Decimal,
}

// Query string: ?granularity=weekly
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrendQuery {
    #[serde(default)]
    pub granularity: Granularity,
}

// Corpo do POST: agrega vendas enviadas pelo cliente
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesTrendRequest {
    #[serde(default)]
    pub granularity: Granularity,
    #[serde(default)]
    pub sales: Vec<Sale>,
}
