// src/models/dashboard.rs

use serde::Serialize;
use rust_decimal::Decimal;
use utoipa::ToSchema;

// 1. Resumo das vendas (cards do topo)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesOverview {
    pub sales_count: u64,
    pub total_revenue: Decimal,
    pub average_ticket: Decimal,
    pub by_status: Vec<StatusBreakdown>,
}

// 2. Quebra por status da venda
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    #[schema(example = "COMPLETADA")]
    pub status: String,
    pub count: u64,
    pub revenue: Decimal,
}
