// src/models/inventory.rs

use serde::{Serialize, Deserialize};
use rust_decimal::Decimal;
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

// --- Nível de Estoque ---
// Uma linha por item por local ('inventory_levels' JOIN 'items').
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockLevelRow {
    pub item_id: Uuid,
    #[schema(example = "CAB-HDMI-2M")]
    pub sku: String,
    #[schema(example = "Cable HDMI 2m")]
    pub name: String,
    pub location_id: Uuid,
    pub quantity: Decimal,
    pub low_stock_threshold: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    OutOfStock, // Vira "OUT_OF_STOCK"
    LowStock,   // Vira "LOW_STOCK"
}

// --- Alerta de estoque (dashboard) ---
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockAlert {
    pub item_id: Uuid,
    pub sku: String,
    pub name: String,
    pub location_id: Uuid,
    pub quantity: Decimal,
    pub low_stock_threshold: Decimal,
    pub severity: AlertSeverity,
}

// Query string: ?locationId=...&limit=20
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StockAlertsQuery {
    pub location_id: Option<Uuid>,

    #[validate(range(min = 1, max = 500, message = "O limite deve estar entre 1 e 500."))]
    pub limit: Option<u32>,
}
