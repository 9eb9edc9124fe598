// src/handlers/dashboard.rs

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid; // Importante para o Swagger params
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::TenantContext,
    // Importamos os models para referenciar no Swagger
    models::{
        dashboard::SalesOverview,
        inventory::{StockAlert, StockAlertsQuery},
    },
};

// GET /api/reports/sales-overview
#[utoipa::path(
    get,
    path = "/api/reports/sales-overview",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Totais de vendas e quebra por status", body = SalesOverview),
        (status = 400, description = "Cabeçalho X-Tenant-ID ausente ou inválido")
    ),
    params(
        ("x-tenant-id" = Uuid, Header, description = "ID da Loja")
    )
)]
pub async fn get_sales_overview(
    State(app_state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, AppError> {
    let overview = app_state.dashboard_service
        .get_sales_overview(tenant.0)
        .await?;

    Ok((StatusCode::OK, Json(overview)))
}

// GET /api/reports/stock-alerts
#[utoipa::path(
    get,
    path = "/api/reports/stock-alerts",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Itens sem estoque ou abaixo do mínimo", body = Vec<StockAlert>),
        (status = 400, description = "Parâmetros inválidos")
    ),
    params(
        StockAlertsQuery,
        ("x-tenant-id" = Uuid, Header, description = "ID da Loja")
    )
)]
pub async fn get_stock_alerts(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    query: Result<Query<StockAlertsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    query.validate()?;

    let alerts = app_state.dashboard_service
        .get_stock_alerts(tenant.0, query.location_id, query.limit.map(|l| l as usize))
        .await?;

    Ok((StatusCode::OK, Json(alerts)))
}
