// src/handlers/reports.rs

use axum::{
    body::Body,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid; // Importante para o Swagger params

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::tenancy::TenantContext,
    models::sales::{PeriodSummary, SalesTrendRequest, TrendQuery},
};

// GET /api/reports/sales-trend
#[utoipa::path(
    get,
    path = "/api/reports/sales-trend",
    tag = "Reports",
    responses(
        (status = 200, description = "Vendas agrupadas por período (ordem alfabética do rótulo)", body = Vec<PeriodSummary>),
        (status = 400, description = "Cabeçalho X-Tenant-ID ausente ou inválido")
    ),
    params(
        TrendQuery,
        ("x-tenant-id" = Uuid, Header, description = "ID da Loja")
    )
)]
pub async fn get_sales_trend(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    query: Result<Query<TrendQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let trend = app_state.reports_service
        .get_sales_trend(tenant.0, query.granularity)
        .await?;

    Ok((StatusCode::OK, Json(trend)))
}

// POST /api/reports/sales-trend
#[utoipa::path(
    post,
    path = "/api/reports/sales-trend",
    tag = "Reports",
    request_body = SalesTrendRequest,
    responses(
        (status = 200, description = "Agregação das vendas enviadas no corpo", body = Vec<PeriodSummary>),
        (status = 400, description = "JSON malformado"),
        (status = 422, description = "JSON com campos de tipo inválido")
    )
)]
pub async fn compute_sales_trend(
    State(app_state): State<AppState>,
    payload: Result<Json<SalesTrendRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let trend = app_state.reports_service
        .compute_sales_trend(&payload.sales, payload.granularity);

    Ok((StatusCode::OK, Json(trend)))
}

// GET /api/reports/sales-trend/export
#[utoipa::path(
    get,
    path = "/api/reports/sales-trend/export",
    tag = "Reports",
    responses(
        (status = 200, description = "Relatório de tendência em CSV", body = String, content_type = "text/csv"),
        (status = 400, description = "Cabeçalho X-Tenant-ID ausente ou inválido")
    ),
    params(
        TrendQuery,
        ("x-tenant-id" = Uuid, Header, description = "ID da Loja")
    )
)]
pub async fn export_sales_trend(
    State(app_state): State<AppState>,
    tenant: TenantContext,
    query: Result<Query<TrendQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let csv_bytes = app_state.reports_service
        .export_sales_trend_csv(tenant.0, query.granularity)
        .await?;

    let filename = format!("ventas-{}.csv", query.granularity.as_str());
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(csv_bytes))
        .map_err(|e| AppError::InternalServerError(anyhow::anyhow!("response build failed: {e}")))
}
