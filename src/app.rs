// src/app.rs

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn build_app(app_state: AppState) -> Router {
    // Rotas dos relatórios (todas exigem X-Tenant-ID, exceto o POST)
    let report_routes = Router::new()
        .route("/sales-trend"
               ,get(handlers::reports::get_sales_trend)
               .post(handlers::reports::compute_sales_trend)
        )
        .route("/sales-trend/export"
               ,get(handlers::reports::export_sales_trend)
        )
        .route("/sales-overview"
               ,get(handlers::dashboard::get_sales_overview)
        )
        .route("/stock-alerts"
               ,get(handlers::dashboard::get_stock_alerts)
        );

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/reports", report_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
}
