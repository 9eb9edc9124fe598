// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Reports ---
        handlers::reports::get_sales_trend,
        handlers::reports::compute_sales_trend,
        handlers::reports::export_sales_trend,

        // --- Dashboard ---
        handlers::dashboard::get_sales_overview,
        handlers::dashboard::get_stock_alerts,
    ),
    components(
        schemas(
            // --- Sales ---
            models::sales::Sale,
            models::sales::Granularity,
            models::sales::PeriodSummary,
            models::sales::SalesTrendRequest,

            // --- DASHBOARD ---
            models::dashboard::SalesOverview,
            models::dashboard::StatusBreakdown,

            // --- Inventory ---
            models::inventory::StockLevelRow,
            models::inventory::AlertSeverity,
            models::inventory::StockAlert,
        )
    ),
    tags(
        (name = "Reports", description = "Tendência de vendas por período e exportação"),
        (name = "Dashboard", description = "Indicadores e alertas do painel")
    )
)]
pub struct ApiDoc;
