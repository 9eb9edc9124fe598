// src/db/reports_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use crate::{
    common::error::AppError,
    models::{inventory::StockLevelRow, sales::Sale},
};

/// Fonte dos dados dos relatórios. Sempre devolve o conjunto completo do
/// tenant; filtros e agregações acontecem nos serviços.
#[async_trait]
pub trait ReportsRepository: Send + Sync {
    async fn list_sales(&self, tenant_id: Uuid) -> Result<Vec<Sale>, AppError>;

    async fn list_stock_levels(
        &self,
        tenant_id: Uuid,
        location_id: Option<Uuid>,
    ) -> Result<Vec<StockLevelRow>, AppError>;
}

#[derive(Clone)]
pub struct PgReportsRepository {
    pool: PgPool,
}

impl PgReportsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportsRepository for PgReportsRepository {
    async fn list_sales(&self, tenant_id: Uuid) -> Result<Vec<Sale>, AppError> {
        // 'sale_date' é texto: datas malformadas chegam intactas ao agregador
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT id, code, sale_date AS "date", total_amount, status
            FROM sales
            WHERE tenant_id = $1
            ORDER BY created_at ASC
            "#,
        )
            .bind(tenant_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(sales)
    }

    async fn list_stock_levels(
        &self,
        tenant_id: Uuid,
        location_id: Option<Uuid>,
    ) -> Result<Vec<StockLevelRow>, AppError> {
        let levels = sqlx::query_as::<_, StockLevelRow>(
            r#"
            SELECT
                il.item_id,
                i.sku,
                i.name,
                il.location_id,
                il.quantity,
                il.low_stock_threshold
            FROM inventory_levels il
            JOIN items i ON il.item_id = i.id
            WHERE il.tenant_id = $1
              AND ($2::uuid IS NULL OR il.location_id = $2)
            ORDER BY i.sku ASC
            "#,
        )
            .bind(tenant_id)
            .bind(location_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(levels)
    }
}
