// src/services/reports_service.rs

use std::sync::Arc;

use uuid::Uuid;
use crate::{
    common::error::AppError,
    db::ReportsRepository,
    models::sales::{Granularity, PeriodSummary, Sale},
    services::{csv_export::trend_to_csv, sales_trend::aggregate_sales_trend},
};

#[derive(Clone)]
pub struct ReportsService {
    repo: Arc<dyn ReportsRepository>,
}

impl ReportsService {
    pub fn new(repo: Arc<dyn ReportsRepository>) -> Self {
        Self { repo }
    }

    // Busca todas as vendas do tenant e agrega em memória
    pub async fn get_sales_trend(
        &self,
        tenant_id: Uuid,
        granularity: Granularity,
    ) -> Result<Vec<PeriodSummary>, AppError> {
        let sales = self.repo.list_sales(tenant_id).await?;
        tracing::debug!(
            %tenant_id,
            rows = sales.len(),
            granularity = granularity.as_str(),
            "Vendas carregadas para a tendência"
        );

        Ok(self.compute_sales_trend(&sales, granularity))
    }

    // Vendas enviadas pelo próprio cliente (sem acesso ao banco)
    pub fn compute_sales_trend(&self, sales: &[Sale], granularity: Granularity) -> Vec<PeriodSummary> {
        aggregate_sales_trend(sales, granularity)
    }

    pub async fn export_sales_trend_csv(
        &self,
        tenant_id: Uuid,
        granularity: Granularity,
    ) -> Result<Vec<u8>, AppError> {
        let trend = self.get_sales_trend(tenant_id, granularity).await?;
        let bytes = trend_to_csv(&trend)?;

        tracing::info!(%tenant_id, periods = trend.len(), "Relatório de tendência exportado em CSV");
        Ok(bytes)
    }
}
