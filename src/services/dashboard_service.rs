// src/services/dashboard_service.rs

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;
use crate::{
    common::error::AppError,
    db::ReportsRepository,
    models::dashboard::{SalesOverview, StatusBreakdown},
    models::inventory::{AlertSeverity, StockAlert, StockLevelRow},
    models::sales::Sale,
};

#[derive(Clone)]
pub struct DashboardService {
    repo: Arc<dyn ReportsRepository>,
}

impl DashboardService {
    pub fn new(repo: Arc<dyn ReportsRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_sales_overview(&self, tenant_id: Uuid) -> Result<SalesOverview, AppError> {
        let sales = self.repo.list_sales(tenant_id).await?;
        tracing::debug!(%tenant_id, rows = sales.len(), "Vendas carregadas para o resumo");

        Ok(summarize_sales(&sales))
    }

    pub async fn get_stock_alerts(
        &self,
        tenant_id: Uuid,
        location_id: Option<Uuid>,
        limit: Option<usize>,
    ) -> Result<Vec<StockAlert>, AppError> {
        let levels = self.repo.list_stock_levels(tenant_id, location_id).await?;
        tracing::debug!(%tenant_id, rows = levels.len(), "Níveis de estoque carregados");

        let mut alerts = compute_stock_alerts(&levels);
        if let Some(limit) = limit {
            alerts.truncate(limit);
        }
        Ok(alerts)
    }
}

// 1. Resumo (cards do topo)
pub fn summarize_sales(sales: &[Sale]) -> SalesOverview {
    let mut by_status: HashMap<&str, (u64, Decimal)> = HashMap::new();
    let mut total_revenue = Decimal::ZERO;

    for sale in sales {
        let amount = sale.total_amount.unwrap_or(Decimal::ZERO);
        total_revenue = total_revenue.saturating_add(amount);

        let entry = by_status
            .entry(sale.status.as_deref().unwrap_or_default())
            .or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 = entry.1.saturating_add(amount);
    }

    let sales_count = sales.len() as u64;
    let average_ticket = if sales_count == 0 {
        Decimal::ZERO
    } else {
        (total_revenue / Decimal::from(sales_count)).round_dp(2)
    };

    let mut by_status: Vec<StatusBreakdown> = by_status
        .into_iter()
        .map(|(status, (count, revenue))| StatusBreakdown {
            status: status.to_string(),
            count,
            revenue,
        })
        .collect();
    by_status.sort_unstable_by(|a, b| a.status.cmp(&b.status));

    SalesOverview {
        sales_count,
        total_revenue,
        average_ticket,
        by_status,
    }
}

fn classify(level: &StockLevelRow) -> Option<AlertSeverity> {
    if level.quantity <= Decimal::ZERO {
        Some(AlertSeverity::OutOfStock)
    } else if level.low_stock_threshold > Decimal::ZERO && level.quantity <= level.low_stock_threshold {
        Some(AlertSeverity::LowStock)
    } else {
        None
    }
}

// 2. Alertas de estoque: sem estoque primeiro, depois estoque baixo
pub fn compute_stock_alerts(levels: &[StockLevelRow]) -> Vec<StockAlert> {
    let mut alerts: Vec<StockAlert> = levels
        .iter()
        .filter_map(|level| {
            classify(level).map(|severity| StockAlert {
                item_id: level.item_id,
                sku: level.sku.clone(),
                name: level.name.clone(),
                location_id: level.location_id,
                quantity: level.quantity,
                low_stock_threshold: level.low_stock_threshold,
                severity,
            })
        })
        .collect();

    alerts.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then(a.quantity.cmp(&b.quantity))
            .then_with(|| a.sku.cmp(&b.sku))
    });
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(status: Option<&str>, amount: Option<i64>) -> Sale {
        Sale {
            id: Uuid::new_v4(),
            code: String::new(),
            date: Some("2024-04-15".to_string()),
            total_amount: amount.map(Decimal::from),
            status: status.map(str::to_string),
        }
    }

    fn level(sku: &str, quantity: i64, threshold: i64) -> StockLevelRow {
        StockLevelRow {
            item_id: Uuid::new_v4(),
            sku: sku.to_string(),
            name: format!("Item {sku}"),
            location_id: Uuid::nil(),
            quantity: Decimal::from(quantity),
            low_stock_threshold: Decimal::from(threshold),
        }
    }

    #[test]
    fn overview_of_empty_list() {
        let overview = summarize_sales(&[]);

        assert_eq!(overview.sales_count, 0);
        assert_eq!(overview.total_revenue, Decimal::ZERO);
        assert_eq!(overview.average_ticket, Decimal::ZERO);
        assert!(overview.by_status.is_empty());
    }

    #[test]
    fn overview_totals_and_status_breakdown() {
        let sales = vec![
            sale(Some("COMPLETADA"), Some(100)),
            sale(Some("PENDIENTE"), Some(50)),
            sale(Some("COMPLETADA"), None),
            sale(None, Some(10)),
        ];

        let overview = summarize_sales(&sales);

        assert_eq!(overview.sales_count, 4);
        assert_eq!(overview.total_revenue, Decimal::from(160));
        assert_eq!(overview.average_ticket, Decimal::from(40));

        let statuses: Vec<(&str, u64)> = overview
            .by_status
            .iter()
            .map(|b| (b.status.as_str(), b.count))
            .collect();
        assert_eq!(statuses, vec![("", 1), ("COMPLETADA", 2), ("PENDIENTE", 1)]);
        assert_eq!(overview.by_status[1].revenue, Decimal::from(100));
    }

    #[test]
    fn overview_saturates_on_huge_totals() {
        let huge = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
        let mut sales = vec![sale(Some("COMPLETADA"), None), sale(Some("COMPLETADA"), None)];
        for s in &mut sales {
            s.total_amount = Some(huge);
        }

        let overview = summarize_sales(&sales);

        assert_eq!(overview.total_revenue, Decimal::MAX);
        assert_eq!(overview.by_status[0].revenue, Decimal::MAX);
        assert_eq!(overview.average_ticket, (Decimal::MAX / Decimal::from(2)).round_dp(2));
    }

    #[test]
    fn average_ticket_is_rounded() {
        let sales = vec![
            sale(Some("COMPLETADA"), Some(10)),
            sale(Some("COMPLETADA"), Some(10)),
            sale(Some("COMPLETADA"), Some(0)),
        ];

        assert_eq!(summarize_sales(&sales).average_ticket, Decimal::new(667, 2));
    }

    #[test]
    fn stock_alerts_are_classified_and_ordered() {
        let levels = vec![
            level("B", 3, 5),
            level("OK", 10, 5),
            level("A", 0, 5),
            level("C", 1, 5),
            level("NEG", -2, 0),
            level("NO-THRESHOLD", 4, 0),
            level("EDGE", 5, 5),
        ];

        let alerts = compute_stock_alerts(&levels);
        let got: Vec<(&str, AlertSeverity)> =
            alerts.iter().map(|a| (a.sku.as_str(), a.severity)).collect();

        assert_eq!(
            got,
            vec![
                ("NEG", AlertSeverity::OutOfStock),
                ("A", AlertSeverity::OutOfStock),
                ("C", AlertSeverity::LowStock),
                ("B", AlertSeverity::LowStock),
                ("EDGE", AlertSeverity::LowStock),
            ]
        );
    }
}
