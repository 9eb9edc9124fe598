// src/services/sales_trend.rs

//! Agrupa vendas em períodos (semana ISO, mês ou trimestre) para o gráfico
//! de tendência dos relatórios.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::sales::{Granularity, PeriodSummary, Sale};

/// Chave usada quando a data da venda não pode ser interpretada.
pub const UNDATED_PERIOD: &str = "Sin fecha";

// Tabela fixa es-CR; não depende do locale do sistema.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "ENE", "FEB", "MAR", "ABR", "MAY", "JUN", "JUL", "AGO", "SEP", "OCT", "NOV", "DIC",
];

/// Fração da receita lançada como despesa estimada.
pub fn expense_ratio() -> Decimal {
    Decimal::new(35, 2)
}

#[derive(Default)]
struct Accumulator {
    sales_count: u64,
    orders_count: u64,
    revenue: Decimal,
}

/// Interpreta a data de uma venda como data de calendário.
///
/// A parte de data é usada como escrita, sem conversão de fuso horário.
pub fn parse_sale_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

/// Rótulo do período de uma data já interpretada.
pub fn period_label(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Monthly => {
            format!("{} {}", MONTH_ABBREVIATIONS[date.month0() as usize], date.year())
        }
        Granularity::Quarterly => format!("Q{} {}", date.month0() / 3 + 1, date.year()),
        // Semana ISO com o ano civil: 01/01/2024 e 30/12/2024 caem ambos em "Sem 1 2024"
        Granularity::Weekly => format!("Sem {} {}", date.iso_week().week(), date.year()),
    }
}

/// Chave do bucket de uma venda; datas ausentes ou inválidas caem em "Sin fecha".
pub fn period_key(sale: &Sale, granularity: Granularity) -> String {
    sale.date
        .as_deref()
        .and_then(parse_sale_date)
        .map(|date| period_label(date, granularity))
        .unwrap_or_else(|| UNDATED_PERIOD.to_string())
}

/// Agrega as vendas por período.
///
/// Cada venda conta uma vez (nenhuma é descartada), valor ausente soma zero e
/// a saída é ordenada pela string do período, não cronologicamente. Somas que
/// estourariam o `Decimal` saturam em `Decimal::MAX`/`Decimal::MIN`.
pub fn aggregate_sales_trend(sales: &[Sale], granularity: Granularity) -> Vec<PeriodSummary> {
    let ratio = expense_ratio();
    let mut buckets: HashMap<String, Accumulator> = HashMap::new();

    for sale in sales {
        let amount = sale.total_amount.unwrap_or(Decimal::ZERO);
        let acc = buckets.entry(period_key(sale, granularity)).or_default();

        acc.sales_count += 1;
        acc.orders_count += 1;
        acc.revenue = acc.revenue.saturating_add(amount);
    }

    let mut summaries: Vec<PeriodSummary> = buckets
        .into_iter()
        .map(|(period, acc)| PeriodSummary {
            period,
            sales_count: acc.sales_count,
            orders_count: acc.orders_count,
            revenue: acc.revenue,
            // Calculada sobre o total do bucket: sempre exatamente 35% da receita
            expenses: acc.revenue * ratio,
        })
        .collect();

    summaries.sort_unstable_by(|a, b| a.period.cmp(&b.period));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sale(date: Option<&str>, amount: Option<i64>) -> Sale {
        Sale {
            id: Uuid::new_v4(),
            code: "V-1".to_string(),
            date: date.map(str::to_string),
            total_amount: amount.map(Decimal::from),
            status: Some("COMPLETADA".to_string()),
        }
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(aggregate_sales_trend(&[], Granularity::Monthly).is_empty());
        assert!(aggregate_sales_trend(&[], Granularity::Weekly).is_empty());
    }

    #[test]
    fn monthly_groups_same_month() {
        let sales = vec![
            sale(Some("2024-04-15"), Some(1000)),
            sale(Some("2024-04-20"), Some(500)),
        ];

        let result = aggregate_sales_trend(&sales, Granularity::Monthly);

        assert_eq!(
            result,
            vec![PeriodSummary {
                period: "ABR 2024".to_string(),
                sales_count: 2,
                orders_count: 2,
                revenue: Decimal::from(1500),
                expenses: Decimal::from(525),
            }]
        );
    }

    #[test]
    fn quarterly_key() {
        let result = aggregate_sales_trend(&[sale(Some("2024-07-01"), Some(10))], Granularity::Quarterly);
        assert_eq!(result[0].period, "Q3 2024");

        let date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(period_label(date, Granularity::Quarterly), "Q1 2024");
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(period_label(date, Granularity::Quarterly), "Q4 2024");
    }

    #[test]
    fn weekly_uses_iso_week_number() {
        let result = aggregate_sales_trend(&[sale(Some("2024-01-01"), Some(10))], Granularity::Weekly);
        assert_eq!(result[0].period, "Sem 1 2024");

        // 2021-01-03 é da semana ISO 53; o rótulo leva o ano civil
        let date = NaiveDate::from_ymd_opt(2021, 1, 3).unwrap();
        assert_eq!(period_label(date, Granularity::Weekly), "Sem 53 2021");

        let date = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        assert_eq!(period_label(date, Granularity::Weekly), "Sem 1 2024");
    }

    #[test]
    fn invalid_date_goes_to_undated_bucket() {
        let result = aggregate_sales_trend(&[sale(Some("not-a-date"), Some(80))], Granularity::Monthly);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].period, UNDATED_PERIOD);
        assert_eq!(result[0].sales_count, 1);
        assert_eq!(result[0].revenue, Decimal::from(80));
    }

    #[test]
    fn missing_date_and_amount_are_still_counted() {
        let result = aggregate_sales_trend(&[sale(None, None)], Granularity::Quarterly);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].period, UNDATED_PERIOD);
        assert_eq!(result[0].sales_count, 1);
        assert_eq!(result[0].revenue, Decimal::ZERO);
        assert_eq!(result[0].expenses, Decimal::ZERO);
    }

    #[test]
    fn output_is_sorted_as_strings() {
        let sales = vec![
            sale(Some("2024-01-10"), Some(1)),
            sale(Some("2024-04-10"), Some(1)),
            sale(Some("2024-02-10"), Some(1)),
        ];

        let periods: Vec<String> = aggregate_sales_trend(&sales, Granularity::Monthly)
            .into_iter()
            .map(|s| s.period)
            .collect();

        // ABR antes de ENE: ordem de string, não de calendário
        assert_eq!(periods, vec!["ABR 2024", "ENE 2024", "FEB 2024"]);
    }

    #[test]
    fn totals_and_ratios_hold_per_bucket() {
        let sales = vec![
            sale(Some("2024-01-02"), Some(120)),
            sale(Some("2024-05-17T10:00:00Z"), Some(75)),
            sale(Some("2024-05-18 08:30:00"), None),
            sale(Some("lixo"), Some(33)),
            sale(Some("2023-11-30T23:59:59.500"), Some(-10)),
        ];
        let input_total: Decimal = sales
            .iter()
            .map(|s| s.total_amount.unwrap_or(Decimal::ZERO))
            .sum();

        for granularity in [Granularity::Weekly, Granularity::Monthly, Granularity::Quarterly] {
            let result = aggregate_sales_trend(&sales, granularity);

            let revenue: Decimal = result.iter().map(|s| s.revenue).sum();
            let count: u64 = result.iter().map(|s| s.sales_count).sum();
            assert_eq!(revenue, input_total);
            assert_eq!(count, sales.len() as u64);

            for bucket in &result {
                assert_eq!(bucket.expenses, bucket.revenue * expense_ratio());
                assert_eq!(bucket.sales_count, bucket.orders_count);
            }
        }
    }

    #[test]
    fn huge_amounts_saturate_instead_of_panicking() {
        let huge = Decimal::from_str_exact("50000000000000000000000000000").unwrap();
        let sales = vec![
            Sale { total_amount: Some(huge), ..sale(Some("2024-04-15"), None) },
            Sale { total_amount: Some(huge), ..sale(Some("2024-04-16"), None) },
        ];

        let result = aggregate_sales_trend(&sales, Granularity::Monthly);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].sales_count, 2);
        assert_eq!(result[0].revenue, Decimal::MAX);
        assert_eq!(result[0].expenses, Decimal::MAX * expense_ratio());

        let negative = vec![
            Sale { total_amount: Some(-huge), ..sale(Some("2024-04-15"), None) },
            Sale { total_amount: Some(-huge), ..sale(Some("2024-04-16"), None) },
        ];
        assert_eq!(aggregate_sales_trend(&negative, Granularity::Monthly)[0].revenue, Decimal::MIN);
    }

    #[test]
    fn expenses_stay_exact_at_high_scale() {
        let tiny = Decimal::new(1, 28);
        let sales: Vec<Sale> = (0..3)
            .map(|_| Sale { total_amount: Some(tiny), ..sale(Some("2024-04-15"), None) })
            .collect();

        let result = aggregate_sales_trend(&sales, Granularity::Monthly);

        assert_eq!(result[0].revenue, Decimal::new(3, 28));
        assert_eq!(result[0].expenses, result[0].revenue * expense_ratio());
    }

    #[test]
    fn weekly_merges_first_and_last_week_of_same_calendar_year() {
        let sales = vec![
            sale(Some("2024-01-01"), Some(10)),
            sale(Some("2024-12-30"), Some(20)),
        ];

        let result = aggregate_sales_trend(&sales, Granularity::Weekly);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].period, "Sem 1 2024");
        assert_eq!(result[0].sales_count, 2);
        assert_eq!(result[0].revenue, Decimal::from(30));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let sales = vec![
            sale(Some("2024-06-01"), Some(10)),
            sale(Some("2024-06-09"), Some(20)),
            sale(Some("??"), Some(5)),
        ];

        assert_eq!(
            aggregate_sales_trend(&sales, Granularity::Weekly),
            aggregate_sales_trend(&sales, Granularity::Weekly)
        );
    }

    #[test]
    fn parses_common_timestamp_shapes() {
        let expected = NaiveDate::from_ymd_opt(2024, 4, 15);

        assert_eq!(parse_sale_date("2024-04-15"), expected);
        assert_eq!(parse_sale_date(" 2024-04-15 "), expected);
        assert_eq!(parse_sale_date("2024-04-15T23:30:00-06:00"), expected);
        assert_eq!(parse_sale_date("2024-04-15T10:00:00"), expected);
        assert_eq!(parse_sale_date("2024-04-15T10:00:00.123"), expected);
        assert_eq!(parse_sale_date("2024-04-15 10:00:00"), expected);
        assert_eq!(parse_sale_date("2024-13-01"), None);
        assert_eq!(parse_sale_date(""), None);
    }
}
