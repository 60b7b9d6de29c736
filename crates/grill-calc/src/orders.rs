//! 訂購量推算
//!
//! 依目前庫存、歷史日用量與訂購節奏，推算每個商品在未來訂購日
//! 應訂的箱數與散件數。訂購量必須撐到「下一次訂購的到貨日」。

use chrono::NaiveDate;
use grill_core::{
    InventoryCount, OrderSettings, OrderSuggestion, PlanningError, Product, Result, UsageSummary,
};
use rust_decimal::Decimal;

use crate::defaults::default_daily_usage;
use crate::rounding::{round_to_count, round_to_unit};

/// 日用量回溯視窗（天）：取最近四週
pub const USAGE_WINDOW_DAYS: u32 = 28;

/// 訂購量推算器
#[derive(Debug, Clone)]
pub struct OrderProjector {
    /// 訂購設定
    settings: OrderSettings,
}

impl OrderProjector {
    /// 創建新的訂購量推算器
    pub fn new(settings: OrderSettings) -> Self {
        Self { settings }
    }

    /// 獲取訂購設定引用
    pub fn settings(&self) -> &OrderSettings {
        &self.settings
    }

    /// 為未來訂購日推算所有商品的訂購建議
    ///
    /// `today` 由呼叫端提供（而非讀系統時鐘），確保結果可重現。
    /// `current_inventory` 是今天的盤點快照；`usage_history` 是
    /// 回溯視窗內的用量彙總。每箱入數未設定的商品無法以箱訂購，直接略過。
    pub fn project(
        &self,
        today: NaiveDate,
        order_date: NaiveDate,
        products: &[Product],
        current_inventory: &[InventoryCount],
        usage_history: &[UsageSummary],
    ) -> Result<Vec<OrderSuggestion>> {
        if self.settings.order_frequency == 0 {
            return Err(PlanningError::InvalidOrderFrequency(
                self.settings.order_frequency,
            ));
        }

        tracing::info!(
            "推算訂購建議：訂購日 {}（商品 {} 筆，盤點 {} 筆，用量彙總 {} 筆）",
            order_date,
            products.len(),
            current_inventory.len(),
            usage_history.len()
        );

        let days_until_order = (order_date - today).num_days();
        let lead_time_days = self.settings.lead_time_days as i64;
        let coverage_days = self.settings.coverage_days();

        let mut suggestions = Vec::new();

        for product in products {
            if product.units_per_case == 0 {
                tracing::debug!("商品 {} 未設定每箱入數，略過", product.id);
                continue;
            }

            // 今天的期末庫存，沒有盤點記錄視為 0
            let current_level = current_inventory
                .iter()
                .find(|count| count.product_id == product.id)
                .map(|count| count.ending_count)
                .unwrap_or(0);

            // 平均日用量，無歷史用量時退回分類預設值
            let avg_daily_usage = usage_history
                .iter()
                .find(|usage| usage.product_id == product.id)
                .map(|usage| Decimal::from(usage.total_used) / Decimal::from(USAGE_WINDOW_DAYS))
                .unwrap_or_else(|| default_daily_usage(product.category));

            // 到貨日前的預計消耗
            let projected_usage_until_delivery = round_to_unit(
                avg_daily_usage * Decimal::from(days_until_order + lead_time_days),
            );

            // 到貨時的預計庫存（不會低於 0）
            let projected_inventory = (Decimal::from(current_level)
                - projected_usage_until_delivery)
                .max(Decimal::ZERO);

            // 涵蓋期所需數量
            let needed_for_coverage =
                round_to_unit(avg_daily_usage * Decimal::from(coverage_days));

            // 總需求 = 涵蓋所需 + 最低庫存水位 − 到貨時庫存
            let total_needed = round_to_count(
                needed_for_coverage + Decimal::from(product.min_stock_level)
                    - projected_inventory,
            );

            let suggested_cases = total_needed / product.units_per_case;
            let suggested_units = total_needed % product.units_per_case;

            tracing::debug!(
                "商品 {}：日用量 {}，到貨時庫存 {}，總需求 {} → {} 箱 + {} 件",
                product.id,
                avg_daily_usage,
                projected_inventory,
                total_needed,
                suggested_cases,
                suggested_units
            );

            suggestions.push(OrderSuggestion::new(
                order_date,
                product.id,
                suggested_cases,
                suggested_units,
            ));
        }

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grill_core::ProductCategory;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 25).unwrap()
    }

    fn thursday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 28).unwrap()
    }

    fn hot_dog() -> Product {
        Product::new(1, "Hot Dog".to_string(), ProductCategory::HotDog)
            .with_units_per_case(12)
            .with_stock_levels(5, 40)
    }

    #[test]
    fn test_projection_with_usage_history() {
        let projector = OrderProjector::new(OrderSettings::default()); // 頻率 2、提前期 1
        let products = vec![hot_dog()];
        let inventory = vec![InventoryCount::new(1, monday(), 60, 50)];
        let usage = vec![UsageSummary::new(1, 280)]; // 280 / 28 = 每日 10 件

        let suggestions = projector
            .project(monday(), thursday(), &products, &inventory, &usage)
            .unwrap();

        // 到貨前消耗 = 10 × (3 + 1) = 40；到貨時庫存 = 50 − 40 = 10
        // 涵蓋需求 = 10 × (3 + 1) = 40；總需求 = 40 + 5 − 10 = 35
        // 35 件 = 2 箱 (24) + 11 件
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].suggested_cases, 2);
        assert_eq!(suggestions[0].suggested_units, 11);
        assert_eq!(suggestions[0].total_units(12), 35);
    }

    #[test]
    fn test_product_without_case_size_is_skipped() {
        let projector = OrderProjector::new(OrderSettings::default());
        let products = vec![
            hot_dog(),
            Product::new(2, "Taquito".to_string(), ProductCategory::RollerBite),
        ];

        let suggestions = projector
            .project(monday(), thursday(), &products, &[], &[])
            .unwrap();

        // 商品 2 沒有每箱入數：完全不出現在結果中
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].product_id, 1);
    }

    #[test]
    fn test_missing_inventory_treated_as_zero() {
        let projector = OrderProjector::new(OrderSettings::default());
        let products = vec![hot_dog()];
        let usage = vec![UsageSummary::new(1, 280)];

        let suggestions = projector
            .project(monday(), thursday(), &products, &[], &usage)
            .unwrap();

        // 庫存 0：到貨時庫存 = max(0, 0 − 40) = 0
        // 總需求 = 40 + 5 − 0 = 45 = 3 箱 + 9 件
        assert_eq!(suggestions[0].suggested_cases, 3);
        assert_eq!(suggestions[0].suggested_units, 9);
    }

    #[test]
    fn test_default_daily_usage_without_history() {
        let projector = OrderProjector::new(OrderSettings::default());
        let products = vec![hot_dog()];
        let inventory = vec![InventoryCount::new(1, monday(), 60, 50)];

        let suggestions = projector
            .project(monday(), thursday(), &products, &inventory, &[])
            .unwrap();

        // 熱狗預設日用量 12：到貨前消耗 = 48；到貨時庫存 = max(0, 50 − 48) = 2
        // 涵蓋需求 = 48；總需求 = 48 + 5 − 2 = 51 = 4 箱 + 3 件
        assert_eq!(suggestions[0].suggested_cases, 4);
        assert_eq!(suggestions[0].suggested_units, 3);
    }

    #[test]
    fn test_overstocked_product_gets_zero_suggestion() {
        let projector = OrderProjector::new(OrderSettings::default());
        let products = vec![hot_dog()];
        let inventory = vec![InventoryCount::new(1, monday(), 200, 200)];
        let usage = vec![UsageSummary::new(1, 28)]; // 每日 1 件

        let suggestions = projector
            .project(monday(), thursday(), &products, &inventory, &usage)
            .unwrap();

        // 庫存遠高於需求：建議 0 箱 0 件，但商品仍在結果中
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].suggested_cases, 0);
        assert_eq!(suggestions[0].suggested_units, 0);
    }

    #[test]
    fn test_zero_frequency_is_rejected() {
        let settings = OrderSettings::default().with_order_frequency(0);
        let projector = OrderProjector::new(settings);

        let result = projector.project(monday(), thursday(), &[hot_dog()], &[], &[]);

        assert!(matches!(
            result,
            Err(PlanningError::InvalidOrderFrequency(0))
        ));
    }

    #[test]
    fn test_frequency_three_truncates_cycle() {
        // 7 / 3 = 2（捨去餘數）：沿用既有行為，涵蓋期比理論值短
        let settings = OrderSettings::new(3, vec![1, 3, 5], 0);
        let projector = OrderProjector::new(settings);

        let products = vec![Product::new(1, "Hot Dog".to_string(), ProductCategory::HotDog)
            .with_units_per_case(10)];
        let usage = vec![UsageSummary::new(1, 280)]; // 每日 10 件

        // 今天就是訂購日：到貨前消耗 0
        let suggestions = projector
            .project(monday(), monday(), &products, &[], &usage)
            .unwrap();

        // 涵蓋需求 = 10 × (2 + 0) = 20 = 2 箱整
        assert_eq!(suggestions[0].suggested_cases, 2);
        assert_eq!(suggestions[0].suggested_units, 0);
    }

    #[test]
    fn test_deterministic_output() {
        let projector = OrderProjector::new(OrderSettings::default());
        let products = vec![hot_dog()];
        let inventory = vec![InventoryCount::new(1, monday(), 60, 50)];
        let usage = vec![UsageSummary::new(1, 280)];

        let first = projector
            .project(monday(), thursday(), &products, &inventory, &usage)
            .unwrap();
        let second = projector
            .project(monday(), thursday(), &products, &inventory, &usage)
            .unwrap();

        assert_eq!(first, second);
    }
}
