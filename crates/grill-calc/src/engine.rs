//! 備貨建議引擎
//!
//! 把歷史銷售與報廢彙總轉成每商品、每時段的建議備貨量與信心分數。
//! 純函數：不碰 I/O、不保留狀態，持久化由呼叫端負責。

use chrono::NaiveDate;
use grill_core::{
    DayWeights, Product, SalesByTimePeriod, Suggestion, WasteByTimePeriod,
};
use rust_decimal::Decimal;

use crate::confidence::confidence_score;
use crate::defaults::default_prep_quantity;
use crate::rounding::round_to_count_clamped;

/// 報廢折減係數：歷史報廢率高會往下拉建議量，但不等比例全扣，
/// 因為部分報廢（食安時限到期）是無法避免的
const WASTE_REDUCTION_FACTOR_TENTHS: i64 = 7; // 0.7

/// 建議備貨量下限
pub const MIN_SUGGESTED_QUANTITY: u32 = 2;

/// 建議備貨量上限
pub const MAX_SUGGESTED_QUANTITY: u32 = 20;

/// 備貨建議引擎
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    /// 星期權重表
    day_weights: DayWeights,
}

impl SuggestionEngine {
    /// 創建新的建議引擎（使用預設星期權重）
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：覆寫星期權重表
    pub fn with_day_weights(mut self, day_weights: DayWeights) -> Self {
        self.day_weights = day_weights;
        self
    }

    /// 為指定日期與時段的所有商品產生備貨建議
    ///
    /// 每個輸入商品各產生一筆建議，順序與輸入相同。
    /// 對任何輸入都有定義：空商品清單回傳空清單。
    pub fn generate(
        &self,
        date: NaiveDate,
        time_period_id: i32,
        products: &[Product],
        historical_sales: &[SalesByTimePeriod],
        historical_waste: &[WasteByTimePeriod],
    ) -> Vec<Suggestion> {
        tracing::info!(
            "產生備貨建議：{} 時段 {}（商品 {} 筆，銷售歷史 {} 筆，報廢歷史 {} 筆）",
            date,
            time_period_id,
            products.len(),
            historical_sales.len(),
            historical_waste.len()
        );

        let day_weight = self.day_weights.weight_for(date);

        products
            .iter()
            .map(|product| {
                self.suggest_for_product(
                    date,
                    time_period_id,
                    product,
                    historical_sales,
                    historical_waste,
                    day_weight,
                )
            })
            .collect()
    }

    /// 單一商品的建議計算
    fn suggest_for_product(
        &self,
        date: NaiveDate,
        time_period_id: i32,
        product: &Product,
        historical_sales: &[SalesByTimePeriod],
        historical_waste: &[WasteByTimePeriod],
        day_weight: Decimal,
    ) -> Suggestion {
        // 只取該商品該時段的歷史列
        let (sales_points, sales_total) = historical_sales
            .iter()
            .filter(|s| s.matches(product.id, time_period_id))
            .fold((0usize, 0u64), |(count, sum), s| {
                (count + 1, sum + s.total_quantity as u64)
            });

        let avg_sales = if sales_points > 0 {
            Decimal::from(sales_total) / Decimal::from(sales_points as u64)
        } else {
            // 無銷售歷史：退回分類預設值
            default_prep_quantity(product.category)
        };

        let (waste_points, waste_total) = historical_waste
            .iter()
            .filter(|w| w.matches(product.id, time_period_id))
            .fold((0usize, 0u64), |(count, sum), w| {
                (count + 1, sum + w.total_quantity as u64)
            });

        let avg_waste = if waste_points > 0 {
            Decimal::from(waste_total) / Decimal::from(waste_points as u64)
        } else {
            Decimal::ZERO
        };

        // 報廢率上限 100%；平均銷售趨近於零時視為 0，避免除法爆掉
        let waste_percentage = if avg_sales > Decimal::new(1, 3) {
            (avg_waste / avg_sales).min(Decimal::ONE)
        } else {
            Decimal::ZERO
        };

        let waste_reduction = Decimal::new(WASTE_REDUCTION_FACTOR_TENTHS, 1);
        let base_quantity = avg_sales * (Decimal::ONE - waste_percentage * waste_reduction);

        let weighted_quantity = base_quantity * day_weight;

        let suggested_quantity = round_to_count_clamped(
            weighted_quantity,
            MIN_SUGGESTED_QUANTITY,
            MAX_SUGGESTED_QUANTITY,
        );

        let confidence = confidence_score(sales_points);

        tracing::debug!(
            "商品 {}：平均銷售 {}，報廢率 {}，建議量 {}（信心 {}）",
            product.id,
            avg_sales,
            waste_percentage,
            suggested_quantity,
            confidence
        );

        Suggestion::new(
            date,
            time_period_id,
            product.id,
            suggested_quantity,
            confidence,
        )
    }
}
