//! 庫存盤點模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 單日庫存盤點記錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryCount {
    /// 商品ID
    pub product_id: i32,

    /// 盤點日期
    pub date: NaiveDate,

    /// 期初數量
    pub starting_count: i32,

    /// 當日到貨數量
    pub delivery_count: i32,

    /// 期末數量
    pub ending_count: i32,
}

impl InventoryCount {
    /// 創建新的盤點記錄
    pub fn new(
        product_id: i32,
        date: NaiveDate,
        starting_count: i32,
        ending_count: i32,
    ) -> Self {
        Self {
            product_id,
            date,
            starting_count,
            delivery_count: 0,
            ending_count,
        }
    }

    /// 建構器模式：設置到貨數量
    pub fn with_delivery_count(mut self, delivery_count: i32) -> Self {
        self.delivery_count = delivery_count;
        self
    }

    /// 當日用量 = 期初 + 到貨 − 期末
    ///
    /// 盤點誤差可能導致負值，由呼叫端決定如何處理。
    pub fn used_quantity(&self) -> i64 {
        self.starting_count as i64 + self.delivery_count as i64 - self.ending_count as i64
    }
}

/// 商品在回溯期間內的用量彙總
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSummary {
    /// 商品ID
    pub product_id: i32,

    /// 期間內總用量
    pub total_used: i64,
}

impl UsageSummary {
    /// 創建新的用量彙總
    pub fn new(product_id: i32, total_used: i64) -> Self {
        Self {
            product_id,
            total_used,
        }
    }

    /// 從盤點記錄彙總各商品用量
    ///
    /// 輸出依商品ID排序，確保結果穩定。
    pub fn summarize(counts: &[InventoryCount]) -> Vec<UsageSummary> {
        let mut totals: HashMap<i32, i64> = HashMap::new();

        for count in counts {
            *totals.entry(count.product_id).or_insert(0) += count.used_quantity();
        }

        let mut summaries: Vec<UsageSummary> = totals
            .into_iter()
            .map(|(product_id, total_used)| UsageSummary::new(product_id, total_used))
            .collect();
        summaries.sort_by_key(|s| s.product_id);

        summaries
    }
}
