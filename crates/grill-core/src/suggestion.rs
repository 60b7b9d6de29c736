//! 備貨建議與訂購建議模型（計算結果）
//!
//! 輸出記錄刻意不含流水號與時間戳：相同輸入必須產生完全相同的結果，
//! 持久層以 (日期, 時段, 商品) / (日期, 商品) 為鍵做刪除後重插。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 單一商品在單一時段的備貨建議
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// 建議適用日期
    pub date: NaiveDate,

    /// 時段ID
    pub time_period_id: i32,

    /// 商品ID
    pub product_id: i32,

    /// 建議備貨數量
    pub suggested_quantity: u32,

    /// 信心分數（0.0 到 1.0）
    pub confidence_score: f32,
}

impl Suggestion {
    /// 創建新的備貨建議
    pub fn new(
        date: NaiveDate,
        time_period_id: i32,
        product_id: i32,
        suggested_quantity: u32,
        confidence_score: f32,
    ) -> Self {
        Self {
            date,
            time_period_id,
            product_id,
            suggested_quantity,
            confidence_score,
        }
    }
}

/// 單一商品的訂購建議（箱數 + 散件數）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSuggestion {
    /// 訂購日期
    pub date: NaiveDate,

    /// 商品ID
    pub product_id: i32,

    /// 建議訂購箱數
    pub suggested_cases: u32,

    /// 建議訂購散件數（小於每箱入數）
    pub suggested_units: u32,
}

impl OrderSuggestion {
    /// 創建新的訂購建議
    pub fn new(
        date: NaiveDate,
        product_id: i32,
        suggested_cases: u32,
        suggested_units: u32,
    ) -> Self {
        Self {
            date,
            product_id,
            suggested_cases,
            suggested_units,
        }
    }

    /// 建議總件數 = 箱數 × 每箱入數 + 散件數
    pub fn total_units(&self, units_per_case: u32) -> u32 {
        self.suggested_cases * units_per_case + self.suggested_units
    }
}
