//! 歷史銷售與報廢彙總模型
//!
//! 資料層以 (商品, 時段, 歷史日) 為粒度提供彙總列，
//! 一組商品/時段通常會有多筆（每個歷史日一筆），平均值由引擎自行計算。

use serde::{Deserialize, Serialize};

/// 單一商品在單一時段的銷售彙總（一個歷史日一筆）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesByTimePeriod {
    /// 商品ID
    pub product_id: i32,

    /// 時段ID
    pub time_period_id: i32,

    /// 彙總銷售數量
    pub total_quantity: u32,
}

impl SalesByTimePeriod {
    /// 創建新的銷售彙總列
    pub fn new(product_id: i32, time_period_id: i32, total_quantity: u32) -> Self {
        Self {
            product_id,
            time_period_id,
            total_quantity,
        }
    }

    /// 檢查是否屬於指定商品與時段
    pub fn matches(&self, product_id: i32, time_period_id: i32) -> bool {
        self.product_id == product_id && self.time_period_id == time_period_id
    }
}

/// 單一商品在單一時段的報廢彙總（一個歷史日一筆）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteByTimePeriod {
    /// 商品ID
    pub product_id: i32,

    /// 時段ID
    pub time_period_id: i32,

    /// 彙總報廢數量
    pub total_quantity: u32,
}

impl WasteByTimePeriod {
    /// 創建新的報廢彙總列
    pub fn new(product_id: i32, time_period_id: i32, total_quantity: u32) -> Self {
        Self {
            product_id,
            time_period_id,
            total_quantity,
        }
    }

    /// 檢查是否屬於指定商品與時段
    pub fn matches(&self, product_id: i32, time_period_id: i32) -> bool {
        self.product_id == product_id && self.time_period_id == time_period_id
    }
}
