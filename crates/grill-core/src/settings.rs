//! 訂購設定模型

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{PlanningError, Result};

/// 全店共用的訂購設定（單一記錄）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSettings {
    /// 每週訂購次數
    pub order_frequency: u32,

    /// 訂購日（週幾下單：1=週一 .. 7=週日）
    pub order_days: Vec<u8>,

    /// 提前期（下單到到貨的天數）
    pub lead_time_days: u32,
}

impl Default for OrderSettings {
    /// 預設：每週訂 2 次（週一、週四），提前期 1 天
    fn default() -> Self {
        Self {
            order_frequency: 2,
            order_days: vec![1, 4],
            lead_time_days: 1,
        }
    }
}

impl OrderSettings {
    /// 創建新的訂購設定
    pub fn new(order_frequency: u32, order_days: Vec<u8>, lead_time_days: u32) -> Self {
        Self {
            order_frequency,
            order_days,
            lead_time_days,
        }
    }

    /// 建構器模式：設置每週訂購次數
    pub fn with_order_frequency(mut self, order_frequency: u32) -> Self {
        self.order_frequency = order_frequency;
        self
    }

    /// 建構器模式：設置訂購日
    pub fn with_order_days(mut self, order_days: Vec<u8>) -> Self {
        self.order_days = order_days;
        self
    }

    /// 建構器模式：設置提前期
    pub fn with_lead_time_days(mut self, lead_time_days: u32) -> Self {
        self.lead_time_days = lead_time_days;
        self
    }

    /// 檢查設定是否可用於計算
    ///
    /// 「未設定訂購日」是使用者可修正的狀態，以獨立錯誤回報而非當機。
    pub fn validate(&self) -> Result<()> {
        if self.order_frequency == 0 {
            return Err(PlanningError::InvalidOrderFrequency(self.order_frequency));
        }
        if self.order_days.is_empty() {
            return Err(PlanningError::NoOrderDaysConfigured);
        }
        Ok(())
    }

    /// 訂購週期天數 = 7 / 每週訂購次數
    ///
    /// 沿用整數除法：頻率無法整除 7 時會捨去餘數（例如頻率 3 → 2 天）。
    pub fn order_cycle_days(&self) -> u32 {
        7 / self.order_frequency
    }

    /// 本次訂購需要涵蓋的天數（撐到下一次訂購的到貨日）
    pub fn coverage_days(&self) -> u32 {
        self.order_cycle_days() + self.lead_time_days
    }

    /// 從今天起算的未來訂購日
    pub fn next_order_dates(&self, today: NaiveDate, count: usize) -> Result<Vec<NaiveDate>> {
        if self.order_days.is_empty() {
            return Err(PlanningError::NoOrderDaysConfigured);
        }

        let mut result = Vec::with_capacity(count);
        let mut current = today;

        while result.len() < count {
            current = current.succ_opt().expect("日期溢出");
            let day_number = current.weekday().number_from_monday() as u8;

            if self.order_days.contains(&day_number) {
                result.push(current);
            }
        }

        Ok(result)
    }
}
