//! 星期權重表

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 星期權重表
///
/// 以星期為索引的完整陣列（索引 0 = 週一 .. 6 = 週日），
/// 每一天都必定有權重，不存在「缺少某天」的狀態。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWeights {
    weights: [Decimal; 7],
}

impl Default for DayWeights {
    /// 預設權重：平日略低、週末偏高（週五至週日為尖峰）
    fn default() -> Self {
        Self {
            weights: [
                Decimal::new(90, 2),  // 週一 0.90
                Decimal::new(85, 2),  // 週二 0.85
                Decimal::new(90, 2),  // 週三 0.90
                Decimal::new(100, 2), // 週四 1.00
                Decimal::new(120, 2), // 週五 1.20
                Decimal::new(130, 2), // 週六 1.30
                Decimal::new(110, 2), // 週日 1.10
            ],
        }
    }
}

impl DayWeights {
    /// 創建全部為 1.0 的均一權重表
    pub fn uniform() -> Self {
        Self {
            weights: [Decimal::ONE; 7],
        }
    }

    /// 建構器模式：覆寫單日權重
    pub fn with_weight(mut self, weekday: Weekday, weight: Decimal) -> Self {
        self.weights[weekday.num_days_from_monday() as usize] = weight;
        self
    }

    /// 查詢指定星期的權重
    pub fn weight_for_weekday(&self, weekday: Weekday) -> Decimal {
        self.weights[weekday.num_days_from_monday() as usize]
    }

    /// 查詢指定日期的權重
    pub fn weight_for(&self, date: NaiveDate) -> Decimal {
        self.weight_for_weekday(date.weekday())
    }
}
