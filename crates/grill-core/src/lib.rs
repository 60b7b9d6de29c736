//! # Grill Core
//!
//! 滾筒烤架備貨計算的核心資料模型與類型定義

pub mod history;
pub mod inventory;
pub mod product;
pub mod settings;
pub mod suggestion;
pub mod weights;

// Re-export 主要類型
pub use history::{SalesByTimePeriod, WasteByTimePeriod};
pub use inventory::{InventoryCount, UsageSummary};
pub use product::{Product, ProductCategory};
pub use settings::OrderSettings;
pub use suggestion::{OrderSuggestion, Suggestion};
pub use weights::DayWeights;

/// 備貨計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    #[error("未設定訂購日")]
    NoOrderDaysConfigured,

    #[error("無效的訂購頻率: {0}（每週訂購次數必須大於 0）")]
    InvalidOrderFrequency(u32),
}

pub type Result<T> = std::result::Result<T, PlanningError>;
