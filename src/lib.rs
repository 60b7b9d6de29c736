//! # Grill Planner
//!
//! 滾筒烤架備貨規劃引擎：把歷史銷售、報廢與庫存資料
//! 轉成每時段的備貨建議與未來訂購日的訂購量建議。
//!
//! 兩個計算元件都是無狀態的純函數，資料存取與持久化由外部資料層負責。

pub use grill_calc::{OrderProjector, SuggestionEngine, USAGE_WINDOW_DAYS};
pub use grill_core::{
    DayWeights, InventoryCount, OrderSettings, OrderSuggestion, PlanningError, Product,
    ProductCategory, Result, SalesByTimePeriod, Suggestion, UsageSummary, WasteByTimePeriod,
};
