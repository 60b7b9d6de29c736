//! # Grill Calculation Engine
//!
//! 滾筒烤架備貨建議與訂購量推算的核心計算引擎

pub mod confidence;
pub mod defaults;
pub mod engine;
pub mod orders;
pub mod rounding;

// Re-export 主要類型
pub use engine::SuggestionEngine;
pub use orders::{OrderProjector, USAGE_WINDOW_DAYS};
