//! 分類預設值表
//!
//! 商品完全沒有歷史資料時的保底數值。兩張表刻意分開：
//! 備貨預設值是「單一時段」的量，日用量預設值是「整天」的消耗量。

use grill_core::ProductCategory;
use rust_decimal::Decimal;

/// 無銷售歷史時的單時段預設備貨量
pub fn default_prep_quantity(category: ProductCategory) -> Decimal {
    let quantity = match category {
        ProductCategory::HotDog => 8,
        ProductCategory::Tornado => 6,
        ProductCategory::RollerBite => 6,
        ProductCategory::Brat => 4,
        ProductCategory::EggRoll => 4,
        ProductCategory::Sausage => 6,
        ProductCategory::Tamale => 4,
        ProductCategory::Other => 4,
    };
    Decimal::from(quantity)
}

/// 無用量歷史時的預設日用量
pub fn default_daily_usage(category: ProductCategory) -> Decimal {
    let quantity = match category {
        ProductCategory::HotDog => 12,
        ProductCategory::Tornado => 8,
        ProductCategory::RollerBite => 8,
        ProductCategory::Brat => 6,
        ProductCategory::EggRoll => 6,
        ProductCategory::Sausage => 8,
        ProductCategory::Tamale => 6,
        ProductCategory::Other => 5,
    };
    Decimal::from(quantity)
}
