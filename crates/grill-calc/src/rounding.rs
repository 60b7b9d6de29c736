//! 數值捨入輔助

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// 四捨五入到整數（逢五進位，不用銀行家捨入）
pub fn round_to_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// 四捨五入後轉成件數，並限制在指定範圍內
pub fn round_to_count_clamped(value: Decimal, min: u32, max: u32) -> u32 {
    let rounded = round_to_unit(value);
    let clamped = rounded.clamp(Decimal::from(min), Decimal::from(max));
    clamped.to_u32().unwrap_or(min)
}

/// 四捨五入後轉成非負件數
pub fn round_to_count(value: Decimal) -> u32 {
    round_to_unit(value.max(Decimal::ZERO))
        .to_u32()
        .unwrap_or(0)
}
