//! 信心分數計算
//!
//! 歷史資料點越多，平均值越可信。用階梯函數避免給出虛假的小數精度。

/// 依銷售資料點數量計算信心分數（0.0 到 1.0）
pub fn confidence_score(data_points: usize) -> f32 {
    match data_points {
        0 => 0.1,
        1 => 0.3,
        2 => 0.5,
        3 => 0.7,
        4..=6 => 0.8,
        7..=13 => 0.9,
        _ => 0.95,
    }
}
