//! 商品模型

use serde::{Deserialize, Serialize};

/// 商品分類
///
/// 封閉的分類集合：無法辨識的分類標籤一律落到 `Other`，
/// 由呼叫端決定是否視為資料問題。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    /// 熱狗
    HotDog,
    /// 龍捲捲（Tornado）
    Tornado,
    /// RollerBite
    RollerBite,
    /// 德式香腸（Brat）
    Brat,
    /// 炸春捲
    EggRoll,
    /// 香腸
    Sausage,
    /// 墨西哥粽（Tamale）
    Tamale,
    /// 其他
    Other,
}

impl ProductCategory {
    /// 從自由文字標籤解析分類（不分大小寫的完整比對）
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("hot dog") {
            Self::HotDog
        } else if label.eq_ignore_ascii_case("tornado") {
            Self::Tornado
        } else if label.eq_ignore_ascii_case("rollerbite") {
            Self::RollerBite
        } else if label.eq_ignore_ascii_case("brat") {
            Self::Brat
        } else if label.eq_ignore_ascii_case("egg roll") {
            Self::EggRoll
        } else if label.eq_ignore_ascii_case("sausage") {
            Self::Sausage
        } else if label.eq_ignore_ascii_case("tamale") {
            Self::Tamale
        } else {
            Self::Other
        }
    }
}

/// 商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 商品ID
    pub id: i32,

    /// 顯示名稱
    pub name: String,

    /// 分類
    pub category: ProductCategory,

    /// 是否為販售中商品
    pub active: bool,

    /// 是否有庫存
    pub in_stock: bool,

    /// 每箱入數（0 表示未設定，無法以箱為單位訂購）
    pub units_per_case: u32,

    /// 最低庫存水位
    pub min_stock_level: u32,

    /// 最高庫存水位
    pub max_stock_level: u32,
}

impl Product {
    /// 創建新的商品
    pub fn new(id: i32, name: String, category: ProductCategory) -> Self {
        Self {
            id,
            name,
            category,
            active: true,
            in_stock: true,
            units_per_case: 0,
            min_stock_level: 0,
            max_stock_level: 0,
        }
    }

    /// 建構器模式：設置每箱入數
    pub fn with_units_per_case(mut self, units_per_case: u32) -> Self {
        self.units_per_case = units_per_case;
        self
    }

    /// 建構器模式：設置庫存水位
    pub fn with_stock_levels(mut self, min_level: u32, max_level: u32) -> Self {
        self.min_stock_level = min_level;
        self.max_stock_level = max_level;
        self
    }

    /// 建構器模式：設置販售狀態
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// 建構器模式：設置庫存狀態
    pub fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// 檢查是否可以用箱為單位訂購
    pub fn is_orderable_by_case(&self) -> bool {
        self.units_per_case > 0
    }
}
