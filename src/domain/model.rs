use serde::{Deserialize, Deserializer, Serialize};

/// 餐點資料，欄位與遠端 API 的 JSON 格式一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "price_from_string_or_number")]
    pub price: String,
    pub image: String,
    pub available: bool,
}

/// 新增餐點時送出的內容（id 由 API 指派）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "price_from_string_or_number")]
    pub price: String,
    pub image: String,
    pub available: bool,
}

/// 新增表單的欄位
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FoodForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

/// 編輯表單的欄位，沒填的欄位沿用原本的值
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    pub available: Option<bool>,
}

impl FoodForm {
    /// 新增的餐點一律是可供應的
    pub fn into_new_food(self) -> NewFood {
        NewFood {
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            available: true,
        }
    }
}

impl Food {
    /// Overlay the patch onto a copy of this food. The id is never touched.
    pub fn patched(&self, patch: &FoodPatch) -> Food {
        Food {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            price: patch.price.clone().unwrap_or_else(|| self.price.clone()),
            image: patch.image.clone().unwrap_or_else(|| self.image.clone()),
            available: patch.available.unwrap_or(self.available),
        }
    }
}

// json-server 的資料裡 price 是字串，但也接受數字
fn price_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(text) => text,
        RawPrice::Number(number) => number.to_string(),
    })
}
