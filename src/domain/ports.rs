use crate::domain::model::{Food, NewFood};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 餐點目錄的遠端資源
#[async_trait]
pub trait FoodApi: Send + Sync {
    async fn list_foods(&self) -> Result<Vec<Food>>;
    async fn create_food(&self, food: &NewFood) -> Result<Food>;
    async fn update_food(&self, id: u64, food: &Food) -> Result<Food>;
    async fn delete_food(&self, id: u64) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn currency_symbol(&self) -> &str;
}
