use crate::domain::model::{Food, NewFood};
use crate::domain::ports::{ConfigProvider, FoodApi};
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use std::time::Duration;
use url::Url;

const FOODS_PATH: &str = "foods";

/// REST client for the `/foods` resource.
pub struct HttpFoodApi {
    client: Client,
    base_url: Url,
}

impl HttpFoodApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;

        // 確保 join 時不會把最後一段路徑吃掉
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn foods_url(&self) -> Result<Url> {
        Ok(self.base_url.join(FOODS_PATH)?)
    }

    fn food_url(&self, id: u64) -> Result<Url> {
        Ok(self.base_url.join(&format!("{}/{}", FOODS_PATH, id))?)
    }

    fn check_status(method: Method, response: Response) -> Result<Response> {
        let status = response.status();
        tracing::debug!("{} {} -> {}", method, response.url(), status);

        if status.is_success() {
            Ok(response)
        } else {
            Err(DashboardError::HttpStatusError {
                method: method.to_string(),
                url: response.url().to_string(),
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl FoodApi for HttpFoodApi {
    async fn list_foods(&self) -> Result<Vec<Food>> {
        let url = self.foods_url()?;
        let response = self.client.get(url).send().await?;
        let response = Self::check_status(Method::GET, response)?;
        let foods: Vec<Food> = response.json().await?;
        Ok(foods)
    }

    async fn create_food(&self, food: &NewFood) -> Result<Food> {
        let url = self.foods_url()?;
        let response = self.client.post(url).json(food).send().await?;
        let response = Self::check_status(Method::POST, response)?;
        Ok(response.json().await?)
    }

    async fn update_food(&self, id: u64, food: &Food) -> Result<Food> {
        let url = self.food_url(id)?;
        let response = self.client.put(url).json(food).send().await?;
        let response = Self::check_status(Method::PUT, response)?;
        Ok(response.json().await?)
    }

    async fn delete_food(&self, id: u64) -> Result<()> {
        let url = self.food_url(id)?;
        let response = self.client.delete(url).send().await?;
        Self::check_status(Method::DELETE, response)?;
        Ok(())
    }
}
