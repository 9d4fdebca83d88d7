use crate::core::{Food, FoodApi, FoodForm, FoodPatch, Result};
use crate::utils::error::DashboardError;

/// 餐點管理頁面的狀態
///
/// 每個 handler 只發一個請求，成功後才更新本地列表；失敗時記錄錯誤並保留原本的狀態。
/// handler 需要 `&mut self`，所以同一個 dashboard 同時只會有一個請求在進行。
pub struct Dashboard<A: FoodApi> {
    api: A,
    foods: Vec<Food>,
    editing_food: Option<Food>,
    modal_open: bool,
    edit_modal_open: bool,
}

impl<A: FoodApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            foods: Vec::new(),
            editing_food: None,
            modal_open: false,
            edit_modal_open: false,
        }
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn editing_food(&self) -> Option<&Food> {
        self.editing_food.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_edit_modal_open(&self) -> bool {
        self.edit_modal_open
    }

    pub fn find_food(&self, id: u64) -> Option<&Food> {
        self.foods.iter().find(|food| food.id == id)
    }

    /// 載入餐點列表，對應頁面掛載時的第一次讀取
    pub async fn load_foods(&mut self) -> Result<()> {
        match self.api.list_foods().await {
            Ok(foods) => {
                tracing::debug!("Loaded {} foods", foods.len());
                self.foods = foods;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load foods: {}", e);
                Err(e)
            }
        }
    }

    pub fn toggle_modal(&mut self) {
        self.modal_open = !self.modal_open;
    }

    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }

    pub fn handle_edit_food(&mut self, food: Food) {
        tracing::debug!("Editing food {}", food.id);
        self.editing_food = Some(food);
        self.edit_modal_open = true;
    }

    pub async fn handle_add_food(&mut self, form: FoodForm) -> Result<&Food> {
        let new_food = form.into_new_food();

        match self.api.create_food(&new_food).await {
            Ok(created) => {
                tracing::info!("Created food {} ({})", created.id, created.name);
                self.foods.push(created);
                Ok(&self.foods[self.foods.len() - 1])
            }
            Err(e) => {
                tracing::error!("Failed to add food '{}': {}", new_food.name, e);
                Err(e)
            }
        }
    }

    /// 以編輯中的餐點為底、套上表單欄位後送出更新
    pub async fn handle_update_food(&mut self, patch: FoodPatch) -> Result<Food> {
        let Some(editing) = self.editing_food.as_ref() else {
            tracing::error!("Failed to update food: {}", DashboardError::NoFoodSelected);
            return Err(DashboardError::NoFoodSelected);
        };

        let id = editing.id;
        let payload = editing.patched(&patch);

        match self.api.update_food(id, &payload).await {
            Ok(updated) => {
                tracing::info!("Updated food {}", updated.id);
                self.replace_food(&updated);
                Ok(updated)
            }
            Err(e) => {
                tracing::error!("Failed to update food {}: {}", id, e);
                Err(e)
            }
        }
    }

    pub async fn handle_delete_food(&mut self, id: u64) -> Result<()> {
        match self.api.delete_food(id).await {
            Ok(()) => {
                tracing::info!("Deleted food {}", id);
                self.foods.retain(|food| food.id != id);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to delete food {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// 切換餐點的供應狀態
    pub async fn toggle_availability(&mut self, id: u64) -> Result<Food> {
        let Some(current) = self.find_food(id) else {
            let err = DashboardError::FoodNotFound { id };
            tracing::error!("Failed to toggle availability: {}", err);
            return Err(err);
        };

        let payload = current.patched(&FoodPatch {
            available: Some(!current.available),
            ..Default::default()
        });

        match self.api.update_food(id, &payload).await {
            Ok(updated) => {
                tracing::info!(
                    "Food {} is now {}",
                    updated.id,
                    if updated.available { "available" } else { "unavailable" }
                );
                self.replace_food(&updated);
                Ok(updated)
            }
            Err(e) => {
                tracing::error!("Failed to toggle availability of food {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// 新增表單送出：不論成功與否都會關閉視窗
    pub async fn submit_add_modal(&mut self, form: FoodForm) -> Result<()> {
        let result = self.handle_add_food(form).await.map(|_| ());
        self.modal_open = false;
        result
    }

    /// 編輯表單送出：不論成功與否都會關閉視窗
    pub async fn submit_edit_modal(&mut self, patch: FoodPatch) -> Result<()> {
        let result = self.handle_update_food(patch).await.map(|_| ());
        self.edit_modal_open = false;
        result
    }

    // 以回傳的資料取代同 id 的項目，列表長度不變
    fn replace_food(&mut self, updated: &Food) {
        match self.foods.iter_mut().find(|food| food.id == updated.id) {
            Some(slot) => *slot = updated.clone(),
            None => tracing::warn!("Updated food {} is not in the local list", updated.id),
        }
    }
}
