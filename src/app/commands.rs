use crate::core::view::{render_dashboard, render_food_card, ViewOptions};
use crate::core::{Dashboard, FoodApi, FoodForm, FoodPatch, Result};
use crate::utils::error::DashboardError;

/// 一次 CLI 呼叫所執行的動作
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Add(FoodForm),
    Edit { id: u64, patch: FoodPatch },
    Delete { id: u64 },
    Toggle { id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct CommandRunner<'a> {
    pub format: OutputFormat,
    pub view: ViewOptions<'a>,
}

impl<'a> CommandRunner<'a> {
    pub fn new(format: OutputFormat, currency_symbol: &'a str) -> Self {
        Self {
            format,
            view: ViewOptions { currency_symbol },
        }
    }

    /// 先載入列表（對應頁面掛載），再執行動作，回傳要印出的內容
    pub async fn run<A: FoodApi>(
        &self,
        dashboard: &mut Dashboard<A>,
        command: Command,
    ) -> Result<String> {
        dashboard.load_foods().await?;

        let summary = match command {
            Command::List => None,
            Command::Add(form) => {
                dashboard.toggle_modal();
                dashboard.submit_add_modal(form).await?;
                dashboard.foods().last().map(|food| {
                    format!("Added dish:\n{}", render_food_card(food, &self.view))
                })
            }
            Command::Edit { id, patch } => {
                let food = dashboard
                    .find_food(id)
                    .cloned()
                    .ok_or(DashboardError::FoodNotFound { id })?;
                dashboard.handle_edit_food(food);
                dashboard.submit_edit_modal(patch).await?;
                dashboard
                    .find_food(id)
                    .map(|food| format!("Updated dish:\n{}", render_food_card(food, &self.view)))
            }
            Command::Delete { id } => {
                dashboard.handle_delete_food(id).await?;
                Some(format!("Deleted dish #{}\n", id))
            }
            Command::Toggle { id } => {
                let food = dashboard.toggle_availability(id).await?;
                Some(format!("Toggled dish:\n{}", render_food_card(&food, &self.view)))
            }
        };

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(dashboard.foods())?),
            OutputFormat::Text => {
                let mut out = summary.unwrap_or_default();
                out.push_str(&render_dashboard(dashboard, &self.view));
                Ok(out)
            }
        }
    }
}
