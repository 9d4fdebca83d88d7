//! Text rendering of the dashboard page: header, food cards and modal panes.
//!
//! Everything here is a pure function of the dashboard state, so the CLI can
//! print it and tests can assert on it.

use crate::core::{Dashboard, Food, FoodApi};

pub const APP_TITLE: &str = "GoRestaurant";
pub const ADD_ACTION: &str = "[+] Add dish";
pub const DEFAULT_CURRENCY: &str = "R$";

const CARD_RULE: &str = "----------------------------------------";

pub struct ViewOptions<'a> {
    pub currency_symbol: &'a str,
}

impl Default for ViewOptions<'_> {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY,
        }
    }
}

pub fn render_header() -> String {
    format!("{}    {}\n", APP_TITLE, ADD_ACTION)
}

pub fn format_price(price: &str, options: &ViewOptions<'_>) -> String {
    format!("{} {}", options.currency_symbol, price)
}

pub fn availability_label(available: bool) -> &'static str {
    if available {
        "Available"
    } else {
        "Unavailable"
    }
}

pub fn render_food_card(food: &Food, options: &ViewOptions<'_>) -> String {
    format!(
        "{}\n#{} {}\n{}\n{}\nimage: {}\n[{}]\n",
        CARD_RULE,
        food.id,
        food.name,
        food.description,
        format_price(&food.price, options),
        food.image,
        availability_label(food.available)
    )
}

pub fn render_food_list(foods: &[Food], options: &ViewOptions<'_>) -> String {
    if foods.is_empty() {
        return "No dishes registered yet.\n".to_string();
    }

    foods
        .iter()
        .map(|food| render_food_card(food, options))
        .collect::<Vec<_>>()
        .join("")
}

fn render_add_modal() -> String {
    "== New dish ==\nimage URL / name / price / description\n".to_string()
}

fn render_edit_modal(editing: Option<&Food>, options: &ViewOptions<'_>) -> String {
    match editing {
        Some(food) => format!(
            "== Edit dish ==\nimage: {}\nname: {}\nprice: {}\ndescription: {}\n",
            food.image,
            food.name,
            format_price(&food.price, options),
            food.description
        ),
        None => "== Edit dish ==\n(no dish selected)\n".to_string(),
    }
}

/// Render the whole page: header, open modals, then the food list.
pub fn render_dashboard<A: FoodApi>(
    dashboard: &Dashboard<A>,
    options: &ViewOptions<'_>,
) -> String {
    let mut out = render_header();

    if dashboard.is_modal_open() {
        out.push_str(&render_add_modal());
    }
    if dashboard.is_edit_modal_open() {
        out.push_str(&render_edit_modal(dashboard.editing_food(), options));
    }

    out.push_str(&render_food_list(dashboard.foods(), options));
    out
}
