pub mod dashboard;
pub mod view;

pub use crate::domain::model::{Food, FoodForm, FoodPatch, NewFood};
pub use crate::domain::ports::{ConfigProvider, FoodApi};
pub use crate::utils::error::Result;
pub use dashboard::Dashboard;
