//! UI Components
//!
//! Reusable Leptos components.

mod availability_switch;
mod delete_confirm_button;
mod food_card;
mod food_modal;
mod header;
mod modal;

pub use availability_switch::AvailabilitySwitch;
pub use delete_confirm_button::DeleteConfirmButton;
pub use food_card::FoodCard;
pub use food_modal::FoodModal;
pub use header::Header;
pub use modal::Modal;
