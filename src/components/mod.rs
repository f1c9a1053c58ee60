//! UI Components
//!
//! Leptos components for the cart and todo demos.

mod demo_tab_bar;
mod product_card;
mod cart_item;
mod cart_view;
mod new_task_form;
mod filter_selector;
mod task_row;
mod todo_view;

pub use demo_tab_bar::DemoTabBar;
pub use product_card::ProductCard;
pub use cart_item::CartItem;
pub use cart_view::CartView;
pub use new_task_form::NewTaskForm;
pub use filter_selector::FilterSelector;
pub use task_row::TaskRow;
pub use todo_view::TodoView;
