//! UI Components
//!
//! Leptos components rendering the menu screen. Handlers forward to the
//! view controller through `AppContext`.

mod top_bar;
mod category_sidebar;
mod subcategory_bar;
mod menu_grid;
mod cart_floating;
mod bottom_nav;
mod cart_modal;

pub use top_bar::TopBar;
pub use category_sidebar::CategorySidebar;
pub use subcategory_bar::SubcategoryBar;
pub use menu_grid::MenuGrid;
pub use cart_floating::CartFloating;
pub use bottom_nav::BottomNav;
pub use cart_modal::CartModal;
