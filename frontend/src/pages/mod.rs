//! Page components.

pub mod home_page;
pub mod category_list_page;
pub mod category_page;
pub mod category_edit_page;
pub mod category_edit_demo_page;
