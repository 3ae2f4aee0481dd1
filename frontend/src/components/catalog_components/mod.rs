//! Catalog screen components.

pub mod product_filters;
pub mod product_card;
pub mod category_card;
pub mod product_list_controls;
pub mod category_edit_form;
