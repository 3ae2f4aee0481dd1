//! Presentational filter form fields.

pub mod filter_card;
pub mod form_spacer;
pub mod filter_text_field;
pub mod multi_select_field;
pub mod single_select_field;
pub mod price_range_field;
