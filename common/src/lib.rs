//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod product_filters;
pub mod category;
pub mod product_type;
pub mod catalog_const;
