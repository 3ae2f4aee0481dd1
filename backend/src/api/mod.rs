//! Backend API modules consumed by the frontend server functions.

pub mod categories;
pub mod product_types;
