use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use common::product_filters::ProductFilterState;

use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::category_list_page::CategoryListPage;
use crate::pages::category_page::CategoryPage;
use crate::pages::category_edit_page::CategoryEditPage;
use crate::pages::category_edit_demo_page::CategoryEditDemoPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/categories")]
    CategoryListPage {},


    #[route("/category/:id/:filters/:after")]
    CategoryPage {
        id: String,
        filters: UrlParam<ProductFilterState>,
        after: UrlParam<Option<String>>,
    },


    #[route("/category_edit/:id")]
    CategoryEditPage { id: String },


    #[route("/demo/category_edit")]
    CategoryEditDemoPage {},

}

impl Route {
    /// First product page of a category, with the given committed filters.
    pub fn category_page_first_page(id: String, filters: ProductFilterState) -> Self {
        Self::CategoryPage {
            id,
            filters: UrlParam::from(filters),
            after: UrlParam::from(None),
        }
    }
}
