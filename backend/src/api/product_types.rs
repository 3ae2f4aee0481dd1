//! Product type listing, built around the details fragment the dashboard
//! shares with the product type screens.

use common::catalog_const::PRODUCT_TYPE_LIST_LIMIT;
use common::product_type::{AttributeSummary, ProductTypeDetails, TaxRateType, Weight};
use serde::Deserialize;

use crate::graphql::execute_query;

const PRODUCT_TYPE_LIST_QUERY: &str = "
query ProductTypeList($first: Int!) {
  productTypes(first: $first) {
    edges {
      node {
        ...ProductTypeDetailsFragment
      }
    }
  }
}

fragment ProductTypeDetailsFragment on ProductType {
  id
  name
  hasVariants
  isShippingRequired
  taxRate
  productAttributes {
    id
    name
    slug
    visibleInStorefront
    filterableInDashboard
    filterableInStorefront
  }
  variantAttributes {
    id
    name
    slug
    visibleInStorefront
    filterableInDashboard
    filterableInStorefront
  }
  weight {
    unit
    value
  }
}
";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductTypeListData {
    product_types: RawProductTypeConnection,
}

#[derive(Debug, Deserialize)]
struct RawProductTypeConnection {
    edges: Vec<RawProductTypeEdge>,
}

#[derive(Debug, Deserialize)]
struct RawProductTypeEdge {
    node: RawProductType,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProductType {
    id: String,
    name: String,
    has_variants: bool,
    is_shipping_required: bool,
    tax_rate: Option<TaxRateType>,
    product_attributes: Option<Vec<Option<RawAttribute>>>,
    variant_attributes: Option<Vec<Option<RawAttribute>>>,
    weight: Option<RawWeight>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAttribute {
    id: String,
    name: Option<String>,
    slug: Option<String>,
    visible_in_storefront: Option<bool>,
    filterable_in_dashboard: Option<bool>,
    filterable_in_storefront: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawWeight {
    unit: String,
    value: f64,
}

pub async fn product_type_list() -> anyhow::Result<Vec<ProductTypeDetails>> {
    let data: ProductTypeListData = execute_query(
        PRODUCT_TYPE_LIST_QUERY,
        "ProductTypeList",
        serde_json::json!({ "first": PRODUCT_TYPE_LIST_LIMIT }),
    )
    .await?;
    Ok(map_product_types(data))
}

fn map_product_types(data: ProductTypeListData) -> Vec<ProductTypeDetails> {
    data.product_types
        .edges
        .into_iter()
        .map(|edge| map_product_type(edge.node))
        .collect()
}

fn map_product_type(raw: RawProductType) -> ProductTypeDetails {
    ProductTypeDetails {
        id: raw.id,
        name: raw.name,
        has_variants: raw.has_variants,
        is_shipping_required: raw.is_shipping_required,
        tax_rate: raw.tax_rate,
        product_attributes: map_attributes(raw.product_attributes),
        variant_attributes: map_attributes(raw.variant_attributes),
        weight: raw.weight.map(|weight| Weight {
            unit: weight.unit,
            value: weight.value,
        }),
    }
}

fn map_attributes(raw: Option<Vec<Option<RawAttribute>>>) -> Vec<AttributeSummary> {
    raw.unwrap_or_default()
        .into_iter()
        .flatten()
        .map(|attribute| AttributeSummary {
            id: attribute.id,
            name: attribute.name,
            slug: attribute.slug,
            visible_in_storefront: attribute.visible_in_storefront,
            filterable_in_dashboard: attribute.filterable_in_dashboard,
            filterable_in_storefront: attribute.filterable_in_storefront,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_response_maps_to_details() {
        let data: ProductTypeListData = serde_json::from_str(
            r#"{
                "productTypes": {
                    "edges": [
                        {
                            "node": {
                                "id": "pt-1",
                                "name": "Mugs",
                                "hasVariants": false,
                                "isShippingRequired": true,
                                "taxRate": "STANDARD",
                                "productAttributes": [
                                    {
                                        "id": "attr-1",
                                        "name": "Color",
                                        "slug": "color",
                                        "visibleInStorefront": true,
                                        "filterableInDashboard": true,
                                        "filterableInStorefront": false
                                    },
                                    null
                                ],
                                "variantAttributes": null,
                                "weight": {"unit": "kg", "value": 0.3}
                            }
                        }
                    ]
                }
            }"#,
        )
        .unwrap();
        let product_types = map_product_types(data);
        assert_eq!(product_types.len(), 1);

        let mugs = &product_types[0];
        assert_eq!(mugs.id, "pt-1");
        assert!(!mugs.has_variants);
        assert!(mugs.is_shipping_required);
        assert_eq!(mugs.tax_rate, Some(TaxRateType::Standard));
        // null entries inside the attribute list are dropped
        assert_eq!(mugs.product_attributes.len(), 1);
        assert_eq!(mugs.product_attributes[0].slug.as_deref(), Some("color"));
        assert!(mugs.variant_attributes.is_empty());
        assert_eq!(mugs.weight.as_ref().unwrap().unit, "kg");

        let summary = mugs.summary();
        assert_eq!(summary.id, "pt-1");
        assert_eq!(summary.name, "Mugs");
    }

    #[test]
    fn nullable_scalars_stay_optional() {
        let data: ProductTypeListData = serde_json::from_str(
            r#"{
                "productTypes": {
                    "edges": [
                        {
                            "node": {
                                "id": "pt-2",
                                "name": "Digital",
                                "hasVariants": true,
                                "isShippingRequired": false,
                                "taxRate": null,
                                "productAttributes": [],
                                "variantAttributes": [],
                                "weight": null
                            }
                        }
                    ]
                }
            }"#,
        )
        .unwrap();
        let product_types = map_product_types(data);
        assert_eq!(product_types[0].tax_rate, None);
        assert_eq!(product_types[0].weight, None);
    }
}
