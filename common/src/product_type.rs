//! Product type models mirroring the shop API fragment.

use serde::{Deserialize, Serialize};

/// The `{id, name}` pair the filter form consumes for its choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTypeSummary {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTypeDetails {
    pub id: String,
    pub name: String,
    pub has_variants: bool,
    pub is_shipping_required: bool,
    pub tax_rate: Option<TaxRateType>,
    pub product_attributes: Vec<AttributeSummary>,
    pub variant_attributes: Vec<AttributeSummary>,
    pub weight: Option<Weight>,
}

impl ProductTypeDetails {
    pub fn summary(&self) -> ProductTypeSummary {
        ProductTypeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// Attributes come back with nullable metadata, kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSummary {
    pub id: String,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub visible_in_storefront: Option<bool>,
    pub filterable_in_dashboard: Option<bool>,
    pub filterable_in_storefront: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub unit: String,
    pub value: f64,
}

/// Tax rate identifiers as exposed by the shop API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxRateType {
    Accommodation,
    AdmissionsToCulturalEvents,
    AdmissionsToEntertainmentEvents,
    AdmissionsToSportingEvents,
    Advertising,
    AgriculturalSupplies,
    BabyFoodstuffs,
    Bikes,
    Books,
    ChildrensClothing,
    DomesticFuel,
    DomesticServices,
    EBooks,
    Foodstuffs,
    Hotels,
    Medical,
    Newspapers,
    PassengerTransport,
    Pharmaceuticals,
    PropertyRenovations,
    Restaurants,
    SocialHousing,
    Standard,
    Water,
    Wine,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_rate_uses_upstream_wire_names() {
        let rate: TaxRateType = serde_json::from_str(r#""STANDARD""#).unwrap();
        assert_eq!(rate, TaxRateType::Standard);
        let rate: TaxRateType = serde_json::from_str(r#""CHILDRENS_CLOTHING""#).unwrap();
        assert_eq!(rate, TaxRateType::ChildrensClothing);
        assert_eq!(
            serde_json::to_string(&TaxRateType::EBooks).unwrap(),
            r#""E_BOOKS""#
        );
    }
}
