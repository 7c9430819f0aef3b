//! # Payload Types
//!
//! Wire shapes of the backend responses and their conversion into core types.
//!
//! ```text
//! GET /products/1  →  {"id":1,"title":"Tênis ...","price":179.9,"image":"https://..."}
//!                          │         │                │             │
//!                          ▼         ▼                ▼             ▼
//! Product          →  { id,      name,        price: 17990,   image_url }
//!
//! GET /stock/1     →  {"id":1,"amount":3}  →  Stock { id, amount }
//! ```

use rocketshoes_core::validation::{validate_price, validate_product_name};
use rocketshoes_core::{Money, Product, ProductId, Stock};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

/// Product record as served by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    pub id: ProductId,
    #[serde(alias = "title")]
    pub name: String,
    /// Decimal price in major units.
    pub price: f64,
    #[serde(rename = "imageUrl", alias = "image")]
    pub image_url: String,
}

impl TryFrom<ProductDto> for Product {
    type Error = ApiError;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        validate_product_name(&dto.name)?;

        let price = Money::from_decimal(dto.price)
            .ok_or_else(|| ApiError::decode("product", format!("invalid price {}", dto.price)))?;
        validate_price(price)?;

        Ok(Product {
            id: dto.id,
            name: dto.name,
            price,
            image_url: dto.image_url,
        })
    }
}

/// Stock record as served by the backend.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StockDto {
    pub id: ProductId,
    pub amount: i64,
}

impl TryFrom<StockDto> for Stock {
    type Error = ApiError;

    fn try_from(dto: StockDto) -> Result<Self, Self::Error> {
        if dto.amount < 0 {
            return Err(ApiError::decode(
                "stock",
                format!("negative amount {} for product {}", dto.amount, dto.id),
            ));
        }

        Ok(Stock::new(dto.id, dto.amount))
    }
}

/// Rejects a record that answers for a different product than requested.
pub fn check_id(
    resource: &'static str,
    requested: ProductId,
    returned: ProductId,
) -> ApiResult<()> {
    if requested != returned {
        return Err(ApiError::decode(
            resource,
            format!("requested {} but received {}", requested, returned),
        ));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_product(json: &str) -> Result<Product, ApiError> {
        let dto: ProductDto = serde_json::from_str(json).unwrap();
        Product::try_from(dto)
    }

    #[test]
    fn test_product_with_canonical_fields() {
        let product = decode_product(
            r#"{"id":1,"name":"Tênis de Caminhada","price":179.9,"imageUrl":"https://x/1.jpg"}"#,
        )
        .unwrap();

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Tênis de Caminhada");
        assert_eq!(product.price.cents(), 17990);
        assert_eq!(product.image_url, "https://x/1.jpg");
    }

    #[test]
    fn test_product_with_title_and_image_aliases() {
        let product = decode_product(
            r#"{"id":2,"title":"Tênis VR Caminhada","price":139.9,"image":"https://x/2.jpg"}"#,
        )
        .unwrap();

        assert_eq!(product.name, "Tênis VR Caminhada");
        assert_eq!(product.price.cents(), 13990);
        assert_eq!(product.image_url, "https://x/2.jpg");
    }

    #[test]
    fn test_integer_price_is_accepted() {
        let product =
            decode_product(r#"{"id":3,"title":"Tênis","price":200,"image":"i.jpg"}"#).unwrap();
        assert_eq!(product.price.cents(), 20000);
    }

    #[test]
    fn test_invalid_products_are_rejected() {
        let negative = decode_product(r#"{"id":1,"title":"Tênis","price":-1,"image":"i.jpg"}"#);
        assert!(matches!(negative, Err(ApiError::Decode { .. })));

        let blank = decode_product(r#"{"id":1,"title":"  ","price":10,"image":"i.jpg"}"#);
        assert!(matches!(blank, Err(ApiError::Decode { .. })));
    }

    #[test]
    fn test_stock() {
        let dto: StockDto = serde_json::from_str(r#"{"id":1,"amount":3}"#).unwrap();
        let stock = Stock::try_from(dto).unwrap();
        assert_eq!(stock.amount, 3);

        let dto: StockDto = serde_json::from_str(r#"{"id":1,"amount":-2}"#).unwrap();
        assert!(Stock::try_from(dto).is_err());
    }

    #[test]
    fn test_check_id() {
        assert!(check_id("product", ProductId::new(5), ProductId::new(5)).is_ok());

        let err = check_id("product", ProductId::new(5), ProductId::new(1)).unwrap_err();
        assert!(matches!(err, ApiError::Decode { resource: "product", .. }));
        assert_eq!(
            err.to_string(),
            "Failed to decode product: requested 5 but received 1"
        );
    }
}
