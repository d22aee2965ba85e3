use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::scaler::Macros;

/// A packaged food as reported by the food-facts service, macros per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodProduct {
    pub barcode: String,
    pub name: String,
    pub per_100g: Macros,
}

#[async_trait]
pub trait FoodLookup: Send + Sync {
    /// `Ok(None)` when the service does not know the barcode.
    async fn lookup(&self, barcode: &str) -> anyhow::Result<Option<FoodProduct>>;
}

pub fn is_valid_barcode(code: &str) -> bool {
    lazy_static! {
        static ref BARCODE_RE: Regex = Regex::new(r"^\d{8,14}$").unwrap();
    }
    BARCODE_RE.is_match(code)
}

#[derive(Clone)]
pub struct OpenFoodFacts {
    client: reqwest::Client,
    base_url: String,
}

impl OpenFoodFacts {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("fittrack/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build food lookup http client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl FoodLookup for OpenFoodFacts {
    async fn lookup(&self, barcode: &str) -> anyhow::Result<Option<FoodProduct>> {
        let url = format!("{}/api/v0/product/{}.json", self.base_url, barcode);
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {}", url))?;

        if res.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body: Value = res
            .error_for_status()
            .context("food lookup status")?
            .json()
            .await
            .context("decode food lookup response")?;

        let product = product_from_response(barcode, &body);
        debug!(%barcode, found = product.is_some(), "food lookup");
        Ok(product)
    }
}

/// Maps a food-facts response onto a product. Missing nutrient fields count
/// as zero; a response without a `product` object means "not found".
pub fn product_from_response(barcode: &str, body: &Value) -> Option<FoodProduct> {
    let product = body.get("product").filter(|p| p.is_object())?;
    let nutriments = product.get("nutriments");
    let nutrient = |key: &str| nutriments.and_then(|n| n.get(key)).map(number).unwrap_or(0.0);

    let name = product
        .get("product_name")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    Some(FoodProduct {
        barcode: barcode.to_string(),
        name,
        per_100g: Macros {
            calories: nutrient("energy-kcal_100g"),
            protein: nutrient("proteins_100g"),
            carbs: nutrient("carbohydrates_100g"),
            fat: nutrient("fat_100g"),
        },
    })
}

// The service sends numbers, but older products carry numeric strings.
fn number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn barcode_validation() {
        assert!(is_valid_barcode("3017620422003"));
        assert!(is_valid_barcode("12345678"));
        assert!(!is_valid_barcode("1234567"));
        assert!(!is_valid_barcode("30176204220031234"));
        assert!(!is_valid_barcode("30176a0422003"));
        assert!(!is_valid_barcode(""));
    }

    #[test]
    fn maps_product_nutriments() {
        let body = json!({
            "status": 1,
            "product": {
                "product_name": " Hazelnut spread ",
                "nutriments": {
                    "energy-kcal_100g": 539,
                    "proteins_100g": 6.3,
                    "carbohydrates_100g": "57.5",
                    "fat_100g": 30.9
                }
            }
        });
        let product = product_from_response("3017620422003", &body).expect("product");
        assert_eq!(product.name, "Hazelnut spread");
        assert_eq!(
            product.per_100g,
            Macros {
                calories: 539.0,
                protein: 6.3,
                carbs: 57.5,
                fat: 30.9
            }
        );
    }

    #[test]
    fn missing_nutrients_default_to_zero() {
        let body = json!({ "product": { "product_name": "Water" } });
        let product = product_from_response("12345678", &body).expect("product");
        assert_eq!(product.per_100g, Macros::ZERO);
    }

    #[test]
    fn missing_product_is_not_found() {
        let body = json!({ "status": 0, "status_verbose": "product not found" });
        assert!(product_from_response("12345678", &body).is_none());
    }
}
