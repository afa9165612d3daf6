//! Validation of normalized request bodies into typed inputs.
//!
//! Bodies arrive as a key-value map (see `extractors::Payload`): JSON values
//! as-is, form fields as strings. Everything here is written once against that shape.

use crate::error::AppError;
use serde_json::Value;
use std::collections::HashMap;

pub const MISSING_DATA: &str = "Missing data for name, price, or bakery_id";
pub const PRICE_NOT_A_NUMBER: &str = "Price must be a number";
pub const BAKERY_ID_NOT_AN_INTEGER: &str = "Bakery id must be an integer";
pub const NAME_NOT_A_STRING: &str = "Name must be a string";

/// A baked good that passed validation and may be persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
}

impl NewBakedGood {
    /// Checks run in a fixed order so a malformed body always gets the same error:
    /// presence of all three fields first, then the price conversion, then the bakery id.
    pub fn from_payload(body: &HashMap<String, Value>) -> Result<Self, AppError> {
        let name = body.get("name").and_then(scalar_text).filter(|s| !s.is_empty());
        let price = body.get("price").filter(|v| !v.is_null());
        let bakery_id = body.get("bakery_id").filter(|v| !v.is_null());

        let (Some(name), Some(price), Some(bakery_id)) = (name, price, bakery_id) else {
            return Err(AppError::Validation(MISSING_DATA.into()));
        };
        let price = parse_price(price)
            .ok_or_else(|| AppError::Validation(PRICE_NOT_A_NUMBER.into()))?;
        let bakery_id = parse_id(bakery_id)
            .ok_or_else(|| AppError::Validation(BAKERY_ID_NOT_AN_INTEGER.into()))?;

        Ok(Self {
            name,
            price,
            bakery_id,
        })
    }
}

/// Fields of a bakery PATCH. Absent fields stay unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BakeryPatch {
    pub name: Option<String>,
}

impl BakeryPatch {
    pub fn from_payload(body: &HashMap<String, Value>) -> Result<Self, AppError> {
        let name = match body.get("name") {
            None => None,
            Some(v) => Some(
                scalar_text(v).ok_or_else(|| AppError::Validation(NAME_NOT_A_STRING.into()))?,
            ),
        };
        Ok(Self { name })
    }
}

/// Text of a string or number value; None for null, booleans, arrays and objects.
fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_price(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn parse_id(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: Value) -> HashMap<String, Value> {
        match v {
            Value::Object(m) => m.into_iter().collect(),
            _ => panic!("test body must be an object"),
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(m) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_string_price_and_id_from_forms() {
        let new = NewBakedGood::from_payload(&body(json!({
            "name": "Muffin", "price": " 3.50 ", "bakery_id": "2"
        })))
        .unwrap();
        assert_eq!(
            new,
            NewBakedGood {
                name: "Muffin".into(),
                price: 3.5,
                bakery_id: 2
            }
        );
    }

    #[test]
    fn accepts_numeric_json_values() {
        let new = NewBakedGood::from_payload(&body(json!({
            "name": "Muffin", "price": 4, "bakery_id": 999999
        })))
        .unwrap();
        assert_eq!(new.price, 4.0);
        assert_eq!(new.bakery_id, 999999);
    }

    #[test]
    fn missing_fields_are_reported_before_price_conversion() {
        for b in [
            json!({"price": "abc", "bakery_id": 1}),
            json!({"name": "", "price": "abc", "bakery_id": 1}),
            json!({"name": "Muffin", "bakery_id": 1}),
            json!({"name": "Muffin", "price": null, "bakery_id": 1}),
            json!({"name": "Muffin", "price": "abc"}),
        ] {
            let err = NewBakedGood::from_payload(&body(b)).unwrap_err();
            assert_eq!(message(err), MISSING_DATA);
        }
    }

    #[test]
    fn unparseable_price_is_rejected() {
        for price in [json!("abc"), json!(""), json!(true), json!("inf"), json!([1])] {
            let err = NewBakedGood::from_payload(&body(json!({
                "name": "Muffin", "price": price, "bakery_id": 1
            })))
            .unwrap_err();
            assert_eq!(message(err), PRICE_NOT_A_NUMBER);
        }
    }

    #[test]
    fn non_integer_bakery_id_is_rejected_after_price() {
        let err = NewBakedGood::from_payload(&body(json!({
            "name": "Muffin", "price": "1.25", "bakery_id": "first"
        })))
        .unwrap_err();
        assert_eq!(message(err), BAKERY_ID_NOT_AN_INTEGER);
    }

    #[test]
    fn patch_only_sets_present_fields() {
        assert_eq!(BakeryPatch::from_payload(&body(json!({}))).unwrap(), BakeryPatch::default());
        let patch = BakeryPatch::from_payload(&body(json!({"name": "X", "ignored": 1}))).unwrap();
        assert_eq!(patch.name.as_deref(), Some("X"));
    }

    #[test]
    fn patch_rejects_non_scalar_name() {
        let err = BakeryPatch::from_payload(&body(json!({"name": null}))).unwrap_err();
        assert_eq!(message(err), NAME_NOT_A_STRING);
    }
}
