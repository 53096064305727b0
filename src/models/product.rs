use serde::{Deserialize, Serialize};

/// One row of the `products` table. `product_id` is caller-supplied;
/// `product_category_id` is assumed to reference a categories table that
/// this service never validates against.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub product_id: i32,
    pub product_category_id: i32,
    pub product_name: String,
    pub product_description: String,
    pub product_price: f64,
    pub product_image: String,
}

// ── Request payload ───────────────────────────────────────────────────────────

/// Element of the `POST /products` array. Absent optional fields land as
/// empty strings so the INSERT can bind all six columns unconditionally.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub product_id: i32,
    pub product_category_id: i32,
    pub product_name: String,
    #[serde(default)]
    pub product_description: String,
    pub product_price: f64,
    #[serde(default)]
    pub product_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Deserialization ────────────────────────────────────────────────────────

    #[test]
    fn full_payload_deserializes() {
        let payload: CreateProduct = serde_json::from_str(
            r#"{
                "product_id": 7,
                "product_category_id": 2,
                "product_name": "Desk Lamp",
                "product_description": "LED, warm white",
                "product_price": 24.99,
                "product_image": "https://cdn.example.com/lamp.png"
            }"#,
        )
        .expect("full payload must deserialize");

        assert_eq!(payload.product_id, 7);
        assert_eq!(payload.product_name, "Desk Lamp");
        assert_eq!(payload.product_image, "https://cdn.example.com/lamp.png");
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let payload: CreateProduct = serde_json::from_str(
            r#"{
                "product_id": 7,
                "product_category_id": 2,
                "product_name": "Desk Lamp",
                "product_price": 24.99
            }"#,
        )
        .expect("payload without optionals must deserialize");

        assert_eq!(payload.product_description, "");
        assert_eq!(payload.product_image, "");
    }

    #[test]
    fn missing_required_field_is_rejected() {
        // No product_price
        let result = serde_json::from_str::<CreateProduct>(
            r#"{
                "product_id": 7,
                "product_category_id": 2,
                "product_name": "Desk Lamp"
            }"#,
        );
        assert!(result.is_err(), "payload without product_price must fail");
    }

    #[test]
    fn array_element_failure_rejects_whole_batch() {
        // Second element is missing product_name: the array as a whole must
        // fail to deserialize, so no element can slip through validation.
        let result = serde_json::from_str::<Vec<CreateProduct>>(
            r#"[
                {"product_id": 1, "product_category_id": 1, "product_name": "A", "product_price": 1.0},
                {"product_id": 2, "product_category_id": 1, "product_price": 2.0}
            ]"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn non_array_body_is_rejected_as_batch() {
        let result = serde_json::from_str::<Vec<CreateProduct>>(
            r#"{"product_id": 1, "product_category_id": 1, "product_name": "A", "product_price": 1.0}"#,
        );
        assert!(result.is_err(), "a bare object is not a product batch");
    }
}
