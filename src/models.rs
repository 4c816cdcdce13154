//! Frontend Models
//!
//! Data structures matching the backend API payloads.

use serde::{Deserialize, Serialize};

/// Sweet data structure (matches backend response)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweet {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response: the backend always wraps the token
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "tokenType", default)]
    pub token_type: Option<String>,
}

/// Registration request body
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Admin create-sweet request body
#[derive(Debug, Clone, Serialize)]
pub struct CreateSweetRequest {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

/// Purchase request body
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseRequest {
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweet_list_deserializes_in_order() {
        let json = r#"[
            {"id": 1, "name": "Ladoo", "category": "indian", "price": 12.5, "quantity": 4},
            {"id": 7, "name": "Fudge", "category": "western", "price": 3.0, "quantity": 0, "imageUrl": "f.png"}
        ]"#;
        let sweets: Vec<Sweet> = serde_json::from_str(json).unwrap();
        assert_eq!(sweets.len(), 2);
        assert_eq!(sweets[0].id, 1);
        assert_eq!(sweets[1].id, 7);
        assert_eq!(sweets[1].quantity, 0);
        assert_eq!(sweets[1].image_url.as_deref(), Some("f.png"));
        assert_eq!(sweets[0].image_url, None);
    }

    #[test]
    fn auth_response_extracts_wrapped_token() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"token": "abc123", "tokenType": "Bearer"}"#).unwrap();
        assert_eq!(resp.token, "abc123");
        assert_eq!(resp.token_type.as_deref(), Some("Bearer"));
    }

    #[test]
    fn create_request_uses_backend_field_names() {
        let req = CreateSweetRequest {
            name: "Barfi".into(),
            category: "indian".into(),
            price: 20.0,
            quantity: 10,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["name"], "Barfi");
        assert_eq!(json["category"], "indian");
        assert_eq!(json["price"], 20.0);
        assert_eq!(json["quantity"], 10);
    }

    #[test]
    fn purchase_request_carries_quantity_only() {
        let json = serde_json::to_value(&PurchaseRequest { quantity: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({"quantity": 3}));
    }
}
