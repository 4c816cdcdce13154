//! API Client
//!
//! Thin HTTP wrappers over the backend REST endpoints. One async fn per
//! operation, single attempt, no retry. Any non-success status or network
//! error collapses to a `String` the calling view surfaces as an alert.

use gloo_net::http::{Request, RequestBuilder};

use crate::models::{
    AuthResponse, CreateSweetRequest, LoginRequest, PurchaseRequest, RegisterRequest, Sweet,
};
use crate::session::Session;

/// Backend base URL, configured at compile time
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8080/api",
};

fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE_URL, path)
}

fn sweet_path(id: u64) -> String {
    format!("/sweets/{}", id)
}

fn purchase_path(id: u64) -> String {
    format!("/sweets/{}/purchase", id)
}

/// Attach the bearer token when the session is authenticated
fn with_auth(req: RequestBuilder, session: &Session) -> RequestBuilder {
    match session.token() {
        Some(token) => req.header("Authorization", &format!("Bearer {}", token)),
        None => req,
    }
}

/// List all sweets for the storefront catalog
pub async fn list_sweets(session: Session) -> Result<Vec<Sweet>, String> {
    let response = with_auth(Request::get(&endpoint("/sweets/all")), &session)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }
    response
        .json::<Vec<Sweet>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// List sweets for the admin panel
pub async fn list_sweets_admin(session: Session) -> Result<Vec<Sweet>, String> {
    let response = with_auth(Request::get(&endpoint("/sweets")), &session)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }
    response
        .json::<Vec<Sweet>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a sweet (admin). The created entity in the response is unused.
pub async fn create_sweet(session: Session, request: &CreateSweetRequest) -> Result<(), String> {
    let response = with_auth(Request::post(&endpoint("/sweets")), &session)
        .json(request)
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP {}: {}", response.status(), response.status_text()))
    }
}

/// Delete a sweet by id (admin)
pub async fn delete_sweet(session: Session, id: u64) -> Result<(), String> {
    let response = with_auth(Request::delete(&endpoint(&sweet_path(id))), &session)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP {}: {}", response.status(), response.status_text()))
    }
}

/// Purchase a quantity of one sweet
pub async fn purchase_sweet(session: Session, id: u64, quantity: u32) -> Result<(), String> {
    let response = with_auth(Request::post(&endpoint(&purchase_path(id))), &session)
        .json(&PurchaseRequest { quantity })
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP {}: {}", response.status(), response.status_text()))
    }
}

/// Exchange credentials for a session token
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, String> {
    let response = Request::post(&endpoint("/auth/login"))
        .json(request)
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }
    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Register a new account. Does not log the user in.
pub async fn register(request: &RegisterRequest) -> Result<(), String> {
    let response = Request::post(&endpoint("/auth/register"))
        .json(request)
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP {}: {}", response.status(), response.status_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_prefixes_base_url() {
        assert_eq!(endpoint("/sweets/all"), format!("{}/sweets/all", API_BASE_URL));
        assert_eq!(endpoint("/auth/login"), format!("{}/auth/login", API_BASE_URL));
    }

    #[test]
    fn sweet_paths_embed_the_id() {
        assert_eq!(sweet_path(7), "/sweets/7");
        assert_eq!(purchase_path(42), "/sweets/42/purchase");
    }
}
