//! Single-record lookup by Lens ID.

use crate::client::LensClient;
use crate::error::{LensError, Result};
use serde_json::Value;

impl LensClient {
    /// Fetch one scholarly record by its Lens ID (e.g. `100-004-910-081-14X`).
    pub fn lensid_request(&self, lens_id: &str) -> Result<Value> {
        if lens_id.trim().is_empty() {
            return Err(LensError::Validation("Lens ID must not be empty".to_string()));
        }
        let text = self.get(&format!("/scholarly/{lens_id}"))?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lensid_request() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/scholarly/100-004-910-081-14X")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"lens_id": "100-004-910-081-14X", "title": "On a heuristic point of view"}"#)
            .create();
        let client = LensClient::new("test-key")
            .unwrap()
            .with_base_url(server.url())
            .unwrap();

        let record = client.lensid_request("100-004-910-081-14X").unwrap();
        assert_eq!(record["lens_id"], json!("100-004-910-081-14X"));
        mock.assert();
    }

    #[test]
    fn test_empty_lens_id_rejected() {
        let client = LensClient::new("test-key").unwrap();
        let err = client.lensid_request("  ").unwrap_err();
        assert!(matches!(err, LensError::Validation(_)));
    }
}
