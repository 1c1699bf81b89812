//! Subscription usage endpoint.

use crate::client::LensClient;
use crate::error::Result;
use serde_json::Value;

impl LensClient {
    /// Check the remaining API request allowance for the current subscription.
    pub fn check_api_limit(&self) -> Result<Value> {
        let text = self.get("/subscriptions/scholarly_api/usage")?;
        Ok(serde_json::from_str(&text)?)
    }
}
