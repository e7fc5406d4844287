// Subscription collaborator client: edge-function calls for billing state

use super::{service_error, GatewayError, ServiceCredentials};

/// Client for the external subscription/billing service.
///
/// Every call carries the session's bearer credential plus the public API
/// key; the service verifies the subscription with the billing provider.
pub struct SubscriptionClient {
    http: reqwest::Client,
    credentials: Option<ServiceCredentials>,
}

impl SubscriptionClient {
    pub fn new(credentials: Option<ServiceCredentials>) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
        }
    }

    /// Invoke a collaborator edge function and return its JSON body.
    async fn invoke(
        &self,
        function: &str,
        access_token: &str,
    ) -> Result<serde_json::Value, GatewayError> {
        let creds = self
            .credentials
            .as_ref()
            .ok_or(GatewayError::NotConfigured)?;
        let url = format!("{}/functions/v1/{}", creds.base_url, function);

        let response = self
            .http
            .post(&url)
            .header("apikey", &creds.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(GatewayError::network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(service_error(status, &body));
        }

        response.json().await.map_err(GatewayError::network)
    }

    /// Whether the current user has an active subscription.
    pub async fn check(&self, access_token: &str) -> Result<bool, GatewayError> {
        let data = self.invoke("check-subscription", access_token).await?;
        Ok(data["subscribed"].as_bool().unwrap_or(false))
    }

    /// Obtain the external checkout URL for starting a subscription.
    pub async fn checkout_url(&self, access_token: &str) -> Result<String, GatewayError> {
        let data = self.invoke("create-checkout-session", access_token).await?;
        match data["url"].as_str() {
            Some(url) => Ok(url.to_string()),
            None => Err(GatewayError::Service {
                message: "No se recibió URL de pago".to_string(),
                code: None,
            }),
        }
    }

    /// Obtain the external billing-management portal URL.
    pub async fn portal_url(&self, access_token: &str) -> Result<String, GatewayError> {
        let data = self.invoke("create-portal-session", access_token).await?;
        match data["url"].as_str() {
            Some(url) => Ok(url.to_string()),
            None => Err(GatewayError::Service {
                message: "No se recibió URL del portal".to_string(),
                code: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_client_fails_fast() {
        let client = SubscriptionClient::new(None);
        let err = client.check("token").await.unwrap_err();
        assert!(matches!(err, GatewayError::NotConfigured));
    }
}
