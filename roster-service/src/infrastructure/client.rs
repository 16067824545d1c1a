use std::time::Duration;

use async_trait::async_trait;
use opentelemetry::global;
use opentelemetry::propagation::Injector;
use reqwest::{Client, RequestBuilder, Response, header};
use serde::de::DeserializeOwned;
use shared::types::{NewStaff, Staff};
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::{
    domain::client::{Ack, StaffClient},
    error::GatewayError,
};

/// HTTP client for the `staffs` collection, with OpenTelemetry trace propagation.
///
/// No retries: one call is one request.
pub struct HttpStaffClient {
    client: Client,
    staffs_url: String,
}

impl HttpStaffClient {
    /// `base_url` is the API root, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.trim_end_matches('/');
        Ok(Self {
            client,
            staffs_url: format!("{base_url}/staffs"),
        })
    }

    pub fn staffs_url(&self) -> &str {
        &self.staffs_url
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        let mut headers = header::HeaderMap::new();
        let cx = tracing::Span::current().context();
        global::get_text_map_propagator(|propagator| {
            propagator.inject_context(&cx, &mut HeaderMapInjector(&mut headers));
        });

        let res = request.headers(headers).send().await?;
        tracing::debug!(status = %res.status(), url = %res.url(), "Staff backend responded");

        if !res.status().is_success() {
            return Err(GatewayError::Status {
                url: res.url().to_string(),
                status: res.status(),
            });
        }
        Ok(res)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let res = self.send(request).await?;
        let url = res.url().to_string();
        res.json::<T>().await.map_err(|e| GatewayError::Decode {
            url,
            message: e.to_string(),
        })
    }

    async fn send_ack(&self, request: RequestBuilder) -> Result<Ack, GatewayError> {
        let res = self.send(request).await?;
        Ok(Ack {
            status: res.status().as_u16(),
        })
    }
}

/// Adapter to inject OpenTelemetry trace context into HTTP request headers.
struct HeaderMapInjector<'a>(&'a mut header::HeaderMap);

impl Injector for HeaderMapInjector<'_> {
    fn set(&mut self, key: &str, value: String) {
        if let Ok(name) = header::HeaderName::from_bytes(key.as_bytes())
            && let Ok(val) = header::HeaderValue::from_str(&value)
        {
            self.0.insert(name, val);
        }
    }
}

#[async_trait]
impl StaffClient for HttpStaffClient {
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Staff>, GatewayError> {
        self.send_json(self.client.get(&self.staffs_url)).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_query_id(&self, id: i64) -> Result<Vec<Staff>, GatewayError> {
        let request = self.client.get(&self.staffs_url).query(&[("id", id)]);
        self.send_json(request).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Staff, GatewayError> {
        let staffs_url = &self.staffs_url;
        self.send_json(self.client.get(format!("{staffs_url}/{id}")))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn search(&self, term: &str) -> Result<Vec<Staff>, GatewayError> {
        let request = self.client.get(&self.staffs_url).query(&[("name", term)]);
        self.send_json(request).await
    }

    #[tracing::instrument(skip(self))]
    async fn create(&self, staff: &NewStaff) -> Result<Staff, GatewayError> {
        self.send_json(self.client.post(&self.staffs_url).json(staff))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<Ack, GatewayError> {
        let staffs_url = &self.staffs_url;
        let request = self
            .client
            .delete(format!("{staffs_url}/{id}"))
            .header(header::CONTENT_TYPE, "application/json");
        self.send_ack(request).await
    }

    #[tracing::instrument(skip(self))]
    async fn update(&self, staff: &Staff) -> Result<Ack, GatewayError> {
        self.send_ack(self.client.put(&self.staffs_url).json(staff))
            .await
    }
}
