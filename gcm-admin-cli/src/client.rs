use std::time::Duration;

use async_trait::async_trait;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::{Certificate, Channel, ClientTlsConfig, Endpoint, Uri};
use tonic::Request;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::errors::{AdminError, Result};
use crate::proto::{
    DeleteMetricDescriptorRequest, Empty, ListMetricDescriptorsRequest,
    ListMetricDescriptorsResponse, DELETE_METRIC_DESCRIPTOR_PATH, LIST_METRIC_DESCRIPTORS_PATH,
};

const MONITORING_SCOPE: &str = "https://www.googleapis.com/auth/monitoring";

/// The two metric service calls this tool issues.
#[async_trait]
pub trait MetricDescriptorApi: Send {
    /// Fetches one page of descriptors.
    async fn list_metric_descriptors(
        &mut self,
        request: ListMetricDescriptorsRequest,
    ) -> Result<ListMetricDescriptorsResponse>;

    async fn delete_metric_descriptor(&mut self, request: DeleteMetricDescriptorRequest)
        -> Result<()>;
}

/// Opens a session against the metric service. The returned value owns the
/// connection and releases it when dropped.
#[async_trait]
pub trait Connector: Send + Sync {
    type Api: MetricDescriptorApi;

    async fn connect(&self) -> Result<Self::Api>;
}

/// gRPC client for `google.monitoring.v3.MetricService`
pub struct MonitoringClient {
    inner: Grpc<Channel>,
    token: Option<MetadataValue<Ascii>>,
    timeout: Duration,
}

impl MonitoringClient {
    /// Connect to the monitoring backend using the provided configuration
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        let endpoint_url = config.endpoint_url();
        let uri: Uri = endpoint_url
            .parse()
            .map_err(|source| AdminError::InvalidEndpoint {
                endpoint: endpoint_url.clone(),
                source,
            })?;

        let mut endpoint = Endpoint::from(uri.clone())
            .tcp_nodelay(true)
            .connect_timeout(config.request_timeout());
        let mut token = None;

        if !config.is_plaintext() {
            let domain = config
                .domain
                .clone()
                .or_else(|| uri.host().map(str::to_string))
                .unwrap_or_else(|| "monitoring.googleapis.com".to_string());

            let mut tls = ClientTlsConfig::new()
                .with_native_roots()
                .domain_name(domain);

            // Optional extra root CA
            if let Some(ca_path) = &config.ca_path {
                let ca_pem = tokio::fs::read(ca_path)
                    .await
                    .map_err(AdminError::Certificate)?;
                tls = tls.ca_certificate(Certificate::from_pem(ca_pem));
            }

            endpoint = endpoint.tls_config(tls)?;
            token = Some(bearer_token().await?);
        } else {
            debug!(endpoint = %endpoint_url, "plaintext endpoint, skipping credentials");
        }

        let channel = endpoint.connect().await?;
        info!(endpoint = %endpoint_url, "connected to monitoring service");

        Ok(Self {
            inner: Grpc::new(channel),
            token,
            timeout: config.request_timeout(),
        })
    }

    /// Execute a unary call with the bearer token attached, bounded by the request timeout
    async fn unary<Req, Resp>(&mut self, message: Req, path: &'static str) -> Result<Resp>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut request = Request::new(message);
        if let Some(token) = &self.token {
            request
                .metadata_mut()
                .insert("authorization", token.clone());
        }

        let timeout = self.timeout;
        let inner = &mut self.inner;
        let call = async move {
            inner.ready().await?;
            let codec: ProstCodec<Req, Resp> = ProstCodec::default();
            let response = inner
                .unary(request, PathAndQuery::from_static(path), codec)
                .await?;
            Ok::<Resp, AdminError>(response.into_inner())
        };

        match tokio::time::timeout(timeout, call).await {
            Err(_) => Err(AdminError::Timeout(timeout)),
            Ok(result) => result,
        }
    }
}

#[async_trait]
impl MetricDescriptorApi for MonitoringClient {
    async fn list_metric_descriptors(
        &mut self,
        request: ListMetricDescriptorsRequest,
    ) -> Result<ListMetricDescriptorsResponse> {
        debug!(name = %request.name, page_token = %request.page_token, "ListMetricDescriptors");
        self.unary(request, LIST_METRIC_DESCRIPTORS_PATH).await
    }

    async fn delete_metric_descriptor(
        &mut self,
        request: DeleteMetricDescriptorRequest,
    ) -> Result<()> {
        debug!(name = %request.name, "DeleteMetricDescriptor");
        let _: Empty = self.unary(request, DELETE_METRIC_DESCRIPTOR_PATH).await?;
        Ok(())
    }
}

/// Connects a [`MonitoringClient`] from a fixed [`ClientConfig`].
#[derive(Clone, Debug)]
pub struct MonitoringConnector {
    config: ClientConfig,
}

impl MonitoringConnector {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Connector for MonitoringConnector {
    type Api = MonitoringClient;

    async fn connect(&self) -> Result<MonitoringClient> {
        MonitoringClient::connect(&self.config).await
    }
}

// Resolves credentials through the platform chain: GOOGLE_APPLICATION_CREDENTIALS,
// gcloud user credentials, then the metadata server.
async fn bearer_token() -> Result<MetadataValue<Ascii>> {
    let provider = gcp_auth::provider().await?;
    let token = provider.token(&[MONITORING_SCOPE]).await?;
    MetadataValue::try_from(format!("Bearer {}", token.as_str()))
        .map_err(|_| AdminError::InvalidToken)
}
