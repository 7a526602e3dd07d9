use std::time::Duration;

use thiserror::Error;
use tonic::codegen::http::uri;

pub type Result<T> = std::result::Result<T, AdminError>;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("invalid endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: uri::InvalidUri,
    },

    #[error("unable to obtain credentials: {0}")]
    Credentials(#[from] gcp_auth::Error),

    #[error("invalid access token")]
    InvalidToken,

    #[error("unable to load the certificate: {0}")]
    Certificate(std::io::Error),

    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("rpc error: code = {:?} desc = {}", .0.code(), .0.message())]
    RemoteCall(tonic::Status),

    #[error("request timeout after {0:?}")]
    Timeout(Duration),

    #[error("unable to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AdminError {
    /// True when the backend session could not be established at all.
    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            AdminError::InvalidEndpoint { .. }
                | AdminError::Credentials(_)
                | AdminError::InvalidToken
                | AdminError::Certificate(_)
                | AdminError::Transport(_)
        )
    }

    pub fn extract_status(&self) -> Option<&tonic::Status> {
        match self {
            AdminError::RemoteCall(status) => Some(status),
            _ => None,
        }
    }
}

impl From<tonic::Status> for AdminError {
    fn from(status: tonic::Status) -> Self {
        AdminError::RemoteCall(status)
    }
}
