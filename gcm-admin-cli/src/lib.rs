//! List or delete custom metric descriptors in Google Cloud Monitoring.
//!
//! Without a metric name the tool pages through every descriptor in the
//! project and prints the custom and workload ones; with a metric name it
//! deletes that descriptor.

pub mod cli;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod filter;
pub mod format;
pub mod pager;
pub mod proto;

pub use client::{Connector, MetricDescriptorApi, MonitoringClient, MonitoringConnector};
pub use config::{ClientConfig, Config, Mode, OutputFormat};
pub use errors::{AdminError, Result};
