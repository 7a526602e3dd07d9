//! Minimal prost-derived message types for the Cloud Monitoring v3 metric service.
//!
//! Field tags match the published protobuf schemas:
//! <https://github.com/googleapis/googleapis/blob/master/google/api/metric.proto>
//! <https://github.com/googleapis/googleapis/blob/master/google/monitoring/v3/metric_service.proto>
//!
//! Only the fields this tool reads or sends are declared; everything else on
//! the wire is skipped when decoding.

use std::borrow::Cow;

/// `google.api.MetricDescriptor`
#[derive(Clone, PartialEq, prost::Message)]
pub struct MetricDescriptor {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(enumeration = "MetricKind", tag = "3")]
    pub metric_kind: i32,
    #[prost(enumeration = "ValueType", tag = "4")]
    pub value_type: i32,
    #[prost(string, tag = "5")]
    pub unit: String,
    #[prost(string, tag = "6")]
    pub description: String,
    #[prost(string, tag = "7")]
    pub display_name: String,
    #[prost(string, tag = "8")]
    pub r#type: String,
}

impl MetricDescriptor {
    /// Protocol name of the metric kind, or the raw number if it is not a known value.
    pub fn kind_name(&self) -> Cow<'static, str> {
        match MetricKind::try_from(self.metric_kind) {
            Ok(kind) => Cow::Borrowed(kind.as_str_name()),
            Err(_) => Cow::Owned(self.metric_kind.to_string()),
        }
    }

    /// Protocol name of the value type, or the raw number if it is not a known value.
    pub fn value_type_name(&self) -> Cow<'static, str> {
        match ValueType::try_from(self.value_type) {
            Ok(value_type) => Cow::Borrowed(value_type.as_str_name()),
            Err(_) => Cow::Owned(self.value_type.to_string()),
        }
    }
}

/// `google.api.MetricDescriptor.MetricKind`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum MetricKind {
    Unspecified = 0,
    Gauge = 1,
    Delta = 2,
    Cumulative = 3,
}

impl MetricKind {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            MetricKind::Unspecified => "METRIC_KIND_UNSPECIFIED",
            MetricKind::Gauge => "GAUGE",
            MetricKind::Delta => "DELTA",
            MetricKind::Cumulative => "CUMULATIVE",
        }
    }
}

/// `google.api.MetricDescriptor.ValueType`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum ValueType {
    Unspecified = 0,
    Bool = 1,
    Int64 = 2,
    Double = 3,
    String = 4,
    Distribution = 5,
    Money = 6,
}

impl ValueType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ValueType::Unspecified => "VALUE_TYPE_UNSPECIFIED",
            ValueType::Bool => "BOOL",
            ValueType::Int64 => "INT64",
            ValueType::Double => "DOUBLE",
            ValueType::String => "STRING",
            ValueType::Distribution => "DISTRIBUTION",
            ValueType::Money => "MONEY",
        }
    }
}

/// `google.monitoring.v3.ListMetricDescriptorsRequest`
#[derive(Clone, PartialEq, prost::Message)]
pub struct ListMetricDescriptorsRequest {
    #[prost(string, tag = "2")]
    pub filter: String,
    #[prost(int32, tag = "3")]
    pub page_size: i32,
    #[prost(string, tag = "4")]
    pub page_token: String,
    #[prost(string, tag = "5")]
    pub name: String,
}

/// `google.monitoring.v3.ListMetricDescriptorsResponse`
#[derive(Clone, PartialEq, prost::Message)]
pub struct ListMetricDescriptorsResponse {
    #[prost(message, repeated, tag = "1")]
    pub metric_descriptors: Vec<MetricDescriptor>,
    #[prost(string, tag = "2")]
    pub next_page_token: String,
}

/// `google.monitoring.v3.DeleteMetricDescriptorRequest`
#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteMetricDescriptorRequest {
    #[prost(string, tag = "3")]
    pub name: String,
}

/// `google.protobuf.Empty`
#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct Empty {}

pub const LIST_METRIC_DESCRIPTORS_PATH: &str =
    "/google.monitoring.v3.MetricService/ListMetricDescriptors";
pub const DELETE_METRIC_DESCRIPTOR_PATH: &str =
    "/google.monitoring.v3.MetricService/DeleteMetricDescriptor";
