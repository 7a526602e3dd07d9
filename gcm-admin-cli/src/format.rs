use std::io::{self, Write};

use serde::Serialize;

use crate::config::OutputFormat;
use crate::proto::MetricDescriptor;

/// Renders a descriptor as its type name alone (`short`) or as a labelled block.
pub fn format_descriptor(descriptor: &MetricDescriptor, short: bool) -> String {
    if short {
        return format!("{}\n", descriptor.r#type);
    }

    format!(
        "Type: {}\n    Kind: {}\n    Value: {}\n    Unit: {}\n    Description: {}\n",
        descriptor.r#type,
        descriptor.kind_name(),
        descriptor.value_type_name(),
        descriptor.unit.trim(),
        descriptor.description.trim(),
    )
}

#[derive(Debug, Serialize)]
struct DescriptorJson<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    metric_type: &'a str,
    metric_kind: String,
    value_type: String,
    unit: &'a str,
    description: &'a str,
    display_name: &'a str,
}

/// One JSON object per descriptor, terminated by a newline.
pub fn format_json(descriptor: &MetricDescriptor) -> serde_json::Result<String> {
    let view = DescriptorJson {
        name: &descriptor.name,
        metric_type: &descriptor.r#type,
        metric_kind: descriptor.kind_name().into_owned(),
        value_type: descriptor.value_type_name().into_owned(),
        unit: descriptor.unit.trim(),
        description: descriptor.description.trim(),
        display_name: &descriptor.display_name,
    };
    let mut line = serde_json::to_string(&view)?;
    line.push('\n');
    Ok(line)
}

/// Writes a single descriptor and flushes so output appears as it is produced.
pub fn write_descriptor<W: Write>(
    out: &mut W,
    descriptor: &MetricDescriptor,
    output: OutputFormat,
    short: bool,
) -> io::Result<()> {
    let rendered = match output {
        OutputFormat::Text => format_descriptor(descriptor, short),
        OutputFormat::Json => format_json(descriptor)?,
    };
    out.write_all(rendered.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::{MetricKind, ValueType};

    fn descriptor() -> MetricDescriptor {
        MetricDescriptor {
            name: "projects/demo/metricDescriptors/custom.googleapis.com/queue_depth".into(),
            r#type: "custom.googleapis.com/queue_depth".into(),
            metric_kind: MetricKind::Gauge as i32,
            value_type: ValueType::Int64 as i32,
            unit: "  1 ".into(),
            description: "\n Messages waiting in the queue.\n".into(),
            display_name: "Queue depth".into(),
        }
    }

    #[test]
    fn short_is_type_on_one_line() {
        let out = format_descriptor(&descriptor(), true);
        assert_eq!(out, "custom.googleapis.com/queue_depth\n");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn long_lists_five_fields_in_order() {
        let out = format_descriptor(&descriptor(), false);
        assert_eq!(
            out,
            "Type: custom.googleapis.com/queue_depth\n    Kind: GAUGE\n    Value: INT64\n    Unit: 1\n    Description: Messages waiting in the queue.\n"
        );

        let labels: Vec<&str> = out
            .lines()
            .map(|line| line.trim_start().split(':').next().unwrap())
            .collect();
        assert_eq!(labels, ["Type", "Kind", "Value", "Unit", "Description"]);
    }

    #[test]
    fn empty_unit_and_description_render_empty() {
        let d = MetricDescriptor {
            r#type: "workload.googleapis.com/requests".into(),
            metric_kind: MetricKind::Cumulative as i32,
            value_type: ValueType::Double as i32,
            ..Default::default()
        };
        let out = format_descriptor(&d, false);
        assert!(out.contains("    Unit: \n"));
        assert!(out.ends_with("    Description: \n"));
    }

    #[test]
    fn formatting_is_repeatable() {
        let d = descriptor();
        assert_eq!(format_descriptor(&d, true), format_descriptor(&d, true));
        assert_eq!(format_descriptor(&d, false), format_descriptor(&d, false));
    }

    #[test]
    fn json_line_uses_protocol_names() {
        let line = format_json(&descriptor()).unwrap();
        assert!(line.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["type"], "custom.googleapis.com/queue_depth");
        assert_eq!(value["metric_kind"], "GAUGE");
        assert_eq!(value["value_type"], "INT64");
        assert_eq!(value["unit"], "1");
        assert_eq!(value["description"], "Messages waiting in the queue.");
        assert_eq!(value["display_name"], "Queue depth");
    }

    #[test]
    fn write_descriptor_honours_output_format() {
        let mut text = Vec::new();
        write_descriptor(&mut text, &descriptor(), OutputFormat::Text, true).unwrap();
        assert_eq!(text, b"custom.googleapis.com/queue_depth\n");

        let mut json = Vec::new();
        write_descriptor(&mut json, &descriptor(), OutputFormat::Json, true).unwrap();
        assert!(String::from_utf8(json).unwrap().starts_with('{'));
    }
}
