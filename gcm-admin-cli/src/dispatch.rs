use std::io::Write;

use tracing::{info, warn};

use crate::client::{Connector, MetricDescriptorApi};
use crate::config::{Config, Mode};
use crate::errors::Result;
use crate::filter::is_custom_metric;
use crate::format::write_descriptor;
use crate::pager::DescriptorPager;
use crate::proto::DeleteMetricDescriptorRequest;

/// Runs the invocation described by `config`, writing results and any failure
/// message to `out`. The failure is also returned to the caller.
pub async fn run<C, W>(config: &Config, connector: &C, out: &mut W) -> Result<()>
where
    C: Connector,
    W: Write,
{
    if config.project.is_empty() {
        warn!("no project given; the backend will reject the request");
    }

    match config.mode() {
        Mode::List => {
            let outcome = list_metrics(config, connector, out).await;
            if let Err(err) = &outcome {
                writeln!(out, "error listing metric descriptors: {}", err)?;
            }
            outcome
        }
        Mode::Delete(name) => {
            let outcome = delete_metric(config, connector, name, out).await;
            if let Err(err) = &outcome {
                writeln!(out, "failed to delete metric {}: {}", name, err)?;
            }
            outcome
        }
    }
}

async fn list_metrics<C, W>(config: &Config, connector: &C, out: &mut W) -> Result<()>
where
    C: Connector,
    W: Write,
{
    let mut api = connector.connect().await?;
    let mut pager = DescriptorPager::new(&mut api, config.project_path());
    let mut shown = 0usize;

    while let Some(descriptor) = pager.next().await {
        let descriptor = descriptor?;
        if !is_custom_metric(&descriptor.r#type) {
            continue;
        }
        write_descriptor(out, &descriptor, config.output, config.short)?;
        shown += 1;
    }

    info!(
        project = %config.project,
        shown,
        pages = pager.pages_fetched(),
        "listed custom metric descriptors"
    );
    Ok(())
}

async fn delete_metric<C, W>(config: &Config, connector: &C, name: &str, out: &mut W) -> Result<()>
where
    C: Connector,
    W: Write,
{
    let mut api = connector.connect().await?;
    let request = DeleteMetricDescriptorRequest {
        name: config.descriptor_path(name),
    };
    api.delete_metric_descriptor(request).await?;

    info!(project = %config.project, metric = %name, "deleted metric descriptor");
    writeln!(out, "Deleted metric: {:?}", name)?;
    Ok(())
}
