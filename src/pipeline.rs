//! Pipeline driver — source → stage → transport over a bounded channel.

use anyhow::Context;
use delimlog_core::{Config, DeserializerKind, EventDeserializer};
use delimlog_feeds::{FeedError, JsonLinesSource, WriterTransport};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tokio::sync::mpsc;

/// Counters reported when a pipeline run finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub batches: u64,
    pub entries: u64,
    pub records: u64,
    /// Input lines the source rejected as malformed.
    pub skipped_lines: usize,
}

impl PipelineStats {
    /// Entries removed by the sampling gate.
    pub fn dropped(&self) -> u64 {
        self.entries - self.records
    }
}

/// Resolve the configured stage alias and configure a fresh stage with the
/// `[formatter]` options.
pub fn build_stage(config: &Config) -> anyhow::Result<Box<dyn EventDeserializer>> {
    let kind: DeserializerKind = config.pipeline.deserializer.parse()?;
    let mut stage = kind.create();
    stage
        .configure(&config.formatter)
        .with_context(|| format!("configuring {} stage", kind.alias()))?;
    Ok(stage)
}

/// Drain `source` through `stage` into `transport` until the source is
/// exhausted. `channel_capacity` bounds the batches buffered between the
/// reader task and the driver.
pub async fn run<R, W>(
    mut source: JsonLinesSource<R>,
    stage: &dyn EventDeserializer,
    transport: &mut WriterTransport<W>,
    channel_capacity: usize,
) -> anyhow::Result<PipelineStats>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin,
{
    let (tx, mut rx) = mpsc::channel(channel_capacity.max(1));

    let reader = tokio::spawn(async move {
        while let Some(batch) = source.next_batch().await? {
            if tx.send(batch).await.is_err() {
                // driver stopped early; nothing left to feed
                break;
            }
        }
        Ok::<_, FeedError>(source.skipped())
    });

    let mut stats = PipelineStats::default();
    while let Some(batch) = rx.recv().await {
        let records = stage.deserialize(&batch)?;
        stats.batches += 1;
        stats.entries += batch.len() as u64;
        stats.records += records.len() as u64;
        transport
            .deliver(&records)
            .await
            .context("delivering formatted records")?;
    }

    stats.skipped_lines = reader
        .await
        .context("source task panicked")?
        .context("reading log entries")?;

    tracing::info!(
        batches = stats.batches,
        entries = stats.entries,
        records = stats.records,
        dropped = stats.dropped(),
        skipped_lines = stats.skipped_lines,
        "pipeline finished"
    );
    Ok(stats)
}
