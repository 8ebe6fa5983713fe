use crate::core::profile::ProfileReport;
use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::{RunPhase, SystemMonitor};

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub location: String,
    pub triples_found: usize,
    pub profile: ProfileReport,
}

pub struct TripleEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> TripleEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting triple search");
        self.monitor.log_stats(RunPhase::Start);

        let result = self.pipeline.search().await?;
        tracing::info!(
            "Found {} triples with bound {} ({} pairs, {:.3}s)",
            result.triples.len(),
            result.bound,
            result.profile.pair_evaluations,
            result.profile.elapsed.as_secs_f64()
        );
        self.monitor.log_stats(RunPhase::Search);

        let output = self.pipeline.render(result).await?;
        tracing::debug!("Rendered {} bytes", output.content.len());
        self.monitor.log_stats(RunPhase::Render);

        let triples_found = output.triples_found;
        let profile = output.profile.clone();
        let location = self.pipeline.load(output).await?;
        tracing::info!("Output written to: {}", location);
        self.monitor.log_stats(RunPhase::Load);

        self.monitor.log_final_stats(&profile);

        Ok(RunSummary {
            location,
            triples_found,
            profile,
        })
    }
}
