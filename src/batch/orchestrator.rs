//! Batch orchestrator
//!
//! Processes a worklist of sites strictly in order, one at a time, with the
//! checkpoint flushed after every completed site. One site's failure never
//! halts the batch; a cancellation signal (checked between items) or an
//! error in the loop's own bookkeeping flushes the checkpoint before exit.

use crate::analyzer::{SiteAnalyzer, SiteResult};
use crate::batch::checkpoint::Checkpoint;
use crate::config::Config;
use crate::generator::TextGenerator;
use crate::output::{write_batch_summary, write_site_result};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Final accounting for a finished batch run
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Sites processed in this run (completed + failed)
    pub attempted: usize,
    /// Sites completed successfully in this run
    pub completed: usize,
    /// Sites that failed in this run
    pub failed: usize,
    /// Identifiers of the failed sites, in processing order
    pub failed_urls: Vec<String>,
    /// The collected per-site results
    pub results: Vec<SiteResult>,
    /// When the batch finished
    pub finished_at: DateTime<Utc>,
}

/// How a batch run ended
#[derive(Debug)]
pub enum BatchOutcome {
    /// All remaining work was processed; the checkpoint was removed
    Completed(BatchSummary),
    /// A cancellation signal stopped the run; the checkpoint was flushed
    /// and the in-flight item will restart from scratch on the next run
    Interrupted {
        /// Sites completed in this run before the interrupt
        completed: usize,
        /// Sites left unprocessed
        remaining: usize,
    },
}

/// Drives [`SiteAnalyzer`] over a worklist with checkpointed resumability
pub struct BatchOrchestrator<'a, G> {
    analyzer: SiteAnalyzer<'a, G>,
    checkpoint_path: PathBuf,
    output_dir: PathBuf,
    cancel: Arc<AtomicBool>,
}

impl<'a, G: TextGenerator> BatchOrchestrator<'a, G> {
    /// Creates an orchestrator
    ///
    /// # Arguments
    ///
    /// * `config` - Pipeline configuration; output locations are taken from
    ///   `config.output`
    /// * `generator` - The text-generation backend
    /// * `cancel` - Cancellation flag, checked between items; set it from a
    ///   signal handler to request a flush-then-exit stop
    pub fn new(config: &'a Config, generator: &'a G, cancel: Arc<AtomicBool>) -> Result<Self> {
        let output_dir = PathBuf::from(&config.output.directory);
        let checkpoint_path = output_dir.join(&config.output.checkpoint_file);

        Ok(Self {
            analyzer: SiteAnalyzer::new(config, generator)?,
            checkpoint_path,
            output_dir,
            cancel,
        })
    }

    /// Runs the batch over the given worklist
    ///
    /// The worklist is deduplicated (first occurrence wins) and filtered
    /// against the checkpoint before processing begins; the rest is
    /// processed strictly in worklist order.
    ///
    /// # Arguments
    ///
    /// * `worklist` - Ordered site identifiers; duplicates allowed
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOutcome)` - The run finished or was interrupted cleanly
    /// * `Err(SitescopeError)` - A bookkeeping error outside the per-item
    ///   path; the checkpoint was flushed before returning
    pub async fn run(&self, worklist: &[String]) -> Result<BatchOutcome> {
        std::fs::create_dir_all(&self.output_dir)?;

        // Loading-Checkpoint
        let mut checkpoint = Checkpoint::load(&self.checkpoint_path);
        if !checkpoint.completed.is_empty() {
            tracing::info!(
                "Resuming from checkpoint: {} sites already completed",
                checkpoint.completed.len()
            );
        }

        let mut seen = HashSet::new();
        let remaining: Vec<&String> = worklist
            .iter()
            .filter(|site| seen.insert(site.as_str()))
            .filter(|site| !checkpoint.contains(site.as_str()))
            .collect();

        tracing::info!(
            "Worklist: {} sites, {} remaining after checkpoint",
            worklist.len(),
            remaining.len()
        );

        // Running
        let mut results: Vec<SiteResult> = Vec::new();
        let mut failed_urls: Vec<String> = Vec::new();

        for (index, site) in remaining.iter().enumerate() {
            if self.cancel.load(Ordering::SeqCst) {
                tracing::warn!("Interrupt received, flushing checkpoint and stopping");
                if let Err(e) = checkpoint.flush(&self.checkpoint_path) {
                    tracing::error!("Checkpoint flush on interrupt failed: {}", e);
                }
                return Ok(BatchOutcome::Interrupted {
                    completed: results.len(),
                    remaining: remaining.len() - index,
                });
            }

            tracing::info!("Processing site {}/{}: {}", index + 1, remaining.len(), site);

            match self.analyzer.analyze(site.as_str()).await {
                Ok(result) => {
                    // Result persistence and checkpoint flush are loop
                    // bookkeeping: an error here is fatal, with the
                    // checkpoint flushed so completed work stays resumable.
                    if let Err(e) = write_site_result(&self.output_dir, &result) {
                        let _ = checkpoint.flush(&self.checkpoint_path);
                        return Err(e);
                    }
                    checkpoint.mark_completed(site.as_str());
                    checkpoint.flush(&self.checkpoint_path)?;
                    results.push(result);
                }
                Err(e) => {
                    tracing::warn!("Site {} failed: {}", site, e);
                    failed_urls.push(site.to_string());
                }
            }
        }

        // Completed
        let summary = BatchSummary {
            attempted: results.len() + failed_urls.len(),
            completed: results.len(),
            failed: failed_urls.len(),
            failed_urls,
            results,
            finished_at: Utc::now(),
        };

        write_batch_summary(&self.output_dir, &summary)?;
        Checkpoint::remove(&self.checkpoint_path)?;
        tracing::info!(
            "Batch complete: {} succeeded, {} failed",
            summary.completed,
            summary.failed
        );

        Ok(BatchOutcome::Completed(summary))
    }
}
