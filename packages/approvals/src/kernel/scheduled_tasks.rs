//! Scheduled background tasks using tokio-cron-scheduler.
//!
//! This module provides periodic tasks that run on schedules:
//! - Daily sweep of listings stuck in pending review
//!
//! # Architecture
//!
//! Scheduled tasks run independently of the review workflow. The sweep
//! reads through the record store and notifies admins; it never changes
//! listing state itself.
//!
//! ```text
//! Scheduler (daily, 08:00 UTC)
//!     │
//!     └─► run_pending_review_sweep()
//!             └─► find_pending_review_since(cutoff)
//!                     └─► one digest email to the admin inbox
//! ```

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::kernel::deps::ServiceDeps;

/// Start all scheduled tasks
pub async fn start_scheduler(deps: ServiceDeps) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    // Pending review sweep - runs daily at 08:00 UTC
    let sweep_deps = deps.clone();
    let sweep_job = Job::new_async("0 0 8 * * *", move |_uuid, _lock| {
        let deps = sweep_deps.clone();
        Box::pin(async move {
            if let Err(e) = run_pending_review_sweep(&deps).await {
                tracing::error!("Pending review sweep failed: {}", e);
            }
        })
    })?;

    scheduler.add(sweep_job).await?;
    scheduler.start().await?;

    tracing::info!("Scheduled tasks started (pending review sweep daily at 08:00 UTC)");
    Ok(scheduler)
}

/// Run the pending review sweep
///
/// Finds listings that have sat in pending review longer than the
/// configured maximum age and emails the admin inbox a digest. Sends
/// nothing when no listing is overdue. Returns how many listings were
/// flagged.
pub async fn run_pending_review_sweep(deps: &ServiceDeps) -> Result<usize> {
    tracing::info!("Running pending review sweep");

    let max_age_hours = deps.config.pending_review_max_age_hours;
    let cutoff = Utc::now() - Duration::hours(max_age_hours as i64);
    let stale = deps.records.find_pending_review_since(cutoff).await?;

    if stale.is_empty() {
        tracing::info!("No listings waiting past the review age limit");
        return Ok(0);
    }

    let mut body = format!(
        "{} listing(s) have been waiting for review for more than {} hours:\n\n",
        stale.len(),
        max_age_hours
    );
    for listing in &stale {
        body.push_str(&format!(
            "- {} ({}) pending since {}\n",
            listing.display_title(),
            listing.id,
            listing.updated_at.format("%Y-%m-%d %H:%M UTC")
        ));
    }

    deps.notifier
        .send_email(&deps.config.admin_email, "Listings awaiting review", &body)
        .await
        .context("Failed to send pending review digest")?;

    tracing::info!("Sent pending review digest for {} listings", stale.len());

    Ok(stale.len())
}
