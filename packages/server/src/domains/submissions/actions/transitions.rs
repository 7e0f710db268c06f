//! attempt_transition - the single entry point for review decisions
//!
//! Guard order: graph edge, actor role (and brand ownership), feedback
//! policy, then quota for approvals. Every commit is conditional on the
//! status the caller read, so concurrent reviewers produce one winner and
//! explicit conflicts, never silent overwrites.

use anyhow::Context;
use tracing::{info, warn};

use crate::common::auth::{Actor, AuthError, Role};
use crate::common::SubmissionId;
use crate::domains::campaigns::actions::lifecycle;
use crate::domains::campaigns::models::Campaign;
use crate::domains::campaigns::quota;
use crate::domains::submissions::cleanup;
use crate::domains::submissions::errors::WorkflowError;
use crate::domains::submissions::machine;
use crate::domains::submissions::models::{Submission, SubmissionStatus};
use crate::domains::submissions::policy;
use crate::kernel::ServerDeps;

/// A proposed transition, as supplied by the reviewer's client.
///
/// `expected_current` is the status the client read immediately before
/// proposing; it is the optimistic-concurrency precondition.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct TransitionRequest {
    pub target: SubmissionStatus,
    pub expected_current: SubmissionStatus,
    pub feedback: Option<String>,
}

/// Outcome of a successful transition
#[derive(Debug)]
pub enum TransitionOutcome {
    /// The submission moved to the target status
    Updated(Submission),
    /// The submission was rejected and its row deleted
    Deleted(SubmissionId),
}

/// Attempt a review transition on a submission.
///
/// Guard failures are detected before any persistent write, so every error
/// leaves the submission (and campaign) unchanged.
pub async fn attempt_transition(
    submission_id: SubmissionId,
    request: TransitionRequest,
    actor: Actor,
    deps: &ServerDeps,
) -> Result<TransitionOutcome, WorkflowError> {
    let submission = Submission::find_by_id(submission_id, &deps.db_pool)
        .await?
        .ok_or(WorkflowError::NotFound)?;

    let current = submission.current_status()?;
    let target = request.target;

    // A mismatch between what the caller read and what is persisted is a
    // conflict: another reviewer already acted.
    if current != request.expected_current {
        return Err(WorkflowError::StaleState);
    }

    // Guard (a): the edge must exist in the graph
    let rule = machine::check_transition(current, target)?;

    // Actor authorization: role from the rule, plus campaign ownership for
    // brand decisions
    let campaign = Campaign::find_by_id(submission.campaign_id, &deps.db_pool)
        .await?
        .context("Campaign not found for submission")?;

    actor.require_role(rule.actor)?;
    if rule.actor == Role::Brand && campaign.brand_id != actor.member_id {
        return Err(WorkflowError::Auth(AuthError::PermissionDenied(
            "Only the owning brand can review this submission".to_string(),
        )));
    }

    // Guard (b): reject-type targets must carry feedback
    policy::validate(target, request.feedback.as_deref())?;
    let feedback = request
        .feedback
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty());

    info!(
        submission_id = %submission_id,
        from = %current,
        to = %target,
        actor = %actor.member_id,
        "Attempting transition"
    );

    match target {
        SubmissionStatus::Pending => {
            let updated =
                Submission::update_status_if(submission_id, current, target, &deps.db_pool)
                    .await?
                    .ok_or(WorkflowError::StaleState)?;
            Ok(TransitionOutcome::Updated(updated))
        }

        SubmissionStatus::AdminReject => {
            let updated = Submission::record_review_if(
                submission_id,
                current,
                target,
                actor.member_id,
                feedback,
                &deps.db_pool,
            )
            .await?
            .ok_or(WorkflowError::StaleState)?;

            notify(deps, &updated, &campaign, target, feedback).await;
            Ok(TransitionOutcome::Updated(updated))
        }

        SubmissionStatus::Approved => {
            let updated = commit_approval(&submission, current, feedback, actor, deps).await?;

            // Side effects after the commit: quota may now be exhausted
            if let Err(e) = lifecycle::reevaluate(submission.campaign_id, &deps.db_pool).await {
                warn!(
                    campaign_id = %submission.campaign_id,
                    "Campaign re-evaluation failed after approval: {}",
                    e
                );
            }

            notify(deps, &updated, &campaign, target, feedback).await;
            Ok(TransitionOutcome::Updated(updated))
        }

        SubmissionStatus::Rejected => {
            // Claim the row first so only one reviewer runs the deletion
            let rejected = Submission::record_review_if(
                submission_id,
                current,
                target,
                actor.member_id,
                feedback,
                &deps.db_pool,
            )
            .await?
            .ok_or(WorkflowError::StaleState)?;

            // Storage cleanup before the row goes; its failure is non-fatal
            // and already queued for the orphan sweep.
            cleanup::remove_media(&rejected, deps).await;

            Submission::delete(submission_id, &deps.db_pool).await?;
            info!(submission_id = %submission_id, "Rejected submission deleted");

            notify(deps, &rejected, &campaign, target, feedback).await;
            Ok(TransitionOutcome::Deleted(submission_id))
        }

        SubmissionStatus::Posted => {
            let updated = Submission::mark_posted_if(submission_id, current, &deps.db_pool)
                .await?
                .ok_or(WorkflowError::StaleState)?;
            Ok(TransitionOutcome::Updated(updated))
        }

        // No edge leads back to draft; check_transition already rejected it
        SubmissionStatus::Draft => Err(WorkflowError::InvalidTransition {
            from: current,
            to: target,
        }),
    }
}

/// Commit an approval inside one transaction: lock the campaign row, count
/// approved work, then conditionally flip the submission. The lock
/// serializes concurrent approvals on the same campaign, so two attempts at
/// the last open slot cannot both pass the count.
async fn commit_approval(
    submission: &Submission,
    expected: SubmissionStatus,
    feedback: Option<&str>,
    actor: Actor,
    deps: &ServerDeps,
) -> Result<Submission, WorkflowError> {
    let mut tx = deps
        .db_pool
        .begin()
        .await
        .context("Failed to begin approval transaction")?;

    let campaign = Campaign::find_by_id_locked(submission.campaign_id, &mut *tx)
        .await?
        .context("Campaign not found for submission")?;

    let approved = Submission::count_approved_for_campaign(campaign.id, &mut *tx).await?;

    // Guard (c): capacity, evaluated under the campaign lock
    if !quota::capacity_remaining(&campaign, approved) {
        return Err(WorkflowError::QuotaExceeded);
    }

    let updated = Submission::record_review_if(
        submission.id,
        expected,
        SubmissionStatus::Approved,
        actor.member_id,
        feedback,
        &mut *tx,
    )
    .await?
    .ok_or(WorkflowError::StaleState)?;

    tx.commit()
        .await
        .context("Failed to commit approval transaction")?;

    Ok(updated)
}

/// Dispatch the decision notification to the creator. Fire-and-forget:
/// delivery failure never rolls back the decision.
async fn notify(
    deps: &ServerDeps,
    submission: &Submission,
    campaign: &Campaign,
    decision: SubmissionStatus,
    feedback: Option<&str>,
) {
    if let Err(e) = deps
        .notifier
        .notify_decision(
            submission.creator_id,
            &campaign.name,
            &decision.to_string(),
            feedback.unwrap_or(""),
        )
        .await
    {
        warn!(
            submission_id = %submission.id,
            decision = %decision,
            "Decision notification failed: {}",
            e
        );
    }
}
