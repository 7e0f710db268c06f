//! Integration tests for the submission review workflow.
//!
//! Covers the transition graph end to end: staff gating of drafts, brand
//! decisions on pending work, the destructive rejection path, and the
//! optimistic-concurrency conflict behavior.

mod common;

use std::sync::Arc;

use crate::common::{live_campaign, member_actor, submission_in_status, TestHarness};
use server_core::common::auth::Role;
use server_core::domains::submissions::actions::{attempt_transition, TransitionRequest};
use server_core::domains::submissions::models::{OrphanedMedia, Submission, SubmissionStatus};
use server_core::domains::submissions::{TransitionOutcome, WorkflowError};
use server_core::kernel::test_dependencies::{MockObjectStore, RecordingNotifier};
use test_context::test_context;

fn request(
    target: SubmissionStatus,
    expected: SubmissionStatus,
    feedback: Option<&str>,
) -> TransitionRequest {
    TransitionRequest {
        target,
        expected_current: expected,
        feedback: feedback.map(str::to_string),
    }
}

// =============================================================================
// Staff gating of drafts
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn staff_moves_draft_to_pending(ctx: &TestHarness) {
    let staff = member_actor(Role::Staff, &ctx.db_pool).await;
    let brand = member_actor(Role::Brand, &ctx.db_pool).await;
    let creator = member_actor(Role::Creator, &ctx.db_pool).await;
    let campaign = live_campaign(&brand, None, &ctx.db_pool).await;
    let submission =
        submission_in_status(&campaign, &creator, SubmissionStatus::Draft, &ctx.db_pool).await;

    let outcome = attempt_transition(
        submission.id,
        request(SubmissionStatus::Pending, SubmissionStatus::Draft, None),
        staff,
        &ctx.deps,
    )
    .await
    .expect("Transition should succeed");

    match outcome {
        TransitionOutcome::Updated(updated) => assert_eq!(updated.status, "pending"),
        other => panic!("Expected Updated, got {:?}", other),
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn admin_reject_requires_feedback(ctx: &TestHarness) {
    let staff = member_actor(Role::Staff, &ctx.db_pool).await;
    let brand = member_actor(Role::Brand, &ctx.db_pool).await;
    let creator = member_actor(Role::Creator, &ctx.db_pool).await;
    let campaign = live_campaign(&brand, None, &ctx.db_pool).await;
    let submission =
        submission_in_status(&campaign, &creator, SubmissionStatus::Draft, &ctx.db_pool).await;

    for feedback in [None, Some(""), Some("   \n")] {
        let result = attempt_transition(
            submission.id,
            request(
                SubmissionStatus::AdminReject,
                SubmissionStatus::Draft,
                feedback,
            ),
            staff,
            &ctx.deps,
        )
        .await;
        assert!(matches!(result, Err(WorkflowError::MissingFeedback)));
    }

    // Status unchanged after all failed attempts
    let unchanged = Submission::find_by_id(submission.id, &ctx.db_pool)
        .await
        .unwrap()
        .expect("Submission should still exist");
    assert_eq!(unchanged.status, "draft");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn admin_reject_with_feedback_persists_and_notifies(ctx: &TestHarness) {
    let staff = member_actor(Role::Staff, &ctx.db_pool).await;
    let brand = member_actor(Role::Brand, &ctx.db_pool).await;
    let creator = member_actor(Role::Creator, &ctx.db_pool).await;
    let campaign = live_campaign(&brand, None, &ctx.db_pool).await;
    let submission =
        submission_in_status(&campaign, &creator, SubmissionStatus::Draft, &ctx.db_pool).await;

    attempt_transition(
        submission.id,
        request(
            SubmissionStatus::AdminReject,
            SubmissionStatus::Draft,
            Some("off brief"),
        ),
        staff,
        &ctx.deps,
    )
    .await
    .expect("Transition should succeed");

    let updated = Submission::find_by_id(submission.id, &ctx.db_pool)
        .await
        .unwrap()
        .expect("Admin-rejected submission is retained");
    assert_eq!(updated.status, "admin_reject");
    assert_eq!(updated.feedback.as_deref(), Some("off brief"));
    assert_eq!(updated.reviewed_by, Some(staff.member_id));
    assert!(updated.reviewed_at.is_some());

    let sent = ctx.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].decision, "admin_reject");
    assert_eq!(sent[0].feedback, "off brief");
    assert_eq!(sent[0].recipient, creator.member_id);
}

// =============================================================================
// Brand decisions on pending work
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn brand_rejection_deletes_row_and_media_and_notifies(ctx: &TestHarness) {
    let staff = member_actor(Role::Staff, &ctx.db_pool).await;
    let brand = member_actor(Role::Brand, &ctx.db_pool).await;
    let creator = member_actor(Role::Creator, &ctx.db_pool).await;
    let campaign = live_campaign(&brand, None, &ctx.db_pool).await;
    let submission =
        submission_in_status(&campaign, &creator, SubmissionStatus::Draft, &ctx.db_pool).await;
    let media_ref = submission.media_ref.clone();

    // Full path: staff gates the draft, then the brand rejects it
    attempt_transition(
        submission.id,
        request(SubmissionStatus::Pending, SubmissionStatus::Draft, None),
        staff,
        &ctx.deps,
    )
    .await
    .expect("Draft gating should succeed");

    let outcome = attempt_transition(
        submission.id,
        request(
            SubmissionStatus::Rejected,
            SubmissionStatus::Pending,
            Some("low quality"),
        ),
        brand,
        &ctx.deps,
    )
    .await
    .expect("Rejection should succeed");
    assert!(matches!(outcome, TransitionOutcome::Deleted(_)));

    // Row is gone
    let gone = Submission::find_by_id(submission.id, &ctx.db_pool)
        .await
        .unwrap();
    assert!(gone.is_none());

    // Media is gone
    assert!(ctx.object_store.was_deleted(&media_ref));

    // Exactly one notification carrying the feedback
    let sent = ctx.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].decision, "rejected");
    assert_eq!(sent[0].feedback, "low quality");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rejection_with_failing_storage_still_deletes_row(ctx: &TestHarness) {
    let brand = member_actor(Role::Brand, &ctx.db_pool).await;
    let creator = member_actor(Role::Creator, &ctx.db_pool).await;
    let campaign = live_campaign(&brand, None, &ctx.db_pool).await;
    let submission = submission_in_status(
        &campaign,
        &creator,
        SubmissionStatus::Pending,
        &ctx.db_pool,
    )
    .await;
    let media_ref = submission.media_ref.clone();

    let store = Arc::new(MockObjectStore::new().with_failing_ref(&media_ref));
    let notifier = Arc::new(RecordingNotifier::new());
    let deps = ctx.deps_with(store.clone(), notifier.clone());

    let outcome = attempt_transition(
        submission.id,
        request(
            SubmissionStatus::Rejected,
            SubmissionStatus::Pending,
            Some("shaky footage"),
        ),
        brand,
        &deps,
    )
    .await
    .expect("Rejection must succeed despite storage failure");
    assert!(matches!(outcome, TransitionOutcome::Deleted(_)));

    // Row deleted even though cleanup failed
    assert!(Submission::find_by_id(submission.id, &ctx.db_pool)
        .await
        .unwrap()
        .is_none());

    // The failed reference is queued for the manual sweep
    let orphans = OrphanedMedia::list(&ctx.db_pool).await.unwrap();
    assert!(orphans.iter().any(|o| o.media_ref == media_ref));

    // Decision still notified
    assert_eq!(notifier.sent().len(), 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn notification_failure_does_not_roll_back_decision(ctx: &TestHarness) {
    let brand = member_actor(Role::Brand, &ctx.db_pool).await;
    let creator = member_actor(Role::Creator, &ctx.db_pool).await;
    let campaign = live_campaign(&brand, None, &ctx.db_pool).await;
    let submission = submission_in_status(
        &campaign,
        &creator,
        SubmissionStatus::Pending,
        &ctx.db_pool,
    )
    .await;

    let store = Arc::new(MockObjectStore::new());
    let notifier = Arc::new(RecordingNotifier::failing());
    let deps = ctx.deps_with(store, notifier);

    let outcome = attempt_transition(
        submission.id,
        request(SubmissionStatus::Approved, SubmissionStatus::Pending, None),
        brand,
        &deps,
    )
    .await
    .expect("Approval must survive notification failure");

    match outcome {
        TransitionOutcome::Updated(updated) => assert_eq!(updated.status, "approved"),
        other => panic!("Expected Updated, got {:?}", other),
    }
}

// =============================================================================
// Graph closure and authorization
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn edges_outside_the_graph_fail(ctx: &TestHarness) {
    let staff = member_actor(Role::Staff, &ctx.db_pool).await;
    let brand = member_actor(Role::Brand, &ctx.db_pool).await;
    let creator = member_actor(Role::Creator, &ctx.db_pool).await;
    let campaign = live_campaign(&brand, None, &ctx.db_pool).await;

    // draft -> approved skips the pending stage
    let draft =
        submission_in_status(&campaign, &creator, SubmissionStatus::Draft, &ctx.db_pool).await;
    let result = attempt_transition(
        draft.id,
        request(SubmissionStatus::Approved, SubmissionStatus::Draft, None),
        staff,
        &ctx.deps,
    )
    .await;
    assert!(matches!(
        result,
        Err(WorkflowError::InvalidTransition { .. })
    ));

    // posted is terminal
    let posted =
        submission_in_status(&campaign, &creator, SubmissionStatus::Posted, &ctx.db_pool).await;
    let result = attempt_transition(
        posted.id,
        request(SubmissionStatus::Pending, SubmissionStatus::Posted, None),
        staff,
        &ctx.deps,
    )
    .await;
    assert!(matches!(
        result,
        Err(WorkflowError::InvalidTransition { .. })
    ));

    // admin_reject is terminal
    let admin_rejected = submission_in_status(
        &campaign,
        &creator,
        SubmissionStatus::AdminReject,
        &ctx.db_pool,
    )
    .await;
    let result = attempt_transition(
        admin_rejected.id,
        request(
            SubmissionStatus::Pending,
            SubmissionStatus::AdminReject,
            None,
        ),
        staff,
        &ctx.deps,
    )
    .await;
    assert!(matches!(
        result,
        Err(WorkflowError::InvalidTransition { .. })
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn brand_decisions_require_the_owning_brand(ctx: &TestHarness) {
    let brand = member_actor(Role::Brand, &ctx.db_pool).await;
    let other_brand = member_actor(Role::Brand, &ctx.db_pool).await;
    let creator = member_actor(Role::Creator, &ctx.db_pool).await;
    let campaign = live_campaign(&brand, None, &ctx.db_pool).await;
    let submission = submission_in_status(
        &campaign,
        &creator,
        SubmissionStatus::Pending,
        &ctx.db_pool,
    )
    .await;

    // Another brand cannot review this campaign's work
    let result = attempt_transition(
        submission.id,
        request(SubmissionStatus::Approved, SubmissionStatus::Pending, None),
        other_brand,
        &ctx.deps,
    )
    .await;
    assert!(matches!(result, Err(WorkflowError::Auth(_))));

    // A creator cannot review at all
    let result = attempt_transition(
        submission.id,
        request(SubmissionStatus::Approved, SubmissionStatus::Pending, None),
        creator,
        &ctx.deps,
    )
    .await;
    assert!(matches!(result, Err(WorkflowError::Auth(_))));

    // Staff cannot make the brand's call on pending work
    let staff = member_actor(Role::Staff, &ctx.db_pool).await;
    let result = attempt_transition(
        submission.id,
        request(SubmissionStatus::Approved, SubmissionStatus::Pending, None),
        staff,
        &ctx.deps,
    )
    .await;
    assert!(matches!(result, Err(WorkflowError::Auth(_))));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn staff_publishes_approved_work(ctx: &TestHarness) {
    let staff = member_actor(Role::Staff, &ctx.db_pool).await;
    let brand = member_actor(Role::Brand, &ctx.db_pool).await;
    let creator = member_actor(Role::Creator, &ctx.db_pool).await;
    let campaign = live_campaign(&brand, None, &ctx.db_pool).await;
    let submission = submission_in_status(
        &campaign,
        &creator,
        SubmissionStatus::Approved,
        &ctx.db_pool,
    )
    .await;

    // The brand cannot publish
    let result = attempt_transition(
        submission.id,
        request(SubmissionStatus::Posted, SubmissionStatus::Approved, None),
        brand,
        &ctx.deps,
    )
    .await;
    assert!(matches!(result, Err(WorkflowError::Auth(_))));

    let outcome = attempt_transition(
        submission.id,
        request(SubmissionStatus::Posted, SubmissionStatus::Approved, None),
        staff,
        &ctx.deps,
    )
    .await
    .expect("Publish should succeed");

    match outcome {
        TransitionOutcome::Updated(updated) => {
            assert_eq!(updated.status, "posted");
            assert!(updated.posted_at.is_some());
        }
        other => panic!("Expected Updated, got {:?}", other),
    }
}

// =============================================================================
// Optimistic concurrency
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn second_reviewer_sees_stale_state(ctx: &TestHarness) {
    let brand = member_actor(Role::Brand, &ctx.db_pool).await;
    let creator = member_actor(Role::Creator, &ctx.db_pool).await;
    let campaign = live_campaign(&brand, None, &ctx.db_pool).await;
    let submission = submission_in_status(
        &campaign,
        &creator,
        SubmissionStatus::Pending,
        &ctx.db_pool,
    )
    .await;

    // First reviewer approves
    attempt_transition(
        submission.id,
        request(SubmissionStatus::Approved, SubmissionStatus::Pending, None),
        brand,
        &ctx.deps,
    )
    .await
    .expect("First decision should succeed");

    // Second reviewer still believes the submission is pending
    let result = attempt_transition(
        submission.id,
        request(
            SubmissionStatus::Rejected,
            SubmissionStatus::Pending,
            Some("changed my mind"),
        ),
        brand,
        &ctx.deps,
    )
    .await;
    assert!(matches!(result, Err(WorkflowError::StaleState)));

    // The approval stands
    let persisted = Submission::find_by_id(submission.id, &ctx.db_pool)
        .await
        .unwrap()
        .expect("Submission should still exist");
    assert_eq!(persisted.status, "approved");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn missing_submission_reports_not_found(ctx: &TestHarness) {
    let staff = member_actor(Role::Staff, &ctx.db_pool).await;

    let result = attempt_transition(
        server_core::common::SubmissionId::new(),
        request(SubmissionStatus::Pending, SubmissionStatus::Draft, None),
        staff,
        &ctx.deps,
    )
    .await;
    assert!(matches!(result, Err(WorkflowError::NotFound)));
}
