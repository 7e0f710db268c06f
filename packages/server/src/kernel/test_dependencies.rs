// Test dependencies - in-memory implementations for testing
//
// Provides fake services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use super::traits::{BaseNotificationService, BaseObjectStore, DeleteOutcome};
use crate::common::MemberId;

// =============================================================================
// Mock Object Store
// =============================================================================

/// In-memory object store that tracks which references have been deleted.
///
/// The first delete of a reference reports `Removed`, subsequent deletes
/// report `AlreadyAbsent`, matching idempotent storage semantics. Failures
/// can be injected per-reference to exercise the cleanup failure path.
pub struct MockObjectStore {
    deleted: Arc<Mutex<HashSet<String>>>,
    delete_calls: Arc<Mutex<Vec<String>>>,
    failing_refs: Arc<Mutex<HashSet<String>>>,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self {
            deleted: Arc::new(Mutex::new(HashSet::new())),
            delete_calls: Arc::new(Mutex::new(Vec::new())),
            failing_refs: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Make deletes of the given reference fail with a storage error
    pub fn with_failing_ref(self, media_ref: &str) -> Self {
        self.failing_refs
            .lock()
            .unwrap()
            .insert(media_ref.to_string());
        self
    }

    /// All references passed to delete, in call order
    pub fn delete_calls(&self) -> Vec<String> {
        self.delete_calls.lock().unwrap().clone()
    }

    /// Whether the given reference has been deleted
    pub fn was_deleted(&self, media_ref: &str) -> bool {
        self.deleted.lock().unwrap().contains(media_ref)
    }
}

impl Default for MockObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseObjectStore for MockObjectStore {
    async fn delete(&self, media_ref: &str) -> Result<DeleteOutcome> {
        self.delete_calls.lock().unwrap().push(media_ref.to_string());

        if self.failing_refs.lock().unwrap().contains(media_ref) {
            anyhow::bail!("Injected storage failure for {}", media_ref);
        }

        let newly_deleted = self.deleted.lock().unwrap().insert(media_ref.to_string());
        if newly_deleted {
            Ok(DeleteOutcome::Removed)
        } else {
            Ok(DeleteOutcome::AlreadyAbsent)
        }
    }
}

// =============================================================================
// Recording Notifier
// =============================================================================

/// A notification sent through the recording notifier
#[derive(Debug, Clone)]
pub struct SentNotification {
    pub recipient: MemberId,
    pub campaign_name: String,
    pub decision: String,
    pub feedback: String,
}

/// Notifier that records every call instead of delivering anything.
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<SentNotification>>>,
    fail_all: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_all: false,
        }
    }

    /// Make every notify call fail, to verify decisions survive delivery
    /// failures
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_all: true,
        }
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseNotificationService for RecordingNotifier {
    async fn notify_decision(
        &self,
        recipient: MemberId,
        campaign_name: &str,
        decision: &str,
        feedback: &str,
    ) -> Result<()> {
        self.sent.lock().unwrap().push(SentNotification {
            recipient,
            campaign_name: campaign_name.to_string(),
            decision: decision.to_string(),
            feedback: feedback.to_string(),
        });

        if self.fail_all {
            anyhow::bail!("Injected notification delivery failure");
        }
        Ok(())
    }
}
