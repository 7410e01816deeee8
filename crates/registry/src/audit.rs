use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// What an admin override did. Capacity changes record the before and after
/// values so the log alone reconstructs the mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AuditAction {
    ForceEnroll,
    CapacityChange { old: u32, new: u32 },
}

impl Display for AuditAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AuditAction::ForceEnroll => write!(f, "FORCE_ENROLL"),
            AuditAction::CapacityChange { old, new } => write!(f, "CAPACITY {old}->{new}"),
        }
    }
}

/// One admin override, as it happened.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub admin_id: String,
    pub action: AuditAction,
    pub target_id: String,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    pub(crate) fn new(
        admin_id: impl Into<String>,
        action: AuditAction,
        target_id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            admin_id: admin_id.into(),
            action,
            target_id: target_id.into(),
            reason: reason.into(),
            timestamp: Utc::now(),
        }
    }
}

impl Display for AuditEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "[{}] Admin {}: {} on {} - Reason: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.admin_id,
            self.action,
            self.target_id,
            self.reason
        )
    }
}

/// Append-only sequence of admin overrides, owned by the registry rather
/// than any entity. Entries are only ever added.
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub(crate) fn append(&mut self, entry: AuditEntry) {
        log::info!("audit: {entry}");
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
