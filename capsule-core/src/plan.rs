//! Snapshot plan: every archive path paired with the task producing it.

use std::collections::HashSet;

use crate::error::{CapsuleError, CapsuleResult};
use crate::model::Hierarchy;
use crate::task::Task;

#[derive(Debug, Clone)]
pub struct PlanEntry {
    pub path: String,
    pub task: Task,
}

/// Ordered, fully enumerated work of one snapshot run.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    entries: Vec<PlanEntry>,
}

impl Plan {
    /// Walk servers, users and calendars in config order.
    ///
    /// Each user contributes one calendar task per declared calendar, followed
    /// by one contacts task unless its contacts are ignored. Fails with
    /// [`CapsuleError::PathCollision`] if two entries would land on the same
    /// archive path.
    pub fn build(hierarchy: &Hierarchy) -> CapsuleResult<Self> {
        let mut entries = Vec::new();

        for server in hierarchy.servers() {
            for user in server.users(hierarchy) {
                for calendar in user.calendars(hierarchy) {
                    entries.push(PlanEntry {
                        path: calendar.path(hierarchy),
                        task: Task::calendar(&server.host, &user.name, &user.password, &calendar.name),
                    });
                }

                let contacts = user.contacts(hierarchy);
                if !contacts.ignore {
                    entries.push(PlanEntry {
                        path: contacts.path(hierarchy),
                        task: Task::contacts(&server.host, &user.name, &user.password),
                    });
                }
            }
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(CapsuleError::PathCollision(entry.path.clone()));
            }
        }

        Ok(Plan { entries })
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.path.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = &'a PlanEntry;
    type IntoIter = std::slice::Iter<'a, PlanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
