//! Deferred fetch work.
//!
//! A [`Task`] records which resource to fetch and with which credentials, but
//! performs no I/O until [`Task::run`] is awaited with a [`Fetcher`].

use std::fmt;
use std::future::Future;

use crate::error::TransferError;

/// Capability to download exported calendars and address books.
pub trait Fetcher {
    fn fetch_calendar(
        &self,
        host: &str,
        user: &str,
        password: &str,
        calendar: &str,
    ) -> impl Future<Output = Result<Vec<u8>, TransferError>>;

    fn fetch_contacts(
        &self,
        host: &str,
        user: &str,
        password: &str,
    ) -> impl Future<Output = Result<Vec<u8>, TransferError>>;
}

/// A fetch bound to its arguments, run later.
#[derive(Clone, PartialEq, Eq)]
pub enum Task {
    Calendar {
        host: String,
        user: String,
        password: String,
        calendar: String,
    },
    Contacts {
        host: String,
        user: String,
        password: String,
    },
}

impl Task {
    pub fn calendar(host: &str, user: &str, password: &str, calendar: &str) -> Self {
        Task::Calendar {
            host: host.to_string(),
            user: user.to_string(),
            password: password.to_string(),
            calendar: calendar.to_string(),
        }
    }

    pub fn contacts(host: &str, user: &str, password: &str) -> Self {
        Task::Contacts {
            host: host.to_string(),
            user: user.to_string(),
            password: password.to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Task::Calendar { .. } => "calendar",
            Task::Contacts { .. } => "contacts",
        }
    }

    /// Invoke the bound fetch once and return its payload.
    pub async fn run<F: Fetcher>(&self, fetcher: &F) -> Result<Vec<u8>, TransferError> {
        match self {
            Task::Calendar {
                host,
                user,
                password,
                calendar,
            } => fetcher.fetch_calendar(host, user, password, calendar).await,
            Task::Contacts {
                host,
                user,
                password,
            } => fetcher.fetch_contacts(host, user, password).await,
        }
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Task::Calendar {
                host,
                user,
                calendar,
                ..
            } => f
                .debug_struct("Calendar")
                .field("host", host)
                .field("user", user)
                .field("password", &"<redacted>")
                .field("calendar", calendar)
                .finish(),
            Task::Contacts { host, user, .. } => f
                .debug_struct("Contacts")
                .field("host", host)
                .field("user", user)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}
