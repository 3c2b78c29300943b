//! Request state for data that is fetched when a view mounts.
//!
//! [`FetchState`] is the value a view renders from, and [`RequestSequence`]
//! decides whether a response that arrives late may still be applied. Both are
//! free of any UI framework so the frontend hooks stay thin.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::api::{ApiError, ApiResult};

pub const PORTFOLIO_FALLBACK: &str = "Failed to fetch portfolio data";
pub const PERSONAL_INFO_FALLBACK: &str = "Failed to fetch personal information";
pub const PROJECTS_FALLBACK: &str = "Failed to fetch projects";
pub const EXPERIENCE_FALLBACK: &str = "Failed to fetch experience";

/// One of loading, success or error, never two at once.
///
/// Data from the last success is carried through later `Loading` and `Error`
/// states so a refetch does not blank the section.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading { previous: Option<T> },
    Success(T),
    Error { message: String, previous: Option<T> },
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading { previous: None }
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchState::Success(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    /// The freshest data available, from this state or the last success.
    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            FetchState::Loading { previous } | FetchState::Error { previous, .. } => {
                previous.as_ref()
            }
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            FetchState::Success(data) => Some(data),
            FetchState::Loading { previous } | FetchState::Error { previous, .. } => previous,
        }
    }

    /// Enters `Loading`, keeping whatever data is already held.
    pub fn begin(self) -> Self {
        FetchState::Loading {
            previous: self.into_data(),
        }
    }

    /// Settles with the outcome of a request. Errors keep the held data and
    /// record a message that is never empty.
    pub fn resolve(self, result: ApiResult<T>, fallback: &str) -> Self {
        match result {
            Ok(data) => FetchState::Success(data),
            Err(err) => FetchState::Error {
                message: error_message(&err, fallback),
                previous: self.into_data(),
            },
        }
    }
}

/// The error's own message, or `fallback` when it has none.
pub fn error_message(err: &ApiError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Hands out tickets for outgoing requests. Only the newest ticket is current,
/// so a response to a superseded request can be recognised and dropped.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: Cell<u64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Makes every outstanding ticket stale, e.g. when the owner unmounts.
    pub fn invalidate(&self) {
        self.latest.set(self.latest.get() + 1);
    }
}

/// Issues a ticket for `request` right away and resolves to its output only if
/// that ticket is still current once the request finishes. `None` means a
/// newer request was issued, or the sequence was invalidated, in the meantime.
pub fn latest_only<F>(
    sequence: Rc<RequestSequence>,
    request: F,
) -> impl Future<Output = Option<F::Output>>
where
    F: Future,
{
    let ticket = sequence.issue();
    async move {
        let output = request.await;
        sequence.is_current(ticket).then_some(output)
    }
}
