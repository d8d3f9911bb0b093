//! Load-state bookkeeping for values fetched from the API (the user profile,
//! the granted module list). Each fetch takes a ticket; only the response to
//! the most recently issued ticket is applied, so a slow, superseded request
//! can never overwrite newer state.

use super::errors::AppError;

/// Coarse state of a resolver. Only `Ready` makes the value trustworthy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Error(String),
}

/// Identifies one fetch issued by [`Resolved::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Resolved<T> {
    value: Option<T>,
    is_loading: bool,
    error: Option<String>,
    latest: u64,
}

impl<T> Default for Resolved<T> {
    /// Nothing fetched yet; consumers must wait.
    fn default() -> Self {
        Self {
            value: None,
            is_loading: true,
            error: None,
            latest: 0,
        }
    }
}

impl<T> Resolved<T> {
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> LoadPhase {
        if self.is_loading {
            LoadPhase::Loading
        } else if let Some(message) = &self.error {
            LoadPhase::Error(message.clone())
        } else {
            LoadPhase::Ready
        }
    }

    /// Marks a new fetch in flight and returns its ticket.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.is_loading = true;
        RequestTicket(self.latest)
    }

    /// Applies a fetch result. Returns `false` (and changes nothing) when a newer
    /// fetch was started after this one. A failure keeps the previous value.
    pub fn settle(&mut self, ticket: RequestTicket, result: Result<T, AppError>) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
        true
    }

    /// Drops the value and settles with nothing, e.g. after sign-out.
    pub fn clear(&mut self) {
        *self = Self {
            value: None,
            is_loading: false,
            error: None,
            latest: self.latest + 1,
        };
    }
}
