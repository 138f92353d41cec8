//! Request tokens for overlapping searches.
//!
//! Each issued search gets a token from a monotonically increasing counter.
//! A result is only accepted if its token is the most recent one issued, so a
//! slow, superseded search cannot overwrite newer results.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct SearchSession {
    latest: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a new request, superseding all earlier ones
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Return `results` if `token` is still current, otherwise drop them
    pub fn accept<T>(&self, token: RequestToken, results: T) -> Option<T> {
        if self.is_current(token) {
            Some(results)
        } else {
            tracing::debug!(token = token.0, latest = self.latest, "discarding stale results");
            None
        }
    }
}
