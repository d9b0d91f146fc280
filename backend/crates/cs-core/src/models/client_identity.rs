use crate::{CoreError, CoreResult};

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

const RANDOM_DIGITS: u32 = 6;
const MAX_TOKEN_LENGTH: usize = 128;

/// Last time component handed out, so tokens from the same millisecond still differ.
static LAST_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Device-generated token used in place of a login credential.
///
/// Generated tokens are numeric: a strictly increasing millisecond timestamp
/// followed by six random digits. Tokens typed in by a user (cross-device
/// import) are accepted if they are 1-128 ASCII alphanumeric, `_` or `-`
/// characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClientIdentity(String);

impl ClientIdentity {
    /// Generates a fresh token.
    pub fn generate() -> Self {
        let millis = next_millis();
        let random = rand::rng().random_range(0..10u32.pow(RANDOM_DIGITS));
        Self(format!("{millis}{random:06}"))
    }

    /// Parses a token supplied from outside the process.
    #[track_caller]
    pub fn parse(raw: &str) -> CoreResult<Self> {
        let token = raw.trim();

        let well_formed = !token.is_empty()
            && token.len() <= MAX_TOKEN_LENGTH
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !well_formed {
            return Err(CoreError::invalid_identity(raw));
        }

        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn next_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_MILLIS.load(Ordering::Relaxed);

    loop {
        let candidate = now.max(last + 1);
        match LAST_MILLIS.compare_exchange_weak(
            last,
            candidate,
            Ordering::AcqRel,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClientIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ClientIdentity {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClientIdentity {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreResult<Self> {
        Self::parse(&value)
    }
}

impl From<ClientIdentity> for String {
    fn from(identity: ClientIdentity) -> Self {
        identity.0
    }
}
