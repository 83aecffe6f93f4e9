//! Identity validation and cross-lane membership checks
//!
//! A requester is identified only by the name they type. Names are checked
//! here before any lane is touched, and a name may be waiting in at most one
//! lane at a time.

use crate::queue::error::{EnqueueResult, MembershipError, ValidationError};
use crate::queue::lane::Lane;
use crate::queue::types::LaneId;
use regex::Regex;
use std::sync::LazyLock;

/// Longest accepted name, counted in characters
pub const MAX_NAME_LENGTH: usize = 17;

static DISALLOWED_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z' ]").expect("static pattern is valid"));

/// A validated requester name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Stateless gatekeeper for names and lane membership
pub struct IdentityRegistry;

impl IdentityRegistry {
    /// Check a raw submission and turn it into a [`Name`]
    ///
    /// Length is checked first, then blank input, then the character set.
    pub fn validate(raw: &str) -> Result<Name, ValidationError> {
        let length = raw.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(ValidationError::TooLong {
                length,
                max: MAX_NAME_LENGTH,
            });
        }

        if raw.chars().all(char::is_whitespace) {
            return Err(ValidationError::Empty);
        }

        if let Some(found) = DISALLOWED_CHAR.find(raw) {
            let ch = found.as_str().chars().next().unwrap_or_default();
            return Err(ValidationError::InvalidChar { ch });
        }

        Ok(Name(raw.to_string()))
    }

    /// Find the lane currently holding a live entry for `name`
    pub fn locate<'a, I>(lanes: I, name: &str) -> Option<LaneId>
    where
        I: IntoIterator<Item = &'a Lane>,
    {
        lanes
            .into_iter()
            .find(|lane| lane.contains_name(name))
            .map(Lane::id)
    }

    /// Validate `raw` and make sure it is free to join `target`
    pub fn check_enqueue<'a, I>(lanes: I, target: LaneId, raw: &str) -> EnqueueResult<Name>
    where
        I: IntoIterator<Item = &'a Lane>,
    {
        let name = Self::validate(raw)?;

        match Self::locate(lanes, name.as_str()) {
            Some(lane) if lane == target => Err(MembershipError::AlreadyQueued {
                name: name.into_string(),
                lane,
            }
            .into()),
            Some(other) => Err(MembershipError::AlreadyInOtherLane {
                name: name.into_string(),
                other,
            }
            .into()),
            None => Ok(name),
        }
    }
}
