//! Request correlation carried through Zellij's `web_request` context map.
//!
//! The host hands the context map back untouched with the response, which is
//! how a completion is matched to the view and fetch that issued it.

use std::collections::BTreeMap;
use std::fmt;

const RESOURCE_KEY: &str = "resource";
const MOUNT_KEY: &str = "mount";
const SEQ_KEY: &str = "seq";

/// The five remote resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Jobs,
    JobDetails,
    Departments,
    Locations,
    Functions,
}

impl Resource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jobs => "jobs",
            Self::JobDetails => "job_details",
            Self::Departments => "departments",
            Self::Locations => "locations",
            Self::Functions => "functions",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        [
            Self::Jobs,
            Self::JobDetails,
            Self::Departments,
            Self::Locations,
            Self::Functions,
        ]
        .into_iter()
        .find(|resource| resource.as_str() == value)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies who issued a request.
///
/// - `mount`: view mount the request belongs to; responses for an older mount
///   are orphaned and dropped
/// - `seq`: per-mount job-list fetch number; only the latest is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    pub resource: Resource,
    pub mount: u64,
    pub seq: u64,
}

impl RequestContext {
    #[must_use]
    pub const fn new(resource: Resource, mount: u64, seq: u64) -> Self {
        Self {
            resource,
            mount,
            seq,
        }
    }

    /// Serializes into the string map accepted by `web_request`.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (RESOURCE_KEY.to_string(), self.resource.as_str().to_string()),
            (MOUNT_KEY.to_string(), self.mount.to_string()),
            (SEQ_KEY.to_string(), self.seq.to_string()),
        ])
    }

    /// Restores a context from a response's map. Unknown or foreign maps yield `None`.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Option<Self> {
        Some(Self {
            resource: Resource::parse(map.get(RESOURCE_KEY)?)?,
            mount: map.get(MOUNT_KEY)?.parse().ok()?,
            seq: map.get(SEQ_KEY)?.parse().ok()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_survives_the_host_map() {
        let context = RequestContext::new(Resource::Functions, 3, 9);
        assert_eq!(RequestContext::from_map(&context.to_map()), Some(context));
    }

    #[test]
    fn foreign_maps_are_rejected() {
        assert_eq!(RequestContext::from_map(&BTreeMap::new()), None);

        let mut map = RequestContext::new(Resource::Jobs, 1, 1).to_map();
        map.insert(RESOURCE_KEY.to_string(), "sessions".to_string());
        assert_eq!(RequestContext::from_map(&map), None);
    }
}
