//! Addressing value types: which device, which endpoint, which cluster.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a device on the Matter fabric.
///
/// Kept as the exact text the caller supplied (`"0x02"`, `"2"`, …) so it is
/// handed to the controller verbatim. JSON numbers are accepted too and are
/// rendered in decimal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawNodeId", into = "String")]
pub struct NodeId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNodeId {
    Text(String),
    Number(u64),
}

impl From<RawNodeId> for NodeId {
    fn from(raw: RawNodeId) -> Self {
        match raw {
            RawNodeId::Text(text) => Self(text),
            RawNodeId::Number(number) => Self(number.to_string()),
        }
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl NodeId {
    /// Wrap an identifier as written by the caller.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier carries nothing but whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! define_number {
    ($(#[doc = $doc:expr])* $name:ident($inner:ty)) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Wrap a raw protocol number.
            #[must_use]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Access the raw protocol number.
            #[must_use]
            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_number!(
    /// A sub-addressable unit within a device.
    EndpointId(u16)
);

define_number!(
    /// A functional command set within the protocol (On/Off, Level, …).
    ClusterId(u32)
);

impl EndpointId {
    /// First application endpoint; used when a request does not name one.
    pub const DEFAULT: Self = Self(1);
}

impl Default for EndpointId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ClusterId {
    /// The On/Off cluster.
    pub const ON_OFF: Self = Self(6);
}

impl Default for ClusterId {
    /// Bindings target the On/Off cluster unless told otherwise.
    fn default() -> Self {
        Self::ON_OFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_hex_node_text_verbatim() {
        let id: NodeId = serde_json::from_str(r#""0x02""#).unwrap();
        assert_eq!(id.as_str(), "0x02");
    }

    #[test]
    fn should_accept_numeric_node_id() {
        let id: NodeId = serde_json::from_str("1234").unwrap();
        assert_eq!(id.to_string(), "1234");
    }

    #[test]
    fn should_reject_negative_node_id() {
        let result: Result<NodeId, _> = serde_json::from_str("-4");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_object_node_id() {
        let result: Result<NodeId, _> = serde_json::from_str(r#"{"id":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_detect_blank_node_id() {
        assert!(NodeId::new("").is_blank());
        assert!(NodeId::new("   ").is_blank());
        assert!(!NodeId::new("0x01").is_blank());
    }

    #[test]
    fn should_serialize_node_id_as_string() {
        let json = serde_json::to_string(&NodeId::new("0x05")).unwrap();
        assert_eq!(json, r#""0x05""#);
    }

    #[test]
    fn should_default_endpoint_to_one() {
        assert_eq!(EndpointId::default().get(), 1);
    }

    #[test]
    fn should_default_cluster_to_on_off() {
        assert_eq!(ClusterId::default(), ClusterId::new(6));
    }

    #[test]
    fn should_reject_endpoint_out_of_range() {
        let result: Result<EndpointId, _> = serde_json::from_str("70000");
        assert!(result.is_err());
    }
}
