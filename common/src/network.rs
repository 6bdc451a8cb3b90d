//! Network identifiers as they appear as keys in artifacts and address maps.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

/// The identifier of a network, for example `"1"` for mainnet or `"5777"` for
/// a local Ganache instance.
///
/// Network ids are ordered the way JavaScript orders object keys: array
/// index ids (canonical integers below `2^32 - 1`) come first in numeric
/// order, followed by every other id. JavaScript keeps those other keys in
/// insertion order, which [`key_order`] reports as equal; the total [`Ord`]
/// breaks the tie lexicographically.
///
/// [`key_order`]: #method.key_order
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(String);

impl NetworkId {
    /// Creates a network id from its string representation.
    pub fn new(id: impl Into<String>) -> Self {
        NetworkId(id.into())
    }

    /// The sentinel network id `"0"` used when the current network of a
    /// deployment cannot be determined.
    pub fn unknown() -> Self {
        NetworkId("0".to_string())
    }

    /// Returns `true` if this is the sentinel id returned by [`unknown`].
    ///
    /// [`unknown`]: #method.unknown
    pub fn is_unknown(&self) -> bool {
        self.0 == "0"
    }

    /// Returns the string representation of the network id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares two ids by JavaScript object key order. Ids that are not
    /// array indices compare equal, a stable sort keeps them in insertion
    /// order.
    pub fn key_order(&self, other: &Self) -> Ordering {
        match (self.array_index(), other.array_index()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Returns the numeric value of an id that JavaScript treats as an array
    /// index, that is a canonical integer without a sign or leading zeros
    /// below `2^32 - 1`.
    fn array_index(&self) -> Option<u32> {
        let id = self.0.as_str();
        if id.is_empty() || (id.len() > 1 && id.starts_with('0')) {
            return None;
        }
        if !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        id.parse().ok().filter(|&index| index != u32::MAX)
    }
}

impl Ord for NetworkId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key_order(other).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for NetworkId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for NetworkId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NetworkId {
    fn from(id: &str) -> Self {
        NetworkId::new(id)
    }
}

impl From<String> for NetworkId {
    fn from(id: String) -> Self {
        NetworkId(id)
    }
}
