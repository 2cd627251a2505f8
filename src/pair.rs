use core::fmt::{self, Display};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Opaque identifier of an employee, as it appears in the input.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize), serde(transparent))]
pub struct EmployeeId(String);

/// Opaque identifier of a project, as it appears in the input.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize), serde(transparent))]
pub struct ProjectId(String);

macro_rules! impl_id {
    ($id:ident) => {
        impl $id {
            pub fn new(id: impl Into<String>) -> Self {
                $id(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $id {
            fn from(id: &str) -> Self {
                $id::new(id)
            }
        }

        impl From<String> for $id {
            fn from(id: String) -> Self {
                $id(id)
            }
        }

        impl Display for $id {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

impl_id!(EmployeeId);
impl_id!(ProjectId);

/// An unordered pair of two distinct employees.
///
/// The ids are stored in ascending order, so `(A, B)` and `(B, A)`
/// produce the same key.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde1", derive(Serialize))]
pub struct PairKey {
    first: EmployeeId,
    second: EmployeeId,
}

impl PairKey {
    /// Returns `None` when both ids name the same employee.
    pub fn new(a: EmployeeId, b: EmployeeId) -> Option<Self> {
        use core::cmp::Ordering;

        match a.cmp(&b) {
            Ordering::Less => Some(PairKey {
                first: a,
                second: b,
            }),
            Ordering::Greater => Some(PairKey {
                first: b,
                second: a,
            }),
            Ordering::Equal => None,
        }
    }

    /// The lesser of the two ids.
    pub fn first(&self) -> &EmployeeId {
        &self.first
    }

    /// The greater of the two ids.
    pub fn second(&self) -> &EmployeeId {
        &self.second
    }

    pub fn contains(&self, employee: &EmployeeId) -> bool {
        self.first == *employee || self.second == *employee
    }
}

impl Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.first, self.second)
    }
}
