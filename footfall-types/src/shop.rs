use core::fmt;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a shop, as issued by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(String);

impl ShopId {
    /// Construct a shop id from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShopId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ShopId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One entry of the shop directory.
///
/// Shops are grouped by prefecture for selection purposes; the display label
/// combines `name` and `location`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    /// Stable identifier used in data requests.
    pub id: ShopId,
    /// Human-readable shop name.
    pub name: String,
    /// Free-form location string shown next to the name.
    pub location: String,
    /// Prefecture the shop belongs to.
    pub prefecture: String,
}

impl Shop {
    /// Display label in the "name location" form used by selection UIs.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.location)
    }
}
