use serde::{Deserialize, Serialize};

/// The serialized form of an address, as stored in the book file and the
/// CSV export. Empty optional fields are written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub recipient_name: String,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub building_number: Option<String>,
    #[serde(default)]
    pub street_name: Option<String>,
    #[serde(default)]
    pub apartment_number: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// The whole book file.
///
/// `name` and `id` may be `null` for a book whose holder was never set, but
/// the keys themselves must be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    #[serde(deserialize_with = "Option::deserialize")]
    pub name: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub id: Option<i64>,
    pub addresses: Vec<AddressRecord>,
}
