use serde::Deserialize;

use crate::address::{Address, AddressField};

/// fields that must be filled in on the add form
pub const REQUIRED: [AddressField; 2] = [AddressField::RecipientName, AddressField::State];

/// The add-address form as submitted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressForm {
    pub recipient_name: String,
    pub organization_name: String,
    pub building_number: String,
    pub street_name: String,
    pub apartment_number: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl AddressForm {
    pub fn value(&self, field: AddressField) -> &str {
        match field {
            AddressField::RecipientName => &self.recipient_name,
            AddressField::OrganizationName => &self.organization_name,
            AddressField::BuildingNumber => &self.building_number,
            AddressField::StreetName => &self.street_name,
            AddressField::ApartmentNumber => &self.apartment_number,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::PostalCode => &self.postal_code,
        }
    }

    /// Check the required fields and build the address.
    ///
    /// Values are trimmed; on failure the missing required fields are returned.
    pub fn validate(&self) -> Result<Address, Vec<AddressField>> {
        let missing = REQUIRED
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(missing);
        }

        AddressField::ALL
            .into_iter()
            .fold(Address::builder(), |builder, field| {
                builder.field(field, self.value(field).trim())
            })
            .build()
            .map_err(|_| vec![AddressField::RecipientName])
    }
}
