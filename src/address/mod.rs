use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::error::{Error, Result};
use crate::record::AddressRecord;

mod edit;

pub use edit::{AddressEdit, Edit};

/// The eight fields of an [`Address`], in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    RecipientName,
    OrganizationName,
    BuildingNumber,
    StreetName,
    ApartmentNumber,
    City,
    State,
    PostalCode,
}

impl AddressField {
    pub const ALL: [AddressField; 8] = [
        AddressField::RecipientName,
        AddressField::OrganizationName,
        AddressField::BuildingNumber,
        AddressField::StreetName,
        AddressField::ApartmentNumber,
        AddressField::City,
        AddressField::State,
        AddressField::PostalCode,
    ];

    pub const OPTIONAL: [AddressField; 7] = [
        AddressField::OrganizationName,
        AddressField::BuildingNumber,
        AddressField::StreetName,
        AddressField::ApartmentNumber,
        AddressField::City,
        AddressField::State,
        AddressField::PostalCode,
    ];

    /// key used in records and forms
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressField::RecipientName => "recipient_name",
            AddressField::OrganizationName => "organization_name",
            AddressField::BuildingNumber => "building_number",
            AddressField::StreetName => "street_name",
            AddressField::ApartmentNumber => "apartment_number",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::PostalCode => "postal_code",
        }
    }

    /// human readable label
    pub fn label(&self) -> &'static str {
        match self {
            AddressField::RecipientName => "Recipient Name",
            AddressField::OrganizationName => "Organization Name",
            AddressField::BuildingNumber => "Building Number",
            AddressField::StreetName => "Street Name",
            AddressField::ApartmentNumber => "Apartment Number",
            AddressField::City => "City",
            AddressField::State => "State",
            AddressField::PostalCode => "Postal Code",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A postal address.
///
/// Empty optional fields are stored as `None`, so an address read back from
/// a record compares equal to the one that was written. Ordering starts with
/// the recipient name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    recipient_name: String,
    organization_name: Option<String>,
    building_number: Option<String>,
    street_name: Option<String>,
    apartment_number: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
}

impl Address {
    /// an address holding only a recipient
    pub fn new(recipient_name: impl Into<String>) -> Self {
        Self {
            recipient_name: recipient_name.into(),
            organization_name: None,
            building_number: None,
            street_name: None,
            apartment_number: None,
            city: None,
            state: None,
            postal_code: None,
        }
    }

    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    pub fn recipient_name(&self) -> &str {
        &self.recipient_name
    }

    pub fn organization_name(&self) -> Option<&str> {
        self.organization_name.as_deref()
    }

    pub fn building_number(&self) -> Option<&str> {
        self.building_number.as_deref()
    }

    pub fn street_name(&self) -> Option<&str> {
        self.street_name.as_deref()
    }

    pub fn apartment_number(&self) -> Option<&str> {
        self.apartment_number.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    /// value of any field; the recipient name is always `Some`
    pub fn get(&self, field: AddressField) -> Option<&str> {
        match field {
            AddressField::RecipientName => Some(self.recipient_name()),
            AddressField::OrganizationName => self.organization_name(),
            AddressField::BuildingNumber => self.building_number(),
            AddressField::StreetName => self.street_name(),
            AddressField::ApartmentNumber => self.apartment_number(),
            AddressField::City => self.city(),
            AddressField::State => self.state(),
            AddressField::PostalCode => self.postal_code(),
        }
    }

    /// Identifier derived from the hash of all eight fields.
    ///
    /// Stable for a given set of values, so it changes after an edit.
    pub fn id(&self) -> String {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        format!("0{:x}", hasher.finish())
    }

    /// apply the explicit fields of `edit`, leaving the others untouched
    pub fn edit(&mut self, edit: AddressEdit) -> &mut Self {
        edit.recipient_name.apply_to(&mut self.recipient_name);
        edit.organization_name.apply_to(&mut self.organization_name);
        edit.building_number.apply_to(&mut self.building_number);
        edit.street_name.apply_to(&mut self.street_name);
        edit.apartment_number.apply_to(&mut self.apartment_number);
        edit.city.apply_to(&mut self.city);
        edit.state.apply_to(&mut self.state);
        edit.postal_code.apply_to(&mut self.postal_code);
        self.normalize();
        self
    }

    /// Fields can be edited but never removed.
    pub fn delete_field(&mut self, field: AddressField) -> Result<()> {
        Err(Error::Immutable(field))
    }

    pub fn to_record(&self) -> AddressRecord {
        AddressRecord {
            recipient_name: self.recipient_name.clone(),
            organization_name: self.organization_name.clone(),
            building_number: self.building_number.clone(),
            street_name: self.street_name.clone(),
            apartment_number: self.apartment_number.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            postal_code: self.postal_code.clone(),
        }
    }

    pub fn from_record(record: AddressRecord) -> Self {
        let mut address = Self {
            recipient_name: record.recipient_name,
            organization_name: record.organization_name,
            building_number: record.building_number,
            street_name: record.street_name,
            apartment_number: record.apartment_number,
            city: record.city,
            state: record.state,
            postal_code: record.postal_code,
        };
        address.normalize();
        address
    }

    fn normalize(&mut self) {
        for value in [
            &mut self.organization_name,
            &mut self.building_number,
            &mut self.street_name,
            &mut self.apartment_number,
            &mut self.city,
            &mut self.state,
            &mut self.postal_code,
        ] {
            if value.as_deref().is_some_and(str::is_empty) {
                *value = None;
            }
        }
    }
}

impl From<AddressRecord> for Address {
    fn from(record: AddressRecord) -> Self {
        Self::from_record(record)
    }
}

impl From<&Address> for AddressRecord {
    fn from(address: &Address) -> Self {
        address.to_record()
    }
}

/// mailing label, one line per present component
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn line(parts: &[Option<&str>], separator: &str) -> Option<String> {
            let parts = parts.iter().flatten().copied().collect::<Vec<_>>();
            (!parts.is_empty()).then(|| parts.join(separator))
        }

        let recipient = Some(self.recipient_name.as_str()).filter(|name| !name.is_empty());
        let street = line(&[self.building_number(), self.street_name()], " ");
        let region = line(&[self.state(), self.postal_code()], " ");
        let locality = line(&[self.city(), region.as_deref()], ", ");

        let lines = [
            recipient,
            self.organization_name(),
            street.as_deref(),
            self.apartment_number(),
            locality.as_deref(),
        ];
        for line in lines.into_iter().flatten() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Builder for an [`Address`]; the recipient name is the only required field.
#[derive(Debug, Clone, Default)]
pub struct AddressBuilder {
    recipient_name: Option<String>,
    fields: AddressEdit,
}

impl AddressBuilder {
    pub fn recipient_name(mut self, value: impl Into<String>) -> Self {
        self.recipient_name = Some(value.into());
        self
    }

    pub fn organization_name(self, value: impl Into<String>) -> Self {
        self.field(AddressField::OrganizationName, value)
    }

    pub fn building_number(self, value: impl Into<String>) -> Self {
        self.field(AddressField::BuildingNumber, value)
    }

    pub fn street_name(self, value: impl Into<String>) -> Self {
        self.field(AddressField::StreetName, value)
    }

    pub fn apartment_number(self, value: impl Into<String>) -> Self {
        self.field(AddressField::ApartmentNumber, value)
    }

    pub fn city(self, value: impl Into<String>) -> Self {
        self.field(AddressField::City, value)
    }

    pub fn state(self, value: impl Into<String>) -> Self {
        self.field(AddressField::State, value)
    }

    pub fn postal_code(self, value: impl Into<String>) -> Self {
        self.field(AddressField::PostalCode, value)
    }

    /// set any field by name
    pub fn field(mut self, field: AddressField, value: impl Into<String>) -> Self {
        match field {
            AddressField::RecipientName => self.recipient_name(value),
            _ => {
                self.fields = self.fields.set(field, value);
                self
            }
        }
    }

    pub fn build(self) -> Result<Address> {
        let recipient_name = self.recipient_name.ok_or(Error::MissingField(AddressField::RecipientName.as_str()))?;
        let mut address = Address::new(recipient_name);
        address.edit(self.fields);
        Ok(address)
    }
}
