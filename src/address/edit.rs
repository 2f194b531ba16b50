use crate::address::AddressField;

/// A single field of a partial update.
///
/// `Unspecified` means "leave the stored value alone", so `Explicit(None)`
/// stays available for clearing an optional field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Unspecified,
    Explicit(T),
}

impl<T> Default for Edit<T> {
    fn default() -> Self {
        Edit::Unspecified
    }
}

impl<T> Edit<T> {
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Edit::Unspecified)
    }

    /// overwrite `target` if this edit carries a value
    pub fn apply_to(self, target: &mut T) {
        if let Edit::Explicit(value) = self {
            *target = value;
        }
    }
}

/// Partial update for an [`Address`](crate::address::Address).
///
/// Every field starts out [`Edit::Unspecified`]:
///
/// ```
/// use address_book::address::{Address, AddressEdit, AddressField};
///
/// let mut address = Address::builder()
///     .recipient_name("John Doe")
///     .building_number("123")
///     .build()
///     .unwrap();
/// address.edit(AddressEdit::new().set(AddressField::BuildingNumber, "456"));
/// assert_eq!(address.building_number(), Some("456"));
/// assert_eq!(address.recipient_name(), "John Doe");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressEdit {
    pub recipient_name: Edit<String>,
    pub organization_name: Edit<Option<String>>,
    pub building_number: Edit<Option<String>>,
    pub street_name: Edit<Option<String>>,
    pub apartment_number: Edit<Option<String>>,
    pub city: Edit<Option<String>>,
    pub state: Edit<Option<String>>,
    pub postal_code: Edit<Option<String>>,
}

impl AddressEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: AddressField, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.optional_slot(field) {
            Some(slot) => *slot = Edit::Explicit(Some(value)),
            None => self.recipient_name = Edit::Explicit(value),
        }
        self
    }

    /// Explicitly clear `field`.
    ///
    /// The recipient name is required, so clearing it stores an empty name.
    pub fn clear(mut self, field: AddressField) -> Self {
        match self.optional_slot(field) {
            Some(slot) => *slot = Edit::Explicit(None),
            None => self.recipient_name = Edit::Explicit(String::new()),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.recipient_name.is_unspecified()
            && AddressField::OPTIONAL
                .iter()
                .all(|field| self.optional(*field).is_some_and(Edit::is_unspecified))
    }

    fn optional(&self, field: AddressField) -> Option<&Edit<Option<String>>> {
        match field {
            AddressField::RecipientName => None,
            AddressField::OrganizationName => Some(&self.organization_name),
            AddressField::BuildingNumber => Some(&self.building_number),
            AddressField::StreetName => Some(&self.street_name),
            AddressField::ApartmentNumber => Some(&self.apartment_number),
            AddressField::City => Some(&self.city),
            AddressField::State => Some(&self.state),
            AddressField::PostalCode => Some(&self.postal_code),
        }
    }

    fn optional_slot(&mut self, field: AddressField) -> Option<&mut Edit<Option<String>>> {
        match field {
            AddressField::RecipientName => None,
            AddressField::OrganizationName => Some(&mut self.organization_name),
            AddressField::BuildingNumber => Some(&mut self.building_number),
            AddressField::StreetName => Some(&mut self.street_name),
            AddressField::ApartmentNumber => Some(&mut self.apartment_number),
            AddressField::City => Some(&mut self.city),
            AddressField::State => Some(&mut self.state),
            AddressField::PostalCode => Some(&mut self.postal_code),
        }
    }
}
