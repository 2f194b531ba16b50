use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::ops::Index;
use std::path::Path;

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::address::{Address, AddressEdit};
use crate::error::{Error, Result};
use crate::record::BookRecord;
use crate::utils::ensure_parent_dir;

/// where the book is stored when no path is given
pub const DEFAULT_BOOK_PATH: &str = "address_book.json";

/// A holder's collection of unique addresses.
///
/// Addresses are only handed out by shared reference, so a stored address
/// cannot change (and change its hash) while it sits in the set. Use
/// [`AddressBook::edit`] to modify one.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    book_holder_name: Option<String>,
    book_holder_id: Option<i64>,
    addresses: HashSet<Address>,
}

impl AddressBook {
    /// an empty book with no holder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book_holder_name(&self) -> Option<&str> {
        self.book_holder_name.as_deref()
    }

    pub fn set_book_holder_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!("setting book holder name to [{}]", name);
        self.book_holder_name = Some(name);
    }

    pub fn book_holder_id(&self) -> Option<i64> {
        self.book_holder_id
    }

    pub fn set_book_holder_id(&mut self, id: i64) {
        debug!("setting book holder id to [{}]", id);
        self.book_holder_id = Some(id);
    }

    /// Add an address, returning `false` if an equal one was already there.
    pub fn add(&mut self, address: Address) -> bool {
        info!("adding address [{}] to address book", address.recipient_name());
        self.addresses.insert(address)
    }

    pub fn remove(&mut self, address: &Address) -> Result<Address> {
        info!("removing address [{}] from address book", address.recipient_name());
        self.addresses.take(address).ok_or(Error::NotFound)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Address> {
        self.addresses.iter().find(|address| address.id() == id)
    }

    pub fn remove_by_id(&mut self, id: &str) -> Result<Address> {
        let address = self.find_by_id(id).cloned().ok_or(Error::NotFound)?;
        self.remove(&address)
    }

    /// Edit the address with the given id.
    ///
    /// The address is taken out of the set, edited and put back. If the
    /// edited value equals another member the two collapse into one.
    pub fn edit(&mut self, id: &str, edit: AddressEdit) -> Result<Address> {
        let mut address = self.remove_by_id(id)?;
        address.edit(edit);
        self.add(address.clone());
        Ok(address)
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.addresses.contains(address)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// iterate in no particular order
    pub fn iter(&self) -> hash_set::Iter<'_, Address> {
        self.addresses.iter()
    }

    /// all addresses ordered by recipient name
    pub fn sorted(&self) -> Vec<&Address> {
        let mut addresses = self.addresses.iter().collect::<Vec<_>>();
        addresses.sort();
        addresses
    }

    /// the `index`-th address ordered by recipient name
    pub fn get(&self, index: usize) -> Option<&Address> {
        self.sorted().get(index).copied()
    }

    /// Same as [`AddressBook::add`]; the index is ignored.
    pub fn set(&mut self, _index: usize, address: Address) -> bool {
        self.add(address)
    }

    /// `<AddressBook name=... total_addresses=N>`
    pub fn summary(&self) -> String {
        format!(
            "<AddressBook name={} total_addresses={}>",
            self.book_holder_name().unwrap_or("..."),
            self.len()
        )
    }

    pub fn to_record(&self) -> BookRecord {
        BookRecord {
            name: self.book_holder_name.clone(),
            id: self.book_holder_id,
            addresses: self.sorted().into_iter().map(Address::to_record).collect(),
        }
    }

    pub fn from_record(record: BookRecord) -> Self {
        let mut book = Self::new();
        if let Some(name) = record.name {
            book.set_book_holder_name(name);
        }
        if let Some(id) = record.id {
            book.set_book_holder_id(id);
        }
        book.extend(record.addresses.into_iter().map(Address::from_record));
        book
    }

    /// Write the book as indented JSON, replacing whatever is at `path`.
    pub fn to_file(&self, path: Option<&Path>) -> Result<()> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_BOOK_PATH));
        ensure_parent_dir(path)?;

        let mut writer = BufWriter::new(File::create(path)?);
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        self.to_record().serialize(&mut serializer)?;
        writer.flush()?;

        debug!("saved [{}] addresses to [{}]", self.len(), path.display());
        Ok(())
    }

    /// Load a book from `path`.
    ///
    /// A missing file is not an error: it gives an empty book.
    pub fn from_file(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_BOOK_PATH));
        if !path.exists() {
            warn!("file [{}] does not exist", path.display());
            return Ok(Self::new());
        }

        debug!("loading address book from [{}]", path.display());
        let reader = BufReader::new(File::open(path)?);
        let record: BookRecord = serde_json::from_reader(reader)?;
        Ok(Self::from_record(record))
    }
}

/// Books are the same book when their holder ids match; contents are not
/// compared. A book without an id equals no book, itself included.
impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.book_holder_id, other.book_holder_id), (Some(a), Some(b)) if a == b)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.book_holder_name().unwrap_or("..."))
    }
}

impl Index<usize> for AddressBook {
    type Output = Address;

    fn index(&self, index: usize) -> &Address {
        self.sorted()[index]
    }
}

impl Extend<Address> for AddressBook {
    fn extend<T: IntoIterator<Item = Address>>(&mut self, iter: T) {
        for address in iter {
            self.add(address);
        }
    }
}

impl FromIterator<Address> for AddressBook {
    fn from_iter<T: IntoIterator<Item = Address>>(iter: T) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Address;
    type IntoIter = hash_set::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::address::AddressField;

    fn address(name: &str) -> Address {
        Address::new(name)
    }

    fn book(names: &[&str]) -> AddressBook {
        names.iter().map(|name| address(name)).collect()
    }

    #[test]
    fn new_book_has_no_holder() {
        let book = AddressBook::new();
        assert_eq!(book.book_holder_name(), None);
        assert_eq!(book.book_holder_id(), None);
        assert!(book.is_empty());
        assert_eq!(book.summary(), "<AddressBook name=... total_addresses=0>");
    }

    #[test]
    fn setting_holder_name_shows_in_summary() {
        let mut book = AddressBook::new();
        book.set_book_holder_name("John Doe");
        assert_eq!(book.summary(), "<AddressBook name=John Doe total_addresses=0>");
        assert_eq!(book.to_string(), "John Doe");
    }

    #[test]
    fn duplicate_add_is_absorbed() {
        let mut book = AddressBook::new();
        assert!(book.add(address("Ritik")));
        assert!(!book.add(address("Ritik")));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn remove_member() {
        let mut book = book(&["Ritik", "John Doe"]);
        let removed = book.remove(&address("Ritik")).unwrap();
        assert_eq!(removed, address("Ritik"));
        assert_eq!(book.len(), 1);
        assert!(!book.contains(&address("Ritik")));
    }

    #[test]
    fn remove_non_member_is_not_found() {
        let mut book = book(&["Ritik"]);
        assert!(matches!(book.remove(&address("Nobody")), Err(Error::NotFound)));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn remove_by_id() {
        let mut book = book(&["Ritik", "John Doe"]);
        let id = address("John Doe").id();
        assert_eq!(book.find_by_id(&id), Some(&address("John Doe")));
        book.remove_by_id(&id).unwrap();
        assert!(matches!(book.remove_by_id(&id), Err(Error::NotFound)));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn edit_reinserts_under_new_value() {
        let mut book = book(&["Ritik"]);
        let id = address("Ritik").id();
        let edited = book
            .edit(&id, AddressEdit::new().set(AddressField::City, "Pune"))
            .unwrap();

        assert_eq!(edited.city(), Some("Pune"));
        assert!(book.contains(&edited));
        assert!(!book.contains(&address("Ritik")));
        assert_eq!(book.find_by_id(&edited.id()), Some(&edited));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn edit_unknown_id_is_not_found() {
        let mut book = book(&["Ritik"]);
        assert!(matches!(book.edit("0", AddressEdit::new()), Err(Error::NotFound)));
    }

    #[rstest]
    #[case(0, "Alice")]
    #[case(1, "Bob")]
    #[case(2, "Carol")]
    fn indexed_access_is_sorted_by_recipient(#[case] index: usize, #[case] expected: &str) {
        let book = book(&["Carol", "Alice", "Bob"]);
        assert_eq!(book.get(index).map(Address::recipient_name), Some(expected));
        assert_eq!(book[index].recipient_name(), expected);
    }

    #[test]
    fn get_out_of_range_is_none() {
        assert_eq!(book(&["Alice"]).get(1), None);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let _ = &book(&["Alice"])[1];
    }

    #[test]
    fn set_ignores_index() {
        let mut book = book(&["Alice", "Bob"]);
        book.set(0, address("Zed"));
        assert_eq!(book.len(), 3);
        assert_eq!(book[0].recipient_name(), "Alice");
        assert_eq!(book[2].recipient_name(), "Zed");
    }

    #[test]
    fn books_compare_by_holder_id_only() {
        let mut left = book(&["Alice"]);
        left.set_book_holder_id(1);
        left.set_book_holder_name("Left");

        let mut right = book(&["Bob", "Carol"]);
        right.set_book_holder_id(1);
        right.set_book_holder_name("Right");
        assert_eq!(left, right);

        right.set_book_holder_id(2);
        assert_ne!(left, right);
    }

    #[test]
    fn books_without_id_are_never_equal() {
        let book = AddressBook::new();
        assert_ne!(book, book.clone());
    }

    #[test]
    fn iteration_visits_every_member() {
        let book = book(&["Alice", "Bob"]);
        let mut names = (&book).into_iter().map(Address::recipient_name).collect::<Vec<_>>();
        names.sort();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[test]
    fn record_round_trip() {
        let mut original = book(&["Ritik", "John Doe"]);
        original.set_book_holder_name("John Doe");
        original.set_book_holder_id(1);

        let restored = AddressBook::from_record(original.to_record());
        assert_eq!(restored.book_holder_name(), Some("John Doe"));
        assert_eq!(restored.book_holder_id(), Some(1));
        assert_eq!(restored.addresses, original.addresses);
    }
}
