use std::fs;

use address_book::export::export_csv;
use address_book::{Address, AddressBook, Error};
use serde_json::json;

fn john_doe_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.set_book_holder_name("John Doe");
    book.set_book_holder_id(1);
    book.add(Address::new("Ritik"));
    book
}

#[test]
fn serializes_to_documented_shape() {
    let value = serde_json::to_value(john_doe_book().to_record()).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "John Doe",
            "id": 1,
            "addresses": [{
                "recipient_name": "Ritik",
                "organization_name": null,
                "building_number": null,
                "street_name": null,
                "apartment_number": null,
                "city": null,
                "state": null,
                "postal_code": null,
            }],
        })
    );
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("address_book.json");

    let mut book = john_doe_book();
    book.add(
        Address::builder()
            .recipient_name("John Doe")
            .organization_name("Acme")
            .building_number("123")
            .street_name("Main St")
            .city("Springfield")
            .state("IL")
            .postal_code("62701")
            .build()
            .unwrap(),
    );
    book.to_file(Some(path.as_path())).unwrap();

    let restored = AddressBook::from_file(Some(path.as_path())).unwrap();
    assert_eq!(restored.book_holder_name(), Some("John Doe"));
    assert_eq!(restored.book_holder_id(), Some(1));
    assert_eq!(restored, book);
    assert_eq!(restored.len(), book.len());
    assert!(book.iter().all(|address| restored.contains(address)));
}

#[test]
fn file_is_indented_with_four_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("address_book.json");
    john_doe_book().to_file(Some(path.as_path())).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n    \"name\": \"John Doe\",\n    \"id\": 1,"));
}

#[test]
fn to_file_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("address_book.json");
    john_doe_book().to_file(Some(path.as_path())).unwrap();
    AddressBook::new().to_file(Some(path.as_path())).unwrap();

    let restored = AddressBook::from_file(Some(path.as_path())).unwrap();
    assert!(restored.is_empty());
    assert_eq!(restored.book_holder_id(), None);
}

#[test]
fn missing_file_gives_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let book = AddressBook::from_file(Some(dir.path().join("missing.json").as_path())).unwrap();
    assert!(book.is_empty());
    assert_eq!(book.book_holder_name(), None);
    assert_eq!(book.book_holder_id(), None);
}

#[test]
fn loads_hand_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("address_book.json");
    fs::write(
        &path,
        r#"{"name": "John Doe", "id": 7, "addresses": [
            {"recipient_name": "Ritik", "city": ""},
            {"recipient_name": "Ritik", "city": null},
            {"recipient_name": "Jane", "state": "IL"}
        ]}"#,
    )
    .unwrap();

    let book = AddressBook::from_file(Some(path.as_path())).unwrap();
    assert_eq!(book.book_holder_id(), Some(7));
    assert_eq!(book.len(), 2);
    assert_eq!(book[0].recipient_name(), "Jane");
    assert_eq!(book[1], Address::new("Ritik"));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("address_book.json");

    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(AddressBook::from_file(Some(path.as_path())), Err(Error::Json(_))));

    fs::write(&path, r#"{"name": "John Doe", "addresses": []}"#).unwrap();
    assert!(matches!(AddressBook::from_file(Some(path.as_path())), Err(Error::Json(_))));

    fs::write(&path, r#"{"name": null, "id": null, "addresses": [{"city": "Pune"}]}"#).unwrap();
    assert!(matches!(AddressBook::from_file(Some(path.as_path())), Err(Error::Json(_))));
}

#[test]
fn exports_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("mailboxes.csv");
    export_csv(&john_doe_book(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("recipient_name,organization_name,building_number,street_name,apartment_number,city,state,postal_code")
    );
    assert_eq!(lines.next(), Some("Ritik,,,,,,,"));
    assert_eq!(lines.next(), None);
}
