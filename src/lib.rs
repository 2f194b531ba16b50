//! A personal address book: unique postal addresses owned by a book holder,
//! saved to a JSON file and edited through a small web form.

pub mod address;
pub mod book;
pub mod config;
pub mod error;
pub mod export;
pub mod record;
pub mod web;

mod utils;

pub use address::{Address, AddressEdit, AddressField, Edit};
pub use book::{AddressBook, DEFAULT_BOOK_PATH};
pub use config::Config;
pub use error::{Error, Result};
