use std::io;
use std::path::Path;

use log::info;

use crate::address::AddressField;
use crate::book::AddressBook;
use crate::error::Result;
use crate::utils::ensure_parent_dir;

/// write the book as a CSV mailing list, sorted by recipient name
pub fn export_csv(book: &AddressBook, save_path: impl AsRef<Path>) -> Result<()> {
    let save_path = save_path.as_ref();
    ensure_parent_dir(save_path)?;
    let file = std::fs::File::create(save_path)?;
    write_csv(book, file)?;
    info!("exported [{}] addresses to [{}]", book.len(), save_path.display());
    Ok(())
}

/// The header row is always written, even for an empty book.
pub fn write_csv<W: io::Write>(book: &AddressBook, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(AddressField::ALL.iter().map(AddressField::as_str))?;
    for address in book.sorted() {
        wtr.serialize(address.to_record())?;
    }
    wtr.flush()?;
    Ok(())
}
