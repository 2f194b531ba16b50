use std::fmt::Write;

use crate::address::AddressField;
use crate::book::AddressBook;
use crate::web::form::{AddressForm, REQUIRED};

/// list of every address with a delete link, sorted by recipient name
pub fn index(book: &AddressBook) -> String {
    let mut body = format!(
        "<h1>{}</h1>\n<p><a href=\"/add\">Add address</a> | <a href=\"/export.csv\">Export CSV</a></p>\n",
        escape(book.book_holder_name().unwrap_or("Address Book"))
    );
    if book.is_empty() {
        body.push_str("<p>No addresses yet.</p>\n");
    }
    body.push_str("<ul>\n");
    for address in book.sorted() {
        let _ = writeln!(
            body,
            "<li><pre>{}</pre><a href=\"/delete/{}\">Delete</a></li>",
            escape(&address.to_string()),
            address.id()
        );
    }
    body.push_str("</ul>\n");
    layout("Address Book", &body)
}

/// the add form, refilled with `form` and marking `missing` fields
pub fn add(form: &AddressForm, missing: &[AddressField]) -> String {
    let mut body = String::from("<h1>Add address</h1>\n<form method=\"post\" action=\"/add\">\n");
    for field in AddressField::ALL {
        let required = if REQUIRED.contains(&field) { " required" } else { "" };
        let _ = writeln!(
            body,
            "<p><label for=\"{name}\">{label}</label> <input id=\"{name}\" name=\"{name}\" value=\"{value}\"{required}>",
            name = field.as_str(),
            label = field.label(),
            value = escape(form.value(field)),
        );
        if missing.contains(&field) {
            body.push_str("<span class=\"error\">This field is required.</span>");
        }
        body.push_str("</p>\n");
    }
    body.push_str("<p><input type=\"submit\" value=\"Submit\"></p>\n</form>\n");
    layout("Add address", &body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
