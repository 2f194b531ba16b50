//! Web front end for the address book.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | / | list addresses |
//! | GET | /add | empty add form |
//! | POST | /add | validate, add and save, then redirect to `/` |
//! | GET | /delete/{id} | remove by address id, save, redirect to `/` |
//! | GET | /export.csv | download the book as CSV |

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::extract::{Path as UrlPath, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use log::{debug, error};

use crate::book::AddressBook;
use crate::error::Error;
use crate::export::write_csv;

pub mod form;
mod page;

use form::AddressForm;

/// Shared handle to the book, created once at startup and cloned into every
/// request.
#[derive(Clone)]
pub struct AppState {
    book: Arc<Mutex<AddressBook>>,
    book_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(book: AddressBook, book_path: impl Into<PathBuf>) -> Self {
        Self {
            book: Arc::new(Mutex::new(book)),
            book_path: Arc::new(book_path.into()),
        }
    }

    pub fn book(&self) -> MutexGuard<'_, AddressBook> {
        self.book.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn book_path(&self) -> &Path {
        &self.book_path
    }

    fn save(&self, book: &AddressBook) -> Result<(), Error> {
        book.to_file(Some(self.book_path())).map_err(|e| {
            error!("cannot save address book to [{}]: {:?}", self.book_path().display(), e);
            e
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_form).post(add))
        .route("/delete/{id}", get(delete))
        .route("/export.csv", get(export))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::index(&state.book()))
}

async fn add_form() -> Html<String> {
    Html(page::add(&AddressForm::default(), &[]))
}

async fn add(State(state): State<AppState>, Form(form): Form<AddressForm>) -> Response {
    let address = match form.validate() {
        Ok(address) => address,
        Err(missing) => {
            debug!("rejecting address form, missing {:?}", missing);
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(page::add(&form, &missing))).into_response();
        }
    };

    let mut book = state.book();
    book.add(address);
    match state.save(&book) {
        Ok(()) => Redirect::to("/").into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn delete(State(state): State<AppState>, UrlPath(id): UrlPath<String>) -> Response {
    let mut book = state.book();
    match book.remove_by_id(&id) {
        Ok(_) => {
            if state.save(&book).is_err() {
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
        Err(_) => debug!("no address with id [{}]", id),
    }
    Redirect::to("/").into_response()
}

async fn export(State(state): State<AppState>) -> Response {
    let mut buf = Vec::new();
    if let Err(e) = write_csv(&state.book(), &mut buf) {
        error!("cannot export address book: {:?}", e);
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    ([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], buf).into_response()
}
