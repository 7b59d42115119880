//! Web layer for the browser-facing UI.
//!
//! Serves the index page and the shorten form endpoint. Uses Askama
//! templates for server-side rendering; the form posts via HTMX and the
//! response fragment is injected into the page.

pub mod handlers;
pub mod routes;
