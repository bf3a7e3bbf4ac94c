//! Admin list page
//!
//! `AdminListRenderer` dismisses the preloader, fetches every record with a
//! single `POST /all` and appends one edit/delete/open row per record to the
//! `app` container.

mod page;
mod record;
mod render;
mod shell;
mod transport;

use std::fmt;

pub use page::{
    AlertLog, Container, Dialog, ErrorHandler, GENERIC_ERROR_MESSAGE, PageHandles, Preloader,
    StderrDialog,
};
pub use record::{Payload, RowFields, js_display};
pub use render::{AdminListRenderer, RenderOutcome};
pub use shell::{ShellContainer, ShellDocument, ShellPreloader};
pub use transport::{
    ListTransport, RawResponse, ServiceTransport, StaticTransport, UreqTransport,
    all_links_response,
};

/// Failures the renderer does not recover from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No `app` element on the page
    MissingContainer,
    /// The request never produced a response
    Transport(String),
    /// A 200 body that is not JSON
    InvalidJson(String),
    /// The payload itself is `null`
    NullPayload,
    /// Element `index` of the payload is `null` or absent
    NullRecord { index: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingContainer => write!(f, "element 'app' not found"),
            RenderError::Transport(msg) => write!(f, "request to /all failed: {}", msg),
            RenderError::InvalidJson(msg) => write!(f, "invalid JSON from /all: {}", msg),
            RenderError::NullPayload => write!(f, "cannot read rows of null"),
            RenderError::NullRecord { index } => {
                write!(f, "cannot read fields of record {}: null", index)
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Run the renderer against a fresh shell and return the serialised page
///
/// A render failure still yields the page as far as it got.
pub async fn render_page<T: ListTransport>(
    renderer: &AdminListRenderer<T>,
    host: &str,
) -> (String, Result<RenderOutcome, RenderError>) {
    let mut doc = ShellDocument::new();
    let outcome = {
        let mut handles = doc.handles(host);
        renderer.run(&mut handles).await
    };
    (doc.to_html(), outcome)
}
