use tracing::{debug, info, warn};

use super::page::{Container, GENERIC_ERROR_MESSAGE, PageHandles};
use super::record::Payload;
use super::transport::ListTransport;
use super::RenderError;

/// What a completed run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// `/all` answered 200 and this many rows were appended
    Rendered { rows: usize },
    /// `/all` answered with another status; the alert was shown, no rows
    Alerted { status: u16 },
}

/// Fills the `app` container with one editable row per short URL
pub struct AdminListRenderer<T: ListTransport> {
    transport: T,
}

impl<T: ListTransport> AdminListRenderer<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Register the container's error handler
    pub fn attach(app: &mut dyn Container) {
        app.set_error_handler(Box::new(|dialog| dialog.alert(GENERIC_ERROR_MESSAGE)));
    }

    /// Attach, then run the page-ready steps
    ///
    /// Without an `app` element the handler is not attached; the run only
    /// fails once a row has to be appended.
    pub async fn run(&self, page: &mut PageHandles<'_>) -> Result<RenderOutcome, RenderError> {
        match page.app.as_deref_mut() {
            Some(app) => Self::attach(app),
            None => warn!("element 'app' not found, error handler not attached"),
        }
        self.on_ready(page).await
    }

    /// Dismiss the preloader, fetch `/all`, append the rows
    pub async fn on_ready(&self, page: &mut PageHandles<'_>) -> Result<RenderOutcome, RenderError> {
        if let Some(preloader) = page.preloader.as_deref_mut() {
            preloader.remove_class("active");
        }

        let response = self.transport.post("/all", "").await?;
        debug!(
            "/all via {} transport -> {} ({} bytes)",
            self.transport.name(),
            response.status,
            response.body.len()
        );

        if response.status != 200 {
            warn!("/all answered {}", response.status);
            page.dialog
                .alert(&format!("{}{}", response.status, response.body));
            return Ok(RenderOutcome::Alerted {
                status: response.status,
            });
        }

        let value: serde_json::Value = serde_json::from_str(&response.body)
            .map_err(|e| RenderError::InvalidJson(e.to_string()))?;
        let payload = Payload::classify(&value)?;
        if payload.is_empty() {
            info!("Admin list rendered 0 rows");
            return Ok(RenderOutcome::Rendered { rows: 0 });
        }

        let app = page
            .app
            .as_deref_mut()
            .ok_or(RenderError::MissingContainer)?;

        let mut rows = String::new();
        for index in 0..payload.len() {
            match payload.row(index) {
                Ok(fields) => rows.push_str(&fields.to_row_html(page.host)),
                Err(e) => {
                    // 已生成的行保留在页面上
                    if !rows.is_empty() {
                        app.append_html(&rows);
                    }
                    return Err(e);
                }
            }
        }
        if !rows.is_empty() {
            app.append_html(&rows);
        }

        info!("Admin list rendered {} rows", payload.len());
        Ok(RenderOutcome::Rendered {
            rows: payload.len(),
        })
    }
}
