//! In-memory admin page built from the embedded HTML template
//!
//! The renderer runs against this document on the server; the result is
//! serialised back to HTML, with alerts turned into inline scripts.

use rust_embed::Embed;
use tracing::warn;

use super::page::{
    AlertLog, Container, Dialog, ErrorHandler, GENERIC_ERROR_MESSAGE, PageHandles, Preloader,
};

#[derive(Embed)]
#[folder = "ui/"]
struct ShellAssets;

const TEMPLATE_NAME: &str = "index.html";

const FALLBACK_TEMPLATE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/ui/index.html"));

fn template() -> String {
    match ShellAssets::get(TEMPLATE_NAME) {
        Some(content) => String::from_utf8_lossy(&content.data).into_owned(),
        None => {
            warn!("Embedded {} missing, using compiled-in copy", TEMPLATE_NAME);
            FALLBACK_TEMPLATE.to_string()
        }
    }
}

/// The `preloader` element's class list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellPreloader {
    pub classes: Vec<String>,
}

impl Default for ShellPreloader {
    fn default() -> Self {
        Self {
            classes: vec!["progress".to_string(), "active".to_string()],
        }
    }
}

impl Preloader for ShellPreloader {
    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

/// The `app` element
#[derive(Default)]
pub struct ShellContainer {
    html: String,
    error_handler: Option<ErrorHandler>,
}

impl ShellContainer {
    pub fn has_error_handler(&self) -> bool {
        self.error_handler.is_some()
    }
}

impl Container for ShellContainer {
    fn inner_html(&self) -> &str {
        &self.html
    }

    fn set_inner_html(&mut self, html: String) {
        self.html = html;
    }

    fn append_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    fn set_error_handler(&mut self, handler: ErrorHandler) {
        self.error_handler = Some(handler);
    }

    fn dispatch_error(&self, dialog: &mut dyn Dialog) -> bool {
        match &self.error_handler {
            Some(handler) => {
                handler(dialog);
                true
            }
            None => false,
        }
    }
}

/// Admin page document
#[derive(Default)]
pub struct ShellDocument {
    pub preloader: Option<ShellPreloader>,
    pub app: ShellContainer,
    pub alerts: AlertLog,
}

impl ShellDocument {
    /// A fresh page: active preloader, empty container
    pub fn new() -> Self {
        Self {
            preloader: Some(ShellPreloader::default()),
            ..Default::default()
        }
    }

    /// Borrow the document as renderer handles
    pub fn handles<'a>(&'a mut self, host: &'a str) -> PageHandles<'a> {
        PageHandles::new(
            self.preloader.as_mut().map(|p| p as &mut dyn Preloader),
            Some(&mut self.app as &mut dyn Container),
            &mut self.alerts,
            host,
        )
    }

    /// Serialise to HTML
    pub fn to_html(&self) -> String {
        let preloader_class = self
            .preloader
            .as_ref()
            .map(|p| p.classes.join(" "))
            .unwrap_or_default();

        let mut scripts = String::new();
        if self.app.has_error_handler() {
            scripts.push_str(&format!(
                "<script>document.getElementById(\"app\").onerror = function () {{ alert({}); }};</script>\n",
                script_string(GENERIC_ERROR_MESSAGE)
            ));
        }
        for message in &self.alerts.messages {
            scripts.push_str(&format!("<script>alert({});</script>\n", script_string(message)));
        }

        // 容器内容最后拼接，其中的占位符文本不再展开
        let page = template().replace("%PRELOADER_CLASS%", &preloader_class);
        match page.split_once("%APP_CONTENT%") {
            Some((head, tail)) => format!(
                "{}{}{}",
                head,
                self.app.inner_html(),
                tail.replace("%SCRIPTS%", &scripts)
            ),
            None => page.replace("%SCRIPTS%", &scripts),
        }
    }
}

/// JSON string literal safe inside a `<script>` element
fn script_string(message: &str) -> String {
    serde_json::Value::String(message.to_string())
        .to_string()
        .replace("</", "<\\/")
}
