//! Page handles the list renderer works against
//!
//! The renderer never touches a concrete document: it receives a preloader,
//! a container, an alert sink and the page host.

/// Message shown when an error event reaches the container
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Callback run when an error event reaches the container
pub type ErrorHandler = Box<dyn Fn(&mut dyn Dialog) + Send + Sync>;

/// Blocking alert sink
pub trait Dialog {
    fn alert(&mut self, message: &str);
}

/// The `preloader` element
pub trait Preloader {
    fn remove_class(&mut self, class: &str);
}

/// The `app` element
pub trait Container {
    fn inner_html(&self) -> &str;

    fn set_inner_html(&mut self, html: String);

    /// Append markup after the existing content
    fn append_html(&mut self, html: &str) {
        let mut content = self.inner_html().to_string();
        content.push_str(html);
        self.set_inner_html(content);
    }

    fn set_error_handler(&mut self, handler: ErrorHandler);

    /// Deliver an error event; returns false when no handler is registered
    fn dispatch_error(&self, dialog: &mut dyn Dialog) -> bool;
}

/// Everything the renderer needs from the page
pub struct PageHandles<'a> {
    pub preloader: Option<&'a mut dyn Preloader>,
    pub app: Option<&'a mut dyn Container>,
    pub dialog: &'a mut dyn Dialog,
    pub host: &'a str,
}

impl<'a> PageHandles<'a> {
    pub fn new(
        preloader: Option<&'a mut dyn Preloader>,
        app: Option<&'a mut dyn Container>,
        dialog: &'a mut dyn Dialog,
        host: &'a str,
    ) -> Self {
        Self {
            preloader,
            app,
            dialog,
            host,
        }
    }
}

/// Alerts collected in order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AlertLog {
    pub messages: Vec<String>,
}

impl Dialog for AlertLog {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Alerts written to stderr, for the `render` command
#[derive(Debug, Default)]
pub struct StderrDialog {
    pub shown: usize,
}

impl Dialog for StderrDialog {
    fn alert(&mut self, message: &str) {
        use colored::Colorize;

        self.shown += 1;
        eprintln!("{} {}", "[ALERT]".yellow().bold(), message);
    }
}
