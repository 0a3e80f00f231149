//! Page rendering with minijinja
//!
//! Templates are compiled into the binary. Names end in `.html`, so
//! minijinja HTML-escapes every interpolated value.

use minijinja::{context, Environment};

use crate::db::Message;

const INDEX: &str = "index.html";
const ERROR: &str = "error.html";

/// Compiled page templates
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Load the embedded templates. Fails only on a template syntax error.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX, include_str!("../../templates/index.html"))?;
        env.add_template(ERROR, include_str!("../../templates/error.html"))?;
        Ok(Self { env })
    }

    /// Render the message list page
    pub fn render_index(&self, messages: &[Message]) -> Result<String, minijinja::Error> {
        let messages: Vec<&str> = messages.iter().map(Message::text).collect();
        self.env
            .get_template(INDEX)?
            .render(context! { messages => messages })
    }

    /// Render a diagnostic error page (debug mode only)
    pub fn render_error(&self, status: &str, detail: &str) -> Result<String, minijinja::Error> {
        self.env
            .get_template(ERROR)?
            .render(context! { status => status, detail => detail })
    }
}
