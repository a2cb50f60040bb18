//! Server-rendered HTML pages
//!
//! Every page is a plain function returning a `String`. Anything that came
//! from a user or the store goes through `escape` before it is written.

pub mod delete;
pub mod form;
pub mod list;
pub mod status;

use std::fmt::Write;

pub use delete::delete_page;
pub use form::{person_form, FormMode, FormValues};
pub use list::list_page;
pub use status::{message_page, unavailable_page};

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared document shell.
pub(crate) fn layout(title: &str, body: &str) -> String {
    let mut page = String::new();
    let _ = write!(
        page,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="/style.css">
</head>
<body>
  <main class="container">
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    );
    page
}

/// Render collected error messages as a list, or nothing when empty.
pub(crate) fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut html = String::from("    <div class=\"errors\">\n      <ul>\n");
    for error in errors {
        let _ = writeln!(html, "        <li>{}</li>", escape(error));
    }
    html.push_str("      </ul>\n    </div>\n");
    html
}
