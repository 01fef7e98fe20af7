//! URL payload templating: `{picture}`, `{count}` and `{url}` substitution.

use alloc::string::{String, ToString};

/// Session values available to the `prefix_url` template.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlVars<'a> {
    /// Last picture's file name.
    pub picture: &'a str,
    /// Number of captures taken so far.
    pub count: u64,
    /// Last picture's upload URL.
    pub url: &'a str,
}

/// Expand a `prefix_url` template into the QR payload string.
///
/// Recognized placeholders are substituted; any other `{...}` run (and any
/// unterminated `{`) is copied through verbatim.
pub fn expand_template(template: &str, vars: &UrlVars<'_>) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];

        let Some(end) = rest.find('}') else {
            break;
        };
        match &rest[1..end] {
            "picture" => out.push_str(vars.picture),
            "count" => out.push_str(&vars.count.to_string()),
            "url" => out.push_str(vars.url),
            _ => out.push_str(&rest[..=end]),
        }
        rest = &rest[end + 1..];
    }

    out.push_str(rest);
    out
}
