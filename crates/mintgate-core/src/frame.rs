//! Frame documents: the HTML card a Farcaster client renders after a tap.
//!
//! Every frame this service emits has exactly one button. The client shows
//! the label and, when tapped, POSTs the signed action to `post_url`.

use crate::stage::FlowStage;

pub const FRAME_VERSION: &str = "vNext";

/// Path of the action handler, relative to the public base URL.
pub const FRAME_PATH: &str = "/api/frame";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub label: String,
    pub post_url: String,
}

impl Frame {
    pub fn new(label: impl Into<String>, post_url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            post_url: post_url.into(),
        }
    }

    /// Render the frame as a standalone HTML document.
    pub fn render(&self) -> String {
        let label = escape_html(&self.label);
        let post_url = escape_html(&self.post_url);
        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n  \
             <meta property=\"fc:frame\" content=\"{FRAME_VERSION}\" />\n  \
             <meta property=\"fc:frame:button:1\" content=\"{label}\" />\n  \
             <meta property=\"fc:frame:post_url\" content=\"{post_url}\" />\n\
             </head>\n\
             <body>{label}</body>\n\
             </html>"
        )
    }
}

/// Build `{base_url}/api/frame?type={stage}`.
pub fn post_url(base_url: &str, stage: FlowStage) -> String {
    format!(
        "{}{FRAME_PATH}?type={}",
        base_url.trim_end_matches('/'),
        stage.as_str()
    )
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
