//! [`flow::Platform`] for the Dioxus renderer.

use std::time::Duration;

use dioxus::prelude::*;

/// Timers, clipboard and navigation as seen from a Dioxus component.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct BrowserPlatform {
    on_navigate: EventHandler<String>,
}

impl BrowserPlatform {
    pub fn new(on_navigate: EventHandler<String>) -> Self {
        Self { on_navigate }
    }
}

fn js_string_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

impl flow::Platform for BrowserPlatform {
    async fn sleep(&self, duration: Duration) {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), String> {
        // Sends "" on success, the rejection reason otherwise.
        let js = format!(
            r#"(function() {{
                if (!navigator.clipboard || !navigator.clipboard.writeText) {{
                    dioxus.send("clipboard is not available");
                    return;
                }}
                navigator.clipboard.writeText({text_js})
                    .then(function() {{ dioxus.send(""); }})
                    .catch(function(e) {{ dioxus.send(String(e) || "clipboard write rejected"); }});
            }})();"#,
            text_js = js_string_escape(text),
        );
        let mut eval = document::eval(&js);
        match eval.recv::<String>().await {
            Ok(reason) if reason.is_empty() => Ok(()),
            Ok(reason) => Err(reason),
            Err(e) => Err(e.to_string()),
        }
    }

    fn navigate(&self, path: &str) {
        self.on_navigate.call(path.to_string());
    }
}
