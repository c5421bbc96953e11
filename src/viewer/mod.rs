use crate::components::ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::config::EnvConfig;
use leptos::prelude::*;

/// Schemes that would execute in the app's own origin if framed directly.
const SCRIPT_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// The URL the embed frame should load for `link`, or `None` when the link
/// must not be framed.
///
/// The link is passed through untouched unless a viewer endpoint is
/// configured, in which case it is percent-encoded onto the end of it and
/// never reaches the frame as a URL of its own.
pub(crate) fn viewer_src(config: &EnvConfig, link: &str) -> Option<String> {
    match config.viewer_url.as_deref() {
        Some(prefix) => Some(format!("{}{}", prefix, urlencoding::encode(link))),
        None if has_script_scheme(link) => None,
        None => Some(link.to_string()),
    }
}

// Browsers drop whitespace and control characters around and inside the
// scheme, so compare on the stripped, lower-cased form.
fn has_script_scheme(link: &str) -> bool {
    let normalized: String = link
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    SCRIPT_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}

/// Embeds whatever the selected ticket link points at. Nothing is fetched or
/// inspected here; the browser frame owns rendering.
#[component]
pub(crate) fn TicketViewer(#[prop(into)] link: Signal<Option<String>>) -> impl IntoView {
    let config = expect_context::<EnvConfig>();

    move || {
        link.get().map(|l| {
            let frame = match viewer_src(&config, &l) {
                Some(src) => view! {
                    <iframe
                        src=src
                        title="Ticket preview"
                        class="h-[600px] w-full rounded-lg border"
                    />
                }
                .into_any(),
                None => view! {
                    <p class="text-sm text-blue-600">"This link can't be previewed here."</p>
                }
                .into_any(),
            };

            view! {
                <Card class="mt-6">
                    <CardHeader>
                        <CardTitle class="text-blue-700">"Ticket Preview"</CardTitle>
                        <CardDescription class="truncate max-w-full">{l}</CardDescription>
                    </CardHeader>
                    <CardContent>{frame}</CardContent>
                </Card>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_src_passthrough_without_endpoint() {
        let cfg = EnvConfig::default();
        assert_eq!(
            viewer_src(&cfg, "https://drive.example/t.pdf").as_deref(),
            Some("https://drive.example/t.pdf")
        );
        // Arbitrary text is handed over as-is.
        assert_eq!(viewer_src(&cfg, "my tickets").as_deref(), Some("my tickets"));
    }

    #[test]
    fn test_viewer_src_encodes_link_onto_endpoint() {
        let cfg = EnvConfig::from_values(
            None,
            Some("https://docs.google.com/viewer?embedded=true&url=".to_string()),
        );
        assert_eq!(
            viewer_src(&cfg, "https://x.example/a b.pdf?x=1").as_deref(),
            Some("https://docs.google.com/viewer?embedded=true&url=https%3A%2F%2Fx.example%2Fa%20b.pdf%3Fx%3D1")
        );
    }

    #[test]
    fn test_script_links_are_not_framed() {
        let cfg = EnvConfig::default();
        for link in [
            "javascript:alert(1)",
            "  JavaScript:alert(1)",
            "java\tscript:alert(1)",
            "data:text/html,<script>alert(1)</script>",
            "vbscript:msgbox(1)",
        ] {
            assert!(viewer_src(&cfg, link).is_none(), "{link}");
        }
    }

    #[test]
    fn test_script_links_behind_endpoint_are_encoded() {
        let cfg = EnvConfig::from_values(None, Some("https://viewer.example/?u=".to_string()));
        assert_eq!(
            viewer_src(&cfg, "javascript:x").as_deref(),
            Some("https://viewer.example/?u=javascript%3Ax")
        );
    }
}
