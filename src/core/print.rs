//! Print invoker: materialize the preview as an HTML document and hand it
//! to the platform for printing

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

/// Convert the preview markup to a minimal standalone HTML document.
///
/// The `onload` hook asks the host to open its print dialog as soon as the
/// surface renders.
pub fn to_html_document(markup: &str) -> String {
    let parser = pulldown_cmark::Parser::new(markup);
    let mut body = String::new();
    pulldown_cmark::html::push_html(&mut body, parser);

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>Print</title></head>\n\
         <body onload=\"window.print()\">\n{body}</body>\n\
         </html>\n"
    )
}

/// Write the preview markup to a fresh HTML file and open it with the
/// platform handler, which presents the print dialog.
///
/// Failures are returned to the caller so the UI can surface them as a
/// non-fatal notice instead of swallowing them.
pub fn print_preview(markup: &str) -> Result<PathBuf> {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let path = std::env::temp_dir().join(format!("docforge-print-{stamp}.html"));

    std::fs::write(&path, to_html_document(markup))
        .with_context(|| format!("Failed to write print surface: {}", path.display()))?;

    open::that(&path)
        .with_context(|| format!("Failed to open print surface: {}", path.display()))?;

    tracing::info!("Opened print surface: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wraps_converted_markup() {
        let html = to_html_document("## Heading\n\n- a\n- b\n");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h2>Heading</h2>"));
        assert!(html.contains("<li>a</li>"));
        assert!(html.contains("<li>b</li>"));
        assert!(html.contains("window.print()"));
    }

    #[test]
    fn test_empty_markup_still_yields_a_document() {
        let html = to_html_document("");
        assert!(html.contains("<body"));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn test_raw_html_passes_through_unescaped() {
        // Catalog content is trusted; the legacy behavior of not escaping
        // interpolated text is preserved.
        let html = to_html_document("<b>bold</b>\n");
        assert!(html.contains("<b>bold</b>"));
    }
}
