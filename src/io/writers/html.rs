use std::path::Path;

use crate::error::Result;

pub const HTML_SNIPPET_FILE_NAME: &str = "html_snippet.txt";

/// Tags to paste into a page `<head>`; paths assume the icons are served from `/`
pub const HTML_SNIPPET: &str = r##"<!-- Favicon & app icons -->
<link rel="icon" href="/favicon.ico" sizes="any">
<link rel="icon" type="image/png" sizes="32x32" href="/favicon-32x32.png">
<link rel="icon" type="image/png" sizes="16x16" href="/favicon-16x16.png">
<link rel="apple-touch-icon" sizes="180x180" href="/apple-touch-icon.png">
<link rel="manifest" href="/site.webmanifest">
<meta name="msapplication-TileColor" content="#000000">
<meta name="msapplication-config" content="/browserconfig.xml">
<meta name="theme-color" content="#000000">
"##;

pub fn write_html_snippet(output: &Path) -> Result<()> {
    std::fs::write(output, HTML_SNIPPET)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::{ICO_FILE_NAME, THEME_COLOR};
    use crate::io::writers::browserconfig::BROWSERCONFIG_FILE_NAME;
    use crate::io::writers::manifest::MANIFEST_FILE_NAME;

    #[test]
    fn snippet_links_generated_files() {
        for name in [
            ICO_FILE_NAME,
            "favicon-16x16.png",
            "favicon-32x32.png",
            "apple-touch-icon.png",
            MANIFEST_FILE_NAME,
            BROWSERCONFIG_FILE_NAME,
        ] {
            assert!(HTML_SNIPPET.contains(&format!("\"/{name}\"")), "missing {name}");
        }
    }

    #[test]
    fn snippet_is_complete_tag_list() {
        let lines: Vec<&str> = HTML_SNIPPET.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "<!-- Favicon & app icons -->");
        assert_eq!(lines[6], r##"<meta name="msapplication-TileColor" content="#000000">"##);
        assert_eq!(lines[8], r##"<meta name="theme-color" content="#000000">"##);
    }

    #[test]
    fn snippet_uses_theme_color() {
        assert_eq!(HTML_SNIPPET.matches(THEME_COLOR).count(), 2);
        assert!(HTML_SNIPPET.ends_with(">\n"));
    }
}
