use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::core::params::{PNG_TARGETS, THEME_COLOR};
use crate::error::Result;

pub const MANIFEST_FILE_NAME: &str = "site.webmanifest";

/// Icon sizes advertised to installing browsers
const MANIFEST_ICON_SIZES: [u32; 2] = [192, 512];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Web app manifest; field order is the serialized key order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteManifest {
    pub name: String,
    pub short_name: String,
    pub icons: Vec<ManifestIcon>,
    pub theme_color: String,
    pub background_color: String,
    pub display: String,
}

impl SiteManifest {
    pub fn for_brand(brand: &str) -> Self {
        let icons = PNG_TARGETS
            .iter()
            .filter(|t| MANIFEST_ICON_SIZES.contains(&t.size))
            .map(|t| ManifestIcon {
                src: t.file_name(),
                sizes: format!("{}x{}", t.size, t.size),
                mime_type: "image/png".to_string(),
            })
            .collect();

        Self {
            name: brand.to_string(),
            short_name: brand.to_string(),
            icons,
            theme_color: THEME_COLOR.to_string(),
            background_color: THEME_COLOR.to_string(),
            display: "standalone".to_string(),
        }
    }

    /// Pretty JSON with two-space indentation and no trailing newline
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn write_manifest(output: &Path, brand: &str) -> Result<()> {
    let json = SiteManifest::for_brand(brand).to_json()?;
    std::fs::write(output, json.as_bytes())?;
    info!("Wrote manifest for brand {:?}: {:?}", brand, output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_lists_android_icons() {
        let manifest = SiteManifest::for_brand("Acme");
        let srcs: Vec<_> = manifest.icons.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(
            srcs,
            vec!["android-chrome-192x192.png", "android-chrome-512x512.png"]
        );
        assert_eq!(manifest.icons[0].sizes, "192x192");
        assert_eq!(manifest.icons[1].sizes, "512x512");
        assert!(manifest.icons.iter().all(|i| i.mime_type == "image/png"));
    }

    #[test]
    fn manifest_bytes_are_stable() {
        let expected = r##"{
  "name": "Curelith",
  "short_name": "Curelith",
  "icons": [
    {
      "src": "android-chrome-192x192.png",
      "sizes": "192x192",
      "type": "image/png"
    },
    {
      "src": "android-chrome-512x512.png",
      "sizes": "512x512",
      "type": "image/png"
    }
  ],
  "theme_color": "#000000",
  "background_color": "#000000",
  "display": "standalone"
}"##;
        assert_eq!(SiteManifest::for_brand("Curelith").to_json().unwrap(), expected);
    }

    #[test]
    fn json_keys_keep_declared_order() {
        let json = SiteManifest::for_brand("Acme").to_json().unwrap();
        let order = [
            "\"name\"",
            "\"short_name\"",
            "\"icons\"",
            "\"theme_color\"",
            "\"background_color\"",
            "\"display\"",
        ];
        let positions: Vec<usize> = order.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
        assert!(json.contains("\"type\": \"image/png\""));
        assert!(json.starts_with("{\n  \"name\": \"Acme\""));
        assert!(!json.ends_with('\n'));
    }

    #[test]
    fn brand_is_json_escaped() {
        let json = SiteManifest::for_brand("Say \"hi\"").to_json().unwrap();
        let parsed: SiteManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "Say \"hi\"");
        assert_eq!(parsed.short_name, "Say \"hi\"");
    }
}
