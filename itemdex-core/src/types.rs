//! Item data model.
//!
//! [`RawItem`] is the record shape stored in the catalog source; it is kept
//! as close to the JSON payload as possible. [`ResolvedItem`] is the
//! normalized value object the resolver returns: grade pulled out of the
//! name, feature lines parsed into typed stats, placeholder text cleaned up.
//! Resolved items are derived on demand and never persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::features::{self, Features, StatValue};
use crate::grade;

/// Display class used when a catalog record carries none.
pub const DEFAULT_CLASS: &str = "Genel";

/// A raw item record as stored in the catalog source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawItem {
    /// Unique catalog identifier, never reassigned
    pub id: u32,
    /// Item name, may embed an upgrade grade as `(+N)`
    pub name: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub features: Features,
    /// Free-text description; the literal `"NaN"` means missing
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<ItemImage>,
}

/// An image attached to a catalog record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemImage {
    pub src: String,
}

/// A fully normalized item as returned by the resolver.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedItem {
    pub id: u32,
    /// Name verbatim from the catalog record
    pub name: String,
    pub class: String,
    /// Equipment slot, from the record's category
    pub slot_type: Option<String>,
    /// Upgrade grade extracted from the name
    pub grade: Option<u32>,
    pub stats: HashMap<String, StatValue>,
    pub description: String,
    /// The first image's `src`, if the record has any images
    pub image_path: Option<String>,
}

impl ResolvedItem {
    /// Normalize a raw catalog record into a resolved item.
    pub fn from_raw(raw: &RawItem) -> Self {
        Self {
            id: raw.id,
            name: raw.name.clone(),
            class: raw
                .class
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or(DEFAULT_CLASS)
                .to_string(),
            slot_type: raw.category.clone(),
            grade: grade::extract_grade(&raw.name),
            stats: features::parse_features(&raw.features),
            description: normalize_description(raw.description.as_deref()),
            image_path: raw.images.first().map(|image| image.src.clone()),
        }
    }
}

/// The catalog uses the literal placeholder `"NaN"` for missing descriptions.
fn normalize_description(description: Option<&str>) -> String {
    match description {
        None | Some("NaN") => String::new(),
        Some(text) => text.to_string(),
    }
}

/// Map a stored image path to a servable URL.
///
/// Full URLs and already-rooted `/images/` paths pass through; bare
/// filenames from the catalog JSON are served from `/images/`.
pub fn full_image_url(image_path: &str) -> String {
    if image_path.starts_with("http") || image_path.starts_with("/images/") {
        image_path.to_string()
    } else {
        format!("/images/{image_path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_item() -> RawItem {
        RawItem {
            id: 12,
            name: "Bone Crasher (+7)".into(),
            class: Some("Warrior".into()),
            category: Some("Weapon".into()),
            features: Features::Many(vec![
                "Attack Power: 89".into(),
                "Effective Range: 1-3".into(),
            ]),
            description: Some("A heavy club.".into()),
            images: vec![
                ItemImage {
                    src: "icon-bone-crasher.png".into(),
                },
                ItemImage {
                    src: "icon-bone-crasher-alt.png".into(),
                },
            ],
        }
    }

    #[test]
    fn test_from_raw_full_record() {
        let item = ResolvedItem::from_raw(&raw_item());
        assert_eq!(item.id, 12);
        assert_eq!(item.name, "Bone Crasher (+7)");
        assert_eq!(item.class, "Warrior");
        assert_eq!(item.slot_type.as_deref(), Some("Weapon"));
        assert_eq!(item.grade, Some(7));
        assert_eq!(item.stats.get("attack_power"), Some(&StatValue::Int(89)));
        assert_eq!(item.description, "A heavy club.");
        assert_eq!(item.image_path.as_deref(), Some("icon-bone-crasher.png"));
    }

    #[test]
    fn test_from_raw_defaults() {
        let raw = RawItem {
            id: 1,
            name: "Wooden Shield".into(),
            class: None,
            category: None,
            features: Features::default(),
            description: Some("NaN".into()),
            images: Vec::new(),
        };
        let item = ResolvedItem::from_raw(&raw);
        assert_eq!(item.class, DEFAULT_CLASS);
        assert_eq!(item.slot_type, None);
        assert_eq!(item.grade, None);
        assert!(item.stats.is_empty());
        assert_eq!(item.description, "");
        assert_eq!(item.image_path, None);
    }

    #[test]
    fn test_empty_class_falls_back() {
        let mut raw = raw_item();
        raw.class = Some(String::new());
        assert_eq!(ResolvedItem::from_raw(&raw).class, DEFAULT_CLASS);
    }

    #[test]
    fn test_deserialize_single_feature_string() {
        let json = r#"{
            "id": 3,
            "name": "Scale Mail",
            "features": "Defense: 40",
            "images": [{ "src": "icon-scale.png", "width": 64 }]
        }"#;
        let raw: RawItem = serde_json::from_str(json).unwrap();
        assert_eq!(raw.features.lines(), ["Defense: 40".to_string()]);
        assert_eq!(raw.images[0].src, "icon-scale.png");
    }

    #[test]
    fn test_full_image_url() {
        assert_eq!(
            full_image_url("https://cdn.example/a.png"),
            "https://cdn.example/a.png"
        );
        assert_eq!(full_image_url("/images/a.png"), "/images/a.png");
        assert_eq!(full_image_url("icon-a.png"), "/images/icon-a.png");
    }
}
