use serde::{Deserialize, Serialize};

/// Default relative card/row sizing unit.
pub const DEFAULT_SIZE: f64 = 1.0;

/// Default icon shown for items without an image.
pub const DEFAULT_ICON: &str = "box";

/// Default fit mode for item images.
pub const DEFAULT_IMAGE_FIT: &str = "cover";

/// Whether item ids are visible by default.
pub const DEFAULT_ID_SHOW: bool = true;

/// Persisted display configuration for a collection list view.
///
/// Every field is optional: `None` means "unset, read falls back to the
/// declared default". The host owns persistence of this struct; unset fields
/// are omitted on serialization so a round-trip never invents values, and
/// writes go through named fields so one key can never clobber another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Relative sizing unit for cards/rows. Out-of-range values are accepted
    /// and left to the renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,

    /// Icon name shown for items without an image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Display template for the item title, e.g. `"{name} ({year})"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Display template for the item subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Display template for the item tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Name of the relational field holding the item image file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_source: Option<String>,

    /// Image fit mode, a renderer-defined string (`"cover"`, `"contain"`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_fit: Option<String>,

    /// Whether the item id is shown alongside the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_show: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_are_omitted_on_serialization() {
        let options = LayoutOptions {
            size: Some(2.0),
            ..Default::default()
        };

        let json = serde_json::to_value(&options).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["size"], 2.0);
    }

    #[test]
    fn round_trip_preserves_unset_state() {
        let options = LayoutOptions {
            title: Some("{name}".to_string()),
            id_show: Some(false),
            ..Default::default()
        };

        let json = serde_json::to_string(&options).unwrap();
        let back: LayoutOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
        assert!(back.size.is_none());
        assert!(back.image_source.is_none());
    }
}
