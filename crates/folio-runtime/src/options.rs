use folio_types::{
    DEFAULT_ICON, DEFAULT_ID_SHOW, DEFAULT_IMAGE_FIT, DEFAULT_SIZE, LayoutOptions,
};

/// Typed, defaulted accessors over a persisted [`LayoutOptions`] bag.
///
/// Reads are total: an unset key falls back to its declared default and never
/// fails. Writes set exactly one named field, so sibling keys cannot be
/// dropped by a concurrent-looking sequence of updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionStore {
    bag: LayoutOptions,
}

impl OptionStore {
    pub fn new(bag: LayoutOptions) -> Self {
        Self { bag }
    }

    /// The raw persisted bag, for the host to serialize.
    pub fn bag(&self) -> &LayoutOptions {
        &self.bag
    }

    pub fn into_bag(self) -> LayoutOptions {
        self.bag
    }

    /// Relative sizing unit. No range validation; `size <= 0` is accepted
    /// and left to the renderer.
    pub fn size(&self) -> f64 {
        self.bag.size.unwrap_or(DEFAULT_SIZE)
    }

    pub fn set_size(&mut self, size: f64) {
        self.bag.size = Some(size);
    }

    pub fn icon(&self) -> &str {
        self.bag.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }

    pub fn set_icon(&mut self, icon: impl Into<String>) {
        self.bag.icon = Some(icon.into());
    }

    pub fn title(&self) -> Option<&str> {
        self.bag.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.bag.title = title;
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.bag.subtitle.as_deref()
    }

    pub fn set_subtitle(&mut self, subtitle: Option<String>) {
        self.bag.subtitle = subtitle;
    }

    pub fn tag(&self) -> Option<&str> {
        self.bag.tag.as_deref()
    }

    pub fn set_tag(&mut self, tag: Option<String>) {
        self.bag.tag = tag;
    }

    pub fn image_source(&self) -> Option<&str> {
        self.bag.image_source.as_deref()
    }

    pub fn set_image_source(&mut self, image_source: Option<String>) {
        self.bag.image_source = image_source;
    }

    pub fn image_fit(&self) -> &str {
        self.bag.image_fit.as_deref().unwrap_or(DEFAULT_IMAGE_FIT)
    }

    pub fn set_image_fit(&mut self, image_fit: impl Into<String>) {
        self.bag.image_fit = Some(image_fit.into());
    }

    pub fn id_show(&self) -> bool {
        self.bag.id_show.unwrap_or(DEFAULT_ID_SHOW)
    }

    pub fn set_id_show(&mut self, id_show: bool) {
        self.bag.id_show = Some(id_show);
    }
}
