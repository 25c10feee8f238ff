use std::fmt;
use tracing::warn;

/// Error surfaced by the external template collaborator.
#[derive(Debug)]
pub struct TemplateError {
    pub message: String,
}

impl TemplateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "template error: {}", self.message)
    }
}

impl std::error::Error for TemplateError {}

/// External collaborator that extracts field names from a display template.
///
/// folio treats template syntax as a black box; only the referenced field
/// names matter here, in extraction order.
pub trait TemplateFields: Send + Sync {
    fn fields_referenced_by(&self, template: &str) -> Result<Vec<String>, TemplateError>;
}

/// Inputs to field resolution, borrowed from the option store and metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldSources<'a> {
    pub primary_key: Option<&'a str>,
    pub image_source: Option<&'a str>,
    pub title: Option<&'a str>,
    pub subtitle: Option<&'a str>,
    pub tag: Option<&'a str>,
}

/// Sub-fields requested for the relational image file field.
const IMAGE_SUBFIELDS: [&str; 5] = ["modified_on", "type", "filename_disk", "storage", "id"];

/// Resolve the de-duplicated query field list for the current configuration.
///
/// Groups are concatenated in fixed order: the primary-key field, the five
/// dot-qualified image sub-fields, then fields referenced by the title,
/// subtitle and tag templates. First occurrence wins on duplicates.
pub fn resolve_fields(sources: FieldSources<'_>, templates: &dyn TemplateFields) -> Vec<String> {
    dedup_preserving_order(resolve_fields_raw(sources, templates))
}

/// Field resolution without the de-duplication pass.
///
/// Exposed so hosts migrating from systems that requested duplicate fields
/// can compare exact request shapes.
pub fn resolve_fields_raw(
    sources: FieldSources<'_>,
    templates: &dyn TemplateFields,
) -> Vec<String> {
    let mut fields = Vec::new();

    if let Some(pk) = sources.primary_key {
        fields.push(pk.to_string());
    }

    if let Some(source) = sources.image_source {
        fields.extend(IMAGE_SUBFIELDS.iter().map(|sub| format!("{source}.{sub}")));
    }

    // Template order is fixed: title, then subtitle, then tag. A template the
    // collaborator cannot parse contributes nothing; the rest still resolve.
    for template in [sources.title, sources.subtitle, sources.tag]
        .into_iter()
        .flatten()
    {
        match templates.fields_referenced_by(template) {
            Ok(extracted) => fields.extend(extracted),
            Err(err) => {
                warn!(template, error = %err, "skipping unparseable display template");
            }
        }
    }

    fields
}

fn dedup_preserving_order(fields: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(fields.len());
    for field in fields {
        if !unique.contains(&field) {
            unique.push(field);
        }
    }
    unique
}
