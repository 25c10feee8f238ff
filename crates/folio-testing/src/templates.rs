use folio_engine::{TemplateError, TemplateFields};

/// `{field}` placeholder extraction, standing in for the external template
/// collaborator. An opening brace without a matching close is an error so
/// fail-soft paths can be exercised.
#[derive(Debug, Default)]
pub struct BraceTemplates;

impl TemplateFields for BraceTemplates {
    fn fields_referenced_by(&self, template: &str) -> Result<Vec<String>, TemplateError> {
        let mut fields = Vec::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}') else {
                return Err(TemplateError::new(format!(
                    "unclosed placeholder in template: {template}"
                )));
            };
            fields.push(rest[open + 1..open + close].to_string());
            rest = &rest[open + close + 1..];
        }

        Ok(fields)
    }
}
