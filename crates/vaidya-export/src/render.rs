use tera::{Context, Tera};
use vaidya_core::models::report::HealthReport;

use crate::error::ExportError;

/// Built-in report layout, in the Markdown subset [`crate::docx`] understands.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/health_report.md.tera");
const DEFAULT_TEMPLATE_NAME: &str = "health_report.md";

/// Render a Tera template with a HealthReport.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The report fields become the template context variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &HealthReport,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(report)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the report with the built-in layout.
pub fn render_markdown(report: &HealthReport) -> Result<String, ExportError> {
    render_template(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, report)
}
