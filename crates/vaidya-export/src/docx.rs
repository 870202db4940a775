use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Footer, PageMargin, Paragraph, Run, RunFonts, Style, StyleType,
};
use tracing::debug;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Build a DOCX health report from rendered Markdown.
///
/// Understands the subset the report template emits:
/// - `#`, `##`, `###` headings
/// - `- item` bullets
/// - `> note` callouts, rendered italic
/// - `**bold**` inline runs
/// - `---` page breaks
///
/// `footer` is repeated at the bottom of every page (the disclaimer).
pub fn generate_docx(
    rendered: &str,
    footer: &str,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let margin = styles.margin_twips();
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size))
        .footer(Footer::new().add_paragraph(footer_paragraph(footer, styles)));

    let mut paragraphs = 0usize;
    for line in rendered.lines() {
        let trimmed = line.trim();
        let paragraph = if trimmed.is_empty() {
            Paragraph::new()
        } else if let Some(text) = trimmed.strip_prefix("### ") {
            heading_paragraph(text, "Heading3", styles)
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            heading_paragraph(text, "Heading2", styles)
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            heading_paragraph(text, "Heading1", styles)
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            bullet_paragraph(text, styles)
        } else if let Some(text) = trimmed.strip_prefix("> ") {
            note_paragraph(text, styles)
        } else if trimmed == "---" {
            Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
        } else {
            body_paragraph(trimmed, styles)
        };
        docx = docx.add_paragraph(paragraph);
        paragraphs += 1;
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    debug!(paragraphs, bytes = bytes.len(), "generated docx");
    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let bullet = body_run("\u{2022} ", styles);
    let mut para = Paragraph::new().align(AlignmentType::Left).add_run(bullet);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn note_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run(text, styles).italic())
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn footer_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().align(AlignmentType::Center).add_run(
        Run::new()
            .add_text(text)
            .size(styles.footer_size * 2)
            .fonts(RunFonts::new().ascii(&styles.body_font)),
    )
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Split `text` into runs, bolding `**...**` spans. An unclosed `**` is
/// kept as literal text.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let after_open = &remaining[start + 2..];
        let Some(end) = after_open.find("**") else {
            break;
        };
        if start > 0 {
            runs.push(body_run(&remaining[..start], styles));
        }
        runs.push(body_run(&after_open[..end], styles).bold());
        remaining = &after_open[end + 2..];
    }

    if !remaining.is_empty() {
        runs.push(body_run(remaining, styles));
    }
    runs
}
