//! Output formatting for downloaded content.
//!
//! Builds filename-safe slugs, timestamped download filenames, and the
//! plain-text document wrapping generated content with its metadata.

use chrono::{DateTime, Utc};

use postforge_types::brief::ContentBrief;

/// Title line at the top of every download document.
const DOWNLOAD_TITLE: &str = "Social Media Content Generator Output";

/// Fallback filename base when every slug component is empty.
const FALLBACK_BASE: &str = "social-content";

/// Convert freeform text to a simple filename-safe slug.
///
/// Trims, lowercases, replaces `/` with `-`, and collapses whitespace
/// runs into single hyphens. Leading/trailing hyphens are stripped so a
/// separator-only input slugs to the empty string. Idempotent: slugging
/// an already-slugged string returns it unchanged.
pub fn slugify(value: &str) -> String {
    let cleaned = value.trim().to_lowercase().replace('/', "-");
    let joined = cleaned.split_whitespace().collect::<Vec<_>>().join("-");
    joined.trim_matches('-').to_string()
}

/// Build a descriptive filename for downloaded content.
///
/// Slugs the three fields, drops empty slugs, and joins the survivors
/// with hyphens (falling back to `social-content` when all are empty),
/// then appends a UTC `YYYYMMDD-HHMMSS` timestamp and `.txt`. The result
/// is never empty and never contains path separators.
pub fn build_filename(business_type: &str, platform: &str, content_type: &str) -> String {
    build_filename_at(business_type, platform, content_type, Utc::now())
}

/// [`build_filename`] with an explicit timestamp, for deterministic tests.
pub fn build_filename_at(
    business_type: &str,
    platform: &str,
    content_type: &str,
    timestamp: DateTime<Utc>,
) -> String {
    let parts = [
        slugify(business_type),
        slugify(platform),
        slugify(content_type),
    ];
    let base = parts
        .iter()
        .filter(|p| !p.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("-");
    let base = if base.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        base
    };
    format!("{base}-{}.txt", timestamp.format("%Y%m%d-%H%M%S"))
}

/// Wrap generated content with its metadata for plain-text download.
///
/// Layout: title line, separator, one `Key: Value` line per metadata
/// entry with a non-empty value (insertion order preserved, empty values
/// omitted entirely), a blank line, a "Generated Content" header with
/// separator, a blank line, the trimmed content, and a trailing newline.
pub fn wrap_content_for_download(content: &str, meta: &[(&str, &str)]) -> String {
    let mut lines: Vec<String> = vec![
        DOWNLOAD_TITLE.to_string(),
        "----------------------------------".to_string(),
    ];

    for (key, value) in meta {
        if !value.is_empty() {
            lines.push(format!("{key}: {value}"));
        }
    }

    lines.extend([
        String::new(),
        "Generated Content".to_string(),
        "-----------------".to_string(),
        String::new(),
        content.trim().to_string(),
        String::new(),
    ]);

    lines.join("\n")
}

/// Metadata lines describing a brief, in download-document order.
///
/// Values use the human-readable labels the form showed, not the
/// lowercase prompt forms.
pub fn brief_metadata(brief: &ContentBrief) -> [(&'static str, &str); 5] {
    [
        ("Business type", brief.business_type.trim()),
        ("Target audience", brief.target_audience.trim()),
        ("Tone", brief.tone.label()),
        ("Platform", brief.platform.label()),
        ("Content type", brief.content_type.label()),
    ]
}
