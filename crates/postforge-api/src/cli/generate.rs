//! `postforge generate` command handler.

use std::path::PathBuf;

use postforge_core::format::{brief_metadata, build_filename, wrap_content_for_download};
use postforge_types::brief::ContentBrief;
use postforge_types::error::ErrorKind;

use crate::state::AppState;

/// Run a single generate action and print or save the result.
pub async fn generate(
    state: &AppState,
    brief: ContentBrief,
    save: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let generated = match state.generator.generate(&brief).await {
        Ok(generated) => generated,
        Err(err) => {
            let hint = match err.kind() {
                ErrorKind::Auth => "Check your GROQ_API_KEY and try again.",
                ErrorKind::Network => "Check your network connection and try again.",
                ErrorKind::Other => "Adjust the brief and try again.",
            };
            eprintln!();
            eprintln!(
                "  {} Failed to generate content: {err}",
                console::style("✗").red()
            );
            eprintln!("  {}", console::style(hint).dim());
            return Err(err.into());
        }
    };

    let filename = build_filename(
        &brief.business_type,
        brief.platform.label(),
        brief.content_type.label(),
    );

    if let Some(dir) = save {
        let document = wrap_content_for_download(&generated.content, &brief_metadata(&brief));
        tokio::fs::create_dir_all(&dir).await?;
        let path = dir.join(&filename);
        tokio::fs::write(&path, document).await?;

        if json {
            let saved = serde_json::json!({
                "path": path.display().to_string(),
                "filename": filename,
                "model": generated.model,
            });
            println!("{}", serde_json::to_string_pretty(&saved)?);
        } else {
            println!();
            println!(
                "  {} Saved to {}",
                console::style("✓").green(),
                console::style(path.display()).cyan()
            );
            println!();
        }
        return Ok(());
    }

    if json {
        let out = serde_json::json!({
            "content": generated.content,
            "model": generated.model,
            "filename": filename,
            "usage": generated.usage,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!();
        println!("{}", generated.content);
        println!();
        println!(
            "  {}",
            console::style(format!(
                "model: {} | tokens: {} in / {} out",
                generated.model, generated.usage.input_tokens, generated.usage.output_tokens
            ))
            .dim()
        );
    }

    Ok(())
}
