//! Commands that call the generative model.

use std::path::Path;

use anyhow::{bail, Context};
use bsn_core::Seed;
use bsn_intel::{parse_report, GeminiProvider, IntelConfig, Narrative, Narrator, ReportLine, Subject};
use log::{info, warn};

/// Environment config, with `--api-key` taking precedence.
pub fn resolve_config(api_key: Option<String>) -> IntelConfig {
    let config = IntelConfig::from_env();
    match api_key {
        Some(key) if !key.trim().is_empty() => config.with_api_key(key.trim()),
        _ => config,
    }
}

fn narrator(api_key: Option<String>) -> Narrator<GeminiProvider> {
    let config = resolve_config(api_key);
    if config.api_key.is_none() {
        warn!("No API key configured; AI output will be placeholder text");
    }
    info!("Using {}", config.base_url);
    Narrator::new(GeminiProvider::new(config.clone()), config)
}

/// Plain-text rendering of a report: headers upper-cased, bodies indented.
pub fn render(narrative: &Narrative) -> String {
    let mut out = String::new();
    for line in parse_report(narrative.text()) {
        match line {
            ReportLine::Header(h) => {
                out.push_str(&h.to_uppercase());
                out.push('\n');
            }
            ReportLine::Body(b) => {
                out.push_str("  ");
                out.push_str(&b);
                out.push('\n');
            }
        }
    }
    out
}

fn print(narrative: Narrative) {
    if narrative.is_fallback() {
        warn!("Request did not produce model output");
    }
    print!("{}", render(&narrative));
}

/// Mime type for an image path, by extension.
pub fn guess_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

pub async fn run_describe(id: &str, api_key: Option<String>) -> anyhow::Result<()> {
    let seed = Seed::load()?;
    let subject = match (seed.node(id), seed.zone(id)) {
        (Some(node), _) => Subject::Node(node),
        (None, Some(zone)) => Subject::Zone(zone),
        (None, None) => bail!("no monitoring node or crowd zone with id {id:?}"),
    };
    info!("Describing {}", subject.name());
    print(narrator(api_key).describe_entity(subject).await);
    Ok(())
}

pub async fn run_analyze_image(
    path: &Path,
    mime: Option<String>,
    api_key: Option<String>,
) -> anyhow::Result<()> {
    let mime_type = match mime {
        Some(m) => m,
        None => guess_mime(path)
            .with_context(|| format!("cannot tell image type of {}; pass --mime", path.display()))?
            .to_string(),
    };
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    info!("Analyzing {} ({mime_type}, {} bytes)", path.display(), bytes.len());
    print(narrator(api_key).analyze_image(bytes, &mime_type).await);
    Ok(())
}

pub async fn run_intel(api_key: Option<String>) -> anyhow::Result<()> {
    print(narrator(api_key).basin_intelligence().await);
    Ok(())
}

pub async fn run_location(name: &str, api_key: Option<String>) -> anyhow::Result<()> {
    if name.trim().is_empty() {
        bail!("location name is empty");
    }
    print(narrator(api_key).location_details(name.trim()).await);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsn_intel::narrator::INTEL_FALLBACK;

    #[test]
    fn mime_follows_extension() {
        assert_eq!(guess_mime(Path::new("ghat.JPG")), Some("image/jpeg"));
        assert_eq!(guess_mime(Path::new("/tmp/river.webp")), Some("image/webp"));
        assert_eq!(guess_mime(Path::new("notes.txt")), None);
        assert_eq!(guess_mime(Path::new("no_extension")), None);
    }

    #[test]
    fn flag_key_overrides_environment() {
        let config = resolve_config(Some(" flag-key ".to_string()));
        assert_eq!(config.api_key.as_deref(), Some("flag-key"));
    }

    #[test]
    fn render_marks_headers() {
        let narrative = Narrative::Text("**Risk Level**\nHigh\n\n**Actions**\n1. Close the ghat.".into());
        assert_eq!(render(&narrative), "RISK LEVEL\n  High\nACTIONS\n  1. Close the ghat.\n");
        let fallback = Narrative::Fallback(INTEL_FALLBACK);
        assert!(render(&fallback).contains(INTEL_FALLBACK.trim()));
    }

    #[tokio::test]
    async fn unknown_id_is_an_error() {
        let err = run_describe("zz9", None).await.unwrap_err();
        assert!(err.to_string().contains("zz9"));
    }

    #[tokio::test]
    async fn unknown_image_type_needs_mime() {
        let err = run_analyze_image(Path::new("scan.bmp"), None, None).await.unwrap_err();
        assert!(err.to_string().contains("--mime"));
    }
}
