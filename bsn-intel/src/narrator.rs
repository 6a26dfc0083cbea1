//! The four calls the dashboard makes, each degrading to fixed text.
//!
//! Nothing here returns an error: a failed or empty call yields the
//! placeholder the panel shows instead. Failures are logged.

use bsn_core::{CrowdZone, MonitoringNode};
use log::warn;

use crate::config::IntelConfig;
use crate::prompts;
use crate::provider::NarrativeProvider;
use crate::request::{GenerateRequest, Tool};

pub const FORECAST_FALLBACK: &str = "Forecast unavailable. Showing last recorded assessment.";
pub const FORECAST_EMPTY: &str = "No forecast available for this location.";
pub const IMAGE_FALLBACK: &str =
    "Failed to analyze image. Please ensure your API key is valid and try again.";
pub const IMAGE_EMPTY: &str = "Analysis failed.";
pub const INTEL_FALLBACK: &str =
    "Unable to fetch live basin intelligence. Displaying historical baseline data.";
pub const INTEL_EMPTY: &str = "No intelligence data available at this moment.";
pub const LOCATION_FALLBACK: &str = "Could not retrieve location specific details.";
pub const LOCATION_EMPTY: &str = "Location details unavailable.";

/// The entity a narrative is requested for.
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    Node(&'a MonitoringNode),
    Zone(&'a CrowdZone),
}

impl Subject<'_> {
    pub fn name(&self) -> &str {
        match self {
            Subject::Node(n) => &n.name,
            Subject::Zone(z) => &z.name,
        }
    }
}

/// Outcome of one call, kept distinct so callers can tell a real answer
/// from a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Narrative {
    Text(String),
    Fallback(&'static str),
}

impl Narrative {
    pub fn text(&self) -> &str {
        match self {
            Narrative::Text(t) => t,
            Narrative::Fallback(t) => t,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Narrative::Text(t) => t,
            Narrative::Fallback(t) => t.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Narrative::Fallback(_))
    }
}

/// An owned request, for callers that hand the call to a spawned task.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Node(MonitoringNode),
    Zone(CrowdZone),
    Image { bytes: Vec<u8>, mime_type: String },
    Basin,
    Location(String),
}

pub struct Narrator<P> {
    provider: P,
    config: IntelConfig,
}

impl<P: NarrativeProvider> Narrator<P> {
    pub fn new(provider: P, config: IntelConfig) -> Self {
        Self { provider, config }
    }

    async fn run(
        &self,
        what: &str,
        request: GenerateRequest,
        empty: &'static str,
        fallback: &'static str,
    ) -> Narrative {
        match self.provider.generate(&request).await {
            Ok(Some(text)) => Narrative::Text(text),
            Ok(None) => {
                warn!("{what}: model returned no text");
                Narrative::Fallback(empty)
            }
            Err(e) => {
                warn!("{what} failed: {e:#}");
                Narrative::Fallback(fallback)
            }
        }
    }

    /// Short forecast or insight for a node or zone.
    pub async fn describe_entity(&self, subject: Subject<'_>) -> Narrative {
        let prompt = match subject {
            Subject::Node(node) => prompts::node_forecast(node),
            Subject::Zone(zone) => prompts::zone_insight(zone),
        };
        let request = GenerateRequest::text(&self.config.narrative_model, prompt)
            .with_system(prompts::FORECAST_SYSTEM);
        self.run("Entity narrative", request, FORECAST_EMPTY, FORECAST_FALLBACK)
            .await
    }

    /// Multi-section diagnostic report for an uploaded photo.
    pub async fn analyze_image(&self, bytes: Vec<u8>, mime_type: &str) -> Narrative {
        if bytes.is_empty() {
            warn!("Image analysis skipped: empty upload");
            return Narrative::Fallback(IMAGE_FALLBACK);
        }
        let request = GenerateRequest::text(&self.config.vision_model, prompts::IMAGE_PROMPT)
            .with_image(mime_type, bytes)
            .with_system(prompts::ENGINEER_SYSTEM);
        self.run("Image analysis", request, IMAGE_EMPTY, IMAGE_FALLBACK)
            .await
    }

    /// Recent basin news, grounded with web search.
    pub async fn basin_intelligence(&self) -> Narrative {
        let request = GenerateRequest::text(&self.config.search_model, prompts::BASIN_INTEL_PROMPT)
            .with_system(prompts::SENTRY_SYSTEM)
            .with_tool(Tool::GoogleSearch);
        self.run("Basin intelligence", request, INTEL_EMPTY, INTEL_FALLBACK)
            .await
    }

    /// Geographic profile of a named place, grounded with maps.
    pub async fn location_details(&self, location: &str) -> Narrative {
        let request = GenerateRequest::text(
            &self.config.narrative_model,
            prompts::location_details(location),
        )
        .with_tool(Tool::GoogleMaps);
        self.run("Location details", request, LOCATION_EMPTY, LOCATION_FALLBACK)
            .await
    }

    pub async fn answer(&self, query: Query) -> Narrative {
        match query {
            Query::Node(node) => self.describe_entity(Subject::Node(&node)).await,
            Query::Zone(zone) => self.describe_entity(Subject::Zone(&zone)).await,
            Query::Image { bytes, mime_type } => self.analyze_image(bytes, &mime_type).await,
            Query::Basin => self.basin_intelligence().await,
            Query::Location(name) => self.location_details(&name).await,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::request::Part;
    use async_trait::async_trait;
    use bsn_core::Seed;
    use std::cell::RefCell;

    /// Replays canned outcomes and records requests.
    pub(crate) struct Scripted {
        pub outcomes: RefCell<Vec<anyhow::Result<Option<String>>>>,
        pub seen: RefCell<Vec<GenerateRequest>>,
    }

    impl Scripted {
        pub(crate) fn new(outcomes: Vec<anyhow::Result<Option<String>>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl NarrativeProvider for Scripted {
        async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<Option<String>> {
            self.seen.borrow_mut().push(request.clone());
            self.outcomes.borrow_mut().remove(0)
        }
    }

    fn narrator(outcomes: Vec<anyhow::Result<Option<String>>>) -> Narrator<Scripted> {
        Narrator::new(Scripted::new(outcomes), IntelConfig::default())
    }

    #[tokio::test]
    async fn describe_node_uses_narrative_model() {
        let seed = Seed::load().unwrap();
        let n = narrator(vec![Ok(Some("Quality will keep dropping.".into()))]);
        let out = n.describe_entity(Subject::Node(seed.node("6").unwrap())).await;
        assert_eq!(out, Narrative::Text("Quality will keep dropping.".into()));
        let seen = n.provider.seen.borrow();
        assert_eq!(seen[0].model, crate::config::NARRATIVE_MODEL);
        assert!(seen[0].tool.is_none());
    }

    #[tokio::test]
    async fn failures_become_fixed_placeholders() {
        let seed = Seed::load().unwrap();
        let n = narrator(vec![
            Err(anyhow::anyhow!("503")),
            Ok(None),
            Err(anyhow::anyhow!("timeout")),
            Err(anyhow::anyhow!("quota")),
        ]);
        let zone = n.describe_entity(Subject::Zone(seed.zone("cz1").unwrap())).await;
        assert_eq!(zone.text(), FORECAST_FALLBACK);
        assert!(zone.is_fallback());
        assert_eq!(n.analyze_image(vec![1, 2, 3], "image/jpeg").await.text(), IMAGE_EMPTY);
        assert_eq!(n.basin_intelligence().await.text(), INTEL_FALLBACK);
        assert_eq!(n.location_details("Tapovan").await.text(), LOCATION_FALLBACK);
    }

    #[tokio::test]
    async fn image_analysis_sends_inline_bytes() {
        let n = narrator(vec![Ok(Some("**Visual Observations**".into()))]);
        n.analyze_image(vec![0xff, 0xd8], "image/jpeg").await;
        let seen = n.provider.seen.borrow();
        assert_eq!(seen[0].model, crate::config::VISION_MODEL);
        assert_eq!(
            seen[0].parts[0],
            Part::InlineImage { mime_type: "image/jpeg".into(), data: vec![0xff, 0xd8] }
        );
    }

    #[tokio::test]
    async fn empty_upload_never_reaches_the_provider() {
        let n = narrator(vec![]);
        assert_eq!(n.analyze_image(Vec::new(), "image/png").await.text(), IMAGE_FALLBACK);
        assert!(n.provider.seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn owned_queries_route_to_their_call() {
        let seed = Seed::load().unwrap();
        let n = narrator(vec![Ok(Some("a".into())), Ok(Some("b".into()))]);
        n.answer(Query::Zone(seed.zone("cz2").unwrap().clone())).await;
        n.answer(Query::Location("Tapovan".into())).await;
        let seen = n.provider.seen.borrow();
        assert!(seen[0].system.is_some());
        assert_eq!(seen[1].tool, Some(Tool::GoogleMaps));
        assert!(matches!(&seen[1].parts[0], Part::Text(t) if t.contains("Tapovan")));
    }

    #[tokio::test]
    async fn intel_is_search_grounded() {
        let n = narrator(vec![Ok(Some("Kumbh Mela prep underway.".into()))]);
        let out = n.basin_intelligence().await;
        assert!(!out.is_fallback());
        assert_eq!(n.provider.seen.borrow()[0].tool, Some(Tool::GoogleSearch));
    }
}
