//! Display state of one AI-backed panel.
//!
//! Every fetch is tagged with a [`RequestToken`]. Only the most recently
//! issued token may write the panel, so a slow response to an earlier
//! request cannot overwrite a newer one.

use log::debug;
use serde::Serialize;

use crate::narrator::Narrative;
use crate::report::{parse_report, ReportLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntelPanel {
    text: Option<String>,
    fallback: bool,
    loading: bool,
    issued: u64,
}

impl IntelPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the panel loading and issue a token for the new fetch.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        self.loading = true;
        RequestToken(self.issued)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }

    /// Apply a finished fetch. Returns false (and changes nothing) when a
    /// newer fetch has been issued since `token`.
    pub fn complete(&mut self, token: RequestToken, narrative: Narrative) -> bool {
        if !self.is_current(token) {
            debug!("Discarding stale response {:?} (latest {})", token, self.issued);
            return false;
        }
        self.fallback = narrative.is_fallback();
        self.text = Some(narrative.into_string());
        self.loading = false;
        true
    }

    /// Clear the output; any in-flight fetch becomes stale.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.text = None;
        self.fallback = false;
        self.loading = false;
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// The text split into headers and body lines.
    pub fn lines(&self) -> Vec<ReportLine> {
        self.text.as_deref().map(parse_report).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IntelConfig;
    use crate::narrator::tests::Scripted;
    use crate::narrator::{Narrator, Subject, FORECAST_FALLBACK};
    use bsn_core::Seed;

    #[test]
    fn last_issued_request_wins() {
        let mut panel = IntelPanel::new();
        let first = panel.begin();
        let second = panel.begin();
        assert!(panel.complete(second, Narrative::Text("fresh".into())));
        assert!(!panel.complete(first, Narrative::Text("stale".into())));
        assert_eq!(panel.text(), Some("fresh"));
        assert!(!panel.loading());
    }

    #[test]
    fn stale_completion_keeps_loading_for_newer_request() {
        let mut panel = IntelPanel::new();
        let first = panel.begin();
        let _second = panel.begin();
        assert!(!panel.complete(first, Narrative::Text("old".into())));
        assert!(panel.loading());
        assert_eq!(panel.text(), None);
    }

    #[test]
    fn reset_invalidates_in_flight_fetch() {
        let mut panel = IntelPanel::new();
        let token = panel.begin();
        panel.reset();
        assert!(!panel.complete(token, Narrative::Text("late".into())));
        assert_eq!(panel.text(), None);
        assert!(!panel.loading());
    }

    #[tokio::test]
    async fn rejected_fetch_shows_fallback_and_stops_loading() {
        let seed = Seed::load().unwrap();
        let narrator = Narrator::new(
            Scripted::new(vec![Err(anyhow::anyhow!("connection refused"))]),
            IntelConfig::default(),
        );
        let mut panel = IntelPanel::new();
        let token = panel.begin();
        assert!(panel.loading());

        let narrative = narrator.describe_entity(Subject::Node(seed.node("6").unwrap())).await;
        assert!(panel.complete(token, narrative));
        assert_eq!(panel.text(), Some(FORECAST_FALLBACK));
        assert!(panel.is_fallback());
        assert!(!panel.loading());
    }

    #[test]
    fn lines_parse_the_report() {
        let mut panel = IntelPanel::new();
        let token = panel.begin();
        panel.complete(token, Narrative::Text("**Potential Contaminants**\nSewage".into()));
        assert_eq!(
            panel.lines(),
            vec![
                ReportLine::Header("Potential Contaminants".into()),
                ReportLine::Body("Sewage".into()),
            ]
        );
    }
}
