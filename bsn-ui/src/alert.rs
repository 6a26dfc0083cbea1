//! Broadcast alerts raised from the dashboard. Recorded locally only.

use bsn_core::view::Selected;
use bsn_core::{RiskLevel, Seed, ViewMode, ViewState};
use bsn_map::MapEntity;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub issued_at: NaiveDateTime,
    pub entity_id: String,
    pub entity: String,
    pub risk: RiskLevel,
    pub message: String,
}

impl Alert {
    /// Alert text for `entity` at the risk it currently displays.
    pub fn compose<E: MapEntity + ?Sized>(entity: &E, mode: ViewMode, issued_at: NaiveDateTime) -> Self {
        let reading = entity.display(mode);
        let instruction = if reading.risk.is_alarm() {
            "Field teams dispatched. Restrict public access."
        } else {
            "Advisory only. Continue routine monitoring."
        };
        Alert {
            issued_at,
            entity_id: entity.id().to_string(),
            entity: entity.name().to_string(),
            risk: reading.risk,
            message: format!(
                "{} RISK at {}: {}",
                reading.risk.label().to_uppercase(),
                entity.name(),
                instruction
            ),
        }
    }

    /// Alert for whatever the active module has selected.
    pub fn for_selection(seed: &Seed, view: &ViewState, issued_at: NaiveDateTime) -> Option<Self> {
        match view.selected_entity()? {
            Selected::Node(id) => Some(Self::compose(seed.node(id)?, view.view_mode, issued_at)),
            Selected::Zone(id) => Some(Self::compose(seed.zone(id)?, view.view_mode, issued_at)),
        }
    }

    pub fn time_label(&self) -> String {
        self.issued_at.format("%H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsn_core::view::Module;
    use bsn_core::Action;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2027, 7, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn alert_uses_display_risk_of_view_mode() {
        let seed = Seed::load().unwrap();
        // Ramkund: stored High, 5-year average 62 reads Moderate.
        let live = ViewState::default();
        let alert = Alert::for_selection(&seed, &live, noon()).unwrap();
        assert_eq!(alert.risk, RiskLevel::High);
        assert!(alert.message.starts_with("HIGH RISK at Ramkund (Panchavati)"));
        assert!(alert.message.contains("Field teams"));

        let historical = live.with(Action::SetViewMode(ViewMode::Historical));
        let alert = Alert::for_selection(&seed, &historical, noon()).unwrap();
        assert_eq!(alert.risk, RiskLevel::Moderate);
        assert!(alert.message.contains("Advisory"));
        assert_eq!(alert.time_label(), "12:00:00");
    }

    #[test]
    fn follows_active_module() {
        let seed = Seed::load().unwrap();
        let view = ViewState::default().with(Action::SwitchModule(Module::Crowd));
        let alert = Alert::for_selection(&seed, &view, noon()).unwrap();
        assert_eq!(alert.entity_id, "cz1");
        assert_eq!(alert.risk, RiskLevel::Critical);
    }

    #[test]
    fn unknown_selection_yields_nothing() {
        let seed = Seed::load().unwrap();
        let view = ViewState::default().with(Action::SelectNode("42".into()));
        assert!(Alert::for_selection(&seed, &view, noon()).is_none());
    }
}
