//! JSON summary of the layout after a run.

use dockhand_core::{FlyoutChrome, FlyoutCoordinator, PanelDescriptor};
use dockhand_core::store::DescriptorFilter;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub restored: usize,
    pub executed: usize,
    pub rejected: usize,
    pub panels: Vec<&'a PanelDescriptor>,
    pub flyouts: Vec<&'a FlyoutChrome>,
}

impl<'a> Report<'a> {
    pub fn collect(
        coordinator: &'a FlyoutCoordinator,
        restored: usize,
        executed: usize,
        rejected: usize,
    ) -> Self {
        let flyouts = coordinator
            .flyout_panels()
            .iter()
            .filter_map(|id| coordinator.chrome(id))
            .collect();
        Self {
            restored,
            executed,
            rejected,
            panels: coordinator.store().list(&DescriptorFilter::all()),
            flyouts,
        }
    }
}

#[cfg(test)]
mod tests {
    use dockhand_common::PanelId;
    use dockhand_core::FlyoutOptions;

    use super::*;

    #[test]
    fn report_lists_panels_and_flyouts() {
        let mut coord = FlyoutCoordinator::new();
        coord.register_panel(PanelId::from("notes"), "Notes", "right", None);
        coord.register_panel(PanelId::from("outline"), "Outline", "left", None);
        coord.fly_out(&PanelId::from("notes"), FlyoutOptions::default());

        let report = Report::collect(&coord, 0, 3, 1);
        assert_eq!(report.panels.len(), 2);
        assert_eq!(report.flyouts.len(), 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rejected"], 1);
        assert_eq!(json["flyouts"][0]["panel"], "notes");
        assert_eq!(json["panels"][1]["placement"], "FLOATING");
    }
}
