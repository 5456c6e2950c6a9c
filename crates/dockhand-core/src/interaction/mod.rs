//! Pointer-driven drag and resize of floating panels.

mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use dockhand_common::{FlyoutError, PanelId, Placement, Point, Size};

    use super::*;
    use crate::store::{DescriptorDefaults, DescriptorPatch, DescriptorStore};

    fn floating_store(ids: &[&str]) -> DescriptorStore {
        let mut store = DescriptorStore::new();
        for id in ids {
            let id = PanelId::from(*id);
            store.create_descriptor(id.clone(), "right", DescriptorDefaults::default());
            store.update_descriptor(
                &id,
                DescriptorPatch::new()
                    .placement(Placement::Floating)
                    .position(Some(Point::new(100.0, 100.0)))
                    .size(Some(Size::new(400.0, 300.0))),
            );
        }
        store
    }

    fn position(store: &DescriptorStore, id: &str) -> Point {
        store
            .get_descriptor(&PanelId::from(id))
            .and_then(|d| d.position)
            .unwrap()
    }

    fn size(store: &DescriptorStore, id: &str) -> Size {
        store
            .get_descriptor(&PanelId::from(id))
            .and_then(|d| d.size)
            .unwrap()
    }

    #[test]
    fn drag_moves_by_net_delta() {
        let mut store = floating_store(&["notes"]);
        let mut ctl = InteractionController::default();
        ctl.start_drag(&store, &PanelId::from("notes"), PointerEvent::at(10.0, 10.0))
            .unwrap();

        for (x, y) in [(15.0, 12.0), (40.0, -30.0), (12.0, 90.0), (35.0, 60.0)] {
            ctl.pointer_move(&mut store, PointerEvent::at(x, y));
        }
        assert_eq!(position(&store, "notes"), Point::new(125.0, 150.0));

        let done = ctl.pointer_up(&mut store, PointerEvent::at(60.0, 5.0)).unwrap();
        assert_eq!(
            done,
            GeometryUpdate::Moved {
                panel: PanelId::from("notes"),
                position: Point::new(150.0, 95.0),
            }
        );
        assert_eq!(position(&store, "notes"), Point::new(150.0, 95.0));
        assert!(ctl.is_idle());
    }

    #[test]
    fn drag_is_not_clamped_to_viewport() {
        let mut store = floating_store(&["notes"]);
        let mut ctl = InteractionController::default();
        ctl.start_drag(&store, &PanelId::from("notes"), PointerEvent::at(0.0, 0.0))
            .unwrap();
        ctl.pointer_up(&mut store, PointerEvent::at(-500.0, -500.0));
        assert_eq!(position(&store, "notes"), Point::new(-400.0, -400.0));
    }

    #[test]
    fn resize_clamps_to_floor() {
        let mut store = floating_store(&["notes"]);
        let mut ctl = InteractionController::default();
        ctl.start_resize(&store, &PanelId::from("notes"), PointerEvent::at(500.0, 400.0))
            .unwrap();

        ctl.pointer_move(&mut store, PointerEvent::at(550.0, 420.0));
        assert_eq!(size(&store, "notes"), Size::new(450.0, 320.0));

        ctl.pointer_move(&mut store, PointerEvent::at(0.0, 0.0));
        assert_eq!(size(&store, "notes"), Size::new(200.0, 150.0));

        ctl.pointer_up(&mut store, PointerEvent::at(300.0, 350.0));
        assert_eq!(size(&store, "notes"), Size::new(200.0, 250.0));
        assert_eq!(position(&store, "notes"), Point::new(100.0, 100.0));
    }

    #[test]
    fn custom_floor_is_respected() {
        let mut store = floating_store(&["notes"]);
        let mut ctl = InteractionController::new(Size::new(320.0, 240.0));
        ctl.start_resize(&store, &PanelId::from("notes"), PointerEvent::at(0.0, 0.0))
            .unwrap();
        ctl.pointer_up(&mut store, PointerEvent::at(-1000.0, -1000.0));
        assert_eq!(size(&store, "notes"), Size::new(320.0, 240.0));
    }

    #[test]
    fn second_session_is_rejected_and_first_continues() {
        let mut store = floating_store(&["notes", "outline"]);
        let mut ctl = InteractionController::default();
        let drag = ctl
            .start_drag(&store, &PanelId::from("notes"), PointerEvent::at(0.0, 0.0))
            .unwrap();

        let err = ctl
            .start_resize(&store, &PanelId::from("outline"), PointerEvent::at(0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, FlyoutError::InvalidState(_)));
        assert!(ctl
            .start_drag(&store, &PanelId::from("notes"), PointerEvent::at(0.0, 0.0))
            .is_err());

        assert_eq!(ctl.active_session().unwrap().id(), &drag);
        ctl.pointer_move(&mut store, PointerEvent::at(5.0, 5.0));
        assert_eq!(position(&store, "notes"), Point::new(105.0, 105.0));
        assert_eq!(size(&store, "outline"), Size::new(400.0, 300.0));
    }

    #[test]
    fn start_requires_floating_target() {
        let mut store = floating_store(&[]);
        store.create_descriptor(PanelId::from("docked"), "right", DescriptorDefaults::default());
        let mut ctl = InteractionController::default();

        let unknown = ctl.start_drag(&store, &PanelId::from("ghost"), PointerEvent::at(0.0, 0.0));
        assert!(matches!(unknown, Err(FlyoutError::InvalidTarget(_))));

        let docked = ctl.start_drag(&store, &PanelId::from("docked"), PointerEvent::at(0.0, 0.0));
        assert!(matches!(docked, Err(FlyoutError::InvalidTarget(_))));
        assert!(ctl.is_idle());
        assert_eq!(ctl.listeners().attach_count, 0);
    }

    #[test]
    fn listeners_attach_once_per_session() {
        let mut store = floating_store(&["notes"]);
        let mut ctl = InteractionController::default();

        for round in 1..=3 {
            ctl.start_drag(&store, &PanelId::from("notes"), PointerEvent::at(0.0, 0.0))
                .unwrap();
            let _ = ctl.start_resize(&store, &PanelId::from("notes"), PointerEvent::at(0.0, 0.0));
            assert!(ctl.listeners().installed);
            ctl.pointer_move(&mut store, PointerEvent::at(1.0, 1.0));
            ctl.pointer_up(&mut store, PointerEvent::at(1.0, 1.0));

            let listeners = ctl.listeners();
            assert!(!listeners.installed);
            assert_eq!(listeners.attach_count, round);
            assert_eq!(listeners.detach_count, round);
        }
    }

    #[test]
    fn vanished_target_ends_session_silently() {
        let mut store = floating_store(&["notes"]);
        let mut ctl = InteractionController::default();
        ctl.start_drag(&store, &PanelId::from("notes"), PointerEvent::at(0.0, 0.0))
            .unwrap();

        store.remove_descriptor(&PanelId::from("notes"));
        assert_eq!(ctl.pointer_move(&mut store, PointerEvent::at(10.0, 10.0)), None);
        assert!(ctl.is_idle());
        assert!(!ctl.listeners().installed);
        assert!(store.is_empty());
    }

    #[test]
    fn docked_target_ends_session() {
        let mut store = floating_store(&["notes"]);
        let mut ctl = InteractionController::default();
        ctl.start_drag(&store, &PanelId::from("notes"), PointerEvent::at(0.0, 0.0))
            .unwrap();
        store.update_descriptor(
            &PanelId::from("notes"),
            DescriptorPatch::new().placement(Placement::Docked).position(None),
        );
        assert_eq!(ctl.pointer_up(&mut store, PointerEvent::at(10.0, 10.0)), None);
        assert!(ctl.is_idle());
    }

    #[test]
    fn other_pointers_are_ignored() {
        let mut store = floating_store(&["notes"]);
        let mut ctl = InteractionController::default();
        ctl.start_drag(
            &store,
            &PanelId::from("notes"),
            PointerEvent::new(Point::new(0.0, 0.0), 1),
        )
        .unwrap();
        assert_eq!(
            ctl.pointer_up(&mut store, PointerEvent::new(Point::new(50.0, 50.0), 2)),
            None
        );
        assert!(!ctl.is_idle());
        assert_eq!(position(&store, "notes"), Point::new(100.0, 100.0));
    }

    #[test]
    fn moves_while_idle_do_nothing() {
        let mut store = floating_store(&["notes"]);
        let mut ctl = InteractionController::default();
        assert_eq!(ctl.pointer_move(&mut store, PointerEvent::at(10.0, 10.0)), None);
        assert_eq!(ctl.pointer_up(&mut store, PointerEvent::at(10.0, 10.0)), None);
        assert_eq!(ctl.listeners().detach_count, 0);
    }

    #[test]
    fn drop_target_only_matches_session_panel() {
        let store = floating_store(&["notes"]);
        let mut ctl = InteractionController::default();
        ctl.start_resize(&store, &PanelId::from("notes"), PointerEvent::at(0.0, 0.0))
            .unwrap();
        assert!(!ctl.drop_target(&PanelId::from("outline")));
        assert!(ctl.drop_target(&PanelId::from("notes")));
        assert!(ctl.is_idle());
    }

    #[test]
    fn non_finite_pointer_positions_never_reach_the_store() {
        let mut store = floating_store(&["notes"]);
        let mut ctl = InteractionController::default();
        let notes = PanelId::from("notes");

        let nan = PointerEvent::at(f64::NAN, 0.0);
        assert!(matches!(
            ctl.start_drag(&store, &notes, nan),
            Err(FlyoutError::InvalidState(_))
        ));
        assert!(ctl.is_idle());

        ctl.start_drag(&store, &notes, PointerEvent::at(0.0, 0.0)).unwrap();
        assert_eq!(ctl.pointer_move(&mut store, PointerEvent::at(f64::INFINITY, 5.0)), None);
        assert_eq!(ctl.pointer_up(&mut store, PointerEvent::at(5.0, f64::NAN)), None);
        assert_eq!(position(&store, "notes"), Point::new(100.0, 100.0));
        assert!(!ctl.is_idle());

        ctl.pointer_up(&mut store, PointerEvent::at(10.0, 20.0));
        assert_eq!(position(&store, "notes"), Point::new(110.0, 120.0));
        assert!(ctl.is_idle());
    }
}
