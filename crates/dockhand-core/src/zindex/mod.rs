//! Layered z-index allocation for panels and any other overlay.

mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal overlay used to observe what the allocator writes.
    struct TestOverlay {
        id: HandleId,
        z: Option<i32>,
    }

    impl TestOverlay {
        fn new(alloc: &mut ZIndexAllocator) -> Self {
            Self {
                id: alloc.allocate_handle_id(),
                z: None,
            }
        }

        fn with_native(alloc: &mut ZIndexAllocator, z: i32) -> Self {
            Self {
                id: alloc.allocate_handle_id(),
                z: Some(z),
            }
        }
    }

    impl Stackable for TestOverlay {
        fn handle_id(&self) -> HandleId {
            self.id
        }

        fn z_index(&self) -> Option<i32> {
            self.z
        }

        fn set_z_index(&mut self, z_index: Option<i32>) {
            self.z = z_index;
        }
    }

    #[test]
    fn layer_ranges_are_disjoint_and_ordered() {
        for pair in Layer::ALL.windows(2) {
            assert!(pair[0].max() < pair[1].min());
        }
        assert_eq!(Layer::Base.min(), 0);
        assert_eq!(Layer::System.max(), 99_999);
    }

    #[test]
    fn layer_from_name_is_case_insensitive() {
        assert_eq!(Layer::from_name("POPUP"), Some(Layer::Popup));
        assert_eq!(Layer::from_name("ui"), Some(Layer::Ui));
        assert_eq!(Layer::from_name("tooltip"), None);
    }

    #[test]
    fn ui_priorities_map_onto_layer_base() {
        let mut alloc = ZIndexAllocator::new();
        let mut a = TestOverlay::new(&mut alloc);
        let mut b = TestOverlay::new(&mut alloc);
        assert_eq!(alloc.register(&mut a, "UI", 0, RegisterOptions::default()), Some(100));
        assert_eq!(alloc.register(&mut b, "UI", 50, RegisterOptions::default()), Some(150));
        assert_eq!(a.z, Some(100));
        assert_eq!(b.z, Some(150));
    }

    #[test]
    fn higher_priority_stacks_higher() {
        let mut alloc = ZIndexAllocator::new();
        let mut h1 = TestOverlay::new(&mut alloc);
        let mut h2 = TestOverlay::new(&mut alloc);
        let z1 = alloc.register(&mut h1, "POPUP", 5, RegisterOptions::default()).unwrap();
        let z2 = alloc.register(&mut h2, "POPUP", 3, RegisterOptions::default()).unwrap();
        assert!(z1 > z2);
    }

    #[test]
    fn unknown_layer_fails_without_touching_handle() {
        let mut alloc = ZIndexAllocator::new();
        let mut h = TestOverlay::with_native(&mut alloc, 7);
        assert_eq!(alloc.register(&mut h, "MODAL", 1, RegisterOptions::default()), None);
        assert_eq!(h.z, Some(7));
        assert!(alloc.is_empty());
    }

    #[test]
    fn overflow_clamps_to_layer_max() {
        let mut alloc = ZIndexAllocator::new();
        let mut h = TestOverlay::new(&mut alloc);
        let z = alloc.register_in(&mut h, Layer::Base, 5000, RegisterOptions::default());
        assert_eq!(z, 99);
        assert_eq!(alloc.registration(h.id).unwrap().priority, 99);
    }

    #[test]
    fn bring_to_front_exceeds_everything_in_layer() {
        let mut alloc = ZIndexAllocator::new();
        let mut low = TestOverlay::new(&mut alloc);
        let mut high = TestOverlay::new(&mut alloc);
        alloc.register_in(&mut low, Layer::Popup, 0, RegisterOptions::default());
        alloc.register_in(&mut high, Layer::Popup, 50, RegisterOptions::default());

        let before = low.z.unwrap();
        let z = alloc.bring_to_front(&mut low).unwrap();
        assert!(z > before);
        assert!(z >= high.z.unwrap());
        assert_eq!(z, 1050 + 10);
        assert_eq!(alloc.layer_counter(Layer::Popup), z);

        let reg = alloc.registration(low.id).unwrap();
        assert_eq!(reg.promotion_count, 1);
        assert_eq!(reg.priority, 60);
    }

    #[test]
    fn repeated_promotion_is_strictly_increasing() {
        let mut alloc = ZIndexAllocator::new();
        let mut a = TestOverlay::new(&mut alloc);
        let mut b = TestOverlay::new(&mut alloc);
        alloc.register_in(&mut a, Layer::Ui, 0, RegisterOptions::default());
        alloc.register_in(&mut b, Layer::Ui, 0, RegisterOptions::default());

        let mut last = 0;
        for i in 0..10 {
            let target = if i % 2 == 0 { &mut a } else { &mut b };
            let z = alloc.bring_to_front(target).unwrap();
            assert!(z > last);
            last = z;
        }
    }

    #[test]
    fn bring_to_front_uses_configured_gap() {
        let mut alloc = ZIndexAllocator::new();
        alloc.set_front_gap(100);
        let mut h = TestOverlay::new(&mut alloc);
        alloc.register_in(&mut h, Layer::System, 0, RegisterOptions::default());
        assert_eq!(alloc.bring_to_front(&mut h), Some(10_100));
    }

    #[test]
    fn front_gap_has_a_floor() {
        let mut alloc = ZIndexAllocator::new();
        alloc.set_front_gap(1);
        assert_eq!(alloc.front_gap(), MIN_FRONT_GAP);
    }

    #[test]
    fn bring_to_front_clamps_at_ceiling() {
        let mut alloc = ZIndexAllocator::new();
        let mut h = TestOverlay::new(&mut alloc);
        alloc.register_in(&mut h, Layer::Base, 95, RegisterOptions::default());
        assert_eq!(alloc.bring_to_front(&mut h), Some(99));
        assert_eq!(alloc.bring_to_front(&mut h), Some(99));
    }

    #[test]
    fn bring_to_front_unregistered_is_noop() {
        let mut alloc = ZIndexAllocator::new();
        let mut h = TestOverlay::with_native(&mut alloc, 3);
        assert_eq!(alloc.bring_to_front(&mut h), None);
        assert_eq!(h.z, Some(3));
    }

    #[test]
    fn unregister_restores_native_value() {
        let mut alloc = ZIndexAllocator::new();
        let mut native = TestOverlay::with_native(&mut alloc, 42);
        let mut bare = TestOverlay::new(&mut alloc);
        alloc.register_in(&mut native, Layer::Ui, 1, RegisterOptions::default());
        alloc.register_in(&mut bare, Layer::Ui, 2, RegisterOptions::default());

        assert!(alloc.unregister(&mut native));
        assert!(alloc.unregister(&mut bare));
        assert_eq!(native.z, Some(42));
        assert_eq!(bare.z, None);
        assert!(alloc.is_empty());
        assert!(!alloc.unregister(&mut bare));
    }

    #[test]
    fn reregistration_keeps_first_native_value() {
        let mut alloc = ZIndexAllocator::new();
        let mut h = TestOverlay::with_native(&mut alloc, 5);
        alloc.register_in(&mut h, Layer::Ui, 1, RegisterOptions::default());
        alloc.register_in(&mut h, Layer::Popup, 1, RegisterOptions::default());
        assert_eq!(alloc.len(), 1);
        assert_eq!(h.z, Some(1001));
        alloc.unregister(&mut h);
        assert_eq!(h.z, Some(5));
    }

    #[test]
    fn layers_have_independent_counters() {
        let mut alloc = ZIndexAllocator::new();
        let mut ui = TestOverlay::new(&mut alloc);
        let mut popup = TestOverlay::new(&mut alloc);
        alloc.register_in(&mut ui, Layer::Ui, 10, RegisterOptions::default());
        alloc.register_in(&mut popup, Layer::Popup, 0, RegisterOptions::default());
        alloc.bring_to_front(&mut ui);
        assert_eq!(alloc.layer_counter(Layer::Ui), 120);
        assert_eq!(alloc.layer_counter(Layer::Popup), 1000);
        assert_eq!(alloc.layer_counter(Layer::Base), 0);
    }

    #[test]
    fn elements_in_layer_sorted_descending() {
        let mut alloc = ZIndexAllocator::new();
        let mut a = TestOverlay::new(&mut alloc);
        let mut b = TestOverlay::new(&mut alloc);
        let mut c = TestOverlay::new(&mut alloc);
        let mut other = TestOverlay::new(&mut alloc);
        alloc.register_in(&mut a, Layer::Popup, 5, RegisterOptions::default());
        alloc.register_in(&mut b, Layer::Popup, 20, RegisterOptions::default());
        alloc.register_in(&mut c, Layer::Popup, 10, RegisterOptions::isolated().with_label("menu"));
        alloc.register_in(&mut other, Layer::Ui, 99, RegisterOptions::default());

        let zs: Vec<i32> = alloc
            .elements_in_layer(Layer::Popup)
            .iter()
            .map(|r| r.z_index)
            .collect();
        assert_eq!(zs, vec![1020, 1010, 1005]);

        let menu = alloc.registration(c.id).unwrap();
        assert!(menu.isolated);
        assert_eq!(menu.label.as_deref(), Some("menu"));
    }

    #[test]
    fn next_priority_stacks_above_live_registrations() {
        let mut alloc = ZIndexAllocator::new();
        assert_eq!(alloc.next_priority(Layer::Popup), 0);
        let mut a = TestOverlay::new(&mut alloc);
        alloc.register_in(&mut a, Layer::Popup, 0, RegisterOptions::default());
        assert_eq!(alloc.next_priority(Layer::Popup), 1);
        let mut b = TestOverlay::new(&mut alloc);
        let p = alloc.next_priority(Layer::Popup);
        let z = alloc.register_in(&mut b, Layer::Popup, p, RegisterOptions::default());
        assert_ne!(z, a.z.unwrap());
    }

    #[test]
    fn allocated_handle_ids_are_unique() {
        let mut alloc = ZIndexAllocator::new();
        let a = alloc.allocate_handle_id();
        let b = alloc.allocate_handle_id();
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "overlay-1");
    }
}
