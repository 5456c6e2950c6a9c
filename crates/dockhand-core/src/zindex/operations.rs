//! Register, promote, release, and inspect overlays.

use chrono::Utc;
use dockhand_common::FlyoutError;
use tracing::{debug, error, warn};

use super::{Layer, RegisterOptions, Registration, Stackable, ZIndexAllocator};

impl ZIndexAllocator {
    /// Register `handle` in the layer named `layer` (e.g. `"POPUP"`).
    ///
    /// Returns the assigned value, or `None` when the layer name is unknown.
    pub fn register<H: Stackable + ?Sized>(
        &mut self,
        handle: &mut H,
        layer: &str,
        priority: u32,
        options: RegisterOptions,
    ) -> Option<i32> {
        let Some(resolved) = Layer::from_name(layer) else {
            error!(layer, handle = %handle.handle_id(), "unknown z-index layer");
            return None;
        };
        Some(self.register_in(handle, resolved, priority, options))
    }

    /// Register `handle` in `layer` at `layer.min() + priority`, clamped to the
    /// layer max, and write the value onto the handle.
    pub fn register_in<H: Stackable + ?Sized>(
        &mut self,
        handle: &mut H,
        layer: Layer,
        priority: u32,
        options: RegisterOptions,
    ) -> i32 {
        let id = handle.handle_id();
        let z_index = self.clamp_to_layer(layer, i64::from(layer.min()) + i64::from(priority));

        // A re-registration keeps the native value captured the first time.
        let prior_z_index = match self.registrations.get(&id) {
            Some(existing) => existing.prior_z_index,
            None => handle.z_index(),
        };

        handle.set_z_index(Some(z_index));
        self.raise_counter(layer, z_index);
        self.registrations.insert(
            id,
            Registration {
                handle: id,
                layer,
                priority: (z_index - layer.min()) as u32,
                z_index,
                registered_at: Utc::now(),
                promotion_count: 0,
                prior_z_index,
                isolated: options.isolated,
                label: options.label,
            },
        );

        debug!(handle = %id, %layer, z_index, "overlay registered");
        z_index
    }

    /// Move `handle` above everything previously assigned in its layer.
    ///
    /// Returns `None` (with a warning) when the handle is not registered.
    pub fn bring_to_front<H: Stackable + ?Sized>(&mut self, handle: &mut H) -> Option<i32> {
        let id = handle.handle_id();
        let Some((layer, current)) = self.registrations.get(&id).map(|r| (r.layer, r.z_index))
        else {
            warn!(handle = %id, "bring_to_front on unregistered overlay");
            return None;
        };

        let base = self.layer_counter(layer).max(current);
        let z_index = self.clamp_to_layer(layer, i64::from(base) + i64::from(self.front_gap));
        if z_index <= current {
            warn!(handle = %id, %layer, z_index, "overlay already at layer ceiling");
        }
        self.raise_counter(layer, z_index);

        if let Some(registration) = self.registrations.get_mut(&id) {
            registration.z_index = z_index;
            registration.priority = (z_index - layer.min()) as u32;
            registration.promotion_count += 1;
        }
        handle.set_z_index(Some(z_index));

        debug!(handle = %id, %layer, from = current, to = z_index, "overlay brought to front");
        Some(z_index)
    }

    /// Release `handle`, restoring its native stacking value (or clearing it).
    ///
    /// Returns `false` when the handle was not registered.
    pub fn unregister<H: Stackable + ?Sized>(&mut self, handle: &mut H) -> bool {
        let id = handle.handle_id();
        match self.registrations.remove(&id) {
            Some(registration) => {
                handle.set_z_index(registration.prior_z_index);
                debug!(handle = %id, layer = %registration.layer, "overlay unregistered");
                true
            }
            None => {
                warn!(handle = %id, "unregister on unknown overlay");
                false
            }
        }
    }

    /// Registrations in `layer`, highest z-index first. Inspection only.
    pub fn elements_in_layer(&self, layer: Layer) -> Vec<&Registration> {
        let mut regs: Vec<&Registration> = self
            .registrations
            .values()
            .filter(|r| r.layer == layer)
            .collect();
        regs.sort_by(|a, b| b.z_index.cmp(&a.z_index).then(a.handle.cmp(&b.handle)));
        regs
    }

    fn clamp_to_layer(&self, layer: Layer, requested: i64) -> i32 {
        let max = layer.max();
        if requested > i64::from(max) {
            if self.warn_on_clamp {
                let overflow = FlyoutError::BoundsOverflow {
                    layer: layer.name().to_string(),
                    requested,
                    max,
                };
                warn!(error = %overflow, "clamping z-index to layer max");
            }
            return max;
        }
        requested as i32
    }

    fn raise_counter(&mut self, layer: Layer, z_index: i32) {
        let counter = &mut self.counters[layer.index()];
        if z_index > *counter {
            *counter = z_index;
        }
    }
}
