//! Synchronous change notification.

use tracing::trace;

use super::{DescriptorStore, StoreEvent, SubscriptionId};

impl DescriptorStore {
    /// Register a callback invoked after every mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub(super) fn notify(&mut self, event: StoreEvent) {
        trace!(?event, subscribers = self.subscribers.len(), "store event");
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&event);
        }
    }
}
