//! Notification state for the page header badges.
//!
//! The original screens each wired their own change listeners and count
//! queries; here that is one shared service. [`ChangeHub`] is an in-process
//! change-event bus with RAII subscriptions, [`NotificationProvider`] feeds it
//! from a periodic poll of the server counts, and [`use_notification_counts`]
//! is the hook the header consumes.

use std::cell::RefCell;
use std::rc::Rc;

use api::NotificationCounts;
use dioxus::prelude::*;

use crate::use_auth;

/// The two change channels the app cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeChannel {
    Messages,
    Appointments,
}

/// A change affecting one user on one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub channel: ChangeChannel,
    pub user_id: String,
}

struct Subscriber {
    id: u64,
    channel: ChangeChannel,
    user_id: String,
    on_change: Rc<dyn Fn(&ChangeEvent)>,
}

struct HubInner {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

/// In-process change-event bus. Cloning shares the underlying subscriber
/// list; the hub lives on the UI thread and is handed out through context.
#[derive(Clone)]
pub struct ChangeHub {
    inner: Rc<RefCell<HubInner>>,
}

impl Default for ChangeHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeHub {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Register a callback for events on `channel` addressed to `user_id`.
    /// Delivery stops when the returned guard is dropped.
    pub fn subscribe(
        &self,
        channel: ChangeChannel,
        user_id: &str,
        on_change: impl Fn(&ChangeEvent) + 'static,
    ) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push(Subscriber {
            id,
            channel,
            user_id: user_id.to_string(),
            on_change: Rc::new(on_change),
        });
        Subscription {
            hub: self.clone(),
            id,
        }
    }

    /// Deliver an event to every live matching subscriber, once each.
    pub fn publish(&self, event: &ChangeEvent) {
        // Clone the callbacks out before invoking: a callback may subscribe
        // or drop subscriptions, which re-borrows the inner list.
        let matching: Vec<Rc<dyn Fn(&ChangeEvent)>> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.channel == event.channel && s.user_id == event.user_id)
            .map(|s| s.on_change.clone())
            .collect();

        for on_change in matching {
            on_change(event);
        }
    }

    fn unsubscribe(&self, id: u64) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|s| s.id != id);
    }
}

/// RAII guard for a [`ChangeHub`] registration.
pub struct Subscription {
    hub: ChangeHub,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.hub.unsubscribe(self.id);
    }
}

/// Get the shared change hub.
pub fn use_change_hub() -> ChangeHub {
    use_context::<ChangeHub>()
}

/// Provider that owns the [`ChangeHub`] and keeps it fed: every 30 seconds it
/// re-fetches the counts for the signed-in user and publishes a change event
/// per channel whose count moved since the previous poll.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let hub = use_context_provider(ChangeHub::new);
    let auth = use_auth();

    use_effect(move || {
        let hub = hub.clone();
        spawn(async move {
            let mut last: Option<(String, NotificationCounts)> = None;
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;

                let Some(user_id) = auth.peek().user.as_ref().map(|u| u.id.clone()) else {
                    last = None;
                    continue;
                };

                match api::fetch_notification_counts().await {
                    Ok(counts) => {
                        if let Some((prev_user, prev)) = &last {
                            if *prev_user == user_id {
                                if prev.unread_messages != counts.unread_messages {
                                    hub.publish(&ChangeEvent {
                                        channel: ChangeChannel::Messages,
                                        user_id: user_id.clone(),
                                    });
                                }
                                if prev.upcoming_appointments != counts.upcoming_appointments {
                                    hub.publish(&ChangeEvent {
                                        channel: ChangeChannel::Appointments,
                                        user_id: user_id.clone(),
                                    });
                                }
                            }
                        }
                        last = Some((user_id, counts));
                    }
                    Err(e) => {
                        tracing::debug!("notification poll failed: {e}");
                    }
                }
            }
        });
    });

    rsx! {
        {children}
    }
}

/// Subscribe to both channels for the signed-in user and keep fresh counts.
/// Fetch errors retain the last known good value; unmounting drops the
/// subscriptions and cancels any in-flight fetch.
pub fn use_notification_counts() -> Signal<NotificationCounts> {
    let auth = use_auth();
    let hub = use_change_hub();
    let counts = use_signal(NotificationCounts::default);
    let mut dirty = use_signal(|| 0u64);

    let guards: Rc<RefCell<Vec<Subscription>>> = use_hook(|| Rc::new(RefCell::new(Vec::new())));

    use_effect(move || {
        let user_id = auth().user.as_ref().map(|u| u.id.clone());
        guards.borrow_mut().clear();

        if let Some(user_id) = user_id {
            let on_change = move |_event: &ChangeEvent| {
                let mut dirty = dirty;
                dirty += 1;
            };
            let mut held = guards.borrow_mut();
            held.push(hub.subscribe(ChangeChannel::Messages, &user_id, on_change));
            held.push(hub.subscribe(ChangeChannel::Appointments, &user_id, on_change));
            drop(held);
            // trigger the initial fetch
            dirty += 1;
        }
    });

    let mut counts_out = counts;
    let _ = use_resource(move || {
        let generation = dirty();
        async move {
            if generation == 0 || auth.peek().user.is_none() {
                return;
            }
            match api::fetch_notification_counts().await {
                Ok(fresh) => counts_out.set(fresh),
                Err(e) => {
                    // keep the last known good counts
                    tracing::debug!("count fetch failed: {e}");
                }
            }
        }
    });

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn event(channel: ChangeChannel, user: &str) -> ChangeEvent {
        ChangeEvent {
            channel,
            user_id: user.to_string(),
        }
    }

    #[test]
    fn publish_reaches_matching_subscriber_exactly_once() {
        let hub = ChangeHub::new();
        let hits = Rc::new(Cell::new(0u32));

        let counter = hits.clone();
        let _sub = hub.subscribe(ChangeChannel::Messages, "u-1", move |_| {
            counter.set(counter.get() + 1);
        });

        hub.publish(&event(ChangeChannel::Messages, "u-1"));
        assert_eq!(hits.get(), 1);

        // Wrong user and wrong channel are both ignored.
        hub.publish(&event(ChangeChannel::Messages, "u-2"));
        hub.publish(&event(ChangeChannel::Appointments, "u-1"));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dropping_the_subscription_stops_delivery() {
        let hub = ChangeHub::new();
        let hits = Rc::new(Cell::new(0u32));

        let counter = hits.clone();
        let sub = hub.subscribe(ChangeChannel::Appointments, "u-1", move |_| {
            counter.set(counter.get() + 1);
        });

        hub.publish(&event(ChangeChannel::Appointments, "u-1"));
        drop(sub);
        hub.publish(&event(ChangeChannel::Appointments, "u-1"));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn two_subscribers_each_see_the_event() {
        let hub = ChangeHub::new();
        let hits = Rc::new(Cell::new(0u32));

        let a = hits.clone();
        let _sub_a = hub.subscribe(ChangeChannel::Messages, "u-1", move |_| {
            a.set(a.get() + 1);
        });
        let b = hits.clone();
        let _sub_b = hub.subscribe(ChangeChannel::Messages, "u-1", move |_| {
            b.set(b.get() + 1);
        });

        hub.publish(&event(ChangeChannel::Messages, "u-1"));
        assert_eq!(hits.get(), 2);
    }
}
