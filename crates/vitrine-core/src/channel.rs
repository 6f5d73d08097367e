use crate::subscription::{Subscription, SubscriptionId};
use futures::StreamExt;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

/// A scoped broadcast channel for components without a direct parent/child
/// relationship.
///
/// A `Channel` is created by the nearest common ancestor of the components
/// that need to talk, and lives exactly as long as that ancestor: publishers
/// hold a [`ChannelSender`], consumers either poll a [`ChannelReceiver`] or
/// declare a [`subscription`](Channel::subscription) that feeds published
/// values into the normal message flow. When the owning component goes away,
/// every handle drops with it and subscription reconciliation aborts the
/// consumer task -- there is no process-wide singleton to leak.
///
/// Publishing while no consumer is listening is not an error; the value is
/// simply dropped.
pub struct Channel<T> {
    label: String,
    tx: broadcast::Sender<T>,
}

/// Cloneable publish handle for a [`Channel`].
pub struct ChannelSender<T> {
    tx: broadcast::Sender<T>,
}

/// Polling consumer handle for a [`Channel`].
///
/// Only values published after the receiver was opened are observed.
pub struct ChannelReceiver<T> {
    rx: broadcast::Receiver<T>,
}

impl<T: Clone + Send + 'static> Channel<T> {
    /// Create a channel with the given label and buffer capacity.
    ///
    /// The label distinguishes this channel's subscription id from other
    /// channels carrying the same payload type.
    pub fn new(label: impl Into<String>, capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self {
            label: label.into(),
            tx,
        }
    }

    /// Create a publish handle.
    pub fn sender(&self) -> ChannelSender<T> {
        ChannelSender {
            tx: self.tx.clone(),
        }
    }

    /// Open a polling receiver observing values published from now on.
    pub fn open_receiver(&self) -> ChannelReceiver<T> {
        ChannelReceiver {
            rx: self.tx.subscribe(),
        }
    }

    /// Create a [`Subscription`] that maps each published value to a message.
    ///
    /// The underlying receiver is opened here, when the subscription value is
    /// constructed, so values published after this call are captured even if
    /// the runtime spawns the consuming task slightly later. Returning the
    /// subscription from `subscriptions()` on every cycle keeps one consumer
    /// task alive; dropping it from the returned set aborts the task.
    pub fn subscription<Msg: Send + 'static>(
        &self,
        map: impl Fn(T) -> Msg + Send + Sync + 'static,
    ) -> Subscription<Msg> {
        let rx = self.tx.subscribe();
        let stream = BroadcastStream::new(rx)
            .filter_map(|item| async move { item.ok() })
            .map(map);
        Subscription::from_stream(
            SubscriptionId::with_str::<Channel<T>>(&self.label),
            Box::pin(stream),
        )
    }
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            tx: self.tx.clone(),
        }
    }
}

impl<T: Clone + Send + 'static> ChannelSender<T> {
    /// Publish a value to every current consumer.
    pub fn send(&self, value: T) {
        // Err here only means nobody is listening right now.
        let _ = self.tx.send(value);
    }
}

impl<T> Clone for ChannelSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: Clone + Send + 'static> ChannelReceiver<T> {
    /// Take the next published value, if one is waiting.
    pub fn try_recv(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn receiver_sees_values_published_after_open() {
        let channel: Channel<i32> = Channel::new("numbers", 8);
        let mut rx = channel.open_receiver();

        channel.sender().send(5);
        assert_eq!(rx.try_recv(), Some(5));
        assert_eq!(rx.try_recv(), None);
    }

    #[test]
    fn send_without_consumers_is_not_an_error() {
        let channel: Channel<i32> = Channel::new("numbers", 8);
        channel.sender().send(1);
    }

    #[test]
    fn clones_share_the_channel() {
        let channel: Channel<&'static str> = Channel::new("words", 8);
        let clone = channel.clone();
        let mut rx = clone.open_receiver();

        channel.sender().send("hello");
        assert_eq!(rx.try_recv(), Some("hello"));
    }

    #[test]
    fn same_label_same_subscription_id() {
        let a: Channel<i32> = Channel::new("reviews", 8);
        let b: Channel<i32> = Channel::new("reviews", 8);
        let sub_a = a.subscription(|n| n);
        let sub_b = b.subscription(|n| n);
        assert_eq!(sub_a.id, sub_b.id);

        let other: Channel<i32> = Channel::new("orders", 8);
        let sub_other = other.subscription(|n| n);
        assert_ne!(sub_a.id, sub_other.id);
    }

    #[tokio::test]
    async fn subscription_maps_published_values() {
        let channel: Channel<i32> = Channel::new("numbers", 8);
        let sub = channel.subscription(|n| n * 2);

        let (tx, mut rx) = mpsc::unbounded_channel::<i32>();
        let _abort = (sub.spawn)(tx);

        channel.sender().send(21);
        assert_eq!(rx.recv().await, Some(42));
    }
}
