use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use terminal_size::{Width, terminal_size};

/// Opaque handle returned by [`ResizeSource::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type ResizeListener = Box<dyn FnMut(u32)>;

/// Something that can report the rendered width of a container.
pub trait ResizeSource {
    /// Registers `listener` for width changes. Implementations deliver the
    /// current width right away when one is known.
    fn subscribe(&self, listener: ResizeListener) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId);

    /// Re-measures a pull-based source before a redraw. Push-based sources
    /// keep the default. Returns whether subscribers were notified.
    fn poll(&self) -> bool {
        false
    }
}

/// Listener registry that fans a width out to every subscriber and
/// remembers the last one for late subscribers. Listeners may subscribe or
/// unsubscribe on the same hub while being notified.
#[derive(Default)]
pub struct ResizeHub {
    listeners: RefCell<Vec<(SubscriptionId, ResizeListener)>>,
    next_id: Cell<u64>,
    last_width: Cell<Option<u32>>,
    notifying: Cell<bool>,
    // Ids unsubscribed while their listener was out for notification.
    dropped_in_flight: RefCell<Vec<SubscriptionId>>,
}

impl ResizeHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `width` and notifies subscribers when it differs from the
    /// previous measurement. Returns whether a notification went out.
    pub fn notify(&self, width: u32) -> bool {
        if self.last_width.get() == Some(width) {
            return false;
        }
        self.last_width.set(Some(width));

        let mut active = self.listeners.take();
        self.notifying.set(true);
        for (id, listener) in active.iter_mut() {
            if !self.dropped_in_flight.borrow().contains(id) {
                listener(width);
            }
        }
        self.notifying.set(false);

        let dropped = self.dropped_in_flight.take();
        active.retain(|(id, _)| !dropped.contains(id));
        let mut listeners = self.listeners.borrow_mut();
        let added = std::mem::replace(&mut *listeners, active);
        listeners.extend(added);
        true
    }

    pub fn last_width(&self) -> Option<u32> {
        self.last_width.get()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ResizeSource for ResizeHub {
    fn subscribe(&self, mut listener: ResizeListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        if let Some(width) = self.last_width.get() {
            listener(width);
        }
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(sid, _)| *sid != id);
        if self.notifying.get() {
            self.dropped_in_flight.borrow_mut().push(id);
        }
    }
}

impl fmt::Debug for ResizeHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeHub")
            .field("subscribers", &self.subscriber_count())
            .field("last_width", &self.last_width.get())
            .finish()
    }
}

/// Terminal columns as the container width. Call [`poll`](Self::poll) before
/// each redraw; there is no signal handling.
#[derive(Debug)]
pub struct TerminalResizeSource {
    hub: ResizeHub,
    fallback: u32,
}

impl TerminalResizeSource {
    pub const DEFAULT_FALLBACK: u32 = 80;

    pub fn new() -> Self {
        Self::with_fallback(Self::DEFAULT_FALLBACK)
    }

    /// `fallback` is reported when stdout is not a terminal.
    pub fn with_fallback(fallback: u32) -> Self {
        Self {
            hub: ResizeHub::new(),
            fallback,
        }
    }

    pub fn measure(&self) -> u32 {
        match terminal_size() {
            Some((Width(w), _)) => u32::from(w),
            None => self.fallback,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.hub.subscriber_count()
    }
}

impl Default for TerminalResizeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeSource for TerminalResizeSource {
    fn subscribe(&self, listener: ResizeListener) -> SubscriptionId {
        self.hub.subscribe(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.hub.unsubscribe(id);
    }

    fn poll(&self) -> bool {
        self.hub.notify(self.measure())
    }
}

/// Live subscription; unsubscribes when dropped.
pub struct ResizeSubscription {
    source: Rc<dyn ResizeSource>,
    id: SubscriptionId,
}

impl ResizeSubscription {
    pub fn new(source: Rc<dyn ResizeSource>, listener: ResizeListener) -> Self {
        let id = source.subscribe(listener);
        Self { source, id }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.source.unsubscribe(self.id);
    }
}

impl fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSubscription")
            .field("id", &self.id)
            .finish()
    }
}
