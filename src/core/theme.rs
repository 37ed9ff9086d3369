use super::palette::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

/// Current color scheme plus synchronous change notification.
///
/// Subscribers run inside [`ThemeSignal::set`], in subscription order, and
/// only when the theme actually changes.
#[derive(Default)]
pub struct ThemeSignal {
    current: Theme,
    next_id: u32,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(Theme)>)>,
}

impl ThemeSignal {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: initial,
            ..Self::default()
        }
    }

    #[inline]
    pub fn get(&self) -> Theme {
        self.current
    }

    pub fn subscribe(&mut self, callback: impl FnMut(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed (already removed).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Record a new theme. Returns whether it changed.
    pub fn set(&mut self, theme: Theme) -> bool {
        if theme == self.current {
            return false;
        }
        self.current = theme;
        for (_, cb) in self.subscribers.iter_mut() {
            cb(theme);
        }
        true
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
