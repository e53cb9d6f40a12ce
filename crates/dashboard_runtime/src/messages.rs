//! Transient notification queue and its auto-dismiss bookkeeping.
//!
//! The queue itself never expires entries. The toast layer owns one timer per live key through
//! [`DismissSchedule`] and cancels it when the message leaves the queue first.

use std::{collections::HashMap, fmt};

use leptos::*;
use serde::{Deserialize, Serialize};
use system_ui::{IconName, TextTone};

/// Text rendered for messages that carry no body.
pub const DEFAULT_MESSAGE_TEXT: &str = "An error has occurred";
/// Delay before a toast dismisses itself.
pub const AUTO_DISMISS_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Severity of a [`Message`].
pub enum MessageVariant {
    /// Completed action.
    Success,
    /// Neutral notice.
    #[default]
    Info,
    /// Recoverable problem.
    Warning,
    /// Failure.
    Danger,
}

impl MessageVariant {
    /// Stable token for `data-ui-tone`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Matching text tone.
    pub fn tone(self) -> TextTone {
        match self {
            Self::Success => TextTone::Success,
            Self::Info => TextTone::Info,
            Self::Warning => TextTone::Warning,
            Self::Danger => TextTone::Danger,
        }
    }

    /// Icon shown when a message does not choose one.
    pub fn default_icon(self) -> IconName {
        match self {
            Self::Success => IconName::Checkmark,
            Self::Info => IconName::Info,
            Self::Warning => IconName::Warning,
            Self::Danger => IconName::ErrorCircle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Notification submitted through [`MessagesContext::send_message`].
pub struct Message {
    /// Explicit key. A live message with the same key is replaced.
    pub key: Option<String>,
    /// Heading.
    pub title: String,
    /// Leading icon; defaults by variant.
    pub icon: Option<IconName>,
    /// Body text; falls back to [`DEFAULT_MESSAGE_TEXT`].
    pub message: Option<String>,
    /// Severity.
    pub variant: MessageVariant,
}

impl Message {
    /// Creates a message with a title and severity.
    pub fn new(variant: MessageVariant, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            variant,
            ..Self::default()
        }
    }

    /// Success message.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(MessageVariant::Success, title)
    }

    /// Info message.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(MessageVariant::Info, title)
    }

    /// Warning message.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(MessageVariant::Warning, title)
    }

    /// Danger message.
    pub fn danger(title: impl Into<String>) -> Self {
        Self::new(MessageVariant::Danger, title)
    }

    /// Danger message carrying the error's display text.
    pub fn from_error(error: &dyn fmt::Display) -> Self {
        Self::danger("Something went wrong").with_message(error.to_string())
    }

    /// Sets an explicit key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the body text.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the icon.
    pub fn with_icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Body text, or the fallback when none was supplied.
    pub fn display_text(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_MESSAGE_TEXT)
    }

    /// Chosen icon or the variant default.
    pub fn resolved_icon(&self) -> IconName {
        self.icon.unwrap_or_else(|| self.variant.default_icon())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Live queue entry. `key` is always assigned.
pub struct QueuedMessage {
    /// Unique key within the live queue.
    pub key: String,
    /// Bumped on every send, including one that overwrites this key.
    pub revision: u64,
    /// Submitted message.
    pub message: Message,
}

/// Key and revision of a live entry. A new revision under the same key means it was overwritten.
pub type LiveKey = (String, u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Insertion-ordered queue with unique keys.
pub struct MessageQueue {
    entries: Vec<QueuedMessage>,
    next_id: u64,
    next_revision: u64,
}

impl MessageQueue {
    /// Appends `message`, or replaces the live entry with the same key in place. Returns the key.
    pub fn send(&mut self, message: Message) -> String {
        let key = match message.key.clone() {
            Some(key) => key,
            None => self.generate_key(),
        };

        self.next_revision += 1;
        let revision = self.next_revision;

        if let Some(existing) = self.entries.iter_mut().find(|entry| entry.key == key) {
            existing.revision = revision;
            existing.message = message;
        } else {
            self.entries.push(QueuedMessage {
                key: key.clone(),
                revision,
                message,
            });
        }
        key
    }

    /// Removes the entry with `key`. Returns whether one was removed.
    pub fn clear(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.key != key);
        self.entries.len() != before
    }

    /// Removes every entry.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Whether a live entry has `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    /// Live entry with `key`.
    pub fn get(&self, key: &str) -> Option<&QueuedMessage> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Live entries in queue order.
    pub fn entries(&self) -> &[QueuedMessage] {
        &self.entries
    }

    /// Live keys in queue order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key.clone()).collect()
    }

    /// Live keys with their current revision, in queue order.
    pub fn live_keys(&self) -> Vec<LiveKey> {
        self.entries
            .iter()
            .map(|entry| (entry.key.clone(), entry.revision))
            .collect()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn generate_key(&mut self) -> String {
        loop {
            self.next_id += 1;
            let key = format!("message-{}", self.next_id);
            if !self.contains(&key) {
                return key;
            }
        }
    }
}

/// Pending auto-dismiss timers keyed by message key, tagged with the revision they were started for.
#[derive(Debug)]
pub struct DismissSchedule<H> {
    pending: HashMap<String, (u64, H)>,
}

impl<H> Default for DismissSchedule<H> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }
}

impl<H> DismissSchedule<H> {
    /// Starts timers for new live entries and cancels timers whose entry is gone.
    ///
    /// An overwritten entry (same key, new revision) gets its old timer cancelled and a fresh one
    /// started. `start` may return `None` when no timer could be created; that entry is retried
    /// on the next reconcile.
    pub fn reconcile(
        &mut self,
        live: &[LiveKey],
        mut start: impl FnMut(&str, u64) -> Option<H>,
        mut cancel: impl FnMut(H),
    ) {
        let stale: Vec<String> = self
            .pending
            .iter()
            .filter(|(key, (revision, _))| {
                !live
                    .iter()
                    .any(|(live_key, live_revision)| live_key == *key && live_revision == revision)
            })
            .map(|(key, _)| key.clone())
            .collect();
        for key in stale {
            if let Some((_, handle)) = self.pending.remove(&key) {
                cancel(handle);
            }
        }

        for (key, revision) in live {
            if self.pending.contains_key(key) {
                continue;
            }
            if let Some(handle) = start(key, *revision) {
                self.pending.insert(key.clone(), (*revision, handle));
            }
        }
    }

    /// Forgets the timer for `key` after it fired. A stale revision leaves the newer timer alone.
    pub fn fired(&mut self, key: &str, revision: u64) -> Option<H> {
        match self.pending.get(key) {
            Some((pending, _)) if *pending == revision => {
                self.pending.remove(key).map(|(_, handle)| handle)
            }
            _ => None,
        }
    }

    /// Cancels every pending timer.
    pub fn cancel_all(&mut self, mut cancel: impl FnMut(H)) {
        for (_, (_, handle)) in self.pending.drain() {
            cancel(handle);
        }
    }

    /// Whether a timer is pending for `key`.
    pub fn is_pending(&self, key: &str) -> bool {
        self.pending.contains_key(key)
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no timers are pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[derive(Clone, Copy)]
/// Leptos context for sending and dismissing messages.
pub struct MessagesContext {
    /// Reactive queue.
    pub queue: RwSignal<MessageQueue>,
}

impl MessagesContext {
    /// Creates an empty queue context.
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(MessageQueue::default()),
        }
    }

    /// Queues `message` and returns its key.
    pub fn send_message(&self, message: Message) -> String {
        let mut key = String::new();
        self.queue.update(|queue| key = queue.send(message));
        key
    }

    /// Dismisses the message with `key`. Unknown keys leave the queue untouched.
    pub fn clear_message(&self, key: &str) {
        if self.queue.with_untracked(|queue| queue.contains(key)) {
            self.queue.update(|queue| {
                queue.clear(key);
            });
        }
    }

    /// Dismisses the message with `key` only if it still carries `revision`.
    ///
    /// Used by auto-dismiss timers so a timer started for an overwritten message never removes
    /// its replacement.
    pub fn expire(&self, key: &str, revision: u64) {
        let current = self.queue.with_untracked(|queue| {
            queue.get(key).map(|entry| entry.revision) == Some(revision)
        });
        if current {
            self.queue.update(|queue| {
                queue.clear(key);
            });
        }
    }

    /// Dismisses every message.
    pub fn clear_all(&self) {
        if !self.queue.with_untracked(MessageQueue::is_empty) {
            self.queue.update(MessageQueue::clear_all);
        }
    }

    /// Tracked live entries.
    pub fn messages(&self) -> Vec<QueuedMessage> {
        self.queue.with(|queue| queue.entries().to_vec())
    }

    /// Tracked live keys.
    pub fn keys(&self) -> Vec<String> {
        self.queue.with(MessageQueue::keys)
    }

    /// Tracked live keys with their revisions.
    pub fn live_keys(&self) -> Vec<LiveKey> {
        self.queue.with(MessageQueue::live_keys)
    }
}

impl Default for MessagesContext {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
/// Provides [`MessagesContext`] to descendant components.
pub fn MessagesProvider(children: Children) -> impl IntoView {
    provide_context(MessagesContext::new());
    children().into_view()
}

/// Returns the nearest [`MessagesContext`], or a detached empty queue outside a provider.
pub fn use_messages() -> MessagesContext {
    use_context::<MessagesContext>().unwrap_or_else(|| {
        logging::warn!("use_messages called outside MessagesProvider; using detached queue");
        let detached = MessagesContext::new();
        provide_context(detached);
        detached
    })
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    fn titles(queue: &MessageQueue) -> Vec<&str> {
        queue
            .entries()
            .iter()
            .map(|entry| entry.message.title.as_str())
            .collect()
    }

    #[test]
    fn send_then_clear_same_key_empties_queue() {
        let mut queue = MessageQueue::default();
        let key = queue.send(Message::success("Saved"));

        assert!(queue.clear(&key));
        assert!(queue.is_empty());
    }

    #[test]
    fn clearing_unknown_key_leaves_queue_unchanged() {
        let mut queue = MessageQueue::default();
        queue.send(Message::info("First"));
        queue.send(Message::warning("Second"));
        let before = queue.clone();

        assert!(!queue.clear("missing"));
        assert_eq!(queue, before);
    }

    #[test]
    fn colliding_keys_keep_one_entry_in_original_position() {
        let mut queue = MessageQueue::default();
        queue.send(Message::info("Upload").with_key("upload"));
        queue.send(Message::info("Other"));
        let key = queue.send(Message::success("Upload done").with_key("upload"));

        assert_eq!(key, "upload");
        assert_eq!(queue.len(), 2);
        assert_eq!(titles(&queue), vec!["Upload done", "Other"]);
    }

    #[test]
    fn generated_keys_skip_live_explicit_keys() {
        let mut queue = MessageQueue::default();
        queue.send(Message::info("Pinned").with_key("message-1"));

        let generated = queue.send(Message::info("Auto"));

        assert_eq!(generated, "message-2");
        assert_eq!(queue.keys(), vec!["message-1", "message-2"]);
    }

    #[test]
    fn missing_text_uses_fallback() {
        let message = Message::danger("Request failed");
        assert_eq!(message.display_text(), DEFAULT_MESSAGE_TEXT);
        assert_eq!(message.resolved_icon(), IconName::ErrorCircle);

        let from_error = Message::from_error(&"timeout after 30s");
        assert_eq!(from_error.variant, MessageVariant::Danger);
        assert_eq!(from_error.display_text(), "timeout after 30s");
    }

    #[test]
    fn reconcile_starts_new_timers_and_cancels_dismissed() {
        let mut schedule = DismissSchedule::<u32>::default();
        let started = Rc::new(RefCell::new(Vec::<String>::new()));
        let cancelled = Rc::new(RefCell::new(Vec::<u32>::new()));
        let mut next_handle = 0;

        let mut reconcile = |schedule: &mut DismissSchedule<u32>, keys: &[&str]| {
            let live: Vec<LiveKey> = keys.iter().map(|key| (key.to_string(), 1)).collect();
            schedule.reconcile(
                &live,
                |key, _| {
                    next_handle += 1;
                    started.borrow_mut().push(key.to_string());
                    Some(next_handle)
                },
                |handle| cancelled.borrow_mut().push(handle),
            );
        };

        reconcile(&mut schedule, &["a", "b"]);
        reconcile(&mut schedule, &["a", "b", "c"]);
        reconcile(&mut schedule, &["a", "c"]);

        assert_eq!(*started.borrow(), vec!["a", "b", "c"]);
        assert_eq!(*cancelled.borrow(), vec![2]);
        assert!(!schedule.is_pending("b"));
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn fired_timer_is_not_cancelled_later() {
        let mut schedule = DismissSchedule::<u32>::default();
        let live = vec![("toast".to_string(), 3)];
        schedule.reconcile(&live, |_, _| Some(7), |_| {});

        assert_eq!(schedule.fired("toast", 3), Some(7));

        let mut cancelled = Vec::new();
        schedule.reconcile(&[], |_, _| None, |handle| cancelled.push(handle));
        assert!(cancelled.is_empty());
    }

    #[test]
    fn overwritten_message_restarts_its_timer() {
        let mut queue = MessageQueue::default();
        let mut schedule = DismissSchedule::<u32>::default();
        let mut started = Vec::new();
        let mut cancelled = Vec::new();
        let mut next_handle = 0;

        queue.send(Message::info("Upload").with_key("upload"));
        let first = queue.live_keys();
        schedule.reconcile(
            &first,
            |key, revision| {
                next_handle += 1;
                started.push((key.to_string(), revision));
                Some(next_handle)
            },
            |handle| cancelled.push(handle),
        );

        queue.send(Message::success("Upload done").with_key("upload"));
        let second = queue.live_keys();
        schedule.reconcile(
            &second,
            |key, revision| {
                next_handle += 1;
                started.push((key.to_string(), revision));
                Some(next_handle)
            },
            |handle| cancelled.push(handle),
        );

        assert_ne!(first[0].1, second[0].1);
        assert_eq!(
            started,
            vec![("upload".to_string(), first[0].1), ("upload".to_string(), second[0].1)]
        );
        assert_eq!(cancelled, vec![1]);
        assert_eq!(schedule.fired("upload", first[0].1), None);
        assert_eq!(schedule.fired("upload", second[0].1), Some(2));
    }

    #[test]
    fn overwrite_bumps_revision_in_place() {
        let mut queue = MessageQueue::default();
        queue.send(Message::info("Upload").with_key("upload"));
        let before = queue.get("upload").map(|entry| entry.revision);

        queue.send(Message::success("Upload done").with_key("upload"));
        let after = queue.get("upload").map(|entry| (entry.revision, entry.message.title.clone()));

        assert_eq!(queue.len(), 1);
        assert!(after.as_ref().map(|(revision, _)| *revision) > before);
        assert_eq!(after.map(|(_, title)| title), Some("Upload done".to_string()));
    }

    #[test]
    fn stale_expiry_keeps_replacement() {
        let _ = leptos::create_runtime();
        let messages = MessagesContext::new();

        messages.send_message(Message::info("Upload").with_key("upload"));
        let stale = messages.live_keys()[0].1;
        messages.send_message(Message::success("Upload done").with_key("upload"));

        messages.expire("upload", stale);
        assert_eq!(messages.keys(), vec!["upload".to_string()]);

        let current = messages.live_keys()[0].1;
        messages.expire("upload", current);
        assert!(messages.messages().is_empty());
    }

    #[test]
    fn cancel_all_clears_pending() {
        let mut schedule = DismissSchedule::<u32>::default();
        let live = vec![("a".to_string(), 1), ("b".to_string(), 2)];
        schedule.reconcile(&live, |key, _| Some(key.len() as u32), |_| {});

        let mut cancelled = 0;
        schedule.cancel_all(|_| cancelled += 1);
        assert_eq!(cancelled, 2);
        assert!(schedule.is_empty());
    }

    #[test]
    fn context_send_and_clear() {
        let _ = leptos::create_runtime();
        let messages = MessagesContext::new();

        let key = messages.send_message(Message::info("Hello"));
        messages.clear_message("unknown");
        assert_eq!(messages.keys(), vec![key.clone()]);

        messages.clear_message(&key);
        assert!(messages.messages().is_empty());
    }

    #[test]
    fn consumer_without_provider_gets_empty_queue() {
        let _ = leptos::create_runtime();
        assert!(use_messages().messages().is_empty());
    }
}
