#[cfg(target_arch = "wasm32")]
use std::time::Duration;

use leptos::{leptos_dom::helpers::TimeoutHandle, *};
use system_ui::{ToastRegion, ToastSurface};

#[cfg(target_arch = "wasm32")]
use crate::messages::AUTO_DISMISS_MS;
use crate::{
    messages::{use_messages, DismissSchedule, MessagesContext},
    theme::use_theme,
};

type TimerSchedule = StoredValue<DismissSchedule<TimeoutHandle>>;

#[cfg(target_arch = "wasm32")]
fn start_dismiss_timer(
    schedule: TimerSchedule,
    messages: MessagesContext,
    key: &str,
    revision: u64,
) -> Option<TimeoutHandle> {
    let key = key.to_string();
    set_timeout_with_handle(
        move || {
            schedule.update_value(|schedule| {
                schedule.fired(&key, revision);
            });
            messages.expire(&key, revision);
        },
        Duration::from_millis(AUTO_DISMISS_MS),
    )
    .map_err(|err| logging::warn!("toast dismiss timer failed: {err:?}"))
    .ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn start_dismiss_timer(
    _schedule: TimerSchedule,
    _messages: MessagesContext,
    _key: &str,
    _revision: u64,
) -> Option<TimeoutHandle> {
    None
}

#[component]
/// Renders the message queue as toasts and dismisses each one after a fixed delay.
pub fn ToastLayer() -> impl IntoView {
    let messages = use_messages();
    let theme = use_theme();
    let schedule: TimerSchedule = store_value(DismissSchedule::default());

    create_effect(move |_| {
        let live = messages.live_keys();
        schedule.update_value(|pending| {
            pending.reconcile(
                &live,
                |key, revision| start_dismiss_timer(schedule, messages, key, revision),
                |handle| handle.clear(),
            );
        });
    });

    on_cleanup(move || {
        schedule.update_value(|pending| pending.cancel_all(|handle| handle.clear()));
    });

    view! {
        <ToastRegion color_mode=Signal::derive(move || theme.color_mode())>
            <For
                each=move || messages.messages()
                key=|entry| (entry.key.clone(), entry.revision)
                children=move |entry| {
                    let key = entry.key.clone();
                    let message = entry.message;
                    let body = message.display_text().to_string();
                    view! {
                        <ToastSurface
                            title=message.title.clone()
                            tone=message.variant.tone()
                            icon=message.resolved_icon()
                            on_dismiss=Callback::new(move |_| messages.clear_message(&key))
                        >
                            {body}
                        </ToastSurface>
                    }
                }
            />
        </ToastRegion>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::messages::Message;

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn entries_without_a_timer_are_retried_on_next_reconcile() {
        let _ = leptos::create_runtime();
        let messages = MessagesContext::new();
        let schedule: TimerSchedule = store_value(DismissSchedule::default());
        messages.send_message(Message::info("One"));
        messages.send_message(Message::info("Two"));

        let mut attempts = 0;
        for _ in 0..2 {
            let live = messages.live_keys();
            schedule.update_value(|pending| {
                pending.reconcile(
                    &live,
                    |key, revision| {
                        attempts += 1;
                        start_dismiss_timer(schedule, messages, key, revision)
                    },
                    |handle| handle.clear(),
                );
            });
        }

        assert_eq!(attempts, 4);
        assert!(schedule.with_value(DismissSchedule::is_empty));
    }
}
