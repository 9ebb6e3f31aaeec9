use dreamknot::notification::{Notification, NotificationTiming, Phase};
use leptos::prelude::*;

use super::timers;

/// Shows a banner that removes itself. Each call is independent: banners
/// stack and each owns its own timers.
pub(super) fn present(notification: Notification, timing: NotificationTiming) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    tracing::debug!(severity = %notification.severity, "notification shown");

    let phase = ArcRwSignal::new(Phase::Entering);
    let handle = leptos::mount::mount_to(body, {
        let phase = phase.clone();
        move || view! { <NotificationBanner notification=notification phase=phase /> }
    });

    let exit_ms = timing.exit_ms;
    timers::after(timing.display_ms, move || {
        phase.set(Phase::Leaving);
        timers::after(exit_ms, move || drop(handle));
    });
}

#[component]
fn NotificationBanner(notification: Notification, phase: ArcRwSignal<Phase>) -> impl IntoView {
    let class = notification.class_name();
    let message = notification.message.clone();
    let style = move || notification.inline_style(phase.get());

    view! {
        <div class=class style=style role="status">
            {message}
        </div>
    }
}
