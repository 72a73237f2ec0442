use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::{
    Callback, Html, MouseEvent, Properties, classes, function_component, html, use_effect_with,
};
use yew_icons::{Icon, IconId};

/// Time a notification stays on screen.
pub const AUTO_HIDE_MS: u32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A single notification. Each one gets its own id, so repeating the same
/// text restarts the auto-hide timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub id: Uuid,
    pub text: String,
    pub severity: Severity,
}

impl NotificationMessage {
    fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            severity,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: Option<NotificationMessage>,
    pub on_close: Callback<()>,
}

/// Snackbar pinned to the top of the page.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.message.as_ref().map(|message| message.id), move |shown| {
            let timeout = shown
                .is_some()
                .then(|| Timeout::new(AUTO_HIDE_MS, move || on_close.emit(())));
            move || drop(timeout)
        });
    }

    let Some(message) = props.message.as_ref() else {
        return Html::default();
    };

    let (alert_class, icon) = match message.severity {
        Severity::Success => ("alert-success", IconId::HeroiconsOutlineCheckCircle),
        Severity::Error => ("alert-error", IconId::HeroiconsOutlineExclamationTriangle),
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="toast toast-top toast-center z-50">
            <div role="alert" class={classes!("alert", alert_class, "shadow-lg")}>
                <Icon icon_id={icon} class="w-5 h-5" />
                <span>{ message.text.clone() }</span>
                <button type="button" class="btn btn-ghost btn-xs" aria-label="Close" onclick={on_close}>
                    <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-4 h-4" />
                </button>
            </div>
        </div>
    }
}
