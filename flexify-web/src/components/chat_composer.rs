use shared::chat::can_send;
use web_sys::HtmlTextAreaElement;
use yew::{AttrValue, Callback, Html, Properties, TargetCast, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq, Clone)]
pub struct ChatComposerProps {
    pub text: String,
    pub on_text_change: Callback<String>,
    pub on_submit: Callback<()>,
    /// A reply is pending; sending is blocked but typing is not.
    #[prop_or(false)]
    pub busy: bool,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub hint: AttrValue,
}

/// Multiline prompt input. Enter sends, Shift+Enter inserts a newline.
#[function_component(ChatComposer)]
pub fn chat_composer(props: &ChatComposerProps) -> Html {
    let sendable = can_send(&props.text, props.busy);

    let on_change = {
        let on_text_change = props.on_text_change.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlTextAreaElement = event.target_unchecked_into();
            on_text_change.emit(target.value());
        })
    };

    let on_keydown = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: yew::events::KeyboardEvent| {
            if event.key() == "Enter" && !event.shift_key() {
                event.prevent_default();
                if sendable {
                    on_submit.emit(());
                }
            }
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: yew::events::SubmitEvent| {
            event.prevent_default();
            if sendable {
                on_submit.emit(());
            }
        })
    };

    html! {
        <form class="space-y-2" onsubmit={on_submit}>
            <div class="flex items-end gap-2">
                <textarea
                    class="textarea textarea-bordered w-full min-h-[3rem] max-h-40 resize-none"
                    rows="1"
                    placeholder={props.placeholder.clone()}
                    value={props.text.clone()}
                    oninput={on_change}
                    onkeydown={on_keydown}
                />
                <button
                    class="btn btn-primary btn-circle"
                    type="submit"
                    disabled={!sendable}
                >
                    <Icon icon_id={IconId::HeroiconsSolidPaperAirplane} class="w-5 h-5" />
                </button>
            </div>
            if !props.hint.is_empty() {
                <p class="text-xs text-base-content/50 text-center">{ props.hint.clone() }</p>
            }
        </form>
    }
}
