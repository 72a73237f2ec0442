use std::rc::Rc;

use crate::components::{ChatComposer, MessageBubble, QuickActionChips, TypingIndicator};
use gloo_timers::callback::Timeout;
use i18nrs::yew::use_translation;
use shared::chat::{BOT_REPLY_DELAY_MS, ChatTranscript, can_send, placeholder_reply};
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Debug, Default, Clone, PartialEq)]
struct ChatState {
    transcript: ChatTranscript,
    typing: bool,
}

enum ChatAction {
    Send(String),
    Reply(String),
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Send(prompt) => {
                if next.transcript.push_user(&prompt).is_some() {
                    next.typing = true;
                }
            }
            ChatAction::Reply(reply) => {
                next.transcript.push_bot(reply);
                next.typing = false;
            }
        }
        Rc::new(next)
    }
}

#[function_component(ChatbotPage)]
pub fn chatbot_page() -> Html {
    let (i18n, ..) = use_translation();
    let chat = use_reducer(ChatState::default);
    let input = use_state(String::new);
    let pending_reply = use_mut_ref(|| None::<Timeout>);
    let end_ref = use_node_ref();

    {
        let end_ref = end_ref.clone();
        use_effect_with((chat.transcript.len(), chat.typing), move |_| {
            if let Some(end) = end_ref.cast::<Element>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                end.scroll_into_view_with_scroll_into_view_options(&options);
            }
            || ()
        });
    }

    let on_submit = {
        let chat = chat.clone();
        let input = input.clone();
        Callback::from(move |()| {
            if !can_send(&input, chat.typing) {
                return;
            }
            let prompt = (*input).clone();
            chat.dispatch(ChatAction::Send(prompt.clone()));
            input.set(String::new());

            let dispatcher = chat.dispatcher();
            let reply = Timeout::new(BOT_REPLY_DELAY_MS, move || {
                dispatcher.dispatch(ChatAction::Reply(placeholder_reply(&prompt)));
            });
            pending_reply.borrow_mut().replace(reply);
        })
    };

    let on_text_change = {
        let input = input.clone();
        Callback::from(move |value: String| input.set(value))
    };

    html! {
        <div class="mx-auto flex h-[calc(100vh-8rem)] w-full max-w-4xl flex-col gap-4">
            <div class="card bg-base-200 shadow">
                <div class="card-body flex-row items-center gap-4 py-4">
                    <div class="avatar placeholder">
                        <div class="w-12 rounded-full bg-secondary text-secondary-content">
                            <Icon icon_id={IconId::HeroiconsOutlineCpuChip} class="w-7 h-7" />
                        </div>
                    </div>
                    <div class="flex-1">
                        <h1 class="text-xl font-bold">{ i18n.t("chat.title") }</h1>
                        <p class="text-sm text-base-content/70">{ i18n.t("chat.subtitle") }</p>
                    </div>
                    <span class="badge badge-success badge-outline">{ i18n.t("chat.online") }</span>
                </div>
            </div>

            <div class="flex-1 overflow-y-auto rounded-box bg-base-100 p-4">
                { for chat.transcript.messages().iter().map(|message| html! {
                    <MessageBubble key={message.id.to_string()} message={message.clone()} />
                }) }
                <TypingIndicator active={chat.typing} label={i18n.t("chat.typing")} />
                <div ref={end_ref}></div>
            </div>

            <div class="space-y-3">
                <p class="text-xs uppercase tracking-wide text-base-content/50">{ i18n.t("chat.quick_actions") }</p>
                <QuickActionChips on_select={on_text_change.clone()} />
                <ChatComposer
                    text={(*input).clone()}
                    {on_text_change}
                    {on_submit}
                    busy={chat.typing}
                    placeholder={i18n.t("chat.placeholder")}
                    hint={i18n.t("chat.hint")}
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sending marks the bot as typing, which blocks further sends until the
    /// reply lands, so at most one reply is ever pending.
    #[test]
    fn test_send_blocks_until_reply() {
        let state = Rc::new(ChatState::default());
        let before = state.transcript.len();

        let state = state.reduce(ChatAction::Send("leg day?".to_string()));
        assert!(state.typing);
        assert!(!can_send("another one", state.typing));
        assert_eq!(state.transcript.len(), before + 1);

        let state = state.reduce(ChatAction::Reply(placeholder_reply("leg day?")));
        assert!(!state.typing);
        assert!(can_send("another one", state.typing));
        assert_eq!(state.transcript.len(), before + 2);
    }

    /// Blank prompts are dropped without starting a reply.
    #[test]
    fn test_blank_send_is_ignored() {
        let state = Rc::new(ChatState::default()).reduce(ChatAction::Send("   ".to_string()));
        assert!(!state.typing);
    }
}
