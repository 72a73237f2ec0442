use shared::chat::{ChatMessage, ChatSender};
use yew::{Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq, Clone)]
pub struct MessageBubbleProps {
    pub message: ChatMessage,
}

const fn sender_classes(sender: ChatSender) -> (&'static str, &'static str) {
    match sender {
        ChatSender::User => ("chat-end", "bg-primary text-primary-content"),
        ChatSender::Bot => ("chat-start", "bg-base-200 text-base-content"),
    }
}

const fn sender_icon(sender: ChatSender) -> IconId {
    match sender {
        ChatSender::User => IconId::HeroiconsOutlineUser,
        ChatSender::Bot => IconId::HeroiconsOutlineCpuChip,
    }
}

#[function_component(MessageBubble)]
pub fn message_bubble(props: &MessageBubbleProps) -> Html {
    let message = &props.message;
    let (side, colors) = sender_classes(message.sender);

    html! {
        <div class={classes!("chat", side)}>
            <div class="chat-image avatar placeholder">
                <div class="w-9 rounded-full bg-neutral text-neutral-content">
                    <Icon icon_id={sender_icon(message.sender)} class="w-5 h-5" />
                </div>
            </div>
            <div class={classes!("chat-bubble", "whitespace-pre-wrap", "break-words", colors)}>
                { message.content.clone() }
            </div>
            <div class="chat-footer opacity-60 text-xs mt-1">
                { message.timestamp.clock_label() }
            </div>
        </div>
    }
}
