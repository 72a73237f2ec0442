use yew::{AttrValue, Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct TypingIndicatorProps {
    #[prop_or(false)]
    pub active: bool,
    pub label: AttrValue,
}

/// Bot-side bubble shown while a reply is pending.
#[function_component(TypingIndicator)]
pub fn typing_indicator(props: &TypingIndicatorProps) -> Html {
    if !props.active {
        return Html::default();
    }

    html! {
        <div class="chat chat-start">
            <div class="chat-image avatar placeholder">
                <div class="w-9 rounded-full bg-secondary text-secondary-content">
                    <Icon icon_id={IconId::HeroiconsOutlineCpuChip} class="w-5 h-5" />
                </div>
            </div>
            <div class="chat-bubble bg-base-200 text-base-content/70 text-sm flex items-center">
                <span>{ props.label.clone() }</span>
                <span class="typing-dot"></span>
                <span class="typing-dot"></span>
                <span class="typing-dot"></span>
            </div>
        </div>
    }
}
