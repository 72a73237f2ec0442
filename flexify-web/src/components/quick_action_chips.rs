use shared::chat::{QuickAction, QuickActionCategory, quick_actions};
use yew::{Callback, Html, Properties, classes, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct QuickActionChipsProps {
    /// Receives the chip label, which becomes the chat input.
    pub on_select: Callback<String>,
}

const fn category_icon(category: QuickActionCategory) -> IconId {
    match category {
        QuickActionCategory::Workout => IconId::HeroiconsOutlineBolt,
        QuickActionCategory::Nutrition => IconId::HeroiconsOutlineFire,
        QuickActionCategory::Progress => IconId::HeroiconsOutlineChartBar,
        QuickActionCategory::Goals => IconId::HeroiconsOutlineSparkles,
    }
}

#[function_component(QuickActionChips)]
pub fn quick_action_chips(props: &QuickActionChipsProps) -> Html {
    let chip = |action: &QuickAction| {
        let on_select = props.on_select.clone();
        let label = action.label;
        let onclick = Callback::from(move |_| on_select.emit(label.to_string()));
        html! {
            <button
                type="button"
                class={classes!("btn", "btn-outline", "btn-sm", "rounded-full", "gap-2")}
                {onclick}
            >
                <Icon icon_id={category_icon(action.category)} class="w-4 h-4" />
                { label }
            </button>
        }
    };

    html! {
        <div class="flex flex-wrap gap-2">
            { for quick_actions().iter().map(chip) }
        </div>
    }
}
