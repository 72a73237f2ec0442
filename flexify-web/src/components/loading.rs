use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex min-h-screen flex-col items-center justify-center flexify-gradient">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <div class="text-xl font-medium flex items-center gap-2">
                    <Icon icon_id={IconId::HeroiconsOutlineBolt} class="w-6 h-6 text-primary" />
                    <span>{"Flexify"}</span>
                </div>
                <div class="mt-3 flex items-center">
                    <span>{"Loading"}</span>
                    <span class="typing-dot"></span>
                    <span class="typing-dot"></span>
                    <span class="typing-dot"></span>
                </div>
            </div>
        </div>
    }
}
