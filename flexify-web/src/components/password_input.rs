use web_sys::HtmlInputElement;
use yew::{
    AttrValue, Callback, Html, MouseEvent, Properties, TargetCast, classes, function_component,
    html,
};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq, Clone)]
pub struct PasswordInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub on_input: Callback<String>,
    /// Shared between the password and confirmation inputs of a form.
    pub visible: bool,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(PasswordInput)]
pub fn password_input(props: &PasswordInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            on_input.emit(target.value());
        })
    };
    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    let (input_type, icon, toggle_label) = if props.visible {
        ("text", IconId::HeroiconsOutlineEyeSlash, "Hide password")
    } else {
        ("password", IconId::HeroiconsOutlineEye, "Show password")
    };

    html! {
        <div class="form-control w-full">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{ props.label.clone() }</span>
            </label>
            <div class="join w-full">
                <input
                    id={props.id.clone()}
                    type={input_type}
                    class={classes!("input", "input-bordered", "join-item", "w-full", props.error.is_some().then_some("input-error"))}
                    value={props.value.clone()}
                    autocomplete={props.autocomplete.clone()}
                    disabled={props.disabled}
                    {oninput}
                />
                <button
                    type="button"
                    class="btn btn-ghost join-item"
                    aria-label={toggle_label}
                    onclick={on_toggle}
                >
                    <Icon icon_id={icon} class="w-5 h-5" />
                </button>
            </div>
            if let Some(error) = props.error.clone() {
                <label class="label">
                    <span class="label-text-alt text-error">{ error }</span>
                </label>
            }
        </div>
    }
}
