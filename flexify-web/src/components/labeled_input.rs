use web_sys::HtmlInputElement;
use yew::{AttrValue, Callback, Html, Properties, TargetCast, classes, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct LabeledInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or(false)]
    pub disabled: bool,
    /// Message rendered under the input; also marks it invalid.
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(LabeledInput)]
pub fn labeled_input(props: &LabeledInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            on_input.emit(target.value());
        })
    };

    html! {
        <div class="form-control w-full">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{ props.label.clone() }</span>
            </label>
            <input
                id={props.id.clone()}
                type={props.input_type.clone()}
                class={classes!("input", "input-bordered", "w-full", props.error.is_some().then_some("input-error"))}
                value={props.value.clone()}
                autocomplete={props.autocomplete.clone()}
                disabled={props.disabled}
                {oninput}
            />
            if let Some(error) = props.error.clone() {
                <label class="label">
                    <span class="label-text-alt text-error">{ error }</span>
                </label>
            }
        </div>
    }
}
