use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::typewriter::Typewriter as TypewriterMachine;
use yew::{
    AttrValue, Callback, Classes, Html, Properties, Reducible, classes, function_component, html,
    use_effect_with, use_reducer,
};

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub phrases: Vec<AttrValue>,
    /// Fired once after the last phrase has been cleared.
    #[prop_or_default]
    pub on_complete: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
}

#[derive(Debug, PartialEq)]
struct TypewriterState(TypewriterMachine);

impl Reducible for TypewriterState {
    type Action = ();

    fn reduce(self: Rc<Self>, (): ()) -> Rc<Self> {
        let mut machine = self.0.clone();
        machine.tick();
        Rc::new(Self(machine))
    }
}

/// Reveals each phrase character by character, pausing between phrases.
#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let state = {
        let phrases = props.phrases.clone();
        use_reducer(move || {
            TypewriterState(TypewriterMachine::new(
                phrases.iter().map(|phrase| phrase.to_string()),
            ))
        })
    };

    {
        let dispatcher = state.dispatcher();
        let on_complete = props.on_complete.clone();
        let delay = state.0.next_delay_ms();
        let position = (state.0.phrase_index(), state.0.displayed().len());
        use_effect_with(position, move |_| {
            let timeout = match delay {
                Some(delay) => Some(Timeout::new(delay, move || dispatcher.dispatch(()))),
                None => {
                    on_complete.emit(());
                    None
                }
            };
            move || drop(timeout)
        });
    }

    html! {
        <h1 class={classes!("text-3xl", "md:text-5xl", "font-bold", "min-h-[1.5em]", props.class.clone())}>
            { state.0.displayed() }
            if state.0.cursor_visible() {
                <span class="typewriter-caret" aria-hidden="true"></span>
            }
        </h1>
    }
}
