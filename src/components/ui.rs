use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
}

impl ButtonVariant {
    fn class_name(self) -> &'static str {
        match self {
            ButtonVariant::Default => "ui-button--default",
            ButtonVariant::Outline => "ui-button--outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!("ui-button", props.variant.class_name(), props.class.clone())}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckboxProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Native checkbox with a styled box. The checked state lives only here.
#[function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> Html {
    let checked = use_bool_toggle(false);

    let onchange = {
        let checked = checked.clone();
        Callback::from(move |_: Event| checked.toggle())
    };

    html! {
        <span class={classes!("ui-checkbox", (*checked).then(|| "checked"), props.class.clone())}>
            <input
                type="checkbox"
                id={props.id.clone()}
                checked={*checked}
                {onchange}
            />
            <span class="checkmark"></span>
        </span>
    }
}
