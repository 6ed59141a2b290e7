//! Dropdown Component
//!
//! A trigger button with a popup menu. Each instance owns its open flag.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownEvent {
    /// Trigger clicked
    Toggle,
    /// An item inside the menu was chosen
    Select,
    /// Click outside or Escape
    Dismiss,
}

/// Open flag after `event`.
pub fn next_open(open: bool, event: DropdownEvent) -> bool {
    match event {
        DropdownEvent::Toggle => !open,
        DropdownEvent::Select | DropdownEvent::Dismiss => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownProps {
    /// Content of the trigger button
    pub trigger: Html,
    #[prop_or_default]
    pub trigger_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    /// Whether the menu starts expanded
    #[prop_or_default]
    pub default_open: bool,
    /// Menu items
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Dropdown)]
pub fn dropdown(props: &DropdownProps) -> Html {
    let open = use_state(|| props.default_open);

    let dispatch = {
        let open = open.clone();
        Callback::from(move |event: DropdownEvent| {
            open.set(next_open(*open, event));
        })
    };

    // Escape closes the menu while it is open
    {
        let dispatch = dispatch.clone();
        use_effect_with(*open, move |is_open| {
            let listener = if *is_open {
                web_sys::window()
                    .and_then(|w| w.document())
                    .map(|document| {
                        EventListener::new(&document, "keydown", move |event| {
                            let is_escape = event
                                .dyn_ref::<KeyboardEvent>()
                                .map(|e| e.key() == "Escape")
                                .unwrap_or(false);
                            if is_escape {
                                dispatch.emit(DropdownEvent::Dismiss);
                            }
                        })
                    })
            } else {
                None
            };
            move || drop(listener)
        });
    }

    let on_toggle = dispatch.reform(|_: MouseEvent| DropdownEvent::Toggle);
    let on_dismiss = dispatch.reform(|_: MouseEvent| DropdownEvent::Dismiss);
    let on_select = dispatch.reform(|_: MouseEvent| DropdownEvent::Select);

    html! {
        <div class={classes!("dropdown", props.class.clone(), (*open).then_some("open"))}>
            <button
                type="button"
                class="dropdown-trigger"
                aria-haspopup="menu"
                aria-expanded={(*open).to_string()}
                aria-label={props.trigger_label.clone()}
                onclick={on_toggle}
            >
                { props.trigger.clone() }
            </button>
            if *open {
                <>
                    <div class="dropdown-backdrop" onclick={on_dismiss} />
                    <div class="dropdown-content" role="menu" onclick={on_select}>
                        { props.children.clone() }
                    </div>
                </>
            }
        </div>
    }
}
