use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::selection::Origin;

pub const VALUE_ATTR: &str = "data-value";

/// Reads `data-value` from the clicked element or its nearest ancestor that
/// carries one.
fn clicked_value(e: &MouseEvent) -> Option<String> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    let holder = target.closest(&format!("[{}]", VALUE_ATTR)).ok()??;
    holder.get_attribute(VALUE_ATTR)
}

#[derive(Properties, PartialEq)]
pub struct ProgramCardsProps {
    pub active: Option<String>,
    pub on_activate: Callback<(Option<String>, Origin)>,
}

struct Program {
    value: &'static str,
    title: &'static str,
    price: &'static str,
    blurb: &'static str,
}

const CARDS: &[Program] = &[
    Program {
        value: "foundation",
        title: "Foundation",
        price: "$149 / month",
        blurb: "Two coached sessions a week, movement screening and a simple nutrition baseline.",
    },
    Program {
        value: "performance",
        title: "Performance",
        price: "$289 / month",
        blurb: "Periodised strength blocks, weekly check-ins and progress testing every six weeks.",
    },
    Program {
        value: "elite",
        title: "Elite Coaching",
        price: "$499 / month",
        blurb: "Unlimited sessions, daily messaging with your coach and a fully custom meal plan.",
    },
];

#[function_component(ProgramCards)]
pub fn program_cards(props: &ProgramCardsProps) -> Html {
    let on_card = {
        let on_activate = props.on_activate.clone();
        Callback::from(move |e: MouseEvent| {
            on_activate.emit((clicked_value(&e), Origin::Card));
        })
    };
    let on_list = {
        let on_activate = props.on_activate.clone();
        Callback::from(move |e: MouseEvent| {
            on_activate.emit((clicked_value(&e), Origin::List));
        })
    };
    let active = props.active.as_deref();

    html! {
        <section id="programs" class="programs">
            <h2 class="reveal">{"Pick your program"}</h2>
            <div class="program-grid">
                { for CARDS.iter().map(|p| html! {
                    <div
                        class={classes!("program-card", "reveal", (active == Some(p.value)).then(|| "selected"))}
                        data-value={p.value}
                        onclick={on_card.clone()}
                    >
                        <h3>{p.title}</h3>
                        <p class="program-price">{p.price}</p>
                        <p>{p.blurb}</p>
                        <span class="program-cta">{"Choose this program"}</span>
                    </div>
                }) }
            </div>
            <ul class="program-list" role="listbox">
                { for config::PROGRAMS.iter().map(|(value, label)| {
                    let is_active = active == Some(*value);
                    html! {
                        <li
                            class={classes!("program-option", is_active.then(|| "active"))}
                            role="option"
                            aria-selected={is_active.to_string()}
                            data-value={*value}
                            onclick={on_list.clone()}
                        >
                            {*label}
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}
