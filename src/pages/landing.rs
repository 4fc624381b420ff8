use std::time::Duration;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::components::contact_form::{ContactForm, CONTACT_FORM_ID};
use crate::components::nav::MenuHandle;
use crate::components::program_cards::ProgramCards;
use crate::config;
use crate::reveal;
use crate::scroll;
use crate::selection::{Origin, Selection};

fn program_selection() -> Selection {
    Selection::new(
        config::PROGRAMS.iter().map(|(value, _)| *value),
        Duration::from_millis(config::FORM_HIGHLIGHT_MS as u64),
    )
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let selection = use_state(program_selection);
    let highlighted = use_state(|| false);
    let highlight_timer = use_mut_ref(|| None::<Timeout>);

    // Reveal animations for everything marked `.reveal` once it is mounted.
    use_effect_with_deps(
        move |_| {
            let observer = reveal::observe(config::REVEAL_STAGGER_MS, config::REVEAL_THRESHOLD);
            move || drop(observer)
        },
        (),
    );

    let on_activate = {
        let selection = selection.clone();
        let highlighted = highlighted.clone();
        let highlight_timer = highlight_timer.clone();
        Callback::from(move |(raw, origin): (Option<String>, Origin)| {
            let mut next = (*selection).clone();
            let Some(outcome) = next.activate(raw.as_deref(), origin) else {
                return;
            };
            info!("Program selected: {}", outcome.value);
            selection.set(next);

            if outcome.scroll_to_form {
                scroll::scroll_to_id(CONTACT_FORM_ID);
            }
            if let Some(duration) = outcome.highlight_for {
                highlighted.set(true);
                let highlighted = highlighted.clone();
                let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
                // Replacing the handle cancels a highlight still in progress.
                *highlight_timer.borrow_mut() = Some(Timeout::new(millis, move || {
                    highlighted.set(false);
                }));
            }
        })
    };

    let on_program_change = {
        let selection = selection.clone();
        Callback::from(move |value: String| {
            let mut next = (*selection).clone();
            next.sync_from_field(&value);
            if next != *selection {
                selection.set(next);
            }
        })
    };

    // The mobile menu may still be open (and locking page scroll) behind the
    // success panel; closing it releases the lock through the nav.
    let on_overlay_closed = {
        let menu = use_context::<MenuHandle>();
        Callback::from(move |_| {
            if let Some(menu) = &menu {
                if menu.is_open() {
                    menu.set(menu.closed());
                }
            }
        })
    };

    let active = selection.active_value().map(str::to_string);

    html! {
        <div class="landing">
            <style>
                {r#"
                    .reveal {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .reveal.revealed {
                        opacity: 1;
                        transform: none;
                    }
                    .site-header {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 100;
                        transition: background 0.3s ease, padding 0.3s ease;
                    }
                    .site-header.scrolled {
                        background: rgba(12, 12, 12, 0.95);
                        padding: 0.5rem 0;
                    }
                    .program-card { cursor: pointer; }
                    .program-card.selected { border-color: #ff5a1f; }
                    .program-option.active { background: #ff5a1f; color: #fff; }
                    .contact-form { position: relative; transition: box-shadow 0.3s ease; }
                    .contact-form.highlight { box-shadow: 0 0 0 3px #ff5a1f; }
                    .form-results {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(12, 12, 12, 0.92);
                        opacity: 0;
                        transition: opacity 0.4s ease;
                    }
                    .form-results.active { opacity: 1; }
                    @media (max-width: 768px) {
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                        }
                    }
                "#}
            </style>

            <section id="top" class="hero">
                <h1 class="reveal">{"Stronger in twelve weeks. Coached every rep."}</h1>
                <p class="reveal">
                    {"One-to-one personal training built around your schedule, your history and your goals."}
                </p>
                <a href="#programs" class="btn btn-primary reveal">{"See programs"}</a>
            </section>

            <section id="about" class="about">
                <h2 class="reveal">{"How we train"}</h2>
                <div class="about-grid">
                    <div class="reveal"><h3>{"Assess"}</h3><p>{"A movement screen and strength baseline in your first session."}</p></div>
                    <div class="reveal"><h3>{"Build"}</h3><p>{"Progressive blocks that adapt to how you actually recover."}</p></div>
                    <div class="reveal"><h3>{"Sustain"}</h3><p>{"Habits and nutrition you can keep long after the program ends."}</p></div>
                </div>
            </section>

            <ProgramCards active={active.clone()} on_activate={on_activate} />

            <section id="results" class="results">
                <h2 class="reveal">{"Client results"}</h2>
                <blockquote class="reveal">{"\u{201c}Deadlift went from 60 to 120 kg and my back pain is gone.\u{201d}"}</blockquote>
                <blockquote class="reveal">{"\u{201c}First program I have ever finished. The check-ins kept me honest.\u{201d}"}</blockquote>
            </section>

            <section id="contact" class="contact">
                <h2 class="reveal">{"Start with a free consult"}</h2>
                <ContactForm
                    program={active}
                    on_program_change={on_program_change}
                    highlighted={*highlighted}
                    on_overlay_closed={on_overlay_closed}
                />
            </section>
        </div>
    }
}
