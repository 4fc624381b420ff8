use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{js_sys, Element, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::scroll;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// Menu state shared through context so other parts of the page (the
/// success panel) can close the menu instead of touching the body directly.
pub type MenuHandle = UseStateHandle<MenuState>;

const LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#programs", "Programs"),
    ("#results", "Results"),
    ("#contact", "Contact"),
];

fn clicked_href(e: &MouseEvent) -> Option<String> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    target.closest("a[href]").ok()??.get_attribute("href")
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let local_menu = use_state(MenuState::default);
    let menu = use_context::<MenuHandle>().unwrap_or(local_menu);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(window) = &window {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll::is_past_threshold(scroll_y, config::STICKY_HEADER_THRESHOLD));
                    }
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }
            // Pick up a position restored by the browser before any scroll event.
            let _ = scroll_callback.as_ref().unchecked_ref::<js_sys::Function>().call0(&JsValue::NULL);

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    {
        let open = menu.is_open();
        use_effect_with_deps(move |open| {
            scroll::set_scroll_lock(*open);
            || ()
        }, open);
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    let follow_anchor = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(href) = clicked_href(&e) else {
                return;
            };
            if let Some(id) = scroll::anchor_id(&href) {
                e.prevent_default();
                scroll::scroll_to_id(id);
                menu.set(menu.closed());
            }
        })
    };

    let menu_class = if menu.is_open() {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="nav-content">
                <a href="#top" class="nav-logo" onclick={follow_anchor.clone()}>
                    {"IRONFORM"}
                </a>

                <button
                    class="burger-menu"
                    aria-label="Toggle navigation"
                    aria-controls="primary-menu"
                    aria-expanded={menu.aria_expanded()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div id="primary-menu" class={menu_class} onclick={follow_anchor}>
                    { for LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }) }
                    <a href="#contact" class="nav-cta">{"Book a session"}</a>
                </div>
            </nav>
        </header>
    }
}
