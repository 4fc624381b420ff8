use yew::prelude::*;

/// Lifecycle of the success panel inside the form.
///
/// `Inserted` renders the panel without the `active` class so its CSS
/// transition has a starting point; the form flips it to `Active` a tick later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    Hidden,
    Inserted,
    Active,
}

impl OverlayPhase {
    /// A new success while a panel is already up keeps that single panel.
    pub fn show(self) -> Self {
        match self {
            OverlayPhase::Hidden => OverlayPhase::Inserted,
            other => other,
        }
    }

    pub fn activate(self) -> Self {
        match self {
            OverlayPhase::Inserted => OverlayPhase::Active,
            other => other,
        }
    }

    pub fn dismiss(self) -> Self {
        OverlayPhase::Hidden
    }

    pub fn is_present(self) -> bool {
        self != OverlayPhase::Hidden
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessOverlayProps {
    pub phase: OverlayPhase,
    pub on_close: Callback<()>,
}

#[function_component(SuccessOverlay)]
pub fn success_overlay(props: &SuccessOverlayProps) -> Html {
    if !props.phase.is_present() {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div
            class={classes!("form-results", (props.phase == OverlayPhase::Active).then(|| "active"))}
            role="status"
        >
            <div class="form-results-panel">
                <h3>{"Message received"}</h3>
                <p>
                    {"Thanks for reaching out. A coach will get back to you within one business day to talk through your goals."}
                </p>
                <button type="button" class="form-results-close" onclick={close}>
                    {"Close"}
                </button>
            </div>
        </div>
    }
}
