use std::time::Duration;

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::success_overlay::{OverlayPhase, SuccessOverlay};
use crate::config;
use crate::submission::{transport, Effect, RevertTicket, SubmissionError, SubmissionRequest, SubmitMachine, Transition};

pub const CONTACT_FORM_ID: &str = "contact-form";
const SUBMIT_LABEL: &str = "Send Message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Program,
    Message,
}

impl Field {
    const ALL: [Field; 5] = [Field::Name, Field::Email, Field::Phone, Field::Program, Field::Message];

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Program => "program",
            Field::Message => "message",
        }
    }
}

/// Current contents of the form's controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    values: [String; 5],
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        &self.values[field as usize]
    }

    pub fn set(&mut self, field: Field, value: String) {
        self.values[field as usize] = value;
    }

    pub fn snapshot(&self) -> SubmissionRequest {
        SubmissionRequest::new(Field::ALL.iter().map(|f| (f.name(), self.get(*f))))
    }

    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(String::clear);
    }

    /// Takes a program picked outside the form. Returns whether the field
    /// changed, i.e. whether the visible select has to follow.
    pub fn adopt_program(&mut self, program: Option<&str>) -> bool {
        let program = program.unwrap_or_default();
        if self.get(Field::Program) == program {
            return false;
        }
        self.set(Field::Program, program.to_string());
        true
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Program chosen outside the form (cards, list selectors).
    #[prop_or_default]
    pub program: Option<String>,
    /// Fired whenever the form's own program value changes.
    pub on_program_change: Callback<String>,
    #[prop_or_default]
    pub highlighted: bool,
    /// Fired after the visitor dismisses the success panel.
    #[prop_or_default]
    pub on_overlay_closed: Callback<()>,
}

pub enum ContactFormMsg {
    SetField(Field, String),
    Submit(SubmitEvent),
    Resolved(Result<(), SubmissionError>),
    RevertElapsed(RevertTicket),
    ActivateOverlay,
    CloseOverlay,
}

pub struct ContactForm {
    machine: SubmitMachine,
    fields: FormFields,
    overlay: OverlayPhase,
    // Dropping a Timeout cancels it.
    revert_timer: Option<Timeout>,
    overlay_timer: Option<Timeout>,
    program_select: NodeRef,
}

impl ContactForm {
    fn apply(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendRequest => {
                    let request = self.fields.snapshot();
                    let endpoint = config::contact_endpoint();
                    ctx.link().send_future(async move {
                        let outcome = transport::send(&endpoint, &request, config::SUBMIT_TIMEOUT_MS).await;
                        ContactFormMsg::Resolved(outcome)
                    });
                }
                Effect::ShowSuccessOverlay => {
                    self.overlay = self.overlay.show();
                    let link = ctx.link().clone();
                    self.overlay_timer = Some(Timeout::new(config::OVERLAY_ACTIVATE_DELAY_MS, move || {
                        link.send_message(ContactFormMsg::ActivateOverlay);
                    }));
                }
                Effect::ClearFields => {
                    self.fields.clear();
                    ctx.props().on_program_change.emit(String::new());
                }
                Effect::ScheduleRevert { ticket, after } => {
                    let link = ctx.link().clone();
                    self.revert_timer = Some(Timeout::new(millis(after), move || {
                        link.send_message(ContactFormMsg::RevertElapsed(ticket));
                    }));
                }
            }
        }
    }

    fn text_input(&self, ctx: &Context<Self>, field: Field, kind: &'static str, placeholder: &'static str, required: bool) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::SetField(field, input.value())
        });
        html! {
            <input
                type={kind}
                name={field.name()}
                placeholder={placeholder}
                value={self.fields.get(field).to_string()}
                required={required}
                {oninput}
            />
        }
    }
}

fn millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut fields = FormFields::default();
        if let Some(program) = &ctx.props().program {
            fields.set(Field::Program, program.clone());
        }
        Self {
            machine: SubmitMachine::new(SUBMIT_LABEL, Duration::from_millis(config::ERROR_REVERT_MS as u64)),
            fields,
            overlay: OverlayPhase::Hidden,
            revert_timer: None,
            overlay_timer: None,
            program_select: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().program != old_props.program {
            self.fields.adopt_program(ctx.props().program.as_deref());
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // `selected` on an option is only an attribute to Yew; once the
        // visitor has used the select the browser ignores it, so drive the
        // live value directly.
        if let Some(select) = self.program_select.cast::<HtmlSelectElement>() {
            let program = self.fields.get(Field::Program);
            if select.value() != program {
                select.set_value(program);
            }
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::SetField(field, value) => {
                if field == Field::Program {
                    ctx.props().on_program_change.emit(value.clone());
                }
                self.fields.set(field, value);
                true
            }
            ContactFormMsg::Submit(e) => {
                e.prevent_default();
                let effects = self.machine.step(Transition::Submit);
                if effects.is_empty() {
                    info!("Ignoring submit while a previous attempt is still settling");
                    return false;
                }
                self.apply(ctx, effects);
                true
            }
            ContactFormMsg::Resolved(outcome) => {
                let effects = self.machine.step(Transition::Resolved(outcome));
                self.apply(ctx, effects);
                true
            }
            ContactFormMsg::RevertElapsed(ticket) => {
                self.revert_timer = None;
                self.machine.step(Transition::RevertElapsed(ticket));
                true
            }
            ContactFormMsg::ActivateOverlay => {
                self.overlay_timer = None;
                self.overlay = self.overlay.activate();
                true
            }
            ContactFormMsg::CloseOverlay => {
                self.overlay_timer = None;
                self.overlay = self.overlay.dismiss();
                ctx.props().on_overlay_closed.emit(());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(ContactFormMsg::Submit);
        let on_program = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactFormMsg::SetField(Field::Program, select.value())
        });
        let on_message = link.callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactFormMsg::SetField(Field::Message, area.value())
        });
        let program = self.fields.get(Field::Program);
        let disabled = self.machine.disabled();

        html! {
            <form
                id={CONTACT_FORM_ID}
                class={classes!("contact-form", ctx.props().highlighted.then(|| "highlight"))}
                action={config::contact_endpoint()}
                method="post"
                {onsubmit}
            >
                <div class="form-row">
                    { self.text_input(ctx, Field::Name, "text", "Your name", true) }
                    { self.text_input(ctx, Field::Email, "email", "Email address", true) }
                </div>
                <div class="form-row">
                    { self.text_input(ctx, Field::Phone, "tel", "Phone (optional)", false) }
                    <select ref={self.program_select.clone()} name={Field::Program.name()} onchange={on_program}>
                        <option value="" selected={program.is_empty()}>{"Choose a program"}</option>
                        { for config::PROGRAMS.iter().map(|(value, label)| html! {
                            <option value={*value} selected={program == *value}>{*label}</option>
                        }) }
                    </select>
                </div>
                <textarea
                    name={Field::Message.name()}
                    placeholder="Tell us about your goals"
                    rows="5"
                    value={self.fields.get(Field::Message).to_string()}
                    oninput={on_message}
                />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={disabled}
                    style={if disabled { "opacity: 0.7;" } else { "opacity: 1;" }}
                >
                    {self.machine.label()}
                </button>
                <SuccessOverlay phase={self.overlay} on_close={link.callback(|_| ContactFormMsg::CloseOverlay)} />
            </form>
        }
    }
}
