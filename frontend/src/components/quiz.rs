use gloo_timers::callback::Timeout;
use log::{error, info, warn};
use web_sys::HtmlInputElement;
use yew::context::ContextHandle;
use yew::prelude::*;

use crate::api;
use crate::components::toast::ToastHandle;
use crate::config;
use crate::error::LeadError;
use crate::quiz::machine::{QuizMachine, QuizStep};
use crate::quiz::questions::{QuizQuestion, QUESTIONS};

const SUCCESS_MESSAGE: &str = "Thank you! Your free guide is downloading now.";

#[derive(Properties, PartialEq)]
pub struct QuizConfig {
    /// Delay before moving on after an option is picked. Zero advances at once.
    #[prop_or(config::QUIZ_ADVANCE_DELAY_MS)]
    pub advance_delay_ms: u32,
    #[prop_or(&QUESTIONS[..])]
    pub questions: &'static [QuizQuestion],
}

pub enum QuizMsg {
    Select(usize),
    Advance,
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    Submit,
    Submitted(Result<(), LeadError>),
    ToastContext(ToastHandle),
}

pub struct InteractiveQuiz {
    machine: QuizMachine,
    advance_timer: Option<Timeout>,
    toasts: Option<ToastHandle>,
    _toast_listener: Option<ContextHandle<ToastHandle>>,
}

impl InteractiveQuiz {
    fn notify_error(&self, err: &LeadError) {
        if let Some(toasts) = &self.toasts {
            toasts.error(err.user_message());
        }
    }

    fn view_question(&self, ctx: &Context<Self>, index: usize, question: &QuizQuestion) -> Html {
        let total = self.machine.questions().len();
        let selected = self.machine.selected();

        html! {
            <div class="quiz-question">
                <p class="quiz-step-label">{format!("Question {} of {}", index + 1, total)}</p>
                <h3>{question.prompt}</h3>
                <div class="quiz-options">
                    { for question.options.iter().enumerate().map(|(i, option)| {
                        let onclick = ctx.link().callback(move |_: MouseEvent| QuizMsg::Select(i));
                        html! {
                            <button
                                class={classes!("quiz-option", (selected == Some(i)).then(|| "selected"))}
                                disabled={selected.is_some() && selected != Some(i)}
                                {onclick}
                            >
                                <span class="quiz-option-label">{option.label}</span>
                                <span class="quiz-option-description">{option.description}</span>
                            </button>
                        }
                    }) }
                </div>
            </div>
        }
    }

    fn view_capture(&self, ctx: &Context<Self>) -> Html {
        let form = self.machine.form();
        let submitting = self.machine.is_submitting();

        let on_name = ctx.link().callback(|e: InputEvent| {
            QuizMsg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let on_email = ctx.link().callback(|e: InputEvent| {
            QuizMsg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let on_phone = ctx.link().callback(|e: InputEvent| {
            QuizMsg::SetPhone(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            QuizMsg::Submit
        });

        html! {
            <form class="quiz-capture" {onsubmit}>
                <h3>{"Where should we send your free guide?"}</h3>
                <p>{"Get \"Top 5 Life Insurance Strategies\" and a personalized coverage review."}</p>
                <input
                    type="text"
                    placeholder="Full name"
                    required=true
                    value={form.name.clone()}
                    oninput={on_name}
                />
                <input
                    type="email"
                    placeholder="Email address"
                    required=true
                    value={form.email.clone()}
                    oninput={on_email}
                />
                <input
                    type="tel"
                    placeholder="Phone (optional)"
                    value={form.phone.clone()}
                    oninput={on_phone}
                />
                <button type="submit" class="quiz-submit" disabled={submitting}>
                    { if submitting { "Sending..." } else { "Get My Free Guide" } }
                </button>
            </form>
        }
    }
}

impl Component for InteractiveQuiz {
    type Message = QuizMsg;
    type Properties = QuizConfig;

    fn create(ctx: &Context<Self>) -> Self {
        let (toasts, listener) = match ctx
            .link()
            .context::<ToastHandle>(ctx.link().callback(QuizMsg::ToastContext))
        {
            Some((handle, listener)) => (Some(handle), Some(listener)),
            None => {
                warn!("Quiz rendered without a toast provider, notifications disabled");
                (None, None)
            }
        };

        Self {
            machine: QuizMachine::new(ctx.props().questions),
            advance_timer: None,
            toasts,
            _toast_listener: listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            QuizMsg::Select(option_index) => {
                if !self.machine.select(option_index) {
                    return false;
                }
                let delay = ctx.props().advance_delay_ms;
                if delay == 0 {
                    self.machine.advance();
                } else {
                    let link = ctx.link().clone();
                    self.advance_timer = Some(Timeout::new(delay, move || {
                        link.send_message(QuizMsg::Advance);
                    }));
                }
                true
            }
            QuizMsg::Advance => {
                self.advance_timer = None;
                self.machine.advance();
                true
            }
            QuizMsg::SetName(name) => {
                self.machine.set_name(name);
                true
            }
            QuizMsg::SetEmail(email) => {
                self.machine.set_email(email);
                true
            }
            QuizMsg::SetPhone(phone) => {
                self.machine.set_phone(phone);
                true
            }
            QuizMsg::Submit => {
                let lead = match self.machine.begin_submission() {
                    Ok(lead) => lead,
                    Err(LeadError::AlreadySubmitting) => return false,
                    Err(err) => {
                        warn!("Lead not submitted: {}", err);
                        self.notify_error(&err);
                        return true;
                    }
                };
                info!("Submitting lead with {} quiz answers", lead.quiz_answers.len());
                ctx.link().send_future(async move {
                    QuizMsg::Submitted(api::submit_lead(&lead).await)
                });
                true
            }
            QuizMsg::Submitted(outcome) => {
                match &outcome {
                    Ok(()) => {
                        if let Some(toasts) = &self.toasts {
                            toasts.success(SUCCESS_MESSAGE);
                        }
                        if let Err(err) = api::download_guide() {
                            error!("Could not start guide download: {}", err);
                        }
                    }
                    Err(err) => {
                        error!("Lead submission failed: {}", err);
                        self.notify_error(err);
                    }
                }
                self.machine.finish_submission(&outcome);
                true
            }
            QuizMsg::ToastContext(handle) => {
                self.toasts = Some(handle);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let progress = self.machine.progress_percent();

        let body = match (self.machine.step(), self.machine.current_question()) {
            (QuizStep::Question(index), Some(question)) => self.view_question(ctx, index, question),
            _ => self.view_capture(ctx),
        };

        html! {
            <section class="interactive-quiz" id="quiz">
                <h2>{"Find the Right Coverage in 60 Seconds"}</h2>
                <div class="quiz-progress" role="progressbar"
                    aria-valuemin="0" aria-valuemax="100" aria-valuenow={progress.to_string()}>
                    <div class="quiz-progress-fill" style={format!("width: {}%;", progress)}></div>
                </div>
                { body }
            </section>
        }
    }
}
