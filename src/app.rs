use gloo::console::{debug, log, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{APP_TITLE, SUBMISSION_LOG_LABEL};
use crate::controller::{FormError, FormEvent, StepFormController};
use crate::form::{Field, Submission};
use crate::notify::{ToastAction, ToastStack, Toasts};
use crate::steps::{progress, Input};

#[function_component(App)]
pub fn app() -> Html {
    let form = use_state(StepFormController::new);
    let toasts = use_reducer(ToastStack::default);

    // Every input carries name={field.key()}, so one pair of handlers covers all of them.
    let on_input = {
        let form = form.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: InputEvent| {
            if let Some((field, value)) = named_value(&e) {
                update(&form, &toasts, |c| c.set_field(field, value));
            }
        })
    };

    let on_change = {
        let form = form.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: Event| {
            if let Some((field, value)) = named_value(&e) {
                update(&form, &toasts, |c| c.set_field(field, value));
            }
        })
    };

    let on_next = {
        let form = form.clone();
        let toasts = toasts.clone();
        Callback::from(move |_| {
            update(&form, &toasts, |c| {
                if let Err(e) = c.advance() {
                    log_rejection(&e);
                }
            });
        })
    };

    let on_prev = {
        let form = form.clone();
        let toasts = toasts.clone();
        Callback::from(move |_| {
            update(&form, &toasts, |c| {
                c.retreat();
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            update(&form, &toasts, |c| {
                if let Err(e) = c.submit() {
                    log_rejection(&e);
                }
            });
        })
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let step = form.current_step();
    let p = progress(form.step_index());
    let record = form.submission();

    html! {
        <>
          <div class="bg" aria-hidden="true"></div>

          <div class="wrap">
            <div class="card">
              <div class="card-h">
                <div class="badge">{ APP_TITLE }</div>
                <div class="progress-row">
                  <div class="progress-label">{ p.label.clone() }</div>
                  <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {:.0}%;", p.percent)}></div>
                  </div>
                </div>
                <h1 class="card-t">{ step.title }</h1>
                <p class="card-p">{ step.description }</p>
              </div>

              <div class="card-b">
                <form onsubmit={on_submit}>
                  <div class="fields">
                    { for step.fields.iter().map(|(field, input)| field_view(*field, input, record, &on_input, &on_change)) }
                  </div>

                  <div class="row">
                    if !form.is_first() {
                      <button type="button" class="btn btn2" onclick={on_prev}>{ "‹ Anterior" }</button>
                    }
                    <div class="spacer"></div>
                    if form.is_last() {
                      <button type="submit" class="btn">{ "Finalizar" }</button>
                    } else {
                      <button type="button" class="btn" onclick={on_next}>{ "Próximo ›" }</button>
                    }
                  </div>
                </form>
              </div>
            </div>
          </div>

          <Toasts stack={(*toasts).clone()} {on_dismiss} />
        </>
    }
}

/// Applies one action to a copy of the controller, then flushes its events.
fn update(
    form: &UseStateHandle<StepFormController>,
    toasts: &UseReducerHandle<ToastStack>,
    action: impl FnOnce(&mut StepFormController),
) {
    let mut next = (**form).clone();
    action(&mut next);

    for event in next.drain_events() {
        match event {
            FormEvent::Notify(n) => toasts.dispatch(ToastAction::Push(n)),
            FormEvent::Submitted(record) => log_submission(&record),
        }
    }

    form.set(next);
}

fn log_submission(record: &Submission) {
    match serde_json::to_string_pretty(record) {
        Ok(json) => log!(SUBMISSION_LOG_LABEL, json),
        Err(e) => {
            warn!(format!("could not serialize submission: {e}"));
            log!(SUBMISSION_LOG_LABEL, format!("{record:?}"));
        }
    }
}

fn log_rejection(err: &FormError) {
    let FormError::MissingRequiredField { fields, .. } = err;
    let keys: Vec<&str> = fields.iter().map(|f| f.key()).collect();
    debug!(format!("{err}: {}", keys.join(", ")));
}

fn named_value(e: &Event) -> Option<(Field, String)> {
    let target = e.target()?;
    let (name, value) = if let Some(i) = target.dyn_ref::<HtmlInputElement>() {
        (i.name(), i.value())
    } else if let Some(t) = target.dyn_ref::<HtmlTextAreaElement>() {
        (t.name(), t.value())
    } else if let Some(s) = target.dyn_ref::<HtmlSelectElement>() {
        (s.name(), s.value())
    } else {
        return None;
    };
    Field::from_key(&name).map(|f| (f, value))
}

fn field_view(
    field: Field,
    input: &Input,
    record: &Submission,
    on_input: &Callback<InputEvent>,
    on_change: &Callback<Event>,
) -> Html {
    let key = field.key();
    let value = record.get(field).to_string();

    match *input {
        Input::Text { label, placeholder } | Input::Tel { label, placeholder } => {
            let kind = if matches!(input, Input::Tel { .. }) { "tel" } else { "text" };
            html! {
                <div class="field">
                    <label class="label" for={key}>{ label }</label>
                    <input
                        id={key}
                        name={key}
                        type={kind}
                        {placeholder}
                        {value}
                        oninput={on_input.clone()}
                    />
                </div>
            }
        }
        Input::TextArea { label, placeholder } => html! {
            <div class="field">
                <label class="label" for={key}>{ label }</label>
                <textarea
                    id={key}
                    name={key}
                    rows="4"
                    {placeholder}
                    {value}
                    oninput={on_input.clone()}
                />
            </div>
        },
        Input::Radio { label, options } => html! {
            <div class="field">
                <div class="label">{ label }</div>
                <div class="choices" role="radiogroup">
                    { for options.iter().map(|(opt, text)| {
                        let id = format!("{key}-{opt}");
                        html! {
                            <label class="choice" for={id.clone()}>
                                <input
                                    id={id}
                                    name={key}
                                    type="radio"
                                    value={*opt}
                                    checked={value == *opt}
                                    onchange={on_change.clone()}
                                />
                                <span>{ *text }</span>
                            </label>
                        }
                    }) }
                </div>
            </div>
        },
        Input::Select { label, placeholder, options } => html! {
            <div class="field">
                <label class="label" for={key}>{ label }</label>
                <select id={key} name={key} onchange={on_change.clone()}>
                    <option value="" disabled=true hidden=true selected={value.is_empty()}>{ placeholder }</option>
                    { for options.iter().map(|opt| html! {
                        <option value={*opt} selected={value == *opt}>{ *opt }</option>
                    }) }
                </select>
            </div>
        },
    }
}
