//! UI Components

use leptos::prelude::*;
use leptos::task::spawn_local;
use waitlist_core::FeedbackMessage;

use crate::binding::{build_flow, FormSignals};

/// Email input and join button driven by its own `WaitlistFlow`
#[component]
pub fn WaitlistForm(
    #[prop(into)] button_label: String,
    #[prop(default = "waitlist-form")] form_class: &'static str,
) -> impl IntoView {
    let signals = FormSignals::new(&button_label);

    let flow = match build_flow(signals) {
        Ok(flow) => StoredValue::new_local(flow),
        Err(err) => {
            tracing::error!(%err, "Waitlist form disabled");
            return view! {
                <div class=form_class>
                    <p class="form-unavailable">"Signups are temporarily unavailable."</p>
                </div>
            }
            .into_any();
        }
    };

    let submit = move || {
        let flow = flow.get_value();
        match flow.begin(&signals.email.get_untracked()) {
            Ok(attempt) => spawn_local(async move {
                // outcome is already on screen
                let _ = flow.submit(attempt).await;
            }),
            Err(err) => tracing::debug!(%err, "Signup not submitted"),
        }
    };

    view! {
        <div class=form_class>
            <div class="input-group">
                <input
                    type="email"
                    class="email-input"
                    placeholder="Enter your email"
                    style=move || signals.input_style()
                    prop:value=move || signals.email.get()
                    on:input=move |ev| signals.email.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    }
                />
                <button
                    class="join-waitlist-btn"
                    class:loading=move || signals.loading.get()
                    disabled=move || signals.loading.get()
                    on:click=move |ev| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <span>{move || signals.label.get()}</span>
                </button>
            </div>
            <FeedbackLine message=signals.error />
            <FeedbackLine message=signals.success />
        </div>
    }
    .into_any()
}

/// Inline error or success message under the input
#[component]
fn FeedbackLine(message: RwSignal<Option<FeedbackMessage>>) -> impl IntoView {
    move || {
        message.get().map(|message| {
            let style = format!(
                "color: {}; font-size: 14px; margin-top: 8px;",
                message.kind.color()
            );
            view! {
                <div class=message.kind.css_class() style=style>
                    {message.text}
                </div>
            }
        })
    }
}

/// Headline number with a caption
#[component]
pub fn Stat(value: RwSignal<String>, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="stat-number">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
