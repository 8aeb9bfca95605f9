use chrono::Utc;
use leptos::{
    ev::SubmitEvent,
    prelude::*,
    server_fn::codec::{GetUrl, Json},
    task::spawn_local,
};

use crate::config::PublicConfig;
use crate::contact::{Banner, ContactForm, ContactSubmission, Field, TestEmail};
use crate::content::{PERSONAL_INFO, SOCIAL_LINKS};
use crate::nav::Section;

use super::recaptcha::Recaptcha;

#[server(input = GetUrl)]
pub async fn get_public_config() -> Result<PublicConfig, ServerFnError> {
    Ok(crate::config::SiteConfig::global().public())
}

/// Validate again on the server, then forward to the email endpoint.
#[server(input = Json)]
pub async fn send_contact(submission: ContactSubmission) -> Result<Option<String>, ServerFnError> {
    use crate::config::SiteConfig;

    if let Err(errors) = submission.validate() {
        tracing::info!("rejected contact submission with {} invalid fields", errors.len());
        return Err(ServerFnError::new("invalid submission"));
    }
    crate::upstream::post_contact(SiteConfig::global(), &submission)
        .await
        .map_err(|err| {
            tracing::warn!("contact submission failed: {err}");
            ServerFnError::new(err)
        })
}

#[server(input = Json)]
pub async fn send_test_email(payload: TestEmail) -> Result<Option<String>, ServerFnError> {
    use crate::config::SiteConfig;

    crate::upstream::post_contact(SiteConfig::global(), &payload)
        .await
        .map_err(|err| {
            tracing::warn!("test email failed: {err}");
            ServerFnError::new(err)
        })
}

const INPUT_CLASS: &str = "w-full rounded-md border border-white/15 bg-white/5 px-4 py-3 text-white placeholder-white/40 focus:border-teal-300 focus:outline-none disabled:opacity-50";

fn field_value(form: &ContactForm, field: Field) -> String {
    match field {
        Field::Name => form.draft.name.clone(),
        Field::Email => form.draft.email.clone(),
        Field::Message => form.draft.message.clone(),
        Field::Verification => String::new(),
    }
}

#[component]
fn FieldError(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.errors.get(field))
            .map(|msg| view! { <p class="mt-1 text-sm text-red-400">{msg}</p> })
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let reset_captcha = ArcTrigger::new();
    let public_config = Resource::new(|| (), |_| get_public_config());

    let submitting = move || form.with(|f| f.submitting);
    let on_input = move |field: Field| {
        move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
    };

    let on_submit = {
        let reset_captcha = reset_captcha.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(submission) = form.try_update(|f| f.begin_submit(Utc::now())).flatten() else {
                return;
            };
            let reset_captcha = reset_captcha.clone();
            spawn_local(async move {
                let result = send_contact(submission).await;
                if let Err(err) = &result {
                    log::warn!("contact submission failed: {err}");
                }
                let sent = result.is_ok();
                form.try_update(|f| f.finish_submit(result));
                if sent {
                    reset_captcha.notify();
                }
            });
        }
    };

    let on_test_email = move |_| {
        let Some(payload) = form.try_update(|f| f.begin_test_email()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = send_test_email(payload).await;
            if let Err(err) = &result {
                log::warn!("test email failed: {err}");
            }
            form.try_update(|f| f.finish_test_email(result));
        });
    };

    view! {
        <section id=Section::Contact.id() class="py-24 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl lg:text-4xl font-bold mb-4 text-center">"Let's Work Together"</h2>
                <p class="text-white/60 text-center mb-12 max-w-2xl mx-auto">
                    "Have a system to scale or an integration to untangle? Send a message and I'll get back to you."
                </p>

                <div class="grid gap-12 lg:grid-cols-3">
                    <div class="space-y-6">
                        <div>
                            <h3 class="text-sm uppercase tracking-wider text-white/50">"Email"</h3>
                            <a class="text-teal-300 hover:underline" href=format!("mailto:{}", PERSONAL_INFO.email)>
                                {PERSONAL_INFO.email}
                            </a>
                        </div>
                        <div>
                            <h3 class="text-sm uppercase tracking-wider text-white/50">"Location"</h3>
                            <p>{PERSONAL_INFO.location}</p>
                        </div>
                        <div>
                            <h3 class="text-sm uppercase tracking-wider text-white/50">"Availability"</h3>
                            <p>{PERSONAL_INFO.availability}</p>
                        </div>
                        <ul class="space-y-2">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="inline-flex items-center gap-2 text-white/80 hover:text-teal-300"
                                            >
                                                <i class=format!("{} text-xl", link.icon)></i>
                                                {link.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <form class="lg:col-span-2 space-y-5" novalidate on:submit=on_submit>
                        {move || {
                            form.with(|f| f.banner.clone())
                                .map(|banner| {
                                    let (class, text) = match banner {
                                        Banner::Sent(text) => ("border-teal-400/40 bg-teal-400/10 text-teal-100", text),
                                        Banner::Failed(text) => ("border-red-400/40 bg-red-400/10 text-red-100", text),
                                    };
                                    view! {
                                        <div
                                            class=format!("flex items-start justify-between gap-4 rounded-md border p-4 {class}")
                                            role="status"
                                        >
                                            <p>{text}</p>
                                            <button
                                                type="button"
                                                aria-label="Dismiss"
                                                class="text-lg leading-none opacity-70 hover:opacity-100"
                                                on:click=move |_| form.update(|f| f.dismiss_banner())
                                            >
                                                "×"
                                            </button>
                                        </div>
                                    }
                                })
                        }}

                        <div class="grid gap-5 md:grid-cols-2">
                            <div>
                                <label for="contact-name" class="block mb-2 text-sm text-white/70">"Name"</label>
                                <input
                                    id="contact-name"
                                    type="text"
                                    autocomplete="name"
                                    placeholder="Your name"
                                    class=INPUT_CLASS
                                    prop:value=move || form.with(|f| field_value(f, Field::Name))
                                    on:input=on_input(Field::Name)
                                    disabled=submitting
                                />
                                <FieldError form field=Field::Name />
                            </div>
                            <div>
                                <label for="contact-email" class="block mb-2 text-sm text-white/70">"Email"</label>
                                <input
                                    id="contact-email"
                                    type="email"
                                    autocomplete="email"
                                    placeholder="you@company.com"
                                    class=INPUT_CLASS
                                    prop:value=move || form.with(|f| field_value(f, Field::Email))
                                    on:input=on_input(Field::Email)
                                    disabled=submitting
                                />
                                <FieldError form field=Field::Email />
                            </div>
                        </div>
                        <div>
                            <label for="contact-message" class="block mb-2 text-sm text-white/70">"Message"</label>
                            <textarea
                                id="contact-message"
                                rows="6"
                                placeholder="Tell me about your project"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| field_value(f, Field::Message))
                                on:input=on_input(Field::Message)
                                disabled=submitting
                            ></textarea>
                            <FieldError form field=Field::Message />
                        </div>

                        <div>
                            <Suspense fallback=|| view! { <div class="min-h-[78px]" /> }>
                                {move || {
                                    let reset = reset_captcha.clone();
                                    Suspend::new(async move {
                                        match public_config.await {
                                            Ok(config) => {
                                                view! {
                                                    <Recaptcha
                                                        site_key=config.recaptcha_site_key
                                                        on_verified=move |token: String| {
                                                            form.update(|f| f.verification_completed(token))
                                                        }
                                                        on_expired=move |_| form.update(|f| f.verification_expired())
                                                        on_error=move |_| {
                                                            form.update(|f| f.verification_unavailable())
                                                        }
                                                        reset
                                                    />
                                                }
                                                    .into_any()
                                            }
                                            Err(err) => {
                                                log::warn!("couldn't load site configuration: {err}");
                                                form.update(|f| f.verification_unavailable());
                                                ().into_any()
                                            }
                                        }
                                    })
                                }}
                            </Suspense>
                            <FieldError form field=Field::Verification />
                        </div>

                        <Show when=submitting>
                            <p class="text-sm text-teal-200" role="status">"Sending your message..."</p>
                        </Show>
                        <div class="flex flex-wrap items-center gap-4">
                            <button
                                type="submit"
                                class="rounded-md bg-teal-400 px-8 py-3 font-semibold text-black transition hover:bg-teal-300 disabled:cursor-not-allowed disabled:opacity-50"
                                disabled=submitting
                            >
                                {move || if submitting() { "Sending..." } else { "Send Message" }}
                            </button>
                            <button
                                type="button"
                                class="rounded-md border border-white/20 px-6 py-3 text-sm text-white/70 transition hover:border-teal-300 hover:text-teal-300 disabled:cursor-not-allowed disabled:opacity-50"
                                disabled=submitting
                                on:click=on_test_email
                            >
                                "Send Test Email"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}
