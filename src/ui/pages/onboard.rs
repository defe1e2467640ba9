use std::time::Duration;

use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{
        onboarding::{BIO_MAX_CHARS, SubmissionReceipt},
        submit_application, validate, ApplicationForm, ArtistApplication, FieldError, CATEGORIES,
        EXPERIENCE_BRACKETS, LANGUAGES, PRICE_RANGES,
    },
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

/// Stand-in for the network round trip a real backend would take.
const SUBMIT_DELAY: Duration = Duration::from_secs(2);

#[component]
pub fn OnboardPage() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let categories = use_signal(Vec::<String>::new);
    let languages = use_signal(Vec::<String>::new);
    let mut experience = use_signal(String::new);
    let mut price_range = use_signal(String::new);
    let mut portfolio = use_signal(String::new);

    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut submitting = use_signal(|| false);
    let submitted = use_signal(|| None::<SubmissionReceipt>);

    if let Some(receipt) = submitted() {
        let reference = receipt.reference;
        return rsx! {
            div { class: "flex min-h-screen items-center justify-center bg-gray-50 p-4",
                div { class: "w-full max-w-lg p-8 text-center {theme::PANEL}",
                    div { class: "mx-auto mb-6 flex h-20 w-20 items-center justify-center rounded-full bg-green-100",
                        span { class: "text-4xl", "✅" }
                    }
                    h2 { class: "mb-4 text-2xl font-bold text-gray-900", "Application Submitted!" }
                    p { class: "mb-4 text-gray-600",
                        "Thank you for joining Stageline! We'll review your profile and contact you within 24-48 hours with next steps to activate your artist account."
                    }
                    p { class: "mb-6 text-xs text-gray-400", "Reference: {reference}" }
                    div { class: "space-y-2 text-sm text-gray-500",
                        p { "📧 Check your email for confirmation" }
                        p { "📱 Keep your phone handy for verification" }
                        p { "🎭 Start preparing your portfolio" }
                    }
                    button {
                        class: "mt-6 {theme::BTN_PRIMARY}",
                        onclick: move |_| { nav.push(Route::Home {}); },
                        "Return to Home"
                    }
                }
            }
        };
    }

    let bio_count = bio().chars().count();

    let on_submit = {
        let toasts = toasts.clone();
        let mut submitted = submitted.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if submitting() {
                return;
            }
            let form = ApplicationForm {
                name: name(),
                email: email(),
                phone: phone(),
                location: location(),
                bio: bio(),
                categories: categories(),
                languages: languages(),
                experience: experience(),
                price_range: price_range(),
                portfolio: portfolio(),
            };
            let found = validate(&form);
            if !found.is_empty() {
                errors.set(found);
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    "Please fix the highlighted fields before submitting.",
                );
                return;
            }
            errors.set(Vec::new());
            submitting.set(true);
            let application = ArtistApplication::from_form(&form);
            let toasts = toasts.clone();
            spawn(async move {
                let receipt = submit_application(application, SUBMIT_DELAY).await;
                submitting.set(false);
                push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    "Application submitted! We'll review your profile and get back to you within 24-48 hours.",
                );
                submitted.set(Some(receipt));
            });
        }
    };

    rsx! {
        section { class: "{theme::PAGE_HERO}",
            div { class: "mx-auto max-w-4xl px-4 sm:px-6 lg:px-8",
                h1 { class: "mb-4 text-4xl font-bold", "Join as an Artist" }
                p { class: "text-xl text-purple-100",
                    "Share your talent with event planners across India and grow your performance career"
                }
            }
        }

        div { class: "mx-auto max-w-4xl px-4 py-8 sm:px-6 lg:px-8",
            form { class: "space-y-8", onsubmit: on_submit,
                // Personal information
                section { class: "p-6 {theme::PANEL}",
                    h2 { class: "text-lg font-semibold text-gray-900", "👤 Personal Information" }
                    p { class: "mb-6 text-sm text-gray-500", "Tell us about yourself and your artistic background" }
                    div { class: "grid grid-cols-1 gap-6 md:grid-cols-2",
                        div {
                            label { class: "{theme::LABEL}", "Full Name *" }
                            input {
                                class: "mt-1 {theme::INPUT}",
                                placeholder: "Enter your full name",
                                value: name(),
                                oninput: move |evt| name.set(evt.value()),
                            }
                            FieldMessage { errors: errors(), field: "name" }
                        }
                        div {
                            label { class: "{theme::LABEL}", "Email Address *" }
                            input {
                                class: "mt-1 {theme::INPUT}",
                                r#type: "email",
                                placeholder: "your.email@example.com",
                                value: email(),
                                oninput: move |evt| email.set(evt.value()),
                            }
                            FieldMessage { errors: errors(), field: "email" }
                        }
                        div {
                            label { class: "{theme::LABEL}", "Phone Number *" }
                            input {
                                class: "mt-1 {theme::INPUT}",
                                placeholder: "+91 98765 43210",
                                value: phone(),
                                oninput: move |evt| phone.set(evt.value()),
                            }
                            FieldMessage { errors: errors(), field: "phone" }
                        }
                        div {
                            label { class: "{theme::LABEL}", "Location *" }
                            input {
                                class: "mt-1 {theme::INPUT}",
                                placeholder: "City, State",
                                value: location(),
                                oninput: move |evt| location.set(evt.value()),
                            }
                            FieldMessage { errors: errors(), field: "location" }
                        }
                    }
                    div { class: "mt-6",
                        label { class: "{theme::LABEL}", "Artist Bio *" }
                        textarea {
                            class: "mt-1 min-h-[120px] {theme::INPUT}",
                            placeholder: "Tell us about your artistic journey, experience, and what makes you unique... (50-500 characters)",
                            value: bio(),
                            oninput: move |evt| bio.set(evt.value()),
                        }
                        p { class: "mt-1 text-xs text-gray-500", "{bio_count}/{BIO_MAX_CHARS} characters" }
                        FieldMessage { errors: errors(), field: "bio" }
                    }
                }

                // Professional details
                section { class: "p-6 {theme::PANEL}",
                    h2 { class: "text-lg font-semibold text-gray-900", "💼 Professional Details" }
                    p { class: "mb-6 text-sm text-gray-500", "Help us understand your artistic specializations and experience" }
                    div {
                        label { class: "{theme::LABEL}", "Performance Categories * (Select all that apply)" }
                        CheckboxGrid { options: CATEGORIES.to_vec(), selected: categories }
                        FieldMessage { errors: errors(), field: "categories" }
                    }
                    div { class: "mt-6 grid grid-cols-1 gap-6 md:grid-cols-2",
                        div {
                            label { class: "{theme::LABEL}", "Years of Experience *" }
                            select {
                                class: "mt-1 {theme::SELECT}",
                                value: experience(),
                                onchange: move |evt| experience.set(evt.value()),
                                option { value: "", "Select experience level" }
                                for (value, label) in EXPERIENCE_BRACKETS.iter() {
                                    option { value: "{value}", "{label}" }
                                }
                            }
                            FieldMessage { errors: errors(), field: "experience" }
                        }
                        div {
                            label { class: "{theme::LABEL}", "Price Range *" }
                            select {
                                class: "mt-1 {theme::SELECT}",
                                value: price_range(),
                                onchange: move |evt| price_range.set(evt.value()),
                                option { value: "", "Select price range" }
                                for range in PRICE_RANGES.iter() {
                                    option { value: "{range}", "{range}" }
                                }
                            }
                            FieldMessage { errors: errors(), field: "price_range" }
                        }
                    }
                    div { class: "mt-6",
                        label { class: "{theme::LABEL}", "Portfolio/Website URL" }
                        input {
                            class: "mt-1 {theme::INPUT}",
                            r#type: "url",
                            placeholder: "https://your-portfolio.com or YouTube channel",
                            value: portfolio(),
                            oninput: move |evt| portfolio.set(evt.value()),
                        }
                        p { class: "mt-1 text-xs text-gray-500",
                            "Optional: Share your portfolio, YouTube channel, or social media profile"
                        }
                        FieldMessage { errors: errors(), field: "portfolio" }
                    }
                }

                // Languages
                section { class: "p-6 {theme::PANEL}",
                    h2 { class: "text-lg font-semibold text-gray-900", "🌐 Languages & Preferences" }
                    p { class: "mb-6 text-sm text-gray-500", "Help event planners understand your linguistic capabilities" }
                    label { class: "{theme::LABEL}", "Languages Spoken * (Select all that apply)" }
                    CheckboxGrid { options: LANGUAGES.to_vec(), selected: languages }
                    FieldMessage { errors: errors(), field: "languages" }
                }

                div { class: "flex justify-center",
                    button {
                        class: "px-12 py-4 text-lg {theme::BTN_PRIMARY}",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "submit-spinner mr-2 inline-block h-4 w-4 rounded-full border-b-2 border-white" }
                            "Submitting Application..."
                        } else {
                            "Submit Artist Application"
                        }
                    }
                }
            }
        }
    }
}

/// Multi-select rendered as a grid of checkboxes; toggles membership in the
/// backing signal.
#[component]
fn CheckboxGrid(options: Vec<&'static str>, selected: Signal<Vec<String>>) -> Element {
    rsx! {
        div { class: "mt-2 grid grid-cols-2 gap-3 md:grid-cols-3",
            for label in options {
                CheckboxOption { label, selected }
            }
        }
    }
}

#[component]
fn CheckboxOption(label: &'static str, selected: Signal<Vec<String>>) -> Element {
    let checked = selected.with(|values| values.iter().any(|v| v == label));
    let mut selected = selected.clone();

    rsx! {
        label { class: "flex cursor-pointer items-center gap-2 text-sm text-gray-700",
            input {
                r#type: "checkbox",
                class: "h-4 w-4 accent-purple-600",
                checked: checked,
                onchange: move |_| {
                    selected.with_mut(|values| {
                        if let Some(index) = values.iter().position(|v| v == label) {
                            values.remove(index);
                        } else {
                            values.push(label.to_string());
                        }
                    });
                },
            }
            "{label}"
        }
    }
}

/// Inline validation message for one form field, if any.
#[component]
fn FieldMessage(errors: Vec<FieldError>, field: &'static str) -> Element {
    let message = errors.iter().find(|err| err.field() == field);
    match message {
        Some(err) => rsx! {
            p { class: "{theme::FIELD_ERROR}", "{err}" }
        },
        None => rsx! { Fragment {} },
    }
}
