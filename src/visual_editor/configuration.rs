use dioxus::prelude::*;
use serde_json::Value;

use super::component::{dispatch, BUILDER};
use crate::builder::tree::{Language, LogoShape, TextDirection, TitleLines, UserAccounts};
use crate::builder::{Command, ThemeSettings};

#[derive(Clone, Copy, Debug, PartialEq)]
enum ConfigTab {
    LogoAndColors,
    General,
    LayoutJson,
}

impl ConfigTab {
    const ALL: [ConfigTab; 3] = [ConfigTab::LogoAndColors, ConfigTab::General, ConfigTab::LayoutJson];

    fn label(self) -> &'static str {
        match self {
            ConfigTab::LogoAndColors => "Logo & Colors",
            ConfigTab::General => "General Settings",
            ConfigTab::LayoutJson => "Layout JSON",
        }
    }
}

fn edit_theme(key: &str, value: Value, mut status: Signal<Option<String>>) {
    let outcome = dispatch(Command::EditTheme {
        key: key.to_string(),
        value,
    });
    status.set(outcome.err().map(|err| err.to_string()));
}

fn edit_global(key: &str, value: Value, mut status: Signal<Option<String>>) {
    let outcome = dispatch(Command::EditGlobal {
        key: key.to_string(),
        value,
    });
    status.set(outcome.err().map(|err| err.to_string()));
}

#[component]
pub fn ConfigurationPage() -> Element {
    let mut tab = use_signal(|| ConfigTab::LogoAndColors);
    let status = use_signal(|| None::<String>);

    rsx! {
        div { class: "config-page",
            nav { class: "config-tabs",
                for item in ConfigTab::ALL {
                    button {
                        key: "{item.label()}",
                        class: if tab() == item { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(item),
                        "{item.label()}"
                    }
                }
            }
            div { class: "config-body",
                {match tab() {
                    ConfigTab::LogoAndColors => rsx! { LogoAndColors { status } },
                    ConfigTab::General => rsx! { GeneralSettings { status } },
                    ConfigTab::LayoutJson => rsx! { LayoutJson { status } },
                }}
                if let Some(message) = status() {
                    p { class: "status", "{message}" }
                }
            }
        }
    }
}

#[component]
fn LogoAndColors(status: Signal<Option<String>>) -> Element {
    let theme = BUILDER.read().theme().clone();
    let shapes = [LogoShape::Square, LogoShape::Rectangle];

    rsx! {
        section {
            h2 { "Logo" }
            div { class: "shape-picker",
                for shape in shapes {
                    button {
                        key: "{shape:?}",
                        class: if theme.logo_shape == shape { "shape active" } else { "shape" },
                        onclick: move |_| edit_theme("logo_shape", serde_json::json!(shape), status),
                        "{shape:?}"
                        small { "{shape.recommended_size()}" }
                    }
                }
            }
            label { class: "field",
                span { "Logo URL" }
                input {
                    r#type: "url",
                    placeholder: "https://",
                    value: "{theme.logo_url}",
                    onchange: move |e| edit_theme("logo_url", Value::String(e.value()), status),
                }
            }
            if !theme.logo_url.is_empty() {
                img { class: "logo-preview", src: "{theme.logo_url}" }
            }

            h2 { "Colors" }
            ColorRow { label: "Primary", key_name: "primary_color", value: theme.primary_color.clone(), status }
            ColorRow { label: "Secondary", key_name: "secondary_color", value: theme.secondary_color.clone(), status }
            ColorRow { label: "Accent", key_name: "accent_color", value: theme.accent_color.clone(), status }
            ColorRow { label: "Slider", key_name: "slider_color", value: theme.slider_color.clone(), status }
            ColorRow { label: "Product Title", key_name: "title_color", value: theme.title_color.clone(), status }
            ColorRow { label: "Price", key_name: "price_color", value: theme.price_color.clone(), status }
            ColorRow { label: "Compare Price", key_name: "compare_price_color", value: theme.compare_price_color.clone(), status }
            ColorRow { label: "Button Background", key_name: "button_background", value: theme.button_background.clone(), status }
            ColorRow { label: "Button Text", key_name: "button_text", value: theme.button_text.clone(), status }

            label { class: "field",
                span { "Corner radius (px)" }
                input {
                    r#type: "number",
                    min: "0",
                    max: "32",
                    value: "{theme.border_radius}",
                    onchange: move |e| match e.value().trim().parse::<u32>() {
                        Ok(radius) => edit_theme("border_radius", serde_json::json!(radius), status),
                        Err(_) => {
                            let mut status = status;
                            status.set(Some("Corner radius must be a whole number".to_string()));
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ColorRow(
    label: &'static str,
    key_name: &'static str,
    value: String,
    status: Signal<Option<String>>,
) -> Element {
    rsx! {
        label { class: "field",
            span { "{label}" }
            div { class: "color-input",
                span { class: "swatch", style: "background: {value};" }
                input {
                    r#type: "text",
                    value: "{value}",
                    onchange: move |e| edit_theme(key_name, Value::String(e.value()), status),
                }
            }
        }
    }
}

#[component]
fn GeneralSettings(status: Signal<Option<String>>) -> Element {
    let store = BUILDER.read();
    let theme = store.theme();
    let global = store.global();

    rsx! {
        section {
            label { class: "field",
                span { "Primary Language" }
                select {
                    value: "{global.language.label()}",
                    onchange: move |e| {
                        if let Some(language) = Language::ALL.into_iter().find(|l| l.label() == e.value()) {
                            edit_global("language", serde_json::json!(language), status);
                        }
                    },
                    for language in Language::ALL {
                        option { key: "{language.label()}", value: "{language.label()}", "{language.label()}" }
                    }
                }
            }
            label { class: "field",
                span { "Font" }
                select {
                    value: "{theme.font_family}",
                    onchange: move |e| edit_theme("font_family", Value::String(e.value()), status),
                    for font in ThemeSettings::FONTS {
                        option { key: "{font}", value: "{font}", "{font}" }
                    }
                }
            }
            div { class: "field",
                span { "User Accounts" }
                div { class: "shape-picker",
                    for accounts in UserAccounts::ALL {
                        button {
                            key: "{accounts.label()}",
                            class: if global.user_accounts == accounts { "shape active" } else { "shape" },
                            onclick: move |_| edit_global("user_accounts", serde_json::json!(accounts), status),
                            "{accounts.label()}"
                        }
                    }
                }
            }
            div { class: "field",
                span { "Direction" }
                div { class: "shape-picker",
                    for direction in TextDirection::ALL {
                        button {
                            key: "{direction.label()}",
                            class: if global.direction == direction { "shape active" } else { "shape" },
                            onclick: move |_| edit_global("direction", serde_json::json!(direction), status),
                            "{direction.label()}"
                        }
                    }
                }
            }
            div { class: "field",
                span { "Product Title Length" }
                div { class: "shape-picker",
                    for lines in TitleLines::ALL {
                        button {
                            key: "{lines.label()}",
                            class: if theme.title_lines == lines { "shape active" } else { "shape" },
                            onclick: move |_| edit_theme("title_lines", serde_json::json!(lines), status),
                            "{lines.label()}"
                        }
                    }
                }
            }
            label { class: "field inline",
                input {
                    r#type: "checkbox",
                    checked: global.show_search,
                    onchange: move |e| edit_global("show_search", Value::Bool(e.checked()), status),
                }
                span { "Show search" }
            }
            label { class: "field inline",
                input {
                    r#type: "checkbox",
                    checked: global.guest_checkout,
                    onchange: move |e| edit_global("guest_checkout", Value::Bool(e.checked()), status),
                }
                span { "Allow guest checkout" }
            }
            label { class: "field inline",
                input {
                    r#type: "checkbox",
                    checked: global.marquee_enabled,
                    onchange: move |e| edit_global("marquee_enabled", Value::Bool(e.checked()), status),
                }
                span { "Show store-wide announcement bar" }
            }
            label { class: "field",
                span { "Announcement text" }
                input {
                    r#type: "text",
                    value: "{global.marquee_text}",
                    oninput: move |e| edit_global("marquee_text", Value::String(e.value()), status),
                }
            }
        }
    }
}

#[component]
fn LayoutJson(status: Signal<Option<String>>) -> Element {
    let mut draft = use_signal(|| BUILDER.read().export_json().unwrap_or_default());

    rsx! {
        section {
            p { class: "hint", "The full configuration tree pushed to the mobile app." }
            textarea {
                class: "json-editor",
                rows: "24",
                value: "{draft}",
                oninput: move |e| draft.set(e.value()),
            }
            div { class: "modal-actions",
                button {
                    onclick: move |_| match BUILDER.read().export_json() {
                        Ok(json) => draft.set(json),
                        Err(err) => {
                            let mut status = status;
                            status.set(Some(err.to_string()));
                        }
                    },
                    "Refresh"
                }
                button {
                    class: "primary",
                    onclick: move |_| {
                        let mut status = status;
                        match dispatch(Command::Import(draft())) {
                            Ok(()) => status.set(Some("Layout imported".to_string())),
                            Err(err) => status.set(Some(err.to_string())),
                        }
                    },
                    "Import"
                }
            }
        }
    }
}
