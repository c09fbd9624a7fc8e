use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::component::{dispatch, selected_id, BUILDER};
use crate::builder::inspector::{self, FieldKind, FieldSpec};
use crate::builder::settings::{CategoryIcon, MenuLink, Slide, TargetType};
use crate::builder::{BlockType, Command};

/// Write one key of the selected block's settings and surface the outcome in `error`.
fn commit(key: &'static str, value: Value, mut error: Signal<Option<String>>) {
    let Some(block_id) = selected_id() else {
        return;
    };
    let outcome = dispatch(Command::EditSetting {
        block_id,
        key: key.to_string(),
        value,
    });
    error.set(outcome.err().map(|err| err.to_string()));
}

/// Empty input clears the key so the renderer falls back to its default.
fn text_or_clear(raw: String) -> Value {
    if raw.trim().is_empty() {
        Value::Null
    } else {
        Value::String(raw)
    }
}

fn current_list<T: DeserializeOwned>(key: &str) -> Vec<T> {
    BUILDER
        .read()
        .selected_block()
        .and_then(|block| block.settings.get(key))
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

/// Rewrite a whole list setting; lists are always replaced wholesale.
fn edit_list<T>(key: &'static str, error: Signal<Option<String>>, edit: impl FnOnce(Vec<T>) -> Vec<T>)
where
    T: Serialize + DeserializeOwned,
{
    let next = edit(current_list(key));
    match serde_json::to_value(next) {
        Ok(value) => commit(key, value, error),
        Err(err) => {
            let mut error = error;
            error.set(Some(err.to_string()));
        }
    }
}

#[component]
pub fn SettingsForm(block_type: BlockType) -> Element {
    let error = use_signal(|| None::<String>);
    let store = BUILDER.read();
    let Some(block) = store.selected_block() else {
        return rsx! {};
    };
    let fields = inspector::fields_for(block_type);

    rsx! {
        div { class: "settings-editor",
            if fields.is_empty() {
                p { class: "hint", "This block has no settings; it renders from live store data." }
            }
            for spec in fields.iter().copied() {
                SettingField { key: "{spec.key}", spec, value: block.settings.get(spec.key), error }
            }
            if let Some(message) = error() {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

#[component]
fn SettingField(
    spec: FieldSpec,
    #[props(!optional)] value: Option<Value>,
    error: Signal<Option<String>>,
) -> Element {
    let key = spec.key;
    let text = match &value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };

    let input = match spec.kind {
        FieldKind::Text => rsx! {
            input {
                r#type: "text",
                value: "{text}",
                oninput: move |e| commit(key, Value::String(e.value()), error),
            }
        },
        FieldKind::LongText => rsx! {
            textarea {
                rows: "3",
                value: "{text}",
                oninput: move |e| commit(key, Value::String(e.value()), error),
            }
        },
        FieldKind::Color => rsx! {
            div { class: "color-input",
                span { class: "swatch", style: "background: {text};" }
                input {
                    r#type: "text",
                    placeholder: "#RRGGBB",
                    value: "{text}",
                    onchange: move |e| commit(key, text_or_clear(e.value()), error),
                }
            }
        },
        FieldKind::Url => rsx! {
            input {
                r#type: "url",
                placeholder: "https://",
                value: "{text}",
                onchange: move |e| commit(key, text_or_clear(e.value()), error),
            }
        },
        FieldKind::Number { min, max } => rsx! {
            input {
                r#type: "number",
                min: "{min}",
                max: "{max}",
                value: "{text}",
                onchange: move |e| {
                    let raw = e.value();
                    if raw.trim().is_empty() {
                        commit(key, Value::Null, error);
                        return;
                    }
                    match raw.trim().parse::<f64>() {
                        Ok(number) => commit(key, serde_json::json!(number), error),
                        Err(_) => {
                            let mut error = error;
                            error.set(Some(format!("'{raw}' is not a number")));
                        }
                    }
                },
            }
        },
        FieldKind::Toggle { default } => {
            let checked = value.as_ref().and_then(Value::as_bool).unwrap_or(default);
            rsx! {
                input {
                    r#type: "checkbox",
                    checked,
                    onchange: move |e| commit(key, Value::Bool(e.checked()), error),
                }
            }
        }
        FieldKind::Choice(options) => {
            let current = if text.is_empty() { options[0].to_string() } else { text.clone() };
            rsx! {
                select {
                    value: "{current}",
                    onchange: move |e| commit(key, Value::String(e.value()), error),
                    for choice in options.iter() {
                        option { key: "{choice}", value: "{choice}", "{choice}" }
                    }
                }
            }
        }
        FieldKind::Slides => rsx! { SlidesEditor { slides: list_value(&value), error } },
        FieldKind::Icons => rsx! { IconsEditor { icons: list_value(&value), error } },
        FieldKind::Links => rsx! { LinksEditor { links: list_value(&value), error } },
    };

    rsx! {
        label { class: "field",
            span { "{spec.label}" }
            {input}
        }
    }
}

fn list_value<T: DeserializeOwned>(value: &Option<Value>) -> Vec<T> {
    value
        .clone()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

#[component]
fn SlidesEditor(slides: Vec<Slide>, error: Signal<Option<String>>) -> Element {
    const KEY: &str = "slides";

    rsx! {
        div { class: "list-editor",
            for (idx, slide) in slides.iter().enumerate() {
                div { key: "{slide.id}", class: "list-row",
                    div { class: "list-row-header",
                        span { {format!("Slide {}", idx + 1)} }
                        button {
                            onclick: {
                                let slide_id = slide.id;
                                move |_| edit_list::<Slide>(KEY, error, |list| inspector::remove_slide(&list, slide_id))
                            },
                            "Remove"
                        }
                    }
                    input {
                        placeholder: "Title",
                        value: "{slide.title}",
                        onchange: move |e| edit_list::<Slide>(KEY, error, |mut list| {
                            if let Some(s) = list.get_mut(idx) { s.title = e.value(); }
                            list
                        }),
                    }
                    input {
                        placeholder: "Image URL",
                        value: "{slide.image}",
                        onchange: move |e| edit_list::<Slide>(KEY, error, |mut list| {
                            if let Some(s) = list.get_mut(idx) { s.image = e.value(); }
                            list
                        }),
                    }
                    input {
                        placeholder: "Button text",
                        value: "{slide.cta}",
                        onchange: move |e| edit_list::<Slide>(KEY, error, |mut list| {
                            if let Some(s) = list.get_mut(idx) { s.cta = e.value(); }
                            list
                        }),
                    }
                    select {
                        value: "{slide.target_type.label()}",
                        onchange: move |e| {
                            let picked = TargetType::ALL.into_iter().find(|t| t.label() == e.value());
                            edit_list::<Slide>(KEY, error, |mut list| {
                                if let (Some(s), Some(target_type)) = (list.get_mut(idx), picked) {
                                    s.target_type = target_type;
                                }
                                list
                            })
                        },
                        for target_type in TargetType::ALL {
                            option { key: "{target_type.label()}", value: "{target_type.label()}", "{target_type.label()}" }
                        }
                    }
                    input {
                        placeholder: "Target",
                        value: "{slide.target}",
                        onchange: move |e| edit_list::<Slide>(KEY, error, |mut list| {
                            if let Some(s) = list.get_mut(idx) { s.target = e.value(); }
                            list
                        }),
                    }
                }
            }
            button {
                onclick: move |_| edit_list::<Slide>(KEY, error, |list| inspector::add_slide(&list)),
                "+ Add slide"
            }
        }
    }
}

#[component]
fn IconsEditor(icons: Vec<CategoryIcon>, error: Signal<Option<String>>) -> Element {
    const KEY: &str = "icons";

    rsx! {
        div { class: "list-editor",
            for (idx, icon) in icons.iter().enumerate() {
                div { key: "{icon.id}", class: "list-row",
                    input {
                        placeholder: "Label",
                        value: "{icon.label}",
                        onchange: move |e| edit_list::<CategoryIcon>(KEY, error, |mut list| {
                            if let Some(i) = list.get_mut(idx) { i.label = e.value(); }
                            list
                        }),
                    }
                    input {
                        placeholder: "Image URL",
                        value: "{icon.image}",
                        onchange: move |e| edit_list::<CategoryIcon>(KEY, error, |mut list| {
                            if let Some(i) = list.get_mut(idx) { i.image = e.value(); }
                            list
                        }),
                    }
                    input {
                        placeholder: "Collection",
                        value: "{icon.target}",
                        onchange: move |e| edit_list::<CategoryIcon>(KEY, error, |mut list| {
                            if let Some(i) = list.get_mut(idx) { i.target = e.value(); }
                            list
                        }),
                    }
                    button {
                        onclick: {
                            let icon_id = icon.id;
                            move |_| edit_list::<CategoryIcon>(KEY, error, |list| inspector::remove_icon(&list, icon_id))
                        },
                        "Remove"
                    }
                }
            }
            button {
                onclick: move |_| edit_list::<CategoryIcon>(KEY, error, |list| inspector::add_icon(&list)),
                "+ Add icon"
            }
        }
    }
}

#[component]
fn LinksEditor(links: Vec<MenuLink>, error: Signal<Option<String>>) -> Element {
    const KEY: &str = "links";

    rsx! {
        div { class: "list-editor",
            for (idx, link) in links.iter().enumerate() {
                div { key: "{link.id}", class: "list-row",
                    input {
                        placeholder: "Label",
                        value: "{link.label}",
                        onchange: move |e| edit_list::<MenuLink>(KEY, error, |mut list| {
                            if let Some(l) = list.get_mut(idx) { l.label = e.value(); }
                            list
                        }),
                    }
                    input {
                        placeholder: "Target",
                        value: "{link.target}",
                        onchange: move |e| edit_list::<MenuLink>(KEY, error, |mut list| {
                            if let Some(l) = list.get_mut(idx) { l.target = e.value(); }
                            list
                        }),
                    }
                    button {
                        onclick: {
                            let link_id = link.id;
                            move |_| edit_list::<MenuLink>(KEY, error, |list| inspector::remove_link(&list, link_id))
                        },
                        "Remove"
                    }
                }
            }
            button {
                onclick: move |_| edit_list::<MenuLink>(KEY, error, |list| inspector::add_link(&list)),
                "+ Add link"
            }
        }
    }
}
