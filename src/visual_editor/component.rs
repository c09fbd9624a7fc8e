use dioxus::prelude::*;
use tracing::{debug, warn};

use super::block_view::BlockPreview;
use super::settings_editor::SettingsForm;
use crate::builder::render::render;
use crate::builder::{catalog, BlockType, BuilderStore, Command, MoveDirection, Screen, Visibility};
use crate::config::BuilderConfig;
use crate::error::Result;

pub static BUILDER: GlobalSignal<BuilderStore> = Signal::global(initial_store);

fn initial_store() -> BuilderStore {
    let settings = BuilderConfig::current();
    BuilderStore::seeded(settings).unwrap_or_else(|err| {
        warn!(error = %err, "starter layout rejected, opening an empty canvas");
        BuilderStore::new(settings)
    })
}

/// Apply a command to the shared store.
pub fn dispatch(command: Command) -> Result<()> {
    debug!(?command, "dispatch");
    BUILDER.write().dispatch(command).inspect_err(|err| {
        // the store already logged the quota hit and raised the upgrade prompt
        if !err.is_quota() {
            warn!(error = %err, "command rejected");
        }
    })
}

/// Fire-and-forget variant for buttons whose failure is already surfaced by the store.
pub fn send(command: Command) {
    let _ = dispatch(command);
}

/// The selected block's id, if any.
pub fn selected_id() -> Option<String> {
    BUILDER.read().selected_id().map(str::to_string)
}

#[component]
pub fn VisualEditor() -> Element {
    let show_upgrade = BUILDER.read().upgrade_prompt();

    rsx! {
        div { class: "visual-editor",
            div { class: "toolbox", LibraryPanel {} }
            div { class: "canvas-wrapper", Canvas {} }
            div { class: "properties", PropertiesPanel {} }
            if show_upgrade {
                UpgradeModal {}
            }
        }
    }
}

#[component]
fn LibraryPanel() -> Element {
    let store = BUILDER.read();
    let screen = store.active_screen();
    let used = store.active_blocks().len();
    let limit = store.home_limit();
    let trial = !store.plan().is_paid();

    rsx! {
        h2 { "Blocks" }
        if trial && screen == Screen::Home {
            p { class: "quota", "{used} / {limit} blocks on the trial plan" }
        }
        for category in catalog::categories_for(screen) {
            div { key: "{category.label()}", class: "library-section",
                h3 { "{category.label()}" }
                for block_type in catalog::eligible_types(screen, category) {
                    LibraryItem { key: "{block_type.tag()}", block_type }
                }
            }
        }
    }
}

#[component]
fn LibraryItem(block_type: BlockType) -> Element {
    let meta = catalog::metadata_for(block_type);

    rsx! {
        button {
            class: "library-item",
            title: "{meta.description}",
            onclick: move |_| send(Command::AddBlock(block_type)),
            span { class: "library-icon", "{meta.icon}" }
            div {
                div { class: "library-label", "{meta.label}" }
                div { class: "library-description", "{meta.description}" }
            }
        }
    }
}

#[component]
fn Canvas() -> Element {
    let mut audience = use_signal(|| Visibility::All);
    let store = BUILDER.read();
    let active = store.active_screen();
    let theme = store.theme();
    let global = store.global();
    let shown: Vec<String> = store
        .active_blocks()
        .iter()
        .filter(|entry| entry.visibility.shows_for(audience()))
        .map(|entry| entry.id.clone())
        .collect();

    rsx! {
        div { class: "screen-tabs",
            for screen in Screen::ALL {
                button {
                    key: "{screen}",
                    class: if screen == active { "tab active" } else { "tab" },
                    onclick: move |_| send(Command::SwitchScreen(screen)),
                    "{screen}"
                }
            }
        }
        div { class: "audience",
            span { "Preview as" }
            select {
                value: "{audience().label()}",
                onchange: move |e| {
                    if let Some(next) = Visibility::ALL.into_iter().find(|v| v.label() == e.value()) {
                        audience.set(next);
                    }
                },
                for visibility in Visibility::ALL {
                    option { key: "{visibility.label()}", value: "{visibility.label()}", "{visibility.label()}" }
                }
            }
        }
        div {
            class: "device-frame",
            dir: "{global.direction.attr()}",
            lang: "{global.language.code()}",
            style: "font-family: {theme.font_family}, system-ui; direction: {global.direction.attr()};",
            onclick: move |_| send(Command::ClearSelection),
            div { class: "device-header",
                if theme.logo_url.is_empty() {
                    span { class: "device-brand", style: "color: {theme.accent_color};", "STORE" }
                } else {
                    img { class: "device-logo", src: "{theme.logo_url}" }
                }
                if global.show_search {
                    span { class: "device-search", title: "Search", "🔍" }
                }
            }
            if global.marquee_enabled && !global.marquee_text.is_empty() {
                div { class: "block-marquee", style: "background: {theme.accent_color}; color: #fff;",
                    div { class: "animate-marquee", "{global.marquee_text}" }
                }
            }
            div { class: "device-body no-scrollbar",
                if shown.is_empty() {
                    div { class: "canvas-empty", "Pick a block from the library to start building {active}" }
                }
                for block_id in shown {
                    BlockFrame { key: "{block_id}", block_id: block_id.clone() }
                }
            }
        }
    }
}

#[component]
fn BlockFrame(block_id: String) -> Element {
    let store = BUILDER.read();
    let blocks = store.active_blocks();
    let Some(index) = blocks.iter().position(|b| b.id == block_id) else {
        return rsx! {};
    };
    let entry = &blocks[index];
    let view = render(entry, store.theme());
    let is_selected = store.selected_id() == Some(block_id.as_str());
    let is_first = index == 0;
    let is_last = index + 1 == blocks.len();
    let restricted = entry.visibility != Visibility::All;

    let select_id = block_id.clone();
    let up_id = block_id.clone();
    let down_id = block_id.clone();
    let delete_id = block_id.clone();

    rsx! {
        div {
            class: if is_selected { "block-frame selected" } else { "block-frame" },
            onmounted: move |event: MountedEvent| async move {
                if is_selected {
                    let _ = event.data().scroll_to(ScrollBehavior::Smooth).await;
                }
            },
            onclick: move |e| {
                e.stop_propagation();
                send(Command::SelectBlock(select_id.clone()));
            },
            if is_selected {
                div { class: "block-toolbar",
                    span { "{entry.title}" }
                    if restricted {
                        span { class: "badge", "{entry.visibility.label()}" }
                    }
                    button {
                        disabled: is_first,
                        onclick: move |e| {
                            e.stop_propagation();
                            send(Command::MoveBlock { block_id: up_id.clone(), direction: MoveDirection::Up });
                        },
                        "↑"
                    }
                    button {
                        disabled: is_last,
                        onclick: move |e| {
                            e.stop_propagation();
                            send(Command::MoveBlock { block_id: down_id.clone(), direction: MoveDirection::Down });
                        },
                        "↓"
                    }
                    button {
                        onclick: move |e| {
                            e.stop_propagation();
                            send(Command::DeleteBlock(delete_id.clone()));
                        },
                        "✕"
                    }
                }
            } else if restricted {
                span { class: "badge floating", "{entry.visibility.label()}" }
            }
            BlockPreview { view }
        }
    }
}

#[component]
fn PropertiesPanel() -> Element {
    let store = BUILDER.read();

    let Some(block) = store.selected_block() else {
        return rsx! {
            div { class: "properties-empty", "Select a block on the canvas" }
        };
    };
    let meta = catalog::metadata_for(block.block_type);
    let block_type = block.block_type;

    rsx! {
        div { class: "properties-panel",
            h1 { "{meta.icon} {meta.label}" }
            p { class: "properties-id", "{block.id}" }

            label { class: "field",
                span { "Title" }
                input {
                    r#type: "text",
                    value: "{block.title}",
                    oninput: move |e| {
                        if let Some(block_id) = selected_id() {
                            send(Command::RenameBlock { block_id, title: e.value() });
                        }
                    },
                }
            }

            label { class: "field",
                span { "Visible to" }
                select {
                    value: "{block.visibility.label()}",
                    onchange: move |e| {
                        let picked = Visibility::ALL.into_iter().find(|v| v.label() == e.value());
                        if let (Some(block_id), Some(visibility)) = (selected_id(), picked) {
                            send(Command::SetVisibility { block_id, visibility });
                        }
                    },
                    for visibility in Visibility::ALL {
                        option { key: "{visibility.label()}", value: "{visibility.label()}", "{visibility.label()}" }
                    }
                }
            }

            h2 { "Settings" }
            SettingsForm { key: "{block.id}", block_type }

            button {
                class: "danger",
                onclick: move |_| {
                    if let Some(block_id) = selected_id() {
                        send(Command::DeleteBlock(block_id));
                    }
                },
                "Delete Block"
            }
        }
    }
}

#[component]
fn UpgradeModal() -> Element {
    let store = BUILDER.read();
    let limit = store.home_limit();
    let price = store.pro_price();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                h2 { "Upgrade to PRO" }
                p { "The trial plan allows {limit} blocks on the HOME screen." }
                p { "Unlock unlimited blocks for ${price}/month." }
                div { class: "modal-actions",
                    button {
                        class: "primary",
                        onclick: move |_| send(Command::ApproveSubscription),
                        "Approve ${price}"
                    }
                    button { onclick: move |_| send(Command::DismissUpgradePrompt), "Not now" }
                }
            }
        }
    }
}
