use dioxus::prelude::*;

use crate::builder::sync::SyncStatus;
use crate::builder::Command;
use crate::config::BuilderConfig;
use crate::visual_editor::{dispatch, platform, ConfigurationPage, VisualEditor, BUILDER};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        VisualEditor {},
        #[route("/config")]
        ConfigurationPage {},
}

const GLOBAL_STYLES: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: #1f2937; background: #f3f4f6; }
button { cursor: pointer; border: 1px solid #d1d5db; background: #fff; border-radius: 6px; padding: 6px 10px; }
button.primary { background: #111827; color: #fff; border-color: #111827; }
button.danger { width: 100%; margin-top: 24px; background: #f44336; color: #fff; border: none; padding: 8px; }
button:disabled { opacity: 0.4; cursor: default; }
.shell-header { display: flex; align-items: center; gap: 16px; padding: 10px 20px; background: #fff; border-bottom: 1px solid #e5e7eb; }
.shell-header nav { display: flex; gap: 12px; flex: 1; }
.shell-header a { color: #374151; text-decoration: none; font-weight: 600; }
.plan-badge { font-size: 11px; font-weight: 700; padding: 2px 8px; border-radius: 999px; background: #fde68a; }
.plan-badge.pro { background: #bbf7d0; }
.sync-status { font-size: 12px; color: #6b7280; }
.visual-editor { display: flex; height: calc(100vh - 52px); }
.toolbox { width: 280px; overflow-y: auto; padding: 16px; background: #fff; border-right: 1px solid #e5e7eb; }
.library-section h3 { font-size: 11px; text-transform: uppercase; color: #9ca3af; margin: 16px 0 6px; }
.library-item { display: flex; gap: 10px; width: 100%; text-align: left; margin-bottom: 6px; }
.library-icon { font-size: 20px; }
.library-label { font-weight: 600; font-size: 13px; }
.library-description { font-size: 11px; color: #6b7280; }
.quota { font-size: 12px; color: #b45309; }
.canvas-wrapper { flex: 1; display: flex; flex-direction: column; align-items: center; overflow-y: auto; padding: 16px; }
.screen-tabs, .config-tabs { display: flex; gap: 6px; flex-wrap: wrap; margin-bottom: 12px; }
.tab.active { background: #111827; color: #fff; }
.audience { display: flex; gap: 8px; align-items: center; font-size: 12px; margin-bottom: 12px; }
.device-frame { width: 360px; height: 740px; border: 10px solid #111827; border-radius: 36px; background: #fff; overflow: hidden; display: flex; flex-direction: column; }
.device-header { position: relative; height: 48px; display: flex; align-items: center; justify-content: center; border-bottom: 1px solid #f3f4f6; }
.device-search { position: absolute; inset-inline-end: 16px; font-size: 16px; }
.device-logo { max-height: 32px; }
.device-brand { font-weight: 800; letter-spacing: 2px; }
.device-body { flex: 1; overflow-y: auto; }
.canvas-empty { padding: 48px 24px; text-align: center; color: #9ca3af; font-size: 13px; }
.no-scrollbar::-webkit-scrollbar { display: none; }
.block-frame { position: relative; outline: 2px solid transparent; }
.block-frame:hover { outline-color: #93c5fd; }
.block-frame.selected { outline-color: #2563eb; }
.block-toolbar { position: absolute; top: 4px; right: 4px; z-index: 2; display: flex; gap: 4px; align-items: center; background: #2563eb; color: #fff; font-size: 11px; padding: 2px 4px; border-radius: 4px; }
.block-toolbar button { padding: 0 6px; font-size: 11px; }
.badge { font-size: 10px; background: #fef3c7; color: #92400e; padding: 1px 6px; border-radius: 4px; }
.badge.floating { position: absolute; top: 4px; left: 4px; z-index: 2; }
.block-marquee { overflow: hidden; white-space: nowrap; font-size: 12px; padding: 6px 0; }
.animate-marquee { display: inline-block; padding-left: 100%; animation: marquee 12s linear infinite; }
@keyframes marquee { from { transform: translateX(0); } to { transform: translateX(-100%); } }
.block-hero { position: relative; }
.block-hero img { width: 100%; display: block; aspect-ratio: 3 / 4; object-fit: cover; }
.block-hero-overlay { position: absolute; inset: auto 0 0 0; padding: 24px; color: #fff; background: linear-gradient(transparent, rgba(0,0,0,0.6)); }
.hero-cta { background: #fff; color: #111827; border: none; font-weight: 700; }
.slide-dots { display: flex; gap: 4px; margin-top: 8px; }
.dot { width: 6px; height: 6px; border-radius: 50%; background: rgba(255,255,255,0.5); }
.dot.active { background: #fff; }
.block-countdown { color: #fff; text-align: center; padding: 12px; }
.countdown-clock { font-size: 24px; font-weight: 800; font-variant-numeric: tabular-nums; margin: 4px 0 0; }
.block-grid { padding: 12px; }
.block-grid h3 { font-size: 13px; letter-spacing: 1px; }
.grid-two { display: grid; grid-template-columns: 1fr 1fr; gap: 8px; }
.grid-image img { width: 100%; aspect-ratio: 3 / 4; object-fit: cover; border-radius: 4px; }
.grid-name { font-size: 12px; margin: 4px 0 0; }
.grid-price { font-size: 12px; font-weight: 700; margin: 0; }
.grid-loading { text-align: center; font-size: 11px; color: #9ca3af; padding: 12px; }
.block-icons { display: flex; gap: 12px; overflow-x: auto; padding: 12px; }
.icon-item { display: flex; flex-direction: column; align-items: center; font-size: 11px; }
.icon-circle { width: 56px; height: 56px; border-radius: 50%; border: 2px solid; object-fit: cover; }
.block-rows { padding: 8px 16px; }
.row-item { display: flex; justify-content: space-between; padding: 12px 0; border-bottom: 1px solid #f3f4f6; font-size: 14px; }
.block-text { padding: 8px 16px; margin: 0; }
.block-image { margin: 0; }
.block-image img { width: 100%; display: block; }
.block-image figcaption { font-size: 12px; color: #6b7280; padding: 4px 16px; }
.block-action { padding: 12px 16px; }
.block-action button, .block-login button { width: 100%; padding: 12px; border: none; font-weight: 700; }
.block-title { padding: 12px 16px 0; }
.title-clamp { display: -webkit-box; -webkit-box-orient: vertical; overflow: hidden; }
.title-vendor { font-size: 11px; text-transform: uppercase; color: #9ca3af; margin: 0; }
.block-price { padding: 4px 16px; display: flex; gap: 8px; align-items: baseline; font-weight: 700; }
.block-price s { font-weight: 400; }
.block-shipping { padding: 12px 16px; font-size: 12px; }
.progress-track { height: 6px; background: #e5e7eb; border-radius: 3px; overflow: hidden; }
.progress-fill { height: 100%; }
.block-profile { color: #fff; padding: 24px 16px; display: flex; gap: 12px; align-items: center; }
.profile-avatar { width: 48px; height: 48px; border-radius: 50%; background: rgba(255,255,255,0.2); display: flex; align-items: center; justify-content: center; }
.block-login { padding: 16px; display: flex; flex-direction: column; gap: 8px; }
.block-login input { padding: 10px; border: 1px solid #e5e7eb; border-radius: 6px; }
.login-guest { background: transparent; }
.block-placeholder { margin: 8px 16px; padding: 24px; border: 2px dashed #d1d5db; border-radius: 8px; text-align: center; font-size: 11px; color: #9ca3af; letter-spacing: 1px; }
.properties { width: 320px; overflow-y: auto; padding: 16px; background: #fff; border-left: 1px solid #e5e7eb; }
.properties-empty { color: #9ca3af; text-align: center; padding: 32px; }
.properties-panel h1 { font-size: 18px; margin: 0; }
.properties-panel h2 { font-size: 14px; margin: 24px 0 8px; }
.properties-id { font-size: 11px; color: #9ca3af; font-family: monospace; }
.field { display: flex; flex-direction: column; gap: 4px; margin-bottom: 12px; font-size: 12px; }
.field.inline { flex-direction: row; align-items: center; }
.field input, .field select, .field textarea { padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 6px; font: inherit; }
.field-error { color: #dc2626; font-size: 12px; }
.hint { color: #6b7280; font-size: 12px; }
.color-input { display: flex; gap: 6px; align-items: center; }
.swatch { width: 24px; height: 24px; border-radius: 4px; border: 1px solid #d1d5db; }
.list-editor { display: flex; flex-direction: column; gap: 8px; }
.list-row { display: flex; flex-direction: column; gap: 4px; padding: 8px; border: 1px solid #e5e7eb; border-radius: 6px; }
.list-row-header { display: flex; justify-content: space-between; align-items: center; }
.modal-backdrop { position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 10; }
.modal { background: #fff; border-radius: 12px; padding: 24px; width: 360px; }
.modal-actions { display: flex; gap: 8px; justify-content: flex-end; margin-top: 16px; }
.config-page { max-width: 720px; margin: 24px auto; background: #fff; border-radius: 12px; padding: 24px; }
.shape-picker { display: flex; gap: 8px; margin-bottom: 12px; }
.shape { display: flex; flex-direction: column; }
.shape.active { border-color: #2563eb; }
.logo-preview { max-height: 64px; margin-bottom: 12px; }
.json-editor { width: 100%; font-family: monospace; font-size: 12px; }
.status { font-size: 12px; color: #374151; }
"#;

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{GLOBAL_STYLES}" }
        Router::<Route> {}
    }
}

#[component]
fn Shell() -> Element {
    let delay_ms = BuilderConfig::current().sync.delay_ms;
    let store = BUILDER.read();
    let plan = store.plan();
    let status = store.sync_status();

    let status_text = match status {
        SyncStatus::Idle => String::new(),
        SyncStatus::Syncing => "Syncing…".to_string(),
        SyncStatus::Synced(report) => format!("Synced {} blocks ({} bytes)", report.blocks, report.bytes),
        SyncStatus::Failed => "Sync failed".to_string(),
    };

    rsx! {
        header { class: "shell-header",
            nav {
                Link { to: Route::VisualEditor {}, "Builder" }
                Link { to: Route::ConfigurationPage {}, "Configuration" }
            }
            span { class: if plan.is_paid() { "plan-badge pro" } else { "plan-badge" }, "{plan.label()}" }
            span { class: "sync-status", "{status_text}" }
            button {
                class: "primary",
                disabled: status.is_busy(),
                onclick: move |_| {
                    if dispatch(Command::BeginSync).is_err() {
                        return;
                    }
                    spawn(async move {
                        platform::sleep(delay_ms).await;
                        let _ = dispatch(Command::FinishSync);
                    });
                },
                "Sync to Mobile"
            }
        }
        Outlet::<Route> {}
    }
}
