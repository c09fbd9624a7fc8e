use dioxus::prelude::*;

use crate::builder::render::{BlockView, ButtonStyle, GridLayout};

fn button_style(button: &ButtonStyle) -> String {
    format!(
        "background: {}; color: {}; border-radius: {}px;",
        button.background, button.color, button.radius
    )
}

/// Device preview of one resolved block.
#[component]
pub fn BlockPreview(view: BlockView) -> Element {
    match view {
        BlockView::Marquee {
            text,
            background,
            color,
        } => rsx! {
            div { class: "block-marquee", style: "background-color: {background}; color: {color};",
                div { class: "animate-marquee", "{text}" }
            }
        },
        BlockView::Banner {
            image,
            title,
            cta,
            button,
        } => {
            let style = button_style(&button);
            rsx! {
                div { class: "block-hero",
                    img { src: "{image}" }
                    div { class: "block-hero-overlay",
                        h2 { "{title}" }
                        button { style: "{style}", "{cta}" }
                    }
                }
            }
        }
        BlockView::Slider { slides, accent } => {
            let count = slides.len();
            let Some(first) = slides.into_iter().next() else {
                return rsx! {};
            };
            rsx! {
                div { class: "block-hero",
                    img { src: "{first.image}" }
                    div { class: "block-hero-overlay",
                        h2 { "{first.title}" }
                        button { class: "hero-cta", style: "background: {accent}; color: #fff;", "{first.cta}" }
                        if count > 1 {
                            div { class: "slide-dots",
                                for idx in 0..count {
                                    span { key: "{idx}", class: if idx == 0 { "dot active" } else { "dot" } }
                                }
                            }
                        }
                    }
                }
            }
        }
        BlockView::Countdown {
            headline,
            remaining,
            background,
        } => rsx! {
            div { class: "block-countdown", style: "background: {background};",
                p { "{headline}" }
                p { class: "countdown-clock", "{remaining}" }
            }
        },
        BlockView::ProductGrid {
            label,
            layout,
            cards,
            loading,
            enabled,
        } => rsx! {
            div { class: "block-grid", style: if enabled { "" } else { "opacity: 0.4;" },
                h3 { "{label}" }
                div { class: "grid-two",
                    for (idx, card) in cards.into_iter().enumerate() {
                        div { key: "{idx}", class: "grid-card",
                            div { class: "grid-image", img { src: "{card.image}" } }
                            p { class: "grid-name", "{card.name}" }
                            p { class: "grid-price", "{card.price}" }
                        }
                    }
                }
                if layout == GridLayout::Feed && loading {
                    div { class: "grid-loading", "Loading more…" }
                }
            }
        },
        BlockView::CategoryIcons { icons, accent } => rsx! {
            div { class: "block-icons no-scrollbar",
                for (idx, icon) in icons.into_iter().enumerate() {
                    div { key: "{idx}", class: "icon-item",
                        img { class: "icon-circle", style: "border-color: {accent};", src: "{icon.image}" }
                        span { "{icon.label}" }
                    }
                }
            }
        },
        BlockView::LinkRows { title, rows } => rsx! {
            div { class: "block-rows",
                if let Some(title) = title {
                    h3 { "{title}" }
                }
                for (idx, row) in rows.into_iter().enumerate() {
                    div { key: "{idx}", class: "row-item",
                        span { "{row}" }
                        span { "›" }
                    }
                }
            }
        },
        BlockView::Text { content, align } => rsx! {
            p { class: "block-text", style: "text-align: {align.css()};", "{content}" }
        },
        BlockView::Image { src, caption } => rsx! {
            figure { class: "block-image",
                img { src: "{src}" }
                if let Some(caption) = caption {
                    figcaption { "{caption}" }
                }
            }
        },
        BlockView::Action { label, button } => {
            let style = button_style(&button);
            rsx! {
                div { class: "block-action",
                    button { style: "{style}", "{label}" }
                }
            }
        }
        BlockView::Spacer { height } => rsx! {
            div { style: "height: {height}px;" }
        },
        BlockView::ProductTitle {
            vendor,
            title,
            color,
            lines,
        } => rsx! {
            div { class: "block-title",
                if let Some(vendor) = vendor {
                    p { class: "title-vendor", "{vendor}" }
                }
                h2 { class: "title-clamp", style: "color: {color}; -webkit-line-clamp: {lines};", "{title}" }
            }
        },
        BlockView::Price {
            price,
            compare,
            color,
            compare_color,
        } => rsx! {
            div { class: "block-price",
                span { style: "color: {color};", "{price}" }
                if let Some(compare) = compare {
                    s { style: "color: {compare_color};", "{compare}" }
                }
            }
        },
        BlockView::ShippingGoal {
            message,
            progress,
            color,
        } => rsx! {
            div { class: "block-shipping",
                p { "{message}" }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {progress}%; background: {color};" }
                }
            }
        },
        BlockView::ProfileHeader { greeting, accent } => rsx! {
            div { class: "block-profile", style: "background: {accent};",
                div { class: "profile-avatar", "👤" }
                p { "{greeting}" }
            }
        },
        BlockView::LoginForm {
            heading,
            guest,
            button,
        } => {
            let style = button_style(&button);
            rsx! {
                div { class: "block-login",
                    h2 { "{heading}" }
                    input { r#type: "email", placeholder: "Email", disabled: true }
                    input { r#type: "password", placeholder: "Password", disabled: true }
                    button { style: "{style}", "SIGN IN" }
                    if guest {
                        button { class: "login-guest", "Continue as guest" }
                    }
                }
            }
        }
        BlockView::Placeholder { tag } => rsx! {
            div { class: "block-placeholder", "{tag}" }
        },
    }
}
