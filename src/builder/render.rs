//! Block rendering
//!
//! [`render`] resolves a block entry and the theme into a [`BlockView`]: a
//! plain description of what the device preview shows, with every missing
//! setting already replaced by its default. Rendering never fails. A type
//! without a dedicated branch yields [`BlockView::Placeholder`].

use crate::builder::registry;
use crate::builder::settings::{
    ActionSettings, BannerSettings, BlockSettings, CategoryMenuSettings, ImageSettings,
    LinkListSettings, LoginFormSettings, MarqueeSettings, PriceSettings, ProductGridSettings,
    ProductTitleSettings, ProfileHeaderSettings, ShippingGoalSettings, SliderSettings,
    SpacerSettings, TextAlign, TextSettings, TimerSettings,
};
use crate::builder::tree::{BlockEntry, ThemeSettings};
use crate::builder::BlockType;

pub const DEFAULT_MARQUEE_TEXT: &str =
    "FREE SHIPPING ON ORDERS $75+ • USE CODE: FASHION • NEW DROPS DAILY";
pub const FEATURED_GRID_SIZE: usize = 2;
pub const FEED_GRID_SIZE: usize = 6;

/// Stable preview image for slot `idx` of block `block_id`.
pub fn placeholder_image(block_id: &str, idx: usize, category: &str) -> String {
    format!("https://picsum.photos/seed/{block_id}-{idx}/600/800?{category}=1")
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonStyle {
    pub background: String,
    pub color: String,
    pub radius: u32,
}

impl ButtonStyle {
    fn primary(theme: &ThemeSettings) -> Self {
        Self {
            background: theme.button_background.clone(),
            color: theme.button_text.clone(),
            radius: theme.border_radius,
        }
    }

    fn secondary(theme: &ThemeSettings) -> Self {
        Self {
            background: theme.secondary_color.clone(),
            color: theme.button_text.clone(),
            radius: theme.border_radius,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SlideView {
    pub image: String,
    pub title: String,
    pub cta: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductCard {
    pub name: String,
    pub price: String,
    pub image: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridLayout {
    /// Fixed pair of cards.
    Featured,
    /// Longer list that ends in a loading indicator.
    Feed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IconView {
    pub label: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BlockView {
    Marquee {
        text: String,
        background: String,
        color: String,
    },
    Banner {
        image: String,
        title: String,
        cta: String,
        button: ButtonStyle,
    },
    Slider {
        slides: Vec<SlideView>,
        accent: String,
    },
    Countdown {
        headline: String,
        remaining: String,
        background: String,
    },
    ProductGrid {
        label: String,
        layout: GridLayout,
        cards: Vec<ProductCard>,
        loading: bool,
        enabled: bool,
    },
    CategoryIcons {
        icons: Vec<IconView>,
        accent: String,
    },
    LinkRows {
        title: Option<String>,
        rows: Vec<String>,
    },
    Text {
        content: String,
        align: TextAlign,
    },
    Image {
        src: String,
        caption: Option<String>,
    },
    Action {
        label: String,
        button: ButtonStyle,
    },
    Spacer {
        height: f64,
    },
    ProductTitle {
        vendor: Option<String>,
        title: String,
        color: String,
        /// Lines the title may wrap to before it is clamped.
        lines: u8,
    },
    Price {
        price: String,
        compare: Option<String>,
        color: String,
        compare_color: String,
    },
    ShippingGoal {
        message: String,
        progress: u8,
        color: String,
    },
    ProfileHeader {
        greeting: String,
        accent: String,
    },
    LoginForm {
        heading: String,
        guest: bool,
        button: ButtonStyle,
    },
    Placeholder {
        tag: &'static str,
    },
}

/// Resolve `entry` into what the preview shows.
pub fn render(entry: &BlockEntry, theme: &ThemeSettings) -> BlockView {
    (registry::descriptor(entry.block_type).render)(entry, theme)
}

/// Fallback for types without a dedicated branch.
pub fn placeholder(entry: &BlockEntry, _theme: &ThemeSettings) -> BlockView {
    BlockView::Placeholder {
        tag: entry.block_type.tag(),
    }
}

fn text_or(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

pub fn marquee(entry: &BlockEntry, _theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::Marquee(s) => s.clone(),
        _ => MarqueeSettings::default(),
    };
    BlockView::Marquee {
        text: text_or(&s.content, DEFAULT_MARQUEE_TEXT),
        background: text_or(&s.background, "#000"),
        color: text_or(&s.text_color, "#fff"),
    }
}

pub fn banner(entry: &BlockEntry, theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::Banner(s) => s.clone(),
        _ => BannerSettings::default(),
    };
    BlockView::Banner {
        image: text_or(&s.image, &placeholder_image(&entry.id, 0, "banner")),
        title: text_or(&s.title, "NEW ARRIVALS"),
        cta: text_or(&s.cta, "SHOP NOW"),
        button: ButtonStyle::primary(theme),
    }
}

pub fn slider(entry: &BlockEntry, theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::Slider(s) => s.clone(),
        _ => SliderSettings::default(),
    };
    let slides = match s.slides {
        Some(slides) if !slides.is_empty() => slides
            .iter()
            .enumerate()
            .map(|(idx, slide)| SlideView {
                image: non_empty(&slide.image)
                    .unwrap_or_else(|| placeholder_image(&entry.id, idx, "fashion")),
                title: non_empty(&slide.title).unwrap_or_else(|| "COLLECTION".to_string()),
                cta: non_empty(&slide.cta).unwrap_or_else(|| "SHOP NOW".to_string()),
            })
            .collect(),
        _ => vec![SlideView {
            image: placeholder_image(&entry.id, 0, "fashion"),
            title: "NEW SEASON".to_string(),
            cta: "SHOP NOW".to_string(),
        }],
    };
    BlockView::Slider {
        slides,
        accent: theme.slider_color.clone(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

pub fn countdown(entry: &BlockEntry, theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::Timer(s) => s.clone(),
        _ => TimerSettings::default(),
    };
    let total_secs = (s.hours.unwrap_or(6.0) * 3600.0).round() as u64;
    BlockView::Countdown {
        headline: text_or(&s.headline, "FLASH SALE ENDS IN"),
        remaining: format!(
            "{:02}:{:02}:{:02}",
            total_secs / 3600,
            (total_secs % 3600) / 60,
            total_secs % 60
        ),
        background: text_or(&s.background, &theme.primary_color),
    }
}

pub fn product_grid(entry: &BlockEntry, _theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::ProductGrid(s) => s.clone(),
        _ => ProductGridSettings::default(),
    };
    let infinite = s.infinite.unwrap_or(false);
    let (layout, size) = if infinite {
        (GridLayout::Feed, FEED_GRID_SIZE)
    } else {
        (GridLayout::Featured, FEATURED_GRID_SIZE)
    };
    let cards = (1..=size)
        .map(|i| ProductCard {
            name: "Nova Essentials".to_string(),
            price: "$29.99".to_string(),
            image: placeholder_image(&entry.id, i + 50, "prod"),
        })
        .collect();
    BlockView::ProductGrid {
        label: text_or(&s.label, "MORE FOR YOU"),
        layout,
        cards,
        loading: infinite,
        enabled: s.enabled.unwrap_or(true),
    }
}

pub fn category_icons(entry: &BlockEntry, theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::CategoryMenu(s) => s.clone(),
        _ => CategoryMenuSettings::default(),
    };
    let icons = match s.icons {
        Some(icons) if !icons.is_empty() => icons
            .iter()
            .enumerate()
            .map(|(idx, icon)| IconView {
                label: non_empty(&icon.label).unwrap_or_else(|| "Category".to_string()),
                image: non_empty(&icon.image)
                    .unwrap_or_else(|| placeholder_image(&entry.id, idx, "cat")),
            })
            .collect(),
        _ => vec![IconView {
            label: "New In".to_string(),
            image: placeholder_image(&entry.id, 0, "cat"),
        }],
    };
    BlockView::CategoryIcons {
        icons,
        accent: theme.accent_color.clone(),
    }
}

fn link_rows(entry: &BlockEntry, default_title: Option<&str>, default_rows: &[&str]) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::LinkList(s) => s.clone(),
        _ => LinkListSettings::default(),
    };
    let rows = match s.links {
        Some(links) if !links.is_empty() => links.into_iter().map(|l| l.label).collect(),
        _ => default_rows.iter().map(|r| r.to_string()).collect(),
    };
    let title = match s.title {
        Some(title) if !title.is_empty() => Some(title),
        _ => default_title.map(str::to_string),
    };
    BlockView::LinkRows { title, rows }
}

pub fn collection_rows(entry: &BlockEntry, _theme: &ThemeSettings) -> BlockView {
    link_rows(
        entry,
        Some("SHOP BY CATEGORY"),
        &["New In", "Dresses", "Tops", "Denim"],
    )
}

pub fn action_menu(entry: &BlockEntry, _theme: &ThemeSettings) -> BlockView {
    link_rows(
        entry,
        None,
        &["My Orders", "Wishlist", "Addresses", "Account Info"],
    )
}

pub fn text(entry: &BlockEntry, _theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::Text(s) => s.clone(),
        _ => TextSettings::default(),
    };
    BlockView::Text {
        content: text_or(&s.content, "Tell your brand story here."),
        align: s.align.unwrap_or_default(),
    }
}

pub fn image(entry: &BlockEntry, _theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::Image(s) => s.clone(),
        _ => ImageSettings::default(),
    };
    BlockView::Image {
        src: text_or(&s.image, &placeholder_image(&entry.id, 0, "image")),
        caption: s.caption.filter(|c| !c.is_empty()),
    }
}

pub fn action(entry: &BlockEntry, theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::Action(s) => s.clone(),
        _ => ActionSettings::default(),
    };
    let (fallback, button) = match entry.block_type {
        BlockType::AddToCart => ("ADD TO BAG", ButtonStyle::primary(theme)),
        BlockType::CheckoutButton => ("CHECKOUT SECURELY", ButtonStyle::primary(theme)),
        _ => ("LEARN MORE", ButtonStyle::secondary(theme)),
    };
    BlockView::Action {
        label: text_or(&s.label, fallback),
        button,
    }
}

pub fn spacer(entry: &BlockEntry, _theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::Spacer(s) => s.clone(),
        _ => SpacerSettings::default(),
    };
    BlockView::Spacer {
        height: s.height.unwrap_or(24.0),
    }
}

pub fn product_title(entry: &BlockEntry, theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::ProductTitle(s) => s.clone(),
        _ => ProductTitleSettings::default(),
    };
    BlockView::ProductTitle {
        vendor: s
            .show_vendor
            .unwrap_or(true)
            .then(|| "FASHION NOVA".to_string()),
        title: "Ribbed Knit Midi Dress".to_string(),
        color: theme.title_color.clone(),
        lines: theme.title_lines.count(),
    }
}

pub fn price(entry: &BlockEntry, theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::Price(s) => s.clone(),
        _ => PriceSettings::default(),
    };
    BlockView::Price {
        price: "$29.99".to_string(),
        compare: s.show_compare.unwrap_or(true).then(|| "$49.99".to_string()),
        color: theme.price_color.clone(),
        compare_color: theme.compare_price_color.clone(),
    }
}

pub fn shipping_goal(entry: &BlockEntry, theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::ShippingGoal(s) => s.clone(),
        _ => ShippingGoalSettings::default(),
    };
    let threshold = s.threshold.unwrap_or(75.0);
    let total = s.cart_total.unwrap_or(50.0);
    let remaining = (threshold - total).max(0.0);
    let progress = if threshold <= 0.0 {
        100
    } else {
        ((total / threshold) * 100.0).clamp(0.0, 100.0) as u8
    };
    let message = if remaining > 0.0 {
        format!("You're ${remaining:.2} away from FREE shipping")
    } else {
        "You've unlocked FREE shipping!".to_string()
    };
    BlockView::ShippingGoal {
        message,
        progress,
        color: theme.primary_color.clone(),
    }
}

pub fn profile_header(entry: &BlockEntry, theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::ProfileHeader(s) => s.clone(),
        _ => ProfileHeaderSettings::default(),
    };
    BlockView::ProfileHeader {
        greeting: text_or(&s.greeting, "Hi there"),
        accent: theme.accent_color.clone(),
    }
}

pub fn login_form(entry: &BlockEntry, theme: &ThemeSettings) -> BlockView {
    let s = match &entry.settings {
        BlockSettings::LoginForm(s) => s.clone(),
        _ => LoginFormSettings::default(),
    };
    BlockView::LoginForm {
        heading: text_or(&s.heading, "WELCOME BACK"),
        guest: s.allow_guest.unwrap_or(true),
        button: ButtonStyle::primary(theme),
    }
}
