//! Block registry
//!
//! One [`BlockDescriptor`] per [`BlockType`] carries the catalog metadata, the
//! default settings factory, the renderer and the inspector fields. Adding a
//! block type means adding one entry here (plus its settings record).

use crate::builder::catalog::BlockMeta;
use crate::builder::inspector::{FieldKind, FieldSpec};
use crate::builder::render::{self, BlockView};
use crate::builder::settings::{
    ActionSettings, BannerSettings, BlockSettings, CategoryIcon, CategoryMenuSettings,
    EmptySettings, ImageSettings, LinkListSettings, LoginFormSettings, MarqueeSettings,
    PriceSettings, ProductGridSettings, ProductTitleSettings, ProfileHeaderSettings,
    ShippingGoalSettings, Slide, SliderSettings, SpacerSettings, TargetType, TextSettings,
    TimerSettings,
};
use crate::builder::tree::{BlockEntry, ThemeSettings};
use crate::builder::{BlockType, Category, Screen};

pub struct BlockDescriptor {
    pub block_type: BlockType,
    pub meta: BlockMeta,
    pub defaults: fn() -> BlockSettings,
    pub render: fn(&BlockEntry, &ThemeSettings) -> BlockView,
    pub fields: &'static [FieldSpec],
}

const fn meta(
    label: &'static str,
    icon: &'static str,
    description: &'static str,
    category: Category,
    allowed_screens: Option<&'static [Screen]>,
) -> BlockMeta {
    BlockMeta {
        label,
        icon,
        description,
        category,
        allowed_screens,
    }
}

const PDP_ONLY: Option<&[Screen]> = Some(&[Screen::Pdp]);
const CART_ONLY: Option<&[Screen]> = Some(&[Screen::Cart]);
const PROFILE_ONLY: Option<&[Screen]> = Some(&[Screen::Profile]);

const ALIGNMENTS: &[&str] = &["left", "center", "right"];

const MARQUEE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("content", "Announcement", FieldKind::Text),
    FieldSpec::new("background", "Background", FieldKind::Color),
    FieldSpec::new("text_color", "Text Color", FieldKind::Color),
];
const BANNER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("image", "Image URL", FieldKind::Url),
    FieldSpec::new("title", "Headline", FieldKind::Text),
    FieldSpec::new("cta", "Button Text", FieldKind::Text),
    FieldSpec::new("link", "Link", FieldKind::Url),
];
const SLIDER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("slides", "Slides", FieldKind::Slides),
    FieldSpec::new("autoplay", "Autoplay", FieldKind::Toggle { default: false }),
];
const TIMER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("headline", "Headline", FieldKind::Text),
    FieldSpec::new("hours", "Hours Left", FieldKind::Number { min: 0.0, max: 720.0 }),
    FieldSpec::new("background", "Background", FieldKind::Color),
];
const GRID_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("label", "Section Label", FieldKind::Text),
    FieldSpec::new("infinite", "Infinite Feed", FieldKind::Toggle { default: false }),
    FieldSpec::new("enabled", "Enabled", FieldKind::Toggle { default: true }),
];
const CATEGORY_FIELDS: &[FieldSpec] = &[FieldSpec::new("icons", "Icons", FieldKind::Icons)];
const LINK_LIST_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Heading", FieldKind::Text),
    FieldSpec::new("links", "Rows", FieldKind::Links),
];
const TEXT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("content", "Content", FieldKind::LongText),
    FieldSpec::new("align", "Alignment", FieldKind::Choice(ALIGNMENTS)),
];
const IMAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("image", "Image URL", FieldKind::Url),
    FieldSpec::new("caption", "Caption", FieldKind::Text),
];
const ACTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("label", "Label", FieldKind::Text),
    FieldSpec::new("link", "Link", FieldKind::Url),
];
const SPACER_FIELDS: &[FieldSpec] = &[FieldSpec::new(
    "height",
    "Height (px)",
    FieldKind::Number { min: 0.0, max: 400.0 },
)];
const TITLE_FIELDS: &[FieldSpec] = &[FieldSpec::new("show_vendor", "Show Vendor", FieldKind::Toggle { default: true })];
const PRICE_FIELDS: &[FieldSpec] = &[FieldSpec::new(
    "show_compare",
    "Show Compare Price",
    FieldKind::Toggle { default: true },
)];
const SHIPPING_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(
        "threshold",
        "Free Shipping From",
        FieldKind::Number { min: 0.0, max: 10_000.0 },
    ),
    FieldSpec::new(
        "cart_total",
        "Preview Cart Total",
        FieldKind::Number { min: 0.0, max: 10_000.0 },
    ),
];
const PROFILE_FIELDS: &[FieldSpec] = &[FieldSpec::new("greeting", "Greeting", FieldKind::Text)];
const LOGIN_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("heading", "Heading", FieldKind::Text),
    FieldSpec::new("allow_guest", "Guest Button", FieldKind::Toggle { default: true }),
];

fn marquee_defaults() -> BlockSettings {
    BlockSettings::Marquee(MarqueeSettings::default())
}

fn banner_defaults() -> BlockSettings {
    BlockSettings::Banner(BannerSettings::default())
}

fn slider_defaults() -> BlockSettings {
    BlockSettings::Slider(SliderSettings {
        slides: Some(vec![Slide {
            id: 1,
            title: "NEW SEASON".to_string(),
            image: String::new(),
            cta: "SHOP NOW".to_string(),
            target_type: TargetType::Collection,
            target: String::new(),
        }]),
        autoplay: None,
    })
}

fn timer_defaults() -> BlockSettings {
    BlockSettings::Timer(TimerSettings::default())
}

fn grid_defaults() -> BlockSettings {
    BlockSettings::ProductGrid(ProductGridSettings {
        label: Some("MORE FOR YOU".to_string()),
        ..ProductGridSettings::default()
    })
}

fn category_defaults() -> BlockSettings {
    BlockSettings::CategoryMenu(CategoryMenuSettings {
        icons: Some(vec![CategoryIcon {
            id: 1,
            label: "New In".to_string(),
            image: String::new(),
            target: String::new(),
        }]),
    })
}

fn link_list_defaults() -> BlockSettings {
    BlockSettings::LinkList(LinkListSettings::default())
}

fn text_defaults() -> BlockSettings {
    BlockSettings::Text(TextSettings::default())
}

fn image_defaults() -> BlockSettings {
    BlockSettings::Image(ImageSettings::default())
}

fn action_defaults() -> BlockSettings {
    BlockSettings::Action(ActionSettings::default())
}

fn spacer_defaults() -> BlockSettings {
    BlockSettings::Spacer(SpacerSettings::default())
}

fn title_defaults() -> BlockSettings {
    BlockSettings::ProductTitle(ProductTitleSettings::default())
}

fn price_defaults() -> BlockSettings {
    BlockSettings::Price(PriceSettings::default())
}

fn shipping_defaults() -> BlockSettings {
    BlockSettings::ShippingGoal(ShippingGoalSettings::default())
}

fn profile_defaults() -> BlockSettings {
    BlockSettings::ProfileHeader(ProfileHeaderSettings::default())
}

fn login_defaults() -> BlockSettings {
    BlockSettings::LoginForm(LoginFormSettings::default())
}

fn empty_defaults() -> BlockSettings {
    BlockSettings::Empty(EmptySettings {})
}

/// Catalog order: this is the order the library panel lists blocks in.
static DESCRIPTORS: [BlockDescriptor; 25] = [
    BlockDescriptor {
        block_type: BlockType::PromoMarquee,
        meta: meta("Promo Marquee", "📢", "Scrolling top announcement", Category::Marketing, None),
        defaults: marquee_defaults,
        render: render::marquee,
        fields: MARQUEE_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::Banner,
        meta: meta("Static Banner", "🖼️", "Fashion-first imagery", Category::Marketing, None),
        defaults: banner_defaults,
        render: render::banner,
        fields: BANNER_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::BannerSlider,
        meta: meta("Banner Slider", "🎠", "Multi-image carousel", Category::Marketing, None),
        defaults: slider_defaults,
        render: render::slider,
        fields: SLIDER_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::TimerBanner,
        meta: meta("Countdown", "⏱️", "Flash sale driver", Category::Marketing, None),
        defaults: timer_defaults,
        render: render::countdown,
        fields: TIMER_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::ProductGrid,
        meta: meta("Product Grid", "🛍️", "FashionNova style grid", Category::Commerce, None),
        defaults: grid_defaults,
        render: render::product_grid,
        fields: GRID_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::CategoryMenu,
        meta: meta("Category Icons", "📁", "Circular discovery links", Category::Commerce, None),
        defaults: category_defaults,
        render: render::category_icons,
        fields: CATEGORY_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::CollectionList,
        meta: meta("Collection Rows", "☰", "List of categories", Category::Commerce, None),
        defaults: link_list_defaults,
        render: render::collection_rows,
        fields: LINK_LIST_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::ProductImages,
        meta: meta("Image Gallery", "🖼️", "PDP Image Slider", Category::Pdp, PDP_ONLY),
        defaults: empty_defaults,
        render: render::placeholder,
        fields: &[],
    },
    BlockDescriptor {
        block_type: BlockType::ProductTitle,
        meta: meta("Title & Vendor", "🏷️", "Product header", Category::Pdp, PDP_ONLY),
        defaults: title_defaults,
        render: render::product_title,
        fields: TITLE_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::ProductPrice,
        meta: meta("Price Block", "💰", "Current & Compare prices", Category::Pdp, PDP_ONLY),
        defaults: price_defaults,
        render: render::price,
        fields: PRICE_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::VariantSelector,
        meta: meta("Size/Color Picker", "🎨", "Options selection", Category::Pdp, PDP_ONLY),
        defaults: empty_defaults,
        render: render::placeholder,
        fields: &[],
    },
    BlockDescriptor {
        block_type: BlockType::ProductDescription,
        meta: meta("Description", "📖", "Tabs or Text details", Category::Pdp, PDP_ONLY),
        defaults: empty_defaults,
        render: render::placeholder,
        fields: &[],
    },
    BlockDescriptor {
        block_type: BlockType::AddToCart,
        meta: meta("Checkout CTA", "🛒", "Add to Bag button", Category::Pdp, PDP_ONLY),
        defaults: action_defaults,
        render: render::action,
        fields: ACTION_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::CartItems,
        meta: meta("Bag Items", "🛍️", "List of items in cart", Category::Cart, CART_ONLY),
        defaults: empty_defaults,
        render: render::placeholder,
        fields: &[],
    },
    BlockDescriptor {
        block_type: BlockType::FreeShippingBar,
        meta: meta("Shipping Goal", "🚚", "Progress to free delivery", Category::Cart, CART_ONLY),
        defaults: shipping_defaults,
        render: render::shipping_goal,
        fields: SHIPPING_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::PriceSummary,
        meta: meta("Price Totals", "🧾", "Subtotal & Taxes", Category::Cart, CART_ONLY),
        defaults: empty_defaults,
        render: render::placeholder,
        fields: &[],
    },
    BlockDescriptor {
        block_type: BlockType::CheckoutButton,
        meta: meta("Pay Now", "💳", "Final checkout button", Category::Cart, CART_ONLY),
        defaults: action_defaults,
        render: render::action,
        fields: ACTION_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::ProfileHeader,
        meta: meta("User Header", "👤", "Name & Greeting", Category::Account, PROFILE_ONLY),
        defaults: profile_defaults,
        render: render::profile_header,
        fields: PROFILE_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::MenuList,
        meta: meta("Action Menu", "📋", "Orders/Info links", Category::Account, PROFILE_ONLY),
        defaults: link_list_defaults,
        render: render::action_menu,
        fields: LINK_LIST_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::AddressCard,
        meta: meta("Address List", "📍", "Saved locations", Category::Account, PROFILE_ONLY),
        defaults: empty_defaults,
        render: render::placeholder,
        fields: &[],
    },
    BlockDescriptor {
        block_type: BlockType::LoginForm,
        meta: meta("Auth UI", "🔑", "Login/Join blocks", Category::Auth, None),
        defaults: login_defaults,
        render: render::login_form,
        fields: LOGIN_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::Text,
        meta: meta("Rich Text", "📝", "Heading or Paragraph", Category::Content, None),
        defaults: text_defaults,
        render: render::text,
        fields: TEXT_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::Image,
        meta: meta("Single Image", "📷", "Simple visual", Category::Content, None),
        defaults: image_defaults,
        render: render::image,
        fields: IMAGE_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::Button,
        meta: meta("Custom Button", "🔘", "Linked action", Category::Content, None),
        defaults: action_defaults,
        render: render::action,
        fields: ACTION_FIELDS,
    },
    BlockDescriptor {
        block_type: BlockType::Spacer,
        meta: meta("Spacer", "↕️", "Vertical gap", Category::Utility, None),
        defaults: spacer_defaults,
        render: render::spacer,
        fields: SPACER_FIELDS,
    },
];

pub fn descriptors() -> &'static [BlockDescriptor] {
    &DESCRIPTORS
}

pub fn descriptor(block_type: BlockType) -> &'static BlockDescriptor {
    // BlockType::ALL and DESCRIPTORS share the same order.
    let idx = BlockType::ALL
        .iter()
        .position(|t| *t == block_type)
        .unwrap_or_default();
    &DESCRIPTORS[idx]
}
