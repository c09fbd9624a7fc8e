use std::fmt;

use serde::{Deserialize, Serialize};

/// Every kind of block that can be placed on a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    // Marketing & Layout
    Banner,
    BannerSlider,
    PromoMarquee,
    Spacer,
    Text,
    Image,
    Button,
    // Commerce & Discovery
    ProductGrid,
    CategoryMenu,
    TimerBanner,
    CollectionList,
    // Product Detail
    ProductImages,
    ProductTitle,
    ProductPrice,
    VariantSelector,
    ProductDescription,
    AddToCart,
    // Cart & Checkout
    CartItems,
    FreeShippingBar,
    PriceSummary,
    CheckoutButton,
    // Account & Auth
    ProfileHeader,
    MenuList,
    AddressCard,
    LoginForm,
}

impl BlockType {
    pub const ALL: [BlockType; 25] = [
        BlockType::PromoMarquee,
        BlockType::Banner,
        BlockType::BannerSlider,
        BlockType::TimerBanner,
        BlockType::ProductGrid,
        BlockType::CategoryMenu,
        BlockType::CollectionList,
        BlockType::ProductImages,
        BlockType::ProductTitle,
        BlockType::ProductPrice,
        BlockType::VariantSelector,
        BlockType::ProductDescription,
        BlockType::AddToCart,
        BlockType::CartItems,
        BlockType::FreeShippingBar,
        BlockType::PriceSummary,
        BlockType::CheckoutButton,
        BlockType::ProfileHeader,
        BlockType::MenuList,
        BlockType::AddressCard,
        BlockType::LoginForm,
        BlockType::Text,
        BlockType::Image,
        BlockType::Button,
        BlockType::Spacer,
    ];

    /// The wire tag, e.g. `BANNER_SLIDER`.
    pub fn tag(self) -> &'static str {
        match self {
            BlockType::Banner => "BANNER",
            BlockType::BannerSlider => "BANNER_SLIDER",
            BlockType::PromoMarquee => "PROMO_MARQUEE",
            BlockType::Spacer => "SPACER",
            BlockType::Text => "TEXT",
            BlockType::Image => "IMAGE",
            BlockType::Button => "BUTTON",
            BlockType::ProductGrid => "PRODUCT_GRID",
            BlockType::CategoryMenu => "CATEGORY_MENU",
            BlockType::TimerBanner => "TIMER_BANNER",
            BlockType::CollectionList => "COLLECTION_LIST",
            BlockType::ProductImages => "PRODUCT_IMAGES",
            BlockType::ProductTitle => "PRODUCT_TITLE",
            BlockType::ProductPrice => "PRODUCT_PRICE",
            BlockType::VariantSelector => "VARIANT_SELECTOR",
            BlockType::ProductDescription => "PRODUCT_DESCRIPTION",
            BlockType::AddToCart => "ADD_TO_CART",
            BlockType::CartItems => "CART_ITEMS",
            BlockType::FreeShippingBar => "FREE_SHIPPING_BAR",
            BlockType::PriceSummary => "PRICE_SUMMARY",
            BlockType::CheckoutButton => "CHECKOUT_BUTTON",
            BlockType::ProfileHeader => "PROFILE_HEADER",
            BlockType::MenuList => "MENU_LIST",
            BlockType::AddressCard => "ADDRESS_CARD",
            BlockType::LoginForm => "LOGIN_FORM",
        }
    }

    /// Short prefix used when minting block ids.
    pub fn slug(self) -> &'static str {
        match self {
            BlockType::Banner => "bn",
            BlockType::BannerSlider => "sl",
            BlockType::PromoMarquee => "mq",
            BlockType::Spacer => "sp",
            BlockType::Text => "tx",
            BlockType::Image => "im",
            BlockType::Button => "bt",
            BlockType::ProductGrid => "pg",
            BlockType::CategoryMenu => "cm",
            BlockType::TimerBanner => "tm",
            BlockType::CollectionList => "cl",
            BlockType::ProductImages => "pi",
            BlockType::ProductTitle => "pt",
            BlockType::ProductPrice => "pp",
            BlockType::VariantSelector => "vs",
            BlockType::ProductDescription => "pd",
            BlockType::AddToCart => "ac",
            BlockType::CartItems => "ci",
            BlockType::FreeShippingBar => "fs",
            BlockType::PriceSummary => "ps",
            BlockType::CheckoutButton => "cb",
            BlockType::ProfileHeader => "ph",
            BlockType::MenuList => "ml",
            BlockType::AddressCard => "ad",
            BlockType::LoginForm => "lf",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Grouping used by the library panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Marketing,
    Commerce,
    #[serde(rename = "PDP")]
    Pdp,
    Cart,
    Account,
    Auth,
    Content,
    Utility,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Marketing,
        Category::Commerce,
        Category::Pdp,
        Category::Cart,
        Category::Account,
        Category::Auth,
        Category::Content,
        Category::Utility,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Marketing => "Marketing",
            Category::Commerce => "Commerce",
            Category::Pdp => "PDP",
            Category::Cart => "Cart",
            Category::Account => "Account",
            Category::Auth => "Auth",
            Category::Content => "Content",
            Category::Utility => "Utility",
        }
    }
}

/// One page of the mobile storefront.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Screen {
    Home,
    Collection,
    Pdp,
    Cart,
    Profile,
    Login,
    Cms,
}

impl Screen {
    pub const ALL: [Screen; 7] = [
        Screen::Home,
        Screen::Collection,
        Screen::Pdp,
        Screen::Cart,
        Screen::Profile,
        Screen::Login,
        Screen::Cms,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Screen::Home => "HOME",
            Screen::Collection => "COLLECTION",
            Screen::Pdp => "PDP",
            Screen::Cart => "CART",
            Screen::Profile => "PROFILE",
            Screen::Login => "LOGIN",
            Screen::Cms => "CMS",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
