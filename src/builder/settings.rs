//! Typed per-block settings
//!
//! Every block carries one [`BlockSettings`] variant. All fields are optional:
//! the renderer substitutes a documented default whenever a key is absent.
//! Edits go through [`BlockSettings::with_field`], which replaces exactly one
//! key and keeps every other key as it was. The merge is shallow, so list
//! valued keys (slides, icons, links) are always replaced as a whole.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::builder::registry;
use crate::builder::BlockType;
use crate::error::{BuilderError, Result};

const VALUES: &str = "values";

/// Where a slide, icon or link sends the shopper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetType {
    #[default]
    Collection,
    Product,
    Url,
    None,
}

impl TargetType {
    pub const ALL: [TargetType; 4] = [
        TargetType::Collection,
        TargetType::Product,
        TargetType::Url,
        TargetType::None,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TargetType::Collection => "COLLECTION",
            TargetType::Product => "PRODUCT",
            TargetType::Url => "URL",
            TargetType::None => "NONE",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub cta: String,
    pub target_type: TargetType,
    pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoryIcon {
    pub id: u32,
    pub label: String,
    pub image: String,
    pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuLink {
    pub id: u32,
    pub label: String,
    pub target: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarqueeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BannerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides: Option<Vec<Slide>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductGridSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infinite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoryMenuSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<CategoryIcon>>,
}

/// Shared by collection rows and the profile action menu.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkListSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<MenuLink>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Shared by the plain button, add-to-cart and checkout buttons.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActionSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpacerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductTitleSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_vendor: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PriceSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_compare: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShippingGoalSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_total: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileHeaderSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoginFormSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_guest: Option<bool>,
}

/// Blocks whose preview needs no configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmptySettings {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values")]
pub enum BlockSettings {
    Marquee(MarqueeSettings),
    Banner(BannerSettings),
    Slider(SliderSettings),
    Timer(TimerSettings),
    ProductGrid(ProductGridSettings),
    CategoryMenu(CategoryMenuSettings),
    LinkList(LinkListSettings),
    Text(TextSettings),
    Image(ImageSettings),
    Action(ActionSettings),
    Spacer(SpacerSettings),
    ProductTitle(ProductTitleSettings),
    Price(PriceSettings),
    ShippingGoal(ShippingGoalSettings),
    ProfileHeader(ProfileHeaderSettings),
    LoginForm(LoginFormSettings),
    Empty(EmptySettings),
}

impl BlockSettings {
    /// Fresh settings for a newly placed block of `block_type`.
    pub fn defaults_for(block_type: BlockType) -> Self {
        (registry::descriptor(block_type).defaults)()
    }

    /// Whether these settings are the variant `block_type` uses.
    pub fn accepts(&self, block_type: BlockType) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(&Self::defaults_for(block_type))
    }

    /// Current value of one key, `None` when unset.
    pub fn get(&self, key: &str) -> Option<Value> {
        let tagged = serde_json::to_value(self).ok()?;
        tagged.get(VALUES)?.get(key).cloned()
    }

    /// Copy of these settings with `key` replaced by `value`.
    ///
    /// `Value::Null` clears the key so the renderer falls back to its default.
    pub fn with_field(&self, key: &str, value: Value) -> Result<Self> {
        let Value::Object(mut tagged) = serde_json::to_value(self)? else {
            return Err(BuilderError::invalid_setting(key, "settings are not an object"));
        };
        let values = match tagged.remove(VALUES) {
            Some(Value::Object(values)) => values,
            _ => Map::new(),
        };
        tagged.insert(VALUES.to_string(), Value::Object(set_key(values, key, value)));

        let merged: BlockSettings = serde_json::from_value(Value::Object(tagged))
            .map_err(|err| BuilderError::invalid_setting(key, err.to_string()))?;
        merged.validate()?;
        Ok(merged)
    }

    /// Field level checks serde cannot express.
    pub fn validate(&self) -> Result<()> {
        match self {
            BlockSettings::Marquee(s) => {
                check_color("background", s.background.as_deref())?;
                check_color("text_color", s.text_color.as_deref())
            }
            BlockSettings::Banner(s) => {
                check_url("image", s.image.as_deref())?;
                check_url("link", s.link.as_deref())
            }
            BlockSettings::Slider(s) => {
                for slide in s.slides.iter().flatten() {
                    check_url("slides", Some(&slide.image))?;
                    if slide.target_type == TargetType::Url {
                        check_url("slides", Some(&slide.target))?;
                    }
                }
                Ok(())
            }
            BlockSettings::Timer(s) => {
                check_non_negative("hours", s.hours)?;
                check_color("background", s.background.as_deref())
            }
            BlockSettings::CategoryMenu(s) => {
                for icon in s.icons.iter().flatten() {
                    check_url("icons", Some(&icon.image))?;
                }
                Ok(())
            }
            BlockSettings::Image(s) => check_url("image", s.image.as_deref()),
            BlockSettings::Action(s) => check_url("link", s.link.as_deref()),
            BlockSettings::Spacer(s) => check_non_negative("height", s.height),
            BlockSettings::ShippingGoal(s) => {
                check_non_negative("threshold", s.threshold)?;
                check_non_negative("cart_total", s.cart_total)
            }
            BlockSettings::ProductGrid(_)
            | BlockSettings::LinkList(_)
            | BlockSettings::Text(_)
            | BlockSettings::ProductTitle(_)
            | BlockSettings::Price(_)
            | BlockSettings::ProfileHeader(_)
            | BlockSettings::LoginForm(_)
            | BlockSettings::Empty(_) => Ok(()),
        }
    }
}

/// Shallow single-key merge for any flat record (theme, global settings).
pub fn merge_field<T>(current: &T, key: &str, value: Value) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let Value::Object(values) = serde_json::to_value(current)? else {
        return Err(BuilderError::invalid_setting(key, "record is not an object"));
    };
    serde_json::from_value(Value::Object(set_key(values, key, value)))
        .map_err(|err| BuilderError::invalid_setting(key, err.to_string()))
}

fn set_key(mut values: Map<String, Value>, key: &str, value: Value) -> Map<String, Value> {
    if value.is_null() {
        values.remove(key);
    } else {
        values.insert(key.to_string(), value);
    }
    values
}

/// `#RGB` or `#RRGGBB`; absent values pass.
pub fn check_color(key: &str, value: Option<&str>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    let valid = value
        .strip_prefix('#')
        .map(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false);
    if valid {
        Ok(())
    } else {
        Err(BuilderError::invalid_setting(
            key,
            format!("'{value}' is not a hex color"),
        ))
    }
}

/// Empty means "use the placeholder"; anything else must be http(s).
pub fn check_url(key: &str, value: Option<&str>) -> Result<()> {
    match value {
        None | Some("") => Ok(()),
        Some(url) if url.starts_with("https://") || url.starts_with("http://") => Ok(()),
        Some(url) => Err(BuilderError::invalid_setting(
            key,
            format!("'{url}' is not an http(s) URL"),
        )),
    }
}

fn check_non_negative(key: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(n) if !n.is_finite() || n < 0.0 => Err(BuilderError::invalid_setting(
            key,
            format!("{n} must be zero or more"),
        )),
        _ => Ok(()),
    }
}
