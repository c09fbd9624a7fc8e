//! The configuration tree: screens, their block sequences, theme and global settings

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::builder::settings::BlockSettings;
use crate::builder::{BlockType, Screen};
use crate::error::{BuilderError, Result};

/// Which shoppers see a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    #[default]
    All,
    Guest,
    LoggedIn,
}

impl Visibility {
    pub const ALL: [Visibility; 3] = [Visibility::All, Visibility::Guest, Visibility::LoggedIn];

    pub fn label(self) -> &'static str {
        match self {
            Visibility::All => "ALL",
            Visibility::Guest => "GUEST",
            Visibility::LoggedIn => "LOGGED_IN",
        }
    }

    /// Whether a block with this policy shows up for `audience`.
    ///
    /// Previewing as `All` shows every block.
    pub fn shows_for(self, audience: Visibility) -> bool {
        self == Visibility::All || audience == Visibility::All || self == audience
    }
}

/// One placed block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub title: String,
    pub settings: BlockSettings,
    #[serde(default)]
    pub visibility: Visibility,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogoShape {
    #[default]
    Square,
    Rectangle,
}

impl LogoShape {
    pub fn recommended_size(self) -> &'static str {
        match self {
            LogoShape::Square => "500px X 500px",
            LogoShape::Rectangle => "1200px X 500px",
        }
    }
}

/// How many lines a product title may wrap to before it is cut off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TitleLines {
    Single,
    #[default]
    Double,
}

impl TitleLines {
    pub const ALL: [TitleLines; 2] = [TitleLines::Single, TitleLines::Double];

    pub fn count(self) -> u8 {
        match self {
            TitleLines::Single => 1,
            TitleLines::Double => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TitleLines::Single => "Single Line",
            TitleLines::Double => "Double Line",
        }
    }
}

/// Brand values applied to every rendered block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub font_family: String,
    pub logo_url: String,
    pub border_radius: u32,
    pub accent_color: String,
    pub logo_shape: LogoShape,
    pub slider_color: String,
    pub title_color: String,
    pub price_color: String,
    pub compare_price_color: String,
    pub button_background: String,
    pub button_text: String,
    pub title_lines: TitleLines,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            primary_color: "#FF1F46".to_string(),
            secondary_color: "#FF4F68".to_string(),
            font_family: "RUBIK".to_string(),
            logo_url: String::new(),
            border_radius: 8,
            accent_color: "#00233D".to_string(),
            logo_shape: LogoShape::Square,
            slider_color: "#FF1F46".to_string(),
            title_color: "#00233D".to_string(),
            price_color: "#FF4F68".to_string(),
            compare_price_color: "#666666".to_string(),
            button_background: "#FF4F68".to_string(),
            button_text: "#FFFFFF".to_string(),
            title_lines: TitleLines::Double,
        }
    }
}

impl ThemeSettings {
    pub const FONTS: [&'static str; 3] = ["RUBIK", "INTER", "POPPINS"];

    pub fn validate(&self) -> Result<()> {
        use crate::builder::settings::{check_color, check_url};

        check_color("primary_color", Some(&self.primary_color))?;
        check_color("secondary_color", Some(&self.secondary_color))?;
        check_color("accent_color", Some(&self.accent_color))?;
        check_color("slider_color", Some(&self.slider_color))?;
        check_color("title_color", Some(&self.title_color))?;
        check_color("price_color", Some(&self.price_color))?;
        check_color("compare_price_color", Some(&self.compare_price_color))?;
        check_color("button_background", Some(&self.button_background))?;
        check_color("button_text", Some(&self.button_text))?;
        check_url("logo_url", Some(&self.logo_url))?;
        if self.font_family.trim().is_empty() {
            return Err(BuilderError::invalid_setting("font_family", "font cannot be empty"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    #[default]
    English,
    French,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::French, Language::Spanish];

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "ENGLISH",
            Language::French => "FRENCH",
            Language::Spanish => "SPANISH",
        }
    }

    /// BCP 47 tag for the preview's `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Spanish => "es",
        }
    }
}

/// Whether shoppers must sign in to use the app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserAccounts {
    Optional,
    #[default]
    Required,
}

impl UserAccounts {
    pub const ALL: [UserAccounts; 2] = [UserAccounts::Optional, UserAccounts::Required];

    pub fn label(self) -> &'static str {
        match self {
            UserAccounts::Optional => "Optional",
            UserAccounts::Required => "Required",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub const ALL: [TextDirection; 2] = [TextDirection::Ltr, TextDirection::Rtl];

    /// Value of the HTML `dir` attribute.
    pub fn attr(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextDirection::Ltr => "LTR",
            TextDirection::Rtl => "RTL",
        }
    }
}

/// Store-wide switches outside any single block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalSettings {
    pub marquee_enabled: bool,
    pub marquee_text: String,
    pub guest_checkout: bool,
    pub language: Language,
    pub user_accounts: UserAccounts,
    pub direction: TextDirection,
    pub show_search: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            marquee_enabled: false,
            marquee_text: String::new(),
            guest_checkout: true,
            language: Language::English,
            user_accounts: UserAccounts::Required,
            direction: TextDirection::Ltr,
            show_search: true,
        }
    }
}

impl GlobalSettings {
    pub const MAX_MARQUEE_TEXT: usize = 200;

    pub fn validate(&self) -> Result<()> {
        if self.marquee_text.chars().count() > Self::MAX_MARQUEE_TEXT {
            return Err(BuilderError::invalid_setting(
                "marquee_text",
                format!("longer than {} characters", Self::MAX_MARQUEE_TEXT),
            ));
        }
        Ok(())
    }
}

/// The whole configuration tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub theme: ThemeSettings,
    pub screens: BTreeMap<Screen, Vec<BlockEntry>>,
    #[serde(default)]
    pub global: GlobalSettings,
}

impl AppConfig {
    pub fn new(theme: ThemeSettings) -> Self {
        Self {
            theme,
            screens: Screen::ALL.iter().map(|s| (*s, Vec::new())).collect(),
            global: GlobalSettings::default(),
        }
    }

    pub fn blocks(&self, screen: Screen) -> &[BlockEntry] {
        self.screens.get(&screen).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn blocks_mut(&mut self, screen: Screen) -> &mut Vec<BlockEntry> {
        self.screens.entry(screen).or_default()
    }

    pub fn find(&self, screen: Screen, block_id: &str) -> Option<&BlockEntry> {
        self.blocks(screen).iter().find(|b| b.id == block_id)
    }

    pub fn find_mut(&mut self, screen: Screen, block_id: &str) -> Option<&mut BlockEntry> {
        self.blocks_mut(screen).iter_mut().find(|b| b.id == block_id)
    }

    pub fn contains_id(&self, block_id: &str) -> bool {
        self.screens.values().flatten().any(|b| b.id == block_id)
    }

    pub fn block_count(&self) -> usize {
        self.screens.values().map(Vec::len).sum()
    }

    /// Parse a tree and check it can be adopted as-is.
    ///
    /// Missing screens are added empty. Screens over the plan limit are kept.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: AppConfig = serde_json::from_str(json)?;
        for screen in Screen::ALL {
            config.screens.entry(screen).or_default();
        }
        config.check_ids()?;
        config.theme.validate()?;
        config.global.validate()?;
        for block in config.screens.values().flatten() {
            if !block.settings.accepts(block.block_type) {
                return Err(BuilderError::SettingsMismatch {
                    block_type: block.block_type,
                });
            }
            block.settings.validate()?;
            crate::builder::inspector::check_bounds(block.block_type, &block.settings)?;
        }
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn check_ids(&self) -> Result<()> {
        for (screen, blocks) in &self.screens {
            for (idx, block) in blocks.iter().enumerate() {
                if blocks[..idx].iter().any(|b| b.id == block.id) {
                    return Err(BuilderError::DuplicateBlockId {
                        screen: *screen,
                        block_id: block.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
