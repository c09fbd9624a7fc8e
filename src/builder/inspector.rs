//! Inspector form descriptions and list editing helpers

use crate::builder::registry;
use crate::builder::settings::{BlockSettings, CategoryIcon, MenuLink, Slide, TargetType};
use crate::builder::BlockType;
use crate::error::{BuilderError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    LongText,
    Color,
    Url,
    Number { min: f64, max: f64 },
    /// `default` is what the renderer assumes while the key is unset.
    Toggle { default: bool },
    Choice(&'static [&'static str]),
    Slides,
    Icons,
    Links,
}

/// One editable key of a block's settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind }
    }
}

pub fn fields_for(block_type: BlockType) -> &'static [FieldSpec] {
    registry::descriptor(block_type).fields
}

pub fn field(block_type: BlockType, key: &str) -> Option<&'static FieldSpec> {
    fields_for(block_type).iter().find(|f| f.key == key)
}

/// Reject numeric values outside the range the form offers for `block_type`.
pub fn check_bounds(block_type: BlockType, settings: &BlockSettings) -> Result<()> {
    for spec in fields_for(block_type) {
        let FieldKind::Number { min, max } = spec.kind else {
            continue;
        };
        let Some(value) = settings.get(spec.key).and_then(|v| v.as_f64()) else {
            continue;
        };
        if value < min || value > max {
            return Err(BuilderError::invalid_setting(
                spec.key,
                format!("{value} is outside {min}..={max}"),
            ));
        }
    }
    Ok(())
}

fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(1, |max| max + 1)
}

pub fn add_slide(slides: &[Slide]) -> Vec<Slide> {
    let mut next = slides.to_vec();
    next.push(Slide {
        id: next_id(slides.iter().map(|s| s.id)),
        title: "NEW SLIDE".to_string(),
        cta: "SHOP NOW".to_string(),
        target_type: TargetType::Collection,
        ..Slide::default()
    });
    next
}

pub fn remove_slide(slides: &[Slide], slide_id: u32) -> Vec<Slide> {
    slides.iter().filter(|s| s.id != slide_id).cloned().collect()
}

pub fn add_icon(icons: &[CategoryIcon]) -> Vec<CategoryIcon> {
    let mut next = icons.to_vec();
    next.push(CategoryIcon {
        id: next_id(icons.iter().map(|i| i.id)),
        label: "Category".to_string(),
        ..CategoryIcon::default()
    });
    next
}

pub fn remove_icon(icons: &[CategoryIcon], icon_id: u32) -> Vec<CategoryIcon> {
    icons.iter().filter(|i| i.id != icon_id).cloned().collect()
}

pub fn add_link(links: &[MenuLink]) -> Vec<MenuLink> {
    let mut next = links.to_vec();
    next.push(MenuLink {
        id: next_id(links.iter().map(|l| l.id)),
        label: "New Link".to_string(),
        target: String::new(),
    });
    next
}

pub fn remove_link(links: &[MenuLink], link_id: u32) -> Vec<MenuLink> {
    links.iter().filter(|l| l.id != link_id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_exposes_slide_list() {
        let spec = field(BlockType::BannerSlider, "slides").unwrap();
        assert_eq!(spec.kind, FieldKind::Slides);
        assert!(field(BlockType::BannerSlider, "content").is_none());
    }

    #[test]
    fn test_every_field_key_is_a_settings_key() {
        use crate::builder::settings::BlockSettings;
        use serde_json::Value;

        for block_type in BlockType::ALL {
            let defaults = BlockSettings::defaults_for(block_type);
            for spec in fields_for(block_type) {
                let sample = match spec.kind {
                    FieldKind::Toggle { .. } => Value::Bool(true),
                    FieldKind::Number { min, .. } => serde_json::json!(min),
                    FieldKind::Slides | FieldKind::Icons | FieldKind::Links => Value::Array(vec![]),
                    FieldKind::Color => Value::String("#000000".into()),
                    FieldKind::Choice(options) => Value::String(options[0].into()),
                    FieldKind::Url => Value::String(String::new()),
                    FieldKind::Text | FieldKind::LongText => Value::String("x".into()),
                };
                assert!(
                    defaults.with_field(spec.key, sample).is_ok(),
                    "{block_type} rejects its own field '{}'",
                    spec.key
                );
            }
        }
    }

    #[test]
    fn test_number_bounds_are_inclusive() {
        let spacer = BlockSettings::defaults_for(BlockType::Spacer);
        let at = |height: f64| spacer.with_field("height", serde_json::json!(height)).unwrap();

        assert!(check_bounds(BlockType::Spacer, &at(0.0)).is_ok());
        assert!(check_bounds(BlockType::Spacer, &at(400.0)).is_ok());
        assert!(check_bounds(BlockType::Spacer, &at(400.5)).is_err());
        assert!(check_bounds(BlockType::Spacer, &at(1e9)).is_err());

        let timer = BlockSettings::defaults_for(BlockType::TimerBanner)
            .with_field("hours", serde_json::json!(721))
            .unwrap();
        assert!(check_bounds(BlockType::TimerBanner, &timer).is_err());
    }

    #[test]
    fn test_unset_numbers_pass_bounds() {
        let text = BlockSettings::defaults_for(BlockType::Text);
        assert!(check_bounds(BlockType::Text, &text).is_ok());
        let spacer = BlockSettings::defaults_for(BlockType::Spacer)
            .with_field("height", serde_json::Value::Null)
            .unwrap();
        assert!(check_bounds(BlockType::Spacer, &spacer).is_ok());
    }

    #[test]
    fn test_add_and_remove_slide() {
        let slides = add_slide(&[]);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].id, 1);

        let slides = add_slide(&slides);
        assert_eq!(slides[1].id, 2);

        let slides = remove_slide(&slides, 1);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].id, 2);

        // ids are not recycled while a higher one exists
        assert_eq!(add_slide(&slides)[1].id, 3);
    }

    #[test]
    fn test_add_and_remove_icon() {
        let icons = add_icon(&add_icon(&[]));
        assert_eq!(icons.iter().map(|i| i.id).collect::<Vec<_>>(), [1, 2]);
        assert_eq!(remove_icon(&icons, 7).len(), 2);
        assert_eq!(remove_icon(&icons, 2).len(), 1);
    }

    #[test]
    fn test_add_link() {
        let links = add_link(&[]);
        assert_eq!(links[0].label, "New Link");
        assert!(remove_link(&links, 1).is_empty());
    }
}
