//! Read-only lookups over the block catalog

use crate::builder::registry;
use crate::builder::{BlockType, Category, Screen};

/// Display metadata for one block type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockMeta {
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub category: Category,
    /// `None` means the block may go on any screen.
    pub allowed_screens: Option<&'static [Screen]>,
}

impl BlockMeta {
    pub fn allows(&self, screen: Screen) -> bool {
        self.allowed_screens
            .map(|screens| screens.contains(&screen))
            .unwrap_or(true)
    }
}

pub fn metadata_for(block_type: BlockType) -> &'static BlockMeta {
    &registry::descriptor(block_type).meta
}

/// Block types in `category` that may be placed on `screen`, in catalog order.
pub fn eligible_types(screen: Screen, category: Category) -> Vec<BlockType> {
    registry::descriptors()
        .iter()
        .filter(|d| d.meta.category == category && d.meta.allows(screen))
        .map(|d| d.block_type)
        .collect()
}

/// Every category in library order.
pub fn categories() -> &'static [Category] {
    &Category::ALL
}

/// Categories that have at least one block eligible for `screen`.
pub fn categories_for(screen: Screen) -> Vec<Category> {
    categories()
        .iter()
        .copied()
        .filter(|category| !eligible_types(screen, *category).is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_labels() {
        let meta = metadata_for(BlockType::BannerSlider);
        assert_eq!(meta.label, "Banner Slider");
        assert_eq!(meta.category, Category::Marketing);
        assert!(meta.allowed_screens.is_none());
    }

    #[test]
    fn test_eligible_types_respects_whitelist() {
        assert!(eligible_types(Screen::Home, Category::Pdp).is_empty());
        assert_eq!(
            eligible_types(Screen::Pdp, Category::Pdp),
            vec![
                BlockType::ProductImages,
                BlockType::ProductTitle,
                BlockType::ProductPrice,
                BlockType::VariantSelector,
                BlockType::ProductDescription,
                BlockType::AddToCart,
            ]
        );
    }

    #[test]
    fn test_universal_blocks_on_every_screen() {
        for screen in Screen::ALL {
            assert!(eligible_types(screen, Category::Marketing).contains(&BlockType::PromoMarquee));
            assert_eq!(eligible_types(screen, Category::Utility), vec![BlockType::Spacer]);
        }
    }

    #[test]
    fn test_eligible_types_is_deterministic() {
        let first = eligible_types(Screen::Cart, Category::Cart);
        let second = eligible_types(Screen::Cart, Category::Cart);
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[test]
    fn test_categories_in_library_order() {
        assert_eq!(categories().len(), 8);
        assert_eq!(categories()[0], Category::Marketing);
    }

    #[test]
    fn test_categories_for_home_skips_restricted() {
        let categories = categories_for(Screen::Home);
        assert!(categories.contains(&Category::Marketing));
        assert!(categories.contains(&Category::Auth));
        assert!(!categories.contains(&Category::Pdp));
        assert!(!categories.contains(&Category::Account));
    }
}
