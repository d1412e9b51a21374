// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! - **Palette**: base colors, the boutique's gold brand scale, and the two
//!   semantic banner colors
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.55);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.8);

    // Brand colors (gold scale)
    pub const GOLD_200: Color = Color::from_rgb(0.95, 0.88, 0.66);
    pub const GOLD_400: Color = Color::from_rgb(0.87, 0.72, 0.35);
    pub const GOLD_500: Color = Color::from_rgb(0.8, 0.62, 0.2);
    pub const GOLD_600: Color = Color::from_rgb(0.66, 0.5, 0.15);
    pub const GOLD_700: Color = Color::from_rgb(0.5, 0.37, 0.11);
    pub const GOLD_800: Color = Color::from_rgb(0.34, 0.25, 0.08);

    // Semantic colors (banner backgrounds)
    pub const ERROR_500: Color = Color::from_rgb(1.0, 0.267, 0.267);
    pub const SUCCESS_500: Color = Color::from_rgb(0.298, 0.686, 0.314);
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// Height of the hero slideshow area.
    pub const HERO_HEIGHT: f32 = 360.0;

    /// Diameter of one indicator dot.
    pub const INDICATOR_DOT: f32 = 12.0;

    /// Maximum width of the contact form column.
    pub const FORM_WIDTH: f32 = 480.0;
}

pub mod typography {
    /// Hero caption title.
    pub const TITLE_LG: f32 = 30.0;

    /// Screen and brand titles.
    pub const TITLE_MD: f32 = 20.0;

    /// Emphasis text, hero subtitles.
    pub const BODY_LG: f32 = 16.0;

    /// Most UI text.
    pub const BODY: f32 = 14.0;

    /// Field labels, hints.
    pub const BODY_SM: f32 = 13.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

const _: () = {
    // Spacing validation
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);

    // Color validation
    assert!(palette::GOLD_500.r >= 0.0 && palette::GOLD_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn banner_colors_are_distinct() {
        assert_ne!(palette::ERROR_500, palette::SUCCESS_500);
    }
}
