// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants of the invitation page.

## Organization

- **Palette**: Paper, ink and accent colors plus semantic toast colors
- **Opacity**: Overlay levels (lightbox backdrop, hover states)
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Page column, thumbnails, markers, toasts
- **Typography**: Font size scale
- **Border**, **Radius**, **Shadow**

## Examples

```
use iced_invitation::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.33, 0.31, 0.30);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.53, 0.52);
    pub const GRAY_200: Color = Color::from_rgb(0.84, 0.82, 0.80);

    /// Page background.
    pub const PAPER: Color = Color::from_rgb(0.992, 0.980, 0.965);
    /// Body text.
    pub const INK: Color = Color::from_rgb(0.20, 0.18, 0.17);

    // Accent (dusty rose scale)
    pub const ROSE_100: Color = Color::from_rgb(0.98, 0.92, 0.91);
    pub const ROSE_300: Color = Color::from_rgb(0.90, 0.72, 0.70);
    pub const ROSE_500: Color = Color::from_rgb(0.78, 0.52, 0.50);
    pub const ROSE_700: Color = Color::from_rgb(0.58, 0.34, 0.33);

    /// Groom side accent.
    pub const GROOM: Color = Color::from_rgb(0.36, 0.50, 0.66);
    /// Bride side accent.
    pub const BRIDE: Color = ROSE_500;

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Contact popup scrim.
    pub const SCRIM: f32 = 0.6;
    /// Lightbox backdrop.
    pub const BACKDROP: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

pub mod sizing {
    /// Width of the page column, matching a phone-sized invitation card.
    pub const PAGE_WIDTH: f32 = 480.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const POPUP_WIDTH: f32 = 400.0;

    /// Edge of a square grid thumbnail.
    pub const THUMBNAIL: f32 = 140.0;
    pub const INDICATOR_DOT: f32 = 10.0;
    pub const NAV_BUTTON: f32 = 48.0;
}

pub mod typography {
    /// Couple names on the cover.
    pub const DISPLAY: f32 = 34.0;
    /// Section headings.
    pub const TITLE: f32 = 22.0;
    pub const BODY_LG: f32 = 17.0;
    pub const BODY: f32 = 15.0;
    /// Captions, labels.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::SCRIM);

    assert!(sizing::THUMBNAIL * 3.0 <= sizing::PAGE_WIDTH);
    assert!(sizing::TOAST_WIDTH <= sizing::PAGE_WIDTH);

    assert!(typography::DISPLAY > typography::TITLE);
    assert!(typography::TITLE > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
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
    fn side_accents_differ() {
        assert_ne!(palette::GROOM, palette::BRIDE);
    }
}
