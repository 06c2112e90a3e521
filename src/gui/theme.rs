//! Custom theme definitions for the application

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Gradient, Shadow, Theme, Vector};

// --- Color Palette ---

// Page background gradient, soft teal to off-white
pub const BACKGROUND_START: Color = Color::from_rgb(0.925, 0.973, 0.969); // Teal 50
pub const BACKGROUND_END: Color = Color::from_rgb(0.973, 0.980, 0.988); // Slate 50

// Primary accent - teal
pub const TEAL_600: Color = Color::from_rgb(0.051, 0.580, 0.533);
pub const TEAL_500: Color = Color::from_rgb(0.078, 0.722, 0.651);
pub const TEAL_400: Color = Color::from_rgb(0.176, 0.831, 0.749);

// Danger - rose
pub const ROSE_500: Color = Color::from_rgb(0.957, 0.247, 0.369);

// Slate scale for text, borders, surfaces
pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231); // Primary text
pub const SLATE_600: Color = Color::from_rgb(0.278, 0.333, 0.412); // Secondary text
pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545); // Muted text
pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722); // Placeholder
pub const SLATE_200: Color = Color::from_rgb(0.886, 0.910, 0.941); // Light borders
pub const SLATE_100: Color = Color::from_rgb(0.945, 0.957, 0.973); // Surface tint

pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);

// Semantic aliases
pub const TEXT_PRIMARY: Color = SLATE_800;
pub const TEXT_SECONDARY: Color = SLATE_600;
pub const TEXT_MUTED: Color = SLATE_500;
pub const DANGER: Color = ROSE_500;

// --- Container Styles ---

pub struct PageContainer;

impl container::StyleSheet for PageContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(2.356))
                    .add_stop(0.0, BACKGROUND_START)
                    .add_stop(1.0, BACKGROUND_END),
            ))),
            ..Default::default()
        }
    }
}

pub struct CardContainer;

impl container::StyleSheet for CardContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_PRIMARY),
            background: Some(Background::Color(WHITE)),
            border: Border {
                color: SLATE_200,
                width: 1.0,
                radius: 18.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.051, 0.580, 0.533, 0.12),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 18.0,
            },
        }
    }
}

/// Box shown in place of the thumbnail while it loads (or failed to).
pub struct PreviewPlaceholder;

impl container::StyleSheet for PreviewPlaceholder {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(TEXT_MUTED),
            background: Some(Background::Color(SLATE_100)),
            border: Border {
                color: SLATE_200,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(0.0))
                    .add_stop(0.0, TEAL_600)
                    .add_stop(1.0, TEAL_400),
            ))),
            text_color: WHITE,
            border: Border {
                radius: 14.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.051, 0.580, 0.533, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            shadow: Shadow {
                offset: Vector::new(0.0, 6.0),
                blur_radius: 18.0,
                ..active.shadow
            },
            ..active
        }
    }

    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            shadow: Shadow {
                offset: Vector::new(0.0, 2.0),
                blur_radius: 6.0,
                ..active.shadow
            },
            ..active
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(SLATE_200)),
            text_color: SLATE_500,
            shadow: Shadow::default(),
            ..active
        }
    }
}

pub struct IconButton;

impl button::StyleSheet for IconButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: SLATE_600,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SLATE_200)),
            text_color: SLATE_800,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// --- Input Styles ---

pub struct InputStyle;

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(WHITE),
            border: Border {
                radius: 14.0.into(),
                width: 2.0,
                color: SLATE_200,
            },
            icon_color: SLATE_500,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            border: Border {
                color: TEAL_500,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        SLATE_400
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        SLATE_800
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.078, 0.722, 0.651, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(SLATE_100),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        SLATE_400
    }
}

/// Same field, rose border while an error is being shown.
pub struct InputErrorStyle;

impl text_input::StyleSheet for InputErrorStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(WHITE),
            border: Border {
                radius: 14.0.into(),
                width: 2.0,
                color: ROSE_500,
            },
            icon_color: ROSE_500,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        SLATE_400
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        SLATE_800
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.957, 0.247, 0.369, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(SLATE_100),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        SLATE_400
    }
}
