use std::ops::{Deref, DerefMut};

use gpui::{hsla, px, App, Global, Hsla, Pixels, SharedString, Window, WindowAppearance};

pub fn init(cx: &mut App) {
    Theme::sync_system_appearance(None, cx);
}

pub trait ActiveTheme {
    fn theme(&self) -> &Theme;
}

impl ActiveTheme for App {
    #[inline(always)]
    fn theme(&self) -> &Theme {
        Theme::global(self)
    }
}

/// Hue in 0..360, saturation and lightness in 0..100.
fn hsl(h: f32, s: f32, l: f32) -> Hsla {
    hsla(h / 360., s / 100., l / 100., 1.)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColor {
    pub background: Hsla,
    pub foreground: Hsla,
    pub border: Hsla,
    pub muted_foreground: Hsla,
    /// Hover background for the ghost button.
    pub secondary_hover: Hsla,
    /// Pressed background for the ghost button.
    pub secondary_active: Hsla,
    pub title_bar: Hsla,
    pub title_bar_border: Hsla,
}

impl ThemeColor {
    pub fn light() -> Self {
        Self {
            background: hsl(0., 0., 100.),
            foreground: hsl(240., 10., 3.9),
            border: hsl(240., 5.9, 90.),
            muted_foreground: hsl(240., 3.8, 46.1),
            secondary_hover: hsl(240., 5.9, 93.),
            secondary_active: hsl(240., 5.9, 90.),
            title_bar: hsl(0., 0., 98.),
            title_bar_border: hsl(240., 5.9, 90.),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: hsl(0., 0., 8.),
            foreground: hsl(0., 0., 98.),
            border: hsl(240., 3.7, 16.9),
            muted_foreground: hsl(240., 5., 64.9),
            secondary_hover: hsl(240., 3.7, 18.),
            secondary_active: hsl(240., 3.7, 21.),
            title_bar: hsl(0., 0., 10.),
            title_bar_border: hsl(240., 3.7, 15.9),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ThemeColor,
    pub mode: ThemeMode,
    pub font_family: SharedString,
    pub font_size: Pixels,
    /// Radius for the general elements.
    pub radius: Pixels,
}

impl Deref for Theme {
    type Target = ThemeColor;

    fn deref(&self) -> &Self::Target {
        &self.colors
    }
}

impl DerefMut for Theme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.colors
    }
}

impl Global for Theme {}

impl Theme {
    /// Returns the global theme reference.
    #[inline(always)]
    pub fn global(cx: &App) -> &Theme {
        cx.global::<Theme>()
    }

    /// Returns the global theme mutable reference.
    #[inline(always)]
    pub fn global_mut(cx: &mut App) -> &mut Theme {
        cx.global_mut::<Theme>()
    }

    /// Returns true if the theme is dark.
    #[inline(always)]
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Sync the theme with the system appearance.
    pub fn sync_system_appearance(window: Option<&mut Window>, cx: &mut App) {
        // Prefer window.appearance() when a window is around, it is the
        // reliable source on Linux.
        let appearance = window
            .as_ref()
            .map(|window| window.appearance())
            .unwrap_or_else(|| cx.window_appearance());

        Self::change(appearance, window, cx);
    }

    pub fn change(mode: impl Into<ThemeMode>, window: Option<&mut Window>, cx: &mut App) {
        let mode = mode.into();
        let colors = match mode {
            ThemeMode::Light => ThemeColor::light(),
            ThemeMode::Dark => ThemeColor::dark(),
        };

        if !cx.has_global::<Theme>() {
            let theme = Theme::from(colors);
            cx.set_global(theme);
        }

        let theme = cx.global_mut::<Theme>();
        theme.mode = mode;
        theme.colors = colors;

        if let Some(window) = window {
            window.refresh();
        }
    }
}

impl From<ThemeColor> for Theme {
    fn from(colors: ThemeColor) -> Self {
        Theme {
            mode: ThemeMode::default(),
            font_size: px(16.),
            font_family: if cfg!(target_os = "macos") {
                ".SystemUIFont".into()
            } else if cfg!(target_os = "windows") {
                "Segoe UI".into()
            } else {
                "FreeMono".into()
            },
            radius: px(6.),
            colors,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    #[inline(always)]
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Return lower_case theme name: `light`, `dark`.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl From<WindowAppearance> for ThemeMode {
    fn from(appearance: WindowAppearance) -> Self {
        match appearance {
            WindowAppearance::Dark | WindowAppearance::VibrantDark => Self::Dark,
            WindowAppearance::Light | WindowAppearance::VibrantLight => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_appearance() {
        assert_eq!(ThemeMode::from(WindowAppearance::Dark), ThemeMode::Dark);
        assert_eq!(
            ThemeMode::from(WindowAppearance::VibrantDark),
            ThemeMode::Dark
        );
        assert_eq!(ThemeMode::from(WindowAppearance::Light), ThemeMode::Light);
        assert_eq!(
            ThemeMode::from(WindowAppearance::VibrantLight),
            ThemeMode::Light
        );
    }

    #[test]
    fn test_mode_name() {
        assert_eq!(ThemeMode::Light.name(), "light");
        assert_eq!(ThemeMode::Dark.name(), "dark");
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}
