#[cfg(test)]
mod palette_tests {
    use crate::ui::theme_system::color::Rgba8;
    use crate::ui::theme_system::palette_theme::Palette;
    use crate::ui::theme_system::tokens::*;
    use crate::ui::theme_system::{BaselineTheme, Theme, ThemeVariant};
    use crate::ui::themes::{dark, light, DarkPalette, DarkTheme, LightPalette, LightTheme};
    use bevy::color::Color;

    #[test]
    fn listed_tokens_return_their_literal_for_any_variant() {
        let dark_theme = DarkTheme::new();
        for (name, expected) in DarkPalette::COLORS {
            for variant in ThemeVariant::ALL {
                assert_eq!(
                    Rgba8::from(dark_theme.color(*name, variant)),
                    *expected,
                    "dark {}",
                    name
                );
            }
        }

        let light_theme = LightTheme::new();
        for (name, expected) in LightPalette::COLORS {
            for variant in ThemeVariant::ALL {
                assert_eq!(
                    Rgba8::from(light_theme.color(*name, variant)),
                    *expected,
                    "light {}",
                    name
                );
            }
        }
    }

    #[test]
    fn documented_literals() {
        assert_eq!(
            DarkTheme::new().color(COLOR_BACKGROUND, ThemeVariant::Dark),
            Color::from(dark::BACKGROUND)
        );
        assert_eq!(dark::BACKGROUND.to_array(), [0x20, 0x20, 0x20, 0xff]);
        assert_eq!(
            LightTheme::new().color(COLOR_PRIMARY, ThemeVariant::Light),
            Color::srgba_u8(0x00, 0x5f, 0xb8, 0xff)
        );
        assert_eq!(
            LightTheme::new().color(COLOR_BACKGROUND, ThemeVariant::Light),
            Color::from(light::BACKGROUND)
        );
    }

    #[test]
    fn unlisted_tokens_match_baseline() {
        let unlisted = [
            COLOR_FOREGROUND_ON_ERROR,
            COLOR_FOREGROUND_ON_SUCCESS,
            COLOR_FOREGROUND_ON_WARNING,
            COLOR_SCROLL_BAR_BACKGROUND,
            ColorName::new("someFutureToken"),
        ];
        let themes: [&dyn Theme; 2] = [&DarkTheme::new(), &LightTheme::new()];

        for theme in themes {
            for name in unlisted {
                for variant in ThemeVariant::ALL {
                    assert_eq!(
                        theme.color(name, variant),
                        BaselineTheme.color(name, variant),
                        "{} {} {:?}",
                        theme.name(),
                        name,
                        variant
                    );
                }
            }
        }
    }

    #[test]
    fn fallback_follows_requested_variant() {
        let theme = DarkTheme::new();
        assert_ne!(
            theme.color(COLOR_SCROLL_BAR_BACKGROUND, ThemeVariant::Dark),
            theme.color(COLOR_SCROLL_BAR_BACKGROUND, ThemeVariant::Light)
        );
        assert!(!theme.overrides_color(COLOR_SCROLL_BAR_BACKGROUND));
        assert!(theme.overrides_color(COLOR_PRIMARY));
    }

    #[test]
    fn sizes_are_shared_by_both_providers() {
        let themes: [&dyn Theme; 2] = [&DarkTheme::new(), &LightTheme::new()];
        for theme in themes {
            assert_eq!(theme.size(SizeName::new("padding")), 8.0);
            assert_eq!(theme.size(SizeName::new("scrollbar")), 12.0);
            assert_eq!(theme.size(SizeName::new("separatorThickness")), 1.0);
            assert_eq!(theme.size(SizeName::new("inputBorder")), 1.0);
            assert_eq!(theme.size(SIZE_INLINE_ICON), 20.0);
            assert_eq!(theme.size(SIZE_TEXT), BaselineTheme.size(SIZE_TEXT));
            assert_eq!(theme.size(SizeName::new("unknown")), 0.0);
        }
    }

    #[test]
    fn providers_are_zero_sized() {
        assert_eq!(std::mem::size_of::<DarkTheme>(), 0);
        assert_eq!(std::mem::size_of::<LightTheme>(), 0);
        assert_eq!(DarkTheme::new().variant(), ThemeVariant::Dark);
        assert_eq!(LightTheme::new().variant(), ThemeVariant::Light);
    }
}

#[cfg(test)]
mod resource_tests {
    use crate::ui::theme_system::baseline::*;
    use crate::ui::theme_system::tokens::*;
    use crate::ui::theme_system::Theme;
    use crate::ui::themes::{DarkTheme, LightTheme};

    #[test]
    fn fonts_pass_through_to_baseline() {
        let themes: [&dyn Theme; 2] = [&DarkTheme::new(), &LightTheme::new()];
        for theme in themes {
            assert_eq!(theme.font(TextStyle::MONOSPACE), MONOSPACE_FONT);
            assert_eq!(
                theme.font(TextStyle {
                    monospace: true,
                    bold: true,
                    ..TextStyle::REGULAR
                }),
                MONOSPACE_FONT
            );
            assert_eq!(theme.font(TextStyle::REGULAR), REGULAR_FONT);
            assert_eq!(theme.font(TextStyle::BOLD), BaselineTheme.font(TextStyle::BOLD));
            assert_eq!(theme.font(TextStyle::ITALIC), ITALIC_FONT);
        }
    }

    #[test]
    fn recognized_icons_use_builtins() {
        let theme = LightTheme::new();
        assert_eq!(theme.icon(ICON_FOLDER), FOLDER_ICON);
        assert_eq!(theme.icon(ICON_FILE), FILE_ICON);
        assert_eq!(theme.icon(ICON_COMPUTER), COMPUTER_ICON);
        assert_eq!(theme.icon(ICON_STORAGE), STORAGE_ICON);
    }

    #[test]
    fn other_icons_delegate_to_baseline() {
        let theme = DarkTheme::new();
        for name in [ICON_HOME, ICON_SEARCH, IconName::new("notAnIcon")] {
            assert_eq!(theme.icon(name), BaselineTheme.icon(name));
        }
        assert_eq!(theme.icon(IconName::new("notAnIcon")), MISSING_ICON);
    }
}

#[cfg(test)]
mod determinism_tests {
    use crate::ui::theme_system::tokens::*;
    use crate::ui::theme_system::{editor_colors, theme_for, Theme, ThemeVariant};
    use std::thread;

    #[test]
    fn repeated_queries_are_stable() {
        for variant in ThemeVariant::ALL {
            let theme = theme_for(variant);
            for name in ALL_COLOR_NAMES {
                assert_eq!(theme.color(*name, variant), theme.color(*name, variant));
            }
            assert_eq!(theme.size(SIZE_PADDING), theme.size(SIZE_PADDING));
        }
        assert_eq!(editor_colors(true), editor_colors(true));
    }

    #[test]
    fn concurrent_queries_agree() {
        let expected: Vec<_> = ThemeVariant::ALL
            .iter()
            .map(|variant| snapshot(theme_for(*variant).as_ref(), *variant))
            .collect();

        thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let variant = ThemeVariant::ALL[i % 2];
                    scope.spawn(move || {
                        let theme = theme_for(variant);
                        (0..100)
                            .map(|_| snapshot(theme.as_ref(), variant))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            for (i, handle) in handles.into_iter().enumerate() {
                let results = handle.join().expect("query thread panicked");
                for result in results {
                    assert_eq!(result, expected[i % 2]);
                }
            }
        });
    }

    fn snapshot(theme: &dyn Theme, variant: ThemeVariant) -> Vec<[u8; 4]> {
        let mut values: Vec<[u8; 4]> = ALL_COLOR_NAMES
            .iter()
            .map(|name| crate::Rgba8::from(theme.color(*name, variant)).to_array())
            .collect();
        values.push(theme.size(SIZE_SCROLL_BAR).to_bits().to_le_bytes());
        let editor = editor_colors(variant.is_dark());
        values.extend(
            editor
                .roles()
                .iter()
                .map(|(_, color)| crate::Rgba8::from(*color).to_array()),
        );
        values
    }
}
