use fltk::{
    enums::{Color, FrameType},
    prelude::*,
    window::Window,
};

use crate::app::domain::content::Accent;
use crate::app::domain::page::{SectionTone, TextStyle};

const WHITE: Color = Color::from_rgb(255, 255, 255);
const SLATE_50: Color = Color::from_rgb(248, 250, 252);
const SLATE_100: Color = Color::from_rgb(241, 245, 249);
const SLATE_200: Color = Color::from_rgb(226, 232, 240);
const SLATE_400: Color = Color::from_rgb(148, 163, 184);
const SLATE_600: Color = Color::from_rgb(71, 85, 105);
const SLATE_700: Color = Color::from_rgb(51, 65, 85);
const SLATE_800: Color = Color::from_rgb(30, 41, 59);
const SLATE_900: Color = Color::from_rgb(15, 23, 42);
const SLATE_950: Color = Color::from_rgb(2, 6, 23);
const BLUE_50: Color = Color::from_rgb(239, 246, 255);
const BLUE_100: Color = Color::from_rgb(219, 234, 254);
const BLUE_400: Color = Color::from_rgb(96, 165, 250);
const BLUE_600: Color = Color::from_rgb(37, 99, 235);
const BLUE_700: Color = Color::from_rgb(29, 78, 216);
const BLUE_800: Color = Color::from_rgb(30, 64, 175);
const GREEN_500: Color = Color::from_rgb(34, 197, 94);
const AVATAR_GREY: Color = Color::from_rgb(74, 85, 104);

/// Text colour, chip background and chip text for one accent family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentColors {
    pub text: Color,
    pub chip_bg: Color,
    pub chip_text: Color,
}

fn accent_light(accent: Accent) -> AccentColors {
    let (text, chip_bg, chip_text) = match accent {
        Accent::Blue => ((37, 99, 235), (219, 234, 254), (30, 64, 175)),
        Accent::Green => ((22, 163, 74), (220, 252, 231), (22, 101, 52)),
        Accent::Purple => ((147, 51, 234), (243, 232, 255), (107, 33, 168)),
        Accent::Orange => ((234, 88, 12), (255, 237, 213), (154, 52, 18)),
        Accent::Red => ((220, 38, 38), (254, 226, 226), (153, 27, 27)),
        Accent::Indigo => ((79, 70, 229), (224, 231, 255), (55, 48, 163)),
        Accent::Slate => ((30, 41, 59), (241, 245, 249), (51, 65, 85)),
    };
    AccentColors {
        text: Color::from_rgb(text.0, text.1, text.2),
        chip_bg: Color::from_rgb(chip_bg.0, chip_bg.1, chip_bg.2),
        chip_text: Color::from_rgb(chip_text.0, chip_text.1, chip_text.2),
    }
}

fn accent_dark(accent: Accent) -> AccentColors {
    let (text, chip_bg) = match accent {
        Accent::Blue => ((96, 165, 250), (30, 58, 138)),
        Accent::Green => ((74, 222, 128), (20, 83, 45)),
        Accent::Purple => ((192, 132, 252), (88, 28, 135)),
        Accent::Orange => ((251, 146, 60), (124, 45, 18)),
        Accent::Red => ((248, 113, 113), (127, 29, 29)),
        Accent::Indigo => ((129, 140, 248), (49, 46, 129)),
        Accent::Slate => ((226, 232, 240), (71, 85, 105)),
    };
    AccentColors {
        text: Color::from_rgb(text.0, text.1, text.2),
        chip_bg: Color::from_rgb(chip_bg.0, chip_bg.1, chip_bg.2),
        chip_text: Color::from_rgb(241, 245, 249),
    }
}

/// Resolved colours for light or dark mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub is_dark: bool,
    pub window_bg: Color,
    pub heading: Color,
    pub body: Color,
    pub muted: Color,
    pub card_bg: Color,
    pub card_inset_bg: Color,
    pub card_nested_bg: Color,
    pub link: Color,
    pub nav_text: Color,
    pub nav_active: Color,
    pub nav_active_bg: Color,
    pub nav_bg: Color,
    pub nav_bg_scrolled: Color,
    pub avatar_bg: Color,
    pub status_dot: Color,
}

impl Palette {
    pub fn new(is_dark: bool) -> Self {
        if is_dark {
            Self {
                is_dark,
                window_bg: SLATE_950,
                heading: SLATE_100,
                body: SLATE_200,
                muted: SLATE_400,
                card_bg: SLATE_800,
                card_inset_bg: SLATE_800,
                card_nested_bg: SLATE_700,
                link: BLUE_400,
                nav_text: SLATE_200,
                nav_active: BLUE_400,
                nav_active_bg: SLATE_800,
                nav_bg: Color::from_rgb(22, 30, 50),
                nav_bg_scrolled: SLATE_900,
                avatar_bg: AVATAR_GREY,
                status_dot: GREEN_500,
            }
        } else {
            Self {
                is_dark,
                window_bg: SLATE_50,
                heading: SLATE_800,
                body: SLATE_700,
                muted: SLATE_600,
                card_bg: WHITE,
                card_inset_bg: SLATE_50,
                card_nested_bg: WHITE,
                link: BLUE_600,
                nav_text: SLATE_600,
                nav_active: BLUE_600,
                nav_active_bg: BLUE_50,
                nav_bg: Color::from_rgb(250, 251, 253),
                nav_bg_scrolled: WHITE,
                avatar_bg: AVATAR_GREY,
                status_dot: GREEN_500,
            }
        }
    }

    pub fn accent(&self, accent: Accent) -> AccentColors {
        if self.is_dark { accent_dark(accent) } else { accent_light(accent) }
    }

    /// Nav bar fill: opaque once scrolled, a softer tint at the top.
    pub fn nav_background(&self, scrolled: bool) -> Color {
        if scrolled { self.nav_bg_scrolled } else { self.nav_bg }
    }

    /// Nav bar box: shadowed once scrolled.
    pub fn nav_frame(&self, scrolled: bool) -> FrameType {
        if scrolled { FrameType::ShadowBox } else { FrameType::FlatBox }
    }

    pub fn section_background(&self, tone: SectionTone) -> Color {
        match (tone, self.is_dark) {
            (SectionTone::Hero, false) => BLUE_700,
            (SectionTone::Hero, true) => BLUE_800,
            (SectionTone::Light, false) => WHITE,
            (SectionTone::Light, true) => SLATE_900,
            (SectionTone::Muted, false) => SLATE_50,
            (SectionTone::Muted, true) => SLATE_950,
            (SectionTone::Dark, _) => SLATE_900,
        }
    }

    pub fn text_color(&self, tone: SectionTone, style: TextStyle) -> Color {
        match tone {
            SectionTone::Hero => match style {
                TextStyle::Display | TextStyle::SectionTitle | TextStyle::CardTitle | TextStyle::Label => WHITE,
                TextStyle::Subtitle => BLUE_100,
                TextStyle::Body | TextStyle::Caption => BLUE_50,
            },
            SectionTone::Dark => SLATE_400,
            SectionTone::Light | SectionTone::Muted => match style {
                TextStyle::Display | TextStyle::SectionTitle | TextStyle::CardTitle | TextStyle::Label => {
                    self.heading
                }
                TextStyle::Subtitle | TextStyle::Body => self.body,
                TextStyle::Caption => self.muted,
            },
        }
    }

    /// Fill and label colours of a contact button.
    pub fn link_button(&self, primary: bool) -> (Color, Color) {
        if primary { (WHITE, BLUE_600) } else { (BLUE_800, WHITE) }
    }

    pub fn badge(&self) -> (Color, Color) {
        (self.link, WHITE)
    }
}

pub fn apply_window_theme(window: &mut Window, palette: &Palette) {
    window.set_color(palette.window_bg);
    window.set_label_color(palette.heading);
    window.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+).
/// Needs a shown window for a valid HWND.
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
    let on: i32 = i32::from(is_dark);
    // 20 on Windows 11 / 10 2004+, 19 on older Windows 10 builds
    for attribute in [20, 19] {
        unsafe {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
