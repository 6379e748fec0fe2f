use fltk::enums::Color;
#[cfg(target_os = "windows")]
use fltk::{prelude::*, window::Window};

/// Resolved widget colors for one display mode. Values mirror the
/// foundation's web palette: warm gold accent over near-white or near-black
/// surfaces.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub is_dark: bool,
    /// Page background.
    pub background: Color,
    /// Alternating section background.
    pub surface: Color,
    /// Card background in dark mode; light mode derives cards from the
    /// section they sit on.
    pub card: Color,
    /// Icon chip background.
    pub chip: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub accent_hover: Color,
    pub border: Color,
    pub header: Color,
    /// Label color on accent-filled buttons.
    pub on_accent: Color,
}

impl Palette {
    /// Background of a section; sections alternate between the page
    /// background and the raised surface, like the site.
    pub fn section_bg(&self, alt_surface: bool) -> Color {
        if alt_surface { self.surface } else { self.background }
    }

    /// Cards contrast with whichever surface they sit on.
    pub fn card_bg(&self, alt_surface: bool) -> Color {
        if self.is_dark {
            self.card
        } else if alt_surface {
            self.background
        } else {
            self.surface
        }
    }
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            is_dark,
            background: Color::from_rgb(18, 18, 18),
            surface: Color::from_rgb(26, 26, 26),
            card: Color::from_rgb(31, 41, 55),
            chip: Color::from_rgb(55, 65, 81),
            text: Color::from_rgb(243, 244, 246),
            text_muted: Color::from_rgb(156, 163, 175),
            accent: Color::from_rgb(191, 161, 90),
            accent_hover: Color::from_rgb(212, 184, 106),
            border: Color::from_rgb(31, 41, 55),
            header: Color::from_rgb(26, 26, 26),
            on_accent: Color::White,
        }
    } else {
        Palette {
            is_dark,
            background: Color::White,
            surface: Color::from_rgb(247, 246, 243),
            card: Color::White,
            chip: Color::from_rgb(239, 230, 211),
            text: Color::from_rgb(26, 26, 26),
            text_muted: Color::from_rgb(95, 95, 95),
            accent: Color::from_rgb(191, 161, 90),
            accent_hover: Color::from_rgb(212, 184, 106),
            border: Color::from_rgb(232, 230, 225),
            header: Color::from_rgb(250, 250, 248),
            on_accent: Color::White,
        }
    }
}

/// The footer keeps the site's dark treatment in both modes.
pub mod footer {
    use fltk::enums::Color;

    pub fn background() -> Color {
        Color::from_rgb(18, 18, 18)
    }

    pub fn text() -> Color {
        Color::from_rgb(214, 214, 214)
    }

    pub fn heading() -> Color {
        Color::from_rgb(191, 161, 90)
    }

    pub fn rule() -> Color {
        Color::from_rgb(42, 42, 42)
    }
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Attribute 20 (Windows 11 / Windows 10 2004+), then 19 (1809-1903)
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
