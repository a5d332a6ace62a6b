//! Monokai Pro Theme for the Roster Admin GUI

use gpui::Hsla;

/// Monokai Pro color palette
pub mod colors {
    use gpui::rgb;

    // Background colors
    pub fn bg_dark() -> gpui::Hsla { rgb(0x19181a).into() }      // #19181a - Darkest background
    pub fn bg_base() -> gpui::Hsla { rgb(0x2d2a2e).into() }      // #2d2a2e - Main background
    pub fn bg_light() -> gpui::Hsla { rgb(0x403e41).into() }     // #403e41 - Lighter background
    pub fn bg_highlight() -> gpui::Hsla { rgb(0x5b595c).into() } // #5b595c - Highlight background

    // Foreground colors
    pub fn fg_base() -> gpui::Hsla { rgb(0xfcfcfa).into() }      // #fcfcfa - Main text
    pub fn fg_dim() -> gpui::Hsla { rgb(0x939293).into() }       // #939293 - Dimmed text
    pub fn fg_muted() -> gpui::Hsla { rgb(0x727072).into() }     // #727072 - Muted text

    // Accent colors (Monokai Pro)
    pub fn red() -> gpui::Hsla { rgb(0xff6188).into() }          // #ff6188 - Red/Pink
    pub fn orange() -> gpui::Hsla { rgb(0xfc9867).into() }       // #fc9867 - Orange
    pub fn yellow() -> gpui::Hsla { rgb(0xffd866).into() }       // #ffd866 - Yellow
    pub fn green() -> gpui::Hsla { rgb(0xa9dc76).into() }        // #a9dc76 - Green
    pub fn cyan() -> gpui::Hsla { rgb(0x78dce8).into() }         // #78dce8 - Cyan
    pub fn purple() -> gpui::Hsla { rgb(0xab9df2).into() }       // #ab9df2 - Purple

    // Border colors
    pub fn border() -> gpui::Hsla { rgb(0x403e41).into() }       // Same as BG_LIGHT
    pub fn border_focus() -> gpui::Hsla { rgb(0x78dce8).into() } // Cyan for focus

    // Overlay scrim behind dialogs
    pub fn scrim() -> gpui::Hsla {
        let mut color: gpui::Hsla = rgb(0x19181a).into();
        color.a = 0.7;
        color
    }
}

/// Theme configuration
#[derive(Clone)]
pub struct MonokaiTheme {
    // Backgrounds
    pub background: Hsla,
    pub background_secondary: Hsla,
    pub background_elevated: Hsla,
    pub background_highlight: Hsla,

    // Foregrounds
    pub foreground: Hsla,
    pub foreground_dim: Hsla,
    pub foreground_muted: Hsla,

    // Accents
    pub accent_red: Hsla,
    pub accent_orange: Hsla,
    pub accent_yellow: Hsla,
    pub accent_green: Hsla,
    pub accent_cyan: Hsla,
    pub accent_purple: Hsla,

    // UI
    pub border: Hsla,
    pub border_focus: Hsla,
    pub overlay_scrim: Hsla,

    // Roster table
    pub table_header_bg: Hsla,
    pub row_bg: Hsla,
    pub row_hover_bg: Hsla,

    // Cards (form, login, dialogs)
    pub card_bg: Hsla,
}

impl Default for MonokaiTheme {
    fn default() -> Self {
        Self {
            // Backgrounds
            background: colors::bg_base(),
            background_secondary: colors::bg_dark(),
            background_elevated: colors::bg_light(),
            background_highlight: colors::bg_highlight(),

            // Foregrounds
            foreground: colors::fg_base(),
            foreground_dim: colors::fg_dim(),
            foreground_muted: colors::fg_muted(),

            // Accents
            accent_red: colors::red(),
            accent_orange: colors::orange(),
            accent_yellow: colors::yellow(),
            accent_green: colors::green(),
            accent_cyan: colors::cyan(),
            accent_purple: colors::purple(),

            // UI
            border: colors::border(),
            border_focus: colors::border_focus(),
            overlay_scrim: colors::scrim(),

            // Table
            table_header_bg: colors::bg_dark(),
            row_bg: colors::bg_base(),
            row_hover_bg: colors::bg_light(),

            // Cards
            card_bg: colors::bg_dark(),
        }
    }
}

impl MonokaiTheme {
    pub fn new() -> Self {
        Self::default()
    }
}
