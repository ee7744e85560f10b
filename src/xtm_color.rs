use ratatui::style::Color;
use term_color_support::ColorSupport;

/// Color depth the terminal can display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    TrueColor,
    Indexed256,
    Basic,
}

impl Depth {
    /// Detect the depth of the current stdout terminal
    pub fn detect() -> Depth {
        let support = ColorSupport::stdout();
        if support.has_16m {
            Depth::TrueColor
        } else if support.has_256 {
            Depth::Indexed256
        } else {
            Depth::Basic
        }
    }
}

/// A tile-game color: exact RGB, nearest 256-color index, and the plain ANSI fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Swatch {
    rgb: (u8, u8, u8),
    index256: u8,
    ansi: Color,
}

impl Swatch {
    const fn new(rgb: (u8, u8, u8), index256: u8, ansi: Color) -> Self {
        Swatch { rgb, index256, ansi }
    }

    fn at(self, depth: Depth) -> Color {
        match depth {
            Depth::TrueColor => Color::Rgb(self.rgb.0, self.rgb.1, self.rgb.2),
            Depth::Indexed256 => Color::Indexed(self.index256),
            Depth::Basic => self.ansi,
        }
    }
}

const BACKGROUND: Swatch = Swatch::new((44, 62, 80), 236, Color::Black);
const TILE_HIDDEN: Swatch = Swatch::new((52, 73, 94), 238, Color::DarkGray);
const TILE_SAFE: Swatch = Swatch::new((39, 174, 96), 35, Color::Green);
const TILE_MINE: Swatch = Swatch::new((192, 57, 43), 160, Color::Red);
const BUTTON_WIN: Swatch = Swatch::new((39, 174, 96), 35, Color::Green);
const BUTTON_LOSE: Swatch = Swatch::new((192, 57, 43), 160, Color::Red);
const BUTTON_PLAY: Swatch = Swatch::new((52, 152, 219), 32, Color::Blue);
const CURSOR: Swatch = Swatch::new((59, 120, 255), 63, Color::LightBlue);
const KEY: Swatch = Swatch::new((193, 156, 0), 178, Color::Yellow);
const TEXT: Swatch = Swatch::new((242, 242, 242), 255, Color::White);
const MUTED: Swatch = Swatch::new((118, 118, 118), 243, Color::DarkGray);

/// Every color the UI draws with, resolved once for the terminal's depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub tile_hidden: Color,
    pub tile_safe: Color,
    pub tile_mine: Color,
    pub button_win: Color,
    pub button_lose: Color,
    pub button_play: Color,
    pub cursor: Color,
    pub key: Color,
    pub text: Color,
    pub muted: Color,
}

impl Palette {
    pub fn detect() -> Palette {
        Palette::for_depth(Depth::detect())
    }

    pub fn for_depth(depth: Depth) -> Palette {
        Palette {
            background: BACKGROUND.at(depth),
            tile_hidden: TILE_HIDDEN.at(depth),
            tile_safe: TILE_SAFE.at(depth),
            tile_mine: TILE_MINE.at(depth),
            button_win: BUTTON_WIN.at(depth),
            button_lose: BUTTON_LOSE.at(depth),
            button_play: BUTTON_PLAY.at(depth),
            cursor: CURSOR.at(depth),
            key: KEY.at(depth),
            text: TEXT.at(depth),
            muted: MUTED.at(depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_each_depth() {
        assert_eq!(Palette::for_depth(Depth::TrueColor).tile_safe, Color::Rgb(39, 174, 96));
        assert_eq!(Palette::for_depth(Depth::Indexed256).tile_mine, Color::Indexed(160));
        assert_eq!(Palette::for_depth(Depth::Basic).button_play, Color::Blue);
    }
}
