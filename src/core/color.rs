use std::str::FromStr;

use crate::error::ColorParseError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, self.a)
    }

    pub fn to_image_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }

    /// Lowercase `#rrggbb`, the value format of a color input
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Resolve a CSS color value the way a computed style would
    pub fn parse_css(value: &str) -> Result<Self, ColorParseError> {
        let value = value.trim().to_ascii_lowercase();

        if value == "transparent" {
            return Ok(Rgba::TRANSPARENT);
        }
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::Unrecognized(value.clone()));
        }
        if let Some(args) = function_args(&value, "rgba").or_else(|| function_args(&value, "rgb")) {
            return parse_rgb_function(args).ok_or_else(|| ColorParseError::Unrecognized(value.clone()));
        }

        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, rgba)| *rgba)
            .ok_or(ColorParseError::Unrecognized(value))
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgba::parse_css(s)
    }
}

/// A cell counts as unpainted when its raw value is `white` or it resolves to opaque white.
/// Values that do not resolve at all are unpainted as well, like a rejected style assignment.
pub fn is_unpainted(value: &str) -> bool {
    value == "white" || matches!(Rgba::parse_css(value), Ok(Rgba::WHITE) | Err(_))
}

fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Rgba::rgb(digit(0)?, digit(1)?, digit(2)?)),
        4 => Some(Rgba::rgba(digit(0)?, digit(1)?, digit(2)?, digit(3)?)),
        6 => Some(Rgba::rgb(pair(0)?, pair(2)?, pair(4)?)),
        8 => Some(Rgba::rgba(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
        _ => None,
    }
}

/// Accepts both `rgb(1, 2, 3)` and `rgb(1 2 3 / 50%)` argument styles
fn parse_rgb_function(args: &str) -> Option<Rgba> {
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let channel = |s: &str| -> Option<u8> {
        let v = match s.strip_suffix('%') {
            Some(pct) => pct.parse::<f32>().ok()? * 255.0 / 100.0,
            None => s.parse::<f32>().ok()?,
        };
        Some(v.round().clamp(0.0, 255.0) as u8)
    };
    let alpha = |s: &str| -> Option<u8> {
        let v = match s.strip_suffix('%') {
            Some(pct) => pct.parse::<f32>().ok()? / 100.0,
            None => s.parse::<f32>().ok()?,
        };
        Some((v.clamp(0.0, 1.0) * 255.0).round() as u8)
    };

    let a = match parts.get(3) {
        Some(s) => alpha(s)?,
        None => 255,
    };
    Some(Rgba::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, a))
}

/// CSS named colors
const NAMED_COLORS: &[(&str, Rgba)] = &[
    ("aliceblue", Rgba::rgb(240, 248, 255)),
    ("antiquewhite", Rgba::rgb(250, 235, 215)),
    ("aqua", Rgba::rgb(0, 255, 255)),
    ("aquamarine", Rgba::rgb(127, 255, 212)),
    ("azure", Rgba::rgb(240, 255, 255)),
    ("beige", Rgba::rgb(245, 245, 220)),
    ("bisque", Rgba::rgb(255, 228, 196)),
    ("black", Rgba::rgb(0, 0, 0)),
    ("blanchedalmond", Rgba::rgb(255, 235, 205)),
    ("blue", Rgba::rgb(0, 0, 255)),
    ("blueviolet", Rgba::rgb(138, 43, 226)),
    ("brown", Rgba::rgb(165, 42, 42)),
    ("burlywood", Rgba::rgb(222, 184, 135)),
    ("cadetblue", Rgba::rgb(95, 158, 160)),
    ("chartreuse", Rgba::rgb(127, 255, 0)),
    ("chocolate", Rgba::rgb(210, 105, 30)),
    ("coral", Rgba::rgb(255, 127, 80)),
    ("cornflowerblue", Rgba::rgb(100, 149, 237)),
    ("cornsilk", Rgba::rgb(255, 248, 220)),
    ("crimson", Rgba::rgb(220, 20, 60)),
    ("cyan", Rgba::rgb(0, 255, 255)),
    ("darkblue", Rgba::rgb(0, 0, 139)),
    ("darkcyan", Rgba::rgb(0, 139, 139)),
    ("darkgoldenrod", Rgba::rgb(184, 134, 11)),
    ("darkgray", Rgba::rgb(169, 169, 169)),
    ("darkgreen", Rgba::rgb(0, 100, 0)),
    ("darkgrey", Rgba::rgb(169, 169, 169)),
    ("darkkhaki", Rgba::rgb(189, 183, 107)),
    ("darkmagenta", Rgba::rgb(139, 0, 139)),
    ("darkolivegreen", Rgba::rgb(85, 107, 47)),
    ("darkorange", Rgba::rgb(255, 140, 0)),
    ("darkorchid", Rgba::rgb(153, 50, 204)),
    ("darkred", Rgba::rgb(139, 0, 0)),
    ("darksalmon", Rgba::rgb(233, 150, 122)),
    ("darkseagreen", Rgba::rgb(143, 188, 143)),
    ("darkslateblue", Rgba::rgb(72, 61, 139)),
    ("darkslategray", Rgba::rgb(47, 79, 79)),
    ("darkslategrey", Rgba::rgb(47, 79, 79)),
    ("darkturquoise", Rgba::rgb(0, 206, 209)),
    ("darkviolet", Rgba::rgb(148, 0, 211)),
    ("deeppink", Rgba::rgb(255, 20, 147)),
    ("deepskyblue", Rgba::rgb(0, 191, 255)),
    ("dimgray", Rgba::rgb(105, 105, 105)),
    ("dimgrey", Rgba::rgb(105, 105, 105)),
    ("dodgerblue", Rgba::rgb(30, 144, 255)),
    ("firebrick", Rgba::rgb(178, 34, 34)),
    ("floralwhite", Rgba::rgb(255, 250, 240)),
    ("forestgreen", Rgba::rgb(34, 139, 34)),
    ("fuchsia", Rgba::rgb(255, 0, 255)),
    ("gainsboro", Rgba::rgb(220, 220, 220)),
    ("ghostwhite", Rgba::rgb(248, 248, 255)),
    ("gold", Rgba::rgb(255, 215, 0)),
    ("goldenrod", Rgba::rgb(218, 165, 32)),
    ("gray", Rgba::rgb(128, 128, 128)),
    ("green", Rgba::rgb(0, 128, 0)),
    ("greenyellow", Rgba::rgb(173, 255, 47)),
    ("grey", Rgba::rgb(128, 128, 128)),
    ("honeydew", Rgba::rgb(240, 255, 240)),
    ("hotpink", Rgba::rgb(255, 105, 180)),
    ("indianred", Rgba::rgb(205, 92, 92)),
    ("indigo", Rgba::rgb(75, 0, 130)),
    ("ivory", Rgba::rgb(255, 255, 240)),
    ("khaki", Rgba::rgb(240, 230, 140)),
    ("lavender", Rgba::rgb(230, 230, 250)),
    ("lavenderblush", Rgba::rgb(255, 240, 245)),
    ("lawngreen", Rgba::rgb(124, 252, 0)),
    ("lemonchiffon", Rgba::rgb(255, 250, 205)),
    ("lightblue", Rgba::rgb(173, 216, 230)),
    ("lightcoral", Rgba::rgb(240, 128, 128)),
    ("lightcyan", Rgba::rgb(224, 255, 255)),
    ("lightgoldenrodyellow", Rgba::rgb(250, 250, 210)),
    ("lightgray", Rgba::rgb(211, 211, 211)),
    ("lightgreen", Rgba::rgb(144, 238, 144)),
    ("lightgrey", Rgba::rgb(211, 211, 211)),
    ("lightpink", Rgba::rgb(255, 182, 193)),
    ("lightsalmon", Rgba::rgb(255, 160, 122)),
    ("lightseagreen", Rgba::rgb(32, 178, 170)),
    ("lightskyblue", Rgba::rgb(135, 206, 250)),
    ("lightslategray", Rgba::rgb(119, 136, 153)),
    ("lightslategrey", Rgba::rgb(119, 136, 153)),
    ("lightsteelblue", Rgba::rgb(176, 196, 222)),
    ("lightyellow", Rgba::rgb(255, 255, 224)),
    ("lime", Rgba::rgb(0, 255, 0)),
    ("limegreen", Rgba::rgb(50, 205, 50)),
    ("linen", Rgba::rgb(250, 240, 230)),
    ("magenta", Rgba::rgb(255, 0, 255)),
    ("maroon", Rgba::rgb(128, 0, 0)),
    ("mediumaquamarine", Rgba::rgb(102, 205, 170)),
    ("mediumblue", Rgba::rgb(0, 0, 205)),
    ("mediumorchid", Rgba::rgb(186, 85, 211)),
    ("mediumpurple", Rgba::rgb(147, 112, 219)),
    ("mediumseagreen", Rgba::rgb(60, 179, 113)),
    ("mediumslateblue", Rgba::rgb(123, 104, 238)),
    ("mediumspringgreen", Rgba::rgb(0, 250, 154)),
    ("mediumturquoise", Rgba::rgb(72, 209, 204)),
    ("mediumvioletred", Rgba::rgb(199, 21, 133)),
    ("midnightblue", Rgba::rgb(25, 25, 112)),
    ("mintcream", Rgba::rgb(245, 255, 250)),
    ("mistyrose", Rgba::rgb(255, 228, 225)),
    ("moccasin", Rgba::rgb(255, 228, 181)),
    ("navajowhite", Rgba::rgb(255, 222, 173)),
    ("navy", Rgba::rgb(0, 0, 128)),
    ("oldlace", Rgba::rgb(253, 245, 230)),
    ("olive", Rgba::rgb(128, 128, 0)),
    ("olivedrab", Rgba::rgb(107, 142, 35)),
    ("orange", Rgba::rgb(255, 165, 0)),
    ("orangered", Rgba::rgb(255, 69, 0)),
    ("orchid", Rgba::rgb(218, 112, 214)),
    ("palegoldenrod", Rgba::rgb(238, 232, 170)),
    ("palegreen", Rgba::rgb(152, 251, 152)),
    ("paleturquoise", Rgba::rgb(175, 238, 238)),
    ("palevioletred", Rgba::rgb(219, 112, 147)),
    ("papayawhip", Rgba::rgb(255, 239, 213)),
    ("peachpuff", Rgba::rgb(255, 218, 185)),
    ("peru", Rgba::rgb(205, 133, 63)),
    ("pink", Rgba::rgb(255, 192, 203)),
    ("plum", Rgba::rgb(221, 160, 221)),
    ("powderblue", Rgba::rgb(176, 224, 230)),
    ("purple", Rgba::rgb(128, 0, 128)),
    ("rebeccapurple", Rgba::rgb(102, 51, 153)),
    ("red", Rgba::rgb(255, 0, 0)),
    ("rosybrown", Rgba::rgb(188, 143, 143)),
    ("royalblue", Rgba::rgb(65, 105, 225)),
    ("saddlebrown", Rgba::rgb(139, 69, 19)),
    ("salmon", Rgba::rgb(250, 128, 114)),
    ("sandybrown", Rgba::rgb(244, 164, 96)),
    ("seagreen", Rgba::rgb(46, 139, 87)),
    ("seashell", Rgba::rgb(255, 245, 238)),
    ("sienna", Rgba::rgb(160, 82, 45)),
    ("silver", Rgba::rgb(192, 192, 192)),
    ("skyblue", Rgba::rgb(135, 206, 235)),
    ("slateblue", Rgba::rgb(106, 90, 205)),
    ("slategray", Rgba::rgb(112, 128, 144)),
    ("slategrey", Rgba::rgb(112, 128, 144)),
    ("snow", Rgba::rgb(255, 250, 250)),
    ("springgreen", Rgba::rgb(0, 255, 127)),
    ("steelblue", Rgba::rgb(70, 130, 180)),
    ("tan", Rgba::rgb(210, 180, 140)),
    ("teal", Rgba::rgb(0, 128, 128)),
    ("thistle", Rgba::rgb(216, 191, 216)),
    ("tomato", Rgba::rgb(255, 99, 71)),
    ("turquoise", Rgba::rgb(64, 224, 208)),
    ("violet", Rgba::rgb(238, 130, 238)),
    ("wheat", Rgba::rgb(245, 222, 179)),
    ("white", Rgba::rgb(255, 255, 255)),
    ("whitesmoke", Rgba::rgb(245, 245, 245)),
    ("yellow", Rgba::rgb(255, 255, 0)),
    ("yellowgreen", Rgba::rgb(154, 205, 50)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_named_colors_case_insensitively() {
        assert_eq!(Rgba::parse_css("red").unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(Rgba::parse_css(" SkyBlue ").unwrap(), Rgba::rgb(135, 206, 235));
    }

    #[test]
    fn resolves_hex_forms() {
        assert_eq!(Rgba::parse_css("#f00").unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(Rgba::parse_css("#ff000080").unwrap(), Rgba::rgba(255, 0, 0, 128));
        assert_eq!(Rgba::parse_css("#1A2b3C").unwrap(), Rgba::rgb(0x1a, 0x2b, 0x3c));
        assert!(Rgba::parse_css("#12345").is_err());
        assert!(Rgba::parse_css("#ggg").is_err());
    }

    #[test]
    fn resolves_rgb_functions() {
        assert_eq!(Rgba::parse_css("rgb(255, 255, 255)").unwrap(), Rgba::WHITE);
        assert_eq!(Rgba::parse_css("rgba(10, 20, 30, 0.5)").unwrap(), Rgba::rgba(10, 20, 30, 128));
        assert_eq!(Rgba::parse_css("rgb(0 0 0 / 0%)").unwrap(), Rgba::rgba(0, 0, 0, 0));
        assert!(Rgba::parse_css("rgb(1, 2)").is_err());
    }

    #[test]
    fn hex_output_matches_color_input_format() {
        assert_eq!(Rgba::rgb(255, 8, 171).to_hex(), "#ff08ab");
    }

    #[test]
    fn white_in_any_spelling_is_unpainted() {
        assert!(is_unpainted("white"));
        assert!(is_unpainted("rgb(255, 255, 255)"));
        assert!(is_unpainted("#FFFFFF"));
        assert!(is_unpainted("not-a-color"));
        assert!(!is_unpainted("black"));
        assert!(!is_unpainted("rgba(255, 255, 255, 0.5)"));
        assert!(!is_unpainted("transparent"));
    }
}
