//! Slate palette shared by the book scene and the content blocks.

use embedded_graphics::pixelcolor::Rgb888;

pub const BACKDROP: Rgb888 = Rgb888::new(15, 23, 42);
pub const BACKDROP_GLOW: Rgb888 = Rgb888::new(30, 41, 59);

pub const PAPER: Rgb888 = Rgb888::new(248, 250, 252);
pub const PAPER_SHADE: Rgb888 = Rgb888::new(226, 232, 240);
pub const RULE_LINE: Rgb888 = Rgb888::new(203, 213, 225);

pub const INK: Rgb888 = Rgb888::new(15, 23, 42);
pub const INK_SOFT: Rgb888 = Rgb888::new(51, 65, 85);
pub const MUTED: Rgb888 = Rgb888::new(100, 116, 139);

pub const ACCENT: Rgb888 = Rgb888::new(51, 65, 85);
pub const ACCENT_FILL: Rgb888 = Rgb888::new(236, 239, 244);

pub const COVER_BG: Rgb888 = Rgb888::new(30, 41, 59);
pub const COVER_TEXT: Rgb888 = Rgb888::new(226, 232, 240);
pub const COVER_MUTED: Rgb888 = Rgb888::new(148, 163, 184);
pub const COVER_RING: Rgb888 = Rgb888::new(148, 163, 184);

pub const SPINE: Rgb888 = Rgb888::new(51, 65, 85);
pub const SPINE_EDGE: Rgb888 = Rgb888::new(71, 85, 105);
pub const PAGE_EDGE: Rgb888 = Rgb888::new(100, 116, 139);
