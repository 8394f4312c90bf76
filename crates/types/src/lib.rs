//! Shared constants and plain data types for the puzzle.
//!
//! Everything here is dependency-free so the engine, the input mapping and
//! the terminal surface can agree on dimensions, colors and intents.
//!
//! # Grid Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Block size**: 30 px, so a full surface is 300x600 px
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Poll/render period (~60 Hz) |
//! | `DROP_INTERVAL_MS` | 1000 | Time budget between forced descents |
//!
//! # Examples
//!
//! ```
//! use tour_blocks_types::{Intent, PieceColor, COLS, ROWS};
//!
//! assert_eq!(Intent::from_str("softDrop"), Some(Intent::SoftDrop));
//! assert_eq!(PieceColor::Cyan.as_str(), "cyan");
//! assert_eq!((COLS, ROWS), (10, 20));
//! ```

/// Grid width in cells
pub const COLS: u8 = 10;

/// Grid height in cells
pub const ROWS: u8 = 20;

/// Edge length of one cell on a pixel surface
pub const BLOCK_SIZE: u32 = 30;

/// Poll/render period in milliseconds (16ms ≈ 60 Hz)
pub const TICK_MS: u32 = 16;

/// Time between forced descents
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Points awarded per cleared row
pub const LINE_CLEAR_SCORE: u32 = 100;

/// Number of shape templates (and colors)
pub const TEMPLATE_COUNT: usize = 7;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fixed color of each shape template, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl PieceColor {
    /// All colors in template order
    pub const ALL: [PieceColor; TEMPLATE_COUNT] = [
        PieceColor::Cyan,
        PieceColor::Blue,
        PieceColor::Orange,
        PieceColor::Yellow,
        PieceColor::Green,
        PieceColor::Purple,
        PieceColor::Red,
    ];

    /// CSS-style color name
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_blocks_types::PieceColor;
    ///
    /// assert_eq!(PieceColor::Orange.as_str(), "orange");
    /// assert_eq!(PieceColor::Red.as_str(), "red");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::Cyan => "cyan",
            PieceColor::Blue => "blue",
            PieceColor::Orange => "orange",
            PieceColor::Yellow => "yellow",
            PieceColor::Green => "green",
            PieceColor::Purple => "purple",
            PieceColor::Red => "red",
        }
    }

    /// Parse from a color name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }

    /// Display value of the color
    pub fn rgb(&self) -> Rgb {
        match self {
            PieceColor::Cyan => Rgb::new(0, 255, 255),
            PieceColor::Blue => Rgb::new(0, 0, 255),
            PieceColor::Orange => Rgb::new(255, 165, 0),
            PieceColor::Yellow => Rgb::new(255, 255, 0),
            PieceColor::Green => Rgb::new(0, 128, 0),
            PieceColor::Purple => Rgb::new(128, 0, 128),
            PieceColor::Red => Rgb::new(255, 0, 0),
        }
    }
}

/// Player intents the Input Router forwards to a running engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Move the active piece one row down, settling it if blocked
    SoftDrop,
    /// Rotate the active piece 90° clockwise
    Rotate,
}

impl Intent {
    /// Parse intent from a camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_blocks_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("ROTATE"), Some(Intent::Rotate));
    /// assert_eq!(Intent::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "rotate" => Some(Intent::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::Rotate => "rotate",
        }
    }
}

/// A grid cell: `None` is empty, `Some(color)` holds a settled block.
pub type Cell = Option<PieceColor>;
