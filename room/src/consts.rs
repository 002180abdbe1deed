pub const ROUND_SECS: u32 = 60;
pub const REVEAL_SECS: u32 = 10;
pub const AWARD: u32 = 10;

pub const TICK: tokio::time::Duration = tokio::time::Duration::from_secs(1);

pub const CANVAS_WIDTH: usize = 500;
pub const CANVAS_HEIGHT: usize = 400;
pub const LINE_WIDTH: usize = 3;

pub const ASCII_COLS: usize = 50;
pub const ASCII_ROWS: usize = 20;

pub const HINT_PLACEHOLDER: char = '_';
pub const HINT_DELIMITER: &str = " ";

pub const CHANNEL_SIZE: usize = 32;
