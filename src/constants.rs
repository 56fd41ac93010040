pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Gravity interval (in milliseconds)
pub const TICK_INTERVAL_MS: u64 = 1000;

// Flat bonus per cleared row
pub const POINTS_PER_LINE: u32 = 100;

// Event poll timeout while no tick is scheduled (paused / game over)
pub const IDLE_POLL_MS: u64 = 250;
