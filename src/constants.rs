pub const MIN_LEVELS: u32 = 2;
pub const MIN_ROOMS_PER_LEVEL: u32 = 4;

// About a hundred rooms.
pub const DEFAULT_LEVELS: u32 = 15;
pub const DEFAULT_ROOMS_PER_LEVEL: u32 = 7;

/// Repairs allowed in one generation run before giving up.
pub const MAX_REFACTOR_ATTEMPTS: u32 = 100;
