/// Default event delay in milliseconds.
pub const DEFAULT_DELAY: u64 = 10;
/// Default limit on nested calls.
pub const DEFAULT_MAX_DEPTH: usize = 6048;

/// ## Run settings
///
/// `mouse_delay` and `key_delay` start out equal to `delay`; scripts
/// change them with `SetMouseDelay` and `SetKeyPressDelay`.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub delay: u64,
    pub mouse_delay: u64,
    pub key_delay: u64,
    pub scale: f32,
    pub max_depth: usize,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings::new(DEFAULT_DELAY, 1.0)
    }
}

impl Settings {
    pub fn new(delay: u64, scale: f32) -> Settings {
        Settings {
            delay,
            mouse_delay: delay,
            key_delay: delay,
            scale,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Settings {
        Settings { max_depth, ..self }
    }

    /// Truncates toward zero.
    pub fn scale(&self, coordinate: i32) -> i32 {
        (coordinate as f32 * self.scale) as i32
    }
}
