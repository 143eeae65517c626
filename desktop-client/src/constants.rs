pub const RESULT_LOG_SIZE: usize = 20;
pub const LOG_PREFIX: &str = "client";
pub const WINDOW_SIZE: [f32; 2] = [720.0, 640.0];
