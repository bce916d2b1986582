mod defaults;
pub mod games;
pub mod logger;

pub use games::GameRng;
