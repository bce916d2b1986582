mod game_rng;

pub mod connect_four;

pub use game_rng::GameRng;
