pub mod planet;
pub mod player;
