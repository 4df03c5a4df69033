pub mod assist;
pub mod collision;
pub mod gravity;
pub mod navigation;
pub mod scene;
pub mod state;
pub mod time;
