pub mod hud;
pub mod widgets;
