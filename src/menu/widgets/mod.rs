//=========================================================================
// Menu Widgets
//=========================================================================
//
// Visual and interactive elements composed into menu scenes. Every
// widget implements `GameObject` so scenes can hold them uniformly.
//
//=========================================================================

//=== Module Declarations =================================================

mod gradient_background;
mod menu_button;
mod menu_text;

//=== Public API ==========================================================

pub use gradient_background::GradientBackground;
pub use menu_button::{ButtonAction, MenuButton};
pub use menu_text::MenuText;
