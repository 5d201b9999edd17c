//=========================================================================
// Menu Sample Game
//=========================================================================
//
// The sample game shipped with the engine: a main-menu scene composed
// declaratively from the menu widget set.
//
// - `widgets`: gradient background, static text, pointer-driven buttons
// - `main_menu`: the "main" scene wiring the widgets together
//
//=========================================================================

//=== Module Declarations =================================================

pub mod widgets;

mod main_menu;

//=== Public API ==========================================================

pub use main_menu::MainMenuScene;
pub use widgets::{ButtonAction, GradientBackground, MenuButton, MenuText};
