//! Individual screen implementations.

mod customization;
mod game;
mod info;
mod settings;

pub use customization::{CustomizationScreen, Focus};
pub use game::{GameScreen, OPPONENT_NAME};
pub use info::{InfoPage, InfoScreen};
pub use settings::SettingsScreen;
