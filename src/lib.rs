//! Password generation core.
//!
//! Builds a character alphabet from selected classes, draws passwords from
//! it with the operating system's CSPRNG, offers memorable word phrases and
//! a small catalog of presets, and scores results with two heuristic
//! strength strategies.
//!
//! ```rust,no_run
//! use passforge::pass::{self, charset::{Alphabet, ClassSelection}};
//! use passforge::strength::{self, Strategy};
//!
//! let alphabet = Alphabet::build(&ClassSelection::default());
//! let password = pass::generate(&alphabet, 20).expect("non-empty alphabet");
//! let assessment = strength::assess_password(Strategy::PerCharacterAnalysis, password.as_str());
//! println!("{} ({})", password, assessment.label);
//! ```

pub mod error;
pub mod logging;
pub mod pass;
pub mod session;
pub mod settings;
pub mod strength;
pub mod templates;

pub use error::{ClipboardError, GenerateError, SettingsError, Shortfall, TemplateError};
pub use session::{Clipboard, Notice, NoticeLevel, Session};
pub use settings::Settings;
