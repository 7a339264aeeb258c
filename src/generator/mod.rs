//! Password, passphrase and PIN generators

pub mod charset;
pub mod password;
pub mod passphrase;
pub mod pin;
pub mod words;

pub use charset::{CharClass, SIMILAR_CHARACTERS};
pub use password::{generate_password, generate_password_with, GenerationConfig};
pub use passphrase::{build_passphrase, build_passphrase_with, generate_words, generate_words_with, PassphraseConfig};
pub use pin::{generate_pin, generate_pin_with, PinConfig};
pub use words::{PrefixForm, WordForm, WordList};
