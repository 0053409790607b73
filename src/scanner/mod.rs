mod engine;
mod wordlist;

pub use engine::{AttemptRunner, create_progress_bar};
pub use wordlist::WordlistSource;
