mod status;

pub use status::StatusClassifier;
