//! Store behavior options

use serde::{Deserialize, Serialize};

/// How a newly created book gets its id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `collection length + 1`. May collide with an existing id once books
    /// have been deleted out of order.
    #[default]
    Length,
    /// Counter seeded from the largest loaded id; never reissues an id
    /// within a process lifetime.
    Monotonic,
}

/// What happens when the backing file cannot be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistFailurePolicy {
    /// Roll back the mutation and report the failure to the caller
    #[default]
    Respond,
    /// Log the failure and terminate the process
    Exit,
}

/// Options for opening a `BookStore`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreOptions {
    #[serde(default)]
    pub id_strategy: IdStrategy,
    #[serde(default)]
    pub on_persist_failure: PersistFailurePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = StoreOptions::default();
        assert_eq!(options.id_strategy, IdStrategy::Length);
        assert_eq!(options.on_persist_failure, PersistFailurePolicy::Respond);
    }

    #[test]
    fn test_lowercase_names() {
        let options: StoreOptions =
            serde_json::from_str(r#"{"id_strategy":"monotonic","on_persist_failure":"exit"}"#)
                .unwrap();
        assert_eq!(options.id_strategy, IdStrategy::Monotonic);
        assert_eq!(options.on_persist_failure, PersistFailurePolicy::Exit);
    }
}
