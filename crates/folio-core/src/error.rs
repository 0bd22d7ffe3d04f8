use thiserror::Error;

/// Integrity problems in the chapter table.
///
/// These are programmer errors in the static configuration and are reported
/// once at startup, before anything is rendered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("chapter table is empty")]
    EmptyTable,
    #[error("chapter `{id}` has invalid duration {duration}")]
    InvalidDuration { id: &'static str, duration: f32 },
    #[error("chapter id `{0}` appears more than once")]
    DuplicateChapter(&'static str),
    #[error("chapter `{0}` mixes phase and section: section chapters need a section id and only they may carry one")]
    PhaseMismatch(&'static str),
    #[error("chapter `{chapter}` targets section `{section}` which has no section node")]
    MissingSectionNode {
        chapter: &'static str,
        section: &'static str,
    },
}
