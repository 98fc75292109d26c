//! Customer project lifecycle: statuses, categories and progress rules.
//!
//! Status moves forward through a fixed pipeline
//! (`planning -> design -> permits -> construction -> finishing -> completed`)
//! and progress never decreases. Both rules are enforced by [`plan_advance`],
//! which every storage backend calls before persisting a change.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Declares a string-backed enum with `as_str`, `Display`, `FromStr` and
/// `TryFrom<String>` (the latter is what row decoding uses).
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(CoreError::Validation(format!(
                        "Invalid {} '{}'. Must be one of: {:?}",
                        $label,
                        other,
                        [$($text),+]
                    ))),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

text_enum! {
    /// Construction pipeline stage. Declaration order is pipeline order.
    #[derive(PartialOrd, Ord)]
    ProjectStatus, "project status" {
        Planning => "planning",
        Design => "design",
        Permits => "permits",
        Construction => "construction",
        Finishing => "finishing",
        Completed => "completed",
    }
}

text_enum! {
    ProjectType, "project type" {
        NewConstruction => "new-construction",
        Renovation => "renovation",
        WaterFeatures => "water-features",
        Landscaping => "landscaping",
        Maintenance => "maintenance",
    }
}

text_enum! {
    /// Kind of entry in a project's append-only update log.
    UpdateType, "update type" {
        Milestone => "milestone",
        Progress => "progress",
        Delay => "delay",
        Completion => "completion",
    }
}

text_enum! {
    DocumentType, "document type" {
        Contract => "contract",
        Permit => "permit",
        Design => "design",
        Invoice => "invoice",
        Warranty => "warranty",
    }
}

text_enum! {
    /// Which side of the conversation wrote a project message.
    SenderType, "sender type" {
        Customer => "customer",
        Team => "team",
    }
}

/// Maximum length of a project message after trimming (characters).
pub const MAX_MESSAGE_LENGTH: usize = 5_000;

/// Validate that a progress percentage lies within `0..=100`.
pub fn validate_progress(progress: i32) -> Result<(), CoreError> {
    if (0..=100).contains(&progress) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Progress percentage must be between 0 and 100 (got {progress})"
        )))
    }
}

/// Resolve and validate a requested status/progress change.
///
/// Omitted fields keep their current value, except that moving to
/// `completed` without an explicit progress sets it to 100. Returns the
/// `(status, progress)` pair to persist.
pub fn plan_advance(
    current_status: ProjectStatus,
    current_progress: i32,
    next_status: Option<ProjectStatus>,
    next_progress: Option<i32>,
) -> Result<(ProjectStatus, i32), CoreError> {
    let status = next_status.unwrap_or(current_status);
    if status < current_status {
        return Err(CoreError::Validation(format!(
            "Cannot move project back from '{current_status}' to '{status}'"
        )));
    }

    let progress = match (next_progress, status) {
        (Some(p), _) => p,
        (None, ProjectStatus::Completed) => 100,
        (None, _) => current_progress,
    };
    validate_progress(progress)?;

    if progress < current_progress {
        return Err(CoreError::Validation(format!(
            "Progress cannot decrease from {current_progress}% to {progress}%"
        )));
    }
    if status == ProjectStatus::Completed && progress != 100 {
        return Err(CoreError::Validation(
            "A completed project must be at 100% progress".to_string(),
        ));
    }

    Ok((status, progress))
}

/// Trim a message body and check it is non-empty and within length limits.
pub fn validate_message_text(text: &str) -> Result<String, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Message content is required".to_string(),
        ));
    }
    let len = trimmed.chars().count();
    if len > MAX_MESSAGE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Message exceeds maximum length of {MAX_MESSAGE_LENGTH} characters (got {len})"
        )));
    }
    Ok(trimmed.to_string())
}
