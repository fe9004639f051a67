use crate::shared::CollectError;

/// NewType wrapper for the version-stripped artifact coordinate (`group:artifact`).
///
/// This is the stable identifier libraries are deduplicated under, so it must
/// never be guessed from partial data: both segments have to be present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate(String);

impl Coordinate {
    /// Derives the unique identifier from a group + artifact pair.
    ///
    /// # Errors
    /// Returns `CollectError::MalformedCoordinate` if either segment is blank
    /// after trimming. A blank coordinate must never be silently merged under
    /// a guessed identifier.
    pub fn new(group: &str, artifact: &str) -> Result<Self, CollectError> {
        let group = group.trim();
        let artifact = artifact.trim();

        if group.is_empty() || artifact.is_empty() {
            return Err(CollectError::MalformedCoordinate {
                group: group.to_string(),
                artifact: artifact.to_string(),
            });
        }

        Ok(Self(format!("{}:{}", group, artifact)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
