//! Binary session outcome.
use serde::{Deserialize, Serialize};

use crate::snapshot::SessionSnapshot;

/// Coarse pass/fail outcome of a session. There is no partial or graded
/// result; the engine's correctness predicate maps straight onto this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Ok,
    Ko,
}

impl Verdict {
    #[must_use]
    pub const fn from_correct(correct: bool) -> Self {
        if correct { Self::Ok } else { Self::Ko }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Ko => "KO",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map the snapshot's correctness predicate onto a verdict.
#[must_use]
pub fn verdict<S: SessionSnapshot>(session: &S) -> Verdict {
    Verdict::from_correct(session.is_correct())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::MemorySession;

    #[test]
    fn verdict_tracks_correctness_predicate() {
        let mut session = MemorySession::default();
        assert_eq!(verdict(&session), Verdict::Ko);
        session.correct = true;
        assert_eq!(verdict(&session), Verdict::Ok);
    }

    #[test]
    fn verdict_renders_ok_and_ko() {
        assert_eq!(Verdict::Ok.to_string(), "OK");
        assert_eq!(Verdict::Ko.as_str(), "KO");
    }
}
