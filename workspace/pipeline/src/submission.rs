//! Per-submission lifecycle.
//!
//! `Idle → Validating → Submitting → Rendering → Idle`, with failures
//! dropping straight back to `Idle`. The in-flight predicate covers
//! `Submitting` and `Rendering`; the reset to `Idle` is unconditional so
//! no exit path can leave the dashboard stuck.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Rendering,
}

impl SubmissionPhase {
    /// True while a forecast request is outstanding. At most one
    /// submission may hold this at a time.
    pub fn in_flight(self) -> bool {
        matches!(self, Self::Submitting | Self::Rendering)
    }

    /// Starts a new submission. `None` while another one is outstanding;
    /// the caller surfaces that as a warning without touching the network.
    pub fn begin(self) -> Option<Self> {
        if self.in_flight() { None } else { Some(Self::Validating) }
    }

    /// Input validation passed; the request goes on the wire.
    pub fn submit(self) -> Self {
        Self::Submitting
    }

    /// Response received; the chart is being rebuilt.
    pub fn render(self) -> Self {
        Self::Rendering
    }

    /// Unconditional release, valid from every phase.
    pub fn finish(self) -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_walks_every_phase() {
        let phase = SubmissionPhase::default();
        assert_eq!(phase, SubmissionPhase::Idle);

        let phase = phase.begin().unwrap();
        assert_eq!(phase, SubmissionPhase::Validating);
        assert!(!phase.in_flight());

        let phase = phase.submit();
        assert!(phase.in_flight());

        let phase = phase.render();
        assert!(phase.in_flight());

        assert_eq!(phase.finish(), SubmissionPhase::Idle);
    }

    #[test]
    fn begin_is_rejected_while_in_flight() {
        assert_eq!(SubmissionPhase::Submitting.begin(), None);
        assert_eq!(SubmissionPhase::Rendering.begin(), None);
        // Validation failures never set the guard, so a retry is allowed.
        assert!(SubmissionPhase::Validating.begin().is_some());
    }

    #[test]
    fn finish_releases_from_any_phase() {
        for phase in [
            SubmissionPhase::Idle,
            SubmissionPhase::Validating,
            SubmissionPhase::Submitting,
            SubmissionPhase::Rendering,
        ] {
            assert_eq!(phase.finish(), SubmissionPhase::Idle);
            assert!(!phase.finish().in_flight());
        }
    }
}
