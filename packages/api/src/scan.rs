//! # Simulated scan workflow
//!
//! The dashboard's scan dialog is a small state machine:
//!
//! ```text
//! Idle ──open──▶ ModalOpen ──begin──▶ Scanning ──complete──▶ Complete ──view_results──▶ Idle
//!   ▲               │                    │                      │
//!   └───────────────┴──────dismiss───────┴──────────────────────┘
//! ```
//!
//! No camera is touched and nothing is analysed. `begin` hands out a
//! [`ScanTicket`]; the caller schedules `complete(ticket)` after the fake scan
//! duration. Because scheduled callbacks cannot be cancelled, a ticket goes
//! stale when the dialog is dismissed or a newer scan begins, and completing
//! with a stale ticket does nothing.
//!
//! Viewing results updates [`ScanStats`] with a health score drawn from a
//! [`ScoreSource`].

use std::ops::RangeInclusive;

use rand::rngs::ThreadRng;
use rand::Rng;

/// Text shown in the "last scan" card once a scan has completed.
pub const LAST_SCAN_TODAY: &str = "Today";

/// How the user chose to provide the picture. Both lead to the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMethod {
    Camera,
    Upload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    ModalOpen,
    Scanning(CaptureMethod),
    Complete,
}

/// Proof that a particular scan was started. See the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanSession {
    phase: ScanPhase,
    epoch: u64,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ScanPhase::Idle
    }

    /// Idle → ModalOpen. Returns false if a dialog is already open.
    pub fn open(&mut self) -> bool {
        if self.phase != ScanPhase::Idle {
            return false;
        }
        self.phase = ScanPhase::ModalOpen;
        true
    }

    /// Close the dialog from any state. Invalidates outstanding tickets.
    pub fn dismiss(&mut self) {
        if self.phase != ScanPhase::Idle {
            tracing::debug!("Scan dialog dismissed from {:?}", self.phase);
        }
        self.phase = ScanPhase::Idle;
        self.epoch += 1;
    }

    /// ModalOpen → Scanning.
    pub fn begin(&mut self, method: CaptureMethod) -> Option<ScanTicket> {
        if self.phase != ScanPhase::ModalOpen {
            return None;
        }
        self.epoch += 1;
        self.phase = ScanPhase::Scanning(method);
        tracing::debug!("Scan started via {:?}", method);
        Some(ScanTicket(self.epoch))
    }

    /// Scanning → Complete, if `ticket` belongs to the scan in progress.
    pub fn complete(&mut self, ticket: ScanTicket) -> bool {
        let current = matches!(self.phase, ScanPhase::Scanning(_)) && ticket.0 == self.epoch;
        if current {
            self.phase = ScanPhase::Complete;
        }
        current
    }

    /// Complete → Idle, recording the result into `stats`.
    ///
    /// Returns the new health score, or `None` if no result was ready.
    pub fn view_results<R: ScoreSource + ?Sized>(
        &mut self,
        stats: &mut ScanStats,
        scores: &mut R,
        range: RangeInclusive<u8>,
    ) -> Option<u8> {
        if self.phase != ScanPhase::Complete {
            return None;
        }
        self.phase = ScanPhase::Idle;
        self.epoch += 1;
        Some(stats.record(scores, range))
    }
}

/// The three counters on the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanStats {
    pub total_scans: u32,
    pub health_score: Option<u8>,
    pub last_scan: Option<&'static str>,
}

impl ScanStats {
    /// Count one more scan and roll a new health score within `range`.
    pub fn record<R: ScoreSource + ?Sized>(
        &mut self,
        scores: &mut R,
        range: RangeInclusive<u8>,
    ) -> u8 {
        let score = scores.next_score(range);
        self.total_scans = self.total_scans.saturating_add(1);
        self.health_score = Some(score);
        self.last_scan = Some(LAST_SCAN_TODAY);
        score
    }

    pub fn health_score_label(&self) -> String {
        self.health_score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "--".to_string())
    }

    pub fn last_scan_label(&self) -> &'static str {
        self.last_scan.unwrap_or("Never")
    }
}

/// Source of health scores.
pub trait ScoreSource {
    /// A score within `range`, both ends included.
    fn next_score(&mut self, range: RangeInclusive<u8>) -> u8;
}

/// Uniform scores from any random number generator.
#[derive(Debug, Clone)]
pub struct RngScore<R>(pub R);

impl RngScore<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> ScoreSource for RngScore<R> {
    fn next_score(&mut self, range: RangeInclusive<u8>) -> u8 {
        if range.is_empty() {
            return *range.start();
        }
        self.0.gen_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Replays fixed scores, clamped into the requested range.
    struct Fixed(Vec<u8>);

    impl ScoreSource for Fixed {
        fn next_score(&mut self, range: RangeInclusive<u8>) -> u8 {
            let s = self.0.remove(0);
            s.clamp(*range.start(), *range.end())
        }
    }

    fn run_to_complete(scan: &mut ScanSession) {
        assert!(scan.open());
        let ticket = scan.begin(CaptureMethod::Camera).unwrap();
        assert!(scan.complete(ticket));
    }

    #[test]
    fn test_happy_path() {
        let mut scan = ScanSession::new();
        let mut stats = ScanStats::default();
        assert_eq!(scan.phase(), ScanPhase::Idle);
        assert!(!scan.is_open());

        assert!(scan.open());
        assert_eq!(scan.phase(), ScanPhase::ModalOpen);

        let ticket = scan.begin(CaptureMethod::Upload).unwrap();
        assert_eq!(scan.phase(), ScanPhase::Scanning(CaptureMethod::Upload));

        assert!(scan.complete(ticket));
        assert_eq!(scan.phase(), ScanPhase::Complete);

        let score = scan
            .view_results(&mut stats, &mut Fixed(vec![88]), 70..=100)
            .unwrap();
        assert_eq!(score, 88);
        assert_eq!(scan.phase(), ScanPhase::Idle);
        assert_eq!(stats.total_scans, 1);
        assert_eq!(stats.health_score, Some(88));
        assert_eq!(stats.last_scan_label(), "Today");
    }

    #[test]
    fn test_out_of_order_transitions_are_ignored() {
        let mut scan = ScanSession::new();
        assert!(scan.begin(CaptureMethod::Camera).is_none());

        scan.open();
        assert!(!scan.open());
        let mut stats = ScanStats::default();
        assert!(scan
            .view_results(&mut stats, &mut Fixed(vec![90]), 70..=100)
            .is_none());
        assert_eq!(stats, ScanStats::default());
    }

    #[test]
    fn test_completion_after_dismiss_is_a_no_op() {
        let mut scan = ScanSession::new();
        scan.open();
        let ticket = scan.begin(CaptureMethod::Camera).unwrap();

        scan.dismiss();
        assert!(!scan.complete(ticket));
        assert_eq!(scan.phase(), ScanPhase::Idle);

        // Even if a new scan is in progress, the old ticket stays stale
        scan.open();
        let fresh = scan.begin(CaptureMethod::Upload).unwrap();
        assert!(!scan.complete(ticket));
        assert_eq!(scan.phase(), ScanPhase::Scanning(CaptureMethod::Upload));
        assert!(scan.complete(fresh));
    }

    #[test]
    fn test_dismiss_from_every_state() {
        let mut scan = ScanSession::new();
        scan.dismiss();
        assert_eq!(scan.phase(), ScanPhase::Idle);

        scan.open();
        scan.dismiss();
        assert_eq!(scan.phase(), ScanPhase::Idle);

        run_to_complete(&mut scan);
        scan.dismiss();
        assert_eq!(scan.phase(), ScanPhase::Idle);
    }

    #[test]
    fn test_counter_increments_by_exactly_one() {
        let mut scan = ScanSession::new();
        let mut stats = ScanStats {
            total_scans: 41,
            ..ScanStats::default()
        };
        run_to_complete(&mut scan);
        scan.view_results(&mut stats, &mut Fixed(vec![70]), 70..=100);
        assert_eq!(stats.total_scans, 42);
    }

    #[test]
    fn test_labels_before_first_scan() {
        let stats = ScanStats::default();
        assert_eq!(stats.health_score_label(), "--");
        assert_eq!(stats.last_scan_label(), "Never");
    }

    #[test]
    fn test_rng_scores_stay_in_range_and_hit_both_bounds() {
        let mut scores = RngScore(StdRng::seed_from_u64(7));
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..10_000 {
            let s = scores.next_score(70..=100);
            assert!((70..=100).contains(&s));
            seen_min |= s == 70;
            seen_max |= s == 100;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_single_value_range() {
        let mut scores = RngScore(StdRng::seed_from_u64(1));
        assert_eq!(scores.next_score(85..=85), 85);
    }
}
