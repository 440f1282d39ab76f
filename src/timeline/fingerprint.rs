use xxhash_rust::xxh3::Xxh3;

use crate::{
    foundation::error::{ReelError, ReelResult},
    timeline::model::Timeline,
};

const XXH3_SEED: u64 = 0x5eed_c01a_4b2d_7e11;

/// Stable 128-bit fingerprint of a realized timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimelineFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for TimelineFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Hash the canonical JSON encoding of `timeline`.
///
/// Element and scene order are part of the timeline, so equal fingerprints mean the same
/// script realized to the same keyframes.
pub fn fingerprint_timeline(timeline: &Timeline) -> ReelResult<TimelineFingerprint> {
    let bytes = serde_json::to_vec(timeline)
        .map_err(|e| ReelError::serde(format!("serialize timeline for fingerprint: {e}")))?;
    let mut h = Xxh3::with_seed(XXH3_SEED);
    h.update(&bytes);
    let v = h.digest128();
    Ok(TimelineFingerprint {
        hi: (v >> 64) as u64,
        lo: v as u64,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/fingerprint.rs"]
mod tests;
