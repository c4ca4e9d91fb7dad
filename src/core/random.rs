use rand::Rng;

use super::error::DocumentKind;
use super::normalize::is_repeated;

/// Re-rolls allowed before the payload is perturbed by hand.
const MAX_REROLLS: u32 = 32;

/// Produce the normalized digits of a random, valid document of `kind`.
///
/// Payload digits are drawn uniformly from 0-9. A draw whose assembled
/// digits are all identical is rejected and drawn again; after
/// [`MAX_REROLLS`] rejections the last payload digit is bumped instead,
/// which always breaks the repetition.
pub(crate) fn random_digits<R: Rng + ?Sized>(
    rng: &mut R,
    kind: DocumentKind,
    check_digits: fn(&[u8]) -> [u8; 2],
) -> String {
    let mut payload = vec![0u8; kind.digit_count() - 2];

    for attempt in 1..=MAX_REROLLS {
        for d in payload.iter_mut() {
            *d = rng.random_range(0..10);
        }
        let digits = assemble(&payload, check_digits);
        if !is_repeated(&digits) {
            return digits;
        }
        tracing::debug!(%kind, attempt, "generated digits are all identical, re-rolling");
    }

    tracing::warn!(%kind, "re-roll limit reached, perturbing payload");
    if let Some(last) = payload.last_mut() {
        *last = (*last + 1) % 10;
    }
    assemble(&payload, check_digits)
}

fn assemble(payload: &[u8], check_digits: fn(&[u8]) -> [u8; 2]) -> String {
    let [first, second] = check_digits(payload);
    payload
        .iter()
        .chain([first, second].iter())
        .map(|&d| char::from(b'0' + d))
        .collect()
}
