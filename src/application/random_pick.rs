//! Uniform random selection

use rand::Rng;

/// Pick one element uniformly by index, or None for an empty slice.
///
/// Stateless: nothing is remembered between calls, so the same element can
/// come back on consecutive picks.
pub fn pick_random<'a, T, G>(items: &'a [T], rng: &mut G) -> Option<&'a T>
where
    G: Rng + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(rng.gen_range(0..items.len()))
}
