//! Next-track resolution
//!
//! Pure mapping from (current item, ordered queue) to the next item,
//! with three-tier precedence: relevancy, genre forward-search,
//! sequential fallback.

use cadence_core::PlayableItem;

/// Resolve the item to play after `current`
///
/// Deterministic and pure; first matching tier wins:
///
/// 1. **Relevancy** — if `current` is a track with relevancy references,
///    the first queue member (in queue order, excluding `current`
///    itself) whose id is among those references.
/// 2. **Genre forward-search** — if `current` carries any genre label,
///    the first *track* strictly after `current`'s position sharing at
///    least one label. Ads are never genre-matched.
/// 3. **Sequential fallback** — the element immediately following
///    `current`, or `None` when `current` is last.
///
/// Ads resolve by tier 3 only. When `current` is not in the queue at
/// all, resolution yields `None`.
pub fn resolve_next<'a>(
    current: &PlayableItem,
    queue: &'a [PlayableItem],
) -> Option<&'a PlayableItem> {
    let idx = queue.iter().position(|item| item.id() == current.id())?;

    if let PlayableItem::Track(track) = current {
        // Tier 1: relevancy, scanned over the whole queue in order
        if !track.relevancy_refs.is_empty() {
            let hit = queue
                .iter()
                .find(|item| item.id() != current.id() && track.is_relevant_to(item.id()));
            if hit.is_some() {
                return hit;
            }
        }

        // Tier 2: genre match, strictly after the current position
        if track.has_genres() {
            let hit = queue[idx + 1..]
                .iter()
                .find(|item| item.as_track().is_some_and(|t| track.shares_genre(t)));
            if hit.is_some() {
                return hit;
            }
        }
    }

    // Tier 3: sequential
    queue.get(idx + 1)
}
