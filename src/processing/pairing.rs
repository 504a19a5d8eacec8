/*! Old/modern pairing.

Sentences sharing an identifier are grouped, then every old sentence of a group
is paired with every modern sentence of the same group.

For example, a group holding `a` (old), `b` (old), `x` (modern) and `y` (modern) gives

```text
(a, x)
(a, y)
(b, x)
(b, y)
```

Groups are emitted by ascending identifier.
!*/
use itertools::Itertools;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{progress::Progress, sentence::Sentence};

/// An old sentence along with one of its modern counterparts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub old: String,
    pub modern: String,
}

impl Pairing {
    pub fn new(old: impl Into<String>, modern: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            modern: modern.into(),
        }
    }
}

/// Pair every old sentence with every modern sentence sharing its identifier.
///
/// Sorting is stable, so sentences with the same identifier keep their corpus order.
/// Groups that lack either old or modern sentences yield nothing.
pub fn pair_sentences(mut sentences: Vec<Sentence>, progress: &mut dyn Progress) -> Vec<Pairing> {
    sentences.sort_by_key(Sentence::id);

    let nb_groups = sentences.iter().map(Sentence::id).dedup().count();
    progress.start(nb_groups as u64);

    let mut pairings = Vec::new();
    for (id, group) in &sentences.into_iter().group_by(Sentence::id) {
        let (old, modern): (Vec<Sentence>, Vec<Sentence>) =
            group.partition(|sentence| !sentence.is_modern());

        if old.is_empty() || modern.is_empty() {
            debug!(
                "[{}] no pairing ({} old, {} modern)",
                id,
                old.len(),
                modern.len()
            );
        }

        pairings.extend(
            old.iter()
                .cartesian_product(modern.iter())
                .map(|(o, m)| Pairing::new(o.contents(), m.contents())),
        );
        progress.tick();
    }
    progress.finish();

    info!("{} pairings from {} groups", pairings.len(), nb_groups);
    pairings
}
