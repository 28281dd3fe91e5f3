//! Anchors for the individual lines of a listing

use std::collections::{BTreeMap, HashSet};

use sha2::{Digest, Sha256};

/// Code IDs handed out so far. Two listings with the same content, or whose
/// digests happen to share a prefix, must still end up with distinct
/// anchors, so IDs are remembered and never given out twice.
#[derive(Debug, Default, Clone)]
pub struct AnchorRegistry {
    used: HashSet<String>,
}

impl AnchorRegistry {
    pub fn new() -> AnchorRegistry {
        AnchorRegistry::default()
    }

    /// Reserve an ID for the given code: the first six hex digits of its
    /// digest, suffixed with `_1`, `_2`, ... if that is already taken.
    pub fn claim(&mut self, code: &str) -> String {
        let digest = format!("{:x}", Sha256::digest(code.as_bytes()));
        let base = &digest[..6];

        let mut candidate = base.to_string();
        let mut i = 0;
        while self
            .used
            .contains(&candidate)
        {
            i += 1;
            candidate = format!("{}_{}", base, i);
        }

        self.used
            .insert(candidate.clone());
        candidate
    }

    pub fn contains(&self, id: &str) -> bool {
        self.used
            .contains(id)
    }

    pub fn len(&self) -> usize {
        self.used
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.used
            .is_empty()
    }
}

/// Map each line number of a listing, counting from `start`, to its anchor.
pub fn assign(registry: &mut AnchorRegistry, code: &str, start: usize) -> BTreeMap<usize, String> {
    let id = registry.claim(code);
    let count = code
        .split('\n')
        .count();

    (start..start + count)
        .map(|number| (number, format!("codeLine_{}_{}", number, id)))
        .collect()
}
