//! Random route ids.

use uuid::Uuid;

use crate::traits::LineIdSource;

/// UUID v4 id source. Ids are never derived from a counter, so an id freed
/// by a deletion is not handed out again.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomLineIds;

impl LineIdSource for RandomLineIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_uuids() {
        let id = RandomLineIds.next_id();
        assert!(Uuid::parse_str(&id).is_ok(), "not a uuid: {}", id);
    }

    #[test]
    fn test_ids_do_not_repeat() {
        let mut source = RandomLineIds;
        let ids: HashSet<String> = (0..500).map(|_| source.next_id()).collect();
        assert_eq!(ids.len(), 500);
    }
}
