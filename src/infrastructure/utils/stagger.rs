use serde::Serialize;

/// An item paired with its presentation delay.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Staged<T> {
    pub delay_ms: u64,
    #[serde(flatten)]
    pub item: T,
}

/// Delay for the item at `index`: linear in the index.
pub fn reveal_delay(index: usize, step_ms: u64) -> u64 {
    (index as u64).saturating_mul(step_ms)
}

/// Wraps each item with an increasing delay so sequential cards appear one
/// after another.
pub fn stagger<T>(items: Vec<T>, step_ms: u64) -> Vec<Staged<T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Staged {
            delay_ms: reveal_delay(index, step_ms),
            item,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_is_index_times_step() {
        let staged = stagger(vec!["a", "b", "c", "d"], 150);
        let delays: Vec<u64> = staged.iter().map(|s| s.delay_ms).collect();
        assert_eq!(delays, vec![0, 150, 300, 450]);
        assert_eq!(staged[2].item, "c");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(stagger(Vec::<u8>::new(), 150).is_empty());
    }

    #[test]
    fn delay_saturates_instead_of_overflowing() {
        assert_eq!(reveal_delay(usize::MAX, u64::MAX), u64::MAX);
    }
}
