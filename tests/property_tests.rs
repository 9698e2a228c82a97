//! Property-based tests for the offset index and color parsing.
//!
//! Tests validate:
//! 1. Binary-search lookups agree with a linear-scan reference
//! 2. Ordering and insertion-order stability invariants hold under
//!    arbitrary insert sequences
//! 3. Color parsing never panics and accepts exactly the documented
//!    hex shapes

use codepane::inline::OffsetIndex;
use codepane::theme::parse_color;
use proptest::prelude::*;

// ===== Reference implementations =====

fn linear_first_offset_from(offsets: &[usize], start: usize) -> Option<usize> {
    offsets.iter().copied().filter(|&o| o >= start).min()
}

fn linear_range_count(offsets: &[usize], start: usize, end: usize) -> usize {
    offsets.iter().filter(|&&o| o >= start && o < end).count()
}

// ===== Property 1: lookups agree with linear scan =====

proptest! {
    #[test]
    fn first_offset_from_matches_linear_scan(
        offsets in prop::collection::vec(0usize..500, 0..64),
        start in 0usize..600,
    ) {
        let mut index = OffsetIndex::new();
        for &offset in &offsets {
            index.insert(offset, offset);
        }
        prop_assert_eq!(
            index.first_offset_from(start),
            linear_first_offset_from(&offsets, start)
        );
    }

    #[test]
    fn range_matches_linear_scan(
        offsets in prop::collection::vec(0usize..500, 0..64),
        start in 0usize..600,
        len in 0usize..600,
    ) {
        let mut index = OffsetIndex::new();
        for &offset in &offsets {
            index.insert(offset, offset);
        }
        let end = start.saturating_add(len);
        prop_assert_eq!(index.range(start, end).len(), linear_range_count(&offsets, start, end));
    }

    #[test]
    fn get_finds_exactly_the_inserted_offsets(
        offsets in prop::collection::vec(0usize..200, 0..32),
        probe in 0usize..250,
    ) {
        let mut index = OffsetIndex::new();
        for &offset in &offsets {
            index.insert(offset, offset);
        }
        prop_assert_eq!(index.get(probe).is_some(), offsets.contains(&probe));
    }
}

// ===== Property 2: ordering and stability =====

proptest! {
    #[test]
    fn entries_stay_sorted_under_arbitrary_inserts(
        offsets in prop::collection::vec(0usize..1000, 0..128),
    ) {
        let mut index = OffsetIndex::new();
        for &offset in &offsets {
            index.insert(offset, ());
        }
        let seen: Vec<usize> = index.iter().map(|e| e.offset).collect();
        prop_assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(index.len(), offsets.len());
    }

    #[test]
    fn duplicate_offsets_keep_insertion_order(
        offset in 0usize..100,
        count in 1usize..8,
    ) {
        let mut index = OffsetIndex::new();
        for tag in 0..count {
            index.insert(offset, tag);
        }
        // get resolves to the first-inserted payload.
        prop_assert_eq!(index.get(offset), Some(&0));
        let tags: Vec<usize> = index.range(offset, offset + 1).iter().map(|e| e.payload).collect();
        let expected: Vec<usize> = (0..count).collect();
        prop_assert_eq!(tags, expected);
    }

    #[test]
    fn remove_takes_the_first_duplicate(
        offset in 0usize..100,
        count in 2usize..6,
    ) {
        let mut index = OffsetIndex::new();
        for tag in 0..count {
            index.insert(offset, tag);
        }
        prop_assert_eq!(index.remove(offset), Some(0));
        prop_assert_eq!(index.get(offset), Some(&1));
        prop_assert_eq!(index.len(), count - 1);
    }
}

// ===== Property 3: color parsing =====

proptest! {
    #[test]
    fn parse_color_never_panics(s in any::<String>()) {
        let _ = parse_color(&s);
    }

    #[test]
    fn six_digit_hex_always_parses(r in 0u8.., g in 0u8.., b in 0u8..) {
        let s = format!("#{r:02x}{g:02x}{b:02x}");
        prop_assert!(parse_color(&s).is_some());
    }

    #[test]
    fn eight_digit_hex_drops_alpha(r in 0u8.., g in 0u8.., b in 0u8.., a in 0u8..) {
        let with_alpha = format!("#{r:02x}{g:02x}{b:02x}{a:02x}");
        let without = format!("#{r:02x}{g:02x}{b:02x}");
        prop_assert_eq!(parse_color(&with_alpha), parse_color(&without));
    }

    #[test]
    fn wrong_length_hex_is_rejected(digits in prop::collection::vec(0u8..16, 0..12)) {
        if ![3, 6, 8].contains(&digits.len()) {
            let body: String = digits.iter().map(|d| char::from_digit(*d as u32, 16).unwrap()).collect();
            let candidate = format!("#{body}");
            prop_assert!(parse_color(&candidate).is_none());
        }
    }
}
