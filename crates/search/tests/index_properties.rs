//! Property tests for TokenIndex maintenance
//!
//! Random upsert/remove sequences over a small id space and vocabulary,
//! checked against a from-scratch rebuild of the stored texts.
//! Search hits are checked token by token against the indexed text.

use proptest::prelude::*;
use taskdeck_core::{EntityId, IndexEntry};
use taskdeck_search::{tokenize, TokenIndex, DEFAULT_LIMIT};

const WORDS: &[&str] = &[
    "ivan", "Ivanova", "petrov", "PETROVA", "urgent", "urgently", "Östen", "Иван", "андрей",
    "qa", "dev", "devops", "42", "x²",
];

#[derive(Debug, Clone)]
enum Op {
    Upsert(u8, String),
    Remove(u8),
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::collection::vec(prop::sample::select(WORDS), 0..4).prop_map(|w| w.join(" ")),
        1 => prop::collection::vec(prop::sample::select(WORDS), 1..3).prop_map(|w| w.join("-")),
        1 => "\\PC{0,12}",
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..6, text_strategy()).prop_map(|(id, text)| Op::Upsert(id, text)),
        1 => (0u8..6).prop_map(Op::Remove),
    ]
}

fn entity(n: u8) -> EntityId {
    EntityId::new(format!("e{}", n))
}

fn apply(index: &mut TokenIndex, op: &Op) {
    match op {
        Op::Upsert(id, text) => index.upsert(entity(*id), text.clone()),
        Op::Remove(id) => {
            index.remove(&entity(*id));
        }
    }
}

/// Rebuild from the stored texts and compare the token maps
fn assert_inverse_consistent(index: &TokenIndex) {
    let snapshot: Vec<IndexEntry> = index
        .entries()
        .map(|(id, text)| IndexEntry::new(id.clone(), text))
        .collect();
    let rebuilt = TokenIndex::from_entries(snapshot);

    let live_terms: Vec<&str> = index.terms().collect();
    let rebuilt_terms: Vec<&str> = rebuilt.terms().collect();
    assert_eq!(live_terms, rebuilt_terms);

    for term in live_terms {
        let live = index.postings(term).unwrap();
        assert!(!live.is_empty(), "empty posting set for {:?}", term);
        assert_eq!(live, rebuilt.postings(term).unwrap(), "postings differ for {:?}", term);
    }
}

proptest! {
    #[test]
    fn prop_index_is_inverse_of_texts(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut index = TokenIndex::new();
        for op in &ops {
            apply(&mut index, op);
            assert_inverse_consistent(&index);
        }
    }

    #[test]
    fn prop_upsert_is_idempotent(
        ops in prop::collection::vec(op_strategy(), 0..20),
        id in 0u8..6,
        text in text_strategy(),
    ) {
        let mut once = TokenIndex::new();
        for op in &ops {
            apply(&mut once, op);
        }
        let mut twice = once.clone();

        once.upsert(entity(id), text.clone());
        twice.upsert(entity(id), text.clone());
        twice.upsert(entity(id), text);

        let once_terms: Vec<&str> = once.terms().collect();
        let twice_terms: Vec<&str> = twice.terms().collect();
        prop_assert_eq!(&once_terms, &twice_terms);
        for term in once_terms {
            prop_assert_eq!(once.postings(term), twice.postings(term));
        }
        prop_assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn prop_removed_id_is_unreachable(
        ops in prop::collection::vec(op_strategy(), 0..30),
        id in 0u8..6,
    ) {
        let mut index = TokenIndex::new();
        for op in &ops {
            apply(&mut index, op);
        }
        let former = index.text(&entity(id)).map(String::from);
        index.remove(&entity(id));

        prop_assert!(!index.contains(&entity(id)));
        for term in index.terms() {
            prop_assert!(!index.postings(term).unwrap().contains(&entity(id)));
        }
        if let Some(text) = former {
            for token in tokenize(&text) {
                prop_assert!(!index.search(&token, usize::MAX).contains(&entity(id)));
            }
            prop_assert!(!index.search(&text, usize::MAX).contains(&entity(id)));
        }
    }

    #[test]
    fn prop_search_results_contain_every_query_token(
        ops in prop::collection::vec(op_strategy(), 0..30),
        first in prop::sample::select(WORDS),
        last in prop::sample::select(WORDS),
    ) {
        let mut index = TokenIndex::new();
        for op in &ops {
            apply(&mut index, op);
        }

        let query = format!("{} {}", first, last);
        let query_tokens = tokenize(&query);
        let (last_token, leading) = query_tokens.split_last().unwrap();

        for hit in index.search(&query, usize::MAX) {
            let tokens = tokenize(index.text(&hit).unwrap());
            for token in leading {
                prop_assert!(tokens.contains(token));
            }
            if index.postings(last_token).is_some() {
                prop_assert!(tokens.contains(last_token));
            } else {
                prop_assert!(tokens.iter().any(|t| t.starts_with(last_token.as_str())));
            }
        }
    }

    #[test]
    fn prop_search_respects_limit(
        ops in prop::collection::vec(op_strategy(), 0..30),
        query in prop::sample::select(WORDS),
        limit in 0usize..4,
    ) {
        let mut index = TokenIndex::new();
        for op in &ops {
            apply(&mut index, op);
        }

        let all = index.search(query, usize::MAX);
        let limited = index.search(query, limit);
        prop_assert!(limited.len() <= limit);
        prop_assert_eq!(&limited[..], &all[..limited.len()]);
        prop_assert!(index.search(query, DEFAULT_LIMIT).len() <= DEFAULT_LIMIT);
    }
}
