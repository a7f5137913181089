use proptest::prelude::*;
use sketchkit_board::ObjectStore;
use sketchkit_core::Rgb8;

#[derive(Debug, Clone)]
enum Op {
    AddText(String),
    AddImage(u32, u32),
    /// Remove the nth live object (modulo the current count).
    RemoveNth(usize),
    /// Remove an id that never existed.
    RemoveAbsent(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(Op::AddText),
        (1u32..16, 1u32..16).prop_map(|(w, h)| Op::AddImage(w, h)),
        (0usize..64).prop_map(Op::RemoveNth),
        (1_000_000u64..2_000_000).prop_map(Op::RemoveAbsent),
    ]
}

proptest! {
    #[test]
    fn order_is_preserved_and_ids_never_duplicate(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut store = ObjectStore::new();
        let mut expected: Vec<u64> = Vec::new();
        let mut ever_issued: Vec<u64> = Vec::new();

        for op in ops {
            match op {
                Op::AddText(content) => {
                    let id = store.add_text(&content, 0.0, 20.0, 24.0, Rgb8::BLACK).unwrap();
                    prop_assert!(!ever_issued.contains(&id), "id {} reused", id);
                    ever_issued.push(id);
                    expected.push(id);
                }
                Op::AddImage(w, h) => {
                    let pm = tiny_skia::Pixmap::new(w, h).unwrap();
                    let id = store.add_image(pm, 0.0, 0.0, w as f64, h as f64).unwrap();
                    prop_assert!(!ever_issued.contains(&id), "id {} reused", id);
                    ever_issued.push(id);
                    expected.push(id);
                }
                Op::RemoveNth(n) => {
                    if !expected.is_empty() {
                        let id = expected.remove(n % expected.len());
                        prop_assert!(store.remove(id).is_some());
                    }
                }
                Op::RemoveAbsent(id) => {
                    prop_assert!(store.remove(id).is_none());
                }
            }

            // iter() preserves insertion order minus removed ids.
            let actual: Vec<u64> = store.iter().map(|o| o.id()).collect();
            prop_assert_eq!(&actual, &expected);
        }
    }
}
