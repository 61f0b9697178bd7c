// Integration tests for the instrumented sorting algorithms

use sortty::algorithms::{
    compare_all, AlgorithmKey, GapSequence, InvalidReason, SortError, SortPolicy,
};
use sortty::steps::{SortRun, Step, StepKind, Termination, Value};

fn datasets() -> Vec<(&'static str, Vec<Value>)> {
    vec![
        ("empty", vec![]),
        ("single element", vec![42.0]),
        ("two elements", vec![2.0, 1.0]),
        ("already sorted", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
        ("reverse sorted", vec![5.0, 4.0, 3.0, 2.0, 1.0]),
        (
            "random order",
            vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0],
        ),
        ("duplicates", vec![4.0, 2.0, 4.0, 2.0, 4.0, 2.0]),
        ("all same", vec![7.0, 7.0, 7.0, 7.0, 7.0]),
        ("negative numbers", vec![-3.0, -1.0, -4.0, -1.0, -5.0]),
        ("mixed numbers", vec![-2.0, 0.0, 3.0, -1.0, 4.0, -5.0, 2.0]),
        (
            "longer than the small-range cutoff",
            (0..37).map(|i| ((i * 17) % 23) as Value).collect(),
        ),
    ]
}

fn policy() -> SortPolicy {
    SortPolicy {
        bogo_seed: Some(7),
        ..SortPolicy::default()
    }
}

fn sorted_copy(values: &[Value]) -> Vec<Value> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

fn is_non_negative_integers(values: &[Value]) -> bool {
    values.iter().all(|v| *v >= 0.0 && v.fract() == 0.0)
}

/// Every structural property a completed run must satisfy
fn check_run(key: AlgorithmKey, name: &str, input: &[Value], run: &SortRun) {
    let steps = run.steps.as_slice();
    assert_eq!(
        steps.first(),
        Some(&Step::Init(input.to_vec())),
        "{key} on {name}: first step must be init with the input"
    );
    let terminal_count = steps.iter().filter(|s| s.is_terminal()).count();
    assert_eq!(terminal_count, 1, "{key} on {name}: exactly one terminal step");
    assert!(
        run.steps.terminal().is_some_and(Step::is_terminal),
        "{key} on {name}: terminal step must be last"
    );

    let replayed = run.steps.replay().expect("log replays without errors");
    assert_eq!(
        Some(replayed.as_slice()),
        run.final_array(),
        "{key} on {name}: replay must match the terminal snapshot"
    );

    let tallies = match key {
        AlgorithmKey::Counting | AlgorithmKey::Radix => run.steps.count_kind(StepKind::Count),
        _ => run.steps.count_kind(StepKind::Compare),
    };
    assert_eq!(
        tallies as u64, run.stats.comparisons,
        "{key} on {name}: one step per counted comparison"
    );
    assert!(run.stats.time_millis >= 0.0);
}

#[test]
fn test_trivial_inputs_emit_only_init_and_complete() {
    for key in AlgorithmKey::ALL {
        for input in [vec![], vec![7.0]] {
            let run = key.run(&input, &policy()).expect("trivial input is valid");
            let kinds: Vec<StepKind> = run.steps.iter().map(Step::kind).collect();
            assert_eq!(
                kinds,
                [StepKind::Init, StepKind::Complete],
                "{key} on {input:?}"
            );
            assert_eq!(run.stats.comparisons, 0, "{key}");
            assert_eq!(run.stats.swaps, 0, "{key}");
        }
    }
}

#[test]
fn test_every_algorithm_sorts_every_dataset() {
    for key in AlgorithmKey::ALL {
        for (name, data) in datasets() {
            if matches!(key, AlgorithmKey::Counting | AlgorithmKey::Radix)
                && !is_non_negative_integers(&data)
            {
                continue;
            }
            // Bogo is only exercised where it finishes well inside its cap
            if key == AlgorithmKey::Bogo && data.len() > 5 {
                continue;
            }

            let run = key.run(&data, &policy()).expect("valid input is accepted");
            check_run(key, name, &data, &run);

            if run.termination() == Some(Termination::Complete) {
                assert_eq!(
                    run.final_array(),
                    Some(sorted_copy(&data).as_slice()),
                    "{key} on {name}: output must be sorted"
                );
            }
        }
    }
}

#[test]
fn test_input_is_not_mutated() {
    let input = vec![9.0, 3.0, 7.0, 1.0, 8.0, 2.0];
    let before = input.clone();
    for key in AlgorithmKey::ALL {
        key.run(&input, &policy()).expect("valid input");
        assert_eq!(input, before, "{key} mutated its input");
    }
}

#[test]
fn test_known_example_sorts_everywhere() {
    let input = [64.0, 34.0, 25.0, 12.0, 22.0, 11.0, 90.0];
    let expected = [11.0, 12.0, 22.0, 25.0, 34.0, 64.0, 90.0];
    for key in AlgorithmKey::ALL {
        if key == AlgorithmKey::Bogo {
            continue;
        }
        let run = key.run(&input, &policy()).expect("valid input");
        assert_eq!(run.final_array(), Some(&expected[..]), "{key}");
        assert_eq!(run.termination(), Some(Termination::Complete));
    }
}

#[test]
fn test_bubble_counts() {
    let run = AlgorithmKey::Bubble
        .run(&[64.0, 34.0, 25.0, 12.0, 22.0, 11.0, 90.0], &policy())
        .expect("valid input");
    assert_eq!(run.stats.comparisons, 21);
    assert_eq!(run.stats.swaps, run.steps.count_kind(StepKind::Swap) as u64);
    assert_eq!(
        run.steps.count_kind(StepKind::PassStart),
        run.steps.count_kind(StepKind::PassEnd)
    );
}

#[test]
fn test_bubble_stops_after_clean_pass() {
    let run = AlgorithmKey::Bubble
        .run(&[1.0, 2.0, 3.0, 4.0, 5.0], &policy())
        .expect("valid input");
    assert_eq!(run.stats.comparisons, 4);
    assert_eq!(run.stats.swaps, 0);
    assert_eq!(run.steps.count_kind(StepKind::PassStart), 1);
}

#[test]
fn test_selection_skips_no_op_swaps() {
    let run = AlgorithmKey::Selection
        .run(&[1.0, 2.0, 3.0, 4.0, 5.0], &policy())
        .expect("valid input");
    assert_eq!(run.stats.comparisons, 10);
    assert_eq!(run.stats.swaps, 0);
    assert_eq!(run.steps.count_kind(StepKind::Swap), 0);

    let run = AlgorithmKey::Selection
        .run(&[64.0, 34.0, 25.0, 12.0, 22.0, 11.0, 90.0], &policy())
        .expect("valid input");
    assert_eq!(run.stats.comparisons, 21);
}

#[test]
fn test_insertion_counts() {
    let sorted = AlgorithmKey::Insertion
        .run(&[1.0, 2.0, 3.0, 4.0, 5.0], &policy())
        .expect("valid input");
    assert_eq!(sorted.stats.comparisons, 4);
    assert_eq!(sorted.stats.swaps, 0);

    let reversed = AlgorithmKey::Insertion
        .run(&[5.0, 4.0, 3.0, 2.0, 1.0], &policy())
        .expect("valid input");
    assert_eq!(reversed.stats.comparisons, 10);
    // Ten shifts plus four inserts that change their slot
    assert_eq!(reversed.stats.swaps, 14);
    assert_eq!(reversed.steps.count_kind(StepKind::Shift), 10);
    assert_eq!(reversed.steps.count_kind(StepKind::Insert), 4);
}

#[test]
fn test_quick_sort_marks_small_ranges() {
    let input: Vec<Value> = (0..40).rev().map(|v| v as Value).collect();
    let run = AlgorithmKey::Quick.run(&input, &policy()).expect("valid input");
    let infos: Vec<&Step> = run
        .steps
        .iter()
        .filter(|s| s.kind() == StepKind::Info)
        .collect();
    assert!(!infos.is_empty());
    assert!(infos.iter().any(|s| matches!(
        s,
        Step::Info(text) if text.starts_with("Using insertion sort for small subarray")
    )));
}

#[test]
fn test_merge_skips_ordered_halves() {
    let input: Vec<Value> = (0..32).map(|v| v as Value).collect();
    let run = AlgorithmKey::Merge.run(&input, &policy()).expect("valid input");
    assert_eq!(run.stats.swaps, 0);
    assert_eq!(run.steps.count_kind(StepKind::Merge), 0);
}

#[test]
fn test_heap_brackets_sift_downs() {
    let run = AlgorithmKey::Heap
        .run(&[4.0, 10.0, 3.0, 5.0, 1.0, 8.0], &policy())
        .expect("valid input");
    assert_eq!(
        run.steps.count_kind(StepKind::HeapifyStart),
        run.steps.count_kind(StepKind::HeapifyEnd)
    );
    assert!(run.steps.count_kind(StepKind::HeapifyStart) > 0);
}

#[test]
fn test_shell_gap_sequences() {
    let input: Vec<Value> = (0..50).map(|i| ((i * 31) % 50) as Value).collect();
    for gaps in GapSequence::ALL {
        let policy = SortPolicy {
            shell_gaps: gaps,
            ..SortPolicy::default()
        };
        let run = AlgorithmKey::Shell.run(&input, &policy).expect("valid input");
        assert_eq!(run.final_array(), Some(sorted_copy(&input).as_slice()), "{gaps}");
        let last_gap = run
            .steps
            .iter()
            .filter_map(|s| match s {
                Step::GapChange(gap) => Some(*gap),
                _ => None,
            })
            .last();
        assert_eq!(last_gap, Some(1), "{gaps} must finish with gap 1");
    }
}

#[test]
fn test_counting_and_radix_reject_negative_and_fractional() {
    for key in [AlgorithmKey::Counting, AlgorithmKey::Radix] {
        let err = key
            .run(&[3.0, -1.0, 2.0], &policy())
            .expect_err("negative values are rejected");
        assert_eq!(
            err,
            SortError::InvalidInput {
                index: 1,
                value: -1.0,
                reason: InvalidReason::Negative
            }
        );

        let err = key
            .run(&[3.0, 2.5], &policy())
            .expect_err("fractions are rejected");
        assert_eq!(err.reason(), InvalidReason::NotAnInteger);
    }
}

#[test]
fn test_counting_rejects_huge_range() {
    let err = AlgorithmKey::Counting
        .run(&[0.0, 5_000_000.0], &policy())
        .expect_err("range too wide for a count table");
    assert!(matches!(
        err,
        SortError::InvalidInput {
            index: 1,
            reason: InvalidReason::RangeTooLarge { .. },
            ..
        }
    ));
}

#[test]
fn test_values_beyond_u64_are_rejected() {
    for key in [AlgorithmKey::Counting, AlgorithmKey::Radix] {
        let err = key
            .run(&[1e300, 1.0], &policy())
            .expect_err("value does not fit a bucket key");
        assert_eq!(
            err,
            SortError::InvalidInput {
                index: 0,
                value: 1e300,
                reason: InvalidReason::TooLarge,
            }
        );
        assert!(!err.to_string().contains("buckets"), "{key}: {err}");
    }
}

#[test]
fn test_counting_and_radix_count_tallies() {
    let input = [170.0, 45.0, 75.0, 90.0, 802.0, 24.0, 2.0, 66.0];
    let counting = AlgorithmKey::Counting.run(&input, &policy()).expect("valid input");
    assert_eq!(counting.steps.count_kind(StepKind::Count), input.len());
    assert_eq!(counting.steps.count_kind(StepKind::Place), input.len());

    // Three decimal digits, one tally per element per digit
    let radix = AlgorithmKey::Radix.run(&input, &policy()).expect("valid input");
    assert_eq!(radix.stats.comparisons, 3 * input.len() as u64);
}

#[test]
fn test_non_finite_values_are_rejected() {
    for key in AlgorithmKey::ALL {
        let err = key
            .run(&[1.0, Value::NAN, 3.0], &policy())
            .expect_err("NaN is rejected");
        assert_eq!(err.reason(), InvalidReason::NonFinite, "{key}");

        let err = key
            .run(&[Value::INFINITY], &policy())
            .expect_err("infinity is rejected");
        assert!(matches!(err, SortError::InvalidInput { index: 0, .. }), "{key}");
    }
}

#[test]
fn test_bogo_gives_up_at_cap() {
    let policy = SortPolicy {
        bogo_max_shuffles: 0,
        bogo_seed: Some(1),
        ..SortPolicy::default()
    };
    let input = [3.0, 2.0, 1.0];
    let run = AlgorithmKey::Bogo.run(&input, &policy).expect("valid input");
    assert_eq!(run.termination(), Some(Termination::IterationCapExceeded));
    assert_eq!(run.final_array(), Some(&input[..]));
    assert_eq!(run.steps.count_kind(StepKind::Shuffle), 0);
    assert!(run
        .steps
        .iter()
        .any(|s| matches!(s, Step::Info(text) if text.starts_with("Gave up after 0 shuffles"))));

    let run = AlgorithmKey::Bogo.run(&[1.0, 2.0, 3.0], &policy).expect("valid input");
    assert_eq!(run.termination(), Some(Termination::Complete));
}

#[test]
fn test_bogo_is_deterministic_with_seed() {
    let policy = SortPolicy {
        bogo_max_shuffles: 25,
        bogo_seed: Some(99),
        ..SortPolicy::default()
    };
    let input = [5.0, 1.0, 4.0, 2.0, 3.0, 6.0];
    let a = AlgorithmKey::Bogo.run(&input, &policy).expect("valid input");
    let b = AlgorithmKey::Bogo.run(&input, &policy).expect("valid input");
    assert_eq!(a.steps, b.steps);
    assert_eq!(a.stats.comparisons, b.stats.comparisons);
    assert!(a.steps.count_kind(StepKind::Shuffle) <= 25 * (input.len() - 1));
}

#[test]
fn test_deterministic_algorithms_repeat_exactly() {
    let input = [8.0, 3.0, 5.0, 3.0, 9.0, 0.0, 4.0];
    for key in AlgorithmKey::ALL {
        let a = key.run(&input, &policy()).expect("valid input");
        let b = key.run(&input, &policy()).expect("valid input");
        assert_eq!(a.steps, b.steps, "{key}");
        assert_eq!(
            (a.stats.comparisons, a.stats.swaps),
            (b.stats.comparisons, b.stats.swaps),
            "{key}"
        );
    }
}

#[test]
fn test_compare_all_reports_each_algorithm() {
    let rows = compare_all(&[4.0, 1.5, 3.0], &policy());
    assert_eq!(rows.len(), AlgorithmKey::ALL.len());
    for row in &rows {
        match row.key {
            AlgorithmKey::Counting | AlgorithmKey::Radix => {
                assert_eq!(
                    row.result.as_ref().map_err(SortError::reason),
                    Err(InvalidReason::NotAnInteger)
                );
            }
            _ => assert!(row.result.is_ok(), "{}", row.key),
        }
    }
}
