//! Longest-run search and run swapping.
//!
//! A run is a maximal span of consecutive equal elements. Operations here
//! never mutate their inputs; swapping returns fresh vectors.

/// A maximal span of consecutive equal elements within a sequence.
///
/// Derived on demand, never persisted: positions are only meaningful against
/// the exact sequence the run was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Index of the first element of the span.
    pub start: usize,
    /// Number of elements in the span.
    pub len: usize,
}

/// Locate the longest run of consecutive equal elements.
///
/// Single left-to-right scan. A later run replaces the best only when
/// strictly longer, so the first maximal run wins ties. An empty sequence
/// yields `Run { start: 0, len: 0 }`; a single element yields length 1.
pub fn longest_run(seq: &[i64]) -> Run {
    if seq.is_empty() {
        return Run { start: 0, len: 0 };
    }
    let mut best = Run { start: 0, len: 1 };
    let mut current = Run { start: 0, len: 1 };
    for i in 1..seq.len() {
        if seq[i] == seq[i - 1] {
            current.len += 1;
        } else {
            if current.len > best.len {
                best = current;
            }
            current = Run { start: i, len: 1 };
        }
    }
    if current.len > best.len {
        best = current;
    }
    best
}

/// Swap the longest runs between two sequences.
///
/// Each side's run is located independently, removed, and the other side's
/// run spliced in at the original start index. When the runs differ in
/// length the results differ in length from their inputs; elements after the
/// insertion point shift, nothing else is reordered.
pub fn swap_longest_runs(a: &[i64], b: &[i64]) -> (Vec<i64>, Vec<i64>) {
    let run_a = longest_run(a);
    let run_b = longest_run(b);

    let span_a = &a[run_a.start..run_a.start + run_a.len];
    let span_b = &b[run_b.start..run_b.start + run_b.len];

    (splice(a, run_a, span_b), splice(b, run_b, span_a))
}

/// Remove `run` from `seq` and insert `replacement` at the run's start index.
fn splice(seq: &[i64], run: Run, replacement: &[i64]) -> Vec<i64> {
    let mut out = Vec::with_capacity(seq.len() - run.len + replacement.len());
    out.extend_from_slice(&seq[..run.start]);
    out.extend_from_slice(replacement);
    out.extend_from_slice(&seq[run.start + run.len..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    /// Alternative finder built on `chunk_by`, kept test-only: the production
    /// scan is canonical and this one exists to cross-check it.
    fn longest_run_chunked(seq: &[i64]) -> Run {
        let mut best = Run { start: 0, len: 0 };
        let mut start = 0;
        for chunk in seq.chunk_by(|left, right| left == right) {
            if chunk.len() > best.len {
                best = Run {
                    start,
                    len: chunk.len(),
                };
            }
            start += chunk.len();
        }
        best
    }

    #[test]
    fn empty_sequence_yields_zero_run() {
        assert_eq!(longest_run(&[]), Run { start: 0, len: 0 });
    }

    #[test]
    fn single_element_yields_length_one() {
        assert_eq!(longest_run(&[7]), Run { start: 0, len: 1 });
    }

    #[test]
    fn finds_single_maximal_run() {
        assert_eq!(
            longest_run(&[1, 1, 2, 2, 2, 3]),
            Run { start: 2, len: 3 }
        );
    }

    #[test]
    fn earlier_run_wins_ties() {
        assert_eq!(longest_run(&[1, 1, 2, 2]), Run { start: 0, len: 2 });
        assert_eq!(
            longest_run(&[3, 1, 1, 2, 2, 4]),
            Run { start: 1, len: 2 }
        );
    }

    #[test]
    fn later_strictly_longer_run_replaces_best() {
        assert_eq!(longest_run(&[1, 1, 5, 5, 5]), Run { start: 2, len: 3 });
    }

    #[test]
    fn trailing_run_is_found() {
        assert_eq!(longest_run(&[1, 2, 3, 3, 3]), Run { start: 2, len: 3 });
    }

    #[test]
    fn scan_agrees_with_chunked_on_random_inputs() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let len = rng.gen_range(0..=24);
            let seq: Vec<i64> = (0..len).map(|_| rng.gen_range(0..=3)).collect();
            assert_eq!(
                longest_run(&seq),
                longest_run_chunked(&seq),
                "disagreement on {seq:?}"
            );
        }
    }

    #[test]
    fn swaps_runs_between_sequences() {
        // Run in A is the three 2s at index 2; run in B is the four 5s at 0.
        let a = vec![1, 1, 2, 2, 2, 3];
        let b = vec![5, 5, 5, 5, 1];
        let (swapped_a, swapped_b) = swap_longest_runs(&a, &b);
        assert_eq!(swapped_a, vec![1, 1, 5, 5, 5, 5, 3]);
        assert_eq!(swapped_b, vec![2, 2, 2, 1]);
        // Inputs stay untouched.
        assert_eq!(a, vec![1, 1, 2, 2, 2, 3]);
        assert_eq!(b, vec![5, 5, 5, 5, 1]);
    }

    #[test]
    fn swapped_lengths_follow_run_lengths() {
        let a = vec![9, 9, 9, 0];
        let b = vec![4, 7];
        let run_a = longest_run(&a);
        let run_b = longest_run(&b);
        let (swapped_a, swapped_b) = swap_longest_runs(&a, &b);
        assert_eq!(swapped_a.len(), a.len() - run_a.len + run_b.len);
        assert_eq!(swapped_b.len(), b.len() - run_b.len + run_a.len);
    }

    #[test]
    fn swapping_identified_runs_back_restores_originals() {
        let a = vec![1, 1, 2, 2, 2, 3];
        let b = vec![5, 5, 5, 5, 1];
        let run_a = longest_run(&a);
        let run_b = longest_run(&b);
        let (swapped_a, swapped_b) = swap_longest_runs(&a, &b);

        // Reconstruct rather than reapply: after the first swap the foreign
        // run sits at the original start index with its own length.
        let restored_a = splice(
            &swapped_a,
            Run {
                start: run_a.start,
                len: run_b.len,
            },
            &a[run_a.start..run_a.start + run_a.len],
        );
        let restored_b = splice(
            &swapped_b,
            Run {
                start: run_b.start,
                len: run_a.len,
            },
            &b[run_b.start..run_b.start + run_b.len],
        );
        assert_eq!(restored_a, a);
        assert_eq!(restored_b, b);
    }

    #[test]
    fn swap_with_equal_length_runs_keeps_lengths() {
        let a = vec![1, 2, 2, 3];
        let b = vec![8, 9, 9, 1];
        let (swapped_a, swapped_b) = swap_longest_runs(&a, &b);
        assert_eq!(swapped_a, vec![1, 9, 9, 3]);
        assert_eq!(swapped_b, vec![8, 2, 2, 1]);
    }
}
