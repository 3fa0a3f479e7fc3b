//! Line-level diff used to emphasize changed output lines

use std::collections::BTreeSet;
use tracing::trace;

/// Inclusive range of 1-based output lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffSpan {
    pub start: usize,
    pub end: usize,
}

/// Split on `\r?\n`, dropping trailing empty lines
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// 1-based line numbers of `output` that are not part of the longest common
/// subsequence with `input`. Deleted input lines flag nothing.
pub fn highlight(input: &str, output: &str) -> BTreeSet<usize> {
    let a = split_lines(input);
    let b = split_lines(output);
    let (n, m) = (a.len(), b.len());

    // lcs[i][j] = LCS length of a[i..] and b[j..]
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut changed = BTreeSet::new();
    let (mut i, mut j) = (0, 0);
    while j < m {
        if i < n && a[i] == b[j] {
            i += 1;
            j += 1;
        } else if i < n && lcs[i + 1][j] >= lcs[i][j + 1] {
            i += 1;
        } else {
            changed.insert(j + 1);
            j += 1;
        }
    }

    trace!("Changed output lines: {:?}", changed);
    changed
}

/// Changed output lines grouped into contiguous spans
pub fn spans(input: &str, output: &str) -> Vec<DiffSpan> {
    let mut spans: Vec<DiffSpan> = Vec::new();
    for line in highlight(input, output) {
        match spans.last_mut() {
            Some(span) if span.end + 1 == line => span.end = line,
            _ => spans.push(DiffSpan {
                start: line,
                end: line,
            }),
        }
    }
    for span in &spans {
        trace!("delta: start={} end={}", span.start, span.end);
    }
    spans
}
