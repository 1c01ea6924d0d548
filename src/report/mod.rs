//! Console table rendering for rankings
//!
//! Right-aligned fixed-width columns with three-decimal scores. Column
//! widths are cosmetic; callers wanting different layouts can format the
//! result types themselves.

use std::fmt::Write;

use crate::pmi::Collocation;
use crate::similarity::SimilarPair;

/// Render a collocation ranking as a rank/score/word/count table
pub fn collocation_table(ranked: &[Collocation]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>4} {:>10} {:>20} {:>8}", "rank", "score", "word", "count");
    for (i, c) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4} {:>10.3} {:>20} {:>8}",
            i + 1,
            c.score,
            c.modifier,
            c.count
        );
    }
    out
}

/// Render a similarity ranking as a rank/word/word/similarity table
pub fn similarity_table(ranked: &[SimilarPair]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4} {:>15} {:>15} {:>12}",
        "rank", "word 1", "word 2", "similarity"
    );
    for (i, p) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4} {:>15} {:>15} {:>12.3}",
            i + 1,
            p.word_1,
            p.word_2,
            p.score
        );
    }
    out
}
