//! Parser benchmarks using divan
//!
//! Benchmarks for formula parsing across term kinds, operator chains and
//! failing input.

use cellform::{parse_str, Sheet};

fn main() {
    divan::main();
}

// === Term Benchmarks ===

mod terms {
    use super::*;

    #[divan::bench]
    fn number(bencher: divan::Bencher) {
        let sheet = Sheet::default();
        bencher.bench_local(|| parse_str(divan::black_box("6.02e23"), &sheet));
    }

    #[divan::bench]
    fn string(bencher: divan::Bencher) {
        let sheet = Sheet::default();
        bencher.bench_local(|| parse_str(divan::black_box("'Hello, World!'"), &sheet));
    }

    #[divan::bench]
    fn cell(bencher: divan::Bencher) {
        let sheet = Sheet::default();
        bencher.bench_local(|| parse_str(divan::black_box("Z100"), &sheet));
    }

    #[divan::bench]
    fn range_call(bencher: divan::Bencher) {
        let sheet = Sheet::default();
        bencher.bench_local(|| parse_str(divan::black_box("average(A1:Z100)"), &sheet));
    }
}

// === Arithmetic Benchmarks ===

mod arithmetic {
    use super::*;

    #[divan::bench]
    fn mixed_precedence(bencher: divan::Bencher) {
        let sheet = Sheet::default();
        bencher.bench_local(|| {
            parse_str(divan::black_box("(A1 + 2) * 3 - B4 / 2 + SUM(C1:C9)"), &sheet)
        });
    }

    #[divan::bench]
    fn nested_parentheses(bencher: divan::Bencher) {
        let sheet = Sheet::default();
        bencher.bench_local(|| {
            parse_str(
                divan::black_box("((1 + 2) * (3 - 4)) / ((5 + 6) * (7 - 8))"),
                &sheet,
            )
        });
    }

    #[divan::bench(args = [10, 100, 1000])]
    fn long_chain(bencher: divan::Bencher, terms: usize) {
        let sheet = Sheet::default();
        let formula = (1..=terms)
            .map(|i| format!("A{}", i % 100 + 1))
            .collect::<Vec<_>>()
            .join(" + ");
        bencher.bench_local(|| parse_str(divan::black_box(&formula), &sheet));
    }
}

// === Failure Benchmarks ===

mod failures {
    use super::*;

    #[divan::bench]
    fn late_unbalanced(bencher: divan::Bencher) {
        let sheet = Sheet::default();
        let formula = format!("{} + (1", vec!["A1 * 2"; 50].join(" - "));
        bencher.bench_local(|| parse_str(divan::black_box(&formula), &sheet));
    }
}
