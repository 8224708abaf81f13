use wuzzy::{sequence, JaroWinkler, Levenshtein, NGram, Weights};

fn main() {
    let pairs = [("MARTHA", "MARHTA"), ("DWAYNE", "DUANE"), ("DIXON", "DICKSONX")];

    let jw = JaroWinkler::default();
    // Substitutions are as costly as a deletion plus an insertion.
    let lev = Levenshtein::new(Weights::default().substitution(2.)).unwrap();
    let trigram = NGram::new(3).unwrap();

    for (a, b) in pairs {
        let a = sequence::chars(a);
        let b = sequence::chars(b);
        println!(
            "jw={:.3}, lev={:.3}, ngram={:.3}, jaccard={:.3}",
            jw.similarity(&a, &b),
            lev.similarity(&a, &b),
            trigram.similarity(&a, &b),
            wuzzy::jaccard(&a, &b).unwrap(),
        );
    }

    // Records are compared on a field of interest.
    let a = [("D", 1), ("I", 2), ("X", 3), ("O", 4), ("N", 5)];
    let b = [("D", 0), ("I", 0), ("C", 0), ("K", 0), ("S", 0), ("O", 0), ("N", 0), ("X", 0)];
    let score = jw.similarity_by(&a, &b, |x, y| x.0 == y.0);
    assert!((score - 0.813).abs() < 1e-3);
}
