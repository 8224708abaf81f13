use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::Instant;

use clap::Parser;
use rayon::prelude::*;

use wuzzy::{JaroWinkler, Levenshtein, NGram, Weights};

#[derive(Clone, Debug)]
enum Metric {
    JaroWinkler,
    Levenshtein,
    NGram,
    Jaccard,
    Tanimoto,
}

impl FromStr for Metric {
    type Err = &'static str;
    fn from_str(metric: &str) -> Result<Self, Self::Err> {
        match metric {
            "jw" => Ok(Self::JaroWinkler),
            "lev" => Ok(Self::Levenshtein),
            "ngram" => Ok(Self::NGram),
            "jac" => Ok(Self::Jaccard),
            "tan" => Ok(Self::Tanimoto),
            _ => Err("Could not parse a metric option"),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "wuzzy",
    about = "A program to score pairs of sequences with similarity metrics."
)]
struct Args {
    /// Metric to compute: jw, lev, ngram, jac, or tan.
    #[clap(short = 'm', long)]
    metric: Metric,

    /// File path to tab-separated pairs, one pair per line.
    /// If None, pairs are read from the standard input.
    #[clap(short = 'i', long)]
    pair_path: Option<PathBuf>,

    /// Delimiter for recognizing words as tokens.
    /// If None, characters are used for tokens.
    #[clap(short = 'd', long)]
    delimiter: Option<char>,

    /// Gram size for the n-gram metric (must be more than 0).
    #[clap(short = 'n', long, default_value = "2")]
    gram_size: usize,

    /// Threshold in the range of [0,1] for the Winkler prefix bonus.
    #[clap(short = 't', long, default_value = "0.7")]
    threshold: f64,

    /// Deletion cost for the Levenshtein metric.
    #[clap(long, default_value = "1")]
    deletion: f64,

    /// Insertion cost for the Levenshtein metric.
    #[clap(long, default_value = "1")]
    insertion: f64,

    /// Substitution cost for the Levenshtein metric.
    #[clap(long, default_value = "1")]
    substitution: f64,

    /// Disables parallel scoring.
    #[clap(short = 'p', long)]
    disable_parallel: bool,

    /// Shows the progress via the standard error output.
    #[clap(short = 'v', long)]
    verbose: bool,
}

/// A metric configured from the command line, applied to token sequences.
enum Scorer {
    JaroWinkler(JaroWinkler),
    Levenshtein(Levenshtein),
    NGram(NGram),
    Jaccard,
    Tanimoto,
}

impl Scorer {
    fn new(args: &Args) -> wuzzy::Result<Self> {
        Ok(match args.metric {
            Metric::JaroWinkler => Self::JaroWinkler(JaroWinkler::new(args.threshold)?),
            Metric::Levenshtein => {
                let weights = Weights::default()
                    .deletion(args.deletion)
                    .insertion(args.insertion)
                    .substitution(args.substitution);
                Self::Levenshtein(Levenshtein::new(weights)?)
            }
            Metric::NGram => Self::NGram(NGram::new(args.gram_size)?),
            Metric::Jaccard => Self::Jaccard,
            Metric::Tanimoto => Self::Tanimoto,
        })
    }

    fn score(&self, a: &[&str], b: &[&str]) -> wuzzy::Result<f64> {
        match self {
            Self::JaroWinkler(m) => Ok(m.similarity(a, b)),
            Self::Levenshtein(m) => Ok(m.similarity(a, b)),
            Self::NGram(m) => Ok(m.similarity(a, b)),
            Self::Jaccard => wuzzy::jaccard(a, b),
            Self::Tanimoto => wuzzy::tanimoto(a, b),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let scorer = Scorer::new(&args)?;
    let delimiter = args.delimiter;
    let disable_parallel = args.disable_parallel;
    let verbose = args.verbose;

    let pairs = {
        let rdr: Box<dyn Read> = match &args.pair_path {
            Some(path) => Box::new(File::open(path)?),
            None => Box::new(io::stdin()),
        };
        load_pairs(rdr)?
    };

    if verbose {
        eprintln!("Scoring {} pairs...", pairs.len());
    }
    let start = Instant::now();

    #[allow(clippy::mutex_atomic)]
    let processed = Mutex::new(0usize);
    let score_pair = |(a, b): &(String, String)| {
        if verbose {
            // Mutex::lock also locks eprintln.
            let mut cnt = processed.lock().unwrap();
            *cnt += 1;
            if *cnt % 1000 == 0 {
                eprintln!("Processed {} pairs...", *cnt);
            }
        }
        let a = tokenize(a, delimiter);
        let b = tokenize(b, delimiter);
        scorer.score(&a, &b)
    };
    let scores: Vec<_> = if disable_parallel {
        pairs.iter().map(score_pair).collect()
    } else {
        pairs.par_iter().map(score_pair).collect()
    };

    if verbose {
        eprintln!("Done in {} sec", start.elapsed().as_secs_f64());
    }

    // Nothing is printed unless every pair is scored.
    let scores = collect_scores(scores)?;
    println!("i,score");
    for (i, score) in scores.into_iter().enumerate() {
        println!("{i},{score}");
    }

    Ok(())
}

/// Unwraps all the scores, or returns the first error with its line number.
fn collect_scores(scores: Vec<wuzzy::Result<f64>>) -> Result<Vec<f64>, String> {
    scores
        .into_iter()
        .enumerate()
        .map(|(i, score)| score.map_err(|e| format!("Line {}: {e}", i + 1)))
        .collect()
}

fn load_pairs<R>(rdr: R) -> Result<Vec<(String, String)>, Box<dyn Error>>
where
    R: Read,
{
    let mut pairs = vec![];
    for (i, line) in BufReader::new(rdr).lines().enumerate() {
        let line = line?;
        let (a, b) = line
            .split_once('\t')
            .ok_or_else(|| format!("Line {} must include a tab separator.", i + 1))?;
        pairs.push((a.to_string(), b.to_string()));
    }
    Ok(pairs)
}

/// Splits text into tokens by the delimiter, or into characters if it is None.
fn tokenize(text: &str, delimiter: Option<char>) -> Vec<&str> {
    match delimiter {
        Some(delim) => text.split(delim).collect(),
        None => {
            let mut tokens = Vec::with_capacity(text.len());
            let mut offset = 0;
            for c in text.chars() {
                let len = c.len_utf8();
                tokens.push(&text[offset..offset + len]);
                offset += len;
            }
            tokens
        }
    }
}
