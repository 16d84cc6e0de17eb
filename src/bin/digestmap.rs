use digestmap::edit_distance::edit_distance;
use digestmap::fasta::FastaSequence;
use digestmap::fragments::{parse_fragment_list, read_fragment_file};
use digestmap::hydrophobicity::{predict_membrane, MembranePrediction};
use digestmap::partial_digest::{solve, DigestSolution};
use digestmap::render_map::{gel_svg, restriction_map_svg};
use digestmap::selection::{Generation, HaploidSelection};
use digestmap::GENETIC_CODE;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::{env, fs};

#[derive(Serialize)]
struct SolveSummary {
    #[serde(flatten)]
    solution: DigestSolution,
    complete: bool,
}

#[derive(Serialize)]
struct TranslationSummary {
    label: String,
    header: String,
    sequence_length: usize,
    one_letter: String,
    three_letter: String,
    errors: Vec<digestmap::genetic_code::TranslationError>,
}

#[derive(Serialize)]
struct HydropathySummary {
    label: String,
    amino_acids: String,
    #[serde(flatten)]
    prediction: MembranePrediction,
}

#[derive(Serialize)]
struct SelectionSummary {
    generations: Vec<Generation>,
    final_freq1: f64,
}

fn usage() {
    eprintln!(
        "Usage:\n  \
  digestmap --version\n  \
  digestmap solve <FRAGMENTS | @file>\n  \
  digestmap map-svg <FRAGMENTS | @file> OUTPUT.svg\n  \
  digestmap gel-svg <FRAGMENTS | @file> OUTPUT.svg\n  \
  digestmap translate FASTA_FILE\n  \
  digestmap hydropathy FASTA_FILE\n  \
  digestmap edit-distance SEQ1 SEQ2\n  \
  digestmap select N F1 W1 W2 GENS [SEED]\n\n  \
  FRAGMENTS is a whitespace/comma-separated list of lengths, e.g. '2 2 3 3 4 5 6 7 8 10'"
    );
}

fn load_fragments(value: &str) -> Result<Vec<u64>, String> {
    if let Some(path) = value.strip_prefix('@') {
        read_fragment_file(path).map_err(|e| format!("Could not read fragment file '{path}': {e}"))
    } else {
        parse_fragment_list(value).map_err(|e| e.to_string())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Could not serialize JSON output: {e}"))?;
    println!("{text}");
    Ok(())
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &str) -> Result<T, String> {
    value
        .parse::<T>()
        .map_err(|_| format!("Invalid {what} '{value}'"))
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        usage();
        return Err("Missing command".to_string());
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("digestmap {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let command = &args[1];
    match command.as_str() {
        "solve" => {
            if args.len() <= 2 {
                usage();
                return Err("Missing fragment list".to_string());
            }
            let fragments = load_fragments(&args[2..].join(" "))?;
            let solution = solve(&fragments);
            let complete = solution.is_complete();
            print_json(&SolveSummary { solution, complete })
        }
        "map-svg" | "gel-svg" => {
            if args.len() <= 3 {
                usage();
                return Err(format!("{command} requires: FRAGMENTS OUTPUT.svg"));
            }
            let output = &args[args.len() - 1];
            let fragments = load_fragments(&args[2..args.len() - 1].join(" "))?;
            let svg = if command == "map-svg" {
                restriction_map_svg(&solve(&fragments))
            } else {
                gel_svg(&fragments)
            };
            fs::write(output, svg)
                .map_err(|e| format!("Could not write SVG output '{output}': {e}"))?;
            println!("Wrote {command} for {} fragments to '{output}'", fragments.len());
            Ok(())
        }
        "translate" => {
            if args.len() <= 2 {
                usage();
                return Err("Missing FASTA file".to_string());
            }
            let records =
                FastaSequence::from_fasta_file(&args[2]).map_err(|e| e.to_string())?;
            let summaries: Vec<TranslationSummary> = records
                .iter()
                .map(|record| {
                    let translation = GENETIC_CODE.translate(&record.sequence);
                    TranslationSummary {
                        label: record.label.clone(),
                        header: record.header.clone(),
                        sequence_length: record.len(),
                        one_letter: translation.one_letter,
                        three_letter: translation.three_letter,
                        errors: translation.errors,
                    }
                })
                .collect();
            print_json(&summaries)
        }
        "hydropathy" => {
            if args.len() <= 2 {
                usage();
                return Err("Missing FASTA file".to_string());
            }
            let records =
                FastaSequence::from_fasta_file(&args[2]).map_err(|e| e.to_string())?;
            let summaries: Vec<HydropathySummary> = records
                .iter()
                .map(|record| {
                    let translation = GENETIC_CODE.translate(&record.sequence);
                    let prediction = predict_membrane(&translation.one_letter);
                    HydropathySummary {
                        label: record.label.clone(),
                        amino_acids: translation.one_letter,
                        prediction,
                    }
                })
                .collect();
            print_json(&summaries)
        }
        "edit-distance" => {
            if args.len() <= 3 {
                usage();
                return Err("edit-distance requires: SEQ1 SEQ2".to_string());
            }
            let alignment = edit_distance(&args[2], &args[3]).map_err(|e| e.to_string())?;
            print_json(&alignment)
        }
        "select" => {
            if args.len() <= 6 {
                usage();
                return Err("select requires: N F1 W1 W2 GENS [SEED]".to_string());
            }
            let model = HaploidSelection {
                initial_population: parse_number(&args[2], "population size")?,
                initial_freq1: parse_number(&args[3], "allele frequency")?,
                fitness1: parse_number(&args[4], "fitness")?,
                fitness2: parse_number(&args[5], "fitness")?,
            };
            let generations: usize = parse_number(&args[6], "generation count")?;
            let seed: u64 = match args.get(7) {
                Some(value) => parse_number(value, "seed")?,
                None => 0,
            };
            let mut rng = StdRng::seed_from_u64(seed);
            let populations = model.simulate(generations, &mut rng);
            let final_freq1 = populations.last().map(|g| g.freq1()).unwrap_or(0.0);
            print_json(&SelectionSummary {
                generations: populations,
                final_freq1,
            })
        }
        _ => {
            usage();
            Err(format!("Unknown command '{command}'"))
        }
    }
}
