use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use seqtally_rs::{
    analyze_fasta, analyze_gene_info, BlankLinePolicy, CategoryOrder, FastaOptions,
    GeneInfoOptions,
};

#[derive(Parser)]
#[command(name = "seqtally-rs", version, about = "Gene-info tallies and FASTA GC content")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count genes, target-organism rows and gene types in a tab-separated gene_info file
    GeneInfo {
        file: PathBuf,

        /// Taxonomic id counted in question 2
        #[arg(long, default_value = seqtally_rs::options::HOMO_SAPIENS_TAXID)]
        taxid: String,

        /// List gene types alphabetically instead of in file order
        #[arg(long, default_value_t = false)]
        sort_categories: bool,
    },
    /// Validate a FASTA file and report the GC content of every valid entry
    Gc {
        file: PathBuf,

        /// Accept blank lines that are directly followed by a header
        #[arg(long, default_value_t = false)]
        allow_blank_before_header: bool,

        /// Fail on the first invalid entry
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let file = match &cli.command {
        Commands::GeneInfo { file, .. } | Commands::Gc { file, .. } => file,
    };
    if !is_readable_file(file) {
        println!("File does not exist or is not readable.");
        return ExitCode::FAILURE;
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("An error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> seqtally_rs::Result<()> {
    match command {
        Commands::GeneInfo { file, taxid, sort_categories } => {
            let order = if sort_categories {
                CategoryOrder::Sorted
            } else {
                CategoryOrder::FirstSeen
            };
            let options = GeneInfoOptions::default()
                .with_target_taxid(taxid)
                .with_category_order(order);

            let sp = spinner("green", "Aggregating gene info...");
            let results = analyze_gene_info(&file, &options);
            sp.finish_and_clear();
            let results = results?;

            for warning in results.warnings() {
                println!("{warning}");
            }
            print!("{}", results.get_report());
        }
        Commands::Gc { file, allow_blank_before_header, strict } => {
            let policy = if allow_blank_before_header {
                BlankLinePolicy::AllowBeforeHeader
            } else {
                BlankLinePolicy::Reject
            };
            let options = FastaOptions::default()
                .with_blank_lines(policy)
                .with_abort_on_invalid(strict);

            let sp = spinner("blue", "Validating FASTA entries...");
            let results = analyze_fasta(&file, &options);
            sp.finish_and_clear();
            let results = results?;

            for explanation in results.explanations() {
                println!("{explanation}");
            }
            print!("{}", results.get_report());
        }
    }
    Ok(())
}

/// Pre-flight check: an existing, non-empty regular file we are allowed to open.
fn is_readable_file(path: &Path) -> bool {
    let non_empty_file = fs::metadata(path)
        .map(|meta| meta.is_file() && meta.len() > 0)
        .unwrap_or(false);
    non_empty_file && File::open(path).is_ok()
}

/// Spinner on stderr; indicatif hides it when stderr is not a terminal.
fn spinner(color: &str, msg: &'static str) -> ProgressBar {
    let sp = ProgressBar::new_spinner();
    let template = format!("{{spinner:.{color}}} {{msg}}");
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template(&template)
    {
        sp.set_style(style);
    }
    sp.set_message(msg);
    sp
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_exactly_one_path() {
        assert!(Cli::try_parse_from(["seqtally-rs", "gc"]).is_err());
        assert!(Cli::try_parse_from(["seqtally-rs", "gc", "a.fa", "b.fa"]).is_err());
        assert!(Cli::try_parse_from(["seqtally-rs", "gene-info"]).is_err());

        let cli = Cli::try_parse_from(["seqtally-rs", "gene-info", "genes.tsv"]).unwrap();
        match cli.command {
            Commands::GeneInfo { file, taxid, sort_categories } => {
                assert_eq!(file, PathBuf::from("genes.tsv"));
                assert_eq!(taxid, "9606");
                assert!(!sort_categories);
            }
            Commands::Gc { .. } => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_preflight() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        assert!(!is_readable_file(f.path()));
        std::io::Write::write_all(&mut f, b">A\nATCG\n").unwrap();
        assert!(is_readable_file(f.path()));
        assert!(!is_readable_file(Path::new("/no/such/input.fasta")));
        assert!(!is_readable_file(f.path().parent().unwrap()));
    }
}
