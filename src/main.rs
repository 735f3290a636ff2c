use anyhow::Result;
use clap::{Parser, Subcommand};

mod index;
mod io;
mod seq;
mod util;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "sain-rust", author, version, about = "Linear-time suffix sorting inspired by GenomeTools gt_sain", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the suffix table of a reference via SA-IS induced sorting
    Index {
        /// Reference FASTA file
        reference: String,
        /// Output prefix for the suffix table file
        #[arg(short, long, default_value = "ref")]
        output: String,
        /// Print suffix classification statistics
        #[arg(long)]
        stats: bool,
        /// Verify the sorted order against a pairwise check (slow, small inputs)
        #[arg(long)]
        verify: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Index {
            reference,
            output,
            stats,
            verify,
        } => run_index(&reference, &output, stats, verify),
    }
}

fn run_index(reference: &str, output: &str, stats: bool, verify: bool) -> Result<()> {
    let fh = std::fs::File::open(reference)
        .map_err(|e| anyhow::anyhow!("cannot open reference FASTA '{}': {}", reference, e))?;
    let buf = std::io::BufReader::new(fh);
    let mut reader = io::fasta::FastaReader::new(buf);

    let mut n_seqs = 0usize;
    let mut total_len = 0usize;
    let mut seqs: Vec<Vec<u8>> = Vec::new();
    let mut contigs: Vec<index::table::Contig> = Vec::new();
    let mut offset = 0u32;

    while let Some(rec) = reader.next_record()? {
        n_seqs += 1;
        total_len += rec.seq.len();
        contigs.push(index::table::Contig {
            name: rec.id,
            len: rec.seq.len() as u32,
            offset,
        });
        // contig 之间隔一个 special 分隔符
        offset += rec.seq.len() as u32 + 1;
        seqs.push(rec.seq);
    }

    if n_seqs == 0 {
        anyhow::bail!("FASTA file '{}' contains no sequences", reference);
    }
    if total_len == 0 {
        anyhow::bail!("FASTA file '{}' contains only empty sequences", reference);
    }

    println!("reference: {}", reference);
    println!("sequences: {}", n_seqs);
    println!("total_len: {}", total_len);

    let enc = seq::EncodedSequence::from_contigs(seqs.iter().map(Vec::as_slice));
    println!("specials:  {}", enc.special_count());

    if stats {
        if let Some(info) = index::sais::classification_stats(&enc) {
            info.show();
        }
    }

    let suftab = index::sais::sort_suffixes(&enc)?;

    if verify {
        if index::sais::check_order(&enc, &suftab) {
            println!("order check: ok");
        } else {
            anyhow::bail!("order check FAILED: internal invariant violated");
        }
    }

    let mut table = index::table::SuffixTable::build(suftab, contigs);
    table.set_meta(index::table::IndexMeta {
        reference_file: Some(reference.to_string()),
        build_args: Some(std::env::args().collect::<Vec<_>>().join(" ")),
        build_timestamp: Some(chrono::Utc::now().to_rfc3339()),
    });

    let out_path = format!("{}.suftab", output);
    table
        .save_to_file(&out_path)
        .map_err(|e| anyhow::anyhow!("cannot write suffix table to '{}': {}", out_path, e))?;
    println!("suffix table saved: {}", out_path);
    Ok(())
}
