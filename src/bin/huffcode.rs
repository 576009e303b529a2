use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use huffcode::{build_tree, decode_bits, encode_text, Encoder};

/// Builds a huffman code for the chars of a text file
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// text file to count, line terminators are not counted
    input: PathBuf,

    /// print the codeword of every symbol
    #[arg(long)]
    codes: bool,

    /// print the tree in graphviz dot format
    #[arg(long)]
    dot: bool,

    /// encode and decode every line and check the result
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let open = || {
        File::open(&args.input)
            .map(BufReader::new)
            .with_context(|| format!("open {}", args.input.display()))
    };

    let counts = hist::count_lines(open()?).context("count symbols")?;
    let Some(tree) = build_tree(&counts) else {
        bail!("{} contains no symbols", args.input.display());
    };
    let encoder = Encoder::new(&tree);

    println!("symbols: {}", tree.get_num_symbol_nodes());
    println!("original size: {} chars", tree.total_count());
    println!(
        "estimated size: {} byte ({} bits)",
        tree.estimate_compressed_size(),
        tree.weighted_path_length()
    );

    if args.codes {
        let mut codes: Vec<_> = encoder.codes().iter().collect();
        codes.sort();
        for (symbol, code) in codes {
            println!("{:?}\t{}", symbol, code);
        }
    }

    if args.dot {
        println!("{}", tree);
    }

    if args.verify {
        for (line_num, line) in open()?.lines().enumerate() {
            let line = line.context("read line")?;
            let bits = encode_text(encoder.codes(), &line)?;
            let decoded: String = decode_bits(&tree, &bits)?.into_iter().collect();
            if decoded != line {
                bail!("line {} does not survive the round trip", line_num + 1);
            }
        }
        println!("verify: ok");
    }

    Ok(())
}
