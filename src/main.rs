use clap::{arg, command, value_parser, ArgAction, ArgMatches, Command};
use text_huffman::{huffman, Encoding, HuffError};

fn main() -> anyhow::Result<()> {
    let encoding_arg = || {
        arg!(-e --encoding <ENCODING> "Text encoding of the uncompressed file")
            .required(false)
            .value_parser(Encoding::NAMES)
            .default_value("utf8")
    };

    let matches = command!()
        .arg(
            arg!(-v --verbosity <LEVEL> "Log verbosity, 0 (errors) to 4 (trace)")
                .required(false)
                .value_parser(value_parser!(u64))
                .default_value("1"),
        )
        .arg(arg!(-q --quiet "Silence all logging").action(ArgAction::SetTrue))
        .subcommand_required(true)
        .subcommand(
            Command::new("compress")
                .arg(arg!(input: <INPUT> "Text file to compress"))
                .arg(arg!(output: <OUTPUT> "Compressed output path"))
                .arg(encoding_arg()),
        )
        .subcommand(
            Command::new("decompress")
                .arg(arg!(input: <INPUT> "Compressed file"))
                .arg(arg!(output: <OUTPUT> "Restored text output path"))
                .arg(encoding_arg()),
        )
        .subcommand(Command::new("inspect").arg(arg!(artifact: <ARTIFACT> "Compressed file")))
        .get_matches();

    let verbosity = *matches.get_one::<u64>("verbosity").unwrap() as usize;
    let quiet = *matches.get_one::<bool>("quiet").unwrap_or(&false);
    stderrlog::new()
        .module(module_path!())
        .verbosity(verbosity)
        .quiet(quiet)
        .init()?;

    match matches.subcommand() {
        Some(("compress", matches)) => compress(matches),
        Some(("decompress", matches)) => decompress(matches),
        Some(("inspect", matches)) => inspect(matches),
        _ => unreachable!("subcommand is required"),
    }
}

fn encoding(matches: &ArgMatches) -> anyhow::Result<Encoding> {
    Ok(matches.get_one::<String>("encoding").unwrap().parse()?)
}

fn compress(matches: &ArgMatches) -> anyhow::Result<()> {
    let input = matches.get_one::<String>("input").unwrap();
    let output = matches.get_one::<String>("output").unwrap();

    let summary = match text_huffman::compress_file(input, output, encoding(matches)?) {
        Err(HuffError::EmptyInput) => {
            println!("EMPTY FILE");
            return Ok(());
        }
        result => result?,
    };

    println!("\nCompression Summary:");
    println!("Input File: {input}");
    println!("Output File: {output}");
    println!("{summary}");
    Ok(())
}

fn decompress(matches: &ArgMatches) -> anyhow::Result<()> {
    let input = matches.get_one::<String>("input").unwrap();
    let output = matches.get_one::<String>("output").unwrap();

    text_huffman::decompress_file(input, output, encoding(matches)?)?;
    println!("Decompression complete → {output}");
    Ok(())
}

fn inspect(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches.get_one::<String>("artifact").unwrap();
    let report = text_huffman::inspect(&std::fs::read(path)?)?;

    println!("Distinct symbols: {}", report.distinct_symbols);
    println!("Total symbols: {}", report.total_symbols);
    println!(
        "Encoded bits: {} ({} bytes)",
        report.bit_count, report.packed_bytes
    );
    println!("Codes:");
    huffman::print_code_table(&report.codes);
    Ok(())
}
