use anyhow::{bail, Context};
use log::{debug, info, warn};
use pbr::ProgressBar;
use std::fs;
use std::io::{self, stderr, Write};
use std::path::{Path, PathBuf};
use structopt::StructOpt;

use rust_dbgasm::read::ReadSource;
use rust_dbgasm::{assemble, defs, eulerian_walk, gfa_output, seq_output, utils, Assembly, DeBruijnGraph, WalkStrategy};

#[derive(Debug, StructOpt)]
#[structopt(name = "rust-dbgasm", about = "Genome assembly from k-mers or read pairs along an Eulerian path of the de Bruijn graph")]
struct Opt {
    /// Activate debug mode
    // short and long flags (-d, --debug) will be deduced from the field's name
    #[structopt(short, long)]
    debug: bool,

    /// No progress bar
    #[structopt(short, long)]
    quiet: bool,

    /// Input file: header line `k` (single reads) or `k g` (read pairs), then one read per line
    #[structopt(parse(from_os_str))]
    reads: Option<PathBuf>,

    /// 0 for single reads, 1 for read pairs; asked on stdin if absent
    #[structopt(short, long)]
    mode: Option<u8>,

    /// Output prefix for [prefix].gfa and [prefix].fa
    #[structopt(parse(from_os_str), short, long)]
    prefix: Option<PathBuf>,

    /// Also write [prefix].graphml
    #[structopt(long)]
    graphml: bool,

    /// Use Hierholzer's algorithm instead of the greedy walk
    #[structopt(long)]
    hierholzer: bool,
}

fn prompt_mode() -> anyhow::Result<u8> {
    println!("For Single Reads type 0 \t \t \t For Paired Reads type 1");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    answer.trim().parse::<u8>().with_context(|| format!("invalid mode {:?}", answer.trim()))
}

fn with_extension(prefix: &Path, ext: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", prefix.display(), ext))
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let level = if opt.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mode = match opt.mode {
        Some(m) => m,
        None => prompt_mode()?,
    };
    let paired = match mode {
        0 => false,
        1 => true,
        m => bail!("mode must be 0 (single reads) or 1 (read pairs), got {}", m),
    };

    let filename = match opt.reads {
        Some(path) => path,
        None => {
            let default = defs::default_reads_file(paired);
            warn!("using default input file ({})", default);
            PathBuf::from(default)
        }
    };
    let strategy = if opt.hierholzer { WalkStrategy::Hierholzer } else { WalkStrategy::default() };

    let file_size = fs::metadata(&filename)
        .with_context(|| format!("error opening input file {}", filename.display()))?
        .len();
    let mut source = ReadSource::open(&filename, paired)
        .with_context(|| format!("error reading header of {}", filename.display()))?;
    let params = source.params();
    match params.gap() {
        Some(g) => info!("read pairs, k = {}, g = {}", params.k, g),
        None => info!("single reads, k = {}", params.k),
    }

    // single pass over the reads
    let mut pb = if opt.quiet { None } else { Some(ProgressBar::on(stderr(), file_size)) };
    let mut graph = DeBruijnGraph::new(params);
    while let Some(item) = source.next() {
        let (line, read) = item?;
        graph.add_read(&read, line).with_context(|| format!("in {}", filename.display()))?;
        if let Some(pb) = pb.as_mut() {
            pb.set(source.bytes_consumed());
        }
    }
    if let Some(mut pb) = pb {
        pb.finish_print("done reading reads");
    }
    info!(
        "{} nodes, {} edges, {} with outgoing edges",
        graph.node_count(),
        graph.edge_count(),
        graph.source_ids().len()
    );

    println!("\nDebruijn Graph : ");
    for line in graph.adjacency_lines() {
        println!("{}", line);
    }

    if let Some(prefix) = &opt.prefix {
        let gr = graph.to_petgraph();
        let gfa_path = with_extension(prefix, "gfa");
        info!("writing GFA to {}", gfa_path.display());
        gfa_output::output_gfa(&gr, params.k, &gfa_path)
            .with_context(|| format!("error writing {}", gfa_path.display()))?;
        if opt.graphml {
            let graphml_path = with_extension(prefix, "graphml");
            info!("writing GraphML to {}", graphml_path.display());
            seq_output::output_graphml(&gr, &graphml_path)
                .with_context(|| format!("error writing {}", graphml_path.display()))?;
        }
    } else if opt.graphml {
        warn!("--graphml needs an output prefix (-p), skipping");
    }

    let walk = eulerian_walk(graph, strategy)?;
    if walk.is_complete() {
        info!("walk of {} nodes uses every edge", walk.nodes.len());
    } else {
        info!("walk of {} nodes, {} edges left", walk.nodes.len(), walk.unused_edges);
    }
    println!("\nEulerian path : ");
    println!("{}", utils::walk_chain(&walk.nodes));

    let assembly = assemble(&walk.nodes, &params)?;
    println!("\nAssembly: ");
    match &assembly {
        Assembly::Single(genome) => println!("Genome :\n {}", genome),
        Assembly::Paired(p) => {
            if !p.is_consistent() {
                warn!("prefix and suffix genomes disagree where they overlap");
            }
            match &p.genome {
                Some(genome) => println!("Genome :\n {}", genome),
                None => {
                    warn!(
                        "walk does not span the gap: suffix genome has {} bases, {} needed to splice",
                        p.suffix.len(),
                        p.offset()
                    );
                    println!("Genome :\n ");
                }
            }
            println!("Prefix :\n {}", p.prefix);
            println!("Suffix :\n {}", p.suffix);
        }
    }
    if let Some(genome) = assembly.genome() {
        debug!("genome: {}", utils::abbreviate(genome, 60));
        info!("genome length {}", genome.len());
    }

    if let Some(prefix) = &opt.prefix {
        let fasta_path = with_extension(prefix, "fa");
        info!("writing sequences to {}", fasta_path.display());
        seq_output::output_assembly(&assembly, &fasta_path)
            .with_context(|| format!("error writing {}", fasta_path.display()))?;
    }
    Ok(())
}
