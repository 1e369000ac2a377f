use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use elastic_list::{ArrayList, ListConfig, ListError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "elastic-list", about = "Replay list workloads and trace capacity")]
struct Cli {
    /// Emit trace-level events for every reallocation.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply a script of list operations, printing size and capacity after each.
    Replay {
        /// Script file (one operation per line, `#` starts a comment).
        script: PathBuf,
        /// Initial capacity of the list.
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        capacity: i64,
        /// Print the reallocation profile after the replay.
        #[arg(long)]
        profile: bool,
    },
    /// Print the capacity sequence for `count` appends to an empty list.
    Growth {
        /// Number of appends.
        count: usize,
    },
}

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Op {
    Add(String),
    AddAll(Vec<String>),
    Remove(String),
    RemoveAt(usize),
    RemoveAll(Vec<String>),
    RetainAll(Vec<String>),
    Clear,
    Get(usize),
    Set(usize, String),
    Contains(String),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Replay {
            script,
            capacity,
            profile,
        } => run_replay(script, capacity, profile)?,
        Commands::Growth { count } => run_growth(count)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_replay(script_path: PathBuf, capacity: i64, profile: bool) -> Result<()> {
    let initial_capacity = usize::try_from(capacity)
        .map_err(|_| ListError::InvalidArgument(capacity.to_string()))
        .context("invalid --capacity")?;
    let mut config = ListConfig::with_capacity(initial_capacity);
    if profile {
        config = config.with_profiling();
    }
    let mut list: ArrayList<String> = ArrayList::with_config(config);

    let reader = BufReader::new(File::open(&script_path).with_context(|| {
        format!("failed to open script {}", script_path.display())
    })?);

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let parsed = parse_op(&line)
            .with_context(|| format!("invalid operation on line {}", idx + 1))?;
        let Some(op) = parsed else {
            continue;
        };

        let outcome = apply(&mut list, &op)
            .with_context(|| format!("operation failed on line {}", idx + 1))?;

        println!(
            "line {}\t{}\tresult={}\tsize={}\tcapacity={}",
            idx + 1,
            line.trim(),
            outcome,
            list.len(),
            list.capacity()
        );
    }

    if let Some(profile) = list.take_profile() {
        println!("{}", profile.report());
    }

    Ok(())
}

fn run_growth(count: usize) -> Result<()> {
    let mut list = ArrayList::try_with_capacity(0).context("failed to create list")?;
    let mut sequence = vec![list.capacity()];

    for i in 0..count {
        list.add(i);
        if list.capacity() != sequence[sequence.len() - 1] {
            sequence.push(list.capacity());
        }
    }

    let rendered: Vec<String> = sequence.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(" -> "));
    Ok(())
}

/// Parse a script line; blank lines and comments yield `None`
fn parse_op(line: &str) -> Result<Option<Op>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    let name = fields.next().unwrap_or_default();
    let args: Vec<String> = fields.map(str::to_string).collect();

    let op = match (name, args.as_slice()) {
        ("add", [value]) => Op::Add(value.clone()),
        ("add-all", values) => Op::AddAll(values.to_vec()),
        ("remove", [value]) => Op::Remove(value.clone()),
        ("remove-at", [index]) => Op::RemoveAt(parse_index(index)?),
        ("remove-all", values) => Op::RemoveAll(values.to_vec()),
        ("retain-all", values) => Op::RetainAll(values.to_vec()),
        ("clear", []) => Op::Clear,
        ("get", [index]) => Op::Get(parse_index(index)?),
        ("set", [index, value]) => Op::Set(parse_index(index)?, value.clone()),
        ("contains", [value]) => Op::Contains(value.clone()),
        _ => bail!("unrecognized operation '{}'", line),
    };

    Ok(Some(op))
}

fn parse_index(raw: &str) -> Result<usize> {
    raw.parse()
        .with_context(|| format!("invalid index '{}'", raw))
}

/// Apply `op`, rendering its return value
fn apply(list: &mut ArrayList<String>, op: &Op) -> Result<String> {
    let outcome = match op {
        Op::Add(value) => list.add(value.clone()).to_string(),
        Op::AddAll(values) => list.add_all(values.iter().cloned()).to_string(),
        Op::Remove(value) => list.remove(value).to_string(),
        Op::RemoveAt(index) => list.remove_at(*index)?,
        Op::RemoveAll(values) => list.remove_all(values).to_string(),
        Op::RetainAll(values) => list.retain_all(values).to_string(),
        Op::Clear => {
            list.clear();
            "()".to_string()
        }
        Op::Get(index) => list.get(*index)?.clone(),
        Op::Set(index, value) => list.set(*index, value.clone())?,
        Op::Contains(value) => list.contains(value).to_string(),
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        assert_eq!(parse_op("").unwrap(), None);
        assert_eq!(parse_op("   # note").unwrap(), None);
    }

    #[test]
    fn test_parse_operations() {
        assert_eq!(parse_op("add 1").unwrap(), Some(Op::Add("1".into())));
        assert_eq!(
            parse_op("retain-all a b").unwrap(),
            Some(Op::RetainAll(vec!["a".into(), "b".into()]))
        );
        assert_eq!(parse_op("set 2 x").unwrap(), Some(Op::Set(2, "x".into())));
        assert_eq!(parse_op("clear").unwrap(), Some(Op::Clear));
        assert!(parse_op("add").is_err());
        assert!(parse_op("get -1").is_err());
        assert!(parse_op("shuffle").is_err());
    }

    #[test]
    fn test_apply_reports_results() {
        let mut list = ArrayList::try_with_capacity(4).unwrap();
        for value in ["1", "2", "3"] {
            apply(&mut list, &Op::Add(value.into())).unwrap();
        }

        assert_eq!(apply(&mut list, &Op::Remove("1".into())).unwrap(), "true");
        assert_eq!(list.capacity(), 4);
        assert_eq!(apply(&mut list, &Op::Remove("3".into())).unwrap(), "true");
        assert_eq!(list.capacity(), 2);
        assert_eq!(apply(&mut list, &Op::Get(0)).unwrap(), "2");
        assert!(apply(&mut list, &Op::Get(5)).is_err());
    }
}
