use anyhow::Result;
use segconv::convert;
use std::{env, path::Path, process};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <type_label> <input.csv> <output.json>", args[0]);
        process::exit(1);
    }
    let type_label = &args[1];
    let input = Path::new(&args[2]);
    let output = Path::new(&args[3]);

    let stats = convert::convert(type_label, input, output)?;
    info!(
        rows_read = stats.rows_read,
        segments = stats.segments,
        output = %output.display(),
        "conversion complete"
    );

    Ok(())
}
