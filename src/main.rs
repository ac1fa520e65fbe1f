/*!
    Program that writes a batch of uniformly distributed pseudo-random
    unsigned integers to a text file or to standard output, prefixed with
    a header line recording the count and the inclusive bounds.
 ```
Usage:
   numgen [-h|--help] [-l a,b|--limits=a,b] [-o path|--ofile path] [count]
where:
   -l a,b  - inclusive bounds for generated numbers; malformed values
             silently fall back to the full range 0,2^64-1
   -o path - output file (overwritten); standard output when omitted
   count   - how many numbers to generate, 1000 by default
```
   Output format: `<count> <lower> <upper>` on the first line, then the
   numbers space separated on the second line.
 */

#[macro_use] extern crate anyhow;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};

use anyhow::Result;
use clap::Parser;

mod cli;
mod emit;

use cli::{Cli, GenerationConfig};

/// Program main function.
fn main() -> Result<()> {
    let config = GenerationConfig::resolve(Cli::parse());
    let mut rng = rand::thread_rng();

    match &config.output {
        Some(path) => {
            let file = match File::create(path) {
                Ok(f) => f,
                Err(e) => bail!("Cannot open output file {}: {}", path.display(), e),
            };
            let mut out = BufWriter::new(file);
            emit::emit(&config, &mut rng, &mut out)?;
            out.flush()?;
            // file handle released here, even on a failed write
        }
        None => {
            let stdout = stdout();
            let mut out = BufWriter::new(stdout.lock());
            emit::emit(&config, &mut rng, &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}
