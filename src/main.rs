extern crate clap;
extern crate log;
extern crate simplelog;
extern crate splay_memo;

use clap::Parser;
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use splay_memo::bench;
use splay_memo::config::BenchConfig;
use splay_memo::Result;
use std::io;
use std::process;

fn try_main(config: &BenchConfig) -> Result<()> {
    let level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::init(level, Config::default())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    bench::run(config, &mut out)?;
    Ok(())
}

fn main() {
    let config = BenchConfig::parse();
    if let Err(error) = try_main(&config) {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}
