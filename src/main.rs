//! Ambience - procedural background loop generator

use ambience::config::{self, OutputPath};
use ambience::{engine, GeneratorConfig};
use anyhow::Result;
use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Commands::Generate {
            config: config_path,
            output,
        } => {
            let mut cfg = match config_path {
                Some(path) => {
                    log::info!("loading configuration from {:?}", path);
                    config::load_config(&path)?
                }
                None => GeneratorConfig::default(),
            };
            if let Some(output) = output {
                cfg.output = OutputPath(output);
            }

            let report = engine::render(&cfg)?;
            println!("{}", report);
        }

        Commands::Check {
            config: config_path,
        } => {
            println!("Checking configuration at {:?}...", config_path);

            match config::load_config(&config_path) {
                Ok(cfg) => {
                    println!("Configuration is valid!");
                    println!("  Sample rate: {} Hz", cfg.audio.sample_rate);
                    println!(
                        "  Duration: {:?}s ({} frames)",
                        cfg.audio.duration,
                        cfg.frame_count()
                    );
                    println!("  Harmonics: {:?} Hz", cfg.harmonics.frequencies);
                    println!("  Amplitude: {:.0}%", cfg.harmonics.amplitude * 100.0);
                    println!(
                        "  Fade: {} samples ({:?})",
                        cfg.fade_len(),
                        cfg.envelope.mode
                    );
                    println!("  Quantize: {:?}", cfg.quantize);
                    println!("  Output: {}", cfg.output.display());
                }
                Err(e) => {
                    println!("Configuration is invalid: {:#}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Init => {
            let path = "ambience.yaml";
            if std::path::Path::new(path).exists() {
                println!("ambience.yaml already exists. Not overwriting.");
            } else {
                std::fs::write(path, config::EXAMPLE_CONFIG)?;
                println!("Created ambience.yaml with example configuration.");
            }
        }
    }

    Ok(())
}
