mod config;

use anyhow::Context;
use clap::Parser;
use config::{Cli, Command, Config};
use vector2d::vector::direction::DIRECTIONS;
use vector2d::{axes, capability, dir, Vector, Vector2D};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .init();

    log::debug!("Starting vector2d v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Configuration: {:?}", config);

    run(cli.command, &config)
}

fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    let p = config.precision;
    match command {
        Command::Inspect { vector } => {
            println!("vector      {}", vector);
            for (name, value) in vector.pairs() {
                println!("{:<11} {:.p$}", name, value);
            }
            println!("length      {:.p$}", vector.length());
            println!("length2     {:.p$}", vector.length_squared());
            println!("angle       {:.p$}", vector.angle());
            println!("normalized  {}", vector.normalized());
            println!("inverse     {}", vector.inverse());
            println!("floor       {}", vector.floor());
            println!("ceil        {}", vector.ceil());
        }
        Command::Rotate { vector, angle } => {
            log::debug!("Rotating {} by {} rad", vector, angle);
            println!("{}", vector.rotated(angle));
        }
        Command::Angled { vector, angle } => {
            println!("{}", vector.angled(angle));
        }
        Command::Trim { vector, max_length } => {
            println!("{}", vector.trim(max_length));
        }
        Command::Divide { dividend, divisor } => {
            let quotient = (&dividend / &divisor)
                .with_context(|| format!("Failed to divide {} by {}", dividend, divisor))?;
            println!("{}", quotient);
        }
        Command::Dir { name } => {
            let v: Vector2D = dir(&name);
            if !DIRECTIONS.contains_key(name.as_str()) {
                log::warn!("Unknown direction `{}`, using zero vector", name);
            }
            println!("{}", v);
        }
        Command::Axes { order } => {
            for (index, axis) in axes(order) {
                println!("{} {}", index, axis);
            }
        }
        Command::Info => {
            println!(
                "vector2d v{} ({} representation)",
                env!("CARGO_PKG_VERSION"),
                capability::ACTIVE
            );
        }
    }
    Ok(())
}
