use clap::{Parser, Subcommand};
use vector2d::{AxisOrder, Vector2D};

#[derive(Debug, Clone)]
pub struct Config {
    pub precision: usize,
    pub log_level: log::LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: 4,
            log_level: log::LevelFilter::Info,
        }
    }
}

#[derive(Parser)]
#[command(name = "vector2d")]
#[command(about = "Evaluate 2D vector operations", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Decimal places for printed scalars
    #[arg(short, long, default_value = "4")]
    pub precision: usize,

    /// Quiet mode
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print every derived property of a vector
    Inspect {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector2D,
    },
    /// Rotate a vector by an angle in radians
    Rotate {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector2D,
        #[arg(allow_hyphen_values = true)]
        angle: f64,
    },
    /// Point a vector at an absolute angle in radians, keeping its length
    Angled {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector2D,
        #[arg(allow_hyphen_values = true)]
        angle: f64,
    },
    /// Cap the length of a vector
    Trim {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        vector: Vector2D,
        max_length: f64,
    },
    /// Componentwise division
    Divide {
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        dividend: Vector2D,
        #[arg(value_parser = parse_vector, allow_hyphen_values = true)]
        divisor: Vector2D,
    },
    /// Look up a named unit direction
    Dir { name: String },
    /// List the axes in traversal order
    Axes {
        #[arg(short, long, default_value = "yx")]
        order: AxisOrder,
    },
    /// Show the storage representation this build uses
    Info,
}

/// Parses `X,Y` into a vector.
fn parse_vector(s: &str) -> Result<Vector2D, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err(format!("Vector must be in format X,Y, got: {}", s));
    }

    let x: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| format!("Invalid x: {}", parts[0]))?;
    let y: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| format!("Invalid y: {}", parts[1]))?;

    Ok(Vector2D::new(x, y))
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Config::default();
        config.precision = cli.precision.min(16);
        config.log_level = if cli.quiet {
            log::LevelFilter::Error
        } else if cli.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Info
        };
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector() {
        assert_eq!(parse_vector("3,4").unwrap(), Vector2D::new(3.0, 4.0));
        assert_eq!(parse_vector("-1.5, 2").unwrap(), Vector2D::new(-1.5, 2.0));
        assert!(parse_vector("invalid").is_err());
        assert!(parse_vector("3").is_err());
        assert!(parse_vector("1,2,3").is_err());
        assert!(parse_vector("a,2").is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["vector2d", "-v", "rotate", "1,0", "-1.5"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Rotate { vector, angle } => {
                assert_eq!(vector, Vector2D::new(1.0, 0.0));
                assert_eq!(angle, -1.5);
            }
            _ => panic!("expected rotate"),
        }

        let cli = Cli::try_parse_from(["vector2d", "axes", "--order", "xy"]).unwrap();
        assert!(matches!(cli.command, Command::Axes { order: AxisOrder::XY }));
        assert!(Cli::try_parse_from(["vector2d", "axes", "--order", "zz"]).is_err());
    }

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::try_parse_from(["vector2d", "-q", "-p", "40", "info"]).unwrap();
        let config = Config::from_cli(&cli);
        assert_eq!(config.log_level, log::LevelFilter::Error);
        assert_eq!(config.precision, 16);
    }
}
