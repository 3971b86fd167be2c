use anyhow::Result;
use powermap::cli::{self, AuditOverrides, Commands, RankingOverrides};
use powermap::commands::{self, AuditCommandConfig, DemoConfig, RankCommandConfig};
use powermap::graph::CentralityDirection;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);
    cli::configure_colors(cli.plain);

    let config_path = cli.config;
    let settings = || commands::resolve_config(config_path.as_deref());

    match cli.command {
        Commands::Init { force } => commands::init_config(force),
        Commands::Rank {
            network,
            format,
            output,
            damping,
            tolerance,
            max_iterations,
            highlight,
            forward,
            top,
        } => {
            let overrides = RankingOverrides {
                damping,
                tolerance,
                max_iterations,
                highlight_threshold: highlight,
            };
            commands::handle_rank(RankCommandConfig {
                network,
                format,
                output,
                ranking: overrides.apply(settings()?.ranking()),
                direction: if forward {
                    CentralityDirection::Forward
                } else {
                    CentralityDirection::Reversed
                },
                top,
            })
        }
        Commands::Audit {
            series,
            format,
            output,
            consistent_below,
            anomalous_above,
            skip_invalid,
            label,
        } => {
            let overrides = AuditOverrides {
                consistent_below,
                anomalous_above,
            };
            commands::handle_audit(AuditCommandConfig {
                series,
                format,
                output,
                audit: overrides.apply(settings()?.audit()),
                skip_invalid,
                label,
            })
        }
        Commands::Demo {
            format,
            output,
            samples,
            seed,
        } => commands::handle_demo(DemoConfig {
            format,
            output,
            samples,
            seed,
            settings: settings()?,
        }),
    }
}
