use spv_relay_core::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let (config, args) = cli::get_configuration_from_cli();
    tracing::debug!("Running {:?} on {}", args.command, config.relay.network);

    let report = cli::run(&config, &args.command)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
