use clap::Parser;
use naca_gcode::airfoil::designation::NacaDesignation;
use naca_gcode::config::{CliConfig, OutputFormat};
use naca_gcode::logging;
use naca_gcode::preview::{download_name, svg_document, PreviewFrame};
use naca_gcode::{AirfoilError, ErrorResponse, GenerateResponse};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();
    logging::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(kind = e.kind(), "{}", e);
            match serde_json::to_string(&ErrorResponse::from(&e)) {
                Ok(body) => println!("{}", body),
                Err(_) => eprintln!("{}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig) -> Result<String, AirfoilError> {
    let request = config.to_request()?;
    let validated = request.validate()?;
    let generated = validated.run()?;

    let output = match config.format {
        OutputFormat::Json => {
            let response: GenerateResponse = generated.into();
            serde_json::to_string(&response)?
        }
        OutputFormat::Gcode => {
            let designation: NacaDesignation = validated.designation;
            tracing::info!(file = %download_name(&designation), "suggested file name");
            generated.program.to_string()
        }
        OutputFormat::Svg => svg_document(&generated.outline, &PreviewFrame::default()),
    };

    Ok(output)
}
