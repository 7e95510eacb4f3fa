use clap::Parser;
use soil_conductivity_core::{
    compensate_to_reference, CircuitConstants, ConductivityCalculator, ProbeGeometry,
    TEMPERATURE_COEFFICIENT_PER_C,
};

/// Soil conductivity reference report with configurable probe constants
#[derive(Parser, Debug)]
#[command(name = "demo-report")]
#[command(about = "Soil conductivity probe reference calculator", long_about = None)]
struct Args {
    /// Raw AD reading from the sensor
    #[arg(short, long, default_value_t = 394)]
    ad_reading: u32,

    /// Rod length in cm
    #[arg(long, default_value_t = 7.5)]
    rod_length: f64,

    /// Rod diameter in cm
    #[arg(long, default_value_t = 0.5)]
    rod_diameter: f64,

    /// Rod separation in cm
    #[arg(long, default_value_t = 1.1)]
    rod_separation: f64,

    /// Series resistance in ohm
    #[arg(long, default_value_t = 2200.0)]
    series_resistance: f64,

    /// AD full-scale value
    #[arg(long, default_value_t = 1023)]
    ad_full_scale: u32,

    /// Soil temperature in °C; adds a 25 °C-normalized conductivity line
    #[arg(short, long)]
    temperature: Option<f64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if args.rod_length <= 0.0
        || args.rod_diameter <= 0.0
        || args.rod_separation <= 0.0
        || args.series_resistance <= 0.0
        || args.ad_full_scale == 0
    {
        eprintln!("error: probe dimensions, series resistance and AD full scale must be positive");
        std::process::exit(2);
    }

    let geometry = ProbeGeometry::new(args.rod_length, args.rod_diameter, args.rod_separation);
    let circuit = CircuitConstants::new(args.series_resistance, args.ad_full_scale);

    let calculator = match ConductivityCalculator::new(geometry, circuit) {
        Ok(calculator) => calculator,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let measurement = match calculator.measure(args.ad_reading) {
        Ok(measurement) => measurement,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    println!("AD reading    = {}", args.ad_reading);
    println!(
        "R1            = {:.0} ohm",
        calculator.circuit().series_resistance.value()
    );
    println!(
        "Kr*1e6        = {:.3} 1/cm",
        calculator.cell_constant().value() * 1e6
    );
    println!("resistance    = {:.1} ohm", measurement.resistance.value());
    println!(
        "resistivity   = {:.1} ohm*cm",
        measurement.resistivity.value()
    );
    println!(
        "conductivity  = {:.1} uS/cm",
        measurement.conductivity.value()
    );

    if let Some(soil_temperature) = args.temperature {
        match compensate_to_reference(
            measurement.conductivity,
            soil_temperature,
            TEMPERATURE_COEFFICIENT_PER_C,
        ) {
            Ok(normalized) => {
                println!("conductivity at 25C = {:.1} uS/cm", normalized.value());
            }
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}
