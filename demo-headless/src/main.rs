use beccs_core::report::{
    render_bar_chart, render_table, save_csv, to_csv_string, to_json_string, DEFAULT_CHART_WIDTH,
};
use beccs_core::{
    evaluate, load_input, BeccsError, BeccsResult, BiomassPreset, CalculationInput,
    CalculationResult, Fraction, MegajoulesPerKg, Tonnes, TonnesCo2PerTonne,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// BECCS energy and carbon credit calculator
#[derive(Parser, Debug)]
#[command(name = "beccs-calc")]
#[command(
    about = "Estimate energy output and carbon credits for a BECCS project",
    long_about = None
)]
struct Args {
    /// Biomass type label [default: preset name, or hardwood]
    #[arg(short, long)]
    biomass_type: Option<String>,

    /// Biomass quantity in tons
    #[arg(short, long, default_value_t = 50.0, allow_negative_numbers = true)]
    quantity: f64,

    /// Calorific value in MJ/kg [default: 18.0, or the preset's]
    #[arg(long, allow_negative_numbers = true)]
    calorific_value: Option<f64>,

    /// Moisture content in % (0-100) [default: 10, or the preset's]
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    moisture: Option<u8>,

    /// Emission factor in tCO2/ton [default: 1.76, or the preset's]
    #[arg(short, long, allow_negative_numbers = true)]
    emission_factor: Option<f64>,

    /// Capture efficiency in % (0-100)
    #[arg(
        short,
        long,
        default_value_t = 85,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    capture_efficiency: u8,

    /// Feedstock preset (hardwood, softwood, corn-stover, wheat-straw, miscanthus, algae)
    #[arg(short, long, value_parser = parse_preset)]
    preset: Option<BiomassPreset>,

    /// Read the whole input from a JSON file (fractions, e.g. 0.85)
    #[arg(
        short,
        long,
        conflicts_with_all = [
            "biomass_type",
            "quantity",
            "calorific_value",
            "moisture",
            "emission_factor",
            "capture_efficiency",
            "preset",
        ]
    )]
    input: Option<PathBuf>,

    /// Output format on stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Skip the bar chart in table output
    #[arg(long)]
    no_chart: bool,

    /// Also save the CSV export to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the feedstock presets and exit
    #[arg(long)]
    list_presets: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn parse_preset(name: &str) -> Result<BiomassPreset, String> {
    BiomassPreset::by_name(name).ok_or_else(|| {
        let known: Vec<&str> = BiomassPreset::ALL.iter().map(|p| p.name).collect();
        format!("unknown preset '{name}' (expected one of: {})", known.join(", "))
    })
}

impl Args {
    /// Assemble the calculation input from flags, a preset or a JSON file
    fn to_input(&self) -> BeccsResult<CalculationInput> {
        if let Some(path) = &self.input {
            return load_input(path);
        }

        let preset = self.preset.unwrap_or(BiomassPreset::HARDWOOD);
        let capture = Fraction::from_percent(f64::from(self.capture_efficiency));
        let mut input = CalculationInput::from_preset(&preset, Tonnes::new(self.quantity), capture);

        if let Some(biomass_type) = &self.biomass_type {
            input.biomass_type.clone_from(biomass_type);
        }
        if let Some(calorific_value) = self.calorific_value {
            input.calorific_value = MegajoulesPerKg::new(calorific_value);
        }
        if let Some(moisture) = self.moisture {
            input.moisture_content = Fraction::from_percent(f64::from(moisture));
        }
        if let Some(emission_factor) = self.emission_factor {
            input.emission_factor = TonnesCo2PerTonne::new(emission_factor);
        }
        Ok(input)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list_presets {
        for preset in BiomassPreset::ALL {
            println!("{preset}");
        }
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(exit_status(&e))
        }
    }
}

fn run(args: &Args) -> BeccsResult<()> {
    let input = args.to_input()?;
    debug!(?input, "resolved calculation input");

    let result = evaluate(&input)?;
    print!("{}", render(&result, args.format, !args.no_chart)?);

    if let Some(path) = &args.output {
        save_csv(&result, path)?;
        info!(path = %path.display(), "results saved");
    }
    Ok(())
}

fn render(result: &CalculationResult, format: OutputFormat, chart: bool) -> BeccsResult<String> {
    Ok(match format {
        OutputFormat::Table => {
            let mut out = render_table(result);
            if chart {
                out.push('\n');
                out.push_str(&render_bar_chart(result, DEFAULT_CHART_WIDTH));
            }
            out
        }
        OutputFormat::Json => {
            let mut out = to_json_string(result)?;
            out.push('\n');
            out
        }
        OutputFormat::Csv => to_csv_string(result),
    })
}

/// 2 for input the user can fix, 1 for everything else
fn exit_status(error: &BeccsError) -> u8 {
    if error.is_validation() {
        2
    } else {
        1
    }
}
