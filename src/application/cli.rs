use crate::application::{DateRangePicker, PickerConfig};
use crate::domain::{PickerMode, generate_time_options, month_grid};
use crate::infrastructure::{EventLogger, JsonLinesObserver};
use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rangepicker")]
#[command(about = "Drive the date range picker core without a GUI")]
#[command(version)]
pub struct Cli {
    /// JSON picker config (defaults to $RANGEPICKER_CONFIG, then built-in defaults)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the initial picker state
    State,
    /// Select a single date and print the resulting notifications
    Select {
        /// Date to select (YYYY-MM-DD format)
        #[arg(short, long)]
        date: String,
    },
    /// Select a range and print the resulting notifications
    Range {
        /// Range start (YYYY-MM-DD format)
        #[arg(short, long)]
        start: String,
        /// Range end (YYYY-MM-DD format)
        #[arg(short, long)]
        end: String,
    },
    /// Click a mode button and print every indicator frame
    Animate {
        #[arg(short, long, value_enum, default_value_t = ModeArg::CustomRange)]
        to: ModeArg,
        /// Resize the track before animating
        #[arg(long)]
        track_width: Option<u32>,
    },
    /// Print the calendar grid for a month
    Grid {
        /// Any date inside the month (YYYY-MM-DD format, defaults to the visible month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Print the time selector options
    Times {
        /// Minutes between options (defaults to the configured step)
        #[arg(short, long)]
        step: Option<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Date,
    CustomRange,
}

impl From<ModeArg> for PickerMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Date => PickerMode::Date,
            ModeArg::CustomRange => PickerMode::CustomRange,
        }
    }
}

fn parse_date(text: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("Expected a YYYY-MM-DD date, got {text:?}"))
}

impl Cli {
    pub fn run() -> anyhow::Result<()> {
        env_logger::init();
        let cli = Self::parse();

        let config = match &cli.config {
            Some(path) => PickerConfig::from_path(path)?,
            None => PickerConfig::from_env()?,
        };
        let mut picker = DateRangePicker::new(config)?;
        picker.subscribe(EventLogger);

        match cli.command.unwrap_or(Commands::State) {
            Commands::State => {
                println!("{}", serde_json::to_string_pretty(&picker.state())?);
            }
            Commands::Select { date } => {
                picker.subscribe(JsonLinesObserver::stdout());
                picker.select_date(parse_date(&date)?)?;
            }
            Commands::Range { start, end } => {
                picker.subscribe(JsonLinesObserver::stdout());
                picker.select_range(parse_date(&start)?, parse_date(&end)?)?;
            }
            Commands::Animate { to, track_width } => {
                if let Some(width) = track_width {
                    picker.resize_track(width);
                }
                picker.subscribe(JsonLinesObserver::stdout());
                picker.click_mode(to.into());
                picker.finish_animation();
                println!("{}", serde_json::to_string(&picker.track_placement())?);
            }
            Commands::Grid { month } => {
                let month = match month {
                    Some(text) => parse_date(&text)?,
                    None => picker.state().visible_month,
                };
                print_grid(month)?;
            }
            Commands::Times { step } => {
                let options = match step {
                    Some(step) => generate_time_options(step),
                    None => picker.time_options(),
                };
                for option in options {
                    println!("{option}");
                }
            }
        }

        Ok(())
    }
}

fn print_grid(month: NaiveDate) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    println!("{:^27}", month.format("%B %Y").to_string());
    println!("Mo  Tu  We  Th  Fr  Sa  Su");
    for week in month_grid(month)?.chunks(7) {
        let line: Vec<String> = week
            .iter()
            .map(|date| {
                let marker = if *date == today { '*' } else { ' ' };
                if date.month() == month.month() {
                    format!("{:>2}{}", date.day(), marker)
                } else {
                    format!("{:>2}{}", "", marker)
                }
            })
            .collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}
