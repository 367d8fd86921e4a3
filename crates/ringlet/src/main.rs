use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use owo_colors::{OwoColorize, Stream};
use std::path::{Path, PathBuf};

use libringlet::{ring, Appearance, ThemeColor, ThemeSettings, SETTINGS_FILE_NAME};

#[derive(Parser, Debug, Clone)]
#[command(about = "Ringlet, a theme ring color generator", long_about = None)]
#[command(version, about, long_about = None)]
struct Args {
    #[clap(long, global = true, default_value = "auto")]
    color: Color,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Color {
    Always,
    Auto,
    Never,
}

impl Color {
    fn init(self) {
        // Set a supports-color override based on the variable passed in.
        match self {
            Color::Always => owo_colors::set_override(true),
            Color::Auto => {}
            Color::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum Theme {
    Zinc,
    Red,
    Rose,
    Orange,
    Green,
    Blue,
    Yellow,
    Violet,
}

impl From<Theme> for ThemeColor {
    fn from(theme: Theme) -> ThemeColor {
        match theme {
            Theme::Zinc => ThemeColor::Zinc,
            Theme::Red => ThemeColor::Red,
            Theme::Rose => ThemeColor::Rose,
            Theme::Orange => ThemeColor::Orange,
            Theme::Green => ThemeColor::Green,
            Theme::Blue => ThemeColor::Blue,
            Theme::Yellow => ThemeColor::Yellow,
            Theme::Violet => ThemeColor::Violet,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Derive the ring color for a CSS color value
    Ring {
        color: String,
        /// Mix ratio toward black; 0 is black, 1 keeps original brightness
        #[arg(long, default_value_t = ring::DEFAULT_MIX_RATIO)]
        ratio: f64,
        /// Returned verbatim for unrecognized inputs
        #[arg(long, default_value = ring::DEFAULT_FALLBACK)]
        fallback: String,
    },
    /// Print the CSS variable blocks for the project's theme
    Css {
        #[arg(default_value = ".")]
        working_dir: PathBuf,
        /// Ignore ringlet.yaml and use a named theme
        #[arg(long)]
        theme: Option<Theme>,
        #[arg(long, default_value = ":root")]
        selector: String,
    },
}

fn main() {
    let args = Args::parse();
    args.color.init();

    let result = match args.command {
        Some(Commands::Ring {
            color,
            ratio,
            fallback,
        }) => {
            print_ring(&ring::derive(&color, ratio, &fallback));
            Ok(())
        }
        Some(Commands::Css {
            working_dir,
            theme,
            selector,
        }) => print_css(&working_dir, theme, &selector),
        None => {
            Args::command().print_help().unwrap();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        println!("{:?}", e);
        std::process::exit(1);
    }
}

fn print_ring(derived: &str) {
    match rgb_channels(derived) {
        Some([r, g, b]) => {
            let swatch = "██".if_supports_color(Stream::Stdout, |text| text.truecolor(r, g, b));
            println!("{} {}", swatch, derived);
        }
        None => println!("{}", derived),
    }
}

fn print_css(
    working_dir: &Path,
    theme: Option<Theme>,
    selector: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings_for(working_dir, theme)?;

    print!("{}", settings.generate_css(selector, Appearance::Light));
    println!();
    print!("{}", settings.generate_css(".dark", Appearance::Dark));

    Ok(())
}

/// An explicit `--theme` bypasses the settings file entirely, including
/// any accent override it carries.
fn settings_for(
    working_dir: &Path,
    theme: Option<Theme>,
) -> Result<ThemeSettings, Box<dyn std::error::Error>> {
    match theme {
        Some(theme) => Ok(ThemeSettings::for_theme(theme.into())),
        None => load_settings(working_dir),
    }
}

/// Reads `ringlet.yaml` from the working directory, falling back to the
/// default settings when the file doesn't exist.
fn load_settings(working_dir: &Path) -> Result<ThemeSettings, Box<dyn std::error::Error>> {
    let path = working_dir.join(SETTINGS_FILE_NAME);

    if !path.exists() {
        return Ok(ThemeSettings::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    Ok(ThemeSettings::from_yaml(&contents)?)
}

/// Pulls the channels out of an `rgb(R G B)` string for the swatch.
fn rgb_channels(color: &str) -> Option<[u8; 3]> {
    let inner = color.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split_whitespace();

    let r = parts.next()?.parse().ok()?;
    let g = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;

    match parts.next() {
        Some(_) => None,
        None => Some([r, g, b]),
    }
}
