//! Prints a lattice multiplication lesson to the terminal.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example walkthrough -- 321 12
//! ```
//!
//! Print every step at once, or restore a shared link:
//!
//! ```sh
//! cargo run --example walkthrough -- 4321 98 --all
//! cargo run --example walkthrough -- --query '?a=99&b=99&step=9'
//! ```
//!
//! Set `RUST_LOG=debug` to see playback transitions.

use std::{fmt::Write as _, time::Duration};

use clap::Parser;
use lattice_app::{
    Action, DisplayMode, EnglishCatalog, Frame, Host, LatticeApp, MemoryClipboard, RenderSurface,
    Settings, StepView, build_version,
};
use lattice_core::{Position, Slot};
use lattice_lesson::Step;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number written along the top of the grid.
    multiplicand: Option<String>,

    /// Number written down the right side of the grid.
    multiplier: Option<String>,

    /// Print every step instead of playing them one by one.
    #[arg(long)]
    all: bool,

    /// Restore a session from a share link or query string.
    #[arg(long, value_name = "URL")]
    query: Option<String>,
}

#[derive(Debug, Default)]
struct TextSurface {
    last_label: Option<String>,
}

impl RenderSurface for TextSurface {
    fn render(&mut self, frame: &Frame) {
        match frame {
            Frame::NoSolution => {
                println!("(enter two positive integers to see a solution)");
            }
            Frame::Lesson { views, .. } => {
                for view in views {
                    // Autoplay re-renders the same step until it advances.
                    if self.last_label.as_ref() == Some(&view.label) {
                        continue;
                    }
                    print_view(view);
                    self.last_label = Some(view.label.clone());
                }
            }
        }
    }
}

fn print_view(view: &StepView) {
    println!("{}: {}", view.label, view.narration);
    println!("{}", draw(&view.step));
}

fn draw(step: &Step) -> String {
    let m = step.multiplicand.len();
    let n = step.multiplier.len();
    let mut out = String::new();

    // Carries above the multiplicand
    let _ = write!(out, "    ");
    for carry in &step.carry_top {
        let _ = write!(out, "{:^5}", slot_text(carry));
    }
    out.push('\n');

    let _ = write!(out, "    ");
    for digit in &step.multiplicand {
        let _ = write!(out, "{:^5}", slot_text(digit));
    }
    out.push('\n');

    let Some(lattice) = &step.lattice else {
        for digit in &step.multiplier {
            let _ = writeln!(out, "    {}{}", " ".repeat(5 * m), slot_text(digit));
        }
        return out;
    };

    let rule = format!("    +{}", "----+".repeat(m));
    out.push_str(&rule);
    out.push('\n');
    for row in 0..n {
        let _ = write!(out, "{:>3} |", slot_text(&step.totals_left[row]));
        for col in 0..m {
            let cell = match lattice.get(Position::new(col, row)) {
                Some(Slot::Revealed(cell)) => format!("{}/{}", cell.tens, cell.ones),
                _ => " / ".to_owned(),
            };
            let _ = write!(out, "{cell:^4}|");
        }
        let carry = step.carry_right.get(row).map(slot_text).unwrap_or_default();
        let _ = writeln!(out, " {} {carry}", slot_text(&step.multiplier[row]));
        out.push_str(&rule);
        out.push('\n');
    }

    let _ = write!(out, "    ");
    for total in &step.totals_bottom {
        let _ = write!(out, "{:^5}", slot_text(total));
    }
    out.push('\n');

    if let Slot::Revealed(product) = &step.solution {
        let _ = writeln!(out, "    = {product}");
    }
    out
}

fn slot_text<T: ToString>(slot: &Slot<T>) -> String {
    slot.as_revealed().map(ToString::to_string).unwrap_or_default()
}

fn main() {
    better_panic::install();
    env_logger::init();
    log::info!("lattice walkthrough {}", build_version());

    let args = Args::parse();
    let settings = Settings::default();
    let interval = settings.playback.interval;
    let mut app = match &args.query {
        Some(query) => LatticeApp::from_query(settings, query),
        None => LatticeApp::new(settings),
    };
    if let Some(text) = args.multiplicand {
        app.request(Action::SetMultiplicand(text));
    }
    if let Some(text) = args.multiplier {
        app.request(Action::SetMultiplier(text));
    }

    let mut surface = TextSurface::default();
    let mut clipboard = MemoryClipboard::default();
    let mut host = Host {
        surface: &mut surface,
        translator: &EnglishCatalog,
        clipboard: &mut clipboard,
    };

    if args.all {
        app.request(Action::SetDisplayMode(DisplayMode::AllSteps));
        app.update(Duration::ZERO, &mut host);
        return;
    }

    app.request(Action::ToggleAutoplay);
    app.update(Duration::ZERO, &mut host);
    // Simulated clock: one update per autoplay interval.
    while app.next_deadline().is_some() {
        app.update(interval, &mut host);
    }

    app.request(Action::Share);
    app.update(Duration::ZERO, &mut host);
    if let Some(url) = &clipboard.contents {
        println!("Share: {url}");
    }
}
