#[macro_use]
extern crate log;

use clap::{App, AppSettings, Arg, ArgMatches, ErrorKind};
use pfsp_gantt::parser::{load_instance, load_permutations};
use pfsp_gantt::render::{PngRenderer, Renderer, TerminalRenderer};
use pfsp_gantt::schedule::Timing;
use pfsp_gantt::viewer::{build_charts, show_charts, Config};
use std::error::Error;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process;

const EXIT_USAGE: i32 = 2;

fn app() -> App<'static, 'static> {
  App::new("pfsp-gantt")
    .version("1.0")
    .about("Gantt charts viewer for permutation flow-shop schedules")
    .setting(AppSettings::ArgRequiredElseHelp)
    .arg(
      Arg::with_name("instance")
        .short("i")
        .long("instance")
        .value_name("FILE")
        .help("Processing times, one row per machine and one column per job")
        .takes_value(true)
        .required(true),
    )
    .arg(
      Arg::with_name("permutations")
        .short("p")
        .long("permutations")
        .value_name("FILE")
        .help("Load permutations from file, one per line; a random one is used otherwise")
        .takes_value(true),
    )
    .arg(
      Arg::with_name("save")
        .short("s")
        .long("save")
        .help("Save gantt charts in the PNG format instead of displaying them"),
    )
    .arg(
      Arg::with_name("output-dir")
        .short("o")
        .long("output-dir")
        .value_name("DIR")
        .help("Directory saved charts are written to [default: .]")
        .takes_value(true),
    )
    .arg(
      Arg::with_name("seed")
        .long("seed")
        .help("Seed for the job colors and the random permutation")
        .takes_value(true),
    )
    .arg(
      Arg::with_name("no-wait")
        .long("no-wait")
        .help("Schedule every job without waiting between machines"),
    )
    .arg(
      Arg::with_name("records")
        .long("records")
        .help("Print the machine,start,finish,job records of every chart"),
    )
}

fn main() {
  env_logger::init();

  let matches = match app().get_matches_safe() {
    Ok(matches) => matches,
    Err(e) => match e.kind {
      ErrorKind::HelpDisplayed
      | ErrorKind::VersionDisplayed
      | ErrorKind::MissingArgumentOrSubcommand => {
        println!("{}", e.message);
        process::exit(0);
      }
      _ => {
        eprintln!("{}", e.message);
        process::exit(EXIT_USAGE);
      }
    },
  };

  if let Err(e) = run(&matches) {
    eprintln!("error: {}", e);
    process::exit(EXIT_USAGE);
  }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
  let instance_file = matches.value_of("instance").ok_or("Missing instance file")?;
  let seed = match matches.value_of("seed") {
    Some(seed) => Some(
      seed
        .parse()
        .map_err(|e| format!("invalid seed {:?}: {}", seed, e))?,
    ),
    None => None,
  };
  let config = Config {
    seed: seed,
    timing: if matches.is_present("no-wait") {
      Timing::NoWait
    } else {
      Timing::Permutation
    },
  };

  let instance = load_instance(Path::new(instance_file))?;
  let permutations = match matches.value_of("permutations") {
    Some(file) => Some(load_permutations(Path::new(file), instance.n_jobs)?),
    None => None,
  };

  let charts = build_charts(&instance, permutations, &config);

  let mut renderer: Box<dyn Renderer> = if matches.is_present("save") {
    let output_dir = matches.value_of("output-dir").unwrap_or(".");
    Box::new(PngRenderer::new(Path::new(output_dir)))
  } else {
    let stdout = io::stdout();
    let ansi_colors = stdout.is_terminal();
    Box::new(TerminalRenderer::new(stdout, ansi_colors))
  };

  let mut stdout = io::stdout();
  let records: Option<&mut dyn Write> = if matches.is_present("records") {
    Some(&mut stdout)
  } else {
    None
  };

  show_charts(&charts, renderer.as_mut(), records)?;
  info!("Rendered {} charts", charts.len());
  Ok(())
}
