use std::env;
use std::fs;
use std::process;

use wordsync::{
    build_timeline, ClockMode, HighlightSettings, PlaybackSession, Project, TimelineObserver,
};

fn usage() -> ! {
    eprintln!("Usage: wordsync <project.yaml> [--preset NAME] [--simulate]");
    eprintln!("       presets: natural, readable, rhythmic, teleprompter, fixed");
    process::exit(1);
}

fn preset_by_name(name: &str) -> Option<HighlightSettings> {
    match name {
        "natural" => Some(HighlightSettings::natural()),
        "readable" => Some(HighlightSettings::readable()),
        "rhythmic" => Some(HighlightSettings::rhythmic(120.0, 4)),
        "teleprompter" => Some(HighlightSettings::teleprompter()),
        "fixed" => Some(HighlightSettings::fixed(0.5)),
        _ => None,
    }
}

/// Prints fired events with the word texts they refer to.
struct ConsoleObserver<'a> {
    project: &'a Project,
}

impl ConsoleObserver<'_> {
    fn word_text(&self, clip_index: usize, word_index: usize) -> &str {
        self.project
            .clips
            .get(clip_index)
            .and_then(|c| c.words.get(word_index))
            .map(|w| w.text.as_str())
            .unwrap_or("?")
    }
}

impl TimelineObserver for ConsoleObserver<'_> {
    fn on_clip_start(&mut self, clip_index: usize) {
        println!("clip {} start", clip_index);
    }

    fn on_clip_end(&mut self, clip_index: usize) {
        println!("clip {} end", clip_index);
    }

    fn on_word_start(&mut self, clip_index: usize, word_index: usize) {
        println!("  word start     {}", self.word_text(clip_index, word_index));
    }

    fn on_word_end(&mut self, clip_index: usize, word_index: usize) {
        println!("  word end       {}", self.word_text(clip_index, word_index));
    }

    fn on_highlight_end(&mut self, clip_index: usize, word_index: usize) {
        println!("  highlight end  {}", self.word_text(clip_index, word_index));
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let mut input_path: Option<&String> = None;
    let mut settings = HighlightSettings::natural();
    let mut simulate = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--preset" => {
                let Some(name) = args.get(i + 1) else {
                    usage();
                };
                settings = match preset_by_name(name) {
                    Some(settings) => settings,
                    None => {
                        eprintln!("Unknown preset '{}'", name);
                        usage();
                    }
                };
                i += 2;
            }
            "--simulate" => {
                simulate = true;
                i += 1;
            }
            _ => {
                if input_path.is_some() {
                    usage();
                }
                input_path = Some(&args[i]);
                i += 1;
            }
        }
    }

    let Some(input_path) = input_path else {
        usage();
    };

    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    let project = match Project::from_yaml(&source) {
        Ok(project) => project,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if simulate {
        run_simulation(&project, settings);
    } else {
        print_timeline(&project, &settings);
    }
}

fn print_timeline(project: &Project, settings: &HighlightSettings) {
    let timeline = build_timeline(project, settings);
    println!(
        "{} events over {:.3}s",
        timeline.len(),
        timeline.end_time()
    );
    for event in timeline.events() {
        match event.word_index {
            Some(word_index) => println!(
                "{:10.3}  {:<12}  clip {}  word {}",
                event.time,
                format!("{:?}", event.kind),
                event.clip_index,
                word_index
            ),
            None => println!(
                "{:10.3}  {:<12}  clip {}",
                event.time,
                format!("{:?}", event.kind),
                event.clip_index
            ),
        }
    }
}

fn run_simulation(project: &Project, settings: HighlightSettings) {
    let mut session = PlaybackSession::new(
        project,
        settings,
        ClockMode::FreeRunning {
            tick_interval: 1.0 / 60.0,
        },
    );
    let mut observer = ConsoleObserver { project };

    session.start();
    while session.is_running() {
        for event in session.tick() {
            event.dispatch(&mut observer);
        }
    }
    println!("finished at {:.3}s", session.current_time());
}
