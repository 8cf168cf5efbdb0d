mod error;
mod host;
mod terminal;

use std::fs::{self, File};
use std::time::Duration;

use choices::model::{ElementKind, GroupSpec, OptionSpec, PassedElement};
use choices::{ChoicesBuilder, Options};
use crossterm::event::{
    self as term, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use pickdom::{Event, FocusTarget};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::AppError;
use crate::host::TerminalHost;
use crate::terminal::Terminal;

const FRAME: Duration = Duration::from_millis(16);
const IDLE: Duration = Duration::from_millis(250);

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> Result<(), AppError> {
    let log_file = File::create("choices-tui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut args = std::env::args().skip(1);
    let kind = match args.next().as_deref() {
        None | Some("select-multiple") => ElementKind::SelectMultiple,
        Some("select-one") => ElementKind::SelectOne,
        Some("text") => ElementKind::Text,
        Some(other) => return Err(AppError::UnknownKind(other.to_string())),
    };
    let options = match args.next() {
        Some(path) => Options::from_json(&fs::read_to_string(path)?)?,
        None => demo_options(kind),
    };

    let remove_buttons = options.remove_item_button;
    let mut terminal = Terminal::new()?;
    let host = TerminalHost::new(format!("choices ({kind})"), remove_buttons)?;
    let mut picker = ChoicesBuilder::new(demo_element(kind))
        .options(options)
        .on_change(|value| log::info!("changed: {value}"))
        .build(host)?;
    picker.handle_event(&Event::Focus {
        target: FocusTarget::Input,
    });

    loop {
        picker.host_mut().draw(terminal.stdout())?;

        let timeout = if picker.is_animating() { FRAME } else { IDLE };
        if term::poll(timeout)? {
            match term::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    let quit = key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'));
                    if quit {
                        break;
                    }
                    picker.handle_event(&Event::from(key));
                }
                TermEvent::Mouse(mouse) => {
                    let hit = picker.host().hit_test(mouse.column, mouse.row);
                    match mouse.kind {
                        MouseEventKind::Down(_) => {
                            picker.handle_event(&Event::MouseDown {
                                hit,
                                modifiers: mouse.modifiers.into(),
                            });
                        }
                        MouseEventKind::Moved => {
                            picker.handle_event(&Event::MouseOver { hit });
                        }
                        _ => {}
                    }
                }
                TermEvent::Paste(text) => {
                    picker.handle_event(&Event::Paste { text });
                }
                TermEvent::FocusGained => {
                    picker.handle_event(&Event::Focus {
                        target: FocusTarget::Input,
                    });
                }
                TermEvent::FocusLost => {
                    picker.handle_event(&Event::Blur {
                        target: FocusTarget::Input,
                    });
                }
                TermEvent::Resize(width, height) => picker.host_mut().resize(width, height),
                _ => {}
            }
        }
        picker.tick();
    }

    picker.destroy();
    Ok(())
}

fn demo_element(kind: ElementKind) -> PassedElement {
    match kind {
        ElementKind::Text => PassedElement::text(),
        ElementKind::SelectOne | ElementKind::SelectMultiple => {
            let mut element = if kind == ElementKind::SelectOne {
                PassedElement::select_one(vec![])
            } else {
                PassedElement::select_multiple(vec![])
            };
            element.groups = vec![
                GroupSpec::new(
                    "Europe",
                    vec![
                        OptionSpec::new("nl").label("Netherlands"),
                        OptionSpec::new("de").label("Germany"),
                        OptionSpec::new("fr").label("France"),
                        OptionSpec::new("no").label("Norway"),
                    ],
                ),
                GroupSpec::new(
                    "Asia",
                    vec![
                        OptionSpec::new("jp").label("Japan"),
                        OptionSpec::new("kr").label("South Korea"),
                        OptionSpec::new("np").label("Nepal").disabled(),
                    ],
                ),
                GroupSpec::new(
                    "Americas",
                    vec![
                        OptionSpec::new("ca").label("Canada"),
                        OptionSpec::new("br").label("Brazil"),
                        OptionSpec::new("pe").label("Peru"),
                    ],
                ),
            ];
            element
        }
    }
}

fn demo_options(kind: ElementKind) -> Options {
    let options = Options {
        remove_item_button: true,
        ..Options::default()
    };
    match kind {
        ElementKind::Text => Options {
            max_item_count: Some(5),
            duplicate_items: false,
            ..options
        },
        _ => options,
    }
}
