extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::error;
use crate::lang::{Error, Script};
use crate::mach::{Backend, Event, Runtime, Settings, Var};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::Path;
use std::process::Command;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

mod trace;
pub use trace::TraceBackend;

/// Runs the script at `path` to completion. Returns the process exit code.
pub fn main(path: &Path, settings: Settings, backend: &mut dyn Backend) -> i32 {
    let script = match load(path) {
        Ok(script) => script,
        Err(error) => {
            report(&error);
            return 1;
        }
    };
    info!(
        "loaded {} lines and {} labels from {}",
        script.len(),
        script.labels().len(),
        path.display()
    );
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let mut runtime = Runtime::new(script, settings, Var::new());
    match main_loop(&mut runtime, backend, interrupted) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    }
}

fn main_loop(
    runtime: &mut Runtime,
    backend: &mut dyn Backend,
    interrupted: Arc<AtomicBool>,
) -> std::io::Result<i32> {
    let mut input: Option<Interface<DefaultTerminal>> = None;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Stopped => {
                info!("stopped at line {}", runtime.pc());
                return Ok(0);
            }
            Event::Running => {}
            Event::Print(s) => {
                let mut stdout = std::io::stdout();
                stdout.write_all(s.as_bytes())?;
                stdout.flush()?;
            }
            Event::Input(prompt) => {
                if input.is_none() {
                    let interface = Interface::new("macroplay")?;
                    interface.set_report_signal(Signal::Interrupt, true);
                    input = Some(interface);
                }
                if let Some(interface) = &input {
                    interface.set_prompt(&prompt)?;
                    match interface.read_line()? {
                        ReadResult::Input(string) => {
                            if runtime.enter(&string) {
                                interface.add_history_unique(string);
                            }
                        }
                        ReadResult::Signal(_) | ReadResult::Eof => runtime.interrupt(),
                    }
                }
            }
            Event::Sleep(duration) => std::thread::sleep(duration),
            Event::Exec(command) => spawn(&command),
            Event::Emit(emission) => {
                debug!("{}", emission);
                if let Err(error) = emission.send(backend) {
                    warn!("{}", error);
                }
            }
            Event::Error(error) => {
                report(&error);
                return Ok(1);
            }
        }
    }
}

/// Starts `sh -c command` without waiting. A detached thread reaps it.
fn spawn(command: &str) {
    match Command::new("sh").arg("-c").arg(command).spawn() {
        Ok(mut child) => {
            debug!("started process {}: {}", child.id(), command);
            std::thread::spawn(move || match child.wait() {
                Ok(status) => debug!("process {} exited with {}", child.id(), status),
                Err(error) => warn!("process {}: {}", child.id(), error),
            });
        }
        Err(error) => warn!("{}: {}", command, error),
    }
}

fn report(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
}

fn load(path: &Path) -> Result<Script, Error> {
    let reader = match File::open(path) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; msg.as_str())),
                _ => return Err(error!(InternalError; msg.as_str())),
            }
        }
    };
    let mut script = Script::new();
    for line in reader.lines() {
        match line {
            Ok(line) => script.push(&line),
            Err(error) => return Err(error!(InternalError; error.to_string().as_str())),
        }
    }
    Ok(script)
}
