use macroplay::error;
use macroplay::lang::{Error, Script};
use macroplay::mach::{Emission, Event, FileSystem, Runtime, Settings, Var};
use std::collections::HashMap;

pub fn runtime(source: &str) -> Runtime {
    Runtime::new(Script::load_str(source), Settings::default(), Var::new())
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

/// Printed text verbatim, other events bracketed one per line.
/// Flushes are left out.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
            Event::Input(ps) => {
                s.push_str(&ps);
                break;
            }
            Event::Sleep(d) => {
                s.push_str(&format!("[sleep {}ms]\n", d.as_millis()));
            }
            Event::Exec(cmd) => {
                s.push_str(&format!("[exec {}]\n", cmd));
            }
            Event::Emit(Emission::Flush) => {}
            Event::Emit(e) => {
                s.push_str(&format!("[{}]\n", e));
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}

/// Files held in memory, keyed by path.
#[derive(Default)]
pub struct MemoryFiles {
    files: HashMap<String, String>,
}

impl MemoryFiles {
    pub fn with(mut self, path: &str, text: &str) -> MemoryFiles {
        self.files.insert(path.to_string(), text.to_string());
        self
    }
}

impl FileSystem for MemoryFiles {
    fn length(&self, path: &str) -> Result<u64, Error> {
        Ok(self.read_to_string(path)?.len() as u64)
    }

    fn read_to_string(&self, path: &str) -> Result<String, Error> {
        match self.files.get(path) {
            Some(text) => Ok(text.clone()),
            None => Err(error!(FileNotFound; path)),
        }
    }
}
