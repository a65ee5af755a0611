use crate::lang::Script;
use crate::mach::{Emission, Event, Runtime, Settings, Var};


fn runtime(source: &str) -> Runtime {
    Runtime::new(Script::load_str(source), Settings::default(), Var::new())
}

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

/// Transcript of everything but flushes, one event per line for
/// anything that is not printed text.
fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
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
                s.push_str(&format!("[sleep {}us]\n", d.as_micros()));
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
