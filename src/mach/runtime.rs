use super::{evaluate, expand, number_to_string, Emission, FileSystem, Files, Op, Settings};
use super::{Stack, Var, BREAK_TARGET};
use crate::error;
use crate::lang::{Address, Error, Line, Script};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, Error>;

/// ## Events returned by `execute`
///
/// The runtime performs no console, process, or display I/O itself.
/// Everything it wants done outside is handed back as an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Script finished, ran `End`, or was stopped by an error.
    Stopped,
    /// Cycle budget used up; call `execute` again.
    Running,
    Print(String),
    /// Waiting on `enter` with one token of input.
    Input(String),
    Sleep(Duration),
    /// Shell command to start without waiting.
    Exec(String),
    Emit(Emission),
    /// Fatal; the runtime is stopped.
    Error(Error),
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Running,
    Input { reg: String, prompt: String },
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Flow {
    Next,
    /// `pc` is already set; run that line without the top level checks.
    Jump,
    Stop,
}

/// ## Macro runtime
///
/// One program counter for the whole run. Calls, returns, and breaks set
/// it and mark the next line as chained. A chained line runs as if called
/// from the line before it, so it skips the trailing `if` check and the
/// `EndIf` scan. Lines inside a true `If` block run the same way until
/// the `EndIf` that closes the block is reached by stepping forward.
pub struct Runtime {
    script: Script,
    settings: Settings,
    vars: Var,
    files: Files,
    calls: Stack<Address>,
    base: Address,
    pc: Address,
    chained: bool,
    blocks: usize,
    state: State,
    events: VecDeque<Event>,
}

impl Runtime {
    pub fn new(script: Script, settings: Settings, vars: Var) -> Runtime {
        let limit = format!("LIMIT {}", settings.max_depth);
        let calls = Stack::new(settings.max_depth, &limit);
        let pc = script.entry();
        Runtime {
            script,
            settings,
            vars,
            files: Files::default(),
            calls,
            base: 0,
            pc,
            chained: false,
            blocks: 0,
            state: State::Running,
            events: VecDeque::new(),
        }
    }

    pub fn with_file_system(self, fs: Box<dyn FileSystem>) -> Runtime {
        Runtime {
            files: Files::new(fs),
            ..self
        }
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    /// Number of calls waiting for a `Return`.
    pub fn depth(&self) -> usize {
        self.calls.len()
    }

    pub fn is_stopped(&self) -> bool {
        self.state == State::Stopped && self.events.is_empty()
    }

    /// Answers an `Event::Input`. Only the first token is kept.
    /// Returns false when nothing was waiting or the input was blank.
    pub fn enter(&mut self, input: &str) -> bool {
        let reg = match &self.state {
            State::Input { reg, .. } => reg.clone(),
            _ => return false,
        };
        match input.split_whitespace().next() {
            Some(token) => {
                self.vars.store(&reg, token.to_string());
                self.state = State::Running;
                true
            }
            None => false,
        }
    }

    pub fn interrupt(&mut self) {
        if self.state == State::Stopped {
            return;
        }
        self.state = State::Stopped;
        self.events.clear();
        self.events
            .push_back(Event::Error(error!(Interrupted, Some(self.pc))));
    }

    /// Runs up to `cycles` lines, stopping early at the first event.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if let Some(event) = self.events.pop_front() {
                return event;
            }
            match &self.state {
                State::Stopped => return Event::Stopped,
                State::Input { prompt, .. } => return Event::Input(format!("{} ", prompt)),
                State::Running => {}
            }
            if let Err(error) = self.step() {
                self.state = State::Stopped;
                self.events.push_back(Event::Error(error));
            }
        }
        match self.events.pop_front() {
            Some(event) => event,
            None => Event::Running,
        }
    }

    fn step(&mut self) -> Result<()> {
        let len = self.script.len();
        if self.pc >= len {
            if self.blocks > 0 {
                return Err(error!(IfWithoutEndIf));
            }
            if self.chained && self.pc > len {
                return Err(error!(LineOutOfRange, Some(self.pc)));
            }
            self.state = State::Stopped;
            return Ok(());
        }
        let line = match self.script.line(self.pc) {
            Some(line) => line.clone(),
            None => return Err(error!(LineOutOfRange, Some(self.pc))),
        };
        let chained = std::mem::replace(&mut self.chained, false);
        let line = if chained {
            line
        } else if self.blocks > 0 {
            if line.is_end_if() {
                self.blocks -= 1;
                self.pc += 1;
                return Ok(());
            }
            line
        } else {
            match line.trailing_if() {
                Some((command, condition)) => {
                    if !evaluate(&condition, &mut self.vars) {
                        self.pc += 1;
                        return Ok(());
                    }
                    command
                }
                None => line,
            }
        };
        match self.dispatch(&line)? {
            Flow::Next => self.pc += 1,
            Flow::Jump => self.chained = true,
            Flow::Stop => {}
        }
        Ok(())
    }

    fn dispatch(&mut self, line: &Line) -> Result<Flow> {
        let flow = match Op::decode(line) {
            Ok(op) => {
                debug!(line = self.pc, "{}", op);
                match self.run(op) {
                    Ok(flow) => flow,
                    Err(error) if error.is_fatal() => return Err(error),
                    Err(error) => {
                        self.diagnostic(error);
                        Flow::Next
                    }
                }
            }
            Err(error) => {
                self.diagnostic(error);
                Flow::Next
            }
        };
        // After a call this flush lands ahead of the callee's events.
        // Flushing is idempotent so the order is left as is.
        if flow != Flow::Stop {
            self.emit(Emission::Flush);
        }
        Ok(flow)
    }

    fn diagnostic(&self, error: Error) {
        let error = match error.line() {
            Some(_) => error,
            None => error.in_line(Some(self.pc)),
        };
        warn!("{}", error);
    }

    fn emit(&mut self, emission: Emission) {
        self.events.push_back(Event::Emit(emission));
    }

    fn print(&mut self, s: String) {
        self.events.push_back(Event::Print(s));
    }

    fn sleep(&mut self, duration: Duration) {
        self.events.push_back(Event::Sleep(duration));
    }

    fn run(&mut self, op: Op) -> Result<Flow> {
        match op {
            Op::Nop | Op::Restart => {}
            Op::End => {
                self.state = State::Stopped;
                return Ok(Flow::Stop);
            }
            Op::EndL => self.print("\n".to_string()),
            Op::Set(dest, value) => {
                if !self.vars.count(&dest) {
                    let value = expand(&value, &self.vars);
                    self.vars.store(&dest, value);
                }
            }
            Op::FileOpen(handle, path) => {
                let path = expand(&path, &self.vars);
                let file = self.files.open(&handle, path.trim())?;
                debug!("opened {} ({} bytes)", file.path, file.length);
            }
            Op::FileReadAll(handle, reg) => {
                let text = self.files.read_all(&handle)?;
                self.vars.store(&reg, text);
            }
            Op::FileLength(handle, reg) => {
                let length = self.files.length(&handle)?;
                self.vars.store(&reg, length.to_string());
            }
            Op::In(reg, prompt) => self.state = State::Input { reg, prompt },
            Op::Preg(reg) => {
                let s = format!("{}\n", self.vars.fetch(&reg));
                self.print(s);
            }
            Op::Print(text) => {
                let s = expand(&text, &self.vars);
                self.print(s);
            }
            Op::Delay(n) => self.sleep(Duration::from_secs(n)),
            Op::USleep(n) => self.sleep(Duration::from_micros(n)),
            Op::MouseDelay(n) => self.settings.mouse_delay = n,
            Op::KeyDelay(n) => self.settings.key_delay = n,
            Op::Exec(command) => self.events.push_back(Event::Exec(command)),
            Op::If(condition) => {
                if evaluate(&condition, &mut self.vars) {
                    self.blocks += 1;
                } else {
                    match self.script.next_end_if(self.pc + 1) {
                        Some(addr) => self.pc = addr,
                        None => return Err(error!(IfWithoutEndIf, Some(self.pc))),
                    }
                }
            }
            Op::EndIf => {}
            Op::Goto(label) => match self.script.label(&label) {
                Some(target) => return self.call(target),
                None => return Err(error!(UndefinedLabel; &label)),
            },
            Op::Call(name) => {
                if let Some(target) = self.script.label(&name) {
                    return self.call(target);
                }
            }
            Op::Return => {
                self.pc = match self.calls.pop() {
                    Some(addr) => addr,
                    None => self.base,
                };
                return Ok(Flow::Jump);
            }
            Op::Break => return self.break_out(),
            Op::Button(button, pressed) => self.emit(Emission::Button {
                button,
                pressed,
                delay: self.settings.delay,
            }),
            Op::Click => {
                let delay = self.settings.delay;
                self.emit(Emission::Button {
                    button: 1,
                    pressed: true,
                    delay,
                });
                self.emit(Emission::Flush);
                self.sleep(Duration::from_millis(200));
                self.emit(Emission::Button {
                    button: 1,
                    pressed: false,
                    delay,
                });
            }
            Op::Motion(x, y) => self.emit(Emission::Motion {
                x: self.settings.scale(x),
                y: self.settings.scale(y),
                delay: self.settings.mouse_delay,
            }),
            Op::RelativeMotion(dx, dy) => self.emit(Emission::RelativeMotion {
                dx: self.settings.scale(dx),
                dy: self.settings.scale(dy),
                delay: self.settings.mouse_delay,
            }),
            Op::Keycode(code, pressed) => self.emit(Emission::Keycode {
                code,
                pressed,
                delay: self.settings.key_delay,
            }),
            Op::Keysym(sym, stroke) => self.emit(Emission::Keysym {
                sym,
                stroke,
                delay: self.settings.key_delay,
            }),
            Op::Send(text) => {
                let text = expand(&text, &self.vars);
                self.emit(Emission::Text(text));
            }
            Op::MoveWindow(name, x, y) => self.emit(Emission::MoveWindow { name, x, y }),
            Op::Focus(name) => self.emit(Emission::Focus(name)),
        }
        Ok(Flow::Next)
    }

    fn call(&mut self, target: Address) -> Result<Flow> {
        let continuation = self.pc + 1;
        if self.calls.is_empty() {
            self.base = continuation;
            self.vars
                .store(BREAK_TARGET, number_to_string(continuation as f64));
        }
        if let Err(error) = self.calls.push(continuation) {
            return Err(error.in_line(Some(self.pc)));
        }
        self.pc = target;
        Ok(Flow::Jump)
    }

    fn break_out(&mut self) -> Result<Flow> {
        self.calls.clear();
        let target = self.vars.fetch(BREAK_TARGET).trim();
        self.pc = if target.is_empty() {
            0
        } else {
            match target.parse::<f64>() {
                Ok(n) if n >= 0.0 => n as Address,
                _ => return Err(error!(LineOutOfRange, Some(self.pc))),
            }
        };
        Ok(Flow::Jump)
    }
}
