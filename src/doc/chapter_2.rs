/*!
# Commands
*/

#[path = "commands/break.rs"]
#[allow(non_snake_case)]
pub mod BREAK;

#[path = "commands/click.rs"]
#[allow(non_snake_case)]
pub mod CLICK;

#[path = "commands/delay.rs"]
#[allow(non_snake_case)]
pub mod DELAY;

#[path = "commands/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "commands/exec.rs"]
#[allow(non_snake_case)]
pub mod EXEC;

#[path = "commands/fileopen.rs"]
#[allow(non_snake_case)]
pub mod FILEOPEN;

#[path = "commands/focus.rs"]
#[allow(non_snake_case)]
pub mod FOCUS;

#[path = "commands/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "commands/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "commands/in.rs"]
#[allow(non_snake_case)]
pub mod IN;

#[path = "commands/keycode.rs"]
#[allow(non_snake_case)]
pub mod KEYCODE;

#[path = "commands/keystr.rs"]
#[allow(non_snake_case)]
pub mod KEYSTR;

#[path = "commands/keysym.rs"]
#[allow(non_snake_case)]
pub mod KEYSYM;

#[path = "commands/move.rs"]
#[allow(non_snake_case)]
pub mod MOVE;

#[path = "commands/movewindow.rs"]
#[allow(non_snake_case)]
pub mod MOVEWINDOW;

#[path = "commands/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "commands/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "commands/send.rs"]
#[allow(non_snake_case)]
pub mod SEND;

#[path = "commands/set.rs"]
#[allow(non_snake_case)]
pub mod SET;
